// ==========================================
// 销售预测与产能规划分析系统 - 领域类型定义
// ==========================================
// 职责: 财年标签、产品类别、图表类型、洞察分级等枚举与值对象
// ==========================================

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 财年 (Fiscal Year)
// ==========================================
// 格式: FYxx（两位年份，同一世纪内）
// 序列化格式: "FY25"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalYear(u8);

impl FiscalYear {
    /// 历史数据首年
    pub const FIRST_HISTORICAL: FiscalYear = FiscalYear(19);
    /// 历史数据末年（当前财年）
    pub const LAST_HISTORICAL: FiscalYear = FiscalYear(25);
    /// 预测首年
    pub const FIRST_FORECAST: FiscalYear = FiscalYear(26);
    /// 预测末年
    pub const LAST_FORECAST: FiscalYear = FiscalYear(35);

    /// 创建财年（仅接受两位年份）
    pub fn new(year: u8) -> Option<Self> {
        if year < 100 {
            Some(FiscalYear(year))
        } else {
            None
        }
    }

    /// 两位年份
    pub fn year(&self) -> u8 {
        self.0
    }

    /// 相对 FY19 的年份偏移（生成公式中的 i / j）
    pub fn offset(&self) -> i32 {
        self.0 as i32 - Self::FIRST_HISTORICAL.0 as i32
    }

    /// 是否处于预测区间
    pub fn is_forecast_horizon(&self) -> bool {
        *self >= Self::FIRST_FORECAST
    }

    /// 标签，例如 "FY25"
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// FY19..=FY35 全部财年
    pub fn full_range() -> impl Iterator<Item = FiscalYear> {
        (Self::FIRST_HISTORICAL.0..=Self::LAST_FORECAST.0).map(FiscalYear)
    }

    /// FY19..=FY25 历史财年
    pub fn historical_range() -> impl Iterator<Item = FiscalYear> {
        (Self::FIRST_HISTORICAL.0..=Self::LAST_HISTORICAL.0).map(FiscalYear)
    }

    /// FY26..=FY35 预测财年
    pub fn forecast_range() -> impl Iterator<Item = FiscalYear> {
        (Self::FIRST_FORECAST.0..=Self::LAST_FORECAST.0).map(FiscalYear)
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FY{:02}", self.0)
    }
}

impl FromStr for FiscalYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix("FY")
            .ok_or_else(|| format!("财年标签必须以 FY 开头: {}", s))?;
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("财年标签必须为两位年份: {}", s));
        }
        let year: u8 = digits
            .parse()
            .map_err(|_| format!("无法解析财年: {}", s))?;
        Ok(FiscalYear(year))
    }
}

impl Serialize for FiscalYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FiscalYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// ==========================================
// 产品类别 (Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electrification,
    PowerTrain,
    Components,
    Thermal,
    Mobility,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electrification,
        Category::PowerTrain,
        Category::Components,
        Category::Thermal,
        Category::Mobility,
    ];

    /// 显示名称（筛选器中的取值）
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electrification => "Electrification",
            Category::PowerTrain => "Power train",
            Category::Components => "Components",
            Category::Thermal => "Thermal",
            Category::Mobility => "Mobility",
        }
    }

    /// 按显示名称查找
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==========================================
// 图表类型 (Chart Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

// ==========================================
// 产品洞察类型 / 影响等级
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Trend,
    Alert,
    Opportunity,
}

/// 影响/优先级等级（高/中/低）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "low"),
            Level::Medium => write!(f, "medium"),
            Level::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 产能洞察类型 / 竞争程度
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapacityInsightType {
    Expansion,
    NewRegion,
    Optimization,
    Risk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

// ==========================================
// 页面视图 (View)
// ==========================================
// 静态链接可达，不携带影响数据模型的参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Landing,
    Dashboard,
    CapacityPlanning,
    AiChat,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Landing,
        View::Dashboard,
        View::CapacityPlanning,
        View::AiChat,
    ];

    /// 视图名称
    pub fn name(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Dashboard => "dashboard",
            View::CapacityPlanning => "capacity-planning",
            View::AiChat => "ai-chat",
        }
    }

    /// 路由路径
    pub fn route(&self) -> &'static str {
        match self {
            View::Landing => "/",
            View::Dashboard => "/dashboard",
            View::CapacityPlanning => "/capacity-planning",
            View::AiChat => "/ai-chat",
        }
    }

    /// 解析路由路径或视图名称；未知路由返回 None
    pub fn from_route(route: &str) -> Option<View> {
        let trimmed = route.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.route() == normalized || v.name() == normalized)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
