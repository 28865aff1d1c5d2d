// ==========================================
// 销售预测与产能规划分析系统 - 静态目录层
// ==========================================
// 职责: 产品/工厂/区域目录与乘数、产能规划夹具、
//       产品洞察文案、提示词库、助手固定回复
// ==========================================

pub mod capacity;
pub mod insights;
pub mod prompts;
pub mod responses;

use crate::domain::{Area, Category, Plant, Product};
use serde::{Deserialize, Serialize};

// ==========================================
// Catalog - 生成目录
// ==========================================
// 说明: 以值形式传入生成器，测试可构造更小的目录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub products: Vec<Product>,
    pub plants: Vec<Plant>,
    pub areas: Vec<Area>,
    /// 类别乘数；缺省类别按 1.0 处理
    pub category_variation: Vec<(Category, f64)>,
}

impl Catalog {
    /// 类别乘数
    pub fn category_variation(&self, category: Category) -> f64 {
        self.category_variation
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| *v)
            .unwrap_or(1.0)
    }

    /// 组合数（产品 × 工厂 × 区域）
    pub fn row_count(&self) -> usize {
        self.products.len() * self.plants.len() * self.areas.len()
    }

    /// 按名称查找产品
    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// 按 ID 查找产品
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 保留指定工厂，返回新目录
    pub fn with_plants(mut self, plant_ids: &[&str]) -> Self {
        self.plants.retain(|p| plant_ids.contains(&p.id.as_str()));
        self
    }

    /// 保留指定产品，返回新目录
    pub fn with_products(mut self, product_ids: &[&str]) -> Self {
        self.products.retain(|p| product_ids.contains(&p.id.as_str()));
        self
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: vec![
                product("ecu", "ECU", Category::Electrification, 4_200_000.0, 0.15),
                product("inverter", "Inverter", Category::Electrification, 3_600_000.0, 0.14),
                product("uc-injector", "UC Injector", Category::PowerTrain, 2_800_000.0, 0.11),
                product("acg", "ACG/ACG-S", Category::PowerTrain, 2_600_000.0, 0.11),
                product("motor", "Motor", Category::Components, 2_400_000.0, 0.10),
                product("alternator", "Alternator", Category::Components, 2_000_000.0, 0.10),
                product("thermal", "Thermal Module", Category::Thermal, 1_800_000.0, 0.075),
                product("ecu-2w", "2W ECU", Category::Mobility, 2_200_000.0, 0.12),
            ],
            plants: vec![
                plant("plant-1", "North Plant", 1.0),
                plant("plant-2", "South Plant", 0.85),
                plant("plant-3", "East Plant", 1.1),
                plant("plant-4", "West Plant", 0.75),
            ],
            areas: vec![
                area("area-1", "North America", 1.0),
                area("area-2", "Europe", 0.9),
                area("area-3", "Asia Pacific", 1.3),
                area("area-4", "Latin America", 0.7),
            ],
            category_variation: vec![
                (Category::Electrification, 1.15),
                (Category::PowerTrain, 1.0),
                (Category::Components, 0.9),
                (Category::Thermal, 0.85),
                (Category::Mobility, 1.05),
            ],
        }
    }
}

fn product(id: &str, name: &str, category: Category, base_value: f64, growth_rate: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        base_value,
        growth_rate,
    }
}

fn plant(id: &str, name: &str, multiplier: f64) -> Plant {
    Plant {
        id: id.to_string(),
        name: name.to_string(),
        multiplier,
    }
}

fn area(id: &str, name: &str, multiplier: f64) -> Area {
    Area {
        id: id.to_string(),
        name: name.to_string(),
        multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = Catalog::default();
        assert_eq!(catalog.products.len(), 8);
        assert_eq!(catalog.plants.len(), 4);
        assert_eq!(catalog.areas.len(), 4);
        assert_eq!(catalog.row_count(), 128);
        assert_eq!(catalog.category_variation(Category::Electrification), 1.15);
    }

    #[test]
    fn test_missing_category_variation_defaults_to_one() {
        let mut catalog = Catalog::default();
        catalog.category_variation.clear();
        assert_eq!(catalog.category_variation(Category::Thermal), 1.0);
    }

    #[test]
    fn test_narrowing() {
        let catalog = Catalog::default().with_plants(&["plant-1"]).with_products(&["ecu"]);
        assert_eq!(catalog.row_count(), 4);
        assert!(catalog.product_by_name("ECU").is_some());
        assert!(catalog.product_by_id("motor").is_none());
    }
}
