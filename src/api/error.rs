// ==========================================
// 销售预测与产能规划分析系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换配置/IO/CSV错误为可读的错误消息
// 说明: 生成/聚合/助手均为全函数，错误只出现在边界（输入校验、配置、导出）
// ==========================================

use crate::config::ConfigError;
use crate::engine::{FilterOptions, FilterSelection, ALL};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    /// 筛选值不在可选项中
    #[error("未知筛选值: {dimension}={value}")]
    UnknownFilterValue { dimension: String, value: String },

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("导出失败: {0}")]
    ExportError(String),

    #[error("CSV写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 输入校验辅助函数
// ==========================================

/// 校验产品名称非空
pub fn validate_product_name(product: &str) -> ApiResult<()> {
    if product.trim().is_empty() {
        return Err(ApiError::InvalidInput("产品名称不能为空".to_string()));
    }
    Ok(())
}

/// 校验筛选条件均取自可选项
///
/// 聚合本身对未知值返回兜底数据；API 层提前拒绝，避免把兜底当成真实结果
pub fn validate_selection(options: &FilterOptions, selection: &FilterSelection) -> ApiResult<()> {
    validate_product_name(&selection.product)?;

    if !options.products.iter().any(|p| p == &selection.product) {
        return Err(ApiError::NotFound(format!("产品{}不存在", selection.product)));
    }

    let checks = [
        ("plant", &selection.plant, &options.plants),
        ("area", &selection.area, &options.areas),
        ("category", &selection.category, &options.categories),
    ];
    for (dimension, value, choices) in checks {
        if value != ALL && !choices.iter().any(|c| &c.value == value) {
            return Err(ApiError::UnknownFilterValue {
                dimension: dimension.to_string(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::AnalyticsConfig;
    use crate::engine::filter_options;

    #[test]
    fn test_validate_selection_accepts_catalog_values() {
        let options = filter_options(&Catalog::default());
        let selection = FilterSelection::for_product("ECU")
            .with_plant("plant-3")
            .with_category("Power train");
        assert!(validate_selection(&options, &selection).is_ok());
    }

    #[test]
    fn test_validate_selection_rejects_unknowns() {
        let options = filter_options(&Catalog::default());

        let err = validate_selection(&options, &FilterSelection::for_product("  ")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = validate_selection(&options, &FilterSelection::for_product("Widget")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err = validate_selection(&options, &FilterSelection::for_product("ECU").with_area("area-9"))
            .unwrap_err();
        match err {
            ApiError::UnknownFilterValue { dimension, value } => {
                assert_eq!(dimension, "area");
                assert_eq!(value, "area-9");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_error_converts() {
        let config = AnalyticsConfig {
            chat_delay_ms: 9_999,
            ..AnalyticsConfig::default()
        };
        let err: ApiError = config.validate().unwrap_err().into();
        assert!(matches!(err, ApiError::Config(_)));
        assert!(err.to_string().contains("chat_delay_ms"));
    }
}
