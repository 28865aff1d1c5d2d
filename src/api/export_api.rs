// ==========================================
// 销售预测与产能规划分析系统 - 导出 API
// ==========================================
// 职责: 预测明细表导出为 CSV（文件或任意 Writer）
// ==========================================

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::engine::ForecastTable;

/// CSV 表头
pub const FORECAST_CSV_HEADER: &[&str] = &[
    "fiscal_year",
    "sales",
    "growth_pct",
    "lower",
    "upper",
];

#[derive(Debug, Default)]
pub struct ExportApi {
    // 无状态
}

impl ExportApi {
    pub fn new() -> Self {
        Self {}
    }

    /// 写入任意 Writer，返回数据行数（不含表头）
    pub fn write_forecast_csv<W: Write>(&self, table: &ForecastTable, writer: W) -> ApiResult<usize> {
        if table.is_empty() {
            return Err(ApiError::ExportError("预测明细为空，无可导出数据".to_string()));
        }

        let mut wtr = Writer::from_writer(writer);
        wtr.write_record(FORECAST_CSV_HEADER)?;
        for row in &table.rows {
            let (lower, upper) = match row.range {
                Some(range) => (range.lower.to_string(), range.upper.to_string()),
                None => (String::new(), String::new()),
            };
            wtr.write_record([
                row.fiscal_year.label(),
                row.sales.to_string(),
                format!("{:.2}", row.growth),
                lower,
                upper,
            ])?;
        }
        wtr.flush()?;
        Ok(table.rows.len())
    }

    /// 导出到文件
    pub fn export_forecast_csv(&self, table: &ForecastTable, path: impl AsRef<Path>) -> ApiResult<usize> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let count = self.write_forecast_csv(table, file)?;
        info!(path = %path.display(), rows = count, "预测明细已导出");
        Ok(count)
    }
}
