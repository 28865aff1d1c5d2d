// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 将合成销售序列导出为 CSV，便于人工核对
// 用法: generate_test_data [output_dir] [seed]
// 输出:
//   <output_dir>/01_seeded_sales.csv     固定种子，全目录
//   <output_dir>/02_no_jitter_sales.csv  关闭抖动，全目录
//   <output_dir>/03_ecu_plant1.csv       关闭抖动，ECU × plant-1 × 4 区域
// ==========================================

use chrono::Local;
use csv::Writer;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

use sales_capacity_analytics::catalog::Catalog;
use sales_capacity_analytics::engine::{FixtureGenerator, JitterSource};
use sales_capacity_analytics::ProductData;

// CSV 表头（每个数据点一行）
const CSV_HEADER: &[&str] = &[
    "row_id",
    "product",
    "category",
    "plant",
    "area",
    "fiscal_year",
    "sales",
    "forecast",
    "lower",
    "upper",
    "generated_at",
];

const DEFAULT_SEED: u64 = 20_250_401;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let output_dir = args
        .next()
        .unwrap_or_else(|| "tests/fixtures/datasets".to_string());
    let seed = match args.next() {
        Some(raw) => raw.trim().parse::<u64>()?,
        None => DEFAULT_SEED,
    };

    fs::create_dir_all(&output_dir)?;
    println!("开始生成测试数据集... (seed={})", seed);

    let generator = FixtureGenerator::new();
    let catalog = Catalog::default();

    // 1. 固定种子
    let rows = generator.generate(&catalog, &mut JitterSource::seeded(seed));
    write_rows(Path::new(&output_dir).join("01_seeded_sales.csv"), &rows)?;

    // 2. 关闭抖动
    let rows = generator.generate(&catalog, &mut JitterSource::Disabled);
    write_rows(Path::new(&output_dir).join("02_no_jitter_sales.csv"), &rows)?;

    // 3. ECU 单工厂四区域
    let small = catalog.with_products(&["ecu"]).with_plants(&["plant-1"]);
    let rows = generator.generate(&small, &mut JitterSource::Disabled);
    write_rows(Path::new(&output_dir).join("03_ecu_plant1.csv"), &rows)?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn write_rows(path: impl AsRef<Path>, rows: &[ProductData]) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    wtr.write_record(CSV_HEADER)?;

    let mut count = 0usize;
    for row in rows {
        for point in &row.data {
            let (lower, upper) = match point.confidence {
                Some(ci) => (ci.lower.to_string(), ci.upper.to_string()),
                None => (String::new(), String::new()),
            };
            wtr.write_record([
                row.id.clone(),
                row.name.clone(),
                row.category.label().to_string(),
                row.plant.clone(),
                row.area.clone(),
                point.fiscal_year.label(),
                point.sales.to_string(),
                point.forecast.to_string(),
                lower,
                upper,
                generated_at.clone(),
            ])?;
            count += 1;
        }
    }

    wtr.flush()?;
    println!("✓ 生成 {} ({}条)", path.display(), count);
    Ok(())
}
