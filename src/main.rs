// ==========================================
// 销售预测与产能规划分析系统 - 命令行入口
// ==========================================
// 用法:
//   sales-capacity-analytics dashboard [product] [plant] [area] [category]
//   sales-capacity-analytics compare <product>
//   sales-capacity-analytics capacity
//   sales-capacity-analytics chat <text...>
//   sales-capacity-analytics ask-capacity <text...>
//   sales-capacity-analytics prompts
//   sales-capacity-analytics export <product> <path>
//   sales-capacity-analytics session <product> [product...]
//   sales-capacity-analytics views [route]
// 输出: stdout 为 pretty JSON（export 写 CSV 文件），日志走 stderr
// ==========================================

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use serde_json::json;

use sales_capacity_analytics::app::{navigate, DashboardAction};
use sales_capacity_analytics::engine::{FilterSelection, ALL};
use sales_capacity_analytics::{logging, AppState, View, APP_NAME, VERSION};

const USAGE: &str = "usage: sales-capacity-analytics <dashboard|compare|capacity|chat|ask-capacity|prompts|export|session|views> [args]";

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    tracing::info!("{} v{}", APP_NAME, VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!(USAGE);
    };
    let rest = &args[1..];

    let state = AppState::from_default_config().context("无法初始化AppState")?;

    match command.as_str() {
        "dashboard" => {
            let product = match rest.first() {
                Some(p) => p.clone(),
                None => state
                    .dashboard_api
                    .default_product()
                    .ok_or_else(|| anyhow!("目录中没有产品"))?
                    .to_string(),
            };
            let selection = FilterSelection::for_product(product)
                .with_plant(arg_or_all(rest, 1))
                .with_area(arg_or_all(rest, 2))
                .with_category(arg_or_all(rest, 3));
            print_json(&state.dashboard_api.product_view(&selection)?)?;
        }
        "compare" => {
            let product = required(rest, 0, "product")?;
            let yearly = state.dashboard_api.yearly_comparison(product)?;
            let plants = state.dashboard_api.plant_distribution(product)?;
            print_json(&json!({ "product": product, "yearly": yearly, "plants": plants }))?;
        }
        "capacity" => {
            print_json(&state.capacity_api.overview())?;
        }
        "chat" => {
            let text = rest.join(" ");
            let transcript = state.chat_api.exchange(&state.chat_api.new_transcript(), &text);
            print_json(&transcript)?;
        }
        "ask-capacity" => {
            print_json(&state.chat_api.ask_capacity(&rest.join(" ")))?;
        }
        "prompts" => {
            print_json(&state.chat_api.prompt_library())?;
        }
        "export" => {
            let product = required(rest, 0, "product")?;
            let path = required(rest, 1, "path")?;
            let view = state
                .dashboard_api
                .product_view(&FilterSelection::for_product(product))?;
            let rows = state
                .export_api
                .export_forecast_csv(&view.forecast_table, path)
                .with_context(|| format!("导出到 {} 失败", path))?;
            print_json(&json!({ "path": path, "rows": rows }))?;
        }
        "session" => {
            if rest.is_empty() {
                bail!("session 需要至少一个产品名称");
            }
            // 连续选择多个产品，只有最后一次选择会被提交
            let session = state.dashboard_session();
            let mut handles = Vec::with_capacity(rest.len());
            for product in rest {
                handles.push(
                    session
                        .dispatch(DashboardAction::SelectProduct(product.clone()))
                        .await,
                );
            }
            let mut outcomes = Vec::with_capacity(handles.len());
            for handle in handles {
                outcomes.push(format!("{:?}", handle.await?));
            }
            print_json(&json!({ "outcomes": outcomes, "state": session.snapshot().await }))?;
        }
        "views" => match rest.first() {
            Some(route) => print_json(&navigate(View::Landing, route))?,
            None => {
                let views: Vec<_> = View::ALL
                    .iter()
                    .map(|v| json!({ "name": v.name(), "route": v.route() }))
                    .collect();
                print_json(&views)?;
            }
        },
        other => bail!("未知命令: {}\n{}", other, USAGE),
    }

    Ok(())
}

fn arg_or_all(args: &[String], index: usize) -> String {
    args.get(index).cloned().unwrap_or_else(|| ALL.to_string())
}

fn required<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("缺少参数 <{}>\n{}", name, USAGE))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
