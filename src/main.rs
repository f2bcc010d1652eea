// ==========================================
// 装箱匹配系统 - 命令行入口
// ==========================================
// 用法: carton-match <箱型表> <SKU表> [输出CSV] [配置JSON]
// 流程: 装载两张源表 → 匹配引擎 → 打印/导出报表
// ==========================================

use carton_match::config::ImportConfig;
use carton_match::engine::MatchOrchestrator;
use carton_match::importer::TableLoader;
use carton_match::report::ReportWriter;
use carton_match::{logging, APP_NAME, VERSION};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 箱型选择决策支持", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("运行失败: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        anyhow::bail!(
            "用法: {} <箱型表(.csv/.xlsx)> <SKU表(.csv/.xlsx)> [输出CSV] [配置JSON]",
            args.first().map(String::as_str).unwrap_or("carton-match")
        );
    }

    let carton_path = PathBuf::from(&args[1]);
    let sku_path = PathBuf::from(&args[2]);
    let output_path = args.get(3).map(PathBuf::from);
    let config_path = args.get(4).map(PathBuf::from);

    // 加载配置(未指定时用默认列名)
    let config = match config_path {
        Some(path) => ImportConfig::from_json_file(&path)?,
        None => ImportConfig::default(),
    };

    // 装载两张源表
    let loader = TableLoader::new(config);
    let cartons = loader.load_cartons(&carton_path)?;
    let items = loader.load_sku_items(&sku_path)?;

    // 执行匹配流程
    let result = MatchOrchestrator::execute(cartons, items)?;

    // 打印报表
    println!("\n{}", ReportWriter::render_text(&result.rows));
    tracing::info!(
        case_count = result.case_count,
        perfect_fit_count = result.perfect_fit_count,
        fallback_count = result.fallback_count,
        no_box_count = result.no_box_count,
        "匹配完成"
    );

    // 可选 CSV 导出
    if let Some(path) = output_path {
        ReportWriter::write_csv(&result.rows, &path)?;
        tracing::info!(path = %path.display(), "报表已导出");
    }

    Ok(())
}
