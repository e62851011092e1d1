// ==========================================
// 排班自动分配与代班评分引擎 - 命令行入口
// ==========================================
// 用法: shift-roster <input.json> [config.json]
// 输入: { "workers": [ {行数据}, ... ] }
// 输出: 排班结果 JSON（stdout）,日志输出到 stderr
// 环境变量:
// - SHIFT_ROSTER_LOG_FORMAT=json: 日志以 JSON 行输出
// - SHIFT_ROSTER_LOCALE=ja|en: 告警文本语言（默认 ja）
// ==========================================

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use shift_roster_engine::{i18n, logging, ConfigManager, RosterApi};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct PlanInput {
    workers: Vec<Value>,
}

fn main() -> Result<()> {
    match std::env::var("SHIFT_ROSTER_LOG_FORMAT").as_deref() {
        Ok("json") => logging::init_json(),
        _ => logging::init(),
    }
    if let Ok(locale) = std::env::var("SHIFT_ROSTER_LOCALE") {
        i18n::set_locale(&locale);
    }

    tracing::info!("==================================================");
    tracing::info!("{}", shift_roster_engine::APP_NAME);
    tracing::info!("系统版本: {}", shift_roster_engine::VERSION);
    tracing::info!("语言: {}", i18n::current_locale());
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let Some(input_path) = args.next().map(PathBuf::from) else {
        bail!("用法: shift-roster <input.json> [config.json]");
    };

    let manager = match args.next() {
        Some(path) => ConfigManager::from_file(&path)
            .with_context(|| format!("无法加载配置文件: {}", path))?,
        None => ConfigManager::new(),
    };

    let raw = std::fs::read_to_string(&input_path)
        .with_context(|| format!("无法读取输入文件: {}", input_path.display()))?;
    let input: PlanInput = serde_json::from_str(&raw)
        .with_context(|| format!("输入文件格式错误: {}", input_path.display()))?;

    let api = RosterApi::from_manager(&manager)?;
    let response = api.plan_shifts_from_rows(&input.workers);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
