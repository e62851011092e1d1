// ==========================================
// 排班引擎 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 取值范围错误 =====
    #[error("日期超出范围 (field={field}): {value}，期望 1..=7")]
    InvalidDay { field: String, value: u8 },

    #[error("小时超出范围 (field={field}): {value}，期望 0..=23")]
    InvalidHour { field: String, value: u8 },

    #[error("集合不能为空: {0}")]
    EmptySet(String),

    #[error("权重无效 (field={field}): {value}，必须为有限非负数")]
    InvalidWeight { field: String, value: f64 },

    #[error("配置值无效 (field={field}): {message}")]
    InvalidValue { field: String, message: String },

    // ===== 读取/解析错误 =====
    #[error("配置文件读取失败: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 校验单个权重
pub(crate) fn check_weight(field: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight {
            field: field.to_string(),
            value,
        })
    }
}
