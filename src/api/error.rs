// ==========================================
// 排班引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,把下层错误转换为调用方可读的消息
// 说明: 人手不足、无候选等都不是错误,只有配置与入参非法才返回 Err
// ==========================================

use crate::config::error::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Parse(e) => ApiError::InvalidInput(format!("配置 JSON 解析失败: {}", e)),
            other => ApiError::InvalidConfig(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
