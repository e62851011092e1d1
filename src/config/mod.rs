// ==========================================
// 排班引擎 - 配置层
// ==========================================
// 职责: 排班运行配置、评分权重、配置文件加载
// ==========================================

pub mod config_manager;
pub mod error;
pub mod run_config;
pub mod scoring_weights;

// 重导出核心配置
pub use config_manager::{ConfigManager, EngineConfig};
pub use error::{ConfigError, ConfigResult};
pub use run_config::RunConfig;
pub use scoring_weights::{AvailabilityRules, EmergencyWeights, ScoringWeights};
