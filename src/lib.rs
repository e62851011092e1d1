// ==========================================
// 排班自动分配与代班评分引擎 - 核心库
// ==========================================
// 系统定位: 决策支持库（分配结果与推荐由人工最终确认）
// 范围: 两阶段排班分配 + 常规/紧急代班评分
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 运行配置与评分权重
pub mod config;

// 导入层 - 花名册行数据
pub mod importer;

// 引擎层 - 分配与评分
pub mod engine;

// API 层 - 记录级接口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ConfidenceLevel, EmploymentType, Role, ScoreTier, TimePreference};

// 领域实体
pub use domain::{
    CandidateScore, EmergencyCandidate, EmergencyContext, PlanningRun, RunWarning, Slot,
    SlotContext, StaffProfile, WorkRecord, Worker,
};

// 配置
pub use config::{ConfigManager, EngineConfig, RunConfig};

// 引擎
pub use engine::{
    CandidateScorer, ConstraintAssigner, EmergencyScorer, FallbackFiller, ShiftPlanner,
    WorkHistoryProvider,
};

// API
pub use api::RosterApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "排班自动分配与代班评分引擎";
