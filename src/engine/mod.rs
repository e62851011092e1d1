// ==========================================
// 排班引擎 - 引擎层
// ==========================================
// 职责: 两阶段排班分配 + 常规/紧急代班评分
// 红线: 引擎无状态、无 I/O,每次调用基于调用方提供的快照
// 红线: 所有推荐必须输出结构化理由标签
// ==========================================

pub mod availability;
pub mod candidate_scorer;
pub mod constraint_assigner;
pub mod emergency_scorer;
pub mod fallback_filler;
pub mod history;
pub mod planner;
pub mod reason_formatter;

// 重导出核心引擎
pub use candidate_scorer::CandidateScorer;
pub use constraint_assigner::ConstraintAssigner;
pub use emergency_scorer::EmergencyScorer;
pub use fallback_filler::FallbackFiller;
pub use history::{HistoryError, HistoryResult, InMemoryWorkHistory, WorkHistoryProvider};
pub use planner::ShiftPlanner;
pub use reason_formatter::ReasonFormatter;
