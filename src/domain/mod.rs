// ==========================================
// 排班引擎 - 领域模型层
// ==========================================
// 职责: 定义员工、时段、分配状态、评分记录等实体
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod assignment;
pub mod history;
pub mod run;
pub mod scoring;
pub mod slot;
pub mod types;
pub mod worker;

// 重导出核心类型
pub use assignment::{AssignmentState, WorkerAssignment, WorkerLoad};
pub use history::WorkRecord;
pub use run::{FallbackAssignment, FallbackKind, PlanningRun, RunWarning};
pub use scoring::{
    CandidateScore, EmergencyCandidate, EmergencyContext, EmergencyFactor, ReasonTag, ScoreFactor,
    SlotContext, StaffProfile,
};
pub use slot::Slot;
pub use types::{ConfidenceLevel, EmploymentType, Role, ScoreTier, TimePreference};
pub use worker::{RawWorkerRecord, Worker};
