// ==========================================
// 排班引擎 - API 层
// ==========================================
// 职责: 提供记录级接口,供界面/导出/通知层调用
// ==========================================

pub mod dto;
pub mod error;
pub mod roster_api;

// 重导出核心类型
pub use dto::{EmergencySuggestionRecord, PlanShiftsResponse, SlotRecord, SuggestionRecord};
pub use error::{ApiError, ApiResult};
pub use roster_api::RosterApi;
