// ==========================================
// 排班引擎 - 导入层
// ==========================================
// 职责: 外部花名册行（表格/JSON）→ Worker 列表 + 无效记录
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod roster_importer;
pub mod roster_validator;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use roster_importer::{RejectedRecord, RosterImport, RosterImporter};
pub use roster_validator::RosterValidator;
