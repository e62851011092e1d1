// ==========================================
// 排班引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 单条记录错误只导致该记录被跳过,不中断导入
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    // ===== 必填字段 =====
    #[error("必填字段缺失 (行 {row}): {field}")]
    MissingField { row: usize, field: String },

    // ===== 类型转换 =====
    #[error("类型转换失败 (行 {row}, 字段 {field}): {value}")]
    TypeConversionError {
        row: usize,
        field: String,
        value: String,
    },

    // ===== 取值范围 =====
    #[error("数值范围错误 (行 {row}, 字段 {field}): 值 {value} 超出范围 [{min}, {max}]")]
    ValueRangeError {
        row: usize,
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    // ===== 主键冲突 =====
    #[error("员工ID重复 (行 {row}): {id}")]
    DuplicateWorkerId { row: usize, id: String },
}

impl ImportError {
    /// 出错行号
    pub fn row(&self) -> usize {
        match self {
            ImportError::MissingField { row, .. }
            | ImportError::TypeConversionError { row, .. }
            | ImportError::ValueRangeError { row, .. }
            | ImportError::DuplicateWorkerId { row, .. } => *row,
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
