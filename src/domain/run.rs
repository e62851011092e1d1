// ==========================================
// 排班引擎 - 运行结果与告警
// ==========================================
// 职责: 一次排班运行的完整输出
// 红线: 人手不足/超上限都是告警,不是错误
// ==========================================

use crate::domain::assignment::WorkerAssignment;
use crate::domain::slot::Slot;
use serde::{Deserialize, Serialize};

// ==========================================
// FallbackAssignment - 兜底分配记录
// ==========================================
// 兜底阶段无视约束,调用方需把这些记录视为例外
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackKind {
    Leader,    // 补足责任者
    Headcount, // 补足人数
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackAssignment {
    pub day: u8,
    pub hour: u8,
    pub worker_id: String,
    pub kind: FallbackKind,
}

// ==========================================
// RunWarning - 运行告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunWarning {
    /// 兜底后仍人手不足（花名册结构性不足）
    UnderStaffedSlot {
        day: u8,
        hour: u8,
        required_count: usize,
        assigned_count: usize,
        required_leader_count: usize,
        leader_count: usize,
    },
    /// 兜底分配使员工超出 max_days
    CapExceeded {
        worker_id: String,
        assigned_days: u32,
        max_days: u32,
    },
    /// 输入记录无效,已跳过
    InvalidWorkerRecord {
        row_number: usize,
        worker_id: Option<String>,
        reason: String,
    },
}

// ==========================================
// PlanningRun - 排班运行结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningRun {
    pub slots: Vec<Slot>,
    pub workers: Vec<WorkerAssignment>,
    pub fallback_assignments: Vec<FallbackAssignment>,
    pub warnings: Vec<RunWarning>,
}

impl PlanningRun {
    pub fn slot(&self, day: u8, hour: u8) -> Option<&Slot> {
        self.slots.iter().find(|s| s.day == day && s.hour == hour)
    }

    pub fn under_staffed(&self) -> impl Iterator<Item = &RunWarning> {
        self.warnings
            .iter()
            .filter(|w| matches!(w, RunWarning::UnderStaffedSlot { .. }))
    }

    pub fn cap_exceeded(&self) -> impl Iterator<Item = &RunWarning> {
        self.warnings
            .iter()
            .filter(|w| matches!(w, RunWarning::CapExceeded { .. }))
    }

    pub fn is_fully_staffed(&self) -> bool {
        self.under_staffed().next().is_none()
    }
}
