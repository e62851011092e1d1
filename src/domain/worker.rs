// ==========================================
// 排班引擎 - 员工领域模型
// ==========================================
// 红线: Worker 是不可变档案,排班进度放在 AssignmentState
// ==========================================

use crate::domain::types::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Worker - 员工档案
// ==========================================
// 用途: 一次排班运行的输入,运行期间只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    // ===== 标识 =====
    pub id: String,
    pub name: String,

    // ===== 能力与角色 =====
    pub ability: i32, // 外部评定的能力分
    pub role: Role,

    // ===== 约束 =====
    pub max_days: u32,                   // 本次运行可分配时段上限
    pub available_hours: BTreeSet<u8>,   // 可上班小时 (0..=23)
    pub preferred_days: BTreeSet<u8>,    // 希望上班日 (1..=7)
}

impl Worker {
    pub fn new(id: &str, name: &str, ability: i32, role: Role, max_days: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ability,
            role,
            max_days,
            available_hours: BTreeSet::new(),
            preferred_days: BTreeSet::new(),
        }
    }

    pub fn with_available_hours<I: IntoIterator<Item = u8>>(mut self, hours: I) -> Self {
        self.available_hours = hours.into_iter().collect();
        self
    }

    pub fn with_preferred_days<I: IntoIterator<Item = u8>>(mut self, days: I) -> Self {
        self.preferred_days = days.into_iter().collect();
        self
    }

    pub fn is_leader(&self) -> bool {
        self.role.is_leader()
    }

    /// 是否希望在该日该小时上班（不含上限与连勤判断）
    pub fn prefers(&self, day: u8, hour: u8) -> bool {
        self.preferred_days.contains(&day) && self.available_hours.contains(&hour)
    }
}

// ==========================================
// RawWorkerRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（行数据 → 字段映射 → 此结构 → 校验 → Worker）
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWorkerRecord {
    // 源字段（未做类型转换）
    pub id: Option<String>,
    pub name: Option<String>,
    pub ability: Option<String>,
    pub role: Option<String>,
    pub max_days: Option<String>,
    pub available_hours: Option<String>, // 例: "9,10,11"
    pub preferred_days: Option<String>,  // 例: "1,2,3"

    // 元信息
    pub row_number: usize, // 原始行号（用于告警定位）
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_requires_day_and_hour() {
        let worker = Worker::new("W1", "田中", 8, Role::Leader, 5)
            .with_available_hours([9, 10])
            .with_preferred_days([1, 2]);

        assert!(worker.prefers(1, 9));
        assert!(!worker.prefers(3, 9));
        assert!(!worker.prefers(1, 11));
        assert!(worker.is_leader());
    }
}
