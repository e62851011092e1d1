// ==========================================
// 排班引擎 - 时段领域模型
// ==========================================
// 用途: (day, hour) 单位的人员需求
// 红线: assigned 保持插入顺序且不重复
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: u8,
    pub hour: u8,
    pub busy: bool,
    pub required_count: usize,
    pub required_leader_count: usize,
    pub assigned: Vec<String>, // worker id 列表
}

impl Slot {
    pub fn new(
        day: u8,
        hour: u8,
        busy: bool,
        required_count: usize,
        required_leader_count: usize,
    ) -> Self {
        Self {
            day,
            hour,
            busy,
            required_count,
            required_leader_count,
            assigned: Vec::new(),
        }
    }

    pub fn key(&self) -> (u8, u8) {
        (self.day, self.hour)
    }

    pub fn contains(&self, worker_id: &str) -> bool {
        self.assigned.iter().any(|id| id == worker_id)
    }

    pub fn is_full(&self) -> bool {
        self.assigned.len() >= self.required_count
    }

    /// 距离目标人数的缺口
    pub fn headcount_shortfall(&self) -> usize {
        self.required_count.saturating_sub(self.assigned.len())
    }
}
