// ==========================================
// 排班引擎 - 单次运行的分配状态
// ==========================================
// 职责: 以 worker 下标为键记录排班进度（arena 模式）
// 红线: assigned_days == assigned_slots.len() 恒成立
// 红线: 不修改 Worker 档案,运行结束时再合并输出
// ==========================================

use crate::domain::slot::Slot;
use crate::domain::worker::Worker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// WorkerLoad - 单个员工的排班进度
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerLoad {
    pub assigned_days: u32,
    pub assigned_slots: Vec<(u8, u8)>, // (day, hour)，只追加
}

impl WorkerLoad {
    /// 追加一个时段后，最长连续上班天数
    ///
    /// 说明:
    /// - 同一天多个时段只算一天
    /// - 日期不回绕（7 → 1 不算连续）
    /// - 尚无任何分配时返回 None（调用方视为通过）
    pub fn longest_streak_with(&self, day: u8) -> Option<u32> {
        if self.assigned_slots.is_empty() {
            return None;
        }

        let mut days: BTreeSet<u8> = self.assigned_slots.iter().map(|(d, _)| *d).collect();
        days.insert(day);

        let mut longest = 1u32;
        let mut streak = 1u32;
        let mut previous: Option<u8> = None;
        for current in days {
            if let Some(prev) = previous {
                if prev.checked_add(1) == Some(current) {
                    streak += 1;
                    longest = longest.max(streak);
                } else {
                    streak = 1;
                }
            }
            previous = Some(current);
        }
        Some(longest)
    }
}

// ==========================================
// AssignmentState - 运行期分配状态
// ==========================================
#[derive(Debug, Clone)]
pub struct AssignmentState {
    loads: Vec<WorkerLoad>,
}

impl AssignmentState {
    /// 为一批员工创建空状态（下标与输入顺序一致）
    pub fn new(workers: &[Worker]) -> Self {
        Self {
            loads: vec![WorkerLoad::default(); workers.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    pub fn load(&self, worker_idx: usize) -> &WorkerLoad {
        &self.loads[worker_idx]
    }

    /// 把员工放入时段
    ///
    /// # 返回
    /// - `true`: 已分配
    /// - `false`: 员工已在该时段（不重复分配）
    pub fn assign(&mut self, worker_idx: usize, worker: &Worker, slot: &mut Slot) -> bool {
        if slot.contains(&worker.id) {
            return false;
        }
        slot.assigned.push(worker.id.clone());

        let load = &mut self.loads[worker_idx];
        load.assigned_days += 1;
        load.assigned_slots.push((slot.day, slot.hour));
        true
    }

    /// 运行结束时合并为输出记录
    pub fn to_worker_assignments(&self, workers: &[Worker]) -> Vec<WorkerAssignment> {
        workers
            .iter()
            .zip(self.loads.iter())
            .map(|(worker, load)| WorkerAssignment {
                worker_id: worker.id.clone(),
                name: worker.name.clone(),
                max_days: worker.max_days,
                assigned_days: load.assigned_days,
                assigned_slots: load.assigned_slots.clone(),
                cap_exceeded: load.assigned_days > worker.max_days,
            })
            .collect()
    }
}

// ==========================================
// WorkerAssignment - 员工维度的运行结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerAssignment {
    pub worker_id: String,
    pub name: String,
    pub max_days: u32,
    pub assigned_days: u32,
    pub assigned_slots: Vec<(u8, u8)>,
    pub cap_exceeded: bool, // 兜底填充导致超出上限
}
