// ==========================================
// 排班引擎 - 约束分配引擎（第一阶段）
// ==========================================
// 红线: 贪心、不回溯,已分配的时段不再调整
// 红线: 本阶段不突破 max_days
// ==========================================
// 职责: 按 日→时 顺序填充时段
// 输入: 员工列表（输入顺序）+ RunConfig
// 输出: 部分或完全填充的时段列表（进度写入 AssignmentState）
// ==========================================

use crate::config::run_config::RunConfig;
use crate::domain::assignment::AssignmentState;
use crate::domain::slot::Slot;
use crate::domain::worker::Worker;
use std::cmp::Reverse;
use tracing::{debug, instrument};

// ==========================================
// ConstraintAssigner - 约束分配引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintAssigner {
    // 无状态引擎
}

impl ConstraintAssigner {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行第一阶段分配
    ///
    /// 规则:
    /// 1) 候选: 希望日 ∧ 可上班小时 ∧ assigned_days < max_days ∧ 连勤规则
    /// 2) 责任者按 (能力降序, 已分配数升序) 排序,最多分配 required_leader_count 名
    /// 3) 其余候选（含多余责任者）同样排序,填充至本阶段目标人数
    /// 4) 目标人数 = required_count − 仍需留给责任者的席位
    ///
    /// # 参数
    /// - `workers`: 员工列表（输入顺序,排序平局时保持此顺序）
    /// - `config`: 运行配置
    /// - `state`: 本次运行的分配状态（会被修改）
    #[instrument(skip(self, workers, config, state), fields(
        workers_count = workers.len(),
        days = config.days.len(),
        hours = config.hours.len()
    ))]
    pub fn assign(
        &self,
        workers: &[Worker],
        config: &RunConfig,
        state: &mut AssignmentState,
    ) -> Vec<Slot> {
        let mut slots = config.build_slots();
        for slot in slots.iter_mut() {
            self.fill_slot(workers, config, state, slot);
        }
        debug!(
            slots = slots.len(),
            full = slots.iter().filter(|s| s.is_full()).count(),
            "第一阶段分配完成"
        );
        slots
    }

    /// 填充单个时段
    pub fn fill_slot(
        &self,
        workers: &[Worker],
        config: &RunConfig,
        state: &mut AssignmentState,
        slot: &mut Slot,
    ) {
        let candidates = self.eligible_candidates(workers, config, state, slot);

        // 1. 责任者
        let mut leaders: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&idx| workers[idx].is_leader())
            .collect();
        sort_by_ability_then_load(&mut leaders, workers, state);

        let leader_quota = slot.required_leader_count.min(slot.required_count);
        for idx in leaders.into_iter().take(leader_quota) {
            state.assign(idx, &workers[idx], slot);
        }

        // 2. 其余候选
        let target = slot
            .required_count
            .saturating_sub(reserved_leader_seats(workers, slot));

        let mut rest: Vec<usize> = candidates
            .into_iter()
            .filter(|&idx| !slot.contains(&workers[idx].id))
            .collect();
        sort_by_ability_then_load(&mut rest, workers, state);

        for idx in rest {
            if slot.assigned.len() >= target {
                break;
            }
            state.assign(idx, &workers[idx], slot);
        }
    }

    /// 通过全部约束的候选（员工下标,输入顺序）
    fn eligible_candidates(
        &self,
        workers: &[Worker],
        config: &RunConfig,
        state: &AssignmentState,
        slot: &Slot,
    ) -> Vec<usize> {
        workers
            .iter()
            .enumerate()
            .filter(|(idx, worker)| {
                let load = state.load(*idx);
                worker.prefers(slot.day, slot.hour)
                    && load.assigned_days < worker.max_days
                    && !slot.contains(&worker.id)
                    && (!config.enforce_consecutive_days
                        || load
                            .longest_streak_with(slot.day)
                            .map_or(true, |streak| streak <= config.max_consecutive_days))
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// 仍需留给责任者的席位数
///
/// 只在花名册中还有未进入本时段的责任者时才保留,否则留空席位无意义
pub(crate) fn reserved_leader_seats(workers: &[Worker], slot: &Slot) -> usize {
    let leaders_in_slot = leader_count(workers, slot);
    let shortfall = slot.required_leader_count.saturating_sub(leaders_in_slot);
    if shortfall == 0 {
        return 0;
    }
    let outside = workers
        .iter()
        .filter(|w| w.is_leader() && !slot.contains(&w.id))
        .count();
    shortfall.min(outside)
}

/// 时段内责任者人数
pub(crate) fn leader_count(workers: &[Worker], slot: &Slot) -> usize {
    slot.assigned
        .iter()
        .filter(|id| workers.iter().any(|w| &w.id == *id && w.is_leader()))
        .count()
}

/// 稳定排序: 能力降序,已分配数升序
fn sort_by_ability_then_load(indices: &mut [usize], workers: &[Worker], state: &AssignmentState) {
    indices.sort_by_key(|&idx| (Reverse(workers[idx].ability), state.load(idx).assigned_days));
}
