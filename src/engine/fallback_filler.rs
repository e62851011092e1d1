// ==========================================
// 排班引擎 - 兜底填充引擎（第二阶段）
// ==========================================
// 红线: 覆盖优先于公平,本阶段无视希望日/时段/上限/连勤
// 红线: 每条兜底分配都必须记录,供调用方作为例外处理
// ==========================================
// 职责: 第一阶段后仍缺人的时段,按输入顺序补足责任者与人数
// ==========================================

use crate::domain::assignment::AssignmentState;
use crate::domain::run::{FallbackAssignment, FallbackKind};
use crate::domain::slot::Slot;
use crate::domain::worker::Worker;
use crate::engine::constraint_assigner::leader_count;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackFiller {
    // 无状态引擎
}

impl FallbackFiller {
    pub fn new() -> Self {
        Self {}
    }

    /// 执行第二阶段填充
    ///
    /// 规则:
    /// 1) 责任者不足且时段未满: 按输入顺序取第一个不在时段内的责任者
    /// 2) 人数不足: 按输入顺序取第一个不在时段内的员工
    /// 3) 找不到可加入的员工即停止（花名册结构性不足,交给告警）
    ///
    /// # 返回
    /// 本阶段全部分配记录（时段顺序 + 分配顺序）
    #[instrument(skip_all, fields(workers_count = workers.len(), slots_count = slots.len()))]
    pub fn fill(
        &self,
        workers: &[Worker],
        state: &mut AssignmentState,
        slots: &mut [Slot],
    ) -> Vec<FallbackAssignment> {
        let mut records = Vec::new();
        for slot in slots.iter_mut() {
            self.fill_slot(workers, state, slot, &mut records);
        }
        debug!(fallback_count = records.len(), "第二阶段填充完成");
        records
    }

    fn fill_slot(
        &self,
        workers: &[Worker],
        state: &mut AssignmentState,
        slot: &mut Slot,
        records: &mut Vec<FallbackAssignment>,
    ) {
        // 1. 责任者补足
        while leader_count(workers, slot) < slot.required_leader_count && !slot.is_full() {
            let Some(idx) = workers
                .iter()
                .position(|w| w.is_leader() && !slot.contains(&w.id))
            else {
                break;
            };
            self.record(idx, workers, state, slot, FallbackKind::Leader, records);
        }

        // 2. 人数补足
        while !slot.is_full() {
            let Some(idx) = workers.iter().position(|w| !slot.contains(&w.id)) else {
                break;
            };
            self.record(idx, workers, state, slot, FallbackKind::Headcount, records);
        }
    }

    fn record(
        &self,
        idx: usize,
        workers: &[Worker],
        state: &mut AssignmentState,
        slot: &mut Slot,
        kind: FallbackKind,
        records: &mut Vec<FallbackAssignment>,
    ) {
        let worker = &workers[idx];
        if state.assign(idx, worker, slot) {
            debug!(
                day = slot.day,
                hour = slot.hour,
                worker_id = %worker.id,
                kind = ?kind,
                "兜底分配"
            );
            records.push(FallbackAssignment {
                day: slot.day,
                hour: slot.hour,
                worker_id: worker.id.clone(),
                kind,
            });
        }
    }
}
