// ==========================================
// 排班引擎 - 排班编排器
// ==========================================
// 职责: 第一阶段 → 第二阶段 → 汇总告警
// 输入: 员工列表 + RunConfig
// 输出: PlanningRun（时段、员工负荷、兜底记录、告警）
// 红线: 每次运行使用新的 AssignmentState,不跨运行保留状态
// ==========================================

use crate::config::run_config::RunConfig;
use crate::domain::assignment::AssignmentState;
use crate::domain::run::{PlanningRun, RunWarning};
use crate::domain::slot::Slot;
use crate::domain::worker::Worker;
use crate::engine::constraint_assigner::{leader_count, ConstraintAssigner};
use crate::engine::fallback_filler::FallbackFiller;
use tracing::{info, instrument, warn};

// ==========================================
// ShiftPlanner - 排班编排器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftPlanner {
    assigner: ConstraintAssigner,
    filler: FallbackFiller,
}

impl ShiftPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 执行完整排班运行
    #[instrument(skip_all, fields(workers_count = workers.len()))]
    pub fn plan(&self, workers: &[Worker], config: &RunConfig) -> PlanningRun {
        let mut state = AssignmentState::new(workers);
        let mut slots = self.assigner.assign(workers, config, &mut state);
        let fallback_assignments = self.filler.fill(workers, &mut state, &mut slots);

        let worker_loads = state.to_worker_assignments(workers);
        let mut warnings = under_staffed_warnings(workers, &slots);
        warnings.extend(worker_loads.iter().filter(|w| w.cap_exceeded).map(|w| {
            RunWarning::CapExceeded {
                worker_id: w.worker_id.clone(),
                assigned_days: w.assigned_days,
                max_days: w.max_days,
            }
        }));

        for warning in &warnings {
            warn!(warning = ?warning, "排班告警");
        }
        info!(
            slots = slots.len(),
            fallback = fallback_assignments.len(),
            warnings = warnings.len(),
            "排班运行完成"
        );

        PlanningRun {
            slots,
            workers: worker_loads,
            fallback_assignments,
            warnings,
        }
    }

    /// 只执行第一阶段（用于检查约束分配结果）
    pub fn plan_constrained_only(
        &self,
        workers: &[Worker],
        config: &RunConfig,
    ) -> (Vec<Slot>, AssignmentState) {
        let mut state = AssignmentState::new(workers);
        let slots = self.assigner.assign(workers, config, &mut state);
        (slots, state)
    }
}

fn under_staffed_warnings(workers: &[Worker], slots: &[Slot]) -> Vec<RunWarning> {
    slots
        .iter()
        .filter_map(|slot| {
            let leaders = leader_count(workers, slot);
            if slot.is_full() && leaders >= slot.required_leader_count {
                return None;
            }
            Some(RunWarning::UnderStaffedSlot {
                day: slot.day,
                hour: slot.hour,
                required_count: slot.required_count,
                assigned_count: slot.assigned.len(),
                required_leader_count: slot.required_leader_count,
                leader_count: leaders,
            })
        })
        .collect()
}
