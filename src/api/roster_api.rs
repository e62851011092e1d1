// ==========================================
// 排班引擎 - 排班与代班推荐 API
// ==========================================
// 职责: 记录进 → 引擎 → 记录出（供界面/导出/通知层调用）
// 流程: 导入 → 两阶段分配 → 告警汇总; 评分 → 理由文本
// 说明: 每次调用使用调用方提供的新快照,API 本身不保存运行状态
// ==========================================

use crate::api::dto::{
    EmergencySuggestionRecord, PlanShiftsResponse, SlotRecord, SuggestionRecord,
};
use crate::api::error::{ApiError, ApiResult};
use crate::config::config_manager::{ConfigManager, EngineConfig};
use crate::domain::run::{PlanningRun, RunWarning};
use crate::domain::scoring::{EmergencyContext, SlotContext, StaffProfile};
use crate::domain::worker::Worker;
use crate::engine::candidate_scorer::CandidateScorer;
use crate::engine::emergency_scorer::EmergencyScorer;
use crate::engine::history::WorkHistoryProvider;
use crate::engine::planner::ShiftPlanner;
use crate::engine::reason_formatter::ReasonFormatter;
use crate::importer::RosterImporter;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{info, instrument};

// ==========================================
// RosterApi - 排班与代班推荐 API
// ==========================================
#[derive(Debug, Clone)]
pub struct RosterApi {
    config: EngineConfig,
    importer: RosterImporter,
    planner: ShiftPlanner,
    candidate_scorer: CandidateScorer,
    emergency_scorer: EmergencyScorer,
    formatter: ReasonFormatter,
}

impl RosterApi {
    /// 创建 API 实例（配置非法时返回 Err）
    pub fn new(config: EngineConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            importer: RosterImporter::new(),
            planner: ShiftPlanner::new(),
            candidate_scorer: CandidateScorer::new(config.scoring.clone()),
            emergency_scorer: EmergencyScorer::new(config.emergency.clone()),
            formatter: ReasonFormatter::new(),
            config,
        })
    }

    pub fn from_manager(manager: &ConfigManager) -> ApiResult<Self> {
        Self::new(manager.config().clone())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ==========================================
    // 排班
    // ==========================================

    /// 从原始 JSON 行排班
    ///
    /// 无效行被跳过,以 INVALID_WORKER_RECORD 告警列在最前
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn plan_shifts_from_rows(&self, rows: &[Value]) -> PlanShiftsResponse {
        let import = self.importer.import_json_rows(rows);
        let run = self.planner.plan(&import.workers, &self.config.run);

        let mut warnings = import.warnings();
        warnings.extend(run.warnings.iter().cloned());
        self.build_response(&import.workers, run, warnings)
    }

    /// 对已校验的员工列表排班
    pub fn plan_shifts(&self, workers: &[Worker]) -> PlanShiftsResponse {
        let run = self.planner.plan(workers, &self.config.run);
        let warnings = run.warnings.clone();
        self.build_response(workers, run, warnings)
    }

    fn build_response(
        &self,
        workers: &[Worker],
        run: PlanningRun,
        warnings: Vec<RunWarning>,
    ) -> PlanShiftsResponse {
        let names: HashMap<&str, &str> = workers
            .iter()
            .map(|w| (w.id.as_str(), w.name.as_str()))
            .collect();

        let response = PlanShiftsResponse {
            slots: run
                .slots
                .iter()
                .map(|slot| SlotRecord::from_slot(slot, &names))
                .collect(),
            workers: run.workers,
            fallback_assignments: run.fallback_assignments,
            warning_messages: warnings
                .iter()
                .map(|w| self.formatter.format_warning(w))
                .collect(),
            warnings,
        };

        info!(
            slots = response.slots.len(),
            warnings = response.warnings.len(),
            "排班结果已生成"
        );
        response
    }

    // ==========================================
    // 代班推荐
    // ==========================================

    /// 常规代班推荐（最多 5 名）
    ///
    /// # 返回
    /// - Ok(空列表): 缺勤员工不在花名册中,或没有其他候选
    /// - Err(ApiError::InvalidInput): 时段上下文非法
    pub fn suggest_substitutes(
        &self,
        absent_id: &str,
        roster: &[StaffProfile],
        ctx: SlotContext,
    ) -> ApiResult<Vec<SuggestionRecord>> {
        if !(1..=7).contains(&ctx.day) || ctx.hour > 23 {
            return Err(ApiError::InvalidInput(format!(
                "时段非法: day={}, hour={}",
                ctx.day, ctx.hour
            )));
        }

        Ok(self
            .candidate_scorer
            .suggest_for(absent_id, roster, &ctx)
            .iter()
            .map(|score| SuggestionRecord::new(score, self.formatter.format_candidate(score)))
            .collect())
    }

    /// 紧急代班推荐（最多 3 名）
    pub fn suggest_emergency_substitutes(
        &self,
        absent_id: &str,
        roster: &[StaffProfile],
        ctx: EmergencyContext,
        history: &dyn WorkHistoryProvider,
    ) -> ApiResult<Vec<EmergencySuggestionRecord>> {
        if ctx.hour.is_some_and(|h| h > 23) {
            return Err(ApiError::InvalidInput(format!(
                "小时非法: {:?}",
                ctx.hour
            )));
        }

        Ok(self
            .emergency_scorer
            .suggest_for(absent_id, roster, &ctx, history)
            .iter()
            .map(|candidate| {
                EmergencySuggestionRecord::new(
                    candidate,
                    self.formatter.confidence_label(candidate.confidence),
                    self.formatter.format_emergency(candidate),
                )
            })
            .collect())
    }
}
