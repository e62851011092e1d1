// ==========================================
// 排班引擎 - 紧急代班评分引擎
// ==========================================
// 职责: 当日/紧急缺勤时,基于近期出勤历史对候选排序
// 公式: total = clip(100 · (0.4·近期经验 + 0.3·部门熟悉度 + 0.2·信赖度 + 0.1·即时可用性), 0, 100)
// 窗口: 以缺勤日 D 为锚点,均不含 D 本身
// 红线: 历史数据源出错只记录告警并视为无历史,不向外传播
// ==========================================

use crate::config::scoring_weights::EmergencyWeights;
use crate::domain::history::WorkRecord;
use crate::domain::scoring::{
    EmergencyCandidate, EmergencyContext, EmergencyFactor, ReasonTag, StaffProfile,
};
use crate::domain::types::ConfidenceLevel;
use crate::engine::availability::availability_score;
use crate::engine::candidate_scorer::{clip_total, strongest};
use crate::engine::history::{HistoryResult, WorkHistoryProvider};
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

const RECENT_TAG_THRESHOLD: f64 = 0.7;
const FAMILIARITY_TAG_THRESHOLD: f64 = 0.8;
const RELIABILITY_TAG_THRESHOLD: f64 = 0.8;
const IMMEDIATE_TAG_THRESHOLD: f64 = 0.8;

// ==========================================
// EmergencyScorer - 紧急代班评分引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct EmergencyScorer {
    weights: EmergencyWeights,
}

impl EmergencyScorer {
    pub fn new(weights: EmergencyWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EmergencyWeights {
        &self.weights
    }

    /// 按缺勤员工 id 在花名册中查找并排序候选
    pub fn suggest_for<H: WorkHistoryProvider + ?Sized>(
        &self,
        absent_id: &str,
        roster: &[StaffProfile],
        ctx: &EmergencyContext,
        history: &H,
    ) -> Vec<EmergencyCandidate> {
        match roster.iter().find(|p| p.id == absent_id) {
            Some(absent) => self.rank(absent, roster, ctx, history),
            None => {
                debug!(absent_id = %absent_id, "缺勤员工不在花名册中");
                Vec::new()
            }
        }
    }

    /// 候选评分并排序（最多 max_results 条,默认 3）
    #[instrument(skip(self, absent, candidates, history), fields(
        absent_id = %absent.id,
        candidates_count = candidates.len(),
        absence_date = %ctx.absence_date
    ))]
    pub fn rank<H: WorkHistoryProvider + ?Sized>(
        &self,
        absent: &StaffProfile,
        candidates: &[StaffProfile],
        ctx: &EmergencyContext,
        history: &H,
    ) -> Vec<EmergencyCandidate> {
        let mut scored: Vec<EmergencyCandidate> = candidates
            .iter()
            .filter(|c| c.id != absent.id)
            .map(|c| self.score(absent, c, ctx, history))
            .collect();

        scored.sort_by(|a, b| b.total.total_cmp(&a.total));
        scored.truncate(self.weights.max_results);

        debug!(returned = scored.len(), "紧急代班候选排序完成");
        scored
    }

    /// 单个候选评分
    pub fn score<H: WorkHistoryProvider + ?Sized>(
        &self,
        absent: &StaffProfile,
        candidate: &StaffProfile,
        ctx: &EmergencyContext,
        history: &H,
    ) -> EmergencyCandidate {
        let w = &self.weights;
        let department = absent.department.as_str();
        let staff_id = candidate.id.as_str();
        let d = ctx.absence_date;

        // 1. 近期经验 [D-14, D-1]
        let recent_experience = match self.window_records(history, staff_id, d, w.recent_window_days) {
            Some(records) => {
                let days = distinct_days(records.iter().filter(|r| r.department == department));
                (days as f64 / f64::from(w.recent_window_days)).min(1.0)
            }
            None => 0.0,
        };

        // 2. 部门熟悉度 [D-90, D-1]
        let department_familiarity =
            match self.window_records(history, staff_id, d, w.familiarity_window_days) {
                Some(records) if !records.is_empty() => {
                    let dept = distinct_days(records.iter().filter(|r| r.department == department));
                    let total = distinct_days(records.iter());
                    dept as f64 / total as f64
                }
                _ => 0.0,
            };

        // 3. 信赖度 [D-30, D-1]
        let reliability = self.reliability(history, staff_id, d);

        // 4. 即时可用性
        let conflict = self
            .logged(
                history.has_conflict(staff_id, d, ctx.hour),
                staff_id,
                "has_conflict",
            )
            .unwrap_or(false);
        let penalty = if conflict { w.conflict_penalty } else { 0.0 };
        let immediate_availability = (availability_score(
            &w.availability_rules,
            candidate.employment_type,
            candidate.preferred_hours,
            ctx.weekday(),
            ctx.hour,
        ) - penalty)
            .max(0.0);

        let raw = w.recent_experience * recent_experience
            + w.department_familiarity * department_familiarity
            + w.reliability * reliability
            + w.immediate_availability * immediate_availability;
        let total = clip_total(raw * 100.0);

        let strongest_factor = strongest(&[
            (EmergencyFactor::RecentExperience, recent_experience),
            (EmergencyFactor::DepartmentFamiliarity, department_familiarity),
            (EmergencyFactor::Reliability, reliability),
            (EmergencyFactor::ImmediateAvailability, immediate_availability),
        ]);
        let reason_tags = quick_reason_tags(
            strongest_factor,
            recent_experience,
            department_familiarity,
            reliability,
            immediate_availability,
        );

        let can_start_immediately = !self
            .logged(history.has_conflict(staff_id, d, None), staff_id, "has_conflict")
            .unwrap_or(false);
        let last_worked_in_department = self
            .logged(
                history.last_worked_in(staff_id, department, d),
                staff_id,
                "last_worked_in",
            )
            .flatten();

        EmergencyCandidate {
            worker_id: candidate.id.clone(),
            name: candidate.name.clone(),
            recent_experience,
            department_familiarity,
            reliability,
            immediate_availability,
            total,
            confidence: ConfidenceLevel::from_score(total),
            strongest_factor,
            reason_tags,
            can_start_immediately,
            last_worked_in_department,
        }
    }

    /// 信赖度 = 0.7·出勤率 + 0.3·准时率（无记录时取默认值）
    fn reliability<H: WorkHistoryProvider + ?Sized>(
        &self,
        history: &H,
        staff_id: &str,
        d: NaiveDate,
    ) -> f64 {
        let w = &self.weights;
        let Some((start, end)) = window(d, w.reliability_window_days) else {
            return w.default_reliability;
        };
        let records = match self.logged(
            history.records_between(staff_id, start, end),
            staff_id,
            "records_between",
        ) {
            Some(records) if !records.is_empty() => records,
            _ => return w.default_reliability,
        };

        let worked = distinct_days(records.iter());
        let scheduled = self
            .logged(
                history.scheduled_days_between(staff_id, start, end),
                staff_id,
                "scheduled_days_between",
            )
            .flatten()
            .filter(|&days| days > 0)
            .map(|days| days as usize)
            .unwrap_or(worked);

        let attendance = (worked as f64 / scheduled as f64).min(1.0);
        let punctuality =
            records.iter().filter(|r| r.is_on_time()).count() as f64 / records.len() as f64;

        (w.attendance * attendance + w.punctuality * punctuality).min(1.0)
    }

    /// 窗口 [D-days, D-1] 内的记录; 数据源出错返回 None
    fn window_records<H: WorkHistoryProvider + ?Sized>(
        &self,
        history: &H,
        staff_id: &str,
        d: NaiveDate,
        days: u32,
    ) -> Option<Vec<WorkRecord>> {
        let (start, end) = window(d, days)?;
        self.logged(history.records_between(staff_id, start, end), staff_id, "records_between")
    }

    fn logged<T>(&self, result: HistoryResult<T>, staff_id: &str, query: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(staff_id = %staff_id, query = %query, error = %e, "历史数据读取失败,按无历史处理");
                None
            }
        }
    }
}

/// [D-days, D-1]
fn window(d: NaiveDate, days: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = d.checked_sub_days(Days::new(u64::from(days)))?;
    let end = d.pred_opt()?;
    Some((start, end))
}

fn distinct_days<'a, I: Iterator<Item = &'a WorkRecord>>(records: I) -> usize {
    records.map(|r| r.work_date).collect::<BTreeSet<_>>().len()
}

fn quick_reason_tags(
    strongest_factor: EmergencyFactor,
    recent: f64,
    familiarity: f64,
    reliability: f64,
    immediate: f64,
) -> Vec<ReasonTag> {
    let mut tags = Vec::new();
    match strongest_factor {
        EmergencyFactor::RecentExperience if recent > RECENT_TAG_THRESHOLD => {
            tags.push(ReasonTag::RecentDepartmentWork)
        }
        EmergencyFactor::DepartmentFamiliarity if familiarity > FAMILIARITY_TAG_THRESHOLD => {
            tags.push(ReasonTag::FamiliarWithDepartment)
        }
        EmergencyFactor::Reliability if reliability > RELIABILITY_TAG_THRESHOLD => {
            tags.push(ReasonTag::HighReliability)
        }
        _ => {}
    }
    if immediate > IMMEDIATE_TAG_THRESHOLD {
        tags.push(ReasonTag::ImmediatelyAvailable);
    }
    if tags.is_empty() {
        tags.push(ReasonTag::AvailableCandidate);
    }
    tags
}
