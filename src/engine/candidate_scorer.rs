// ==========================================
// 排班引擎 - 常规代班评分引擎
// ==========================================
// 职责: 缺勤员工 vs 候选员工 的加权适配度评分 + 排序
// 公式: total = clip(100 · Σ w_i · s_i, 0, 100)
// 红线: 只读,不修改任何排班状态
// 红线: 缺勤员工不存在或候选为空 → 空列表（不是错误）
// ==========================================

use crate::config::scoring_weights::ScoringWeights;
use crate::domain::scoring::{CandidateScore, ReasonTag, ScoreFactor, SlotContext, StaffProfile};
use crate::domain::types::{EmploymentType, ScoreTier, TimePreference};
use crate::engine::availability::{availability_score, time_compatible};
use tracing::{debug, instrument};

const TENURE_FULL_DAYS: f64 = 365.0;
const MAX_SKILL_LEVEL: f64 = 5.0;
const UNKNOWN_TENURE_RATIO: f64 = 0.5;

// ==========================================
// CandidateScorer - 常规代班评分引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CandidateScorer {
    weights: ScoringWeights,
}

impl CandidateScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按缺勤员工 id 在花名册中查找并排序候选
    ///
    /// 花名册中其余员工都是候选
    pub fn suggest_for(
        &self,
        absent_id: &str,
        roster: &[StaffProfile],
        ctx: &SlotContext,
    ) -> Vec<CandidateScore> {
        match roster.iter().find(|p| p.id == absent_id) {
            Some(absent) => self.rank(absent, roster, ctx),
            None => {
                debug!(absent_id = %absent_id, "缺勤员工不在花名册中");
                Vec::new()
            }
        }
    }

    /// 候选评分并排序
    ///
    /// # 返回
    /// 按总分降序（同分保持输入顺序）,最多 max_results 条;
    /// 与缺勤员工 id 相同的候选会被排除
    #[instrument(skip(self, absent, candidates), fields(
        absent_id = %absent.id,
        candidates_count = candidates.len(),
        day = ctx.day,
        hour = ctx.hour
    ))]
    pub fn rank(
        &self,
        absent: &StaffProfile,
        candidates: &[StaffProfile],
        ctx: &SlotContext,
    ) -> Vec<CandidateScore> {
        let mut scored: Vec<CandidateScore> = candidates
            .iter()
            .filter(|c| c.id != absent.id)
            .map(|c| self.score(absent, c, ctx))
            .collect();

        scored.sort_by(|a, b| b.total.total_cmp(&a.total));
        scored.truncate(self.weights.max_results);

        debug!(returned = scored.len(), "常规代班候选排序完成");
        scored
    }

    /// 单个候选评分
    pub fn score(
        &self,
        absent: &StaffProfile,
        candidate: &StaffProfile,
        ctx: &SlotContext,
    ) -> CandidateScore {
        let w = &self.weights;

        let skill = self.skill_match(absent, candidate);
        let availability = availability_score(
            &w.availability_rules,
            candidate.employment_type,
            candidate.preferred_hours,
            ctx.day,
            Some(ctx.hour),
        );
        let experience = self.experience(candidate);
        let preference = if time_compatible(candidate.preferred_hours, ctx.day, Some(ctx.hour)) {
            1.0
        } else {
            0.3
        };

        let raw = w.skill * skill
            + w.availability * availability
            + w.experience * experience
            + w.preference * preference;
        let total = clip_total(raw * 100.0);
        let tier = ScoreTier::from_score(total);

        let strongest_factor = strongest(&[
            (ScoreFactor::Skill, skill),
            (ScoreFactor::Availability, availability),
            (ScoreFactor::Experience, experience),
            (ScoreFactor::Preference, preference),
        ]);

        CandidateScore {
            worker_id: candidate.id.clone(),
            name: candidate.name.clone(),
            skill,
            availability,
            experience,
            preference,
            total,
            tier,
            strongest_factor,
            reason_tags: reason_tags(absent, candidate, tier, strongest_factor),
        }
    }

    // ==========================================
    // 分项评分
    // ==========================================

    /// 技能适配度: 部门 / 角色 / 技能等级差
    fn skill_match(&self, absent: &StaffProfile, candidate: &StaffProfile) -> f64 {
        let w = &self.weights;
        let dept = if absent.department == candidate.department {
            1.0
        } else {
            0.5
        };
        let role = if absent.role == candidate.role { 1.0 } else { 0.7 };
        let diff = (i32::from(absent.skill_level) - i32::from(candidate.skill_level)).abs();
        let level = (1.0 - 0.2 * f64::from(diff)).max(0.0);

        w.department_match * dept + w.role_match * role + w.skill_level_match * level
    }

    /// 经验: 在职天数（满一年封顶）+ 技能等级
    fn experience(&self, candidate: &StaffProfile) -> f64 {
        let w = &self.weights;
        let tenure = candidate
            .tenure_days
            .map(|d| (f64::from(d) / TENURE_FULL_DAYS).min(1.0))
            .unwrap_or(UNKNOWN_TENURE_RATIO);
        let level = f64::from(candidate.skill_level) / MAX_SKILL_LEVEL;

        w.tenure * tenure + w.skill_level * level
    }
}

/// 总分限制在 [0, 100],非数值按 0 处理
pub(crate) fn clip_total(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// 最高分项（同分取先出现者）
pub(crate) fn strongest<F: Copy>(factors: &[(F, f64)]) -> F {
    let mut best = factors[0];
    for &(factor, value) in &factors[1..] {
        if value > best.1 {
            best = (factor, value);
        }
    }
    best.0
}

fn reason_tags(
    absent: &StaffProfile,
    candidate: &StaffProfile,
    tier: ScoreTier,
    strongest_factor: ScoreFactor,
) -> Vec<ReasonTag> {
    let mut tags = vec![ReasonTag::StrongestFactor(strongest_factor)];

    if absent.department == candidate.department {
        tags.push(ReasonTag::SameDepartment);
    }
    if candidate.skill_level >= 4 {
        tags.push(ReasonTag::HighSkill);
    } else if candidate.skill_level >= 3 {
        tags.push(ReasonTag::StandardSkill);
    }
    if candidate.employment_type == EmploymentType::FullTime {
        tags.push(ReasonTag::FullTimeEmployee);
    }
    if candidate.preferred_hours == TimePreference::FullTime {
        tags.push(ReasonTag::FullTimeAvailable);
    }
    tags.push(ReasonTag::Tier(tier));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Role;

    fn create_test_profile(id: &str, dept: &str, skill: u8) -> StaffProfile {
        StaffProfile::new(id, id, dept, Role::Staff).with_skill_level(skill)
    }

    #[test]
    fn test_full_match_scores_92_8() {
        let absent = create_test_profile("A", "Sales", 3);
        let candidate = create_test_profile("C", "Sales", 3)
            .with_employment_type(EmploymentType::FullTime)
            .with_tenure_days(400)
            .with_preferred_hours(TimePreference::FullTime);

        let score = CandidateScorer::default().score(&absent, &candidate, &SlotContext { day: 1, hour: 9 });

        assert!((score.skill - 1.0).abs() < 1e-9);
        assert!((score.availability - 0.9).abs() < 1e-9);
        assert!((score.experience - 0.84).abs() < 1e-9);
        assert!((score.preference - 1.0).abs() < 1e-9);
        assert!((score.total - 92.8).abs() < 1e-9);
        assert_eq!(score.tier, ScoreTier::Optimal);
        assert_eq!(score.strongest_factor, ScoreFactor::Skill);
        assert!(score.reason_tags.contains(&ReasonTag::SameDepartment));
        assert!(score.reason_tags.contains(&ReasonTag::StandardSkill));
        assert!(score.reason_tags.contains(&ReasonTag::FullTimeAvailable));
    }

    #[test]
    fn test_unknown_tenure_uses_half() {
        let candidate = create_test_profile("C", "Sales", 5);
        let scorer = CandidateScorer::default();
        assert!((scorer.experience(&candidate) - (0.6 * 0.5 + 0.4)).abs() < 1e-9);
    }

    #[test]
    fn test_large_skill_gap_floors_at_zero() {
        let absent = create_test_profile("A", "Sales", 1);
        let candidate = StaffProfile::new("C", "C", "Ops", Role::Leader).with_skill_level(9);
        let skill = CandidateScorer::default().skill_match(&absent, &candidate);
        assert!((skill - (0.4 * 0.5 + 0.3 * 0.7)).abs() < 1e-9);
    }

    #[test]
    fn test_clip_total() {
        assert_eq!(clip_total(f64::NAN), 0.0);
        assert_eq!(clip_total(150.0), 100.0);
        assert_eq!(clip_total(-3.0), 0.0);
    }

    #[test]
    fn test_strongest_prefers_first_on_tie() {
        let factor = strongest(&[
            (ScoreFactor::Skill, 0.5),
            (ScoreFactor::Availability, 0.9),
            (ScoreFactor::Experience, 0.9),
        ]);
        assert_eq!(factor, ScoreFactor::Availability);
    }
}
