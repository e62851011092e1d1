// ==========================================
// 排班引擎 - 推荐理由格式化
// ==========================================
// 职责: 结构化理由标签 / 告警 → 当前语言文本
// 红线: 纯展示层,评分与排序不依赖本模块
// ==========================================

use crate::domain::run::RunWarning;
use crate::domain::scoring::{CandidateScore, EmergencyCandidate, ReasonTag, ScoreFactor};
use crate::domain::types::{ConfidenceLevel, ScoreTier};
use crate::i18n::{t, t_with_args};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReasonFormatter;

impl ReasonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// 单个标签文本
    pub fn tag_text(&self, tag: &ReasonTag) -> String {
        let key = match tag {
            ReasonTag::SameDepartment => "reason.same_department",
            ReasonTag::HighSkill => "reason.high_skill",
            ReasonTag::StandardSkill => "reason.standard_skill",
            ReasonTag::FullTimeEmployee => "reason.full_time_employee",
            ReasonTag::FullTimeAvailable => "reason.full_time_available",
            ReasonTag::StrongestFactor(factor) => match factor {
                ScoreFactor::Skill => "reason.strongest.skill",
                ScoreFactor::Availability => "reason.strongest.availability",
                ScoreFactor::Experience => "reason.strongest.experience",
                ScoreFactor::Preference => "reason.strongest.preference",
            },
            ReasonTag::Tier(tier) => match tier {
                ScoreTier::Optimal => "reason.tier.optimal",
                ScoreTier::Good => "reason.tier.good",
                ScoreTier::Possible => "reason.tier.possible",
                ScoreTier::NeedsAdjustment => "reason.tier.needs_adjustment",
            },
            ReasonTag::RecentDepartmentWork => "reason.recent_department_work",
            ReasonTag::FamiliarWithDepartment => "reason.familiar_with_department",
            ReasonTag::HighReliability => "reason.high_reliability",
            ReasonTag::ImmediatelyAvailable => "reason.immediately_available",
            ReasonTag::AvailableCandidate => "reason.available_candidate",
        };
        t(key)
    }

    /// 常规代班推荐理由
    pub fn format_candidate(&self, score: &CandidateScore) -> String {
        self.join(&score.reason_tags, "reason.separator")
    }

    /// 紧急代班简短理由
    pub fn format_emergency(&self, candidate: &EmergencyCandidate) -> String {
        self.join(&candidate.reason_tags, "reason.quick_separator")
    }

    pub fn confidence_label(&self, level: ConfidenceLevel) -> String {
        let key = match level {
            ConfidenceLevel::Optimal => "confidence.optimal",
            ConfidenceLevel::GoodFit => "confidence.good_fit",
            ConfidenceLevel::Possible => "confidence.possible",
            ConfidenceLevel::NeedsReview => "confidence.needs_review",
        };
        t(key)
    }

    /// 运行告警文本
    pub fn format_warning(&self, warning: &RunWarning) -> String {
        match warning {
            RunWarning::UnderStaffedSlot {
                day,
                hour,
                required_count,
                assigned_count,
                required_leader_count,
                leader_count,
            } => t_with_args(
                "warning.under_staffed",
                &[
                    ("day", &day.to_string()),
                    ("hour", &hour.to_string()),
                    ("required", &required_count.to_string()),
                    ("assigned", &assigned_count.to_string()),
                    ("required_leaders", &required_leader_count.to_string()),
                    ("leaders", &leader_count.to_string()),
                ],
            ),
            RunWarning::CapExceeded {
                worker_id,
                assigned_days,
                max_days,
            } => t_with_args(
                "warning.cap_exceeded",
                &[
                    ("worker", worker_id),
                    ("assigned", &assigned_days.to_string()),
                    ("max", &max_days.to_string()),
                ],
            ),
            RunWarning::InvalidWorkerRecord {
                row_number, reason, ..
            } => t_with_args(
                "warning.invalid_record",
                &[("row", &row_number.to_string()), ("reason", reason)],
            ),
        }
    }

    fn join(&self, tags: &[ReasonTag], separator_key: &str) -> String {
        tags.iter()
            .map(|tag| self.tag_text(tag))
            .collect::<Vec<_>>()
            .join(&t(separator_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ConfidenceLevel;
    use crate::i18n::{set_locale, LOCALE_TEST_LOCK};

    #[test]
    fn test_join_with_locale_separator() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        let formatter = ReasonFormatter::new();
        let tags = [ReasonTag::SameDepartment, ReasonTag::HighSkill];

        set_locale("ja");
        assert_eq!(formatter.join(&tags, "reason.separator"), "同部門・高スキル");

        set_locale("en");
        assert_eq!(
            formatter.join(&tags, "reason.separator"),
            "Same department, High skill"
        );
        assert_eq!(formatter.confidence_label(ConfidenceLevel::GoodFit), "Good fit");

        set_locale("ja");
    }

    #[test]
    fn test_warning_text() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let text = ReasonFormatter::new().format_warning(&RunWarning::CapExceeded {
            worker_id: "W1".to_string(),
            assigned_days: 6,
            max_days: 5,
        });
        assert!(text.contains("W1"));
        assert!(text.contains('6'));
        set_locale("ja");
    }
}
