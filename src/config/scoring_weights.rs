// ==========================================
// 排班引擎 - 代班评分权重
// ==========================================
// 职责: 常规/紧急代班评分的权重与阈值（可调,不写死在引擎中）
// ==========================================

use crate::config::error::{check_weight, ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

// ==========================================
// AvailabilityRules - 出勤可能性规则
// ==========================================
// 雇佣形态基础分 × 时段适配系数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityRules {
    pub full_time_base: f64,
    pub part_time_base: f64,
    pub other_base: f64,

    pub full_time_multiplier: f64,    // 希望全职
    pub compatible_multiplier: f64,   // 时段相符
    pub incompatible_multiplier: f64, // 时段不符
}

impl Default for AvailabilityRules {
    fn default() -> Self {
        Self {
            full_time_base: 0.9,
            part_time_base: 0.7,
            other_base: 0.5,
            full_time_multiplier: 1.0,
            compatible_multiplier: 0.8,
            incompatible_multiplier: 0.3,
        }
    }
}

impl AvailabilityRules {
    pub fn validate(&self) -> ConfigResult<()> {
        check_weight("availability.full_time_base", self.full_time_base)?;
        check_weight("availability.part_time_base", self.part_time_base)?;
        check_weight("availability.other_base", self.other_base)?;
        check_weight("availability.full_time_multiplier", self.full_time_multiplier)?;
        check_weight("availability.compatible_multiplier", self.compatible_multiplier)?;
        check_weight("availability.incompatible_multiplier", self.incompatible_multiplier)?;
        Ok(())
    }
}

// ==========================================
// ScoringWeights - 常规代班评分
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // ===== 总分权重 =====
    pub skill: f64,
    pub availability: f64,
    pub experience: f64,
    pub preference: f64,

    // ===== 技能适配分项 =====
    pub department_match: f64,
    pub role_match: f64,
    pub skill_level_match: f64,

    // ===== 经验分项 =====
    pub tenure: f64,
    pub skill_level: f64,

    pub availability_rules: AvailabilityRules,

    /// 返回候选人数上限
    pub max_results: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.3,
            availability: 0.4,
            experience: 0.2,
            preference: 0.1,
            department_match: 0.4,
            role_match: 0.3,
            skill_level_match: 0.3,
            tenure: 0.6,
            skill_level: 0.4,
            availability_rules: AvailabilityRules::default(),
            max_results: 5,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> ConfigResult<()> {
        check_weight("scoring.skill", self.skill)?;
        check_weight("scoring.availability", self.availability)?;
        check_weight("scoring.experience", self.experience)?;
        check_weight("scoring.preference", self.preference)?;
        check_weight("scoring.department_match", self.department_match)?;
        check_weight("scoring.role_match", self.role_match)?;
        check_weight("scoring.skill_level_match", self.skill_level_match)?;
        check_weight("scoring.tenure", self.tenure)?;
        check_weight("scoring.skill_level", self.skill_level)?;
        self.availability_rules.validate()?;

        if self.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.max_results".to_string(),
                message: "必须 >= 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn total_weight(&self) -> f64 {
        self.skill + self.availability + self.experience + self.preference
    }
}

// ==========================================
// EmergencyWeights - 紧急代班评分
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyWeights {
    // ===== 总分权重 =====
    pub recent_experience: f64,
    pub department_familiarity: f64,
    pub reliability: f64,
    pub immediate_availability: f64,

    // ===== 信赖度分项 =====
    pub attendance: f64,
    pub punctuality: f64,
    /// 无历史记录时的信赖度
    pub default_reliability: f64,

    /// 当日已有其他排班时的扣分
    pub conflict_penalty: f64,

    // ===== 历史窗口（天） =====
    pub recent_window_days: u32,
    pub familiarity_window_days: u32,
    pub reliability_window_days: u32,

    pub availability_rules: AvailabilityRules,

    /// 返回候选人数上限（紧急时收窄选择）
    pub max_results: usize,
}

impl Default for EmergencyWeights {
    fn default() -> Self {
        Self {
            recent_experience: 0.4,
            department_familiarity: 0.3,
            reliability: 0.2,
            immediate_availability: 0.1,
            attendance: 0.7,
            punctuality: 0.3,
            default_reliability: 0.5,
            conflict_penalty: 0.3,
            recent_window_days: 14,
            familiarity_window_days: 90,
            reliability_window_days: 30,
            availability_rules: AvailabilityRules::default(),
            max_results: 3,
        }
    }
}

impl EmergencyWeights {
    pub fn validate(&self) -> ConfigResult<()> {
        check_weight("emergency.recent_experience", self.recent_experience)?;
        check_weight("emergency.department_familiarity", self.department_familiarity)?;
        check_weight("emergency.reliability", self.reliability)?;
        check_weight("emergency.immediate_availability", self.immediate_availability)?;
        check_weight("emergency.attendance", self.attendance)?;
        check_weight("emergency.punctuality", self.punctuality)?;
        check_weight("emergency.default_reliability", self.default_reliability)?;
        check_weight("emergency.conflict_penalty", self.conflict_penalty)?;
        self.availability_rules.validate()?;

        for (field, days) in [
            ("emergency.recent_window_days", self.recent_window_days),
            ("emergency.familiarity_window_days", self.familiarity_window_days),
            ("emergency.reliability_window_days", self.reliability_window_days),
        ] {
            if days == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "窗口天数必须 >= 1".to_string(),
                });
            }
        }

        if self.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                field: "emergency.max_results".to_string(),
                message: "必须 >= 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let routine = ScoringWeights::default();
        assert!((routine.total_weight() - 1.0).abs() < 1e-9);
        assert!(routine.validate().is_ok());

        let emergency = EmergencyWeights::default();
        let sum = emergency.recent_experience
            + emergency.department_familiarity
            + emergency.reliability
            + emergency.immediate_availability;
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(emergency.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            preference: -0.1,
            ..ScoringWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_zero_window_rejected() {
        let weights = EmergencyWeights {
            recent_window_days: 0,
            ..EmergencyWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
