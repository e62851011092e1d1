// ==========================================
// 排班引擎 - 排班运行配置
// ==========================================
// 职责: 日期/小时范围、繁忙时段、需求人数、连勤规则
// 默认值: 周一至周日, 8..=20 时, 繁忙 11-13/17-19 时, 普通 3 人/繁忙 4 人
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::slot::Slot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// RunConfig - 排班运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    // ===== 时段范围 =====
    pub days: BTreeSet<u8>,
    pub hours: BTreeSet<u8>,
    pub busy_hours: BTreeSet<u8>,

    // ===== 需求人数 =====
    pub normal_required: usize,
    pub busy_required: usize,
    pub leader_required: usize,

    // ===== 连勤规则 =====
    /// 是否在约束分配阶段限制连续上班天数
    pub enforce_consecutive_days: bool,
    pub max_consecutive_days: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            days: (1..=7).collect(),
            hours: (8..=20).collect(),
            busy_hours: [11, 12, 13, 17, 18, 19].into_iter().collect(),
            normal_required: 3,
            busy_required: 4,
            leader_required: 1,
            enforce_consecutive_days: true,
            max_consecutive_days: 3,
        }
    }
}

impl RunConfig {
    pub fn is_busy(&self, hour: u8) -> bool {
        self.busy_hours.contains(&hour)
    }

    pub fn required_for(&self, hour: u8) -> usize {
        if self.is_busy(hour) {
            self.busy_required
        } else {
            self.normal_required
        }
    }

    /// 按 日→时 升序生成空时段
    pub fn build_slots(&self) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(self.days.len() * self.hours.len());
        for &day in &self.days {
            for &hour in &self.hours {
                slots.push(Slot::new(
                    day,
                    hour,
                    self.is_busy(hour),
                    self.required_for(hour),
                    self.leader_required,
                ));
            }
        }
        slots
    }

    /// 验证配置有效性
    ///
    /// # 验证规则
    /// 1. days / hours 不能为空
    /// 2. days ∈ 1..=7, hours/busy_hours ∈ 0..=23
    /// 3. 启用连勤规则时 max_consecutive_days >= 1
    pub fn validate(&self) -> ConfigResult<()> {
        if self.days.is_empty() {
            return Err(ConfigError::EmptySet("days".to_string()));
        }
        if self.hours.is_empty() {
            return Err(ConfigError::EmptySet("hours".to_string()));
        }

        if let Some(&day) = self.days.iter().find(|d| !(1..=7).contains(*d)) {
            return Err(ConfigError::InvalidDay {
                field: "days".to_string(),
                value: day,
            });
        }

        for (field, set) in [("hours", &self.hours), ("busy_hours", &self.busy_hours)] {
            if let Some(&hour) = set.iter().find(|h| **h > 23) {
                return Err(ConfigError::InvalidHour {
                    field: field.to_string(),
                    value: hour,
                });
            }
        }

        if self.enforce_consecutive_days && self.max_consecutive_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_consecutive_days".to_string(),
                message: "启用连勤规则时必须 >= 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_store_hours() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.required_for(12), 4);
        assert_eq!(config.required_for(9), 3);

        let slots = config.build_slots();
        assert_eq!(slots.len(), 7 * 13);
        assert_eq!(slots[0].key(), (1, 8));
        assert_eq!(slots[1].key(), (1, 9));
        assert_eq!(slots.last().unwrap().key(), (7, 20));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = RunConfig::default();
        config.hours.insert(24);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidHour { value: 24, .. })
        ));

        let mut config = RunConfig::default();
        config.days.insert(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDay { value: 0, .. })
        ));

        let config = RunConfig {
            days: BTreeSet::new(),
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptySet(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"days":[1],"hours":[9],"normal_required":2}"#).unwrap();
        assert_eq!(config.normal_required, 2);
        assert_eq!(config.busy_required, 4);
        assert!(config.enforce_consecutive_days);
        assert_eq!(config.max_consecutive_days, 3);
    }
}
