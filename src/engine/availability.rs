// ==========================================
// 排班引擎 - 出勤可能性规则
// ==========================================
// 职责: 时段窗口判定 + 雇佣形态基础分（常规/紧急评分共用）
// 窗口定义:
// - 全职: 任意时段
// - 上午: 5..=11 时 / 下午: 12..=17 时 / 夕方: 17..=23 时
// - 周末: 周六、周日（day 6, 7）
// - 未指定: 不匹配任何时段
// ==========================================

use crate::config::scoring_weights::AvailabilityRules;
use crate::domain::types::{EmploymentType, TimePreference};

/// 希望时段是否覆盖 (day, hour)
///
/// `hour` 缺省时（紧急代班只知道日期）只判断与日期相关的窗口,
/// 小时窗口视为相符
pub fn time_compatible(preference: TimePreference, day: u8, hour: Option<u8>) -> bool {
    let hour_in = |lo: u8, hi: u8| hour.map_or(true, |h| (lo..=hi).contains(&h));
    match preference {
        TimePreference::FullTime => true,
        TimePreference::Morning => hour_in(5, 11),
        TimePreference::Afternoon => hour_in(12, 17),
        TimePreference::Evening => hour_in(17, 23),
        TimePreference::Weekends => day == 6 || day == 7,
        TimePreference::Unspecified => false,
    }
}

/// 时段适配系数
pub fn time_multiplier(
    rules: &AvailabilityRules,
    preference: TimePreference,
    day: u8,
    hour: Option<u8>,
) -> f64 {
    if preference == TimePreference::FullTime {
        rules.full_time_multiplier
    } else if time_compatible(preference, day, hour) {
        rules.compatible_multiplier
    } else {
        rules.incompatible_multiplier
    }
}

/// 雇佣形态基础分
pub fn employment_base(rules: &AvailabilityRules, employment_type: EmploymentType) -> f64 {
    match employment_type {
        EmploymentType::FullTime => rules.full_time_base,
        EmploymentType::PartTime => rules.part_time_base,
        EmploymentType::Casual => rules.other_base,
    }
}

/// 基础分 × 时段系数
pub fn availability_score(
    rules: &AvailabilityRules,
    employment_type: EmploymentType,
    preference: TimePreference,
    day: u8,
    hour: Option<u8>,
) -> f64 {
    employment_base(rules, employment_type) * time_multiplier(rules, preference, day, hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_windows() {
        assert!(time_compatible(TimePreference::FullTime, 3, Some(2)));
        assert!(time_compatible(TimePreference::Morning, 1, Some(9)));
        assert!(!time_compatible(TimePreference::Morning, 1, Some(12)));
        assert!(time_compatible(TimePreference::Afternoon, 1, Some(17)));
        assert!(time_compatible(TimePreference::Evening, 1, Some(17)));
        assert!(time_compatible(TimePreference::Weekends, 7, Some(3)));
        assert!(!time_compatible(TimePreference::Weekends, 5, Some(10)));
        assert!(!time_compatible(TimePreference::Unspecified, 1, Some(9)));
        assert!(time_compatible(TimePreference::Morning, 1, None));
    }

    #[test]
    fn test_availability_score() {
        let rules = AvailabilityRules::default();
        let full = availability_score(
            &rules,
            EmploymentType::FullTime,
            TimePreference::FullTime,
            1,
            Some(9),
        );
        assert!((full - 0.9).abs() < 1e-9);

        let part = availability_score(
            &rules,
            EmploymentType::PartTime,
            TimePreference::Evening,
            1,
            Some(9),
        );
        assert!((part - 0.21).abs() < 1e-9);

        let casual = availability_score(
            &rules,
            EmploymentType::Casual,
            TimePreference::Morning,
            1,
            Some(9),
        );
        assert!((casual - 0.4).abs() < 1e-9);
    }
}
