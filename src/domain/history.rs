// ==========================================
// 排班引擎 - 出勤历史记录
// ==========================================
// 用途: 紧急代班评分的历史信号（打卡数据由外部提供）
// ==========================================

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub staff_id: String,
    pub work_date: NaiveDate,
    pub department: String,
    #[serde(default)]
    pub scheduled_start: Option<NaiveTime>,
    #[serde(default)]
    pub clock_in: Option<NaiveTime>,
}

impl WorkRecord {
    pub fn new(staff_id: &str, work_date: NaiveDate, department: &str) -> Self {
        Self {
            staff_id: staff_id.to_string(),
            work_date,
            department: department.to_string(),
            scheduled_start: None,
            clock_in: None,
        }
    }

    pub fn with_times(mut self, scheduled_start: NaiveTime, clock_in: NaiveTime) -> Self {
        self.scheduled_start = Some(scheduled_start);
        self.clock_in = Some(clock_in);
        self
    }

    /// 是否准时（任一时间缺失视为准时）
    pub fn is_on_time(&self) -> bool {
        match (self.scheduled_start, self.clock_in) {
            (Some(scheduled), Some(actual)) => actual <= scheduled,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_time() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let late = NaiveTime::from_hms_opt(9, 5, 0).unwrap();

        assert!(WorkRecord::new("E1", date, "営業部").is_on_time());
        assert!(WorkRecord::new("E1", date, "営業部").with_times(nine, nine).is_on_time());
        assert!(!WorkRecord::new("E1", date, "営業部").with_times(nine, late).is_on_time());
    }
}
