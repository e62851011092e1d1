// ==========================================
// 排班引擎 - 出勤历史数据源
// ==========================================
// 职责: 紧急代班评分所需的历史信号接口（打卡记录、排定天数、当日冲突）
// 红线: 引擎只读历史,不缓存,不持久化
// ==========================================

use crate::domain::history::WorkRecord;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

// ==========================================
// HistoryError - 历史数据源错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("历史数据源不可用: {0}")]
    Unavailable(String),

    #[error("无效的查询区间: {start} ~ {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

pub type HistoryResult<T> = Result<T, HistoryError>;

// ==========================================
// WorkHistoryProvider - 历史数据源 Trait
// ==========================================
// 所有区间均为闭区间 [start, end]
pub trait WorkHistoryProvider: Send + Sync {
    /// 区间内的出勤记录
    fn records_between(
        &self,
        staff_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HistoryResult<Vec<WorkRecord>>;

    /// 区间内的排定上班天数（未知返回 None）
    fn scheduled_days_between(
        &self,
        staff_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HistoryResult<Option<u32>>;

    /// 当日（或当日某小时）是否已有其他排班
    ///
    /// `hour` 为 None 时检查整天
    fn has_conflict(&self, staff_id: &str, date: NaiveDate, hour: Option<u8>) -> HistoryResult<bool>;

    /// 早于 `before` 的最近一次在该部门出勤日期
    fn last_worked_in(
        &self,
        staff_id: &str,
        department: &str,
        before: NaiveDate,
    ) -> HistoryResult<Option<NaiveDate>> {
        let Some(end) = before.pred_opt() else {
            return Ok(None);
        };
        Ok(self
            .records_between(staff_id, NaiveDate::MIN, end)?
            .into_iter()
            .filter(|r| r.department == department)
            .map(|r| r.work_date)
            .max())
    }
}

// ==========================================
// InMemoryWorkHistory - 内存数据源
// ==========================================
// 用途: 调用方一次性提供快照; 测试
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkHistory {
    records: Vec<WorkRecord>,
    scheduled: HashMap<String, BTreeSet<NaiveDate>>,
    commitments: Vec<(String, NaiveDate, Option<u8>)>, // (staff_id, 日期, 小时; None=全天)
}

impl InMemoryWorkHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records<I: IntoIterator<Item = WorkRecord>>(mut self, records: I) -> Self {
        self.records.extend(records);
        self
    }

    pub fn with_scheduled_days<I: IntoIterator<Item = NaiveDate>>(
        mut self,
        staff_id: &str,
        days: I,
    ) -> Self {
        self.scheduled
            .entry(staff_id.to_string())
            .or_default()
            .extend(days);
        self
    }

    pub fn with_commitment(mut self, staff_id: &str, date: NaiveDate, hour: Option<u8>) -> Self {
        self.commitments.push((staff_id.to_string(), date, hour));
        self
    }
}

impl WorkHistoryProvider for InMemoryWorkHistory {
    fn records_between(
        &self,
        staff_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HistoryResult<Vec<WorkRecord>> {
        if start > end {
            return Err(HistoryError::InvalidRange { start, end });
        }
        Ok(self
            .records
            .iter()
            .filter(|r| r.staff_id == staff_id && r.work_date >= start && r.work_date <= end)
            .cloned()
            .collect())
    }

    fn scheduled_days_between(
        &self,
        staff_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HistoryResult<Option<u32>> {
        if start > end {
            return Err(HistoryError::InvalidRange { start, end });
        }
        Ok(self
            .scheduled
            .get(staff_id)
            .map(|days| days.range(start..=end).count() as u32))
    }

    fn has_conflict(&self, staff_id: &str, date: NaiveDate, hour: Option<u8>) -> HistoryResult<bool> {
        Ok(self.commitments.iter().any(|(id, d, h)| {
            id == staff_id
                && *d == date
                && match (hour, h) {
                    (Some(query), Some(booked)) => query == *booked,
                    _ => true,
                }
        }))
    }
}
