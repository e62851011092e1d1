// ==========================================
// 排班引擎 - API 数据传输对象
// ==========================================
// 职责: 对外记录格式（供导出、界面、通知层消费）
// ==========================================

use crate::domain::assignment::WorkerAssignment;
use crate::domain::run::{FallbackAssignment, RunWarning};
use crate::domain::scoring::{CandidateScore, EmergencyCandidate};
use crate::domain::slot::Slot;
use crate::domain::types::ConfidenceLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// 排班结果
// ==========================================

/// 时段记录（导出表格的一行: 日、时、繁忙、需求人数、员工）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub day: u8,
    pub hour: u8,
    pub busy: bool,
    pub required_count: usize,
    pub assigned: Vec<String>,       // worker id
    pub assigned_names: Vec<String>, // 与 assigned 一一对应
}

impl SlotRecord {
    pub(crate) fn from_slot(slot: &Slot, names: &HashMap<&str, &str>) -> Self {
        Self {
            day: slot.day,
            hour: slot.hour,
            busy: slot.busy,
            required_count: slot.required_count,
            assigned: slot.assigned.clone(),
            assigned_names: slot
                .assigned
                .iter()
                .map(|id| names.get(id.as_str()).copied().unwrap_or(id.as_str()).to_string())
                .collect(),
        }
    }
}

/// 排班运行响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanShiftsResponse {
    pub slots: Vec<SlotRecord>,
    pub workers: Vec<WorkerAssignment>,
    pub fallback_assignments: Vec<FallbackAssignment>,
    pub warnings: Vec<RunWarning>,
    pub warning_messages: Vec<String>, // 当前语言的告警文本
}

// ==========================================
// 代班推荐
// ==========================================

/// 常规代班推荐
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub worker_id: String,
    pub name: String,
    pub score: f64,
    pub reason_tags: Vec<String>,
    pub reason_text: String,
}

impl SuggestionRecord {
    pub(crate) fn new(score: &CandidateScore, reason_text: String) -> Self {
        Self {
            worker_id: score.worker_id.clone(),
            name: score.name.clone(),
            score: score.total,
            reason_tags: score.reason_tags.iter().map(|t| t.code()).collect(),
            reason_text,
        }
    }
}

/// 紧急代班推荐
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencySuggestionRecord {
    pub worker_id: String,
    pub name: String,
    pub score: f64,
    pub confidence: ConfidenceLevel,
    pub confidence_label: String,
    pub reason_tags: Vec<String>,
    pub reason_text: String,
    pub can_start_immediately: bool,
    pub last_worked_in_department: Option<NaiveDate>,
}

impl EmergencySuggestionRecord {
    pub(crate) fn new(
        candidate: &EmergencyCandidate,
        confidence_label: String,
        reason_text: String,
    ) -> Self {
        Self {
            worker_id: candidate.worker_id.clone(),
            name: candidate.name.clone(),
            score: candidate.total,
            confidence: candidate.confidence,
            confidence_label,
            reason_tags: candidate.reason_tags.iter().map(|t| t.code()).collect(),
            reason_text,
            can_start_immediately: candidate.can_start_immediately,
            last_worked_in_department: candidate.last_worked_in_department,
        }
    }
}
