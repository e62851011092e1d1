// ==========================================
// 排班引擎 - 字段映射器
// ==========================================
// 职责: 源列名（含别名）→ RawWorkerRecord 标准字段
// 红线: 只做列名归一,不做类型转换（交给 RosterValidator）
// ==========================================

use crate::domain::worker::RawWorkerRecord;
use serde_json::{Map, Value};
use std::collections::HashMap;

// 标准字段 → 可接受的列名
const ID_ALIASES: &[&str] = &["id", "worker_id", "従業員ID", "スタッフID"];
const NAME_ALIASES: &[&str] = &["name", "スタッフ名", "氏名"];
const ABILITY_ALIASES: &[&str] = &["ability", "能力"];
const ROLE_ALIASES: &[&str] = &["role", "役職"];
const MAX_DAYS_ALIASES: &[&str] = &["max_days", "勤務日数"];
const HOURS_ALIASES: &[&str] = &["available_hours", "勤務可能時間"];
const DAYS_ALIASES: &[&str] = &["preferred_days", "希望勤務日"];

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl FieldMapper {
    pub fn new() -> Self {
        Self
    }

    /// 映射表格行（CSV/表格类来源,值均为字符串）
    pub fn map_row(&self, row: &HashMap<String, String>, row_number: usize) -> RawWorkerRecord {
        let get = |aliases: &[&str]| -> Option<String> {
            aliases
                .iter()
                .filter_map(|alias| row.get(*alias))
                .map(|v| v.trim())
                .find(|v| !v.is_empty())
                .map(str::to_string)
        };

        RawWorkerRecord {
            id: get(ID_ALIASES),
            name: get(NAME_ALIASES),
            ability: get(ABILITY_ALIASES),
            role: get(ROLE_ALIASES),
            max_days: get(MAX_DAYS_ALIASES),
            available_hours: get(HOURS_ALIASES),
            preferred_days: get(DAYS_ALIASES),
            row_number,
        }
    }

    /// 映射 JSON 对象行
    ///
    /// 数字转为十进制字符串,数组转为逗号分隔字符串,null 视为缺失
    pub fn map_json_row(&self, row: &Map<String, Value>, row_number: usize) -> RawWorkerRecord {
        let get = |aliases: &[&str]| -> Option<String> {
            aliases
                .iter()
                .filter_map(|alias| row.get(*alias))
                .filter_map(json_to_text)
                .find(|v| !v.is_empty())
        };

        RawWorkerRecord {
            id: get(ID_ALIASES),
            name: get(NAME_ALIASES),
            ability: get(ABILITY_ALIASES),
            role: get(ROLE_ALIASES),
            max_days: get(MAX_DAYS_ALIASES),
            available_hours: get(HOURS_ALIASES),
            preferred_days: get(DAYS_ALIASES),
            row_number,
        }
    }
}

fn json_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(json_to_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
