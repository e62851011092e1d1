// ==========================================
// 排班引擎 - 花名册记录校验器
// ==========================================
// 职责: RawWorkerRecord → Worker（类型转换 + 取值范围校验）
// 规则:
// - id 缺省时使用 name; 两者均缺失为无效记录
// - ability / role / max_days 必填
// - 时间与日期集合允许为空,元素以 "," "、" 或空白分隔
// ==========================================

use crate::domain::types::Role;
use crate::domain::worker::{RawWorkerRecord, Worker};
use crate::importer::error::{ImportError, ImportResult};
use std::collections::BTreeSet;

const HOUR_RANGE: (i64, i64) = (0, 23);
const DAY_RANGE: (i64, i64) = (1, 7);

#[derive(Debug, Clone, Copy, Default)]
pub struct RosterValidator;

impl RosterValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验并转换单条记录
    ///
    /// # 返回
    /// - Ok(Worker): 有效记录
    /// - Err(ImportError): 第一个违规项（该记录应被跳过）
    pub fn validate(&self, record: &RawWorkerRecord) -> ImportResult<Worker> {
        let row = record.row_number;

        let id = record
            .id
            .clone()
            .or_else(|| record.name.clone())
            .ok_or_else(|| missing(row, "id"))?;
        let name = record.name.clone().unwrap_or_else(|| id.clone());

        let ability_raw = record.ability.as_deref().ok_or_else(|| missing(row, "ability"))?;
        let ability = parse_int(row, "ability", ability_raw)?;
        let ability = i32::try_from(ability).map_err(|_| ImportError::TypeConversionError {
            row,
            field: "ability".to_string(),
            value: ability_raw.to_string(),
        })?;

        let role = record
            .role
            .as_deref()
            .and_then(Role::from_label)
            .ok_or_else(|| missing(row, "role"))?;

        let max_days_raw = record.max_days.as_deref().ok_or_else(|| missing(row, "max_days"))?;
        let max_days = parse_int(row, "max_days", max_days_raw)?;
        if max_days < 0 || max_days > i64::from(u32::MAX) {
            return Err(ImportError::ValueRangeError {
                row,
                field: "max_days".to_string(),
                value: max_days,
                min: 0,
                max: i64::from(u32::MAX),
            });
        }

        let available_hours =
            parse_set(row, "available_hours", record.available_hours.as_deref(), HOUR_RANGE)?;
        let preferred_days =
            parse_set(row, "preferred_days", record.preferred_days.as_deref(), DAY_RANGE)?;

        Ok(Worker {
            id,
            name,
            ability,
            role,
            max_days: max_days as u32,
            available_hours,
            preferred_days,
        })
    }
}

fn missing(row: usize, field: &str) -> ImportError {
    ImportError::MissingField {
        row,
        field: field.to_string(),
    }
}

fn parse_int(row: usize, field: &str, raw: &str) -> ImportResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ImportError::TypeConversionError {
            row,
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// 解析整数集合（"9,10、11 12" → {9,10,11,12}）
fn parse_set(
    row: usize,
    field: &str,
    raw: Option<&str>,
    (min, max): (i64, i64),
) -> ImportResult<BTreeSet<u8>> {
    let mut set = BTreeSet::new();
    let Some(raw) = raw else {
        return Ok(set);
    };

    for token in raw
        .split(|c: char| c == ',' || c == '、' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let value = parse_int(row, field, token)?;
        if value < min || value > max {
            return Err(ImportError::ValueRangeError {
                row,
                field: field.to_string(),
                value,
                min,
                max,
            });
        }
        set.insert(value as u8);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> RawWorkerRecord {
        RawWorkerRecord {
            id: Some("W1".to_string()),
            name: Some("田中".to_string()),
            ability: Some("8".to_string()),
            role: Some("Leader".to_string()),
            max_days: Some("5".to_string()),
            available_hours: Some("9, 10、11".to_string()),
            preferred_days: Some("1 2".to_string()),
            row_number: 1,
        }
    }

    #[test]
    fn test_valid_record() {
        let worker = RosterValidator::new().validate(&create_test_record()).unwrap();
        assert_eq!(worker.id, "W1");
        assert_eq!(worker.role, Role::Leader);
        assert_eq!(worker.available_hours, [9, 10, 11].into_iter().collect());
        assert_eq!(worker.preferred_days, [1, 2].into_iter().collect());
    }

    #[test]
    fn test_id_falls_back_to_name() {
        let record = RawWorkerRecord {
            id: None,
            ..create_test_record()
        };
        let worker = RosterValidator::new().validate(&record).unwrap();
        assert_eq!(worker.id, "田中");

        let record = RawWorkerRecord {
            id: None,
            name: None,
            ..create_test_record()
        };
        let err = RosterValidator::new().validate(&record).unwrap_err();
        assert!(matches!(err, ImportError::MissingField { ref field, .. } if field == "id"));
    }

    #[test]
    fn test_out_of_range_hour_rejected() {
        let record = RawWorkerRecord {
            available_hours: Some("9,24".to_string()),
            ..create_test_record()
        };
        let err = RosterValidator::new().validate(&record).unwrap_err();
        assert!(matches!(err, ImportError::ValueRangeError { value: 24, .. }));
    }

    #[test]
    fn test_unparsable_day_rejected() {
        let record = RawWorkerRecord {
            preferred_days: Some("月".to_string()),
            ..create_test_record()
        };
        let err = RosterValidator::new().validate(&record).unwrap_err();
        assert!(matches!(err, ImportError::TypeConversionError { .. }));
    }

    #[test]
    fn test_missing_role_and_negative_max_days() {
        let record = RawWorkerRecord {
            role: Some("  ".to_string()),
            ..create_test_record()
        };
        assert!(matches!(
            RosterValidator::new().validate(&record),
            Err(ImportError::MissingField { .. })
        ));

        let record = RawWorkerRecord {
            max_days: Some("-1".to_string()),
            ..create_test_record()
        };
        assert!(matches!(
            RosterValidator::new().validate(&record),
            Err(ImportError::ValueRangeError { value: -1, .. })
        ));
    }
}
