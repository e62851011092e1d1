// ==========================================
// 紧急代班评分集成测试
// ==========================================
// 测试目标: 通过 API 验证历史信号驱动的紧急代班推荐
// ==========================================


use chrono::{NaiveDate, NaiveTime};
use shift_roster_engine::domain::types::{EmploymentType, Role, TimePreference};
use shift_roster_engine::domain::{EmergencyContext, WorkRecord};
use shift_roster_engine::engine::InMemoryWorkHistory;
use shift_roster_engine::{EngineConfig, RosterApi, StaffProfile};
use test_helpers::create_test_profile;

// ==========================================
// 测试辅助函数
// ==========================================

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// 缺勤日 2026-09-21（周一）
fn create_test_context(hour: Option<u8>) -> EmergencyContext {
    EmergencyContext {
        absence_date: date(21),
        hour,
    }
}

fn create_store_roster() -> Vec<StaffProfile> {
    let staff = |id: &str, dept: &str| {
        create_test_profile(
            id,
            dept,
            Role::Staff,
            3,
            EmploymentType::PartTime,
            TimePreference::FullTime,
        )
    };
    vec![
        staff("ABSENT", "鮮魚部"),
        staff("VETERAN", "鮮魚部"),
        staff("NEWCOMER", "鮮魚部"),
        staff("TRANSFER", "青果部"),
        staff("BOOKED", "鮮魚部"),
    ]
}

/// VETERAN: 最近两周鲜鱼部 7 天; TRANSFER: 青果部 7 天; BOOKED: 同 VETERAN 但当日已有排班
fn create_store_history() -> InMemoryWorkHistory {
    let mut records = Vec::new();
    for day in 14..=20 {
        records.push(WorkRecord::new("VETERAN", date(day), "鮮魚部"));
        records.push(WorkRecord::new("TRANSFER", date(day), "青果部"));
        records.push(
            WorkRecord::new("BOOKED", date(day), "鮮魚部").with_times(time(9, 0), time(9, 0)),
        );
    }
    InMemoryWorkHistory::new()
        .with_records(records)
        .with_commitment("BOOKED", date(21), Some(9))
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_department_history_ranks_first() {
    println!("\n=== 测试：近期同部门出勤者优先 ===");

    let api = RosterApi::new(EngineConfig::default()).unwrap();
    let results = api
        .suggest_emergency_substitutes(
            "ABSENT",
            &create_store_roster(),
            create_test_context(Some(9)),
            &create_store_history(),
        )
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].worker_id, "VETERAN");
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(results.iter().all(|r| (0.0..=100.0).contains(&r.score)));
    assert!(results.iter().all(|r| r.worker_id != "ABSENT"));

    let veteran = &results[0];
    assert!(veteran.can_start_immediately);
    assert_eq!(veteran.last_worked_in_department, Some(date(20)));
    assert!(veteran
        .reason_tags
        .contains(&"familiar_with_department".to_string()));
    assert!(!veteran.confidence_label.is_empty());
    assert!(!veteran.reason_text.is_empty());
}

#[test]
fn test_conflict_blocks_immediate_start() {
    println!("\n=== 测试：当日已有排班者不能立即开始 ===");

    let api = RosterApi::new(EngineConfig::default()).unwrap();
    let results = api
        .suggest_emergency_substitutes(
            "ABSENT",
            &create_store_roster(),
            create_test_context(Some(9)),
            &create_store_history(),
        )
        .unwrap();

    let booked = results
        .iter()
        .find(|r| r.worker_id == "BOOKED")
        .expect("BOOKED 应在前三名内");
    assert!(!booked.can_start_immediately);
    assert!(booked.score < results[0].score);
}

#[test]
fn test_other_department_history_counts_less() {
    println!("\n=== 测试：其他部门出勤不计入近期经验 ===");

    let api = RosterApi::new(EngineConfig::default()).unwrap();
    let roster = create_store_roster();
    let history = create_store_history();
    let results = api
        .suggest_emergency_substitutes("ABSENT", &roster, create_test_context(None), &history)
        .unwrap();

    let position = |id: &str| results.iter().position(|r| r.worker_id == id);
    let veteran = position("VETERAN").unwrap();
    if let Some(transfer) = position("TRANSFER") {
        assert!(veteran < transfer);
        assert_eq!(results[transfer].last_worked_in_department, None);
    }
}

#[test]
fn test_invalid_hour_rejected() {
    println!("\n=== 测试：小时非法 ===");

    let api = RosterApi::new(EngineConfig::default()).unwrap();
    let result = api.suggest_emergency_substitutes(
        "ABSENT",
        &create_store_roster(),
        create_test_context(Some(24)),
        &InMemoryWorkHistory::new(),
    );
    assert!(result.is_err());
}

#[test]
fn test_unknown_absent_returns_empty() {
    println!("\n=== 测试：缺勤员工不在花名册 ===");

    let api = RosterApi::new(EngineConfig::default()).unwrap();
    let results = api
        .suggest_emergency_substitutes(
            "NOBODY",
            &create_store_roster(),
            create_test_context(None),
            &create_store_history(),
        )
        .unwrap();
    assert!(results.is_empty());
}
