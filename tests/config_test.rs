// ==========================================
// 配置加载集成测试
// ==========================================
// 测试目标: 验证配置文件加载、部分覆盖与取值校验
// ==========================================


use shift_roster_engine::config::ConfigError;
use shift_roster_engine::{ConfigManager, RosterApi};
use test_helpers::write_temp_config;

#[test]
fn test_load_partial_config_from_file() {
    println!("\n=== 测试：部分覆盖的配置文件 ===");

    let file = write_temp_config(
        r#"{
            "run": {
                "days": [1, 2, 3, 4, 5],
                "hours": [10, 11, 12],
                "busy_hours": [12],
                "busy_required": 5
            },
            "scoring": { "max_results": 2 }
        }"#,
    );

    let manager = ConfigManager::from_file(file.path()).unwrap();
    let run = manager.run_config();

    assert_eq!(run.days.len(), 5);
    assert_eq!(run.required_for(12), 5);
    // 未指定的字段取默认值
    assert_eq!(run.required_for(10), 3);
    assert_eq!(run.leader_required, 1);
    assert!(run.enforce_consecutive_days);
    assert_eq!(manager.scoring_weights().max_results, 2);
    assert!((manager.scoring_weights().skill - 0.3).abs() < 1e-9);
    assert_eq!(manager.emergency_weights().max_results, 3);
    assert_eq!(manager.source(), Some(file.path()));
}

#[test]
fn test_missing_file_reports_path() {
    println!("\n=== 测试：配置文件不存在 ===");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    match ConfigManager::from_file(&path) {
        Err(ConfigError::FileRead { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_json_rejected() {
    println!("\n=== 测试：JSON 格式错误 ===");

    let file = write_temp_config("{ \"run\": ");
    assert!(matches!(
        ConfigManager::from_file(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_out_of_range_values_rejected() {
    println!("\n=== 测试：取值超出范围 ===");

    let cases = [
        (r#"{ "run": { "days": [0, 1] } }"#, "days"),
        (r#"{ "run": { "hours": [] } }"#, "hours"),
        (r#"{ "run": { "busy_hours": [24] } }"#, "busy_hours"),
        (r#"{ "scoring": { "skill": -0.5 } }"#, "skill"),
        (r#"{ "emergency": { "recent_window_days": 0 } }"#, "window"),
    ];

    for (raw, label) in cases {
        let file = write_temp_config(raw);
        assert!(
            ConfigManager::from_file(file.path()).is_err(),
            "{} should be rejected",
            label
        );
    }
}

#[test]
fn test_snapshot_round_trips_into_api() {
    println!("\n=== 测试：配置快照可再次加载 ===");

    let file = write_temp_config(r#"{ "run": { "normal_required": 2 } }"#);
    let manager = ConfigManager::from_file(file.path()).unwrap();

    let snapshot = manager.get_config_snapshot().unwrap();
    let reloaded = ConfigManager::from_json_str(&snapshot).unwrap();
    assert_eq!(reloaded.config(), manager.config());

    let api = RosterApi::from_manager(&reloaded).unwrap();
    assert_eq!(api.config().run.normal_required, 2);
}
