// ==========================================
// 常规代班评分引擎集成测试
// ==========================================
// 测试目标: 验证加权适配度评分、排序与截断
// ==========================================


use shift_roster_engine::domain::types::{EmploymentType, Role, ScoreTier, TimePreference};
use shift_roster_engine::domain::{ReasonTag, ScoreFactor, SlotContext};
use shift_roster_engine::engine::CandidateScorer;
use shift_roster_engine::StaffProfile;
use test_helpers::create_test_profile;

// ==========================================
// 测试辅助函数
// ==========================================

/// 周一 9 时
fn create_test_context() -> SlotContext {
    SlotContext { day: 1, hour: 9 }
}

/// 覆盖全部雇佣形态 × 时段偏好 × 技能等级的花名册
fn create_mixed_roster() -> Vec<StaffProfile> {
    let employment = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Casual,
    ];
    let preferences = [
        TimePreference::FullTime,
        TimePreference::Morning,
        TimePreference::Afternoon,
        TimePreference::Evening,
        TimePreference::Weekends,
        TimePreference::Unspecified,
    ];

    let mut roster = vec![create_test_profile(
        "ABSENT",
        "営業部",
        Role::Staff,
        3,
        EmploymentType::FullTime,
        TimePreference::Morning,
    )];
    let mut n = 0;
    for et in employment {
        for pref in preferences {
            for level in [1u8, 3, 5] {
                n += 1;
                let dept = if n % 2 == 0 { "営業部" } else { "総務部" };
                let role = if n % 5 == 0 { Role::Leader } else { Role::Staff };
                let mut profile =
                    create_test_profile(&format!("C{:02}", n), dept, role, level, et, pref);
                if n % 3 != 0 {
                    profile = profile.with_tenure_days(n * 20);
                }
                roster.push(profile);
            }
        }
    }
    roster
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_full_match_candidate_scores_92_8() {
    println!("\n=== 测试：场景C 同部门同等级全职候选 ===");

    let absent = create_test_profile(
        "A",
        "営業部",
        Role::Staff,
        3,
        EmploymentType::PartTime,
        TimePreference::Morning,
    );
    let candidate = create_test_profile(
        "B",
        "営業部",
        Role::Staff,
        3,
        EmploymentType::FullTime,
        TimePreference::FullTime,
    )
    .with_tenure_days(400);

    let scorer = CandidateScorer::default();
    let results = scorer.suggest_for("A", &[absent, candidate], &create_test_context());

    assert_eq!(results.len(), 1);
    let score = &results[0];
    assert_eq!(score.worker_id, "B");
    assert!((score.total - 92.8).abs() < 1e-9, "total = {}", score.total);
    assert_eq!(score.tier, ScoreTier::Optimal);
    assert_eq!(
        score.reason_tags,
        vec![
            ReasonTag::StrongestFactor(ScoreFactor::Skill),
            ReasonTag::SameDepartment,
            ReasonTag::StandardSkill,
            ReasonTag::FullTimeEmployee,
            ReasonTag::FullTimeAvailable,
            ReasonTag::Tier(ScoreTier::Optimal),
        ]
    );
}

#[test]
fn test_scores_bounded_and_sorted() {
    println!("\n=== 测试：分数范围与排序 ===");

    let roster = create_mixed_roster();
    let scorer = CandidateScorer::default();
    let absent = &roster[0];

    for (day, hour) in [(1, 9), (3, 14), (5, 19), (6, 10), (7, 22)] {
        let ctx = SlotContext { day, hour };

        for candidate in &roster[1..] {
            let score = scorer.score(absent, candidate, &ctx);
            assert!(
                (0.0..=100.0).contains(&score.total),
                "{} at ({}, {}) = {}",
                candidate.id,
                day,
                hour,
                score.total
            );
            assert_eq!(score.tier, ScoreTier::from_score(score.total));
        }

        let ranked = scorer.rank(absent, &roster, &ctx);
        assert_eq!(ranked.len(), 5);
        assert!(ranked.windows(2).all(|w| w[0].total >= w[1].total));
        assert!(ranked.iter().all(|s| s.worker_id != "ABSENT"));
    }
}

#[test]
fn test_ties_keep_roster_order() {
    println!("\n=== 测试：同分保持输入顺序 ===");

    let absent = create_test_profile(
        "A",
        "営業部",
        Role::Staff,
        3,
        EmploymentType::FullTime,
        TimePreference::Morning,
    );
    let twin = |id: &str| {
        create_test_profile(
            id,
            "営業部",
            Role::Staff,
            4,
            EmploymentType::PartTime,
            TimePreference::Morning,
        )
    };
    let roster = vec![absent, twin("T3"), twin("T1"), twin("T2")];

    let ranked = CandidateScorer::default().suggest_for("A", &roster, &create_test_context());
    let ids: Vec<&str> = ranked.iter().map(|s| s.worker_id.as_str()).collect();
    assert_eq!(ids, vec!["T3", "T1", "T2"]);
}

#[test]
fn test_unknown_absent_or_empty_pool_returns_nothing() {
    println!("\n=== 测试：缺勤员工不存在 / 无候选 ===");

    let scorer = CandidateScorer::default();
    let roster = create_mixed_roster();

    assert!(scorer
        .suggest_for("NOBODY", &roster, &create_test_context())
        .is_empty());
    assert!(scorer
        .suggest_for("ABSENT", &roster[..1], &create_test_context())
        .is_empty());
}

#[test]
fn test_preference_mismatch_lowers_score() {
    println!("\n=== 测试：时段偏好不符时降分 ===");

    let absent = create_test_profile(
        "A",
        "営業部",
        Role::Staff,
        3,
        EmploymentType::PartTime,
        TimePreference::Morning,
    );
    let morning = create_test_profile(
        "M",
        "営業部",
        Role::Staff,
        3,
        EmploymentType::PartTime,
        TimePreference::Morning,
    );
    let evening = create_test_profile(
        "E",
        "営業部",
        Role::Staff,
        3,
        EmploymentType::PartTime,
        TimePreference::Evening,
    );

    let scorer = CandidateScorer::default();
    let ctx = create_test_context();
    let m = scorer.score(&absent, &morning, &ctx);
    let e = scorer.score(&absent, &evening, &ctx);

    assert!((m.preference - 1.0).abs() < 1e-9);
    assert!((e.preference - 0.3).abs() < 1e-9);
    assert!(m.total > e.total);
}
