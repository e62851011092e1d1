// ==========================================
// 排班引擎 - 代班评分领域模型
// ==========================================
// 职责: 评分输入档案、上下文与评分结果记录
// 生命周期: 每次评分调用创建,不持久化,不修改排班状态
// ==========================================

use crate::domain::types::{ConfidenceLevel, EmploymentType, Role, ScoreTier, TimePreference};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ==========================================
// StaffProfile - 评分用员工档案
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: String,
    pub role: Role,
    #[serde(default = "default_skill_level")]
    pub skill_level: u8, // 1..=5
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub tenure_days: Option<u32>, // 入职天数,未知为 None
    #[serde(default)]
    pub preferred_hours: TimePreference,
}

fn default_skill_level() -> u8 {
    1
}

impl StaffProfile {
    pub fn new(id: &str, name: &str, department: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            role,
            skill_level: default_skill_level(),
            employment_type: EmploymentType::Casual,
            tenure_days: None,
            preferred_hours: TimePreference::Unspecified,
        }
    }

    pub fn with_skill_level(mut self, skill_level: u8) -> Self {
        self.skill_level = skill_level;
        self
    }

    pub fn with_employment_type(mut self, employment_type: EmploymentType) -> Self {
        self.employment_type = employment_type;
        self
    }

    pub fn with_tenure_days(mut self, tenure_days: u32) -> Self {
        self.tenure_days = Some(tenure_days);
        self
    }

    /// 由入职日期推算在职天数（入职日晚于基准日时按 0 处理）
    pub fn with_hire_date(mut self, hire_date: NaiveDate, as_of: NaiveDate) -> Self {
        let days = (as_of - hire_date).num_days().max(0);
        self.tenure_days = Some(u32::try_from(days).unwrap_or(u32::MAX));
        self
    }

    pub fn with_preferred_hours(mut self, preferred_hours: TimePreference) -> Self {
        self.preferred_hours = preferred_hours;
        self
    }
}

// ==========================================
// 评分上下文
// ==========================================

/// 常规代班: 缺勤时段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotContext {
    pub day: u8, // 1=周一 .. 7=周日
    pub hour: u8,
}

/// 紧急代班: 缺勤日期（时段可缺省）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContext {
    pub absence_date: NaiveDate,
    #[serde(default)]
    pub hour: Option<u8>,
}

impl EmergencyContext {
    pub fn weekday(&self) -> u8 {
        self.absence_date.weekday().number_from_monday() as u8
    }
}

// ==========================================
// 评分因子
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Skill,
    Availability,
    Experience,
    Preference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyFactor {
    RecentExperience,
    DepartmentFamiliarity,
    Reliability,
    ImmediateAvailability,
}

// ==========================================
// ReasonTag - 推荐理由标签
// ==========================================
// 结构化标签,文字表现交给 ReasonFormatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonTag {
    // ===== 常规推荐 =====
    SameDepartment,
    HighSkill,
    StandardSkill,
    FullTimeEmployee,
    FullTimeAvailable,
    StrongestFactor(ScoreFactor),
    Tier(ScoreTier),

    // ===== 紧急代班 =====
    RecentDepartmentWork,
    FamiliarWithDepartment,
    HighReliability,
    ImmediatelyAvailable,
    AvailableCandidate,
}

impl ReasonTag {
    /// 稳定的机器可读编码（对外记录使用）
    pub fn code(&self) -> String {
        match self {
            ReasonTag::SameDepartment => "same_department".to_string(),
            ReasonTag::HighSkill => "high_skill".to_string(),
            ReasonTag::StandardSkill => "standard_skill".to_string(),
            ReasonTag::FullTimeEmployee => "full_time_employee".to_string(),
            ReasonTag::FullTimeAvailable => "full_time_available".to_string(),
            ReasonTag::StrongestFactor(factor) => format!("strongest:{}", factor_code(*factor)),
            ReasonTag::Tier(tier) => format!("tier:{}", tier),
            ReasonTag::RecentDepartmentWork => "recent_department_work".to_string(),
            ReasonTag::FamiliarWithDepartment => "familiar_with_department".to_string(),
            ReasonTag::HighReliability => "high_reliability".to_string(),
            ReasonTag::ImmediatelyAvailable => "immediately_available".to_string(),
            ReasonTag::AvailableCandidate => "available_candidate".to_string(),
        }
    }
}

fn factor_code(factor: ScoreFactor) -> &'static str {
    match factor {
        ScoreFactor::Skill => "skill",
        ScoreFactor::Availability => "availability",
        ScoreFactor::Experience => "experience",
        ScoreFactor::Preference => "preference",
    }
}

// ==========================================
// CandidateScore - 常规代班评分结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub worker_id: String,
    pub name: String,

    // ===== 分项 (0..1) =====
    pub skill: f64,
    pub availability: f64,
    pub experience: f64,
    pub preference: f64,

    // ===== 汇总 (0..100) =====
    pub total: f64,
    pub tier: ScoreTier,
    pub strongest_factor: ScoreFactor,
    pub reason_tags: Vec<ReasonTag>,
}

// ==========================================
// EmergencyCandidate - 紧急代班评分结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyCandidate {
    pub worker_id: String,
    pub name: String,

    // ===== 分项 (0..1) =====
    pub recent_experience: f64,
    pub department_familiarity: f64,
    pub reliability: f64,
    pub immediate_availability: f64,

    // ===== 汇总 =====
    pub total: f64,
    pub confidence: ConfidenceLevel,
    pub strongest_factor: EmergencyFactor,
    pub reason_tags: Vec<ReasonTag>,

    // ===== 补充信息 =====
    pub can_start_immediately: bool,
    pub last_worked_in_department: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hire_date_tenure() {
        let as_of = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let hire = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let profile = StaffProfile::new("E1", "A", "営業部", Role::Staff).with_hire_date(hire, as_of);
        assert_eq!(profile.tenure_days, Some(365));

        let future = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let profile = profile.with_hire_date(future, as_of);
        assert_eq!(profile.tenure_days, Some(0));
    }

    #[test]
    fn test_reason_tag_codes() {
        assert_eq!(ReasonTag::SameDepartment.code(), "same_department");
        assert_eq!(
            ReasonTag::StrongestFactor(ScoreFactor::Availability).code(),
            "strongest:availability"
        );
        assert_eq!(ReasonTag::Tier(ScoreTier::Optimal).code(), "tier:optimal");
    }

    #[test]
    fn test_emergency_context_weekday() {
        // 2026-10-17 为周六
        let ctx = EmergencyContext {
            absence_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            hour: Some(9),
        };
        assert_eq!(ctx.weekday(), 6);
    }
}
