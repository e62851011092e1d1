// ==========================================
// 排班引擎 - 领域类型定义
// ==========================================
// 职责: 角色、雇佣形态、时段偏好、评分档位等枚举
// 红线: 角色必须是强类型,不允许按字符串存在性判断
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 角色 (Role)
// ==========================================
// 每个时段至少需要 leader_required 名 Leader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(alias = "leader", alias = "責任者", alias = "リーダー")]
    Leader, // 责任者
    #[serde(alias = "staff", alias = "スタッフ", alias = "一般")]
    Staff, // 一般员工
}

impl Role {
    /// 从外部标签解析角色
    ///
    /// 规则:
    /// - Leader / 責任者 / リーダー → Leader
    /// - 其他任意非空标签 → Staff
    /// - 空标签 → None（由导入层判定为无效记录）
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.to_lowercase().as_str() {
            "leader" | "責任者" | "リーダー" => Some(Role::Leader),
            _ => Some(Role::Staff),
        }
    }

    pub fn is_leader(&self) -> bool {
        matches!(self, Role::Leader)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Leader => write!(f, "Leader"),
            Role::Staff => write!(f, "Staff"),
        }
    }
}

// ==========================================
// 雇佣形态 (Employment Type)
// ==========================================
// 序列化: snake_case；反序列化接受日文/英文标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum EmploymentType {
    FullTime, // 正社員
    PartTime, // パート
    Casual,   // アルバイト及其他
}

impl EmploymentType {
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace(&['-', ' '][..], "_");
        match normalized.as_str() {
            "正社員" | "full_time" | "fulltime" => EmploymentType::FullTime,
            "パート" | "part_time" | "parttime" => EmploymentType::PartTime,
            _ => EmploymentType::Casual,
        }
    }
}

impl From<String> for EmploymentType {
    fn from(value: String) -> Self {
        EmploymentType::from_label(&value)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentType::FullTime => write!(f, "full_time"),
            EmploymentType::PartTime => write!(f, "part_time"),
            EmploymentType::Casual => write!(f, "casual"),
        }
    }
}

// ==========================================
// 希望时段 (Time Preference)
// ==========================================
// 源数据为自由文本（如 "午前のみ" / "夕方以降"），按关键字归类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TimePreference {
    FullTime,    // フルタイム
    Morning,     // 午前
    Afternoon,   // 午後
    Evening,     // 夕方
    Weekends,    // 土日
    Unspecified, // 未填写/无法识别
}

impl TimePreference {
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        if lower.contains("フルタイム") || lower.contains("full") {
            TimePreference::FullTime
        } else if lower.contains("午前") || lower.contains("morning") {
            TimePreference::Morning
        } else if lower.contains("午後") || lower.contains("afternoon") {
            TimePreference::Afternoon
        } else if lower.contains("夕方") || lower.contains("evening") {
            TimePreference::Evening
        } else if lower.contains("土日") || lower.contains("weekend") {
            TimePreference::Weekends
        } else {
            TimePreference::Unspecified
        }
    }
}

impl From<String> for TimePreference {
    fn from(value: String) -> Self {
        TimePreference::from_label(&value)
    }
}

impl Default for TimePreference {
    fn default() -> Self {
        TimePreference::Unspecified
    }
}

// ==========================================
// 常规推荐分档 (Score Tier)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Optimal,         // >= 90 最適候補
    Good,            // >= 80 適合候補
    Possible,        // >= 70 対応可能
    NeedsAdjustment, // 其他 要調整
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreTier::Optimal
        } else if score >= 80.0 {
            ScoreTier::Good
        } else if score >= 70.0 {
            ScoreTier::Possible
        } else {
            ScoreTier::NeedsAdjustment
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreTier::Optimal => write!(f, "optimal"),
            ScoreTier::Good => write!(f, "good"),
            ScoreTier::Possible => write!(f, "possible"),
            ScoreTier::NeedsAdjustment => write!(f, "needs_adjustment"),
        }
    }
}

// ==========================================
// 紧急代班置信度 (Confidence Level)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Optimal,     // >= 90 最適
    GoodFit,     // >= 75 適合
    Possible,    // >= 60 可能
    NeedsReview, // 其他 要検討
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ConfidenceLevel::Optimal
        } else if score >= 75.0 {
            ConfidenceLevel::GoodFit
        } else if score >= 60.0 {
            ConfidenceLevel::Possible
        } else {
            ConfidenceLevel::NeedsReview
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::Optimal => write!(f, "optimal"),
            ConfidenceLevel::GoodFit => write!(f, "good_fit"),
            ConfidenceLevel::Possible => write!(f, "possible"),
            ConfidenceLevel::NeedsReview => write!(f, "needs_review"),
        }
    }
}
