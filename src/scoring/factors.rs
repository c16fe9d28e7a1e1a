//! Per-factor normalizers.
//!
//! Each normalizer maps one raw inventory value to a non-negative sub-score
//! and never fails: absent, unrecognized or unparsable input takes the
//! factor's documented default.

use serde_json::Value;

use super::duration::{parse_hours_phrase, RecoveryTarget};
use super::tables::{
    APP_SECURITY_RATING_LABELS, BUSINESS_CRITICALITY_LABELS, DATA_CLASSIFICATION_LABELS,
    EMERGENCY_CRITICAL, EMERGENCY_FALLBACK, EMERGENCY_HOURS, END_OF_LIFE, EXTERNAL_FACING,
    EXTERNAL_USERS, RECOVERY_ABSENT, RECOVERY_FALLBACK, RECOVERY_HOURS, RECOVERY_IMMEDIATE,
    RECOVERY_POINT_NO, RECOVERY_POINT_YES, RECOVERY_UNDETERMINED, RING_FENCED, SECURITY_ISSUES,
    USER_BASE, WAF_ENABLED,
};
use crate::inventory::{is_blank, value_text};

/// Exact, case-sensitive label match. Non-string values never match.
fn lookup_label<T: Copy>(table: &[(&str, T)], value: Option<&Value>) -> Option<T> {
    let label = value?.as_str()?;
    table
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, variant)| *variant)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataClassification {
    HighlyConfidential,
    Confidential,
    Internal,
    Public,
    Unrecognized,
}

impl DataClassification {
    pub fn from_value(value: Option<&Value>) -> Self {
        lookup_label(DATA_CLASSIFICATION_LABELS, value).unwrap_or(Self::Unrecognized)
    }

    pub const fn score(self) -> u32 {
        match self {
            Self::HighlyConfidential => 5,
            Self::Confidential => 4,
            Self::Internal => 2,
            Self::Public | Self::Unrecognized => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessCriticality {
    MissionCritical,
    Critical,
    Important,
    Standard,
    Unrecognized,
}

impl BusinessCriticality {
    pub fn from_value(value: Option<&Value>) -> Self {
        lookup_label(BUSINESS_CRITICALITY_LABELS, value).unwrap_or(Self::Unrecognized)
    }

    pub const fn score(self) -> u32 {
        match self {
            Self::MissionCritical => 5,
            Self::Critical => 4,
            Self::Important => 3,
            Self::Standard | Self::Unrecognized => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSecurityRating {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
    Unrecognized,
}

impl AppSecurityRating {
    /// Absent ratings are treated as unrecognized
    pub fn from_value(value: Option<&Value>) -> Self {
        lookup_label(APP_SECURITY_RATING_LABELS, value).unwrap_or(Self::Unrecognized)
    }

    pub const fn score(self) -> u32 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium | Self::Unknown | Self::Unrecognized => 2,
            Self::Low => 1,
        }
    }
}

/// A "Yes"/"No" inventory flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Yes,
    No,
    Unrecognized,
}

impl Flag {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("Yes") => Flag::Yes,
            Some("No") => Flag::No,
            _ => Flag::Unrecognized,
        }
    }

    pub const fn from_bool(value: bool) -> Self {
        if value {
            Flag::Yes
        } else {
            Flag::No
        }
    }
}

/// Scores for each state of a [`Flag`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagScores {
    pub yes: u32,
    pub no: u32,
    pub other: u32,
}

impl FlagScores {
    pub const fn score(&self, flag: Flag) -> u32 {
        match flag {
            Flag::Yes => self.yes,
            Flag::No => self.no,
            Flag::Unrecognized => self.other,
        }
    }
}

pub fn data_classification_score(value: Option<&Value>) -> u32 {
    DataClassification::from_value(value).score()
}

pub fn business_criticality_score(value: Option<&Value>) -> u32 {
    BusinessCriticality::from_value(value).score()
}

/// "critical" anywhere wins; otherwise only an "<N> hour" phrase is scored.
pub fn emergency_tier_score(value: Option<&Value>) -> u32 {
    if is_blank(value) {
        return EMERGENCY_FALLBACK;
    }
    let Some(text) = value.and_then(value_text) else {
        return EMERGENCY_FALLBACK;
    };

    if text.to_lowercase().contains("critical") {
        return EMERGENCY_CRITICAL;
    }

    parse_hours_phrase(&text).map_or(EMERGENCY_FALLBACK, |hours| EMERGENCY_HOURS.lookup(hours))
}

pub fn recovery_target_score(target: RecoveryTarget) -> u32 {
    match target {
        RecoveryTarget::Immediate => RECOVERY_IMMEDIATE,
        RecoveryTarget::Undetermined => RECOVERY_UNDETERMINED,
        RecoveryTarget::Within(span) => span
            .hours()
            .map_or(RECOVERY_FALLBACK, |hours| RECOVERY_HOURS.lookup(hours)),
        RecoveryTarget::Unparsable => RECOVERY_FALLBACK,
    }
}

pub fn recovery_time_score(value: Option<&Value>) -> u32 {
    if is_blank(value) {
        return RECOVERY_ABSENT;
    }
    let Some(text) = value.and_then(value_text) else {
        return RECOVERY_FALLBACK;
    };
    recovery_target_score(RecoveryTarget::parse(&text))
}

/// RPO accepts yes/no shortcuts before falling back to the RTO ladder
pub fn recovery_point_score(value: Option<&Value>) -> u32 {
    if is_blank(value) {
        return RECOVERY_ABSENT;
    }
    let Some(text) = value.and_then(value_text) else {
        return RECOVERY_FALLBACK;
    };

    match text.trim().to_lowercase().as_str() {
        "yes" => RECOVERY_POINT_YES,
        "no" => RECOVERY_POINT_NO,
        _ => recovery_target_score(RecoveryTarget::parse(&text)),
    }
}

/// User count from an integer or a string like "1,200". Anything else is 0.
pub fn parse_user_count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.replace(',', "").trim().parse().unwrap_or(0),
        _ => 0,
    }
}

pub fn user_base_total(external: Option<&Value>, internal: Option<&Value>) -> i64 {
    parse_user_count(external).saturating_add(parse_user_count(internal))
}

pub fn user_base_score(external: Option<&Value>, internal: Option<&Value>) -> u32 {
    let total = user_base_total(external, internal);
    USER_BASE.lookup(u64::try_from(total).unwrap_or(0))
}

pub fn has_external_users(external: Option<&Value>) -> bool {
    parse_user_count(external) > 0
}

pub fn external_users_score(external: Option<&Value>) -> u32 {
    EXTERNAL_USERS.score(Flag::from_bool(has_external_users(external)))
}

pub fn external_facing_score(value: Option<&Value>) -> u32 {
    EXTERNAL_FACING.score(Flag::from_value(value))
}

pub fn waf_enabled_score(value: Option<&Value>) -> u32 {
    WAF_ENABLED.score(Flag::from_value(value))
}

pub fn ring_fenced_score(value: Option<&Value>) -> u32 {
    RING_FENCED.score(Flag::from_value(value))
}

pub fn end_of_life_score(value: Option<&Value>) -> u32 {
    END_OF_LIFE.score(Flag::from_value(value))
}

/// Issue count: integers, decimal strings, fractional numbers (truncated)
/// and booleans (0/1). Anything else is 0.
pub fn parse_issue_count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}

pub fn security_issues_score(value: Option<&Value>) -> u32 {
    let count = parse_issue_count(value);
    SECURITY_ISSUES.lookup(u64::try_from(count).unwrap_or(0))
}

pub fn app_security_rating_score(value: Option<&Value>) -> u32 {
    AppSecurityRating::from_value(value).score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn score_of(f: fn(Option<&Value>) -> u32, value: Value) -> u32 {
        f(Some(&value))
    }

    #[test]
    fn test_data_classification_table() {
        let f = data_classification_score;
        assert_eq!(score_of(f, json!("Red - Highly Confidential")), 5);
        assert_eq!(score_of(f, json!("Orange - Confidential")), 4);
        assert_eq!(score_of(f, json!("Yellow - Internal")), 2);
        assert_eq!(score_of(f, json!("Green - Public")), 0);
    }

    #[test]
    fn test_data_classification_unrecognized() {
        assert_eq!(data_classification_score(None), 0);
        // Exact match only
        assert_eq!(score_of(data_classification_score, json!("red - highly confidential")), 0);
        assert_eq!(score_of(data_classification_score, json!(5)), 0);
        assert_eq!(
            DataClassification::from_value(Some(&json!("Purple"))),
            DataClassification::Unrecognized
        );
    }

    #[test]
    fn test_business_criticality_table() {
        let f = business_criticality_score;
        assert_eq!(score_of(f, json!("Business critical")), 5);
        assert_eq!(score_of(f, json!("1 - Mission Critical")), 5);
        assert_eq!(score_of(f, json!("2 - Critical")), 4);
        assert_eq!(score_of(f, json!("Important")), 3);
        assert_eq!(score_of(f, json!("3 - Important")), 3);
        assert_eq!(score_of(f, json!("Standard")), 0);
        assert_eq!(score_of(f, json!("4 - Non-Critical")), 0);
        assert_eq!(score_of(f, json!("Tier 0")), 0);
        assert_eq!(f(None), 0);
    }

    #[test]
    fn test_emergency_tier() {
        let f = emergency_tier_score;
        assert_eq!(score_of(f, json!("Critical")), 3);
        assert_eq!(score_of(f, json!("Tier 1 - CRITICAL")), 3);
        assert_eq!(score_of(f, json!("2 hours")), 3);
        assert_eq!(score_of(f, json!("3 hours")), 2);
        assert_eq!(score_of(f, json!("12 hours")), 2);
        assert_eq!(score_of(f, json!("24 hours")), 1);
        assert_eq!(score_of(f, json!("48 hours")), 0);
    }

    #[test]
    fn test_emergency_tier_fallback() {
        let f = emergency_tier_score;
        assert_eq!(f(None), 0);
        assert_eq!(score_of(f, json!("")), 0);
        assert_eq!(score_of(f, json!("2 days")), 0);
        assert_eq!(score_of(f, json!(4)), 0);
        assert_eq!(score_of(f, json!({ "tier": 1 })), 0);
    }

    #[test]
    fn test_recovery_time_keywords() {
        let f = recovery_time_score;
        assert_eq!(score_of(f, json!("immediate")), 6);
        assert_eq!(score_of(f, json!("Immediate")), 6);
        assert_eq!(score_of(f, json!("undetermined")), 2);
    }

    #[test]
    fn test_recovery_time_ladder() {
        let f = recovery_time_score;
        assert_eq!(score_of(f, json!("0 hours")), 6);
        assert_eq!(score_of(f, json!("3 hours")), 5);
        assert_eq!(score_of(f, json!("4 hours")), 4);
        assert_eq!(score_of(f, json!("8 hours")), 4);
        assert_eq!(score_of(f, json!("24 hours")), 3);
        assert_eq!(score_of(f, json!("72 hours")), 2);
        assert_eq!(score_of(f, json!("1 week")), 1);
        assert_eq!(score_of(f, json!("2 weeks")), 0);
        assert_eq!(score_of(f, json!("1 month")), 0);
        assert_eq!(score_of(f, json!(48)), 2);
    }

    #[test]
    fn test_recovery_time_absent_and_fallback() {
        let f = recovery_time_score;
        assert_eq!(f(None), 2);
        assert_eq!(score_of(f, json!(null)), 2);
        assert_eq!(score_of(f, json!("")), 2);
        // Numeric zero counts as absent, not as "0 hours"
        assert_eq!(score_of(f, json!(0)), 2);
        assert_eq!(score_of(f, json!("see DR plan")), 2);
        assert_eq!(score_of(f, json!(["4 hours"])), 2);
    }

    #[test]
    fn test_recovery_point() {
        let f = recovery_point_score;
        assert_eq!(f(None), 2);
        assert_eq!(score_of(f, json!("Yes")), 4);
        assert_eq!(score_of(f, json!(" no ")), 0);
        assert_eq!(score_of(f, json!("immediate")), 6);
        assert_eq!(score_of(f, json!("4 hours")), 4);
        assert_eq!(score_of(f, json!("garbage")), 2);
    }

    #[test]
    fn test_user_base_ladder() {
        assert_eq!(user_base_score(Some(&json!(15000)), Some(&json!(6000))), 7);
        assert_eq!(user_base_score(Some(&json!("1,200")), Some(&json!(0))), 2);
        assert_eq!(user_base_score(Some(&json!(10000)), None), 5);
        assert_eq!(user_base_score(Some(&json!(5000)), None), 3);
        assert_eq!(user_base_score(None, Some(&json!("499"))), 1);
        assert_eq!(user_base_score(None, Some(&json!(100))), 1);
        assert_eq!(user_base_score(None, Some(&json!(99))), 0);
        assert_eq!(user_base_score(None, None), 0);
    }

    #[test]
    fn test_user_count_parsing() {
        assert_eq!(parse_user_count(Some(&json!(" 2,500 "))), 2500);
        assert_eq!(parse_user_count(Some(&json!("many"))), 0);
        assert_eq!(parse_user_count(Some(&json!(12.5))), 0);
        assert_eq!(parse_user_count(Some(&json!(true))), 0);
        assert_eq!(parse_user_count(None), 0);
    }

    #[test]
    fn test_negative_user_total_scores_zero() {
        assert_eq!(user_base_score(Some(&json!(-5000)), Some(&json!(100))), 0);
    }

    #[test]
    fn test_external_users() {
        assert_eq!(external_users_score(Some(&json!("1,200"))), 5);
        assert_eq!(external_users_score(Some(&json!(0))), 0);
        assert_eq!(external_users_score(Some(&json!("none"))), 0);
        assert_eq!(external_users_score(None), 0);
    }

    #[test]
    fn test_flag_factors() {
        assert_eq!(external_facing_score(Some(&json!("Yes"))), 5);
        assert_eq!(external_facing_score(Some(&json!("No"))), 0);
        assert_eq!(external_facing_score(None), 1);

        assert_eq!(waf_enabled_score(Some(&json!("Yes"))), 0);
        assert_eq!(waf_enabled_score(Some(&json!("No"))), 1);
        assert_eq!(waf_enabled_score(None), 1);

        assert_eq!(ring_fenced_score(Some(&json!("Yes"))), 0);
        assert_eq!(ring_fenced_score(Some(&json!("No"))), 1);
        assert_eq!(ring_fenced_score(Some(&json!("Partially"))), 1);

        assert_eq!(end_of_life_score(Some(&json!("Yes"))), 3);
        assert_eq!(end_of_life_score(Some(&json!("No"))), 0);
        assert_eq!(end_of_life_score(None), 1);
    }

    #[test]
    fn test_flags_are_case_sensitive_strings() {
        assert_eq!(Flag::from_value(Some(&json!("yes"))), Flag::Unrecognized);
        assert_eq!(Flag::from_value(Some(&json!(true))), Flag::Unrecognized);
        assert_eq!(external_facing_score(Some(&json!(true))), 1);
    }

    #[test]
    fn test_security_issues() {
        let f = security_issues_score;
        assert_eq!(score_of(f, json!(0)), 0);
        assert_eq!(score_of(f, json!(1)), 1);
        assert_eq!(score_of(f, json!(2)), 2);
        assert_eq!(score_of(f, json!("7")), 2);
        assert_eq!(score_of(f, json!(1.9)), 1);
        assert_eq!(score_of(f, json!(true)), 1);
        assert_eq!(score_of(f, json!(-3)), 0);
        assert_eq!(score_of(f, json!("several")), 0);
        assert_eq!(f(None), 0);
    }

    #[test]
    fn test_app_security_rating() {
        let f = app_security_rating_score;
        for label in ["Critical", "D", "F"] {
            assert_eq!(score_of(f, json!(label)), 4, "{}", label);
        }
        for label in ["High", "C"] {
            assert_eq!(score_of(f, json!(label)), 3, "{}", label);
        }
        for label in ["Medium", "B", "Unknown"] {
            assert_eq!(score_of(f, json!(label)), 2, "{}", label);
        }
        for label in ["Low", "A"] {
            assert_eq!(score_of(f, json!(label)), 1, "{}", label);
        }
        assert_eq!(f(None), 2);
        assert_eq!(score_of(f, json!("E")), 2);
        assert_eq!(
            AppSecurityRating::from_value(Some(&json!("low"))),
            AppSecurityRating::Unrecognized
        );
    }
}
