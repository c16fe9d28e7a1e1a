use serde::{Deserialize, Serialize};
use std::fmt;

use super::factors;
use super::tables::RATING;
use crate::inventory::{describe, ApplicationRecord, Field};

/// Risk factor feeding either the impact or the likelihood score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    #[serde(rename = "Data Classification")]
    DataClassification,
    #[serde(rename = "Business Criticality")]
    BusinessCriticality,
    #[serde(rename = "Emergency Tier")]
    EmergencyTier,
    #[serde(rename = "Disaster Recovery RTO")]
    RecoveryTime,
    #[serde(rename = "Disaster Recovery RPO")]
    RecoveryPoint,
    #[serde(rename = "User Base")]
    UserBase,
    #[serde(rename = "External Users")]
    ExternalUsers,
    #[serde(rename = "External Facing")]
    ExternalFacing,
    #[serde(rename = "WAF Enabled")]
    WafEnabled,
    #[serde(rename = "Application Ring Fenced")]
    RingFenced,
    #[serde(rename = "Existing EOL Systems")]
    EndOfLife,
    #[serde(rename = "Other Security Issues")]
    SecurityIssues,
    #[serde(rename = "App Security Classification")]
    AppSecurityRating,
}

impl Factor {
    pub const IMPACT: [Factor; 8] = [
        Factor::DataClassification,
        Factor::BusinessCriticality,
        Factor::EmergencyTier,
        Factor::RecoveryTime,
        Factor::RecoveryPoint,
        Factor::UserBase,
        Factor::ExternalUsers,
        Factor::ExternalFacing,
    ];

    pub const LIKELIHOOD: [Factor; 5] = [
        Factor::WafEnabled,
        Factor::RingFenced,
        Factor::EndOfLife,
        Factor::SecurityIssues,
        Factor::AppSecurityRating,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Factor::DataClassification => "Data Classification",
            Factor::BusinessCriticality => "Business Criticality",
            Factor::EmergencyTier => "Emergency Tier",
            Factor::RecoveryTime => "Disaster Recovery RTO",
            Factor::RecoveryPoint => "Disaster Recovery RPO",
            Factor::UserBase => "User Base",
            Factor::ExternalUsers => "External Users",
            Factor::ExternalFacing => "External Facing",
            Factor::WafEnabled => "WAF Enabled",
            Factor::RingFenced => "Application Ring Fenced",
            Factor::EndOfLife => "Existing EOL Systems",
            Factor::SecurityIssues => "Other Security Issues",
            Factor::AppSecurityRating => "App Security Classification",
        }
    }

    /// Score this factor for one record, with an echo of the raw input
    fn evaluate(self, record: &ApplicationRecord) -> FactorContribution {
        let single = |field: Field, score: fn(Option<&serde_json::Value>) -> u32| {
            let value = record.get(field);
            (score(value), describe(value))
        };

        let (score, input) = match self {
            Factor::DataClassification => {
                single(Field::DataClassification, factors::data_classification_score)
            }
            Factor::BusinessCriticality => {
                single(Field::BusinessCriticality, factors::business_criticality_score)
            }
            Factor::EmergencyTier => single(Field::EmergencyTier, factors::emergency_tier_score),
            Factor::RecoveryTime => single(Field::RecoveryTime, factors::recovery_time_score),
            Factor::RecoveryPoint => single(Field::RecoveryPoint, factors::recovery_point_score),
            Factor::UserBase => {
                let external = record.get(Field::ExternalUsers);
                let internal = record.get(Field::InternalUsers);
                (
                    factors::user_base_score(external, internal),
                    format!(
                        "{} users (external {}, internal {})",
                        factors::user_base_total(external, internal),
                        describe(external),
                        describe(internal)
                    ),
                )
            }
            Factor::ExternalUsers => {
                let external = record.get(Field::ExternalUsers);
                let present = if factors::has_external_users(external) {
                    "Yes"
                } else {
                    "No"
                };
                (
                    factors::external_users_score(external),
                    format!("{} (external {})", present, describe(external)),
                )
            }
            Factor::ExternalFacing => single(Field::ExternalFacing, factors::external_facing_score),
            Factor::WafEnabled => single(Field::WafEnabled, factors::waf_enabled_score),
            Factor::RingFenced => single(Field::RingFenced, factors::ring_fenced_score),
            Factor::EndOfLife => single(Field::EndOfLife, factors::end_of_life_score),
            Factor::SecurityIssues => single(Field::SecurityIssues, factors::security_issues_score),
            Factor::AppSecurityRating => {
                single(Field::AppSecurityRating, factors::app_security_rating_score)
            }
        };

        FactorContribution {
            factor: self,
            score,
            input,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorContribution {
    pub factor: Factor,
    pub score: u32,
    pub input: String, // raw value as read, e.g. "'2 weeks'" or "(absent)"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub impact_score: u32,
    pub likelihood_score: u32,
    pub impact_factors: Vec<FactorContribution>,
    pub likelihood_factors: Vec<FactorContribution>,
}

impl ScoreBreakdown {
    pub fn total_score(&self) -> u32 {
        self.impact_score * self.likelihood_score
    }

    /// Sub-score of a single factor
    pub fn factor_score(&self, factor: Factor) -> Option<u32> {
        self.impact_factors
            .iter()
            .chain(&self.likelihood_factors)
            .find(|c| c.factor == factor)
            .map(|c| c.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Critical,
    High,
    Medium,
    Low,
}

impl Rating {
    /// Report order, most severe first
    pub const ALL: [Rating; 4] = [Rating::Critical, Rating::High, Rating::Medium, Rating::Low];

    pub const fn as_str(self) -> &'static str {
        match self {
            Rating::Critical => "Critical",
            Rating::High => "High",
            Rating::Medium => "Medium",
            Rating::Low => "Low",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub total_score: u32,
    pub rating: Rating,
    pub breakdown: ScoreBreakdown,
}

/// Map a total score to its rating tier
pub fn classify(total_score: u32) -> Rating {
    RATING.lookup(u64::from(total_score))
}

/// Score one application: impact x likelihood, then classify.
pub fn calculate_score(record: &ApplicationRecord) -> ScoreResult {
    let impact_factors: Vec<_> = Factor::IMPACT
        .iter()
        .map(|factor| factor.evaluate(record))
        .collect();
    let likelihood_factors: Vec<_> = Factor::LIKELIHOOD
        .iter()
        .map(|factor| factor.evaluate(record))
        .collect();

    let breakdown = ScoreBreakdown {
        impact_score: impact_factors.iter().map(|c| c.score).sum(),
        likelihood_score: likelihood_factors.iter().map(|c| c.score).sum(),
        impact_factors,
        likelihood_factors,
    };

    let total_score = breakdown.total_score();

    ScoreResult {
        total_score,
        rating: classify(total_score),
        breakdown,
    }
}
