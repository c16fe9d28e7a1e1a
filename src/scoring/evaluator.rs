use serde::Serialize;
use serde_json::Value;

use super::engine::{calculate_score, Rating, ScoreBreakdown};
use crate::error::{json_kind, RatingError};
use crate::inventory::{applications, ApplicationRecord, Field};

/// One rated application, with the raw fields kept for portfolio reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedApplication {
    pub app_id: String,
    pub app_name: Option<String>,
    pub portfolio: Option<String>,
    pub total_score: u32,
    pub rating: Rating,
    pub score_breakdown: ScoreBreakdown,
    pub data_classification: Option<String>,
    pub criticality: Option<String>,
    pub eol_systems: Option<String>,
    pub waf_enabled: Option<String>,
}

impl RatedApplication {
    pub fn display_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("(unnamed)")
    }
}

pub fn rate_application(app_id: &str, record: &ApplicationRecord) -> RatedApplication {
    let result = calculate_score(record);

    tracing::debug!(
        "Rated {}: impact {} x likelihood {} = {} ({})",
        app_id,
        result.breakdown.impact_score,
        result.breakdown.likelihood_score,
        result.total_score,
        result.rating
    );

    RatedApplication {
        app_id: app_id.to_string(),
        app_name: record.text(Field::Name),
        portfolio: record.text(Field::Portfolio),
        total_score: result.total_score,
        rating: result.rating,
        score_breakdown: result.breakdown,
        data_classification: record.text(Field::DataClassification),
        criticality: record.text(Field::BusinessCriticality),
        eol_systems: record.text(Field::EndOfLife),
        waf_enabled: record.text(Field::WafEnabled),
    }
}

/// Rate every application in an inventory document
///
/// Entries that are not JSON objects are skipped with a warning. The result
/// is sorted by total score, highest first; ties keep document order.
///
/// # Errors
///
/// Fails only when the document has no usable `Applications` grouping.
pub fn rate_applications(document: &Value) -> Result<Vec<RatedApplication>, RatingError> {
    let entries = applications(document)?;

    let mut results = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;

    for (app_id, entry) in entries {
        match ApplicationRecord::from_value(entry) {
            Some(record) => results.push(rate_application(app_id, &record)),
            None => {
                skipped += 1;
                tracing::warn!(
                    "Skipping application {}: expected an object, found {}",
                    app_id,
                    json_kind(entry)
                );
            }
        }
    }

    // sort_by is stable, so equal scores keep input order
    results.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    tracing::info!(
        "Rated {} applications ({} skipped)",
        results.len(),
        skipped
    );

    Ok(results)
}
