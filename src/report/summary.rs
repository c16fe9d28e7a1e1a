//! Portfolio-level rollup of rated applications.
//!
//! Builds the rating distribution, per-portfolio risk profile, systemic risk
//! indicators and the riskiest-applications list from an already sorted
//! result set. Percentages are 0-100 and are zero for an empty result set.

use indexmap::IndexMap;
use serde::Serialize;

use crate::scoring::{Rating, RatedApplication};

/// Portfolio name used when an application has none
pub const UNKNOWN_PORTFOLIO: &str = "Unknown";

/// Default size of the riskiest-applications list
pub const DEFAULT_TOP_N: usize = 5;

/// Classification counted by the highly confidential indicator
pub const HIGHLY_CONFIDENTIAL: &str = "Red - Highly Confidential";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingShare {
    pub rating: Rating,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRisk {
    pub name: String,
    pub count: usize,
    pub total_score: u64,
    pub critical_apps: usize,
    pub average_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorCount {
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskIndicators {
    pub end_of_life: IndicatorCount,
    pub missing_waf: IndicatorCount,
    pub highly_confidential: IndicatorCount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    pub total_applications: usize,
    pub rating_distribution: Vec<RatingShare>,
    pub portfolios: Vec<PortfolioRisk>,
    pub indicators: RiskIndicators,
    pub top_risks: Vec<RatedApplication>,
}

impl PortfolioReport {
    pub fn rating_count(&self, rating: Rating) -> usize {
        self.rating_distribution
            .iter()
            .find(|share| share.rating == rating)
            .map_or(0, |share| share.count)
    }
}

#[derive(Debug, Default)]
struct PortfolioAggregate {
    count: usize,
    total_score: u64,
    critical_apps: usize,
}

/// `count` as a percentage of `total`, or 0 when `total` is 0
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn indicator(results: &[RatedApplication], predicate: impl Fn(&RatedApplication) -> bool) -> IndicatorCount {
    let count = results.iter().filter(|r| predicate(r)).count();
    IndicatorCount {
        count,
        percentage: percentage(count, results.len()),
    }
}

/// Build the portfolio report
///
/// `results` is expected in rating order (highest score first); the top
/// list takes the first `top_n` entries as given.
pub fn build_report(results: &[RatedApplication], top_n: usize) -> PortfolioReport {
    let total = results.len();

    let rating_distribution = Rating::ALL
        .iter()
        .map(|&rating| {
            let count = results.iter().filter(|r| r.rating == rating).count();
            RatingShare {
                rating,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    // IndexMap keeps first-appearance order for ties in the ranking below
    let mut aggregates: IndexMap<&str, PortfolioAggregate> = IndexMap::new();
    for result in results {
        let name = result
            .portfolio
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(UNKNOWN_PORTFOLIO);
        let entry = aggregates.entry(name).or_default();
        entry.count += 1;
        entry.total_score += u64::from(result.total_score);
        if result.rating == Rating::Critical {
            entry.critical_apps += 1;
        }
    }

    let mut portfolios: Vec<PortfolioRisk> = aggregates
        .into_iter()
        .map(|(name, agg)| PortfolioRisk {
            name: name.to_string(),
            count: agg.count,
            total_score: agg.total_score,
            critical_apps: agg.critical_apps,
            average_score: agg.total_score as f64 / agg.count as f64,
        })
        .collect();

    portfolios.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let indicators = RiskIndicators {
        end_of_life: indicator(results, |r| r.eol_systems.as_deref() == Some("Yes")),
        missing_waf: indicator(results, |r| r.waf_enabled.as_deref() == Some("No")),
        highly_confidential: indicator(results, |r| {
            r.data_classification.as_deref() == Some(HIGHLY_CONFIDENTIAL)
        }),
    };

    tracing::debug!(
        "Built report over {} applications in {} portfolios",
        total,
        portfolios.len()
    );

    PortfolioReport {
        total_applications: total,
        rating_distribution,
        portfolios,
        indicators,
        top_risks: results.iter().take(top_n).cloned().collect(),
    }
}
