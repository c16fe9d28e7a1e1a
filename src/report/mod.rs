pub mod summary;

pub use summary::{
    build_report, percentage, IndicatorCount, PortfolioReport, PortfolioRisk, RatingShare,
    RiskIndicators, DEFAULT_TOP_N, HIGHLY_CONFIDENTIAL, UNKNOWN_PORTFOLIO,
};
