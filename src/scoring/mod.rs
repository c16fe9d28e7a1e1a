pub mod duration;
pub mod engine;
pub mod evaluator;
pub mod factors;
pub mod ladder;
pub mod tables;

pub use engine::{calculate_score, classify, Factor, FactorContribution, Rating, ScoreBreakdown, ScoreResult};
pub use evaluator::{rate_application, rate_applications, RatedApplication};
pub use ladder::{Ladder, RangeOp};
