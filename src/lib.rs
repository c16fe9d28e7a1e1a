pub mod config;
pub mod error;
pub mod inventory;
pub mod output;
pub mod report;
pub mod scoring;

pub use error::RatingError;
