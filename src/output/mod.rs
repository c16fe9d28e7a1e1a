pub mod export;
pub mod formatter;

pub use export::{save_results, ExportDocument};
pub use formatter::{
    format_breakdown, format_rating, format_report, format_tsv, should_use_colors,
};
