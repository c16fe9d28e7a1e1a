use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::report::PortfolioReport;
use crate::scoring::{FactorContribution, Rating, RatedApplication};

/// Widest rule drawn between report sections
const MAX_RULE_WIDTH: usize = 100;

/// Application name column in the per-rating tables
const NAME_WIDTH: usize = 34;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

fn rule_width() -> usize {
    get_terminal_width().map_or(MAX_RULE_WIDTH, |w| w.min(MAX_RULE_WIDTH))
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Rating label, colored by severity when enabled
pub fn format_rating(rating: Rating, use_colors: bool) -> String {
    let label = rating.as_str();
    if !use_colors {
        return label.to_string();
    }
    match rating {
        Rating::Critical => label.red().bold().to_string(),
        Rating::High => label.red().to_string(),
        Rating::Medium => label.yellow().to_string(),
        Rating::Low => label.green().to_string(),
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Format the full assessment report: summary, executive statistics and
/// one table per rating tier.
pub fn format_report(
    results: &[RatedApplication],
    report: &PortfolioReport,
    use_colors: bool,
) -> String {
    if report.total_applications == 0 {
        return "No applications found.".to_string();
    }

    let width = rule_width();
    let double_rule = "=".repeat(width);
    let rule = "-".repeat(width);
    let mut lines: Vec<String> = Vec::new();

    lines.push(double_rule.clone());
    lines.push(heading("APPLICATION SECURITY ASSESSMENT REPORT", use_colors));
    lines.push(double_rule);
    lines.push(String::new());

    lines.push(heading("SUMMARY:", use_colors));
    lines.push(format!("Total Applications: {}", report.total_applications));
    lines.push("Rating Distribution:".to_string());
    for share in &report.rating_distribution {
        lines.push(format!(
            "  {}: {} ({:.1}%)",
            format_rating(share.rating, use_colors),
            share.count,
            share.percentage
        ));
    }
    lines.push(String::new());

    lines.push(heading("EXECUTIVE STATISTICS:", use_colors));
    lines.push(rule.clone());

    lines.push("1. Portfolio Risk Profile (Avg Score / Critical Apps):".to_string());
    for portfolio in &report.portfolios {
        lines.push(format!(
            "  - {:<15}: Avg Score {:<3} | Critical Apps: {}",
            portfolio.name,
            portfolio.average_score.trunc() as u64,
            portfolio.critical_apps
        ));
    }

    let indicators = &report.indicators;
    lines.push(String::new());
    lines.push("2. Key Risk Indicators (Systemic Issues):".to_string());
    lines.push(format!(
        "  - End-of-Life Systems:     {} apps ({:.1}%)",
        indicators.end_of_life.count, indicators.end_of_life.percentage
    ));
    lines.push(format!(
        "  - Missing WAF Protection:  {} apps ({:.1}%)",
        indicators.missing_waf.count, indicators.missing_waf.percentage
    ));
    lines.push(format!(
        "  - Highly Confidential Data:{} apps ({:.1}%)",
        indicators.highly_confidential.count, indicators.highly_confidential.percentage
    ));

    lines.push(String::new());
    lines.push(format!(
        "3. Top {} Highest Risk Applications:",
        report.top_risks.len()
    ));
    for (idx, app) in report.top_risks.iter().enumerate() {
        lines.push(format!(
            "  {}. {} ({}) - Score: {} [{}]",
            idx + 1,
            app.display_name(),
            app.app_id,
            app.total_score,
            format_rating(app.rating, use_colors)
        ));
    }

    lines.push(String::new());
    lines.push(rule.clone());

    for rating in Rating::ALL {
        let subset: Vec<&RatedApplication> =
            results.iter().filter(|r| r.rating == rating).collect();
        if subset.is_empty() {
            continue;
        }

        lines.push(String::new());
        let title = format!("{} APPLICATIONS:", rating.as_str().to_uppercase());
        lines.push(heading(&title, use_colors));
        lines.push(rule.clone());
        lines.push(format!(
            "{:<15} {:<35} {:<8} {:<8} {:<10}",
            "App ID", "Application Name", "Total", "Impact", "Likelihood"
        ));
        lines.push(rule.clone());

        for app in subset {
            lines.push(format!(
                "{:<15} {:<35} {:<8} {:<8} {:<10}",
                app.app_id,
                truncate_name(app.display_name(), NAME_WIDTH),
                app.total_score,
                app.score_breakdown.impact_score,
                app.score_breakdown.likelihood_score
            ));
        }
    }

    lines.join("\n")
}

/// Format results as tab-separated values for scripting
/// Columns: score, rating, app id, name, portfolio (no headers, no colors)
pub fn format_tsv(results: &[RatedApplication]) -> String {
    results
        .iter()
        .map(|app| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                app.total_score,
                app.rating,
                app.app_id,
                app.display_name(),
                app.portfolio.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_factor_line(contribution: &FactorContribution) -> String {
    format!(
        "    {:<28}{:>3}  {}",
        contribution.factor.label(),
        contribution.score,
        contribution.input
    )
}

/// Format one application's score breakdown (audit view)
pub fn format_breakdown(app: &RatedApplication, use_colors: bool) -> String {
    let breakdown = &app.score_breakdown;
    let title = format!("{} ({})", app.display_name(), app.app_id);

    let mut lines = vec![
        heading(&title, use_colors),
        format!(
            "  Portfolio: {}",
            app.portfolio.as_deref().unwrap_or("(none)")
        ),
        format!(
            "  Score: {} [{}] = impact {} x likelihood {}",
            app.total_score,
            format_rating(app.rating, use_colors),
            breakdown.impact_score,
            breakdown.likelihood_score
        ),
        "  Impact factors:".to_string(),
    ];
    lines.extend(breakdown.impact_factors.iter().map(format_factor_line));
    lines.push("  Likelihood factors:".to_string());
    lines.extend(breakdown.likelihood_factors.iter().map(format_factor_line));

    lines.join("\n")
}
