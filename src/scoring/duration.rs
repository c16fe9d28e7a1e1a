//! Free-text duration parsing for emergency tiers and recovery objectives.
//!
//! Inventory durations are hand-typed ("4 hours", "2 weeks", "Immediate",
//! "1 month (best effort)"). Parsing yields a structured [`Span`] or a
//! fallback variant; converting to hours and scoring happen separately.

use regex::Regex;
use std::sync::LazyLock;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static regex"));

static HOURS_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*hour").expect("static regex"));

/// Hours assumed for "hours" with no number in front of it
const DEFAULT_BARE_HOURS: u64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Hour,
    Week,
    Month,
}

impl DurationUnit {
    pub const fn hours(self) -> u64 {
        match self {
            DurationUnit::Hour => 1,
            DurationUnit::Week => 168,
            DurationUnit::Month => 720,
        }
    }
}

/// A magnitude with its unit, e.g. "2 weeks"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub magnitude: u64,
    pub unit: DurationUnit,
}

impl Span {
    /// Length in hours, or `None` on overflow
    pub fn hours(&self) -> Option<u64> {
        self.magnitude.checked_mul(self.unit.hours())
    }
}

/// Parse the first duration in `text`.
///
/// Units are found by keyword anywhere in the text, checked in the order
/// week, month, hour; a number without a unit keyword counts as hours. A
/// unit keyword with no number counts as one unit, except "hour" which
/// counts as a day. Returns `None` when neither a number nor a unit keyword
/// is present, or when the number does not fit in a `u64`.
pub fn parse_span(text: &str) -> Option<Span> {
    let lower = text.to_lowercase();

    let unit = if lower.contains("week") {
        Some(DurationUnit::Week)
    } else if lower.contains("month") {
        Some(DurationUnit::Month)
    } else if lower.contains("hour") {
        Some(DurationUnit::Hour)
    } else {
        None
    };

    let magnitude = match FIRST_NUMBER.find(&lower) {
        Some(m) => Some(m.as_str().parse::<u64>().ok()?),
        None => None,
    };

    match (magnitude, unit) {
        (Some(magnitude), unit) => Some(Span {
            magnitude,
            unit: unit.unwrap_or(DurationUnit::Hour),
        }),
        (None, Some(DurationUnit::Hour)) => Some(Span {
            magnitude: DEFAULT_BARE_HOURS,
            unit: DurationUnit::Hour,
        }),
        (None, Some(unit)) => Some(Span { magnitude: 1, unit }),
        (None, None) => None,
    }
}

/// Hours from the first "<N> hour" phrase, e.g. "Tier 2 - 4 hours" -> 4
pub fn parse_hours_phrase(text: &str) -> Option<u64> {
    let lower = text.to_lowercase();
    let captures = HOURS_PHRASE.captures(&lower)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Recovery objective (RTO, or RPO after its yes/no shortcuts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryTarget {
    Immediate,
    Undetermined,
    Within(Span),
    Unparsable,
}

impl RecoveryTarget {
    pub fn parse(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();
        match normalized.as_str() {
            "immediate" => RecoveryTarget::Immediate,
            "undetermined" => RecoveryTarget::Undetermined,
            _ => match parse_span(&normalized) {
                Some(span) => RecoveryTarget::Within(span),
                None => RecoveryTarget::Unparsable,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_span_weeks() {
        let span = parse_span("2 weeks").unwrap();
        assert_eq!(span.unit, DurationUnit::Week);
        assert_eq!(span.magnitude, 2);
        assert_eq!(span.hours(), Some(336));
    }

    #[test]
    fn test_parse_span_months() {
        assert_eq!(parse_span("1 Month").unwrap().hours(), Some(720));
    }

    #[test]
    fn test_parse_span_bare_number_is_hours() {
        let span = parse_span("48").unwrap();
        assert_eq!(span.unit, DurationUnit::Hour);
        assert_eq!(span.hours(), Some(48));
    }

    #[test]
    fn test_parse_span_unit_without_number() {
        assert_eq!(parse_span("weekly").unwrap().hours(), Some(168));
        assert_eq!(parse_span("monthly").unwrap().hours(), Some(720));
        assert_eq!(parse_span("within hours").unwrap().hours(), Some(24));
    }

    #[test]
    fn test_parse_span_week_checked_before_month() {
        assert_eq!(parse_span("1 week to 1 month").unwrap().unit, DurationUnit::Week);
    }

    #[test]
    fn test_parse_span_days_read_as_hours() {
        // Only hour/week/month are units; "3 days" is three hours.
        assert_eq!(parse_span("3 days").unwrap().hours(), Some(3));
    }

    #[test]
    fn test_parse_span_garbage() {
        assert_eq!(parse_span("asap-ish"), None);
        assert_eq!(parse_span(""), None);
    }

    #[test]
    fn test_parse_span_overflow() {
        assert_eq!(parse_span("99999999999999999999999 hours"), None);
        let huge = parse_span("18446744073709551615 months").unwrap();
        assert_eq!(huge.hours(), None);
    }

    #[test]
    fn test_parse_hours_phrase() {
        assert_eq!(parse_hours_phrase("4 hours"), Some(4));
        assert_eq!(parse_hours_phrase("Tier 2 - 12Hours"), Some(12));
        assert_eq!(parse_hours_phrase("1 - 4 hours"), Some(4));
        assert_eq!(parse_hours_phrase("2 days"), None);
        assert_eq!(parse_hours_phrase("hours"), None);
    }

    #[test]
    fn test_recovery_target_keywords() {
        assert_eq!(RecoveryTarget::parse(" Immediate "), RecoveryTarget::Immediate);
        assert_eq!(RecoveryTarget::parse("UNDETERMINED"), RecoveryTarget::Undetermined);
        assert_eq!(RecoveryTarget::parse("no idea"), RecoveryTarget::Unparsable);
    }

    #[test]
    fn test_recovery_target_span() {
        match RecoveryTarget::parse("8 hours") {
            RecoveryTarget::Within(span) => assert_eq!(span.hours(), Some(8)),
            other => panic!("expected span, got {:?}", other),
        }
    }
}
