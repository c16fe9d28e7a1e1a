//! Fixed scoring tables.
//!
//! Every label list, flag table and threshold ladder the normalizers use.
//! These are compiled-in constants: scores are compared across inventories
//! and over time, so they are not user-configurable.

use super::engine::Rating;
use super::factors::{AppSecurityRating, BusinessCriticality, DataClassification, FlagScores};
use super::ladder::{Ladder, RangeOp};

/// Accepted data classification labels (exact, case-sensitive)
pub const DATA_CLASSIFICATION_LABELS: &[(&str, DataClassification)] = &[
    ("Red - Highly Confidential", DataClassification::HighlyConfidential),
    ("Orange - Confidential", DataClassification::Confidential),
    ("Yellow - Internal", DataClassification::Internal),
    ("Green - Public", DataClassification::Public),
];

/// Accepted business criticality labels, current and legacy numbered forms
pub const BUSINESS_CRITICALITY_LABELS: &[(&str, BusinessCriticality)] = &[
    ("Business critical", BusinessCriticality::MissionCritical),
    ("1 - Mission Critical", BusinessCriticality::MissionCritical),
    ("2 - Critical", BusinessCriticality::Critical),
    ("Important", BusinessCriticality::Important),
    ("3 - Important", BusinessCriticality::Important),
    ("Standard", BusinessCriticality::Standard),
    ("4 - Non-Critical", BusinessCriticality::Standard),
];

/// Accepted app security ratings, named and letter-graded
pub const APP_SECURITY_RATING_LABELS: &[(&str, AppSecurityRating)] = &[
    ("Critical", AppSecurityRating::Critical),
    ("D", AppSecurityRating::Critical),
    ("F", AppSecurityRating::Critical),
    ("High", AppSecurityRating::High),
    ("C", AppSecurityRating::High),
    ("Medium", AppSecurityRating::Medium),
    ("B", AppSecurityRating::Medium),
    ("Low", AppSecurityRating::Low),
    ("A", AppSecurityRating::Low),
    ("Unknown", AppSecurityRating::Unknown),
];

pub const EXTERNAL_FACING: FlagScores = FlagScores { yes: 5, no: 0, other: 1 };
pub const EXTERNAL_USERS: FlagScores = FlagScores { yes: 5, no: 0, other: 0 };
pub const WAF_ENABLED: FlagScores = FlagScores { yes: 0, no: 1, other: 1 };
pub const RING_FENCED: FlagScores = FlagScores { yes: 0, no: 1, other: 1 };
pub const END_OF_LIFE: FlagScores = FlagScores { yes: 3, no: 0, other: 1 };

/// Combined external + internal users
pub const USER_BASE: Ladder<u32> = Ladder::new(
    &[
        (RangeOp::GreaterEqual(20_000), 7),
        (RangeOp::GreaterEqual(10_000), 5),
        (RangeOp::GreaterEqual(5_000), 3),
        (RangeOp::GreaterEqual(500), 2),
        (RangeOp::GreaterEqual(100), 1),
    ],
    0,
);

/// Emergency response time in hours
pub const EMERGENCY_HOURS: Ladder<u32> = Ladder::new(
    &[
        (RangeOp::LessEqual(2), 3),
        (RangeOp::LessEqual(12), 2),
        (RangeOp::LessEqual(24), 1),
    ],
    0,
);

/// Recovery objective in hours (shared by RTO and RPO)
pub const RECOVERY_HOURS: Ladder<u32> = Ladder::new(
    &[
        (RangeOp::Equal(0), 6),
        (RangeOp::LessThan(4), 5),
        (RangeOp::LessEqual(8), 4),
        (RangeOp::LessEqual(24), 3),
        (RangeOp::LessEqual(72), 2),
        (RangeOp::LessEqual(168), 1),
    ],
    0,
);

pub const SECURITY_ISSUES: Ladder<u32> =
    Ladder::new(&[(RangeOp::GreaterEqual(2), 2), (RangeOp::Equal(1), 1)], 0);

/// Total score to rating. Exactly 75 stays Low.
pub const RATING: Ladder<Rating> = Ladder::new(
    &[
        (RangeOp::GreaterEqual(250), Rating::Critical),
        (RangeOp::GreaterEqual(150), Rating::High),
        (RangeOp::GreaterThan(75), Rating::Medium),
    ],
    Rating::Low,
);

pub const EMERGENCY_CRITICAL: u32 = 3;
pub const EMERGENCY_FALLBACK: u32 = 0;

pub const RECOVERY_IMMEDIATE: u32 = 6;
pub const RECOVERY_UNDETERMINED: u32 = 2;
pub const RECOVERY_ABSENT: u32 = 2;
pub const RECOVERY_FALLBACK: u32 = 2;

pub const RECOVERY_POINT_YES: u32 = 4;
pub const RECOVERY_POINT_NO: u32 = 0;
