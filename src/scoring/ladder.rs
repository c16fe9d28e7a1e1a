use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    LessThan(u64),
    LessEqual(u64),
    GreaterThan(u64),
    GreaterEqual(u64),
    Equal(u64),
}

impl RangeOp {
    pub const fn matches(&self, value: u64) -> bool {
        match *self {
            RangeOp::LessThan(n) => value < n,
            RangeOp::LessEqual(n) => value <= n,
            RangeOp::GreaterThan(n) => value > n,
            RangeOp::GreaterEqual(n) => value >= n,
            RangeOp::Equal(n) => value == n,
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeOp::LessThan(n) => write!(f, "<{}", n),
            RangeOp::LessEqual(n) => write!(f, "<={}", n),
            RangeOp::GreaterThan(n) => write!(f, ">{}", n),
            RangeOp::GreaterEqual(n) => write!(f, ">={}", n),
            RangeOp::Equal(n) => write!(f, "{}", n),
        }
    }
}

/// Ordered threshold table. Rungs are tried top to bottom and the first
/// matching range wins; `otherwise` applies when none match.
#[derive(Debug, Clone, Copy)]
pub struct Ladder<T: Copy + 'static> {
    rungs: &'static [(RangeOp, T)],
    otherwise: T,
}

impl<T: Copy + 'static> Ladder<T> {
    pub const fn new(rungs: &'static [(RangeOp, T)], otherwise: T) -> Self {
        Self { rungs, otherwise }
    }

    pub fn lookup(&self, value: u64) -> T {
        self.rungs
            .iter()
            .find(|(range, _)| range.matches(value))
            .map_or(self.otherwise, |(_, outcome)| *outcome)
    }

    /// The range that would match `value`, if any (for audit descriptions)
    pub fn matched_range(&self, value: u64) -> Option<RangeOp> {
        self.rungs
            .iter()
            .find(|(range, _)| range.matches(value))
            .map(|(range, _)| *range)
    }
}
