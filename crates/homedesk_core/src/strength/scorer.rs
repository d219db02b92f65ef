//! Three-rule password scorer.
//!
//! # Responsibility
//! - Evaluate minimum length, digit presence and letter presence.
//! - Expose per-rule results for checklist rendering.
//!
//! # Invariants
//! - `score` is the number of satisfied rules, always in `0..=3`.
//! - Length counts characters, not UTF-8 bytes.

use std::fmt::{Display, Formatter};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Minimum number of characters for the length rule.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Highest reachable score.
pub const MAX_SCORE: u8 = 3;

/// Strength label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthCategory {
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthCategory {
    /// Maps a rule count to its category. Counts above 3 saturate to `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Display color name used by meters.
    pub fn color(self) -> &'static str {
        match self {
            Self::VeryWeak => "red",
            Self::Weak => "orange",
            Self::Medium => "yellow",
            Self::Strong => "green",
        }
    }
}

impl Display for StrengthCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of each individual rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementChecks {
    pub min_length: bool,
    pub has_digit: bool,
    pub has_letter: bool,
}

impl RequirementChecks {
    fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_digit: password.chars().any(is_decimal_digit),
            has_letter: password.chars().any(char::is_alphabetic),
        }
    }

    fn satisfied(&self) -> u8 {
        [self.min_length, self.has_digit, self.has_letter]
            .iter()
            .filter(|passed| **passed)
            .count() as u8
    }

    /// Rule descriptions paired with their outcome, in display order.
    pub fn items(&self) -> [(&'static str, bool); 3] {
        [
            ("At least 6 characters", self.min_length),
            ("Contains a number", self.has_digit),
            ("Contains a letter", self.has_letter),
        ]
    }
}

/// Unicode decimal digit (general category Nd), in any script.
fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Full scoring result for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub category: StrengthCategory,
    pub score: u8,
    pub checks: RequirementChecks,
}

impl StrengthReport {
    /// Score as a `0.0..=1.0` fraction for progress bars.
    pub fn progress(&self) -> f64 {
        f64::from(self.score) / f64::from(MAX_SCORE)
    }

    /// Whether the meter should suggest improvements.
    pub fn needs_tip(&self) -> bool {
        matches!(
            self.category,
            StrengthCategory::VeryWeak | StrengthCategory::Weak
        )
    }
}

/// Scores a password and returns `(category, score)`.
pub fn score(password: &str) -> (StrengthCategory, u8) {
    let report = evaluate(password);
    (report.category, report.score)
}

/// Scores a password and keeps the per-rule breakdown.
pub fn evaluate(password: &str) -> StrengthReport {
    let checks = RequirementChecks::evaluate(password);
    let score = checks.satisfied();
    StrengthReport {
        category: StrengthCategory::from_score(score),
        score,
        checks,
    }
}
