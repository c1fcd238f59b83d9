//! Verdict types produced by the evaluator.

use std::fmt;

use crate::sections::RuleKind;

/// Categorical strength label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a score to its level. Scores above 4 saturate at `VeryStrong`.
    pub fn from_score(score: usize) -> Self {
        match score {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Medium,
            3 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// How a host should render [`Verdict::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Warning,
    Success,
}

/// Outcome of one evaluation.
///
/// `score` counts the rules satisfied before the first failure, or all of
/// them when `passed` is `true`. `failed_rule` is the rule that stopped the
/// chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub score: usize,
    pub level: StrengthLevel,
    pub message: String,
    pub passed: bool,
    pub failed_rule: Option<RuleKind>,
}

impl Verdict {
    pub(crate) fn failed(score: usize, rule: RuleKind, message: String) -> Self {
        Self {
            score,
            level: StrengthLevel::from_score(score),
            message,
            passed: false,
            failed_rule: Some(rule),
        }
    }

    pub(crate) fn succeeded(score: usize) -> Self {
        let level = StrengthLevel::VeryStrong;
        Self {
            score,
            level,
            message: format!(
                "{} - Great job! Your password is strong and secure. (Your Password Score is: {})",
                level, score
            ),
            passed: true,
            failed_rule: None,
        }
    }

    pub fn style(&self) -> MessageStyle {
        if self.passed {
            MessageStyle::Success
        } else {
            MessageStyle::Warning
        }
    }
}
