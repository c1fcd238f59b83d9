//! Password evaluation sections
//!
//! Each section checks one rule of the chain. [`RULES`] fixes their order.

mod digit;
mod length;
mod lowercase;
mod special;
mod uppercase;

use secrecy::SecretString;
use std::fmt;

pub use digit::digit_section;
pub use length::{MIN_LENGTH, length_section};
pub use lowercase::lowercase_section;
pub use special::special_section;
pub use uppercase::uppercase_section;

/// Identifies a rule of the chain. Reported as the stop reason of a failed verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::Length => "length",
            RuleKind::Uppercase => "uppercase",
            RuleKind::Lowercase => "lowercase",
            RuleKind::Digit => "digit",
            RuleKind::Special => "special",
        };
        f.write_str(name)
    }
}

/// One entry of the rule chain.
///
/// `check` returns `true` when the password satisfies the rule. `warning`
/// renders the feedback for a failure at the given score.
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pub check: fn(&SecretString) -> bool,
    pub warning: fn(usize) -> String,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish()
    }
}

/// The rule chain, in evaluation order.
pub const RULES: [Rule; 5] = [
    Rule {
        kind: RuleKind::Length,
        check: length_section,
        warning: length::warning,
    },
    Rule {
        kind: RuleKind::Uppercase,
        check: uppercase_section,
        warning: uppercase::warning,
    },
    Rule {
        kind: RuleKind::Lowercase,
        check: lowercase_section,
        warning: lowercase::warning,
    },
    Rule {
        kind: RuleKind::Digit,
        check: digit_section,
        warning: digit::warning,
    },
    Rule {
        kind: RuleKind::Special,
        check: special_section,
        warning: special::warning,
    },
];
