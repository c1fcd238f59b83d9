//! Character classes shared by the evaluator and the generator.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

/// Literal allow-list of special characters.
///
/// Membership is exact: the same 32 characters are accepted by the special
/// character rule and drawn by the generator.
pub const SPECIAL_CHARACTERS: &str = r#"@!#$%^&*()_+={}[]:;"'<>,.?/~`\|-"#;

/// Returns `true` if `c` is in [`SPECIAL_CHARACTERS`].
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Union of all four classes, in class order.
pub fn all_characters() -> Vec<char> {
    [UPPERCASE, LOWERCASE, DIGITS, SPECIAL_CHARACTERS]
        .iter()
        .flat_map(|class| class.chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_special_characters_are_ascii_punctuation() {
        let set: HashSet<char> = SPECIAL_CHARACTERS.chars().collect();
        assert_eq!(set.len(), 32);
        assert!(set.iter().all(|c| c.is_ascii_punctuation()));

        let punctuation: HashSet<char> = (0u8..=127)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert_eq!(set, punctuation);
    }

    #[test]
    fn test_is_special_edge_members() {
        for c in ['\\', '|', '-', '`', '"', '\''] {
            assert!(is_special(c), "{c:?} should be special");
        }
        for c in [' ', 'a', 'Z', '5', '€', '\t'] {
            assert!(!is_special(c), "{c:?} should not be special");
        }
    }

    #[test]
    fn test_all_characters_union() {
        let all = all_characters();
        assert_eq!(all.len(), 26 + 26 + 10 + 32);
        let unique: HashSet<char> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }
}
