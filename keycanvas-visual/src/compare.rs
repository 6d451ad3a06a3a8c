use keycanvas_types::{Address, Pattern};
use serde::Serialize;

use crate::pattern::derive_pattern;

/// Result of comparing a candidate string against a base address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub base: String,
    pub candidate: String,
    /// Literal string equality.
    pub matched: bool,
    pub base_pattern: Pattern,
    pub candidate_pattern: Pattern,
}

impl Comparison {
    /// Whether both visual patterns are identical. The pattern covers only the
    /// first 12 characters, so this can hold even when `matched` does not.
    pub fn patterns_match(&self) -> bool {
        self.base_pattern == self.candidate_pattern
    }

    /// Patterns identical but text differs.
    pub fn is_lookalike(&self) -> bool {
        !self.matched && self.patterns_match()
    }
}

/// Compare `candidate` against `base`. Returns `None` when the candidate is blank.
///
/// Equality is checked on the untrimmed candidate.
pub fn compare_addresses(base: &Address, candidate: &str) -> Option<Comparison> {
    if candidate.trim().is_empty() {
        return None;
    }

    let matched = base.as_str() == candidate;
    tracing::debug!(base = %base, candidate, matched, "compared addresses");

    Some(Comparison {
        base: base.to_string(),
        candidate: candidate.to_string(),
        matched,
        base_pattern: derive_pattern(base.as_str()),
        candidate_pattern: derive_pattern(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Address {
        Address::new("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq").unwrap()
    }

    #[test]
    fn test_blank_candidate_skipped() {
        assert!(compare_addresses(&base(), "").is_none());
        assert!(compare_addresses(&base(), "   \t").is_none());
    }

    #[test]
    fn test_identical_addresses_match() {
        let cmp = compare_addresses(&base(), base().as_str()).unwrap();
        assert!(cmp.matched);
        assert!(cmp.patterns_match());
        assert!(!cmp.is_lookalike());
    }

    #[test]
    fn test_surrounding_whitespace_is_a_mismatch() {
        let candidate = format!(" {}", base());
        let cmp = compare_addresses(&base(), &candidate).unwrap();
        assert!(!cmp.matched);
    }

    #[test]
    fn test_tail_change_is_lookalike() {
        let cmp =
            compare_addresses(&base(), "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdX").unwrap();
        assert!(!cmp.matched);
        assert!(cmp.is_lookalike());
    }

    #[test]
    fn test_different_prefix_differs_visually() {
        let cmp = compare_addresses(&base(), "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy").unwrap();
        assert!(!cmp.matched);
        assert!(!cmp.patterns_match());
    }
}
