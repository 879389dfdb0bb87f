//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn targets_are_valid_words() {
        // All targets should be 5 letters, lowercase on disk
        for &word in TARGETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn targets_subset_of_allowed() {
        // Every selectable secret must also be an accepted guess
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for &target in TARGETS {
            assert!(
                allowed_set.contains(&target),
                "Target '{target}' not in allowed list"
            );
        }
    }

    #[test]
    fn no_duplicate_targets() {
        let unique: std::collections::HashSet<_> = TARGETS.iter().collect();
        assert_eq!(unique.len(), TARGETS.len());
    }
}
