//! Field validation for tasks.
//!
//! Lengths are counted in characters, not bytes.

use crate::model::TaskId;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

pub fn validate_title(title: &str) -> bool {
    if title.is_empty() {
        return false;
    }
    let length = title.chars().count();
    (MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&length)
}

/// An empty description is valid; descriptions are optional.
pub fn validate_description(description: &str) -> bool {
    description.is_empty() || description.chars().count() <= MAX_DESCRIPTION_LENGTH
}

pub fn validate_id(id: TaskId) -> bool {
    id > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_bounds() {
        assert!(!validate_title(""));
        assert!(validate_title("a"));
        assert!(validate_title(&"x".repeat(200)));
        assert!(!validate_title(&"x".repeat(201)));
    }

    #[test]
    fn test_validate_title_counts_characters() {
        // 200 two-byte characters is still 200 characters.
        assert!(validate_title(&"é".repeat(200)));
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description(""));
        assert!(validate_description(&"d".repeat(1000)));
        assert!(!validate_description(&"d".repeat(1001)));
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id(1));
        assert!(!validate_id(0));
        assert!(!validate_id(-4));
    }
}
