use crate::error::CoreError;

/// Maximum length of a journal entry title, matching the `VARCHAR(255)` column.
pub const MAX_TITLE_LEN: usize = 255;

/// Validate the fields of a journal entry before it is stored.
///
/// The entry text is required; the title must fit its column. Tags and
/// photo references are free-form and may be empty.
pub fn validate_journal_entry(title: &str, entry: &str) -> Result<(), CoreError> {
    if entry.trim().is_empty() {
        return Err(CoreError::Validation(
            "Journal entry text must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Journal entry title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_entry_without_title() {
        assert!(validate_journal_entry("", "Went for a walk").is_ok());
    }

    #[test]
    fn rejects_empty_entry() {
        let err = validate_journal_entry("Title", "").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_whitespace_entry() {
        assert!(validate_journal_entry("Title", "  \n\t").is_err());
    }

    #[test]
    fn rejects_overlong_title() {
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        let err = validate_journal_entry(&title, "text").unwrap_err();
        assert!(err.to_string().contains("at most 255"));
    }

    #[test]
    fn title_limit_counts_characters() {
        let title = "é".repeat(MAX_TITLE_LEN);
        assert!(validate_journal_entry(&title, "text").is_ok());
    }
}
