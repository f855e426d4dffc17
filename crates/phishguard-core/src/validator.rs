//! Syntactic validation of user-supplied input.

use phishguard_types::InputType;
use url::Url;

use crate::error::{PhishGuardError, Result};

/// Checks that `text` is acceptable for submission as `input_type`.
///
/// Email content only needs to be non-empty after trimming. URLs must
/// additionally parse as an absolute URL with a host; there is no
/// reachability or network check. Pure function, no side effects.
pub fn validate(input_type: InputType, text: &str) -> Result<()> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(PhishGuardError::validation(
            "Please enter content to analyze",
        ));
    }

    if input_type == InputType::Url {
        let parsed = Url::parse(trimmed)
            .map_err(|_| PhishGuardError::validation("Please enter a valid URL"))?;
        if !parsed.has_host() {
            return Err(PhishGuardError::validation("Please enter a valid URL"));
        }
    }

    Ok(())
}
