//! Script constants and validation.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Display title of the unsaved script template.
pub const NEW_SCRIPT_NAME: &str = "New script";

/// Anonymous scripts untouched for this many days are purged.
pub const RETENTION_DAYS: i64 = 90;

/// Maximum length of a script's display title.
pub const MAX_NAME_LENGTH: usize = 500;

/* --------------------------------------------------------------------------
Functions
-------------------------------------------------------------------------- */

/// Scripts last modified strictly before this instant are stale.
pub fn retention_cutoff(now: Timestamp) -> Timestamp {
    now - Duration::days(RETENTION_DAYS)
}

/// Validate a script display title.
pub fn validate_script_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Script name exceeds maximum length of {MAX_NAME_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
