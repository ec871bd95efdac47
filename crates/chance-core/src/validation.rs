use tracing::debug;

use crate::error::{Error, Result};

/// Fail with a range error carrying `message` when `condition` holds.
///
/// Guarded operations call this before drawing any random value, so a
/// rejected call never consumes randomness.
pub fn ensure_range(condition: bool, message: &str) -> Result<()> {
    if condition {
        debug!(reason = message, "rejected parameters");
        return Err(Error::Range(message.to_string()));
    }
    Ok(())
}
