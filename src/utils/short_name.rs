//! Random short name generation.

use crate::error::AppError;
use base64::Engine as _;

/// Random bytes drawn per attempt; encodes to 8 base64 characters.
const RANDOM_BYTES: usize = 6;

const MAX_LENGTH: usize = 8;

/// Shortest name accepted by link validation.
const MIN_LENGTH: usize = 3;

/// Generates a random alphanumeric short name of up to 8 characters.
///
/// Random bytes come from `getrandom` and are encoded as URL-safe base64 with
/// `-` and `_` removed. Draws are repeated in the (unlikely) case that fewer
/// than 3 characters remain.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_short_name() -> Result<String, AppError> {
    loop {
        let mut buffer = [0u8; RANDOM_BYTES];
        getrandom::fill(&mut buffer).map_err(|e| {
            tracing::error!(error = %e, "System RNG failure");
            AppError::internal("Failed to generate short name")
        })?;

        let name: String = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(buffer)
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(MAX_LENGTH)
            .collect();

        if name.len() >= MIN_LENGTH {
            return Ok(name);
        }
    }
}
