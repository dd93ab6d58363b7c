//! Configuration validation.

use super::CodecConfig;
use crate::error::{Result, SeqError};

/// Validate the configuration.
pub fn validate(config: &CodecConfig) -> Result<()> {
    if let Some(max) = config.max_elements {
        if max == 0 {
            return Err(SeqError::Config(
                "max_elements must be at least 1".into(),
            ));
        }
        // Dimension lengths travel as i32 on the wire.
        if max > i32::MAX as usize {
            return Err(SeqError::Config(format!(
                "max_elements must not exceed {}, got {}",
                i32::MAX,
                max
            )));
        }
        // The last index of a full array must still fit in an i32.
        let last_index = i64::from(config.binary.lower_bound) + max as i64 - 1;
        if last_index > i64::from(i32::MAX) {
            return Err(SeqError::Config(format!(
                "binary.lower_bound {} with max_elements {} overflows the array index range",
                config.binary.lower_bound, max
            )));
        }
    }

    Ok(())
}
