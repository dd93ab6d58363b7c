//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Root configuration structure.
///
/// Every section is optional in YAML; missing sections take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodecConfig {
    /// Text array literal handling.
    #[serde(default)]
    pub text: TextConfig,

    /// Binary array payload handling.
    #[serde(default)]
    pub binary: BinaryConfig,

    /// JSON payload handling.
    #[serde(default)]
    pub json: JsonConfig,

    /// Upper limit on decoded element count, applied by every decoder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_elements: Option<usize>,
}

/// Text array literal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Require the literal to start with `{` and end with `}` (default: true).
    ///
    /// When false the first and last characters are dropped unchecked.
    #[serde(default = "default_true")]
    pub strict_envelope: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            strict_envelope: true,
        }
    }
}

/// Binary array payload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryConfig {
    /// Lower bound written into the dimension descriptor (default: `i32::MIN`).
    #[serde(default = "default_lower_bound")]
    pub lower_bound: i32,
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self {
            lower_bound: default_lower_bound(),
        }
    }
}

/// JSON payload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonConfig {
    /// Accept arrays of native numbers when decoding (default: true).
    #[serde(default = "default_true")]
    pub accept_numbers: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            accept_numbers: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_lower_bound() -> i32 {
    crate::format::binary::DEFAULT_LOWER_BOUND
}
