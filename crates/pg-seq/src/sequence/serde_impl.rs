//! `serde` hooks: sequences serialize as JSON arrays of string tokens.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Sequence;
use crate::config::CodecConfig;
use crate::format::json;
use crate::model::ArrayElement;

impl<T: ArrayElement> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(ArrayElement::token))
    }
}

/// Accepts an array of string tokens or, for integers, an array of numbers.
impl<'de, T: ArrayElement> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        json::decode_value(&value, &CodecConfig::default())
            .map(Sequence)
            .map_err(D::Error::custom)
    }
}
