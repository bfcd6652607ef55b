use serde::{Deserialize, Serialize};

/// A label with a relative draw weight.
///
/// The label may carry a `{...}` section, in which case only the text inside
/// the braces is used to deduplicate and order sampled items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedItem {
    #[serde(alias = "Value")]
    pub value: String,
    #[serde(alias = "Weight")]
    pub weight: u32,
}

impl WeightedItem {
    pub fn new(value: impl Into<String>, weight: u32) -> WeightedItem {
        WeightedItem {
            value: value.into(),
            weight,
        }
    }

    pub fn key(&self) -> &str {
        extract_key(&self.value)
    }
}

///
/// Returns the text between the first `{` and the last `}` of `value`.
///
/// If either brace is missing, or the last `}` comes before the first `{`,
/// the whole value is the key.
///
pub fn extract_key(value: &str) -> &str {
    match (value.find('{'), value.rfind('}')) {
        (Some(start), Some(end)) if end > start => &value[start + 1..end],
        _ => value,
    }
}
