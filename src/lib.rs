//! Weighted random picks from a list of labeled items.
//!
//! Items are loaded from YAML (or converted from a plain text list), sampled
//! with replacement in proportion to their weights, then deduplicated and
//! ordered by their key.
pub mod config;
pub mod error;
pub mod item;
pub mod sampler;

pub use config::{load_yaml, parse_text, read_text, write_yaml, ItemCollection};
pub use error::{Error, Result};
pub use item::{extract_key, WeightedItem};
pub use sampler::{sample, CumulativeWeights};
