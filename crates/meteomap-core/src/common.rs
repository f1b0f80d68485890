//! Simple aggregate statistics for a loaded dataset.
//!
//! Returned by [`FeatureSearch::stats`](crate::traits::FeatureSearch::stats).
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub features: usize,
    pub countries: usize,
}
