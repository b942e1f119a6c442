// src/grid/classify.rs

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, Result};
use crate::model::elements::ElementRecord;
use crate::model::PropertyTable;

/// Contrast bucket of a value; picks the text colour drawn on top of its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Low,
    High,
}

impl Bucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Low => "low",
            Bucket::High => "high",
        }
    }
}

/// Two-bucket split: `[min, q-quantile]` is low, everything above is high.
/// Only built through `new`, so `quantile` always lies in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketPolicy {
    quantile: f64,
}

impl Default for BucketPolicy {
    fn default() -> Self {
        Self { quantile: 0.75 }
    }
}

impl BucketPolicy {
    pub fn new(quantile: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&quantile) {
            return Err(HeatmapError::invalid_input(format!(
                "bucket quantile must lie in [0, 1], got {}",
                quantile
            )));
        }
        Ok(Self { quantile })
    }

    pub fn quantile(&self) -> f64 {
        self.quantile
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub min: f64,
    pub split: f64,
    pub max: f64,
}

impl Thresholds {
    /// Lower bucket is closed on both ends.
    pub fn bucket(&self, value: f64) -> Bucket {
        if value <= self.split {
            Bucket::Low
        } else {
            Bucket::High
        }
    }
}

/// Quantile with linear interpolation between order statistics.
/// `sorted` must be ascending and non-empty. `q` is clamped to [0, 1];
/// NaN reads as 1, the top of the range.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let q = if q.is_nan() { 1.0 } else { q.clamp(0.0, 1.0) };
    let last = sorted.len() - 1;
    let pos = q * last as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Thresholds over the finite values; `InvalidInput` when there are none.
pub fn thresholds(values: impl IntoIterator<Item = Option<f64>>, policy: BucketPolicy) -> Result<Thresholds> {
    let mut sorted: Vec<f64> = values.into_iter().flatten().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Err(HeatmapError::invalid_input("no numeric values to bucket"));
    }
    sorted.sort_by(f64::total_cmp);

    let t = Thresholds {
        min: sorted[0],
        split: quantile_sorted(&sorted, policy.quantile()),
        max: sorted[sorted.len() - 1],
    };
    log::debug!(
        "bucket thresholds over {} values: min={} q{}={} max={}",
        sorted.len(),
        t.min,
        policy.quantile(),
        t.split,
        t.max
    );
    Ok(t)
}

/// Labels each row of `column`. Rows with a missing value get no bucket.
pub fn classify(
    table: &PropertyTable,
    column: &str,
    policy: BucketPolicy,
) -> Result<Vec<(&'static ElementRecord, Option<Bucket>)>> {
    let values = table.column(column)?;
    let t = thresholds(values.iter().map(|(_, v)| *v), policy)?;

    Ok(values
        .into_iter()
        .map(|(e, v)| (e, v.filter(|x| x.is_finite()).map(|x| t.bucket(x))))
        .collect())
}
