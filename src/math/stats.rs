//! Descriptive statistics over peptide scores.
//!
//! All functions reject empty input.

use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p75: f64,
}

pub fn summarize(values: &[f64]) -> Result<ScoreSummary> {
    Ok(ScoreSummary {
        min: min(values)?,
        max: max(values)?,
        mean: mean(values)?,
        median: median(values)?,
        p75: percentile(values, 75.0)?,
    })
}

pub fn min(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "min")?;
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "max")?;
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

pub fn mean(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "mean")?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "median")?;
    let sorted = sorted_copy(values);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Percentile `p` (0..=100) with linear interpolation between the two
/// closest ranks: `h = (n - 1) * p / 100`.
pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    ensure_non_empty(values, "percentile")?;
    if !(0.0..=100.0).contains(&p) {
        bail!("percentile must be within 0..=100, got {}", p);
    }
    let sorted = sorted_copy(values);
    Ok(percentile_sorted(&sorted, p))
}

fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p / 100.0;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

fn ensure_non_empty(values: &[f64], what: &str) -> Result<()> {
    if values.is_empty() {
        bail!("{} of an empty score list is undefined", what);
    }
    Ok(())
}
