//! Run extraction from label maps and masks.
//!
//! Stands in for the upstream segmentation step: a row-major label image is
//! scanned once and every maximal horizontal stretch of one label becomes a
//! `Run` of that label's object.

use std::collections::BTreeMap;
use std::fmt;

use super::types::{LabelObject, Run};

/// Errors raised while reading a label map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelMapError {
    /// Buffer length does not match `width * height`.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for LabelMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "label map size mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for LabelMapError {}

fn check_size(len: usize, width: usize, height: usize) -> Result<(), LabelMapError> {
    let expected = width.saturating_mul(height);
    if len != expected {
        return Err(LabelMapError::SizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Split a row-major label image into one object per non-background label.
pub fn encode_label_map(
    labels: &[u32],
    width: usize,
    height: usize,
    background: u32,
) -> Result<BTreeMap<u32, LabelObject>, LabelMapError> {
    check_size(labels.len(), width, height)?;
    let mut objects: BTreeMap<u32, LabelObject> = BTreeMap::new();
    if width == 0 {
        return Ok(objects);
    }
    for (y, row) in labels.chunks_exact(width).enumerate() {
        let mut x = 0usize;
        while x < width {
            let label = row[x];
            let start = x;
            while x < width && row[x] == label {
                x += 1;
            }
            if label == background {
                continue;
            }
            objects
                .entry(label)
                .or_default()
                .runs
                .push(Run::new(y as i64, start as i64, (x - start) as i64));
        }
    }
    Ok(objects)
}

/// Runs of the set pixels of a row-major boolean mask.
pub fn encode_mask(mask: &[bool], width: usize, height: usize) -> Result<Vec<Run>, LabelMapError> {
    check_size(mask.len(), width, height)?;
    Ok(mask_runs(mask, width))
}

pub(crate) fn mask_runs(mask: &[bool], width: usize) -> Vec<Run> {
    let mut runs = Vec::new();
    if width == 0 {
        return runs;
    }
    for (y, row) in mask.chunks_exact(width).enumerate() {
        let mut x = 0usize;
        while x < width {
            if !row[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < width && row[x] {
                x += 1;
            }
            runs.push(Run::new(y as i64, start as i64, (x - start) as i64));
        }
    }
    runs
}
