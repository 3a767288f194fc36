//! Combining sample buffers.
//!
//! `mix` is the one place sums are clamped back into `[-1.0, 1.0]`;
//! generators themselves never clamp, so transient overshoot between
//! operations is allowed and resolved here or at the encoding boundary.

/// Mix two buffers sample by sample.
///
/// The output is as long as the longer input, with the shorter one
/// zero-padded. Every summed sample is clamped to `[-1.0, 1.0]`.
pub fn mix(a: &[f64], b: &[f64]) -> Vec<f64> {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| {
            let va = a.get(i).copied().unwrap_or(0.0);
            let vb = b.get(i).copied().unwrap_or(0.0);
            (va + vb).clamp(-1.0, 1.0)
        })
        .collect()
}

/// Concatenate buffers in order, no resampling.
pub fn concat(segments: &[&[f64]]) -> Vec<f64> {
    let total = segments.iter().map(|s| s.len()).sum();
    let mut out = Vec::with_capacity(total);
    for segment in segments {
        out.extend_from_slice(segment);
    }
    out
}

/// Repeat a buffer `count` times. Zero repeats give an empty buffer.
pub fn repeat(samples: &[f64], count: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(samples.len() * count);
    for _ in 0..count {
        out.extend_from_slice(samples);
    }
    out
}
