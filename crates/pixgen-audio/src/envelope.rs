//! Amplitude envelope shaping.
//!
//! The envelope here is the simplified shape the asset library was tuned
//! against: a linear attack ramp, a sustain plateau, and a linear release
//! ramp. The `decay` field exists for interface symmetry with standard
//! ADSR but is not applied as a separate segment; the gain steps from the
//! attack ramp straight onto the plateau.

/// ADSR envelope parameters. Times are in seconds, sustain is a gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    /// Attack time in seconds.
    pub attack: f64,
    /// Accepted for interface symmetry; not applied as a distinct segment.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for Adsr {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.0,
            sustain: 1.0,
            release: 0.05,
        }
    }
}

impl Adsr {
    /// Creates new envelope parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Apply the envelope to a sample buffer, returning the shaped copy.
    ///
    /// Per-sample gain: `i / attack_len` during the attack, `sustain` in
    /// the middle, and a linear ramp from `sustain` to zero across the
    /// last `release_len` samples. Zero-length attack or release windows
    /// divide by one instead of zero. Where the attack and release windows
    /// overlap (a very short buffer) the attack ramp wins.
    pub fn apply(&self, samples: &[f64], sample_rate: u32) -> Vec<f64> {
        let n = samples.len();
        let attack_len = (self.attack * sample_rate as f64) as usize;
        let release_len = (self.release * sample_rate as f64) as usize;
        let release_start = n.saturating_sub(release_len);

        samples
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let gain = if i < attack_len {
                    i as f64 / attack_len.max(1) as f64
                } else if i >= release_start {
                    self.sustain * (n - i) as f64 / release_len.max(1) as f64
                } else {
                    self.sustain
                };
                s * gain
            })
            .collect()
    }
}
