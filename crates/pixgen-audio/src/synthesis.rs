//! Waveform generators.
//!
//! Every generator returns a fresh `Vec<f64>` of mono samples in
//! `[-1.0, 1.0]` (for `volume <= 1.0`) at the caller's sample rate. The
//! sample count for a duration is `sample_rate * duration` truncated.
//!
//! All output is deterministic: noise takes an explicit seed and nothing
//! else draws randomness.

use rand::Rng;

use crate::rng::create_rng;

const TWO_PI: f64 = std::f64::consts::TAU;

#[inline]
fn num_samples(duration: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration) as usize
}

/// Square wave with an integer period split.
///
/// The period is `sample_rate / freq` truncated to whole samples and the
/// high half is `period / 2` truncated; both are clamped to at least one
/// sample so extreme frequencies never divide by zero. The truncation gives
/// low-rate squares their characteristic slight detune, which is kept as-is.
pub fn square_wave(freq: f64, duration: f64, volume: f64, sample_rate: u32) -> Vec<f64> {
    let period = ((sample_rate as f64 / freq) as usize).max(1);
    let half = (period / 2).max(1);

    (0..num_samples(duration, sample_rate))
        .map(|i| if i % period < half { volume } else { -volume })
        .collect()
}

/// Pure sine wave: `volume * sin(2pi * freq * i / sample_rate)`.
pub fn sine_wave(freq: f64, duration: f64, volume: f64, sample_rate: u32) -> Vec<f64> {
    let sr = sample_rate as f64;
    (0..num_samples(duration, sample_rate))
        .map(|i| volume * (TWO_PI * freq * i as f64 / sr).sin())
        .collect()
}

/// Seeded white noise, uniform in `[-volume, volume)`.
///
/// The same seed always yields the same stream; a shorter buffer is a
/// prefix of a longer one with the same seed.
pub fn white_noise(duration: f64, volume: f64, seed: u32, sample_rate: u32) -> Vec<f64> {
    let mut rng = create_rng(seed);
    (0..num_samples(duration, sample_rate))
        .map(|_| volume * (rng.gen::<f64>() * 2.0 - 1.0))
        .collect()
}

/// Linear frequency sweep from `start_freq` to `end_freq`.
///
/// The instantaneous frequency `start + (end - start) * i / n` is plugged
/// directly into `sin(2pi * f * i / sample_rate)` with no phase
/// accumulation. That makes the sweep phase-discontinuous in the strict
/// DSP sense; the resulting chirp artifact is the established sound of
/// these effects and must not be "fixed" into a continuous-phase chirp.
pub fn pitch_sweep(
    start_freq: f64,
    end_freq: f64,
    duration: f64,
    volume: f64,
    sample_rate: u32,
) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    let sr = sample_rate as f64;

    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let freq = start_freq + (end_freq - start_freq) * t;
            volume * (TWO_PI * freq * i as f64 / sr).sin()
        })
        .collect()
}

/// A rest: `duration` seconds of zero samples.
pub fn silence(duration: f64, sample_rate: u32) -> Vec<f64> {
    vec![0.0; num_samples(duration, sample_rate)]
}
