//! Generates a pickup jingle and writes it as a WAV file.

use pixgen_audio::{envelope::Adsr, mixer, synthesis, wav};

fn main() {
    println!("Generating demo sound effect...");

    let sr = 22050;
    let env = Adsr::new(0.005, 0.0, 0.8, 0.04);

    let blip = |freq: f64| {
        let tone = synthesis::square_wave(freq, 0.09, 0.3, sr);
        let shimmer = synthesis::sine_wave(freq * 2.0, 0.09, 0.1, sr);
        env.apply(&mixer::mix(&tone, &shimmer), sr)
    };

    let rest = synthesis::silence(0.02, sr);
    let jingle = mixer::concat(&[&blip(660.0), &rest, &blip(880.0), &rest, &blip(1320.0)]);

    let result = wav::WavResult::from_mono(&jingle, sr).expect("valid sample rate");
    std::fs::write("demo_pickup.wav", &result.wav_data).expect("writable working directory");
    println!(
        "Wrote demo_pickup.wav ({} samples, pcm blake3 {})",
        result.num_samples, result.pcm_hash
    );
}
