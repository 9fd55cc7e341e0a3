use pitchband_rs::prelude::*;
use rand::distributions::Uniform;
use rand::{FromEntropy, Rng, StdRng};

fn random_buffer(len: usize) -> Vec<f32> {
    let mut rng = StdRng::from_entropy();
    let dist = Uniform::new(-1.0f32, 1.0);
    (0..len).map(|_| rng.sample(&dist)).collect()
}

#[test]
// Build a piano-range bank at every supported rate and stream a buffer
// through each member filter.
fn test_banks_filter_buffers_at_every_rate() {
    let buffer = random_buffer(256);
    for &rate in SUPPORTED_SAMPLE_RATES.iter() {
        let mut bank = midi_filter_bank(rate, 21, 108).unwrap();
        assert_eq!(bank.len(), 88);
        for (_, filter) in bank.iter_mut() {
            let filtered = filter.map(&buffer);
            assert_eq!(filtered.len(), buffer.len());
            assert!(filtered.iter().all(|x| x.is_finite()));
        }
    }
}

#[test]
// The invalid-argument surface of the factory.
fn test_bank_construction_failures() {
    assert_eq!(
        midi_filter_bank(44100.0, 10, 5).unwrap_err(),
        FilterError::InvalidPitchRange
    );
    assert_eq!(
        midi_filter_bank(48000.0, 0, 127).unwrap_err(),
        FilterError::UnsupportedSampleRate
    );
}

#[test]
// Resetting a used bank reproduces the output of a freshly built one.
fn test_bank_reset_matches_fresh_bank() {
    let buffer = random_buffer(200);
    let mut used = midi_filter_bank(22050.0, 60, 72).unwrap();
    for (_, filter) in used.iter_mut() {
        filter.map(&random_buffer(64));
    }
    used.reset();
    let mut fresh = midi_filter_bank(22050.0, 60, 72).unwrap();
    for pitch in 60..=72 {
        let a = used.get_mut(pitch).unwrap().map(&buffer);
        let b = fresh.get_mut(pitch).unwrap().map(&buffer);
        assert_eq!(a, b);
    }
}

#[test]
// Sustained tones survive a matched filter far better than tones an octave
// above the filter's pitch.
fn test_bank_members_favor_their_own_pitch() {
    let rate = 4410.0;
    let pitch = 57; // 220 Hz
    let tone = |freq: f32| -> Vec<f32> {
        (0..2048)
            .map(|n| {
                (2.0 * std::f32::consts::PI * freq * n as f32 / rate).sin()
            })
            .collect()
    };
    let energy = |samples: &[f32]| -> f32 {
        // Skip the warmup portion; the steady state is what matters here.
        samples[512..].iter().map(|x| x * x).sum()
    };

    let mut bank = midi_filter_bank(rate, pitch, pitch).unwrap();
    let filter = bank.get_mut(pitch).unwrap();
    let in_band = energy(&filter.map(&tone(220.0)));
    filter.reset();
    let octave_up = energy(&filter.map(&tone(880.0)));
    assert!(
        octave_up < in_band * 0.05,
        "lowpass let the high tone through: {} vs {}",
        octave_up,
        in_band
    );
}

#[test]
// The identity preset leaves any stream untouched.
fn test_identity_preset_roundtrip() {
    let buffer = random_buffer(333);
    let mut identity = fir1_16th_order_lowpass(1).unwrap();
    assert_eq!(identity.map(&buffer), buffer);
}

#[test]
// Presets and explicit construction give interchangeable filters.
fn test_preset_equality_with_explicit_construction() {
    let preset = fir1_16th_order_lowpass(1).unwrap();
    let explicit = FirFilter::new(&[1.0]).unwrap();
    assert_eq!(preset, explicit);

    let a = butterworth_8th_order_lowpass(2).unwrap();
    let b = butterworth_8th_order_lowpass(2).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, elliptic_8th_order_lowpass(2).unwrap());
}

#[test]
// A bank member is just an IirFilter; the trivial coefficients still work
// through the same public type.
fn test_explicit_iir_passthrough() {
    let mut filter = IirFilter::new(&[1.0], &[1.0]);
    let buffer = random_buffer(100);
    assert_eq!(filter.map(&buffer), buffer);
}
