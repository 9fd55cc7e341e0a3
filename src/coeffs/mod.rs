//! Precomputed filter coefficient tables.
//!
//! Everything in this module is generated offline by the filter design
//! tooling and checked in as constant data. The tables are opaque: nothing
//! in the crate interprets the values beyond handing them to a filter
//! constructor unchanged.

/// Generated FIR and IIR lowpass preset tables
mod lowpass;
/// Generated per-sample-rate, per-MIDI-pitch elliptic lowpass tables
mod midi;

pub(crate) use self::lowpass::{
    BUTTERWORTH_LOWPASS_EIGHTH, BUTTERWORTH_LOWPASS_HALF,
    BUTTERWORTH_LOWPASS_QUARTER, ELLIPTIC_LOWPASS_EIGHTH,
    ELLIPTIC_LOWPASS_HALF, ELLIPTIC_LOWPASS_QUARTER, FIR1_LOWPASS_EIGHTH,
    FIR1_LOWPASS_FIFTH, FIR1_LOWPASS_HALF, FIR1_LOWPASS_ONE_160TH,
    FIR1_LOWPASS_QUARTER, FIR1_LOWPASS_SEVENTH, FIR1_LOWPASS_THIRD,
};

/// One numerator row and one denominator row of nine taps for each of the
/// 128 MIDI pitches.
pub(crate) type MidiTable = [[[f64; 9]; 2]; 128];

/// The sample rates the per-pitch tables are generated for: the seven
/// decimation stages of an 88.2 kHz source stream.
pub const SUPPORTED_SAMPLE_RATES: [f32; 7] = [
    44100.0, 22050.0, 11025.0, 8820.0, 5512.5, 4410.0, 2756.25,
];

/// Looks up the per-pitch table generated for `sample_rate`, or `None` when
/// the rate is not one of [`SUPPORTED_SAMPLE_RATES`].
pub(crate) fn midi_table(sample_rate: f32) -> Option<&'static MidiTable> {
    if sample_rate == 44100.0 {
        Some(&midi::MIDI_ELLIPTIC_44100)
    } else if sample_rate == 22050.0 {
        Some(&midi::MIDI_ELLIPTIC_22050)
    } else if sample_rate == 11025.0 {
        Some(&midi::MIDI_ELLIPTIC_11025)
    } else if sample_rate == 8820.0 {
        Some(&midi::MIDI_ELLIPTIC_8820)
    } else if sample_rate == 5512.5 {
        Some(&midi::MIDI_ELLIPTIC_5512_5)
    } else if sample_rate == 4410.0 {
        Some(&midi::MIDI_ELLIPTIC_4410)
    } else if sample_rate == 2756.25 {
        Some(&midi::MIDI_ELLIPTIC_2756_25)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use crate::coeffs::{midi_table, SUPPORTED_SAMPLE_RATES};

    #[test]
    fn test_every_supported_rate_has_a_table() {
        for &rate in SUPPORTED_SAMPLE_RATES.iter() {
            assert!(midi_table(rate).is_some(), "missing table for {}", rate);
        }
        assert!(midi_table(48000.0).is_none());
        assert!(midi_table(0.0).is_none());
    }

    #[test]
    fn test_tables_are_normalized_sections() {
        for &rate in SUPPORTED_SAMPLE_RATES.iter() {
            let table = midi_table(rate).unwrap();
            for entry in table.iter() {
                // Leading denominator tap pinned to one by the generator.
                assert_eq!(entry[1][0], 1.0);
                for tap in entry[0].iter().chain(entry[1].iter()) {
                    assert!(tap.is_finite());
                }
            }
        }
    }
}
