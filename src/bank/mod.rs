//! Construction of per-pitch filter banks.
//!
//! A bank holds one IIR filter per MIDI pitch in a requested range, built
//! from the elliptic lowpass table generated for one of the supported sample
//! rates. Every member filter is a fresh instance: filters carry the mutable
//! history of the stream they are filtering, so they are never pooled or
//! shared between banks or streams.

use crate::coeffs;
use crate::filter::iir_filter::IirFilter;
use crate::filter::FilterError;

/// Highest pitch the coefficient tables cover.
const MAX_MIDI_PITCH: u8 = 127;

/// An ordered collection of per-pitch IIR filters for one sample rate.
///
/// # Examples
///
/// ```
/// use pitchband_rs::bank::MidiFilterBank;
///
/// // One filter per key of an 88-key piano.
/// let bank = MidiFilterBank::new(44100.0, 21, 108).unwrap();
/// assert_eq!(bank.len(), 88);
/// assert_eq!(bank.sample_rate(), 44100.0);
/// ```
#[derive(Clone, Debug)]
pub struct MidiFilterBank {
    sample_rate: f32,
    min_pitch: u8,
    filters: Vec<IirFilter>,
}

impl MidiFilterBank {
    /// Builds a bank with one filter per pitch in `[min_pitch, max_pitch]`
    /// inclusive.
    ///
    /// Fails with [`FilterError::InvalidPitchRange`] when the range runs
    /// high to low or reaches past MIDI pitch 127, and with
    /// [`FilterError::UnsupportedSampleRate`] when no table exists for
    /// `sample_rate`.
    pub fn new(
        sample_rate: f32,
        min_pitch: u8,
        max_pitch: u8,
    ) -> Result<MidiFilterBank, FilterError> {
        if max_pitch < min_pitch || max_pitch > MAX_MIDI_PITCH {
            return Err(FilterError::InvalidPitchRange);
        }
        let table = match coeffs::midi_table(sample_rate) {
            Some(table) => table,
            None => return Err(FilterError::UnsupportedSampleRate),
        };
        let filters = (min_pitch..=max_pitch)
            .map(|pitch| {
                let entry = &table[pitch as usize];
                IirFilter::new(&entry[0], &entry[1])
            })
            .collect();
        Ok(MidiFilterBank {
            sample_rate,
            min_pitch,
            filters,
        })
    }

    /// The sample rate the bank's coefficients were generated for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// The lowest pitch in the bank.
    pub fn min_pitch(&self) -> u8 {
        self.min_pitch
    }

    /// The highest pitch in the bank.
    pub fn max_pitch(&self) -> u8 {
        self.min_pitch + (self.filters.len() - 1) as u8
    }

    /// Number of pitches covered.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// The filter for `pitch`, or `None` when the pitch is outside the
    /// bank's range.
    pub fn get(&self, pitch: u8) -> Option<&IirFilter> {
        self.index_of(pitch).and_then(|i| self.filters.get(i))
    }

    /// Mutable access to the filter for `pitch`; filtering mutates history,
    /// so this is the accessor streams feed samples through.
    pub fn get_mut(&mut self, pitch: u8) -> Option<&mut IirFilter> {
        match self.index_of(pitch) {
            Some(i) => self.filters.get_mut(i),
            None => None,
        }
    }

    /// Iterates the bank in ascending pitch order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &IirFilter)> {
        let min_pitch = self.min_pitch;
        self.filters
            .iter()
            .enumerate()
            .map(move |(i, filter)| (min_pitch + i as u8, filter))
    }

    /// Iterates the bank mutably in ascending pitch order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u8, &mut IirFilter)> {
        let min_pitch = self.min_pitch;
        self.filters
            .iter_mut()
            .enumerate()
            .map(move |(i, filter)| (min_pitch + i as u8, filter))
    }

    /// Resets every member filter to its cold state.
    pub fn reset(&mut self) {
        for filter in self.filters.iter_mut() {
            filter.reset();
        }
    }

    fn index_of(&self, pitch: u8) -> Option<usize> {
        if pitch < self.min_pitch {
            return None;
        }
        let index = usize::from(pitch - self.min_pitch);
        if index < self.filters.len() {
            Some(index)
        } else {
            None
        }
    }
}

/// Constructs a new `MidiFilterBank` covering `[min_pitch, max_pitch]` at
/// the given sample rate.
///
/// # Arguments
///
/// * `sample_rate` - One of the supported sample rates.
/// * `min_pitch` - Lowest MIDI pitch to build a filter for.
/// * `max_pitch` - Highest MIDI pitch to build a filter for, inclusive.
pub fn midi_filter_bank(
    sample_rate: f32,
    min_pitch: u8,
    max_pitch: u8,
) -> Result<MidiFilterBank, FilterError> {
    MidiFilterBank::new(sample_rate, min_pitch, max_pitch)
}

#[cfg(test)]
mod test {
    use crate::bank::MidiFilterBank;
    use crate::coeffs::SUPPORTED_SAMPLE_RATES;
    use crate::filter::FilterError;

    #[test]
    fn test_inverted_range_is_rejected() {
        assert_eq!(
            MidiFilterBank::new(44100.0, 10, 5).unwrap_err(),
            FilterError::InvalidPitchRange
        );
    }

    #[test]
    fn test_out_of_range_pitch_is_rejected() {
        assert_eq!(
            MidiFilterBank::new(44100.0, 100, 128).unwrap_err(),
            FilterError::InvalidPitchRange
        );
    }

    #[test]
    fn test_unsupported_rate_is_rejected() {
        assert_eq!(
            MidiFilterBank::new(48000.0, 0, 127).unwrap_err(),
            FilterError::UnsupportedSampleRate
        );
    }

    #[test]
    fn test_full_range_bank_at_every_rate() {
        for &rate in SUPPORTED_SAMPLE_RATES.iter() {
            let bank = MidiFilterBank::new(rate, 0, 127).unwrap();
            assert_eq!(bank.len(), 128);
            assert_eq!(bank.min_pitch(), 0);
            assert_eq!(bank.max_pitch(), 127);
            for (_, filter) in bank.iter() {
                assert_eq!(filter.order(), 9);
            }
        }
    }

    #[test]
    fn test_single_pitch_bank() {
        let bank = MidiFilterBank::new(22050.0, 69, 69).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.min_pitch(), 69);
        assert_eq!(bank.max_pitch(), 69);
    }

    #[test]
    fn test_get_respects_the_requested_range() {
        let mut bank = MidiFilterBank::new(11025.0, 40, 60).unwrap();
        assert!(bank.get(39).is_none());
        assert!(bank.get(40).is_some());
        assert!(bank.get(60).is_some());
        assert!(bank.get(61).is_none());
        assert!(bank.get_mut(50).is_some());
    }

    #[test]
    fn test_members_start_cold() {
        let mut bank = MidiFilterBank::new(44100.0, 60, 72).unwrap();
        // A cold filter passes its first sample through unchanged.
        assert_eq!(bank.get_mut(60).unwrap().filter(0.25), 0.25);
    }

    #[test]
    fn test_members_are_independent_instances() {
        let mut bank = MidiFilterBank::new(44100.0, 60, 61).unwrap();
        bank.get_mut(60).unwrap().map(&[0.5, -0.5, 0.25]);
        // Warming pitch 60 must not warm pitch 61.
        assert_eq!(bank.get_mut(61).unwrap().filter(0.125), 0.125);
    }

    #[test]
    fn test_reset_chills_every_member() {
        let mut bank = MidiFilterBank::new(44100.0, 60, 62).unwrap();
        for (_, filter) in bank.iter_mut() {
            filter.map(&[1.0, 0.5, -0.25]);
        }
        bank.reset();
        for (_, filter) in bank.iter_mut() {
            assert_eq!(filter.filter(0.75), 0.75);
        }
    }

    #[test]
    fn test_same_rate_banks_hold_equal_configurations() {
        let a = MidiFilterBank::new(8820.0, 30, 40).unwrap();
        let b = MidiFilterBank::new(8820.0, 30, 40).unwrap();
        for pitch in 30..=40 {
            assert_eq!(a.get(pitch).unwrap(), b.get(pitch).unwrap());
        }
    }
}
