//! A stateful FIR filter over buffers of samples.
//!
//! The filter is constructed once from a coefficient vector and then carries
//! its delay line across `map` calls, so a stream can be fed to it in buffers
//! of any size. Coefficients are immutable after construction; `reset`
//! discards only the runtime state.

use crate::filter::fir::fir;
use crate::filter::{coeffs_eq, FilterError};
use std::hash::{Hash, Hasher};

/// Construction-time split between the general convolution path and the
/// degenerate single-tap pass-through.
#[derive(Clone, Copy, Debug)]
enum FirKind {
    Identity,
    Convolution,
}

/// A finite impulse response filter with a circular delay line.
///
/// # Examples
///
/// ```
/// use pitchband_rs::filter::FirFilter;
///
/// let mut filter = FirFilter::new(&[0.2, 0.6, 0.6, 0.2]).unwrap();
///
/// // An impulse replays the taps.
/// let response = filter.map(&[1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(response, vec![0.2, 0.6, 0.6, 0.2]);
/// ```
#[derive(Clone, Debug)]
pub struct FirFilter {
    taps: Vec<f64>,
    delay: Vec<f64>,
    write_idx: usize,
    kind: FirKind,
}

impl FirFilter {
    /// Builds a filter from the given taps. The taps are copied; the delay
    /// line starts zeroed. An empty tap vector is rejected.
    pub fn new(taps: &[f64]) -> Result<FirFilter, FilterError> {
        if taps.is_empty() {
            return Err(FilterError::EmptyCoefficients);
        }
        let kind = if taps.len() == 1 && taps[0] == 1.0 {
            FirKind::Identity
        } else {
            FirKind::Convolution
        };
        Ok(FirFilter {
            taps: taps.to_vec(),
            delay: vec![0.0; taps.len()],
            write_idx: 0,
            kind,
        })
    }

    /// The filter's coefficients in application order.
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Runs a single sample through the filter, updating the delay line.
    pub fn filter(&mut self, input: f64) -> f64 {
        match self.kind {
            FirKind::Identity => {
                // The single delay slot still tracks the latest sample so
                // both paths leave identical state behind.
                self.delay[0] = input;
                input
            }
            FirKind::Convolution => {
                fir(input, &self.taps, &mut self.delay, &mut self.write_idx)
            }
        }
    }

    /// Filters a buffer of samples, returning a buffer of the same length.
    /// The delay line persists between calls, so consecutive buffers are
    /// filtered as one continuous stream.
    pub fn map(&mut self, samples: &[f32]) -> Vec<f32> {
        samples
            .iter()
            .map(|s| self.filter(f64::from(*s)) as f32)
            .collect()
    }

    /// Clears the delay line and write position, returning the filter to its
    /// just-constructed condition. The coefficients are untouched.
    pub fn reset(&mut self) {
        for slot in self.delay.iter_mut() {
            *slot = 0.0;
        }
        self.write_idx = 0;
    }
}

/// Equality is configuration identity: two filters are equal iff their taps
/// match element-wise. Delay-line contents and the write position are
/// excluded, so a filter mid-stream still equals a fresh one.
impl PartialEq for FirFilter {
    fn eq(&self, other: &FirFilter) -> bool {
        coeffs_eq(&self.taps, &other.taps)
    }
}

impl Eq for FirFilter {}

impl Hash for FirFilter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for tap in &self.taps {
            tap.to_bits().hash(state);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::filter::{FilterError, FirFilter};
    use rand::distributions::Uniform;
    use rand::{FromEntropy, Rng, StdRng};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn random_buffer(len: usize) -> Vec<f32> {
        let mut rng = StdRng::from_entropy();
        let dist = Uniform::new(-1.0f32, 1.0);
        (0..len).map(|_| rng.sample(&dist)).collect()
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty_taps_rejected() {
        assert_eq!(
            FirFilter::new(&[]).unwrap_err(),
            FilterError::EmptyCoefficients
        );
    }

    #[test]
    fn test_identity_passes_samples_through() {
        let mut filter = FirFilter::new(&[1.0]).unwrap();
        let buffer = random_buffer(256);
        assert_eq!(filter.map(&buffer), buffer);
    }

    #[test]
    fn test_single_tap_general_path_matches_identity() {
        // [1.0, 0.0] takes the convolution path but is also a pass-through.
        let mut general = FirFilter::new(&[1.0, 0.0]).unwrap();
        let mut identity = FirFilter::new(&[1.0]).unwrap();
        let buffer = random_buffer(64);
        assert_eq!(general.map(&buffer), identity.map(&buffer));
    }

    #[test]
    fn test_impulse_response_is_the_tap_vector() {
        let taps = [0.1, -0.3, 0.7, -0.3, 0.1];
        let mut filter = FirFilter::new(&taps).unwrap();
        let mut impulse = vec![0.0f32; taps.len()];
        impulse[0] = 1.0;
        let response = filter.map(&impulse);
        let expected: Vec<f32> = taps.iter().map(|t| *t as f32).collect();
        assert_eq!(response, expected);
    }

    #[test]
    fn test_buffer_boundaries_are_transparent() {
        let taps = [0.25, 0.5, 0.25];
        let buffer = random_buffer(100);
        let mut whole = FirFilter::new(&taps).unwrap();
        let mut split = FirFilter::new(&taps).unwrap();
        let expected = whole.map(&buffer);
        let mut actual = split.map(&buffer[..37]);
        actual.extend(split.map(&buffer[37..]));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_reset_restores_fresh_output() {
        let taps = [0.3, 0.3, 0.4];
        let buffer = random_buffer(50);
        let mut used = FirFilter::new(&taps).unwrap();
        used.map(&random_buffer(80));
        used.reset();
        let mut fresh = FirFilter::new(&taps).unwrap();
        assert_eq!(used.map(&buffer), fresh.map(&buffer));
    }

    #[test]
    fn test_map_preserves_length() {
        let mut filter = FirFilter::new(&[0.5, 0.5]).unwrap();
        assert_eq!(filter.map(&[]).len(), 0);
        assert_eq!(filter.map(&random_buffer(17)).len(), 17);
    }

    #[test]
    fn test_equality_tracks_taps_not_state() {
        let mut a = FirFilter::new(&[0.1, 0.2, 0.3]).unwrap();
        let b = FirFilter::new(&[0.1, 0.2, 0.3]).unwrap();
        let c = FirFilter::new(&[0.1, 0.2]).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);

        // Progress through a stream must not affect equality.
        a.map(&random_buffer(30));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
