//! A stateful IIR filter over buffers of samples.
//!
//! Construction stores the two coefficient vectors and nothing else; the
//! history buffers are created by the first sample the filter sees. That
//! first sample also seeds both histories with its own value and passes
//! through unchanged, so a stream that starts at a nonzero level does not
//! ring the filter with a cold-start transient.

use crate::filter::iir::iir;
use crate::filter::{coeffs_eq, FilterError};
use std::hash::{Hash, Hasher};

/// Runtime state of a warmed-up filter. Both histories and the shared
/// position live together so the filter is either fully cold or fully warm;
/// there is no representable in-between.
#[derive(Clone, Debug)]
struct IirState {
    input_hist: Vec<f64>,
    output_hist: Vec<f64>,
    position: usize,
}

/// An infinite impulse response filter in direct form.
///
/// # Examples
///
/// ```
/// use pitchband_rs::filter::IirFilter;
///
/// // y[n] = x[n] + 0.5 * y[n-1]
/// let mut filter = IirFilter::new(&[1.0, 0.0], &[1.0, -0.5]);
///
/// // The first sample passes through unchanged and warms the filter up.
/// assert_eq!(filter.filter(1.0), 1.0);
/// assert_eq!(filter.filter(0.0), 0.5);
/// assert_eq!(filter.filter(0.0), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct IirFilter {
    input_taps: Vec<f64>,
    output_taps: Vec<f64>,
    state: Option<IirState>,
}

impl IirFilter {
    /// Builds a filter from feedforward (`input_taps`, the numerator) and
    /// feedback (`output_taps`, the denominator) coefficients. The filter
    /// order is the input tap count and `output_taps[0]` is assumed to be
    /// one.
    ///
    /// The vectors are copied but not validated against each other; feeding
    /// samples through a filter whose feedback vector is shorter than its
    /// feedforward vector panics on the out-of-range coefficient index.
    pub fn new(input_taps: &[f64], output_taps: &[f64]) -> IirFilter {
        IirFilter {
            input_taps: input_taps.to_vec(),
            output_taps: output_taps.to_vec(),
            state: None,
        }
    }

    /// The filter order: the number of feedforward coefficients.
    pub fn order(&self) -> usize {
        self.input_taps.len()
    }

    /// Runs a single sample through the filter.
    pub fn filter(&mut self, input: f64) -> f64 {
        match self.state {
            None => {
                let order = self.input_taps.len();
                self.state = Some(IirState {
                    input_hist: vec![input; order],
                    output_hist: vec![input; order],
                    position: 0,
                });
                input
            }
            Some(ref mut state) => iir(
                input,
                &self.input_taps,
                &self.output_taps,
                &mut state.input_hist,
                &mut state.output_hist,
                &mut state.position,
            ),
        }
    }

    /// Filters a buffer of samples, returning a buffer of the same length.
    /// History persists between calls, so consecutive buffers are filtered
    /// as one continuous stream.
    pub fn map(&mut self, samples: &[f32]) -> Vec<f32> {
        samples
            .iter()
            .map(|s| self.filter(f64::from(*s)) as f32)
            .collect()
    }

    /// Discards the history buffers and position, returning the filter to
    /// the cold state. The coefficients are untouched.
    pub fn reset(&mut self) {
        self.state = None;
    }
}

/// Equality is configuration identity over both coefficient vectors, order
/// included. History contents, warmth, and position are excluded.
impl PartialEq for IirFilter {
    fn eq(&self, other: &IirFilter) -> bool {
        coeffs_eq(&self.input_taps, &other.input_taps)
            && coeffs_eq(&self.output_taps, &other.output_taps)
    }
}

impl Eq for IirFilter {}

impl Hash for IirFilter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for tap in self.input_taps.iter().chain(self.output_taps.iter()) {
            tap.to_bits().hash(state);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::filter::IirFilter;
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
    fn test_cold_start_passes_first_sample_through() {
        // Coefficients that would scale anything are ignored by the very
        // first sample.
        let mut filter = IirFilter::new(&[0.3, -0.2, 0.1], &[1.0, 0.5, 0.25]);
        assert_eq!(filter.filter(0.7), 0.7);
    }

    #[test]
    fn test_trivial_filter_is_a_passthrough() {
        let mut filter = IirFilter::new(&[1.0], &[1.0]);
        let buffer = random_buffer(128);
        assert_eq!(filter.map(&buffer), buffer);
    }

    #[test]
    fn test_warm_recurrence_after_nonzero_cold_start() {
        // y[n] = x[n] + 0.5 y[n-1]; the cold start seeds y[-1] with the
        // first sample's value.
        let mut filter = IirFilter::new(&[1.0, 0.0], &[1.0, -0.5]);
        assert_eq!(filter.filter(1.0), 1.0);
        assert_eq!(filter.filter(0.0), 0.5);
        assert_eq!(filter.filter(0.0), 0.25);
        assert_eq!(filter.filter(0.0), 0.125);
    }

    #[test]
    fn test_buffer_boundaries_are_transparent() {
        let buffer = random_buffer(90);
        let mut whole = IirFilter::new(&[0.2, 0.3, 0.1], &[1.0, -0.4, 0.25]);
        let mut split = IirFilter::new(&[0.2, 0.3, 0.1], &[1.0, -0.4, 0.25]);
        let expected = whole.map(&buffer);
        let mut actual = split.map(&buffer[..41]);
        actual.extend(split.map(&buffer[41..]));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_reset_returns_to_cold() {
        let mut filter = IirFilter::new(&[0.5, 0.5], &[1.0, -0.2]);
        filter.map(&random_buffer(64));
        filter.reset();
        // Cold again: the next sample passes through unchanged.
        assert_eq!(filter.filter(2.0), 2.0);
    }

    #[test]
    fn test_reset_restores_fresh_output() {
        let buffer = random_buffer(70);
        let mut used = IirFilter::new(&[0.2, 0.3, 0.1], &[1.0, -0.4, 0.25]);
        used.map(&random_buffer(30));
        used.reset();
        let mut fresh = IirFilter::new(&[0.2, 0.3, 0.1], &[1.0, -0.4, 0.25]);
        assert_eq!(used.map(&buffer), fresh.map(&buffer));
    }

    #[test]
    fn test_map_preserves_length() {
        let mut filter = IirFilter::new(&[1.0], &[1.0]);
        assert_eq!(filter.map(&[]).len(), 0);
        assert_eq!(filter.map(&random_buffer(33)).len(), 33);
    }

    #[test]
    fn test_equality_tracks_coefficients_not_state() {
        let mut a = IirFilter::new(&[0.5, 0.5], &[1.0, -0.2]);
        let b = IirFilter::new(&[0.5, 0.5], &[1.0, -0.2]);
        let c = IirFilter::new(&[0.5, 0.5], &[1.0, -0.3]);
        let d = IirFilter::new(&[0.5], &[1.0]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
        assert_ne!(a, d);

        // Warming the filter up must not affect equality.
        a.map(&random_buffer(16));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
