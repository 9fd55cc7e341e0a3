//! Implementation of the finite impulse response (FIR) convolution step.
//!
//! The delay line is a fixed-length circular buffer: each new sample
//! overwrites the oldest slot and the convolution walks backwards from the
//! write position, wrapping at the buffer edge. Sequential calls therefore
//! behave as one continuous stream with no per-buffer state handling.

use crate::util::math::{ring_advance, ring_back};
use num_traits::Float;

/// Runs one sample through an FIR filter.
///
/// Advances the write index, stores `input` there, and convolves the taps
/// against the delay line ending at the write position. `delay` must have the
/// same length as `taps`.
///
/// # Arguments
///
/// * `input` - Input sample to be filtered.
/// * `taps` - FIR filter taps.
/// * `delay` - Circular delay line holding the most recent samples.
/// * `write_idx` - Position of the most recent sample in `delay`.
///
/// # Examples
///
/// ```
/// use pitchband_rs::filter::fir::fir;
///
/// let taps = vec![0.5, 0.5];
/// let mut delay = vec![0.0; 2];
/// let mut write_idx = 0;
///
/// // A two-tap moving average.
/// assert_eq!(fir(1.0, &taps, &mut delay, &mut write_idx), 0.5);
/// assert_eq!(fir(1.0, &taps, &mut delay, &mut write_idx), 1.0);
/// ```
pub fn fir<T>(input: T, taps: &[T], delay: &mut [T], write_idx: &mut usize) -> T
where
    T: Float,
{
    let len = delay.len();
    *write_idx = ring_advance(*write_idx, len);
    delay[*write_idx] = input;
    let mut acc = T::zero();
    for (i, tap) in taps.iter().enumerate() {
        acc = acc + *tap * delay[ring_back(*write_idx, i, len)];
    }
    acc
}

#[cfg(test)]
mod test {
    use crate::filter::fir::fir;

    #[test]
    fn test_fir_impulse_replays_taps() {
        let taps = vec![0.2, 0.6, 0.6, 0.2];
        let mut delay = vec![0.0; taps.len()];
        let mut write_idx = 0;
        let mut output = vec![];
        for &x in &[1.0, 0.0, 0.0, 0.0] {
            output.push(fir(x, &taps, &mut delay, &mut write_idx));
        }
        assert_eq!(output, taps);
    }

    #[test]
    fn test_fir_wraps_the_delay_line() {
        let taps = vec![1.0, -1.0];
        let mut delay = vec![0.0; 2];
        let mut write_idx = 0;
        // A first difference: y[n] = x[n] - x[n-1].
        let input = [3.0, 5.0, 2.0, 2.0, 7.0];
        let output: Vec<f64> = input
            .iter()
            .map(|&x| fir(x, &taps, &mut delay, &mut write_idx))
            .collect();
        assert_eq!(output, vec![3.0, 2.0, -3.0, 0.0, 5.0]);
    }

    #[test]
    fn test_fir_single_tap_scales() {
        let taps = vec![0.25f32];
        let mut delay = vec![0.0; 1];
        let mut write_idx = 0;
        for &x in &[4.0, -8.0, 0.5] {
            assert_eq!(fir(x, &taps, &mut delay, &mut write_idx), 0.25 * x);
        }
    }
}
