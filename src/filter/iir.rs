//! Implementation of the infinite impulse response (IIR) recurrence step.
//!
//! The difference equation is evaluated directly against two circular
//! history buffers, one of past inputs and one of past outputs, sharing a
//! single position index. The output history slot for the sample being
//! computed is zeroed before accumulation, which lets the feedback loop run
//! over every coefficient index: the `a[0]` term reads that zeroed slot and
//! contributes nothing, so one buffer serves as both the accumulator target
//! and the `y[n-k]` history.

use crate::util::math::{ring_advance, ring_back};
use num_traits::Float;

/// Runs one warm-state sample through an IIR filter.
///
/// `input_hist` and `output_hist` must both have length equal to the filter
/// order (the number of input taps), and `output_taps[0]` is assumed to be
/// one by the usual direct-form convention.
///
/// # Arguments
///
/// * `input` - Input sample to be filtered.
/// * `input_taps` - Feedforward (numerator) coefficients.
/// * `output_taps` - Feedback (denominator) coefficients.
/// * `input_hist` - Circular history of recent inputs.
/// * `output_hist` - Circular history of recent outputs.
/// * `position` - Slot of the most recent sample in both histories.
///
/// # Examples
///
/// ```
/// use pitchband_rs::filter::iir::iir;
///
/// // y[n] = x[n] + 0.5 * y[n-1]
/// let input_taps = vec![1.0, 0.0];
/// let output_taps = vec![1.0, -0.5];
/// let mut input_hist = vec![0.0; 2];
/// let mut output_hist = vec![0.0; 2];
/// let mut position = 0;
///
/// let first = iir(
///     1.0,
///     &input_taps,
///     &output_taps,
///     &mut input_hist,
///     &mut output_hist,
///     &mut position,
/// );
/// assert_eq!(first, 1.0);
/// let second = iir(
///     0.0,
///     &input_taps,
///     &output_taps,
///     &mut input_hist,
///     &mut output_hist,
///     &mut position,
/// );
/// assert_eq!(second, 0.5);
/// ```
pub fn iir<T>(
    input: T,
    input_taps: &[T],
    output_taps: &[T],
    input_hist: &mut [T],
    output_hist: &mut [T],
    position: &mut usize,
) -> T
where
    T: Float,
{
    let order = input_hist.len();
    *position = ring_advance(*position, order);
    input_hist[*position] = input;
    output_hist[*position] = T::zero();
    let mut acc = T::zero();
    let mut j = *position;
    for i in 0..input_taps.len() {
        acc = acc + input_taps[i] * input_hist[j]
            - output_taps[i] * output_hist[j];
        j = ring_back(j, 1, order);
    }
    output_hist[*position] = acc;
    acc
}

#[cfg(test)]
mod test {
    use crate::filter::iir::iir;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_iir_matches_direct_difference_equation() {
        // y[n] = b0 x[n] + b1 x[n-1] + b2 x[n-2] - a1 y[n-1] - a2 y[n-2]
        let b: [f64; 3] = [0.2, 0.3, 0.1];
        let a = [1.0, -0.4, 0.25];
        let input = [1.0, -0.5, 0.25, 0.75, -1.0, 0.0, 0.5];

        let mut input_hist = vec![0.0; 3];
        let mut output_hist = vec![0.0; 3];
        let mut position = 0;
        let mut x1 = 0.0;
        let mut x2 = 0.0;
        let mut y1 = 0.0;
        let mut y2 = 0.0;
        for &x in &input {
            let got = iir(
                x,
                &b,
                &a,
                &mut input_hist,
                &mut output_hist,
                &mut position,
            );
            let want =
                b[0] * x + b[1] * x1 + b[2] * x2 - a[1] * y1 - a[2] * y2;
            assert_approx_eq!(got, want, 1e-12);
            x2 = x1;
            x1 = x;
            y2 = y1;
            y1 = want;
        }
    }

    #[test]
    fn test_iir_feedback_decay() {
        // y[n] = x[n] + 0.5 y[n-1] fed an impulse decays by halves.
        let b = [1.0, 0.0];
        let a = [1.0, -0.5];
        let mut input_hist = vec![0.0; 2];
        let mut output_hist = vec![0.0; 2];
        let mut position = 0;
        let output: Vec<f64> = [1.0, 0.0, 0.0, 0.0]
            .iter()
            .map(|&x| {
                iir(
                    x,
                    &b,
                    &a,
                    &mut input_hist,
                    &mut output_hist,
                    &mut position,
                )
            })
            .collect();
        assert_eq!(output, vec![1.0, 0.5, 0.25, 0.125]);
    }
}
