//! Stateful single-input single-output filters. A filter owns its
//! coefficients for its whole lifetime and carries the mutable history of the
//! stream it is filtering, so buffer boundaries are invisible to the
//! filtering math. One filter serves exactly one stream; hand each stream its
//! own instance.

use std::error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    EmptyCoefficients,
    UnsupportedCutoffFactor,
    UnsupportedSampleRate,
    InvalidPitchRange,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = match *self {
            FilterError::EmptyCoefficients => {
                "A filter requires at least one coefficient"
            }
            FilterError::UnsupportedCutoffFactor => {
                "No precomputed design exists for the requested cutoff factor"
            }
            FilterError::UnsupportedSampleRate => {
                "No precomputed coefficients exist for the requested sample \
                 rate"
            }
            FilterError::InvalidPitchRange => {
                "Pitch range must run low to high within MIDI pitches 0-127"
            }
        };
        write!(f, "Filter error: {}", desc)
    }
}

impl error::Error for FilterError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

/// Bitwise comparison of coefficient vectors. Filter equality is defined
/// over configuration, and bit equality keeps `eq` consistent with the
/// `to_bits`-based `Hash` impls.
pub(crate) fn coeffs_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits())
}

/// Single-sample FIR convolution against a circular delay line
pub mod fir;
/// The stateful FIR filter and its identity fast path
pub mod fir_filter;
/// The warm-state IIR recurrence over circular histories
pub mod iir;
/// The stateful IIR filter and its cold-start handling
pub mod iir_filter;
/// Named lowpass presets keyed by Nyquist-fraction cutoff factors
pub mod presets;

pub use self::fir_filter::FirFilter;
pub use self::iir_filter::IirFilter;
