//! This module provides an easy single import for those using this crate.

pub use crate::bank::{midi_filter_bank, MidiFilterBank};
pub use crate::coeffs::SUPPORTED_SAMPLE_RATES;
pub use crate::filter::presets::{
    butterworth_8th_order_lowpass, elliptic_8th_order_lowpass,
    fir1_16th_order_lowpass,
};
pub use crate::filter::{FilterError, FirFilter, IirFilter};
