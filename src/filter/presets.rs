//! Named lowpass presets built from precomputed coefficient tables.
//!
//! Each constructor is keyed by an integer cutoff factor: the resulting
//! filter's cutoff sits at the Nyquist frequency divided by that factor.
//! Only the factors a table was generated for are accepted; anything else is
//! an invalid-argument error.

use crate::coeffs;
use crate::filter::fir_filter::FirFilter;
use crate::filter::iir_filter::IirFilter;
use crate::filter::FilterError;

/// Builds a 16th-order (17-tap) windowed-sinc FIR lowpass with its cutoff at
/// `Nyquist / factor`.
///
/// A factor of one degenerates to the identity filter. Supported factors are
/// 1, 2, 3, 4, 5, 7, 8 and 160.
///
/// # Examples
///
/// ```
/// use pitchband_rs::filter::presets::fir1_16th_order_lowpass;
///
/// let mut identity = fir1_16th_order_lowpass(1).unwrap();
/// assert_eq!(identity.map(&[0.5, -0.5]), vec![0.5, -0.5]);
///
/// assert!(fir1_16th_order_lowpass(6).is_err());
/// ```
pub fn fir1_16th_order_lowpass(factor: u32) -> Result<FirFilter, FilterError> {
    let taps: &[f64] = match factor {
        1 => &[1.0],
        2 => &coeffs::FIR1_LOWPASS_HALF,
        3 => &coeffs::FIR1_LOWPASS_THIRD,
        4 => &coeffs::FIR1_LOWPASS_QUARTER,
        5 => &coeffs::FIR1_LOWPASS_FIFTH,
        7 => &coeffs::FIR1_LOWPASS_SEVENTH,
        8 => &coeffs::FIR1_LOWPASS_EIGHTH,
        160 => &coeffs::FIR1_LOWPASS_ONE_160TH,
        _ => return Err(FilterError::UnsupportedCutoffFactor),
    };
    FirFilter::new(taps)
}

/// Builds an 8th-order Butterworth IIR lowpass with its cutoff at
/// `Nyquist / factor`. Supported factors are 2, 4 and 8.
pub fn butterworth_8th_order_lowpass(
    factor: u32,
) -> Result<IirFilter, FilterError> {
    let sections = match factor {
        2 => &coeffs::BUTTERWORTH_LOWPASS_HALF,
        4 => &coeffs::BUTTERWORTH_LOWPASS_QUARTER,
        8 => &coeffs::BUTTERWORTH_LOWPASS_EIGHTH,
        _ => return Err(FilterError::UnsupportedCutoffFactor),
    };
    Ok(IirFilter::new(&sections[0], &sections[1]))
}

/// Builds an 8th-order elliptic IIR lowpass with its cutoff at
/// `Nyquist / factor`. Supported factors are 2, 4 and 8.
pub fn elliptic_8th_order_lowpass(
    factor: u32,
) -> Result<IirFilter, FilterError> {
    let sections = match factor {
        2 => &coeffs::ELLIPTIC_LOWPASS_HALF,
        4 => &coeffs::ELLIPTIC_LOWPASS_QUARTER,
        8 => &coeffs::ELLIPTIC_LOWPASS_EIGHTH,
        _ => return Err(FilterError::UnsupportedCutoffFactor),
    };
    Ok(IirFilter::new(&sections[0], &sections[1]))
}

#[cfg(test)]
mod test {
    use crate::filter::presets::*;
    use crate::filter::{FilterError, FirFilter, IirFilter};
    use rustfft::num_complex::Complex;
    use rustfft::num_traits::Zero;
    use rustfft::FFTplanner;

    /// Magnitude spectrum of a filter's impulse response. The impulse is
    /// preceded by one zero sample so an IIR filter's cold start seeds its
    /// histories with zeros rather than the impulse itself.
    fn spectrum(filter: &mut IirFilter, size: usize) -> Vec<f64> {
        let mut stimulus = vec![0.0f32; size + 1];
        stimulus[1] = 1.0;
        let response = filter.map(&stimulus);
        let mut input: Vec<Complex<f64>> = response[1..]
            .iter()
            .map(|x| Complex::new(f64::from(*x), 0.0))
            .collect();
        let mut output: Vec<Complex<f64>> = vec![Complex::zero(); size];
        let mut planner = FFTplanner::new(false);
        let fft = planner.plan_fft(size);
        fft.process(&mut input[..], &mut output[..]);
        output.iter().map(|c| c.norm()).collect()
    }

    #[test]
    fn test_factor_one_is_the_identity_filter() {
        let preset = fir1_16th_order_lowpass(1).unwrap();
        let explicit = FirFilter::new(&[1.0]).unwrap();
        assert_eq!(preset, explicit);
    }

    #[test]
    fn test_unsupported_factors_are_rejected() {
        assert_eq!(
            fir1_16th_order_lowpass(6).unwrap_err(),
            FilterError::UnsupportedCutoffFactor
        );
        assert_eq!(
            fir1_16th_order_lowpass(0).unwrap_err(),
            FilterError::UnsupportedCutoffFactor
        );
        assert_eq!(
            butterworth_8th_order_lowpass(3).unwrap_err(),
            FilterError::UnsupportedCutoffFactor
        );
        assert_eq!(
            elliptic_8th_order_lowpass(16).unwrap_err(),
            FilterError::UnsupportedCutoffFactor
        );
    }

    #[test]
    fn test_fir_presets_have_seventeen_taps() {
        for &factor in &[2u32, 3, 4, 5, 7, 8, 160] {
            let filter = fir1_16th_order_lowpass(factor).unwrap();
            assert_eq!(filter.taps().len(), 17);
        }
    }

    #[test]
    fn test_iir_presets_are_ninth_order_sections() {
        for &factor in &[2u32, 4, 8] {
            assert_eq!(butterworth_8th_order_lowpass(factor).unwrap().order(), 9);
            assert_eq!(elliptic_8th_order_lowpass(factor).unwrap().order(), 9);
        }
    }

    #[test]
    fn test_butterworth_passes_dc_and_kills_the_top_octave() {
        let mut filter = butterworth_8th_order_lowpass(4).unwrap();
        let spectrum = spectrum(&mut filter, 1024);
        // Unity passband at DC, deep attenuation well past Nyquist / 4
        // (cutoff bin 128 of 1024).
        assert!(spectrum[0] > 0.95 && spectrum[0] < 1.05);
        assert!(spectrum[400] < 0.01);
        assert!(spectrum[500] < 0.01);
    }

    #[test]
    fn test_elliptic_holds_its_stopband_floor() {
        let mut filter = elliptic_8th_order_lowpass(8).unwrap();
        let spectrum = spectrum(&mut filter, 2048);
        // The design has 0.5 dB of passband ripple and a 50 dB stopband.
        assert!(spectrum[0] > 0.9 && spectrum[0] < 1.01);
        for bin in 200..1024 {
            assert!(
                spectrum[bin] < 0.02,
                "stopband leak at bin {}: {}",
                bin,
                spectrum[bin]
            );
        }
    }

    #[test]
    fn test_fir_preset_attenuates_above_cutoff() {
        // Feed an oscillation at half Nyquist through a Nyquist / 8 lowpass
        // and compare output energy to input energy.
        let mut filter = fir1_16th_order_lowpass(8).unwrap();
        let tone: Vec<f32> =
            (0..512).map(|n| (n as f32 * 1.57).sin()).collect();
        let filtered = filter.map(&tone);
        let energy_in: f32 = tone.iter().map(|x| x * x).sum();
        let energy_out: f32 = filtered.iter().map(|x| x * x).sum();
        assert!(energy_out < energy_in * 0.05);
    }
}
