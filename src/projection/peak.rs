//! Ranking of magnitude-spectrum bins into reportable peaks.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D};
use crate::projection::ensure_finite;
use crate::projection::traits::PeakRank1D;
use core::cmp::Ordering;

use alloc::vec::Vec;

/// Default number of peaks reported by the convenience entry points.
pub const DEFAULT_PEAK_COUNT: usize = 3;

/// Denominator used to convert a spectrum bin index into cycles per sample.
///
/// [`Padded`](FrequencyBasis::Padded) normalizes against the padded
/// transform length; [`Original`](FrequencyBasis::Original) normalizes
/// against the pre-padding sample count. The two differ whenever the input
/// was actually padded, so both are exposed and callers pick the semantics
/// they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBasis {
    /// `frequency = bin / M` where M is the padded transform length.
    Padded,
    /// `frequency = bin / n` where n is the pre-padding sample count.
    Original(usize),
}

/// One ranked spectrum bin with its physical-unit conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Spectrum bin index. Always at least 1; DC is never reported.
    pub bin: usize,
    /// Spatial frequency in cycles per input sample.
    pub frequency: f64,
    /// Samples per cycle, `1 / frequency`.
    pub wavelength: f64,
    /// Bin magnitude, in input amplitude units.
    pub magnitude: f64,
}

impl Peak {
    /// Reporting view: frequency rounded to 4 decimal places, wavelength and
    /// magnitude to 1. Ranking always happens at full precision; rank is
    /// assigned by the caller from list order.
    pub fn rounded(&self) -> Peak {
        Peak {
            bin: self.bin,
            frequency: round_to(self.frequency, 4),
            wavelength: round_to(self.wavelength, 1),
            magnitude: round_to(self.magnitude, 1),
        }
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Rank spectrum bins by magnitude and report the strongest `k` as peaks.
///
/// Bin 0 is excluded unconditionally: the DC term reflects the profile's
/// mean level, dominates any non-zero-mean signal, and carries no
/// periodicity information. Ties rank the lower bin first, so the ordering
/// is deterministic. A spectrum with fewer than `k` usable bins yields
/// fewer peaks.
pub fn top_peaks(spectrum: &[f64], k: usize, basis: FrequencyBasis) -> Vec<Peak> {
    if spectrum.len() < 2 || k == 0 {
        return Vec::new();
    }
    let denominator = match basis {
        FrequencyBasis::Padded => (spectrum.len() * 2) as f64,
        FrequencyBasis::Original(0) => return Vec::new(),
        FrequencyBasis::Original(n) => n as f64,
    };

    let mut ranked: Vec<(usize, f64)> = spectrum.iter().copied().enumerate().skip(1).collect();
    // sort_by is stable: equal magnitudes keep ascending bin order.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(k)
        .map(|(bin, magnitude)| {
            let frequency = bin as f64 / denominator;
            Peak {
                bin,
                frequency,
                wavelength: frequency.recip(),
                magnitude,
            }
        })
        .collect()
}

/// Constructor config for [`PeakRankKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakRankConfig {
    /// Number of peaks to report.
    pub k: usize,
    /// Frequency normalization basis.
    pub basis: FrequencyBasis,
}

/// Trait-first spectrum-bin ranking kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakRankKernel {
    k: usize,
    basis: FrequencyBasis,
}

impl KernelLifecycle for PeakRankKernel {
    type Config = PeakRankConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.k == 0 {
            return Err(ConfigError::InvalidArgument {
                arg: "k",
                reason: "peak count must be at least one",
            });
        }
        if config.basis == FrequencyBasis::Original(0) {
            return Err(ConfigError::InvalidArgument {
                arg: "basis",
                reason: "original sample count must be nonzero",
            });
        }
        Ok(Self {
            k: config.k,
            basis: config.basis,
        })
    }
}

impl PeakRank1D for PeakRankKernel {
    type Output = Vec<Peak>;

    fn run_into<I>(&self, spectrum: &I, out: &mut Self::Output) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        *out = self.run_alloc(spectrum)?;
        Ok(())
    }

    fn run_alloc<I>(&self, spectrum: &I) -> Result<Self::Output, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let spectrum = spectrum
            .read_slice()
            .map_err(ExecInvariantViolation::from)?;
        ensure_finite(spectrum, "spectrum")?;
        Ok(top_peaks(spectrum, self.k, self.basis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ranks_by_magnitude_and_skips_dc() {
        let spectrum = [100.0, 5.0, 50.0, 2.0, 30.0];
        let peaks = top_peaks(&spectrum, 3, FrequencyBasis::Padded);
        let ranked: Vec<(usize, f64)> = peaks.iter().map(|p| (p.bin, p.magnitude)).collect();
        assert_eq!(ranked, vec![(2, 50.0), (4, 30.0), (1, 5.0)]);
    }

    #[test]
    fn dc_is_never_reported_even_when_dominant() {
        let spectrum = [1e9, 1.0, 2.0, 3.0];
        for peak in top_peaks(&spectrum, 10, FrequencyBasis::Padded) {
            assert!(peak.bin >= 1);
        }
    }

    #[test]
    fn equal_magnitudes_rank_lower_bins_first() {
        let spectrum = [10.0, 7.0, 7.0, 7.0];
        let peaks = top_peaks(&spectrum, 2, FrequencyBasis::Padded);
        assert_eq!(peaks[0].bin, 1);
        assert_eq!(peaks[1].bin, 2);
    }

    #[test]
    fn short_spectra_yield_fewer_peaks() {
        assert!(top_peaks(&[], 3, FrequencyBasis::Padded).is_empty());
        assert!(top_peaks(&[9.0], 3, FrequencyBasis::Padded).is_empty());
        assert_eq!(
            top_peaks(&[9.0, 1.0, 2.0], 10, FrequencyBasis::Padded).len(),
            2
        );
    }

    #[test]
    fn padded_basis_converts_bins_to_physical_units() {
        // 64-bin spectrum comes from a 128-point transform.
        let mut spectrum = vec![0.0f64; 64];
        spectrum[8] = 12.5;
        let peaks = top_peaks(&spectrum, 1, FrequencyBasis::Padded);
        assert_eq!(peaks[0].bin, 8);
        assert_abs_diff_eq!(peaks[0].frequency, 0.0625, epsilon = 1e-12);
        assert_abs_diff_eq!(peaks[0].wavelength, 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(peaks[0].magnitude, 12.5, epsilon = 1e-12);
    }

    #[test]
    fn original_basis_normalizes_against_sample_count() {
        let mut spectrum = vec![0.0f64; 64];
        spectrum[8] = 1.0;
        let peaks = top_peaks(&spectrum, 1, FrequencyBasis::Original(100));
        assert_abs_diff_eq!(peaks[0].frequency, 0.08, epsilon = 1e-12);
        assert_abs_diff_eq!(peaks[0].wavelength, 12.5, epsilon = 1e-12);
    }

    #[test]
    fn rounded_applies_reporting_precision_only() {
        let peak = Peak {
            bin: 3,
            frequency: 0.083_333_33,
            wavelength: 12.04,
            magnitude: 7.749,
        };
        let rounded = peak.rounded();
        assert_abs_diff_eq!(rounded.frequency, 0.0833, epsilon = 1e-12);
        assert_abs_diff_eq!(rounded.wavelength, 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rounded.magnitude, 7.7, epsilon = 1e-12);
        // The source value is untouched.
        assert_abs_diff_eq!(peak.magnitude, 7.749, epsilon = 1e-15);
    }

    #[test]
    fn peak_rank_kernel_contracts_validate_config_and_input() {
        assert!(PeakRankKernel::try_new(PeakRankConfig {
            k: 0,
            basis: FrequencyBasis::Padded,
        })
        .is_err());
        assert!(PeakRankKernel::try_new(PeakRankConfig {
            k: 3,
            basis: FrequencyBasis::Original(0),
        })
        .is_err());

        let kernel = PeakRankKernel::try_new(PeakRankConfig {
            k: 3,
            basis: FrequencyBasis::Padded,
        })
        .expect("valid config");
        let err = kernel
            .run_alloc(&[1.0f64, f64::NAN])
            .expect_err("non-finite magnitudes should be rejected");
        assert!(matches!(err, ExecInvariantViolation::NonFiniteSample { .. }));

        let empty: &[f64] = &[];
        assert!(kernel.run_alloc(empty).expect("empty is valid").is_empty());
    }
}
