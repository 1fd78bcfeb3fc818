//! Composed pipelines: profile → gradient → magnitude spectrum → peaks.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D};
use crate::projection::ensure_finite;
use crate::projection::traits::PeriodicityDetect1D;
use crate::projection::{
    gradient, gradient_abs, magnitude_spectrum, top_peaks, FrequencyBasis, Peak,
    DEFAULT_PEAK_COUNT,
};

use alloc::{vec, vec::Vec};

/// Magnitude spectrum of the profile's first derivative.
///
/// Differentiation suppresses the profile's slowly varying background and
/// emphasizes edge transitions, which is where halftone grids and scan-line
/// artifacts live. Degenerate profiles bypass the transform: an empty
/// profile yields `[]` and a single sample yields `[0.0]`.
pub fn gradient_spectrum(profile: &[f64]) -> Vec<f64> {
    match profile.len() {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => magnitude_spectrum(&gradient(profile)),
    }
}

/// Magnitude spectrum of the rectified (absolute-value) derivative.
///
/// Rectification detects periodicity independent of edge direction: features
/// that alternate between rising and falling transitions at the same spatial
/// period reinforce instead of cancelling.
pub fn abs_gradient_spectrum(profile: &[f64]) -> Vec<f64> {
    match profile.len() {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => magnitude_spectrum(&gradient_abs(profile)),
    }
}

/// Constructor config for [`PeriodicityKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicityConfig {
    /// Rectify the derivative before transforming.
    pub rectify: bool,
    /// Number of peaks to report.
    pub peaks: usize,
    /// Normalize frequencies against the profile's own sample count instead
    /// of the padded transform length.
    ///
    /// When `false`, frequencies use the padded length; the two differ
    /// exactly when the profile length is not a power of two.
    pub normalize_to_input: bool,
}

/// Trait-first end-to-end periodicity detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicityKernel {
    rectify: bool,
    peaks: usize,
    normalize_to_input: bool,
}

impl KernelLifecycle for PeriodicityKernel {
    type Config = PeriodicityConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.peaks == 0 {
            return Err(ConfigError::InvalidArgument {
                arg: "peaks",
                reason: "peak count must be at least one",
            });
        }
        Ok(Self {
            rectify: config.rectify,
            peaks: config.peaks,
            normalize_to_input: config.normalize_to_input,
        })
    }
}

impl PeriodicityDetect1D for PeriodicityKernel {
    type Output = Vec<Peak>;

    fn run_into<I>(&self, profile: &I, out: &mut Self::Output) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        *out = self.run_alloc(profile)?;
        Ok(())
    }

    fn run_alloc<I>(&self, profile: &I) -> Result<Self::Output, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let profile = profile.read_slice().map_err(ExecInvariantViolation::from)?;
        // A profile of one sample has no frequency content beyond DC, which
        // is excluded from reporting anyway.
        if profile.len() <= 1 {
            return Ok(Vec::new());
        }
        ensure_finite(profile, "profile")?;

        let slope = if self.rectify {
            gradient_abs(profile)
        } else {
            gradient(profile)
        };
        let spectrum = magnitude_spectrum(&slope);
        let basis = if self.normalize_to_input {
            FrequencyBasis::Original(profile.len())
        } else {
            FrequencyBasis::Padded
        };
        Ok(top_peaks(&spectrum, self.peaks, basis))
    }
}

/// Rank the dominant periodic components of a projection profile.
///
/// Runs the signed-derivative pipeline and reports the strongest `peaks`
/// non-DC bins under the padded frequency basis. Invalid configuration or
/// non-finite input degrades to an empty list.
pub fn detect_periodicity(profile: &[f64], peaks: usize) -> Vec<Peak> {
    let kernel = match PeriodicityKernel::try_new(PeriodicityConfig {
        rectify: false,
        peaks,
        normalize_to_input: false,
    }) {
        Ok(kernel) => kernel,
        Err(_) => return Vec::new(),
    };
    kernel.run_alloc(profile).unwrap_or_default()
}

/// [`detect_periodicity`] over the rectified derivative.
pub fn detect_rectified_periodicity(profile: &[f64], peaks: usize) -> Vec<Peak> {
    let kernel = match PeriodicityKernel::try_new(PeriodicityConfig {
        rectify: true,
        peaks,
        normalize_to_input: false,
    }) {
        Ok(kernel) => kernel,
        Err(_) => return Vec::new(),
    };
    kernel.run_alloc(profile).unwrap_or_default()
}

/// [`detect_periodicity`] with the default peak count.
pub fn detect_dominant_periodicity(profile: &[f64]) -> Vec<Peak> {
    detect_periodicity(profile, DEFAULT_PEAK_COUNT)
}
