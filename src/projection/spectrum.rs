//! Magnitude-spectrum computation over an in-place radix-2 transform.
//!
//! The input profile is zero-padded to the next power of two, lifted into a
//! complex work buffer, transformed in place with an iterative
//! decimation-in-time Cooley–Tukey FFT, and reduced to the magnitudes of the
//! first half of the bins. Real input makes the spectrum symmetric about
//! Nyquist, so the upper half carries no extra information and is dropped.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::projection::ensure_finite;
use crate::projection::traits::MagnitudeSpectrum1D;
use num_complex::Complex;

use alloc::{vec, vec::Vec};

/// In-place radix-2 decimation-in-time FFT.
///
/// `buf.len()` must be a power of two. Samples are first reordered with the
/// running-index bit-reversal recurrence, then combined in log2(n) butterfly
/// stages. The principal twiddle of each stage is re-derived from trig so
/// that the multiplicative twiddle recurrence never runs across stage
/// boundaries, which keeps its rounding drift stage-local.
fn fft_in_place(buf: &mut [Complex<f64>]) {
    let n = buf.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two());

    let mut j = 0usize;
    for i in 0..n {
        if i < j {
            buf.swap(i, j);
        }
        let mut m = n >> 1;
        while m >= 1 && j >= m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }

    let mut span = 2;
    while span <= n {
        let half = span / 2;
        let theta = 2.0 * core::f64::consts::PI / span as f64;
        let w_span = Complex::new(theta.cos(), -theta.sin());
        let mut start = 0;
        while start < n {
            let mut w = Complex::new(1.0, 0.0);
            for j in 0..half {
                let u = buf[start + j];
                let t = w * buf[start + j + half];
                buf[start + j] = u + t;
                buf[start + j + half] = u - t;
                w *= w_span;
            }
            start += span;
        }
        span <<= 1;
    }
}

/// Padded transform length for a profile of `input_len` samples.
pub fn padded_len(input_len: usize) -> usize {
    input_len.next_power_of_two()
}

/// Magnitude spectrum of a real-valued profile.
///
/// The profile is zero-padded to [`padded_len`] samples M and transformed;
/// bin `i` of the result is `sqrt(re_i^2 + im_i^2)` for `i` in `[0, M/2)`.
/// An empty profile yields an empty spectrum, and a single sample yields an
/// empty spectrum as well (a 1-point transform carries nothing beyond DC).
///
/// Non-finite samples are not screened here and poison the whole spectrum;
/// use [`SpectrumKernel`] for a checked entry point.
pub fn magnitude_spectrum(signal: &[f64]) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }
    let padded = padded_len(signal.len());
    let mut buf = vec![Complex::new(0.0, 0.0); padded];
    for (slot, &x) in buf.iter_mut().zip(signal.iter()) {
        *slot = Complex::new(x, 0.0);
    }
    fft_in_place(&mut buf);
    buf[..padded / 2].iter().map(|c| c.norm()).collect()
}

/// Constructor config for [`SpectrumKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumConfig {
    /// Optional upper bound on the padded transform length.
    ///
    /// Padding can grow the work buffer to just under twice the profile
    /// length; callers feeding very large profiles can bound the allocation
    /// here. `None` imposes no cap.
    pub max_padded_len: Option<usize>,
}

/// Trait-first magnitude-spectrum kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumKernel {
    max_padded_len: Option<usize>,
}

impl SpectrumKernel {
    fn expected_len(input_len: usize) -> usize {
        if input_len == 0 {
            0
        } else {
            padded_len(input_len) / 2
        }
    }

    fn check_bound(&self, input_len: usize) -> Result<(), ExecInvariantViolation> {
        if let Some(cap) = self.max_padded_len {
            if padded_len(input_len) > cap {
                return Err(ExecInvariantViolation::InvalidState {
                    reason: "padded transform length exceeds the configured bound",
                });
            }
        }
        Ok(())
    }
}

impl KernelLifecycle for SpectrumKernel {
    type Config = SpectrumConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if let Some(cap) = config.max_padded_len {
            if cap == 0 || !cap.is_power_of_two() {
                return Err(ConfigError::InvalidArgument {
                    arg: "max_padded_len",
                    reason: "bound must be a nonzero power of two",
                });
            }
        }
        Ok(Self {
            max_padded_len: config.max_padded_len,
        })
    }
}

impl MagnitudeSpectrum1D<f64> for SpectrumKernel {
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        ensure_finite(input, "signal")?;
        self.check_bound(input.len())?;

        let expected = Self::expected_len(input.len());
        let out = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        if out.len() != expected {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected,
                got: out.len(),
            });
        }
        out.copy_from_slice(&magnitude_spectrum(input));
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<f64>, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        ensure_finite(input, "signal")?;
        self.check_bound(input.len())?;
        Ok(magnitude_spectrum(input))
    }
}
