//! Finite-difference gradient estimation for sampled profiles.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::projection::ensure_finite;
use crate::projection::traits::Gradient1D;
use num_traits::Float;

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

fn fill_gradient<F>(signal: &[F], spacing: F, out: &mut [F])
where
    F: Float,
{
    let n = signal.len();
    match n {
        0 => {}
        1 => out[0] = F::zero(),
        _ => {
            let two = F::one() + F::one();
            out[0] = (signal[1] - signal[0]) / spacing;
            for i in 1..n - 1 {
                out[i] = (signal[i + 1] - signal[i - 1]) / (two * spacing);
            }
            out[n - 1] = (signal[n - 1] - signal[n - 2]) / spacing;
        }
    }
}

/// Length-preserving first-derivative estimate of a sampled profile.
///
/// Forward difference at the left edge, second-order central differences on
/// the interior, backward difference at the right edge. A single sample has
/// no slope and maps to `[0]`; an empty profile maps to `[]`.
#[cfg(feature = "alloc")]
pub fn gradient<F>(signal: &[F]) -> Vec<F>
where
    F: Float,
{
    let mut out = vec![F::zero(); signal.len()];
    fill_gradient(signal, F::one(), &mut out);
    out
}

/// Element-wise absolute value of [`gradient`].
///
/// Rectification makes rising and falling transitions at the same spatial
/// period reinforce rather than cancel, which is what the rectified pipeline
/// variant relies on.
#[cfg(feature = "alloc")]
pub fn gradient_abs<F>(signal: &[F]) -> Vec<F>
where
    F: Float,
{
    let mut out = gradient(signal);
    for v in out.iter_mut() {
        *v = v.abs();
    }
    out
}

/// Constructor config for [`GradientKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientConfig<F>
where
    F: Float,
{
    /// Sample pitch in physical units (pixels for projection profiles).
    pub spacing: F,
}

/// Trait-first gradient kernel with a configurable sample pitch.
///
/// With `spacing = 1` this matches [`gradient`] exactly; other pitches scale
/// the estimate into per-physical-unit slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientKernel<F>
where
    F: Float,
{
    spacing: F,
}

impl<F> GradientKernel<F>
where
    F: Float,
{
    /// Return the configured sample pitch.
    pub fn spacing(&self) -> F {
        self.spacing
    }
}

impl<F> KernelLifecycle for GradientKernel<F>
where
    F: Float,
{
    type Config = GradientConfig<F>;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if !config.spacing.is_finite() || config.spacing <= F::zero() {
            return Err(ConfigError::InvalidArgument {
                arg: "spacing",
                reason: "spacing must be finite and > 0",
            });
        }
        Ok(Self {
            spacing: config.spacing,
        })
    }
}

impl<F> Gradient1D<F> for GradientKernel<F>
where
    F: Float,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        ensure_finite(input, "signal")?;
        let out = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        if out.len() != input.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: input.len(),
                got: out.len(),
            });
        }
        fill_gradient(input, self.spacing, out);
        Ok(())
    }

    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<F>, ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        ensure_finite(input, "signal")?;
        let mut out = vec![F::zero(); input.len()];
        fill_gradient(input, self.spacing, &mut out);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn gradient_of_empty_profile_is_empty() {
        assert_eq!(gradient::<f64>(&[]), Vec::<f64>::new());
    }

    #[test]
    fn gradient_of_single_sample_is_zero() {
        assert_eq!(gradient(&[5.0f64]), vec![0.0]);
    }

    #[test]
    fn gradient_mixes_forward_central_backward_differences() {
        assert_eq!(
            gradient(&[0.0f64, 1.0, 0.0, 1.0]),
            vec![1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn gradient_preserves_length() {
        let profile: Vec<f64> = (0..37).map(|i| (i as f64 * 0.37).sin()).collect();
        assert_eq!(gradient(&profile).len(), profile.len());
    }

    #[test]
    fn gradient_abs_rectifies_falling_edges() {
        let d = gradient(&[0.0f64, 2.0, 0.0]);
        let r = gradient_abs(&[0.0f64, 2.0, 0.0]);
        assert_eq!(d, vec![2.0, 0.0, -2.0]);
        assert_eq!(r, vec![2.0, 0.0, 2.0]);
    }

    #[test]
    fn gradient_kernel_scales_by_spacing() {
        let kernel = GradientKernel::try_new(GradientConfig { spacing: 0.5f64 })
            .expect("valid config");
        let out = kernel
            .run_alloc(&[0.0f64, 1.0, 2.0, 3.0])
            .expect("ramp gradient");
        for v in out {
            assert_abs_diff_eq!(v, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn gradient_kernel_contracts_validate_config_and_shapes() {
        assert!(GradientKernel::try_new(GradientConfig { spacing: 0.0f64 }).is_err());
        assert!(GradientKernel::try_new(GradientConfig { spacing: f64::NAN }).is_err());

        let kernel =
            GradientKernel::try_new(GradientConfig { spacing: 1.0f64 }).expect("valid config");
        let mut short = vec![0.0f64; 2];
        let err = kernel
            .run_into(&[1.0f64, 2.0, 3.0], &mut short)
            .expect_err("mismatched output length should error");
        assert!(matches!(err, ExecInvariantViolation::LengthMismatch { .. }));

        let err = kernel
            .run_alloc(&[1.0f64, f64::NAN])
            .expect_err("non-finite input should be rejected");
        assert!(matches!(err, ExecInvariantViolation::NonFiniteSample { .. }));
    }
}
