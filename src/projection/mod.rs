//! Projection-profile periodicity analysis.
//!
//! The pipeline runs profile → gradient → (optional rectification) →
//! magnitude spectrum → ranked peaks. Each stage is exposed on its own so
//! callers can tap intermediate results; the composed detectors
//! ([`detect_periodicity`], [`PeriodicityKernel`]) tie them together.

mod gradient;
#[cfg(feature = "std")]
mod peak;
#[cfg(feature = "std")]
mod periodicity;
#[cfg(feature = "std")]
mod spectrum;
pub mod traits;

pub use gradient::*;
#[cfg(feature = "std")]
pub use peak::*;
#[cfg(feature = "std")]
pub use periodicity::*;
#[cfg(feature = "std")]
pub use spectrum::*;

use crate::kernel::ExecInvariantViolation;
use num_traits::Float;

/// Reject NaN and infinite samples at checked kernel entry points.
pub(crate) fn ensure_finite<F>(
    samples: &[F],
    arg: &'static str,
) -> Result<(), ExecInvariantViolation>
where
    F: Float,
{
    if samples.iter().any(|v| !v.is_finite()) {
        return Err(ExecInvariantViolation::NonFiniteSample { arg });
    }
    Ok(())
}
