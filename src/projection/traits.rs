//! Trait interfaces for projection-analysis capabilities.
//!
//! These traits define the trait-first API shape shared by the checked
//! kernels: `run_into` writes into a caller-provided buffer after shape
//! validation, `run_alloc` allocates the output.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// 1D finite-difference gradient capability.
pub trait Gradient1D<T> {
    /// Run gradient estimation into a caller-provided output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Run gradient estimation and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;
}

/// 1D magnitude-spectrum capability.
pub trait MagnitudeSpectrum1D<T> {
    /// Run the transform into a caller-provided output buffer.
    ///
    /// The required output length is half the padded transform length.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Run the transform and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;
}

/// Spectrum-bin ranking capability.
#[cfg(feature = "alloc")]
pub trait PeakRank1D {
    /// Ranked output produced by the kernel.
    type Output;

    /// Rank into a caller-provided output value.
    fn run_into<I>(&self, spectrum: &I, out: &mut Self::Output) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized;

    /// Rank and allocate the output.
    fn run_alloc<I>(&self, spectrum: &I) -> Result<Self::Output, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized;
}

/// Spectrum-bin ranking capability in no-alloc mode.
#[cfg(not(feature = "alloc"))]
pub trait PeakRank1D {}

/// End-to-end periodicity-detection capability.
#[cfg(feature = "alloc")]
pub trait PeriodicityDetect1D {
    /// Peak list produced by the kernel.
    type Output;

    /// Run the full pipeline into a caller-provided output value.
    fn run_into<I>(&self, profile: &I, out: &mut Self::Output) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized;

    /// Run the full pipeline and allocate the output.
    fn run_alloc<I>(&self, profile: &I) -> Result<Self::Output, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized;
}

/// End-to-end periodicity-detection capability in no-alloc mode.
#[cfg(not(feature = "alloc"))]
pub trait PeriodicityDetect1D {}
