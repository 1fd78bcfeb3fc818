//! Periodic-structure detection for one-dimensional projection profiles.
//!
//! A projection profile is a 1-D sequence obtained by summing image pixel
//! intensities along one axis. Regular structures in the image (halftone
//! grids, scan-line artifacts, repeating print patterns) show up as periodic
//! components of that profile. This crate extracts them: it estimates the
//! profile's first derivative with mixed finite differences, pads to a
//! power-of-two length, runs an in-place radix-2 transform, reduces the
//! result to a magnitude spectrum, and ranks the dominant non-DC bins as
//! frequency/wavelength/magnitude peaks.
//!
//! Every stage is a stateless pure function over its own buffers, so
//! independent profiles (for example the horizontal and vertical projections
//! of the same image) can be analyzed concurrently without synchronization.
//!
//! Two API layers are provided, mirrored across all stages:
//!
//! - free functions ([`projection::gradient`], [`projection::magnitude_spectrum`],
//!   [`projection::top_peaks`], [`projection::detect_periodicity`]) with
//!   defensive empty-input behavior and no error signaling, and
//! - trait-first kernels ([`projection::SpectrumKernel`],
//!   [`projection::PeakRankKernel`], [`projection::PeriodicityKernel`]) that
//!   validate configuration at construction and check buffer shapes and
//!   sample finiteness at every entry point.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod kernel;
pub mod projection;
