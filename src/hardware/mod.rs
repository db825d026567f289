// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware detection and capability profiling
//!
//! Probes produce raw signals, the backend selector picks one compute target,
//! and the summarizer turns it into a loadable-size budget, a speed
//! coefficient and a tier. The result is a [`HardwareProfile`] value owned by
//! the caller.

pub mod backend;
pub mod cpu;
pub mod detector;
pub mod gpu;
pub mod probe;
pub mod summary;
pub mod tier;

pub use backend::*;
pub use cpu::*;
pub use detector::*;
pub use gpu::*;
pub use probe::*;
pub use summary::*;
pub use tier::*;
