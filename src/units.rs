/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Units for construction animation timing
//!
//! This module provides type-safe wrappers for the quantities that
//! configure an animation, making timing code more intuitive and
//! preventing unit errors.

use std::ops::Deref;

/// Time in seconds, the unit of the driving clock
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Seconds(pub f32);

/// Percentage value (0-100)
/// Provides type-safe conversion to factors (0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(pub f32);

/// Dimensionless scale amplitude for the cosmetic pulse,
/// expressed as a fraction of nominal size
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amplitude(pub f32);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f32);

impl Deref for Seconds {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Percent {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Amplitude {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Radians {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Seconds {
    /// The clock step of one frame at the given frame rate
    pub fn per_frame(frames_per_second: f64) -> Self {
        Self((1.0 / frames_per_second) as f32)
    }
}

impl Percent {
    /// Convert percentage to a factor (0.0-1.0)
    /// Example: 50% → 0.5, 100% → 1.0
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    /// Create from a factor (0.0-1.0)
    /// Example: 0.5 → 50%, 1.0 → 100%
    pub fn from_factor(factor: f32) -> Self {
        Self(factor * 100.0)
    }
}

impl Amplitude {
    pub fn new(amplitude: f32) -> Self {
        Self(amplitude)
    }
}

impl std::fmt::Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}s", self.0)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl std::fmt::Display for Amplitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl std::fmt::Display for Radians {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}rad", self.0)
    }
}
