/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use crate::tower::error::ConfigError;
use crate::units::{Amplitude, Radians, Seconds};

/// Upper bound on the cosmetic pulse, as a fraction of nominal size
pub const MAX_PULSE_AMPLITUDE: f32 = 0.1;

/// Timing and shape parameters for one construction animation.
/// Invalid values fail validation rather than being silently clamped.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Number of sections the tower is built from
    pub section_count: usize,
    /// Clock budget for one full construction pass
    pub cycle_duration: Seconds,
    /// Fraction of the cycle spent constructing; the remainder is
    /// the completed hold before the reset
    pub construction_fraction: f32,
    /// Portion of a section's local window spent growing before it settles
    pub grow_threshold: f32,
    /// Camera orbit rate in radians per second of clock time
    pub orbit_speed: f32,
    /// Crane jib swing rate in radians per second of clock time
    pub arm_speed: f32,
    /// Peak crane jib deflection
    pub arm_amplitude: Radians,
    /// Size of the settled-section pulse
    pub pulse_amplitude: Amplitude,
    /// Base pulse rate in radians per second, detuned per section
    pub pulse_speed: f32,
}

impl AnimationConfig {
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.section_count == 0 {
            return Err(ConfigError::NoSections);
        }
        if *self.cycle_duration <= 0.0 {
            return Err(ConfigError::NonPositiveDuration(*self.cycle_duration));
        }
        if self.construction_fraction <= 0.0 || self.construction_fraction >= 1.0 {
            return Err(ConfigError::ConstructionFractionOutOfRange(
                self.construction_fraction,
            ));
        }
        if self.grow_threshold <= 0.0 || self.grow_threshold >= 1.0 {
            return Err(ConfigError::GrowThresholdOutOfRange(self.grow_threshold));
        }
        if *self.pulse_amplitude > MAX_PULSE_AMPLITUDE {
            return Err(ConfigError::PulseAmplitudeExcessive(*self.pulse_amplitude));
        }
        Ok(self)
    }
}

pub mod presets {
    use super::AnimationConfig;
    use crate::units::{Amplitude, Radians, Seconds};

    pub const SHOWCASE: AnimationConfig = AnimationConfig {
        section_count: 8,
        cycle_duration: Seconds(12.0),
        construction_fraction: 0.85,
        grow_threshold: 0.7,
        orbit_speed: 0.3,
        arm_speed: 0.9,
        arm_amplitude: Radians(0.4),
        pulse_amplitude: Amplitude(0.04),
        pulse_speed: 2.0,
    };

    pub const QUICK_LOOP: AnimationConfig = AnimationConfig {
        section_count: 4,
        cycle_duration: Seconds(4.0),
        construction_fraction: 0.9,
        grow_threshold: 0.7,
        ..SHOWCASE
    };
}
