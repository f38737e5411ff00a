use crate::animator::ConstructionAnimator;
use crate::tower::config::presets::SHOWCASE;
use crate::tower::{AnimationConfig, ConfigError};
use crate::units::{Amplitude, Percent, Radians, Seconds};

/// A named, validated animation configuration
#[derive(Debug, Clone)]
pub struct TowerPlan {
    pub name: String,
    pub config: AnimationConfig,
}

impl TowerPlan {
    pub fn animator(&self) -> Result<ConstructionAnimator, ConfigError> {
        ConstructionAnimator::new(self.config.clone())
    }
}

/// Start describing a tower. The builder begins from the showcase
/// defaults, so a plan only has to state what makes it different.
pub fn tower(name: &str) -> TowerBuilder {
    TowerBuilder {
        name: name.to_string(),
        config: SHOWCASE,
    }
}

pub struct TowerBuilder {
    name: String,
    config: AnimationConfig,
}

impl TowerBuilder {
    pub fn sections(mut self, count: usize) -> Self {
        self.config.section_count = count;
        self
    }

    pub fn cycle(mut self, duration: Seconds) -> Self {
        self.config.cycle_duration = duration;
        self
    }

    pub fn construction(mut self, fraction: Percent) -> Self {
        self.config.construction_fraction = fraction.as_factor();
        self
    }

    pub fn grow_threshold(mut self, threshold: Percent) -> Self {
        self.config.grow_threshold = threshold.as_factor();
        self
    }

    pub fn orbit_speed(mut self, radians_per_second: f32) -> Self {
        self.config.orbit_speed = radians_per_second;
        self
    }

    pub fn crane(mut self, arm_speed: f32, amplitude: Radians) -> Self {
        self.config.arm_speed = arm_speed;
        self.config.arm_amplitude = amplitude;
        self
    }

    pub fn pulse(mut self, amplitude: Amplitude, speed: f32) -> Self {
        self.config.pulse_amplitude = amplitude;
        self.config.pulse_speed = speed;
        self
    }

    pub fn build_plan(self) -> Result<TowerPlan, ConfigError> {
        Ok(TowerPlan {
            name: self.name,
            config: self.config.validated()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_validated_plan() {
        let plan = tower("Test Rig")
            .sections(5)
            .cycle(Seconds(6.0))
            .construction(Percent(80.0))
            .grow_threshold(Percent(65.0))
            .orbit_speed(0.5)
            .crane(1.2, Radians(0.3))
            .pulse(Amplitude::new(0.05), 1.5)
            .build_plan()
            .unwrap();
        assert_eq!(plan.name, "Test Rig");
        assert_eq!(plan.config.section_count, 5);
        assert!((plan.config.construction_fraction - 0.8).abs() < 1e-6);
        assert!((plan.config.grow_threshold - 0.65).abs() < 1e-6);
        assert!(plan.animator().is_ok());
    }

    #[test]
    fn test_builder_rejects_bad_fractions() {
        let result = tower("Broken").construction(Percent(100.0)).build_plan();
        assert!(matches!(
            result,
            Err(ConfigError::ConstructionFractionOutOfRange(_))
        ));
    }
}
