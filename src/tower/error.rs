use std::fmt;

/// Configuration errors raised when an animator is constructed
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tower must have at least one section
    NoSections,
    /// The cycle duration must be strictly positive
    NonPositiveDuration(f32),
    /// The construction fraction must lie strictly between 0 and 1
    ConstructionFractionOutOfRange(f32),
    /// The grow threshold must lie strictly between 0 and 1
    GrowThresholdOutOfRange(f32),
    /// The pulse amplitude must not exceed the bounded maximum
    PulseAmplitudeExcessive(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoSections => write!(f, "Tower needs at least one section"),
            ConfigError::NonPositiveDuration(duration) => {
                write!(f, "Cycle duration must be positive, got {duration}")
            }
            ConfigError::ConstructionFractionOutOfRange(fraction) => {
                write!(f, "Construction fraction must be in (0,1), got {fraction}")
            }
            ConfigError::GrowThresholdOutOfRange(threshold) => {
                write!(f, "Grow threshold must be in (0,1), got {threshold}")
            }
            ConfigError::PulseAmplitudeExcessive(amplitude) => {
                write!(f, "Pulse amplitude too large: {amplitude}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
