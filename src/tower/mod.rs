pub mod config;
pub mod cycle;
pub mod error;
pub mod section;

pub use config::AnimationConfig;
pub use cycle::{Cycle, CycleState};
pub use error::ConfigError;
pub use section::{Phase, Section, STUB_HEIGHT};
