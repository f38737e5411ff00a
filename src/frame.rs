use glam::{Mat4, Quat, Vec3};

use crate::tower::{CycleState, Phase};

/// Render state of one section for one frame: everything a sink
/// needs to place, scale, fade, and pulse the section's geometry.
#[derive(Debug, Clone, Copy)]
pub struct SectionState {
    pub index: usize,
    pub phase: Phase,
    pub height_fraction: f32,
    pub opacity: f32,
    pub pulse_scale: f32,
}

impl SectionState {
    /// Altitude of the section's slot floor, derived from its index
    pub fn base_offset(&self, section_height: f32) -> f32 {
        self.index as f32 * section_height
    }

    /// Local transform for a unit cube growing upward out of its
    /// slot floor, with the pulse applied as a uniform scale.
    pub fn transform(&self, footprint: f32, section_height: f32) -> Mat4 {
        let height = self.height_fraction * section_height;
        let scale = Vec3::new(footprint, height, footprint) * self.pulse_scale;
        let center = Vec3::new(0.0, self.base_offset(section_height) + height / 2.0, 0.0);
        Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, center)
    }
}

/// The renderer-agnostic snapshot computed by one `advance` call
#[derive(Debug, Clone)]
pub struct FrameState {
    pub clock: f64,
    pub cycle_state: CycleState,
    pub cycle_progress: f32,
    pub sections: Vec<SectionState>,
    /// Camera orbit angle in radians, wrapped to [0, 2π)
    pub camera_orbit: f32,
    /// Crane jib swing angle in radians
    pub crane_swing: f32,
}

impl FrameState {
    pub fn settled_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|section| matches!(section.phase, Phase::Settled | Phase::Pulsing))
            .count()
    }

    /// Camera position on the orbit circle around the tower axis
    pub fn camera_position(&self, radius: f32, height: f32) -> Vec3 {
        Vec3::new(
            radius * self.camera_orbit.cos(),
            height,
            radius * self.camera_orbit.sin(),
        )
    }

    /// Human-readable construction stage, for HUD overlays
    pub fn stage_caption(&self) -> String {
        match self.cycle_state {
            CycleState::Resetting => "Site cleared".to_string(),
            CycleState::Complete => "Topped out".to_string(),
            CycleState::Constructing => {
                let growing = self
                    .sections
                    .iter()
                    .rev()
                    .find(|section| section.phase != Phase::NotStarted);
                match growing {
                    None => "Groundbreaking".to_string(),
                    Some(section) => {
                        format!("Floor {} of {}", section.index + 1, self.sections.len())
                    }
                }
            }
        }
    }
}
