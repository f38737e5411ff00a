use std::f64::consts::TAU;

use log::warn;

use crate::frame::{FrameState, SectionState};
use crate::tower::{AnimationConfig, ConfigError, Cycle, CycleState, Phase, Section, STUB_HEIGHT};

/// Frequency detune between neighboring sections, so settled
/// sections pulse out of sync with one another.
const PULSE_DETUNE: f32 = 0.15;

/// Maps the driving clock to the construction state of the tower.
///
/// The animator owns one `Cycle` at a time and the sections built
/// during it. Each `advance` call is a pure function of the clock
/// and the configuration apart from the cycle bookkeeping; the
/// caller drives the clock once per rendered frame and hands the
/// returned `FrameState` to whatever sink turns it into pixels.
pub struct ConstructionAnimator {
    config: AnimationConfig,
    cycle: Cycle,
    sections: Vec<Section>,
    last_clock: Option<f64>,
}

impl ConstructionAnimator {
    pub fn new(config: AnimationConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let sections = (0..config.section_count).map(Section::new).collect();
        Ok(Self {
            config,
            cycle: Cycle::new(0.0),
            sections,
            last_clock: None,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn cycle_state(&self) -> CycleState {
        self.cycle.state
    }

    /// Advance to the given clock reading and compute the frame.
    ///
    /// The clock is expected to be non-decreasing; a regression is
    /// tolerated (elapsed time is clamped at zero) but logged, since
    /// it means the caller broke the clock contract.
    pub fn advance(&mut self, clock: f64) -> FrameState {
        match self.last_clock {
            None => {
                // first frame begins the first cycle
                self.cycle = Cycle::new(clock);
            }
            Some(last) if clock < last => {
                warn!("clock regressed from {last:.4} to {clock:.4}");
            }
            Some(_) => {}
        }
        self.last_clock = Some(clock);

        if self.cycle.state == CycleState::Resetting {
            self.cycle = Cycle::new(clock);
            for section in &mut self.sections {
                section.reset();
            }
        }

        let cycle_progress = self.cycle.progress(clock, self.config.cycle_duration);
        let fraction = self.config.construction_fraction;
        self.cycle.state = if cycle_progress < fraction {
            CycleState::Constructing
        } else {
            CycleState::Complete
        };

        self.grow_sections(cycle_progress);

        if cycle_progress > fraction {
            for section in &mut self.sections {
                if section.phase == Phase::Settled {
                    section.phase = Phase::Pulsing;
                }
            }
        }

        if cycle_progress >= 1.0 {
            // final fully-settled frame; the next advance starts over
            self.cycle.state = CycleState::Resetting;
        }

        self.frame_state(clock, cycle_progress)
    }

    /// Activation and growth policy: sections start strictly in index
    /// order, each passing through a fast grow-and-fade-in segment
    /// before settling at full height.
    fn grow_sections(&mut self, cycle_progress: f32) {
        let count = self.config.section_count;
        let construction = cycle_progress / self.config.construction_fraction;
        let active_index = ((construction * count as f32).floor() as usize).min(count - 1);
        let grow_threshold = self.config.grow_threshold;
        for section in &mut self.sections {
            if section.index > active_index {
                section.reset();
                continue;
            }
            let local_progress =
                ((construction - section.index as f32 / count as f32) * count as f32)
                    .clamp(0.0, 1.0);
            if local_progress <= 0.0 {
                section.reset();
            } else if local_progress < grow_threshold {
                let nuance = local_progress / grow_threshold;
                section.height_fraction = lerp(STUB_HEIGHT, 1.0, nuance);
                section.opacity = nuance;
                section.phase = Phase::Growing;
            } else {
                section.height_fraction = 1.0;
                section.opacity = 1.0;
                section.phase = Phase::Settled;
            }
        }
    }

    fn frame_state(&self, clock: f64, cycle_progress: f32) -> FrameState {
        let sections = self
            .sections
            .iter()
            .map(|section| SectionState {
                index: section.index,
                phase: section.phase,
                height_fraction: section.height_fraction,
                opacity: section.opacity,
                pulse_scale: self.pulse_scale(clock, section),
            })
            .collect();
        FrameState {
            clock,
            cycle_state: self.cycle.state,
            cycle_progress,
            sections,
            camera_orbit: (clock * self.config.orbit_speed as f64).rem_euclid(TAU) as f32,
            crane_swing: (clock * self.config.arm_speed as f64).sin() as f32
                * *self.config.arm_amplitude,
        }
    }

    /// Bounded multiplicative pulse on settled sections. The frequency
    /// depends on the section index, which keeps neighbors out of
    /// phase; growth and opacity bookkeeping are untouched.
    fn pulse_scale(&self, clock: f64, section: &Section) -> f32 {
        if !section.is_settled() {
            return 1.0;
        }
        let frequency = self.config.pulse_speed * (1.0 + section.index as f32 * PULSE_DETUNE);
        1.0 + *self.config.pulse_amplitude * (clock * frequency as f64).sin() as f32
    }
}

fn lerp(alpha: f32, omega: f32, nuance: f32) -> f32 {
    alpha + (omega - alpha) * nuance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tower::config::presets::QUICK_LOOP;
    use crate::units::Amplitude;
    use std::f32::consts::TAU;

    fn quick_animator() -> ConstructionAnimator {
        ConstructionAnimator::new(QUICK_LOOP).unwrap()
    }

    #[test]
    fn test_invalid_config_constructs_no_animator() {
        let config = AnimationConfig {
            section_count: 0,
            ..QUICK_LOOP
        };
        assert!(matches!(
            ConstructionAnimator::new(config),
            Err(ConfigError::NoSections)
        ));
    }

    #[test]
    fn test_first_frame_is_all_stubs() {
        let mut animator = quick_animator();
        let frame = animator.advance(0.0);
        assert_eq!(frame.cycle_state, CycleState::Constructing);
        for section in &frame.sections {
            assert_eq!(section.phase, Phase::NotStarted);
            assert_eq!(section.height_fraction, STUB_HEIGHT);
            assert_eq!(section.opacity, 0.0);
        }
        assert_eq!(frame.stage_caption(), "Groundbreaking");
    }

    #[test]
    fn test_quarter_progress_matches_hand_computation() {
        // section_count=4, cycle_duration=4.0, construction_fraction=0.9,
        // grow_threshold=0.7; at clock=1.0, cycle_progress=0.25
        let mut animator = quick_animator();
        animator.advance(0.0);
        let frame = animator.advance(1.0);

        // active index = floor(0.25 / 0.9 * 4) = 1
        let s0 = frame.sections[0];
        assert_eq!(s0.phase, Phase::Settled);
        assert_eq!(s0.height_fraction, 1.0);
        assert_eq!(s0.opacity, 1.0);

        let s1 = frame.sections[1];
        assert_eq!(s1.phase, Phase::Growing);
        let local = (0.25f32 / 0.9 - 0.25) * 4.0;
        let nuance = local / 0.7;
        assert!((s1.height_fraction - (0.1 + 0.9 * nuance)).abs() < 1e-5);
        assert!((s1.opacity - nuance).abs() < 1e-5);

        for s in &frame.sections[2..] {
            assert_eq!(s.phase, Phase::NotStarted);
            assert_eq!(s.height_fraction, STUB_HEIGHT);
            assert_eq!(s.opacity, 0.0);
        }
        assert_eq!(frame.stage_caption(), "Floor 2 of 4");
    }

    #[test]
    fn test_growth_is_monotonic_while_constructing() {
        let mut animator = quick_animator();
        let mut previous: Option<Vec<(f32, f32)>> = None;
        for step in 0..=360 {
            let clock = step as f64 * 0.01; // covers the whole constructing span
            let frame = animator.advance(clock);
            if frame.cycle_state != CycleState::Constructing {
                break;
            }
            let current: Vec<(f32, f32)> = frame
                .sections
                .iter()
                .map(|s| (s.height_fraction, s.opacity))
                .collect();
            if let Some(previous) = previous {
                for (before, after) in previous.iter().zip(&current) {
                    assert!(after.0 >= before.0, "height fraction decreased");
                    assert!(after.1 >= before.1, "opacity decreased");
                }
            }
            previous = Some(current);
        }
    }

    #[test]
    fn test_sections_activate_strictly_in_order() {
        let mut animator = quick_animator();
        for step in 0..400 {
            let frame = animator.advance(step as f64 * 0.01);
            let mut seen_unstarted = false;
            for section in &frame.sections {
                if section.phase == Phase::NotStarted {
                    seen_unstarted = true;
                    assert_eq!(section.opacity, 0.0);
                } else {
                    assert!(!seen_unstarted, "section started out of order");
                }
            }
        }
    }

    #[test]
    fn test_construction_boundary_is_fully_settled() {
        let mut animator = quick_animator();
        animator.advance(0.0);
        // cycle_progress == construction_fraction exactly
        let frame = animator.advance(3.6);
        assert_eq!(frame.cycle_state, CycleState::Complete);
        for section in &frame.sections {
            assert_eq!(section.phase, Phase::Settled);
            assert_eq!(section.height_fraction, 1.0);
            assert_eq!(section.opacity, 1.0);
        }
        assert_eq!(frame.stage_caption(), "Topped out");
    }

    #[test]
    fn test_settled_sections_pulse_within_bounds() {
        let mut animator = quick_animator();
        animator.advance(0.0);
        let frame = animator.advance(3.8); // past the boundary, before the end
        let amplitude = *QUICK_LOOP.pulse_amplitude;
        let mut scales = Vec::new();
        for section in &frame.sections {
            assert_eq!(section.phase, Phase::Pulsing);
            assert_eq!(section.height_fraction, 1.0);
            assert_eq!(section.opacity, 1.0);
            assert!(section.pulse_scale >= 1.0 - amplitude);
            assert!(section.pulse_scale <= 1.0 + amplitude);
            scales.push(section.pulse_scale);
        }
        // detuned frequencies keep neighbors from pulsing in lockstep
        assert!(scales.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_cycle_wraps_to_fresh_state() {
        let mut animator = quick_animator();
        animator.advance(0.0);
        let last = animator.advance(4.0);
        assert_eq!(last.cycle_state, CycleState::Resetting);
        assert_eq!(last.settled_count(), 4);
        assert_eq!(last.stage_caption(), "Site cleared");

        let fresh = animator.advance(4.001);
        assert_eq!(fresh.cycle_state, CycleState::Constructing);
        assert!(fresh.cycle_progress < 0.001);
        for section in &fresh.sections {
            assert_eq!(section.phase, Phase::NotStarted);
            assert_eq!(section.height_fraction, STUB_HEIGHT);
            assert_eq!(section.opacity, 0.0);
        }
    }

    #[test]
    fn test_clock_regression_is_clamped_not_fatal() {
        let mut animator = quick_animator();
        animator.advance(2.0);
        // regressing below the cycle start clamps elapsed time to zero
        let frame = animator.advance(1.0);
        assert_eq!(frame.cycle_progress, 0.0);
        for section in &frame.sections {
            assert!(section.height_fraction >= STUB_HEIGHT);
            assert!(section.height_fraction <= 1.0);
            assert!((0.0..=1.0).contains(&section.opacity));
        }
    }

    #[test]
    fn test_camera_orbit_wraps_and_arm_swings() {
        let mut animator = ConstructionAnimator::new(AnimationConfig {
            pulse_amplitude: Amplitude(0.0),
            ..QUICK_LOOP
        })
        .unwrap();
        animator.advance(0.0);
        let frame = animator.advance(1000.0);
        assert!(frame.camera_orbit >= 0.0);
        assert!(frame.camera_orbit < TAU);
        assert!(frame.crane_swing.abs() <= *QUICK_LOOP.arm_amplitude);
    }
}
