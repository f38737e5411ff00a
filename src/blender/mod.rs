/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

mod camera;
mod geometry;
mod light;
mod material;
mod usd;

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use glam::{Mat4, Quat, Vec3};

use crate::frame::FrameState;

use camera::CameraRig;
use geometry::{AnimatedBox, Environment, Mast};
use light::SunLight;
use material::MaterialScope;
use usd::UsdHeader;

const SECTION_HEIGHT: f32 = 4.0;
const FOOTPRINT: f32 = 8.0;
const GROUND_SIZE: f32 = 160.0;
const MAST_RADIUS: f32 = 0.4;
const JIB_THICKNESS: f32 = 0.5;

/// Writes captured frames as a Blender-importable USD animation:
/// one cube per section with time-sampled growth transform and
/// opacity, a crane with a swinging jib, and the orbiting camera.
pub struct UsdExporter {
    output_dir: PathBuf,
    fps: f64,
    enabled: bool,
    frames: Vec<FrameState>,
}

impl UsdExporter {
    pub fn new<P: Into<PathBuf>>(output_dir: P, fps: f64) -> Self {
        Self {
            output_dir: output_dir.into(),
            fps,
            enabled: false,
            frames: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.enabled = true;
        self.frames.clear();
        println!("USD capture started");
    }

    pub fn capture_frame(&mut self, frame: &FrameState) {
        if self.enabled {
            self.frames.push(frame.clone());
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn stop(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.enabled = false;

        if self.frames.is_empty() {
            println!("No frames captured");
            return Ok(());
        }

        println!("Creating USD animation with {} frames...", self.frames.len());

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let usd_path = self.output_dir.join(format!("tower_{timestamp}.usda"));

        let usd_content = self.create_usd();

        let mut file = File::create(&usd_path)?;
        file.write_all(usd_content.as_bytes())?;

        self.frames.clear();

        println!("Saved: {usd_path:?}");
        println!("To use in Blender: File -> Import -> Universal Scene Description");
        Ok(())
    }

    fn create_usd(&self) -> String {
        let mut output = String::new();

        let header = UsdHeader::new("Tower").with_animation(
            0,
            self.frames.len().saturating_sub(1),
            self.fps,
        );
        output.push_str(&header.to_string());
        output.push('\n');

        output.push_str(&Environment::new(GROUND_SIZE).to_string());
        output.push('\n');

        output.push_str(&SunLight::new().to_string());
        output.push('\n');

        output.push_str(&MaterialScope::tower_defaults().to_string());
        output.push('\n');

        let Some(first_frame) = self.frames.first() else {
            return output;
        };
        let section_count = first_frame.sections.len();
        let tower_height = section_count as f32 * SECTION_HEIGHT;

        let mut camera_rig = CameraRig::new("CameraRig");
        let orbit_radius = tower_height * 1.6;
        let camera_height = tower_height * 0.7;
        let target = Vec3::new(0.0, tower_height * 0.45, 0.0);
        for (frame_num, frame) in self.frames.iter().enumerate() {
            let position = frame.camera_position(orbit_radius, camera_height);
            camera_rig.add_look_at_frame(frame_num, position, target);
        }
        output.push_str(&camera_rig.to_string());
        output.push('\n');

        output.push_str("def Xform \"Tower\" (\n");
        output.push_str("    kind = \"component\"\n");
        output.push_str(")\n");
        output.push_str("{\n");
        output.push_str(&self.sections_scope(section_count));
        output.push('\n');
        output.push_str(&self.crane_scope(tower_height));
        output.push_str("}\n");

        output
    }

    fn sections_scope(&self, section_count: usize) -> String {
        let mut output = String::new();
        output.push_str("    def Scope \"Sections\"\n");
        output.push_str("    {\n");

        for section_index in 0..section_count {
            // alternate concrete and glass floors for contrast
            let material = if section_index % 2 == 0 {
                "/Materials/ConcreteMaterial"
            } else {
                "/Materials/GlassMaterial"
            };
            let mut cube = AnimatedBox::new(&format!("Section_{section_index:02}"))
                .with_material(material);

            for (frame_num, frame) in self.frames.iter().enumerate() {
                let section = &frame.sections[section_index];
                cube.add_transform(frame_num, section.transform(FOOTPRINT, SECTION_HEIGHT));
                cube.add_opacity(frame_num, section.opacity);
            }

            output.push_str(&cube.to_string());
        }

        output.push_str("    }\n");
        output
    }

    fn crane_scope(&self, tower_height: f32) -> String {
        let mast_height = tower_height * 1.15;
        let mast_position = Vec3::new(FOOTPRINT * 0.9, 0.0, FOOTPRINT * 0.9);
        let jib_length = FOOTPRINT * 1.4;

        let mut output = String::new();
        output.push_str("    def Scope \"Crane\"\n");
        output.push_str("    {\n");

        let mast = Mast::new("Mast", MAST_RADIUS, mast_height, mast_position)
            .with_material("/Materials/CraneMaterial");
        output.push_str(&mast.to_string());

        let mut jib = AnimatedBox::new("Jib").with_material("/Materials/CraneMaterial");
        let pivot = mast_position + Vec3::new(0.0, mast_height, 0.0);
        for (frame_num, frame) in self.frames.iter().enumerate() {
            // jib extends mostly one way from the mast, like a real
            // tower crane with a short counter-jib
            let arm = Mat4::from_translation(pivot)
                * Mat4::from_rotation_y(frame.crane_swing)
                * Mat4::from_scale_rotation_translation(
                    Vec3::new(jib_length, JIB_THICKNESS, JIB_THICKNESS),
                    Quat::IDENTITY,
                    Vec3::new(jib_length * 0.3, 0.0, 0.0),
                );
            jib.add_transform(frame_num, arm);
        }
        output.push_str(&jib.to_string());

        output.push_str("    }\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::ConstructionAnimator;
    use crate::tower::config::presets::QUICK_LOOP;

    #[test]
    fn test_usd_document_structure() {
        let mut animator = ConstructionAnimator::new(QUICK_LOOP).unwrap();
        let mut exporter = UsdExporter::new("ignored", 30.0);
        exporter.start();
        for step in 0..5 {
            let frame = animator.advance(step as f64 / 30.0);
            exporter.capture_frame(&frame);
        }
        assert_eq!(exporter.frame_count(), 5);

        let usd = exporter.create_usd();
        assert!(usd.starts_with("#usda 1.0"));
        assert!(usd.contains("defaultPrim = \"Tower\""));
        assert!(usd.contains("endTimeCode = 4"));
        assert!(usd.contains("def Cube \"Section_00\""));
        assert!(usd.contains("def Cube \"Section_03\""));
        assert!(usd.contains("primvars:displayOpacity.timeSamples"));
        assert!(usd.contains("def Cylinder \"Mast\""));
        assert!(usd.contains("def Cube \"Jib\""));
        assert!(usd.contains("def Camera \"Camera\""));
        assert!(usd.contains("def DistantLight \"Sun\""));
        assert!(usd.contains("def Material \"GlassMaterial\""));
    }

    #[test]
    fn test_empty_capture_produces_empty_scene_gracefully() {
        let exporter = UsdExporter::new("ignored", 30.0);
        let usd = exporter.create_usd();
        assert!(usd.starts_with("#usda 1.0"));
        assert!(!usd.contains("def Cube"));
    }
}
