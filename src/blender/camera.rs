/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fmt::{Display, Formatter, Result};

use glam::Vec3;

use super::usd::{TimeSamples, UsdMatrix};

pub struct CameraRig {
    pub name: String,
    pub focal_length: f32,
    pub horizontal_aperture: f32,
    pub vertical_aperture: f32,
    pub clipping_range: (f32, f32),
    pub transforms: TimeSamples<UsdMatrix>,
}

impl CameraRig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            focal_length: 50.0,
            horizontal_aperture: 36.0,
            vertical_aperture: 24.0,
            clipping_range: (0.1, 1000.0),
            transforms: TimeSamples::new(),
        }
    }

    /// Record one orbit frame: the camera at `position` looking at
    /// `target`, expressed as a look-at basis with the camera's
    /// local -Z pointing at the target.
    pub fn add_look_at_frame(&mut self, frame: usize, position: Vec3, target: Vec3) {
        let forward = (target - position).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward).normalize();
        let neg_forward = -forward;

        let matrix = UsdMatrix([
            right.x, right.y, right.z, 0.0,
            up.x, up.y, up.z, 0.0,
            neg_forward.x, neg_forward.y, neg_forward.z, 0.0,
            position.x, position.y, position.z, 1.0,
        ]);

        self.transforms.add(frame, matrix);
    }

    pub fn has_animation(&self) -> bool {
        !self.transforms.is_empty()
    }
}

impl Display for CameraRig {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !self.has_animation() {
            return Ok(());
        }

        writeln!(f, "def Xform \"{}\"", self.name)?;
        writeln!(f, "{{")?;
        writeln!(
            f,
            "    matrix4d xformOp:transform.timeSamples = {}",
            self.transforms.to_usd_string("    ")
        )?;
        writeln!(f, "    uniform token[] xformOpOrder = [\"xformOp:transform\"]")?;
        writeln!(f)?;

        writeln!(f, "    def Camera \"Camera\"")?;
        writeln!(f, "    {{")?;
        writeln!(f, "        float focalLength = {:.1}", self.focal_length)?;
        writeln!(f, "        float horizontalAperture = {:.1}", self.horizontal_aperture)?;
        writeln!(f, "        float verticalAperture = {:.1}", self.vertical_aperture)?;
        writeln!(
            f,
            "        float2 clippingRange = ({:.1}, {:.1})",
            self.clipping_range.0, self.clipping_range.1
        )?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")?;
        Ok(())
    }
}
