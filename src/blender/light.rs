/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fmt::{Display, Formatter, Result};

use super::usd::Color3;

/// Distant light standing in for the sun over the construction site
pub struct SunLight {
    pub angle_degrees: f32,
    pub color: Color3,
    pub intensity: f32,
    pub rotate_xyz: (f32, f32, f32),
}

impl SunLight {
    pub fn new() -> Self {
        Self {
            angle_degrees: 0.53,
            color: Color3::new(1.0, 0.98, 0.95),
            intensity: 5000.0,
            rotate_xyz: (-45.0, 30.0, 0.0),
        }
    }
}

impl Default for SunLight {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SunLight {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (rx, ry, rz) = self.rotate_xyz;
        writeln!(f, "def DistantLight \"Sun\"")?;
        writeln!(f, "{{")?;
        writeln!(f, "    float inputs:angle = {:.2}", self.angle_degrees)?;
        writeln!(f, "    color3f inputs:color = {}", self.color)?;
        writeln!(f, "    float inputs:intensity = {:.1}", self.intensity)?;
        writeln!(f, "    float3 xformOp:rotateXYZ = ({rx:.1}, {ry:.1}, {rz:.1})")?;
        writeln!(f, "    uniform token[] xformOpOrder = [\"xformOp:rotateXYZ\"]")?;
        writeln!(f, "}}")?;
        Ok(())
    }
}
