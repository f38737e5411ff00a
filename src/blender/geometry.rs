/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fmt::{Display, Formatter, Result};

use glam::{Mat4, Quat, Vec3};

use super::usd::{Opacity, TimeSamples, UsdMatrix};

/// A cube prim with time-sampled transform and opacity.
/// USD's Cube has extent [-1,1], so callers scale by half-dimensions.
pub struct AnimatedBox {
    pub name: String,
    pub material_binding: Option<String>,
    pub transforms: TimeSamples<UsdMatrix>,
    pub opacities: TimeSamples<Opacity>,
}

impl AnimatedBox {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            material_binding: None,
            transforms: TimeSamples::new(),
            opacities: TimeSamples::new(),
        }
    }

    pub fn with_material(mut self, material_path: &str) -> Self {
        self.material_binding = Some(material_path.to_string());
        self
    }

    pub fn add_transform(&mut self, frame: usize, matrix: Mat4) {
        // halve the scale to map full dimensions onto the [-1,1] cube
        let halved = matrix * Mat4::from_scale(Vec3::splat(0.5));
        self.transforms.add(frame, UsdMatrix::from_mat4(halved));
    }

    pub fn add_opacity(&mut self, frame: usize, opacity: f32) {
        self.opacities.add(frame, Opacity(opacity));
    }
}

impl Display for AnimatedBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "        def Cube \"{}\"", self.name)?;
        writeln!(f, "        {{")?;
        writeln!(
            f,
            "            matrix4d xformOp:transform.timeSamples = {}",
            self.transforms
        )?;
        writeln!(f, "            uniform token[] xformOpOrder = [\"xformOp:transform\"]")?;
        if !self.opacities.is_empty() {
            writeln!(
                f,
                "            float[] primvars:displayOpacity.timeSamples = {}",
                self.opacities
            )?;
        }
        if let Some(ref binding) = self.material_binding {
            writeln!(f, "            rel material:binding = <{binding}>")?;
        }
        writeln!(f, "        }}")?;
        Ok(())
    }
}

/// The static crane mast: a cylinder standing on the ground,
/// placed once rather than time-sampled
pub struct Mast {
    pub name: String,
    pub radius: f32,
    pub height: f32,
    pub position: Vec3,
    pub material_binding: Option<String>,
}

impl Mast {
    pub fn new(name: &str, radius: f32, height: f32, position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            radius,
            height,
            position,
            material_binding: None,
        }
    }

    pub fn with_material(mut self, material_path: &str) -> Self {
        self.material_binding = Some(material_path.to_string());
        self
    }

    fn transform(&self) -> UsdMatrix {
        // USD cylinder height is 2, so scale y by half the height
        let scale = Vec3::new(self.radius, self.height / 2.0, self.radius);
        let center = self.position + Vec3::new(0.0, self.height / 2.0, 0.0);
        UsdMatrix::from_mat4(Mat4::from_scale_rotation_translation(
            scale,
            Quat::IDENTITY,
            center,
        ))
    }
}

impl Display for Mast {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "        def Cylinder \"{}\"", self.name)?;
        writeln!(f, "        {{")?;
        writeln!(f, "            matrix4d xformOp:transform = {}", self.transform())?;
        writeln!(f, "            uniform token[] xformOpOrder = [\"xformOp:transform\"]")?;
        if let Some(ref binding) = self.material_binding {
            writeln!(f, "            rel material:binding = <{binding}>")?;
        }
        writeln!(f, "        }}")?;
        Ok(())
    }
}

pub struct GroundPlane {
    pub size: f32,
    pub material_binding: Option<String>,
}

impl GroundPlane {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            material_binding: None,
        }
    }

    pub fn with_material(mut self, material_path: &str) -> Self {
        self.material_binding = Some(material_path.to_string());
        self
    }
}

impl Display for GroundPlane {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let half = self.size / 2.0;
        writeln!(f, "    def Mesh \"Ground\"")?;
        writeln!(f, "    {{")?;
        writeln!(f, "        int[] faceVertexCounts = [4]")?;
        writeln!(f, "        int[] faceVertexIndices = [0, 1, 2, 3]")?;
        writeln!(
            f,
            "        point3f[] points = [({}, 0, {}), ({}, 0, {}), ({}, 0, {}), ({}, 0, {})]",
            -half, -half, half, -half, half, half, -half, half
        )?;
        if let Some(ref binding) = self.material_binding {
            writeln!(f, "        rel material:binding = <{binding}>")?;
        }
        writeln!(f, "    }}")?;
        Ok(())
    }
}

pub struct Environment {
    pub ground: GroundPlane,
}

impl Environment {
    pub fn new(ground_size: f32) -> Self {
        Self {
            ground: GroundPlane::new(ground_size).with_material("/Materials/GroundMaterial"),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "def Xform \"Environment\"")?;
        writeln!(f, "{{")?;
        write!(f, "{}", self.ground)?;
        writeln!(f, "}}")?;
        Ok(())
    }
}
