/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fmt::{Display, Formatter, Result};

use super::usd::Color3;

pub struct Material {
    pub name: String,
    pub diffuse_color: Color3,
    pub roughness: f32,
    pub metallic: f32,
    pub opacity: Option<f32>,
}

impl Material {
    pub fn new(name: &str, diffuse_color: Color3) -> Self {
        Self {
            name: name.to_string(),
            diffuse_color,
            roughness: 0.5,
            metallic: 0.0,
            opacity: None,
        }
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn concrete() -> Self {
        Self::new("ConcreteMaterial", Color3::new(0.75, 0.74, 0.71)).with_roughness(0.8)
    }

    pub fn glass() -> Self {
        Self::new("GlassMaterial", Color3::new(0.35, 0.5, 0.65))
            .with_roughness(0.15)
            .with_metallic(0.2)
            .with_opacity(0.6)
    }

    pub fn crane_steel() -> Self {
        Self::new("CraneMaterial", Color3::new(0.95, 0.45, 0.09))
            .with_roughness(0.4)
            .with_metallic(0.8)
    }

    pub fn ground() -> Self {
        Self::new("GroundMaterial", Color3::new(0.25, 0.24, 0.22)).with_roughness(0.9)
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "    def Material \"{}\"", self.name)?;
        writeln!(f, "    {{")?;
        writeln!(
            f,
            "        token outputs:surface.connect = </Materials/{}/Shader.outputs:surface>",
            self.name
        )?;
        writeln!(f, "        def Shader \"Shader\"")?;
        writeln!(f, "        {{")?;
        writeln!(f, "            uniform token info:id = \"UsdPreviewSurface\"")?;
        writeln!(f, "            color3f inputs:diffuseColor = {}", self.diffuse_color)?;
        writeln!(f, "            float inputs:roughness = {:.2}", self.roughness)?;
        writeln!(f, "            float inputs:metallic = {:.2}", self.metallic)?;
        if let Some(opacity) = self.opacity {
            writeln!(f, "            float inputs:opacity = {opacity:.2}")?;
        }
        writeln!(f, "            token outputs:surface")?;
        writeln!(f, "        }}")?;
        writeln!(f, "    }}")?;
        Ok(())
    }
}

pub struct MaterialScope {
    pub materials: Vec<Material>,
}

impl MaterialScope {
    pub fn new() -> Self {
        Self { materials: Vec::new() }
    }

    pub fn add(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    pub fn tower_defaults() -> Self {
        Self::new()
            .add(Material::ground())
            .add(Material::concrete())
            .add(Material::glass())
            .add(Material::crane_steel())
    }
}

impl Default for MaterialScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for MaterialScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "def Scope \"Materials\"")?;
        writeln!(f, "{{")?;
        for material in &self.materials {
            write!(f, "{material}")?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
