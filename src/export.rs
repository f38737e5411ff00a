/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::frame::FrameState;

#[derive(Serialize)]
struct ExportData {
    /// Frames per second for animation playback
    fps: f64,
    /// Name of the tower preset that was animated
    tower: String,
    section_count: usize,
    frames: Vec<FrameExport>,
}

#[derive(Serialize)]
struct FrameExport {
    clock: f64,
    state: String,
    progress: f32,
    stage: String,
    camera_orbit: f32,
    crane_swing: f32,
    sections: Vec<SectionExport>,
}

#[derive(Serialize)]
struct SectionExport {
    index: usize,
    phase: String,
    height_fraction: f32,
    opacity: f32,
    pulse_scale: f32,
}

/// Captures frame states and writes them out as a JSON animation,
/// one record per frame, for playback or analysis elsewhere.
pub struct JsonExporter {
    output_dir: PathBuf,
    fps: f64,
    tower_name: String,
    enabled: bool,
    frames: Vec<FrameState>,
}

impl JsonExporter {
    pub fn new<P: Into<PathBuf>>(output_dir: P, fps: f64, tower_name: &str) -> Self {
        Self {
            output_dir: output_dir.into(),
            fps,
            tower_name: tower_name.to_string(),
            enabled: false,
            frames: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.enabled = true;
        self.frames.clear();
        println!("JSON capture started");
    }

    pub fn capture_frame(&mut self, frame: &FrameState) {
        if self.enabled {
            self.frames.push(frame.clone());
        }
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

        println!("Creating animation JSON with {} frames...", self.frames.len());

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let json_path = self
            .output_dir
            .join(format!("construction_{timestamp}.json"));
        let json = serde_json::to_string_pretty(&self.create_export_data())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        let mut file = File::create(&json_path)?;
        file.write_all(json.as_bytes())?;

        self.frames.clear();

        println!("Saved: {json_path:?}");
        Ok(())
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn create_export_data(&self) -> ExportData {
        let section_count = self
            .frames
            .first()
            .map(|frame| frame.sections.len())
            .unwrap_or(0);
        ExportData {
            fps: self.fps,
            tower: self.tower_name.clone(),
            section_count,
            frames: self.frames.iter().map(frame_export).collect(),
        }
    }
}

fn frame_export(frame: &FrameState) -> FrameExport {
    FrameExport {
        clock: frame.clock,
        state: frame.cycle_state.to_string(),
        progress: frame.cycle_progress,
        stage: frame.stage_caption(),
        camera_orbit: frame.camera_orbit,
        crane_swing: frame.crane_swing,
        sections: frame
            .sections
            .iter()
            .map(|section| SectionExport {
                index: section.index,
                phase: section.phase.to_string(),
                height_fraction: section.height_fraction,
                opacity: section.opacity,
                pulse_scale: section.pulse_scale,
            })
            .collect(),
    }
}
