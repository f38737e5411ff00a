use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use strum::IntoEnumIterator;

use construction_lab::blender::UsdExporter;
use construction_lab::export::JsonExporter;
use construction_lab::library::{get_tower_plan, TowerName};
use construction_lab::tower::CycleState;
use construction_lab::units::Seconds;
use construction_lab::Clock;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the tower preset to animate
    #[arg(long, default_value = "BurjKhalifa")]
    tower: String,

    /// List the available tower presets and exit
    #[arg(long)]
    list: bool,

    /// Number of frames to drive
    #[arg(long, default_value_t = 600)]
    frames: usize,

    /// Clock frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Directory to write a JSON animation capture into
    #[arg(long)]
    json: Option<PathBuf>,

    /// Directory to write a Blender-importable USD animation into
    #[arg(long)]
    usd: Option<PathBuf>,

    /// Pace the clock in real time instead of running flat out
    #[arg(long)]
    realtime: bool,
}

fn main() {
    env_logger::init();
    if let Err(error) = run(Args::parse()) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.list {
        for name in TowerName::iter() {
            let plan = get_tower_plan(name);
            println!(
                "{name}: \"{}\", {} sections over {}",
                plan.name, plan.config.section_count, plan.config.cycle_duration
            );
        }
        return Ok(());
    }

    let tower_name = TowerName::from_str(&args.tower)
        .map_err(|_| format!("Unknown tower {:?}, try --list", args.tower))?;
    let plan = get_tower_plan(tower_name);
    let mut animator = plan.animator()?;

    let mut json_exporter = args.json.map(|dir| {
        let mut exporter = JsonExporter::new(dir, args.fps, &plan.name);
        exporter.start();
        exporter
    });
    let mut usd_exporter = args.usd.map(|dir| {
        let mut exporter = UsdExporter::new(dir, args.fps);
        exporter.start();
        exporter
    });

    println!(
        "Animating \"{}\" for {} frames at {} fps",
        plan.name, args.frames, args.fps
    );

    let dt = Seconds::per_frame(args.fps);
    let mut clock = Clock::default();
    let mut caption = String::new();
    let mut cycles_completed = 0;
    let started = instant::Instant::now();

    for _ in 0..args.frames {
        let frame = animator.advance(clock.tick(dt));
        if frame.cycle_state == CycleState::Resetting {
            cycles_completed += 1;
        }
        let stage = frame.stage_caption();
        if stage != caption {
            println!("{clock} {stage}");
            caption = stage;
        }
        if let Some(exporter) = &mut json_exporter {
            exporter.capture_frame(&frame);
        }
        if let Some(exporter) = &mut usd_exporter {
            exporter.capture_frame(&frame);
        }
        if args.realtime {
            let target = std::time::Duration::from_secs_f64(clock.seconds());
            let elapsed = started.elapsed();
            if elapsed < target {
                std::thread::sleep(target - elapsed);
            }
        }
    }

    if let Some(exporter) = &mut json_exporter {
        exporter.stop()?;
    }
    if let Some(exporter) = &mut usd_exporter {
        exporter.stop()?;
    }

    println!(
        "Drove {} frames to {clock} in {:.1}s wall time, {} cycles completed",
        args.frames,
        started.elapsed().as_secs_f64(),
        cycles_completed
    );
    Ok(())
}
