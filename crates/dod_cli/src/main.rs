//! Command line front-end: build a preset scene, render it, write a PNG.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dod_renderer::{presets, RenderConfig};

/// Built-in scenes.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SceneChoice {
    /// Open-fronted box with colored walls, a ceiling light, a mirror and a glazed ball
    Cornell,
    /// Spheres of each material kind on a ground plane under a sky
    Spheres,
}

/// dod command line interface arguments.
#[derive(Parser, Debug)]
#[clap(author, version, about = "Brute-force Monte Carlo path tracer.")]
struct CliArgs {
    #[clap(long, value_enum, default_value_t = SceneChoice::Cornell)]
    scene: SceneChoice,

    #[clap(long, default_value_t = 256)]
    width: u32,

    #[clap(long, default_value_t = 256)]
    height: u32,

    /// Number of full-image passes
    #[clap(long, default_value_t = 16)]
    spp: u32,

    /// First-bounce stratification columns
    #[clap(long, default_value_t = 2)]
    u_samples: u32,

    /// First-bounce stratification rows
    #[clap(long, default_value_t = 2)]
    v_samples: u32,

    #[clap(long, default_value_t = 5)]
    max_depth: u32,

    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Show flat diffuse colors instead of lighting
    #[clap(long)]
    preview: bool,

    #[clap(short, long, default_value = "image.png")]
    output: PathBuf,

    /// Rewrite the output file after every pass
    #[clap(long)]
    save_every_pass: bool,
}

impl CliArgs {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.spp,
            first_bounce_u_samples: self.u_samples,
            first_bounce_v_samples: self.v_samples,
            max_depth: self.max_depth,
            seed: self.seed,
            preview: self.preview,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();
    let config = args.render_config();
    log::debug!("{config:?}");

    let start = Instant::now();
    let (scene, camera) = match args.scene {
        SceneChoice::Cornell => presets::cornell_box(config.width, config.height),
        SceneChoice::Spheres => presets::sphere_showcase(config.width, config.height),
    };
    log::info!(
        "Scene {:?} built in {:?}: {} spheres, {} triangles, {} emitters",
        args.scene,
        start.elapsed(),
        scene.sphere_count(),
        scene.triangle_count(),
        scene.emitter_count()
    );
    if scene.emitter_count() == 0 {
        log::warn!("Scene has no emitters; only the environment lights it");
    }

    let output = scene.render(&camera, &config, |image| {
        if args.save_every_pass {
            if let Err(err) = image.save_png(&args.output) {
                log::warn!("Could not write intermediate image: {err}");
            }
        }
    });

    output
        .save_png(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    log::info!("Finished in {:?}", start.elapsed());

    Ok(())
}
