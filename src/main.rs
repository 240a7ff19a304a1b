//! Octa Arena CLI
//!
//! Prints arena wall layouts and recorded scene builds.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use octa_arena::layout::{ArenaLayout, ShapeSpec, closing_padding, compute_layout};
use octa_arena::{ArenaConfig, CommandRecorder, build_scene, normalize_angle};

#[derive(Parser)]
#[command(name = "octa-arena")]
#[command(about = "Compute arena perimeter walls and describe the arena scene", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the perimeter wall layout
    Layout {
        /// Arena config file (JSON)
        #[arg(short, long, conflicts_with_all = ["sides", "rect"])]
        config: Option<PathBuf>,

        /// Regular polygon side count
        #[arg(long, requires = "radius", conflicts_with = "rect")]
        sides: Option<u32>,

        /// Center-to-wall-midpoint distance
        #[arg(long, requires = "sides")]
        radius: Option<f32>,

        /// Extra wall length (default: closes seams exactly)
        #[arg(long, requires = "sides")]
        padding: Option<f32>,

        /// Rectangle floor WIDTH DEPTH
        #[arg(long, num_args = 2, value_names = ["WIDTH", "DEPTH"])]
        rect: Option<Vec<f32>>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build the scene against a recording backend and print the commands
    Scene {
        /// Arena config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default arena config
    DefaultConfig,
}

fn load_config(path: Option<PathBuf>) -> Result<ArenaConfig> {
    match path {
        Some(path) => {
            ArenaConfig::load(&path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(ArenaConfig::default()),
    }
}

fn print_table(layout: &ArenaLayout) {
    println!(
        "{:>4} {:>10} {:>10} {:>9} {:>10}",
        "wall", "x", "z", "yaw(deg)", "length"
    );
    for (i, wall) in layout.iter().enumerate() {
        println!(
            "{:>4} {:>10.3} {:>10.3} {:>9.2} {:>10.3}",
            i,
            wall.center_x,
            wall.center_z,
            normalize_angle(wall.yaw).to_degrees(),
            wall.length
        );
    }
    println!(
        "perimeter {:.3}, widest seam {:.4}",
        layout.perimeter(),
        layout.max_seam_gap()
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            config,
            sides,
            radius,
            padding,
            rect,
            json,
        } => {
            let shape = match (sides, radius, rect) {
                (Some(sides), Some(radius), None) => ShapeSpec::regular_polygon(
                    sides,
                    radius,
                    padding.unwrap_or_else(|| closing_padding(sides, radius)),
                ),
                (None, None, Some(rect)) => match rect.as_slice() {
                    [width, depth] => ShapeSpec::rectangle(*width, *depth),
                    _ => bail!("--rect takes exactly WIDTH and DEPTH"),
                },
                _ => load_config(config)?.shape,
            };

            let layout = compute_layout(&shape)?;
            log::info!("{} walls for {:?}", layout.len(), shape);

            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                print_table(&layout);
            }
        }
        Commands::Scene { config } => {
            let config = load_config(config)?;
            let mut recorder = CommandRecorder::new();
            build_scene(&config, &mut recorder)?;
            println!("{}", serde_json::to_string_pretty(recorder.commands())?);
        }
        Commands::DefaultConfig => {
            println!("{}", ArenaConfig::default().to_json_pretty()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_conflicts_with_inline_shape() {
        let polygon = ["octa-arena", "layout", "-c", "a.json", "--sides", "8", "--radius", "50"];
        assert!(Cli::try_parse_from(polygon).is_err());

        let rect = ["octa-arena", "layout", "--config", "a.json", "--rect", "150", "200"];
        assert!(Cli::try_parse_from(rect).is_err());
    }

    #[test]
    fn test_layout_arguments_parse() {
        let cli = Cli::try_parse_from(["octa-arena", "layout", "--config", "a.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Layout { config: Some(_), .. }));

        let cli = Cli::try_parse_from(["octa-arena", "layout", "--rect", "150", "200"]).unwrap();
        match cli.command {
            Commands::Layout { config, rect, .. } => {
                assert!(config.is_none());
                assert_eq!(rect, Some(vec![150.0, 200.0]));
            }
            _ => panic!("expected layout command"),
        }
    }
}
