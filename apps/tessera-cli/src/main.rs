use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use glam::Vec2;
use tessera_common::MinMaxInt;
use tessera_gen::{RngConfig, bounded_ints_in, constant, gaussian_floats, uniform_floats};
use tessera_math::{angle_deg, project_point_on_segment};
use tessera_range::{lerp, to_range_map};
use tessera_seq::{SeqExt, as_bracketed_string};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tessera-cli", about = "CLI tool for tessera sequence operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Pull values from a generator
    Sample {
        /// Which stream to draw from
        #[arg(value_enum)]
        stream: StreamKind,
        /// Number of values to pull
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
        /// RNG seed; omit for a non-reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
        /// JSON file holding an RNG config, e.g. {"seed": 42}
        #[arg(long, conflicts_with = "seed")]
        config: Option<PathBuf>,
        /// Lower bound for `ints`, or the value for `constant`
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        min: i32,
        /// Upper bound for `ints`
        #[arg(long, default_value = "100", allow_hyphen_values = true)]
        max: i32,
    },
    /// Split 0..len into near-equal contiguous parts
    Divide {
        /// Number of elements
        #[arg(short, long, default_value = "10")]
        len: usize,
        /// Number of parts
        #[arg(short, long, default_value = "3")]
        parts: usize,
    },
    /// Build an evenly spaced range map and query it
    Range {
        /// Control values, spread over [0, 1)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        values: Vec<f32>,
        /// Positions to query
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        at: Vec<f32>,
    },
    /// Deduplicate words by a derived key and report the extremes
    Distinct {
        /// Words to process
        #[arg(required = true)]
        words: Vec<String>,
        /// Key to deduplicate on
        #[arg(short, long, value_enum, default_value = "length")]
        key: WordKey,
    },
    /// Project a 2D point onto a segment
    Project {
        #[arg(long, num_args = 2, allow_hyphen_values = true, required = true)]
        point: Vec<f32>,
        #[arg(long, num_args = 2, allow_hyphen_values = true, required = true)]
        start: Vec<f32>,
        #[arg(long, num_args = 2, allow_hyphen_values = true, required = true)]
        end: Vec<f32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StreamKind {
    Constant,
    Uniform,
    Gaussian,
    Ints,
}

#[derive(Clone, Copy, ValueEnum)]
enum WordKey {
    Length,
    Initial,
}

fn load_rng_config(seed: Option<u64>, config: Option<&Path>) -> anyhow::Result<RngConfig> {
    match config {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening rng config {}", path.display()))?;
            let config: RngConfig = serde_json::from_reader(file)
                .with_context(|| format!("parsing rng config {}", path.display()))?;
            Ok(config)
        }
        None => Ok(RngConfig { seed }),
    }
}

fn vec2_arg(values: &[f32]) -> Vec2 {
    Vec2::new(values[0], values[1])
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("tessera-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", tessera_common::crate_info());
            println!("gen: {}", tessera_gen::crate_info());
            println!("seq: {}", tessera_seq::crate_info());
            println!("range: {}", tessera_range::crate_info());
            println!("math: {}", tessera_math::crate_info());
        }
        Commands::Sample {
            stream,
            count,
            seed,
            config,
            min,
            max,
        } => {
            let rng_config = load_rng_config(seed, config.as_deref())?;
            if !rng_config.is_reproducible() {
                tracing::info!("no seed given; output is not reproducible");
            }
            let mut rng = rng_config.build();
            let line = match stream {
                StreamKind::Constant => as_bracketed_string(constant(min).take(count)),
                StreamKind::Uniform => as_bracketed_string(uniform_floats(&mut rng).take(count)),
                StreamKind::Gaussian => {
                    as_bracketed_string(gaussian_floats(&mut rng).take(count))
                }
                StreamKind::Ints => {
                    let range = MinMaxInt::new(min, max);
                    as_bracketed_string(bounded_ints_in(&mut rng, range)?.take(count))
                }
            };
            println!("{line}");
        }
        Commands::Divide { len, parts } => {
            let _span = tracing::info_span!("divide", len, parts).entered();
            for part in (0..len).divide(parts)? {
                let index = part.index();
                println!("part {index}: {}", part.as_bracketed_string());
            }
        }
        Commands::Range { values, at } => {
            let map = to_range_map(values, lerp)?;
            tracing::debug!(points = map.len(), "range map built");
            for x in at {
                println!("f({x}) = {}", map.query(x)?);
            }
        }
        Commands::Distinct { words, key } => {
            let key_of = |w: &String| -> String {
                match key {
                    WordKey::Length => w.chars().count().to_string(),
                    WordKey::Initial => w.chars().take(1).flat_map(char::to_lowercase).collect(),
                }
            };
            let unique: Vec<String> = words.iter().cloned().log_each().distinct_by(key_of).collect();
            println!("distinct: {}", as_bracketed_string(&unique));
            let shortest = words.iter().find_min_by(|w| w.chars().count())?;
            let longest = words.iter().find_max_by(|w| w.chars().count())?;
            println!("shortest: {shortest}");
            println!("longest: {longest}");
        }
        Commands::Project { point, start, end } => {
            let (point, start, end) = (vec2_arg(&point), vec2_arg(&start), vec2_arg(&end));
            let projected = project_point_on_segment(point, start, end);
            println!(
                "projection: ({:.3}, {:.3}), heading from start: {:.1} deg",
                projected.x,
                projected.y,
                angle_deg(start, projected)
            );
        }
    }

    Ok(())
}
