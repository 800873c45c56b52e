use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use kurbo::Size;
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use fakepath::{Batch, Bounds, CoordinateSampler, Document, Interval, PathComposer};

#[derive(Parser, Debug)]
#[command(name = "fakepath", version, about = "Generate random SVG path test data")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one path per line to a plain text file
    Listing {
        #[command(flatten)]
        opts: GenerateArgs,
        /// Output file
        #[arg(short, long, default_value = "fake-paths.txt")]
        output: PathBuf,
    },
    /// Write the paths as stroked elements of an SVG document
    Svg {
        #[command(flatten)]
        opts: GenerateArgs,
        /// Output file
        #[arg(short, long, default_value = "random_paths.svg")]
        output: PathBuf,
        /// Canvas width
        #[arg(long, default_value_t = 500.0)]
        width: f64,
        /// Canvas height
        #[arg(long, default_value_t = 500.0)]
        height: f64,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of paths
    #[arg(short = 'n', long, default_value_t = Batch::DEFAULT_COUNT)]
    count: usize,
    /// Fewest rounds per path
    #[arg(long, default_value_t = 2)]
    min_rounds: usize,
    /// Most rounds per path
    #[arg(long, default_value_t = 5)]
    max_rounds: usize,
    /// Seed for the rounds counts and stroke colors (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,
    /// Never close paths
    #[arg(long)]
    no_close: bool,
    /// Horizontal coordinate range, as MIN,MAX
    #[arg(long, value_parser = parse_interval, default_value = "0,500")]
    x_range: Interval,
    /// Vertical coordinate range, as MIN,MAX
    #[arg(long, value_parser = parse_interval, default_value = "0,500")]
    y_range: Interval,
}

fn parse_interval(s: &str) -> Result<Interval, String> {
    let (min, max) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{}'", s))?;
    let min: f64 = min.trim().parse().map_err(|e| format!("bad minimum: {}", e))?;
    let max: f64 = max.trim().parse().map_err(|e| format!("bad maximum: {}", e))?;
    if !(min.is_finite() && max.is_finite()) {
        return Err("range ends must be finite".to_string());
    }
    if min > max {
        return Err(format!("minimum {} is greater than maximum {}", min, max));
    }
    Ok(Interval::new(min, max))
}

impl GenerateArgs {
    fn batch(&self) -> Result<Batch> {
        anyhow::ensure!(
            self.min_rounds <= self.max_rounds,
            "--min-rounds {} is greater than --max-rounds {}",
            self.min_rounds,
            self.max_rounds
        );
        let sampler = CoordinateSampler::new(Bounds::new(self.x_range, self.y_range));
        let composer = PathComposer::new()
            .with_sampler(sampler)
            .allow_close(!self.no_close);
        Ok(Batch::new()
            .count(self.count)
            .rounds(self.min_rounds..=self.max_rounds)
            .composer(composer))
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Listing { opts, output } => {
            let mut rng = opts.rng();
            let paths = opts.batch()?.generate(&mut rng);
            fakepath::write_listing(&paths, &output)
                .with_context(|| format!("writing listing to {}", output.display()))?;
        }
        Command::Svg {
            opts,
            output,
            width,
            height,
        } => {
            let mut rng = opts.rng();
            let paths = opts.batch()?.generate(&mut rng);
            let doc = Document::with_random_strokes(&paths, Size::new(width, height), &mut rng);
            doc.save(&output)
                .with_context(|| format!("writing document to {}", output.display()))?;
        }
    }
    info!("done");
    Ok(())
}
