use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use polysnakes::{CubeClassifier, SquareClassifier, TurnString};
use tracing_subscriber::EnvFilter;

mod enumerate;
use enumerate::enumerate;

/// A bare line that redraws in place, for the running table row.
fn progress_line() -> ProgressBar {
    let style = ProgressStyle::with_template("{msg}").unwrap();
    ProgressBar::new_spinner().with_style(style)
}

/// Count polycube and polyomino snakes, one size after another.
#[derive(Clone, Parser)]
#[clap(name = "polysnakes")]
pub struct Opts {
    /// The number of cells to start counting at. Values below 3 count from 3.
    pub n: Option<usize>,

    /// Which lattice to grow snakes on.
    #[clap(long, short = 'l', value_enum, default_value = "cube")]
    pub lattice: LatticeOpt,

    /// Stop after this many cells. Runs forever if not given.
    #[clap(long, short = 'u')]
    pub until: Option<usize>,

    /// Refresh the progress line every this many candidate strings.
    #[clap(long, short = 't', default_value_t = 1_000_000)]
    pub tick: u64,

    /// Classify these turn strings instead of enumerating.
    #[clap(long, short = 'c', num_args = 1.., conflicts_with_all = ["n", "until"])]
    pub classify: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LatticeOpt {
    /// Polycubes.
    Cube,
    /// Polyominoes.
    Square,
}

fn classify(lattice: LatticeOpt, strings: &[String]) -> polysnakes::Result<()> {
    for s in strings {
        let turns: TurnString = s.parse()?;
        let outcome = match lattice {
            LatticeOpt::Cube => CubeClassifier::new(turns.0.len())?.classify(turns.as_slice())?,
            LatticeOpt::Square => {
                SquareClassifier::new(turns.0.len())?.classify(turns.as_slice())?
            }
        };
        println!("{s}: {outcome}");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    if !opts.classify.is_empty() {
        if let Err(e) = classify(opts.lattice, &opts.classify) {
            println!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = enumerate(&opts) {
        println!("Error: {e}");
        std::process::exit(1);
    }
}
