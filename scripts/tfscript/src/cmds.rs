pub mod combine;
pub mod derive;
pub mod schema;

use std::path::PathBuf;

use clap::ValueEnum;

// -----------------------------------------------------------------------------
// Cmd
// -----------------------------------------------------------------------------
pub trait Cmd {
    fn run(&self) -> anyhow::Result<()>;
}

// -----------------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Subcommand)]
#[clap(rename_all = "snake_case")]
pub enum Commands {
    /// Combine two functions point-wise over the union of their x-grids
    Combine(combine::Args),
    /// Differentiate a function on its own x-grid
    Derive(derive::Args),
    /// Print JSON schemas of the input formats
    Schema(schema::Args),
}

impl Cmd for Commands {
    fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::Combine(args) => args.run(),
            Commands::Derive(args) => args.run(),
            Commands::Schema(args) => args.run(),
        }
    }
}

// -----------------------------------------------------------------------------
// Format
// -----------------------------------------------------------------------------
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[clap(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Json,
    Csv,
}

// -----------------------------------------------------------------------------
// OutputArgs
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// Engine configuration file (.json, .yaml or .yml). Defaults are used if omitted
    #[clap(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Format of the output
    #[clap(short = 'f', long = "format", value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Output file. Standard output if omitted
    #[clap(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}
