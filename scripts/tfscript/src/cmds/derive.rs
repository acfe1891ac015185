use std::path::PathBuf;

use tfmath::boundary::PointDto;

use crate::util::io::{load_config, load_function, write_output};

use super::{Cmd, Format, OutputArgs};

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Points file of the function (JSON array of {"x", "y"})
    #[clap(short = 'i', long = "input")]
    pub input: PathBuf,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let config = load_config(self.output.config.as_deref())?;
        let func = load_function(&self.input, &config)?;
        let derived = func.derivative()?;

        let rendered = match self.output.format {
            Format::Json => {
                let points = derived
                    .samples()
                    .iter()
                    .copied()
                    .map(PointDto::from)
                    .collect::<Vec<_>>();
                serde_json::to_string_pretty(&points)?
            }
            Format::Csv => std::iter::once("x,dy".to_owned())
                .chain(derived.samples().iter().map(|s| format!("{},{}", s.x, s.y)))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        write_output(&rendered, self.output.output.as_deref())
    }
}
