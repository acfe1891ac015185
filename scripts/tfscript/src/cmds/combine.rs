use std::path::PathBuf;

use tfmath::{
    boundary::to_point_dtos,
    combine::{BinaryOp, Combined, Combiner},
};

use crate::util::io::{load_config, load_function, write_output};

use super::{Cmd, Format, OutputArgs};

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Points file of the left operand (JSON array of {"x", "y"})
    #[clap(short = 'a', long = "lhs")]
    pub lhs: PathBuf,

    /// Points file of the right operand (JSON array of {"x", "y"})
    #[clap(short = 'b', long = "rhs")]
    pub rhs: PathBuf,

    /// Operator: add, subtract, multiply or divide
    #[clap(long = "op")]
    pub op: BinaryOp,

    /// Emit only the resulting (x, y) points instead of the full trace
    #[clap(long = "points-only")]
    pub points_only: bool,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let config = load_config(self.output.config.as_deref())?;
        let lhs = load_function(&self.lhs, &config)?;
        let rhs = load_function(&self.rhs, &config)?;

        let combined = Combiner::new(config).combine(&lhs, &rhs, self.op)?;
        log::info!(
            "Combined {} with {} into {} samples",
            self.lhs.display(),
            self.rhs.display(),
            combined.len()
        );

        let rendered = match self.output.format {
            Format::Json if self.points_only => {
                serde_json::to_string_pretty(&to_point_dtos(&combined))?
            }
            Format::Json => serde_json::to_string_pretty(&combined)?,
            Format::Csv => render_csv(&combined, self.points_only),
        };
        write_output(&rendered, self.output.output.as_deref())
    }
}

fn render_csv(combined: &Combined, points_only: bool) -> String {
    let mut lines = Vec::with_capacity(combined.len() + 1);
    if points_only {
        lines.push("x,y".to_owned());
        lines.extend(combined.points().map(|s| format!("{},{}", s.x, s.y)));
    } else {
        lines.push("x,y,y_a,y_b".to_owned());
        lines.extend(
            combined
                .samples()
                .iter()
                .map(|s| format!("{},{},{},{}", s.x, s.y, s.y_a, s.y_b)),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use tfmath::{combine::combine, sampled::SampledFunction, EngineConfig};

    use super::*;

    #[test]
    fn test_render_csv() {
        let config = EngineConfig::default();
        let a = SampledFunction::new([(0.0, 0.0), (2.0, 4.0)], &config).unwrap();
        let b = SampledFunction::new([(1.0, 1.0)], &config).unwrap();
        let combined = combine(&a, &b, BinaryOp::Subtract).unwrap();

        assert_eq!(
            render_csv(&combined, false),
            "x,y,y_a,y_b\n0,-1,0,1\n1,1,2,1\n2,3,4,1"
        );
        assert_eq!(render_csv(&combined, true), "x,y\n0,-1\n1,1\n2,3");
    }
}
