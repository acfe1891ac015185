use clap::ValueEnum;
use schemars::{gen::SchemaSettings, JsonSchema};
use tfmath::{boundary::PointSet, combine::Combined, EngineConfig};

use super::Cmd;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "snake_case")]
pub enum Target {
    Config,
    Points,
    Combined,
}

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Which document to describe
    #[clap(value_enum)]
    pub target: Target,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let schema = match self.target {
            Target::Config => schema_of::<EngineConfig>()?,
            Target::Points => schema_of::<PointSet>()?,
            Target::Combined => schema_of::<Combined>()?,
        };
        println!("{}", schema);
        Ok(())
    }
}

fn schema_of<T: JsonSchema>() -> anyhow::Result<String> {
    let settings = SchemaSettings::draft07().with(|s| {
        s.option_nullable = true;
        s.option_add_null_type = false;
    });
    let gen = settings.into_generator();
    let schema = gen.into_root_schema_for::<T>();
    Ok(serde_json::to_string_pretty(&schema)?)
}
