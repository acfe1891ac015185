use clap::Parser;
use cmds::Cmd;

mod cmds;
mod util;

#[derive(Debug, Parser)]
#[command(name = "tfscript", about = "Developers' utilities for tabulated function arithmetic")]
struct Cli {
    /// Raise the log level (-v: info, -vv: debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: cmds::Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!("{:?}", cli);
    cli.command.run()
}
