mod dispatch;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use dispatch::Command;

#[derive(Parser, Debug)]
#[command(
    about = "Apply pixel filters to image files",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Operation followed by its arguments, e.g. `invert in.png out.png`.
    /// An unrecognised operation name is treated as `blur <input> <output>`.
    #[arg(
        required = true,
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

fn main() -> Result<()> {
    logger::init();

    let cli = Cli::parse();
    let command = Command::parse(cli.args.as_slice())?;
    log::debug!("{command:?}");

    command
        .run()
        .with_context(|| format!("{} failed", command.name()))
}
