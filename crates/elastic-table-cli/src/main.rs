//! `etable`: render CSV or TSV as a table that fits the terminal.
//!
//! ```bash
//! etable data.csv
//! ps aux | tr -s ' ' '\t' | etable -d tab --style plain
//! etable --width 60 --plan data.csv
//! ```

mod cli;
mod logging;

use std::io;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let input = cli::open_input(cli.input.as_deref())?;
    let stdout = io::stdout();
    cli::run(&cli, input, stdout.lock(), io::stderr())?;
    Ok(())
}
