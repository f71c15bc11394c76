//! Argument parsing and the read-render pipeline.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use elastic_table::{Fit, Table, TableStyle};
use tracing::{debug, warn};

/// Render CSV or TSV input as a table that fits the terminal.
///
/// Columns too wide for the terminal wrap onto extra lines, widest first.
#[derive(Debug, Parser)]
#[command(name = "etable", version)]
pub struct Cli {
    /// Input file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Field delimiter: a single character, or `tab`.
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Render into this many columns instead of the terminal width.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Treat the first record as data and number the columns instead.
    #[arg(long)]
    pub no_header: bool,

    /// Border and divider glyphs.
    #[arg(long, value_enum, default_value_t = StyleChoice::Classic)]
    pub style: StyleChoice,

    /// Print the width plan as JSON to stderr.
    #[arg(long)]
    pub plan: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Named [`TableStyle`] presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleChoice {
    /// `|` between columns, `-` and `+` under the header
    Classic,
    /// Whitespace between columns
    Plain,
    /// Box-drawing characters
    Unicode,
}

impl From<StyleChoice> for TableStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Classic => TableStyle::classic(),
            StyleChoice::Plain => TableStyle::plain(),
            StyleChoice::Unicode => TableStyle::unicode(),
        }
    }
}

fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if value.len() == 1 => Ok(value.as_bytes()[0]),
        _ => Err(format!(
            "delimiter must be a single ASCII character or 'tab', got '{}'",
            value
        )),
    }
}

/// Opens the input file, or stdin for `None` and `-`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

/// Reads delimited records into a table.
///
/// Returns `None` when the input has no records at all.
pub fn load_table<R: Read>(cli: &Cli, input: R) -> Result<Option<Table>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(cli.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = reader.records();
    let first = match records.next() {
        Some(record) => record.context("failed to read first record")?,
        None => return Ok(None),
    };

    let mut table = if cli.no_header {
        let header: Vec<String> = (1..=first.len()).map(|n| n.to_string()).collect();
        let mut table = Table::new(header);
        table
            .add_row(first.iter())
            .context("failed to add first record")?;
        table
    } else {
        Table::new(first.iter())
    };

    for record in records {
        let record = record.context("failed to read record")?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        table
            .add_row(record.iter())
            .with_context(|| format!("invalid record on line {}", line))?;
    }

    table = table.style(cli.style.into());
    if let Some(width) = cli.width {
        table = table.width(width);
    }

    debug!(
        columns = table.num_columns(),
        rows = table.num_rows(),
        "loaded table"
    );
    Ok(Some(table))
}

/// Reads `input`, renders the table to `out` and, with `--plan`, the plan as
/// JSON to `diagnostics`.
pub fn run<R: Read, W: Write, D: Write>(
    cli: &Cli,
    input: R,
    out: W,
    mut diagnostics: D,
) -> Result<Option<Fit>> {
    let Some(table) = load_table(cli, input)? else {
        debug!("empty input, nothing to render");
        return Ok(None);
    };

    if cli.plan {
        let plan = table.plan();
        serde_json::to_writer_pretty(&mut diagnostics, &plan).context("failed to write plan")?;
        writeln!(diagnostics)?;
    }

    let fit = table.render(out).context("failed to write table")?;
    if !fit.fits() {
        warn!(
            width = table.available_width(),
            fit = ?fit,
            "table is wider than the available width"
        );
    }
    Ok(Some(fit))
}
