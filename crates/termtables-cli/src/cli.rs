//! Argument parsing and the CSV → table pipeline.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use termtables::{Align, Config, Table};

/// Print CSV as a bordered table.
#[derive(Debug, Parser)]
#[command(name = "termtables", version, about)]
pub struct Args {
    /// CSV file to read. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Title shown centered above the table.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Treat the first record as data rather than headers.
    #[arg(long)]
    pub no_headers: bool,

    /// Draw with UTF-8 box-drawing characters.
    #[arg(long, conflicts_with = "ascii")]
    pub utf8: bool,

    /// Draw with ASCII characters.
    #[arg(long)]
    pub ascii: bool,

    /// Use UTF-8 glyphs when the locale's charmap is UTF-8.
    #[arg(long)]
    pub locale: bool,

    /// Omit the top and bottom borders.
    #[arg(long)]
    pub no_border: bool,

    /// Column alignment as COLUMN=ALIGN, 1-based (e.g. `2=right`).
    #[arg(short, long, value_name = "COLUMN=ALIGN")]
    pub align: Vec<String>,

    /// Field delimiter.
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// YAML file with `utf8` and `max_columns` settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Resolves the table config: probe, then config file, then flags.
pub fn build_config(args: &Args) -> Result<Config> {
    let mut config = Config::detect();

    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let file = Config::from_yaml(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded {:?} from {}", file, path.display());
        config = file;
    }

    if args.locale {
        config = config.with_locale_utf8();
    }
    if args.utf8 {
        config.utf8 = true;
    }
    if args.ascii {
        config.utf8 = false;
    }
    Ok(config)
}

/// Parses `COLUMN=ALIGN` with a 1-based column into a 0-based column.
pub fn parse_align_arg(arg: &str) -> Result<(usize, Align)> {
    let Some((column, align)) = arg.split_once('=') else {
        bail!("alignment '{}' is not of the form COLUMN=ALIGN", arg);
    };
    let column: usize = column
        .trim()
        .parse()
        .with_context(|| format!("column '{}' is not a number", column))?;
    if column == 0 {
        bail!("columns are numbered from 1");
    }
    let align: Align = align.parse()?;
    Ok((column - 1, align))
}

/// Builds the table from CSV read from `input`.
pub fn build_table<R: Read>(args: &Args, config: Config, input: R) -> Result<Table> {
    let delimiter = u8::try_from(args.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter '{}' must be a single ASCII character", args.delimiter))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(!args.no_headers)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(input);

    let mut table = Table::with_config(config);
    if args.no_border {
        table.skip_border(true);
    }
    if let Some(title) = &args.title {
        table.add_title(title.as_str());
    }
    for arg in &args.align {
        let (column, align) = parse_align_arg(arg)?;
        table.set_align(align, column);
    }

    if !args.no_headers {
        let headers = reader.headers().context("reading CSV headers")?;
        table.add_headers(headers.iter());
    }

    let mut count = 0usize;
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading CSV record {}", line + 1))?;
        table.add_row(record.iter());
        count += 1;
    }
    log::debug!("read {} record(s)", count);

    Ok(table)
}

/// Runs the whole pipeline and returns the rendered table.
pub fn run(args: &Args) -> Result<String> {
    let config = build_config(args)?;

    let table = match &args.file {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            build_table(args, config, file)?
        }
        _ => build_table(args, config, io::stdin().lock())?,
    };

    let width = table.width();
    if width > table.config().max_columns {
        log::warn!(
            "table is {} columns wide but the terminal has {}",
            width,
            table.config().max_columns
        );
    }

    Ok(table.render())
}
