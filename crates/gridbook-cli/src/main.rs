//! Gridbook CLI - tabular data cleanup and summary tool
//!
//! Stands in for the editor surface: loads a CSV into the grid, runs one
//! engine operation, and writes the result back out (or prints it).

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gridbook::prelude::*;
use gridbook::column_letter;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridbook")]
#[command(author, version, about = "Tabular data cleanup and summary tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the grid's shape and how many cells are filled
    Info {
        /// Input CSV file
        input: PathBuf,
    },

    /// Compute an aggregate over a column range
    Calc {
        /// Input CSV file
        input: PathBuf,

        /// Aggregate function
        func: CalcFunc,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Apply a text cleanup to a column range
    Clean {
        /// Input CSV file
        input: PathBuf,

        /// Cleanup operation
        op: CleanOp,

        #[command(flatten)]
        range: RangeArgs,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace a literal string throughout a column range
    Replace {
        /// Input CSV file
        input: PathBuf,

        /// Text to find (literal, not a pattern)
        #[arg(short, long)]
        find: String,

        /// Replacement text (may be empty)
        #[arg(short, long, default_value = "")]
        replace: String,

        #[command(flatten)]
        range: RangeArgs,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the label/value series a chart would plot
    Chart {
        /// Input CSV file
        input: PathBuf,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Add or remove a trailing row or column
    Resize {
        /// Input CSV file
        input: PathBuf,

        /// Structural operation
        op: ResizeOp,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Column + row-bounds selection flags shared by the range commands
#[derive(Args)]
struct RangeArgs {
    /// Column letter (A-Z, case-insensitive)
    #[arg(short, long)]
    column: String,

    /// First row (1-based, inclusive)
    #[arg(short = 's', long)]
    start: u32,

    /// Last row (1-based, inclusive)
    #[arg(short = 'e', long)]
    end: u32,
}

impl RangeArgs {
    fn to_range(&self) -> RangeRef {
        RangeRef::new(self.column.as_str(), self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CalcFunc {
    Sum,
    Average,
    Max,
    Min,
    Count,
}

impl From<CalcFunc> for AggregateKind {
    fn from(func: CalcFunc) -> Self {
        match func {
            CalcFunc::Sum => AggregateKind::Sum,
            CalcFunc::Average => AggregateKind::Average,
            CalcFunc::Max => AggregateKind::Max,
            CalcFunc::Min => AggregateKind::Min,
            CalcFunc::Count => AggregateKind::Count,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CleanOp {
    Trim,
    Upper,
    Lower,
    Dedupe,
}

impl From<CleanOp> for TransformKind {
    fn from(op: CleanOp) -> Self {
        match op {
            CleanOp::Trim => TransformKind::Trim,
            CleanOp::Upper => TransformKind::Uppercase,
            CleanOp::Lower => TransformKind::Lowercase,
            CleanOp::Dedupe => TransformKind::RemoveDuplicates,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResizeOp {
    AddRow,
    DeleteRow,
    AddColumn,
    DeleteColumn,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => info(&input),
        Commands::Calc { input, func, range } => calc(&input, func, &range.to_range()),
        Commands::Clean {
            input,
            op,
            range,
            output,
        } => clean(&input, op, &range.to_range(), output.as_deref()),
        Commands::Replace {
            input,
            find,
            replace,
            range,
            output,
        } => replace_cmd(&input, &find, &replace, &range.to_range(), output.as_deref()),
        Commands::Chart { input, range } => chart(&input, &range.to_range()),
        Commands::Resize { input, op, output } => resize(&input, op, output.as_deref()),
    }
}

/// Notifier that plays the toast role on stderr
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Info => eprintln!("{}", notification),
            Severity::Error => eprintln!("error: {}", notification),
        }
    }
}

/// Surface an engine failure the way the editor would: as its notification
fn engine<T>(result: gridbook::Result<T>) -> Result<T> {
    result.map_err(|err| anyhow::anyhow!("{}", Notification::from_error(&err)))
}

fn load_grid(path: &Path) -> Result<Grid> {
    let payload = CsvReader::read_file(path, &CsvReadOptions::default())
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    engine(grid_from_payload(&payload))
}

fn save_grid(grid: &Grid, output: Option<&Path>) -> Result<()> {
    let payload = payload_from_grid(grid);

    match output {
        Some(path) => {
            CsvWriter::write_file(&payload, path, &CsvWriteOptions::default())
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} rows to '{}'", grid.row_count(), path.display());
        }
        None => {
            CsvWriter::write(&payload, io::stdout(), &CsvWriteOptions::default())
                .context("Failed to write CSV to stdout")?;
        }
    }

    Ok(())
}

fn info(input: &Path) -> Result<()> {
    let grid = load_grid(input)?;

    let filled: usize = grid
        .rows()
        .map(|row| row.iter().filter(|cell| !cell.is_empty()).count())
        .sum();
    let last_col = column_letter(grid.col_count() - 1).unwrap_or('?');

    println!("Rows:    {}", grid.row_count());
    println!("Columns: {} (A-{})", grid.col_count(), last_col);
    println!(
        "Filled:  {} of {} cells",
        filled,
        grid.row_count() * grid.col_count()
    );

    Ok(())
}

fn calc(input: &Path, func: CalcFunc, range: &RangeRef) -> Result<()> {
    let grid = load_grid(input)?;
    let kind = AggregateKind::from(func);

    let outcome = engine(aggregate(&grid, range, kind))?;
    println!("{} = {}", kind, outcome);

    Ok(())
}

fn clean(input: &Path, op: CleanOp, range: &RangeRef, output: Option<&Path>) -> Result<()> {
    let mut grid = load_grid(input)?;
    let kind = TransformKind::from(op);

    engine(transform(&mut grid, range, kind))?;
    StderrNotifier.notify(Notification::success(
        "Operation completed",
        format!("{} operation applied successfully", kind),
    ));

    save_grid(&grid, output)
}

fn replace_cmd(
    input: &Path,
    find: &str,
    replace: &str,
    range: &RangeRef,
    output: Option<&Path>,
) -> Result<()> {
    let mut grid = load_grid(input)?;

    let count = engine(find_replace(&mut grid, range, find, replace))?;
    StderrNotifier.notify(Notification::success(
        "Find and replace completed",
        format!("{} replacements made", count),
    ));

    save_grid(&grid, output)
}

fn chart(input: &Path, range: &RangeRef) -> Result<()> {
    let grid = load_grid(input)?;

    match engine(ChartSeries::from_range(&grid, range))? {
        Some(series) => {
            for (label, value) in series.labels.iter().zip(&series.values) {
                println!("{}\t{}", label, value);
            }
        }
        None => StderrNotifier.notify(Notification::error(
            "No numeric values found",
            "Please select cells with numeric values",
        )),
    }

    Ok(())
}

fn resize(input: &Path, op: ResizeOp, output: Option<&Path>) -> Result<()> {
    let mut grid = load_grid(input)?;

    match op {
        ResizeOp::AddRow => grid.add_row(),
        ResizeOp::DeleteRow => engine(grid.delete_row())?,
        ResizeOp::AddColumn => engine(grid.add_column())?,
        ResizeOp::DeleteColumn => engine(grid.delete_column())?,
    }

    save_grid(&grid, output)
}
