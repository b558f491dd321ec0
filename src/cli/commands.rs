use crate::console::{CommandExecutor, ConsoleConfig, ConsoleExecutor, DispatchSummary, Dispatcher};
use crate::core::{effective_kinds, AttributeFlattener, DateParser};
use crate::error::ImportResult;
use crate::excel::{EntityMapper, Workbook};
use crate::types::{EntityCollection, Selection};
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How the mapped entity data is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    #[default]
    Yaml,
    Json,
    /// Skip the dump
    #[value(name = "none")]
    Off,
}

/// Everything one import run needs, fixed before the run starts
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub workbook: PathBuf,
    pub selection: Selection,
    pub dry_run: bool,
    pub dump_format: DumpFormat,
    pub console: ConsoleConfig,
}

impl ImportOptions {
    pub fn new(workbook: impl Into<PathBuf>) -> Self {
        Self {
            workbook: workbook.into(),
            selection: Selection::default(),
            dry_run: false,
            dump_format: DumpFormat::default(),
            console: ConsoleConfig::default(),
        }
    }
}

/// Execute the import command against the real console
pub fn import(options: ImportOptions) -> ImportResult<DispatchSummary> {
    let mut executor = ConsoleExecutor::new(options.console.clone());
    let dates = DateParser::now()?;
    let stdout = io::stdout();
    run_import(&options, dates, &mut executor, stdout.lock())
}

/// Import pipeline: read → map → dump → select → dispatch
pub fn run_import<E: CommandExecutor, W: Write>(
    options: &ImportOptions,
    dates: DateParser,
    executor: &mut E,
    mut out: W,
) -> ImportResult<DispatchSummary> {
    writeln!(out, "{}", "📥 OTRS Import".bold().green())?;
    writeln!(out, "   Workbook: {}", options.workbook.display())?;
    writeln!(out, "   Console:  {}", options.console.program_line())?;
    writeln!(out)?;
    if options.dry_run {
        writeln!(
            out,
            "{}",
            "📋 DRY RUN MODE - commands are printed, not executed\n".yellow()
        )?;
    }

    let collection = load_entities(&options.workbook)?;
    write_dump(&collection, options.dump_format, &mut out)?;

    let kinds = effective_kinds(&options.selection);
    let flattener = AttributeFlattener::new(dates)?;
    let summary = Dispatcher::new(executor, &mut out, &options.console, options.dry_run)
        .dispatch(&collection, &kinds, &flattener)?;

    write_summary(&summary, options.dry_run, &mut out)?;
    Ok(summary)
}

/// Execute the dump command - print mapped entities and stop
pub fn dump(workbook: PathBuf, format: DumpFormat) -> ImportResult<()> {
    let collection = load_entities(&workbook)?;
    if let Some(text) = render_dump(&collection, format)? {
        print!("{text}");
    }
    Ok(())
}

/// Open a workbook and map every sheet
pub fn load_entities(path: &Path) -> ImportResult<EntityCollection> {
    let workbook = Workbook::open(path)?;
    Ok(EntityMapper::new()?.map_workbook(&workbook))
}

pub fn render_dump(
    collection: &EntityCollection,
    format: DumpFormat,
) -> ImportResult<Option<String>> {
    let text = match format {
        DumpFormat::Yaml => serde_yaml::to_string(collection)?,
        DumpFormat::Json => serde_json::to_string_pretty(collection)? + "\n",
        DumpFormat::Off => return Ok(None),
    };
    Ok(Some(text))
}

fn write_dump<W: Write>(
    collection: &EntityCollection,
    format: DumpFormat,
    out: &mut W,
) -> ImportResult<()> {
    if let Some(text) = render_dump(collection, format)? {
        writeln!(out, "{}", "📦 Entity data:".bold().cyan())?;
        write!(out, "{text}")?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_summary<W: Write>(
    summary: &DispatchSummary,
    dry_run: bool,
    out: &mut W,
) -> ImportResult<()> {
    writeln!(out)?;
    if dry_run {
        writeln!(out, "{}", "📋 Dry run complete - nothing executed".yellow())?;
    } else if summary.failed() > 0 {
        writeln!(
            out,
            "{}",
            format!("⚠️  Import finished with {} failed commands", summary.failed()).yellow()
        )?;
    } else {
        writeln!(out, "{}", "✅ Import complete".bold().green())?;
    }

    for kind in &summary.kinds {
        writeln!(
            out,
            "   {:<14} {} emitted, {} executed, {} failed",
            kind.kind.to_string().bright_blue(),
            kind.emitted,
            kind.executed,
            kind.failed
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
