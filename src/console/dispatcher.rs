//! Echo, then run, one console command per entity

use crate::console::command::ConsoleCommand;
use crate::console::executor::{CommandExecutor, ConsoleConfig};
use crate::core::AttributeFlattener;
use crate::error::ImportResult;
use crate::types::{Entity, EntityCollection, EntityKind};
use std::io::Write;
use tracing::{info, warn};

/// Per-kind counts from one dispatch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSummary {
    pub kind: EntityKind,
    /// Command lines echoed
    pub emitted: usize,
    /// Commands handed to the executor
    pub executed: usize,
    /// Executed commands that reported failure
    pub failed: usize,
}

impl KindSummary {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            emitted: 0,
            executed: 0,
            failed: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub kinds: Vec<KindSummary>,
}

impl DispatchSummary {
    pub fn emitted(&self) -> usize {
        self.kinds.iter().map(|k| k.emitted).sum()
    }

    pub fn executed(&self) -> usize {
        self.kinds.iter().map(|k| k.executed).sum()
    }

    pub fn failed(&self) -> usize {
        self.kinds.iter().map(|k| k.failed).sum()
    }
}

/// Turns entities into console commands, sequentially
///
/// Every command line is written to `out` before it runs. A failed
/// console call is counted and logged; the next entity runs regardless.
/// A date that cannot be parsed stops the run at that entity.
pub struct Dispatcher<'a, E: CommandExecutor, W: Write> {
    executor: &'a mut E,
    out: W,
    config: &'a ConsoleConfig,
    dry_run: bool,
}

impl<'a, E: CommandExecutor, W: Write> Dispatcher<'a, E, W> {
    pub fn new(executor: &'a mut E, out: W, config: &'a ConsoleConfig, dry_run: bool) -> Self {
        Self {
            executor,
            out,
            config,
            dry_run,
        }
    }

    /// Dispatch every selected kind in the given order
    pub fn dispatch(
        &mut self,
        collection: &EntityCollection,
        kinds: &[EntityKind],
        flattener: &AttributeFlattener,
    ) -> ImportResult<DispatchSummary> {
        let mut summary = DispatchSummary::default();
        for &kind in kinds {
            let flattener = kind.flattens_attributes().then_some(flattener);
            let kind_summary = self.dispatch_kind(kind, collection.entities(kind), flattener)?;
            summary.kinds.push(kind_summary);
        }
        Ok(summary)
    }

    pub fn dispatch_kind(
        &mut self,
        kind: EntityKind,
        entities: &[Entity],
        flattener: Option<&AttributeFlattener>,
    ) -> ImportResult<KindSummary> {
        info!("importing {} {} entities", entities.len(), kind);
        let mut summary = KindSummary::new(kind);

        for entity in entities {
            let command = ConsoleCommand::build(kind, entity, flattener)?;
            writeln!(self.out, "{}", command.command_line(self.config))?;
            summary.emitted += 1;

            if self.dry_run {
                continue;
            }

            let outcome = self.executor.execute(&command);
            summary.executed += 1;
            if !outcome.stdout.is_empty() {
                write!(self.out, "{}", outcome.stdout)?;
            }
            if !outcome.stderr.is_empty() {
                eprint!("{}", outcome.stderr);
            }
            if !outcome.success {
                summary.failed += 1;
                warn!(
                    exit_code = ?outcome.exit_code,
                    "{} failed, continuing",
                    command.subcommand()
                );
            }
        }

        Ok(summary)
    }
}
