//! otrs-import - spreadsheet workbook → OTRS admin console commands
//!
//! Reads a workbook whose worksheets are named after the entity they hold
//! (`agent`, `customer`, `customer_user`, `ci - <Class>`), maps each data
//! row to an entity, and runs one `otrs.Console.pl Admin::*::Add` command
//! per row.
//!
//! # Features
//!
//! - Sheet names route rows; `ci - Hardware` tags config items with `class`
//! - `attr-`, `attrDate-` and `attrDateTime-` columns become `--attribute name=value`
//! - Natural-language dates (`June 1 2024`, `yesterday`, `3 days ago`)
//! - Dry-run mode and a YAML/JSON dump of the mapped entities
//!
//! # Example
//!
//! ```no_run
//! use otrs_import::cli::{run_import, ImportOptions};
//! use otrs_import::console::ConsoleExecutor;
//! use otrs_import::core::DateParser;
//!
//! let mut options = ImportOptions::new("import.xlsx");
//! options.dry_run = true;
//!
//! let mut executor = ConsoleExecutor::new(options.console.clone());
//! let summary = run_import(&options, DateParser::now()?, &mut executor, std::io::stdout())?;
//! println!("{} commands", summary.emitted());
//! # Ok::<(), otrs_import::error::ImportError>(())
//! ```

pub mod cli;
pub mod console;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{ImportError, ImportResult};
pub use types::{Entity, EntityCollection, EntityKind, Selection, SheetClassification};
