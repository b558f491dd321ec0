//! CLI command handlers

pub mod commands;

pub use commands::{dump, import, load_entities, render_dump, run_import, DumpFormat, ImportOptions};
