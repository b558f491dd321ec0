//! Workbook ingestion
//!
//! - Reader: workbook file → worksheets of cell text (calamine)
//! - Classifier: sheet name → kind + optional sub-class
//! - Mapper: header + data rows → entities grouped by kind

pub mod classifier;
pub mod mapper;
pub mod reader;

pub use classifier::SheetClassifier;
pub use mapper::{map_rows, EntityMapper};
pub use reader::{Row, Workbook, Worksheet};
