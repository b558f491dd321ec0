//! Entity normalization: date parsing, attribute flattening, kind selection

pub mod dates;
pub mod flattener;
pub mod selector;

pub use dates::DateParser;
pub use flattener::{AttributeFlattener, ATTRIBUTE_KEY};
pub use selector::effective_kinds;
