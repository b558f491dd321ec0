//! Worksheet name → entity kind and optional sub-class

use crate::error::ImportResult;
use crate::types::SheetClassification;
use regex::Regex;

/// Splits `<kind> - <subclass>` sheet names
///
/// Only the first hyphen separates; `ci - Net - Core` gives subclass `Net - Core`.
/// Names without a `<word> -` prefix are the kind verbatim.
pub struct SheetClassifier {
    pattern: Regex,
}

impl SheetClassifier {
    pub fn new() -> ImportResult<Self> {
        let pattern = Regex::new(r"^\s*(\w+)\s*-\s*(.*?)\s*$")?;
        Ok(Self { pattern })
    }

    pub fn classify(&self, sheet_name: &str) -> SheetClassification {
        match self.pattern.captures(sheet_name) {
            Some(captures) => {
                let subclass = captures
                    .get(2)
                    .map(|m| m.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                SheetClassification::new(&captures[1], subclass)
            }
            None => SheetClassification::new(sheet_name, None),
        }
    }
}
