//! Config item dynamic field columns → repeated `--attribute name=value`
//!
//! | Header                | Argument                                      |
//! |-----------------------|-----------------------------------------------|
//! | `attr-Vendor`         | `--attribute Vendor=<raw>`                    |
//! | `attrDate-Purchased`  | `--attribute Purchased=YYYY-MM-DD`            |
//! | `attrDateTime-Seen`   | `--attribute Seen=YYYY-MM-DD HH:MM:SS`        |

use crate::core::dates::DateParser;
use crate::error::{ImportError, ImportResult};
use regex::Regex;

/// Key every flattened column is emitted under
pub const ATTRIBUTE_KEY: &str = "attribute";

pub struct AttributeFlattener {
    pattern: Regex,
    dates: DateParser,
}

impl AttributeFlattener {
    pub fn new(dates: DateParser) -> ImportResult<Self> {
        Ok(Self {
            pattern: Regex::new(r"(?s)^(attr[^-]*)-(.*)$")?,
            dates,
        })
    }

    /// Rewrite one column; columns without an `attr*-` prefix pass through
    pub fn flatten(&self, key: &str, value: &str) -> ImportResult<(String, String)> {
        let Some(captures) = self.pattern.captures(key) else {
            return Ok((key.to_string(), value.to_string()));
        };
        let field_type = &captures[1];
        let name = &captures[2];

        let value = if field_type.contains("Date") {
            let parsed = self
                .dates
                .parse(value)
                .ok_or_else(|| ImportError::DateParse {
                    column: key.to_string(),
                    value: value.to_string(),
                })?;
            if field_type.contains("Time") {
                parsed.format("%Y-%m-%d %H:%M:%S").to_string()
            } else {
                parsed.format("%Y-%m-%d").to_string()
            }
        } else {
            value.to_string()
        };

        Ok((ATTRIBUTE_KEY.to_string(), format!("{name}={value}")))
    }
}
