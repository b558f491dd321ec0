//! Entity → otrs.Console.pl argument list

use crate::console::executor::ConsoleConfig;
use crate::core::AttributeFlattener;
use crate::error::ImportResult;
use crate::types::{Entity, EntityKind, CLASS_KEY};
use std::fmt;

/// One `Admin::*::Add` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleCommand {
    pub kind: EntityKind,
    pub options: Vec<(String, String)>,
}

impl ConsoleCommand {
    /// Build the command for one entity
    ///
    /// Options follow entity key order. `class` is never flattened;
    /// every other key goes through `flattener` when one is given.
    pub fn build(
        kind: EntityKind,
        entity: &Entity,
        flattener: Option<&AttributeFlattener>,
    ) -> ImportResult<Self> {
        let mut options = Vec::with_capacity(entity.len());
        for (key, value) in entity.iter() {
            let option = match flattener {
                Some(flattener) if key != CLASS_KEY => flattener.flatten(key, value)?,
                _ => (key.to_string(), value.to_string()),
            };
            options.push(option);
        }
        Ok(Self { kind, options })
    }

    pub fn subcommand(&self) -> &'static str {
        self.kind.subcommand()
    }

    /// `--key value` pairs as a flat argv
    pub fn args(&self) -> Vec<String> {
        self.options
            .iter()
            .flat_map(|(key, value)| [format!("--{key}"), value.clone()])
            .collect()
    }

    /// Full command line as echoed before execution
    pub fn command_line(&self, config: &ConsoleConfig) -> String {
        format!("{} {}", config.program_line(), self)
    }
}

impl fmt::Display for ConsoleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())?;
        for (key, value) in &self.options {
            write!(f, " --{key} {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DateParser;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn flattener() -> AttributeFlattener {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        AttributeFlattener::new(DateParser::new(reference).unwrap()).unwrap()
    }

    #[test]
    fn test_agent_command() {
        let entity: Entity = [("name", "Alice"), ("email", "a@x.com")].into_iter().collect();

        let command = ConsoleCommand::build(EntityKind::Agent, &entity, None).unwrap();

        assert_eq!(
            command.to_string(),
            "Admin::User::Add --name Alice --email a@x.com"
        );
        assert_eq!(command.args(), vec!["--name", "Alice", "--email", "a@x.com"]);
    }

    #[test]
    fn test_ci_command_flattens_attributes() {
        let mut entity = Entity::with_class("Server");
        entity.insert("name", "Srv1");
        entity.insert("attrDate-Purchased", "June 1 2024");
        entity.insert("attr-Vendor", "HP");

        let f = flattener();
        let command = ConsoleCommand::build(EntityKind::Ci, &entity, Some(&f)).unwrap();

        assert_eq!(
            command.args(),
            vec![
                "--class",
                "Server",
                "--name",
                "Srv1",
                "--attribute",
                "Purchased=2024-06-01",
                "--attribute",
                "Vendor=HP",
            ]
        );
    }

    #[test]
    fn test_class_appears_once_and_unflattened() {
        let mut entity = Entity::with_class("attrDate-Hardware");
        entity.insert("name", "pc1");

        let f = flattener();
        let command = ConsoleCommand::build(EntityKind::Ci, &entity, Some(&f)).unwrap();

        let classes: Vec<_> = command
            .options
            .iter()
            .filter(|(key, _)| key == "class")
            .collect();
        assert_eq!(
            classes,
            vec![&("class".to_string(), "attrDate-Hardware".to_string())]
        );
    }

    #[test]
    fn test_without_flattener_attr_columns_pass_through() {
        let entity: Entity = [("attrDate-Purchased", "junk")].into_iter().collect();

        let command = ConsoleCommand::build(EntityKind::Customer, &entity, None).unwrap();

        assert_eq!(
            command.to_string(),
            "Admin::CustomerCompany::Add --attrDate-Purchased junk"
        );
    }

    #[test]
    fn test_bad_date_fails_build() {
        let entity: Entity = [("attrDate-Purchased", "not-a-date")].into_iter().collect();
        let f = flattener();
        assert!(ConsoleCommand::build(EntityKind::Ci, &entity, Some(&f)).is_err());
    }

    #[test]
    fn test_empty_entity() {
        let command =
            ConsoleCommand::build(EntityKind::CustomerUser, &Entity::new(), None).unwrap();
        assert!(command.args().is_empty());
        assert_eq!(command.to_string(), "Admin::CustomerUser::Add");
    }

    #[test]
    fn test_command_line_prefix() {
        let config = ConsoleConfig {
            interpreter: PathBuf::from("/usr/bin/perl"),
            script: PathBuf::from("/opt/otrs/bin/otrs.Console.pl"),
        };
        let entity: Entity = [("login", "bob")].into_iter().collect();
        let command = ConsoleCommand::build(EntityKind::Agent, &entity, None).unwrap();

        assert_eq!(
            command.command_line(&config),
            "/usr/bin/perl /opt/otrs/bin/otrs.Console.pl Admin::User::Add --login bob"
        );
    }
}
