//! Name-to-handler lookup for sub-commands.
//!
//! Each command is reachable by its full name and by a short alias. Both live
//! in one namespace, and registration rejects any name that is already taken,
//! so a lookup can never be ambiguous.

use crate::error::{DevToolsError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct CommandEntry<H> {
    pub name: &'static str,
    pub alias: &'static str,
    pub about: &'static str,
    pub handler: H,
}

#[derive(Debug, Clone)]
pub struct Registry<H> {
    entries: Vec<CommandEntry<H>>,
    by_name: HashMap<&'static str, usize>,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<H> Registry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry<H>) -> Result<()> {
        if entry.name == entry.alias {
            return Err(DevToolsError::DuplicateCommand(entry.name.to_string()));
        }
        for key in [entry.name, entry.alias] {
            if self.by_name.contains_key(key) {
                return Err(DevToolsError::DuplicateCommand(key.to_string()));
            }
        }

        let index = self.entries.len();
        self.by_name.insert(entry.name, index);
        self.by_name.insert(entry.alias, index);
        self.entries.push(entry);
        Ok(())
    }

    pub fn with(mut self, entry: CommandEntry<H>) -> Result<Self> {
        self.register(entry)?;
        Ok(self)
    }

    pub fn resolve(&self, name: &str) -> Result<&CommandEntry<H>> {
        self.by_name
            .get(name)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| DevToolsError::UnknownCommand(name.to_string()))
    }

    /// Splits a command vector into the matching entry and its remaining
    /// arguments.
    pub fn dispatch<'a>(&self, args: &'a [String]) -> Result<(&CommandEntry<H>, &'a [String])> {
        let (name, rest) = args.split_first().ok_or(DevToolsError::NoCommand)?;
        Ok((self.resolve(name)?, rest))
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[CommandEntry<H>] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &'static str, alias: &'static str, handler: u8) -> CommandEntry<u8> {
        CommandEntry {
            name,
            alias,
            about: "",
            handler,
        }
    }

    fn registry() -> Registry<u8> {
        Registry::new()
            .with(entry("base64", "b64", 1))
            .and_then(|r| r.with(entry("uuid", "u", 2)))
            .unwrap()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_by_name_and_alias() {
        let registry = registry();
        assert_eq!(registry.resolve("base64").unwrap().handler, 1);
        assert_eq!(registry.resolve("b64").unwrap().handler, 1);
        assert_eq!(registry.resolve("uuid").unwrap().handler, 2);
        assert_eq!(registry.resolve("u").unwrap().handler, 2);
    }

    #[test]
    fn test_unknown_command() {
        let err = registry().resolve("foo").unwrap_err();
        assert_eq!(err.to_string(), "foo is unknown command");
    }

    #[test]
    fn test_alias_collision_is_rejected() {
        let mut registry = registry();
        let err = registry.register(entry("uuid7", "b64", 3)).unwrap_err();

        assert!(matches!(err, DevToolsError::DuplicateCommand(ref n) if n == "b64"));
        // nothing from the rejected entry leaks in
        assert!(registry.resolve("uuid7").is_err());
        assert_eq!(registry.entries().len(), 2);
    }

    #[test]
    fn test_name_colliding_with_alias_is_rejected() {
        let mut registry = registry();
        assert!(registry.register(entry("u", "x", 3)).is_err());
    }

    #[test]
    fn test_alias_equal_to_own_name_is_rejected() {
        assert!(Registry::new().register(entry("same", "same", 0)).is_err());
    }

    #[test]
    fn test_dispatch_splits_arguments() {
        let registry = registry();
        let argv = args(&["b64", "-d", "-t", "aGk"]);

        let (entry, rest) = registry.dispatch(&argv).unwrap();

        assert_eq!(entry.name, "base64");
        assert_eq!(rest, &argv[1..]);
    }

    #[test]
    fn test_dispatch_without_command() {
        let err = registry().dispatch(&[]).unwrap_err();
        assert!(matches!(err, DevToolsError::NoCommand));
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let names: Vec<_> = registry().entries().iter().map(|e| e.name).collect();
        assert_eq!(names, ["base64", "uuid"]);
    }
}
