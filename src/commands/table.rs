//! Command table
//!
//! Immutable mapping from command name to its description and handler kind.
//! Built once and handed to the [`Dispatcher`](super::Dispatcher).

use std::collections::HashMap;

/// Which handler a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    CacheStats,
}

/// A named command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

impl CommandSpec {
    pub const fn new(name: &'static str, description: &'static str, kind: CommandKind) -> Self {
        Self {
            name,
            description,
            kind,
        }
    }
}

/// Lookup table of available commands.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: HashMap<&'static str, CommandSpec>,
}

impl CommandTable {
    /// Builds a table from `specs`; a later spec with the same name wins.
    pub fn from_specs(specs: impl IntoIterator<Item = CommandSpec>) -> Self {
        Self {
            commands: specs.into_iter().map(|spec| (spec.name, spec)).collect(),
        }
    }

    /// The commands the Pokedex ships with.
    pub fn standard() -> Self {
        use CommandKind::*;

        Self::from_specs([
            CommandSpec::new("help", "Displays a help message", Help),
            CommandSpec::new("exit", "Exit the Pokedex", Exit),
            CommandSpec::new("map", "Displays the next page of location areas", Map),
            CommandSpec::new("mapb", "Displays the previous page of location areas", MapBack),
            CommandSpec::new("explore", "Lists the Pokemon found in a location area", Explore),
            CommandSpec::new("catch", "Throws a Pokeball at a Pokemon", Catch),
            CommandSpec::new("inspect", "Shows details of a caught Pokemon", Inspect),
            CommandSpec::new("pokedex", "Lists every caught Pokemon", Pokedex),
            CommandSpec::new("cache", "Shows response cache statistics", CacheStats),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Returns every command sorted by name.
    pub fn sorted(&self) -> Vec<&CommandSpec> {
        let mut specs: Vec<_> = self.commands.values().collect();
        specs.sort_by_key(|spec| spec.name);
        specs
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = CommandTable::standard();

        assert_eq!(table.len(), 9);
        assert_eq!(table.get("mapb").map(|c| c.kind), Some(CommandKind::MapBack));
        assert!(table.get("fly").is_none());
    }

    #[test]
    fn test_sorted_by_name() {
        let table = CommandTable::standard();
        let names: Vec<_> = table.sorted().iter().map(|c| c.name).collect();

        assert_eq!(
            names,
            vec!["cache", "catch", "exit", "explore", "help", "inspect", "map", "mapb", "pokedex"]
        );
    }

    #[test]
    fn test_custom_table() {
        let table = CommandTable::from_specs([
            CommandSpec::new("quit", "Leave", CommandKind::Exit),
            CommandSpec::new("quit", "Leave now", CommandKind::Exit),
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("quit").unwrap().description, "Leave now");
    }
}
