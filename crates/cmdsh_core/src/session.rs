use std::collections::HashMap;

/// Session owns the alias table and command history of one shell run.
///
/// Nothing here is persisted; both collections are dropped with the session.
#[derive(Debug, Default, Clone)]
pub struct Session {
    /// Alias name -> target verb.
    aliases: HashMap<String, String>,
    /// Raw input lines in entry order.
    history: Vec<String>,
}

impl Session {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or replace an alias.
    pub fn set_alias<K, V>(&mut self, name: K, target: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases.insert(name.into(), target.into());
    }

    /// Remove an alias, returning its old target if it existed.
    pub fn remove_alias(&mut self, name: &str) -> Option<String> {
        self.aliases.remove(name)
    }

    pub fn get_alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Substitute `verb` by its alias target. Exactly one level: the
    /// target is returned as-is even if it is itself an alias.
    pub fn resolve<'a>(&'a self, verb: &'a str) -> &'a str {
        self.get_alias(verb).unwrap_or(verb)
    }

    /// Aliases sorted by name.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut all: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        all.sort_unstable();
        all
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Append a raw input line to the history.
    pub fn record(&mut self, line: impl Into<String>) {
        self.history.push(line.into());
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}
