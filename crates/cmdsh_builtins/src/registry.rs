//! Built-in command registry for the standard command set

use cmdsh_core::BuiltinRegistry;

use crate::{
    alias::AliasCommand, cd::CdCommand, clear::ClearCommand, copy::CopyCommand, create::CreateCommand,
    del::DelCommand, dir::DirCommand, exit::ExitCommand, help::HelpCommand, history::HistoryCommand,
    mkdir::MkdirCommand, move_cmd::MoveCommand, r#type::TypeCommand, rename::RenameCommand,
    sysinfo::SysinfoCommand, unalias::UnaliasCommand,
};

/// Create a registry holding every standard builtin, in `help` order.
pub fn standard_registry() -> BuiltinRegistry {
    let mut registry = BuiltinRegistry::new();
    register_standard_builtins(&mut registry);
    registry
}

/// Register all standard built-in commands
pub fn register_standard_builtins(registry: &mut BuiltinRegistry) {
    // Filesystem
    registry.register(Box::new(DirCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(TypeCommand));
    registry.register(Box::new(CopyCommand));
    registry.register(Box::new(MoveCommand));
    registry.register(Box::new(DelCommand));
    registry.register(Box::new(RenameCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(CreateCommand));

    // Session
    registry.register(Box::new(AliasCommand));
    registry.register(Box::new(UnaliasCommand));
    registry.register(Box::new(HistoryCommand));

    // Terminal and host
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(SysinfoCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(ExitCommand));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdsh_core::Arity;

    #[test]
    fn every_verb_is_registered_with_its_arity() {
        let registry = standard_registry();
        let expected = [
            ("dir", Arity::optional(1)),
            ("cd", Arity::exactly(1)),
            ("type", Arity::exactly(1)),
            ("copy", Arity::exactly(2)),
            ("move", Arity::exactly(2)),
            ("del", Arity::exactly(1)),
            ("rename", Arity::exactly(2)),
            ("mkdir", Arity::exactly(1)),
            ("create", Arity::exactly(1)),
            ("alias", Arity::optional(2)),
            ("unalias", Arity::exactly(1)),
            ("history", Arity::NONE),
            ("clear", Arity::NONE),
            ("sysinfo", Arity::NONE),
            ("help", Arity::optional(1)),
            ("exit", Arity::NONE),
        ];

        assert_eq!(registry.len(), expected.len());
        for (verb, arity) in expected {
            let builtin = registry.get(verb).unwrap_or_else(|| panic!("{verb} not registered"));
            assert_eq!(builtin.arity(), arity, "arity of {verb}");
        }
    }

    #[test]
    fn only_alias_management_keeps_usage_errors_off_the_log() {
        let registry = standard_registry();
        let quiet: Vec<_> = registry
            .iter()
            .filter(|b| !b.logs_usage_errors())
            .map(|b| b.name())
            .collect();
        assert_eq!(quiet, vec!["alias", "unalias"]);
    }
}
