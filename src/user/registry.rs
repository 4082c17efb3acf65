//! Command registry - static command registration and lookup.

use crate::user::command::Command;
use crate::user::commands;

/// Every command, in the order `help` lists them.
static COMMANDS: &[&dyn Command] = &[
    &commands::EVAL,
    &commands::SCAL,
    &commands::IDEN,
    &commands::TRAN,
    &commands::ADD,
    &commands::SUB,
    &commands::COMP,
    &commands::DEL,
    &commands::RESIZE,
    &commands::READ,
    &commands::HELP,
    &commands::HISTORY_CMD,
    &commands::EXIT,
];

/// Find a command by name or alias.
pub fn find_command(name: &str) -> Option<&'static dyn Command> {
    COMMANDS
        .iter()
        .copied()
        .find(|cmd| cmd.name() == name || cmd.aliases().iter().any(|alias| *alias == name))
}

/// Get all registered commands.
pub fn all_commands() -> &'static [&'static dyn Command] {
    COMMANDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name_and_alias() {
        assert_eq!(find_command("eval").map(|c| c.name()), Some("eval"));
        assert_eq!(find_command("evaluate").map(|c| c.name()), Some("eval"));
        assert_eq!(find_command("composite").map(|c| c.name()), Some("comp"));
        assert!(find_command("mul").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = Vec::new();
        for cmd in all_commands() {
            for name in std::iter::once(cmd.name()).chain(cmd.aliases().iter().copied()) {
                assert!(!seen.contains(&name), "duplicate command name {name}");
                seen.push(name);
            }
        }
    }
}
