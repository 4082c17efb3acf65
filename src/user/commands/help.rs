//! Help command - displays available commands and their usage.

use std::io::Write;

use crate::error::{CalcError, CalcResult};
use crate::user::{Command, CommandContext, Flow};

/// Help command instance.
pub static HELP: HelpCommand = HelpCommand;

/// Help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["?"]
    }

    fn description(&self) -> &'static str {
        " [command] - print this command list, or the usage of one command"
    }

    fn usage(&self) -> &'static str {
        "Usage: help [command]\n\
         \n\
         Without arguments: lists all available commands.\n\
         With a command name: shows detailed help for that command."
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        let args = ctx.args();
        if args.is_empty() {
            show_all_commands(ctx.out)?;
        } else {
            args.expect_count(1)?;
            show_command_help(ctx.out, args.get(0).unwrap_or_default())?;
        }
        Ok(Flow::Continue)
    }
}

fn show_command_help(out: &mut dyn Write, name: &str) -> CalcResult<()> {
    let cmd = crate::user::registry::find_command(name)
        .ok_or_else(|| CalcError::UnknownCommand(name.to_string()))?;

    write!(out, "Command: {}", cmd.name())?;
    let aliases = cmd.aliases();
    if !aliases.is_empty() {
        write!(out, " (aliases: {})", aliases.join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", cmd.usage())?;
    Ok(())
}

fn show_all_commands(out: &mut dyn Write) -> CalcResult<()> {
    writeln!(out, "The available commands are:")?;

    let commands = crate::user::registry::all_commands();

    // Collect categories in registration order
    let mut categories: Vec<&'static str> = Vec::new();
    for cmd in commands {
        if !categories.contains(&cmd.category()) {
            categories.push(cmd.category());
        }
    }

    for category in categories {
        writeln!(out, "[{category}]")?;
        for cmd in commands.iter().filter(|cmd| cmd.category() == category) {
            writeln!(out, "* {}{}", cmd.name(), cmd.description())?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Type 'help <command>' for detailed usage.")?;
    Ok(())
}
