//! `help` builtin - list the available commands, or show one command's usage.
//! Usage: `help [command]`

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellError, ShellResult};

pub struct HelpCommand;

impl Builtin for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn synopsis(&self) -> &'static str {
        "Show this help menu"
    }

    fn usage(&self) -> &'static str {
        "help [command]"
    }

    fn arity(&self) -> Arity {
        Arity::optional(1)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let registry = ctx.registry;
        let topic = ctx.arg(0).to_string();

        if !topic.is_empty() {
            let builtin = registry
                .get(&topic)
                .ok_or_else(|| ShellError::command_not_found(&topic))?;
            ctx.console.line(&format!("{} - {}", builtin.usage(), builtin.synopsis()))?;
            return Ok(ExecutionResult::success(0));
        }

        let width = registry.iter().map(|b| b.usage().len()).max().unwrap_or(0) + 1;
        ctx.console.line("Available commands:")?;
        for builtin in registry.iter() {
            ctx.console
                .line(&format!("  {:<width$}- {}", builtin.usage(), builtin.synopsis()))?;
        }
        Ok(ExecutionResult::success(0))
    }
}
