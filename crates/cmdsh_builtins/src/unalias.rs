//! `unalias` builtin - remove an alias.
//! Usage: `unalias <name>`

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellError, ShellResult};

pub struct UnaliasCommand;

impl Builtin for UnaliasCommand {
    fn name(&self) -> &'static str {
        "unalias"
    }

    fn synopsis(&self) -> &'static str {
        "Remove an alias"
    }

    fn usage(&self) -> &'static str {
        "unalias <name>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn logs_usage_errors(&self) -> bool {
        false
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let name = ctx.arg(0).to_string();
        if name.is_empty() {
            return Err(ShellError::usage(format!("usage: {}", self.usage())));
        }

        match ctx.session.remove_alias(&name) {
            Some(_) => {
                ctx.console.success(&format!("Alias removed: {name}"))?;
                Ok(ExecutionResult::success(0))
            }
            None => Err(ShellError::alias_not_found(&name)),
        }
    }
}
