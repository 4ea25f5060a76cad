//! `cd` builtin - change the working directory for the rest of the session.
//! Usage: `cd <path>`

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

pub struct CdCommand;

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn synopsis(&self) -> &'static str {
        "Change current directory"
    }

    fn usage(&self) -> &'static str {
        "cd <path>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        ctx.fs.set_current_dir(ctx.arg(0))?;
        Ok(ExecutionResult::success(0))
    }
}
