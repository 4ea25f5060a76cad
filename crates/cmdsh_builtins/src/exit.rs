//! `exit` builtin - end the session with status 0.
//! Usage: `exit`

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

pub struct ExitCommand;

impl Builtin for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn synopsis(&self) -> &'static str {
        "Exit the CLI"
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    fn arity(&self) -> Arity {
        Arity::NONE
    }

    fn invoke(&self, _ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        Ok(ExecutionResult::exit(0))
    }
}
