//! `history` builtin - show the lines entered this session, numbered from 1.

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

pub struct HistoryCommand;

impl Builtin for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn synopsis(&self) -> &'static str {
        "Show command history"
    }

    fn usage(&self) -> &'static str {
        "history"
    }

    fn arity(&self) -> Arity {
        Arity::NONE
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        // The line that invoked us is recorded after it completes.
        for (i, line) in ctx.session.history().iter().enumerate() {
            ctx.console.line(&format!("{}. {line}", i + 1))?;
        }
        Ok(ExecutionResult::success(0))
    }
}
