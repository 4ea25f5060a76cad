//! `clear` builtin - Clear the terminal screen
//!
//! Cross-platform: emits the clear-screen and cursor-home sequences through
//! crossterm instead of shelling out to `cls`/`clear`.

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

pub struct ClearCommand;

impl Builtin for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn synopsis(&self) -> &'static str {
        "Clear the screen"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn arity(&self) -> Arity {
        Arity::NONE
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        ctx.console
            .out()
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?;
        ctx.console.flush()?;
        Ok(ExecutionResult::success(0))
    }
}
