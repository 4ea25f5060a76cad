//! `move` builtin - relocate a file or folder into an existing folder.
//! Usage: `move <src> <destFolder>`
//!
//! The destination folder must already exist; if it does not, nothing is
//! touched and the missing folder is named in the error.

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

pub struct MoveCommand;

impl Builtin for MoveCommand {
    fn name(&self) -> &'static str {
        "move"
    }

    fn synopsis(&self) -> &'static str {
        "Move a file into a folder"
    }

    fn usage(&self) -> &'static str {
        "move <src> <destFolder>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(2)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        ctx.fs.move_into(ctx.arg(0), ctx.arg(1))?;
        ctx.console.success("File moved successfully.")?;
        Ok(ExecutionResult::success(0))
    }
}
