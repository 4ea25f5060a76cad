//! `rename` builtin - rename a file or folder in one step.
//! Usage: `rename <old> <new>`

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

pub struct RenameCommand;

impl Builtin for RenameCommand {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn synopsis(&self) -> &'static str {
        "Rename a file"
    }

    fn usage(&self) -> &'static str {
        "rename <old> <new>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(2)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        ctx.fs.rename(ctx.arg(0), ctx.arg(1))?;
        ctx.console.success("File renamed successfully.")?;
        Ok(ExecutionResult::success(0))
    }
}
