//! `copy` builtin - copy a file, overwriting the destination.
//! Usage: `copy <src> <dest>`
//!
//! When `dest` is an existing folder the file lands inside it under its
//! original name; otherwise `dest` is the exact target path.

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};
use tracing::debug;

pub struct CopyCommand;

impl Builtin for CopyCommand {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn synopsis(&self) -> &'static str {
        "Copy a file"
    }

    fn usage(&self) -> &'static str {
        "copy <src> <dest>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(2)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let written = ctx.fs.copy(ctx.arg(0), ctx.arg(1))?;
        debug!(target_path = %written.display(), "copy finished");
        ctx.console.success("File copied successfully.")?;
        Ok(ExecutionResult::success(0))
    }
}
