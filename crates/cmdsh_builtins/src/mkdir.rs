//! `mkdir` builtin - create one folder.
//! Usage: `mkdir <name>`
//!
//! An existing folder of the same name is left untouched and reported.

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

pub struct MkdirCommand;

impl Builtin for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn synopsis(&self) -> &'static str {
        "Create a new folder"
    }

    fn usage(&self) -> &'static str {
        "mkdir <name>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        ctx.fs.create_dir(ctx.arg(0))?;
        ctx.console.success("Folder created successfully.")?;
        Ok(ExecutionResult::success(0))
    }
}
