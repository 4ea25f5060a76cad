//! `create` builtin - create an empty file, truncating an existing one.
//! Usage: `create <filename>`

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

pub struct CreateCommand;

impl Builtin for CreateCommand {
    fn name(&self) -> &'static str {
        "create"
    }

    fn synopsis(&self) -> &'static str {
        "Create an empty file"
    }

    fn usage(&self) -> &'static str {
        "create <filename>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        ctx.fs.create_file(ctx.arg(0))?;
        ctx.console.success("File created successfully.")?;
        Ok(ExecutionResult::success(0))
    }
}
