//! `del` builtin - delete a file, or a folder with everything in it.
//! Usage: `del <path>`

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellError, ShellResult};
use cmdsh_hal::Removed;

pub struct DelCommand;

impl Builtin for DelCommand {
    fn name(&self) -> &'static str {
        "del"
    }

    fn synopsis(&self) -> &'static str {
        "Delete a file or folder"
    }

    fn usage(&self) -> &'static str {
        "del <path>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let target = ctx.arg(0);
        let removed = ctx.fs.remove(target).map_err(|e| {
            let err = ShellError::from(e);
            if err.is_not_found() {
                ShellError::new(err.kind, format!("File or folder not found: {target}"))
            } else {
                err
            }
        })?;

        let message = match removed {
            Removed::File => "File deleted successfully.",
            Removed::Directory => "Folder deleted successfully.",
        };
        ctx.console.success(message)?;
        Ok(ExecutionResult::success(0))
    }
}
