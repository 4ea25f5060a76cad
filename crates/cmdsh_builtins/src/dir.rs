//! `dir` builtin - list the immediate children of a directory.
//! Usage: `dir [path]`. Without a path the current directory is listed.
//! Folders are prefixed with `[DIR]`; files are indented to the same column.

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};

const DIR_MARK: &str = "[DIR] ";
const FILE_PAD: &str = "      ";

pub struct DirCommand;

impl Builtin for DirCommand {
    fn name(&self) -> &'static str {
        "dir"
    }

    fn synopsis(&self) -> &'static str {
        "List files in the current directory"
    }

    fn usage(&self) -> &'static str {
        "dir [path]"
    }

    fn arity(&self) -> Arity {
        Arity::optional(1)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let path = match ctx.arg(0) {
            "" => ctx.fs.current_dir()?,
            given => given.into(),
        };

        for entry in ctx.fs.list_dir(&path)? {
            let mark = if entry.is_dir { DIR_MARK } else { FILE_PAD };
            ctx.console.line(&format!("{mark}{}", entry.name))?;
        }
        Ok(ExecutionResult::success(0))
    }
}
