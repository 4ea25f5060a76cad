//! `type` builtin - print a text file line by line.
//! Usage: `type <filename>`

use std::io::BufRead;

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellError, ShellResult};

pub struct TypeCommand;

impl Builtin for TypeCommand {
    fn name(&self) -> &'static str {
        "type"
    }

    fn synopsis(&self) -> &'static str {
        "Display contents of a file"
    }

    fn usage(&self) -> &'static str {
        "type <filename>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let path = ctx.arg(0).to_string();
        let reader = ctx.fs.open_text(&path)?;
        for line in reader.lines() {
            let line = line.map_err(|e| ShellError::from(e).with_path(&path))?;
            ctx.console.line(&line)?;
        }
        Ok(ExecutionResult::success(0))
    }
}
