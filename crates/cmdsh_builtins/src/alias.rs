//! `alias` builtin command - manage command aliases
//!
//! `alias <name> <targetVerb>` maps `name` to another verb for the rest of
//! the session, silently replacing any earlier mapping. Substitution is a
//! single step at dispatch time, so aliasing an alias does not chain.
//! With no arguments the current aliases are listed.
//!
//! Usage errors from this command are shown on the terminal only.

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellError, ShellResult};

/// The `alias` builtin command implementation
pub struct AliasCommand;

impl Builtin for AliasCommand {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn synopsis(&self) -> &'static str {
        "Define an alias for a command"
    }

    fn usage(&self) -> &'static str {
        "alias <name> <command>"
    }

    fn arity(&self) -> Arity {
        Arity::optional(2)
    }

    fn logs_usage_errors(&self) -> bool {
        false
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        if ctx.args.is_empty() {
            return self.print_all_aliases(ctx);
        }

        let (name, target) = (ctx.arg(0).to_string(), ctx.arg(1).to_string());
        if name.is_empty() || target.is_empty() {
            return Err(ShellError::usage(format!("usage: {}", self.usage())));
        }

        ctx.session.set_alias(name.as_str(), target.as_str());
        ctx.console.success(&format!("Alias set: {name} -> {target}"))?;
        Ok(ExecutionResult::success(0))
    }
}

impl AliasCommand {
    fn print_all_aliases(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let lines: Vec<String> = ctx
            .session
            .aliases()
            .into_iter()
            .map(|(name, target)| format!("{name} -> {target}"))
            .collect();

        if lines.is_empty() {
            ctx.console.line("no aliases defined")?;
        }
        for line in &lines {
            ctx.console.line(line)?;
        }
        Ok(ExecutionResult::success(0))
    }
}
