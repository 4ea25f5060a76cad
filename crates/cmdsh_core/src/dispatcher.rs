//! Command dispatch.
//!
//! [`Dispatcher::dispatch`] takes one raw input line through the whole
//! pipeline: split, single-level alias substitution, registry lookup, arity
//! check, invocation, reporting, and finally recording the raw line in the
//! session history. Whatever happens inside, the dispatcher itself never
//! fails; errors are reported and the session stays consistent.

use cmdsh_hal::{FileSystem, SystemInfoProvider};
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::executor::{Builtin, BuiltinRegistry, Context, ExecutionResult};
use crate::logging::ErrorLog;
use crate::parser::CommandLine;
use crate::session::Session;

/// What the interactive loop should do after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

pub struct Dispatcher {
    registry: BuiltinRegistry,
    session: Session,
    console: Console,
    fs: FileSystem,
    system: Box<dyn SystemInfoProvider>,
    error_log: Option<ErrorLog>,
}

impl Dispatcher {
    pub fn new(registry: BuiltinRegistry, console: Console, system: Box<dyn SystemInfoProvider>) -> Self {
        Self {
            registry,
            session: Session::new(),
            console,
            fs: FileSystem::new(),
            system,
            error_log: None,
        }
    }

    /// Mirror failures into `log`.
    pub fn with_error_log(mut self, log: ErrorLog) -> Self {
        self.error_log = Some(log);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    /// Handle one line of input. A whitespace-only line runs nothing but is
    /// still recorded; only a truly empty line leaves no trace.
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let raw = line.trim_end_matches(['\r', '\n']);
        let Some(command) = CommandLine::parse(raw) else {
            if !raw.is_empty() {
                self.session.record(raw);
            }
            return Outcome::Continue;
        };

        let verb = self.session.resolve(&command.verb).to_string();
        if verb != command.verb {
            debug!(alias = %command.verb, target = %verb, "alias substituted");
        }

        let (result, log_usage) = match self.registry.get(&verb) {
            Some(builtin) => {
                let result = Self::run(
                    builtin,
                    command.args,
                    &mut self.session,
                    &mut self.console,
                    &self.fs,
                    self.system.as_ref(),
                    &self.registry,
                );
                (result, builtin.logs_usage_errors())
            }
            None => (Err(ShellError::command_not_found(&verb)), true),
        };

        self.session.record(raw);

        match result {
            Ok(res) if res.terminate => Outcome::Exit(res.exit_code),
            Ok(_) => Outcome::Continue,
            Err(err) => {
                self.report(&err, log_usage || !err.is_usage());
                Outcome::Continue
            }
        }
    }

    fn run(
        builtin: &dyn Builtin,
        mut args: Vec<String>,
        session: &mut Session,
        console: &mut Console,
        fs: &FileSystem,
        system: &dyn SystemInfoProvider,
        registry: &BuiltinRegistry,
    ) -> ShellResult<ExecutionResult> {
        let arity = builtin.arity();
        if args.len() < arity.required {
            return Err(ShellError::usage(format!("usage: {}", builtin.usage())));
        }
        if args.len() > arity.max() {
            debug!(command = builtin.name(), extra = args.len() - arity.max(), "ignoring extra arguments");
            args.truncate(arity.max());
        }

        info!(command = builtin.name(), ?args, "running builtin");
        let mut ctx = Context { args, session, console, fs, system, registry };
        builtin.invoke(&mut ctx)
    }

    fn report(&mut self, err: &ShellError, to_log: bool) {
        if let Err(e) = self.console.failure(&err.message) {
            warn!(error = %e, "could not write to terminal");
        }
        if !to_log {
            return;
        }
        if let Some(log) = &self.error_log {
            if let Err(e) = log.append(&err.message) {
                warn!(path = %log.path().display(), error = %e, "could not append to error log");
            }
        }
    }
}
