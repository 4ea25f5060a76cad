//! Builtin command interface.
//!
//! Each verb the shell understands is a [`Builtin`]: a handler that declares
//! its [`Arity`] and runs against a [`Context`]. Handlers are collected in a
//! [`BuiltinRegistry`], which the dispatcher consults after alias
//! substitution.

use std::collections::HashMap;

use cmdsh_hal::{FileSystem, SystemInfoProvider};

use crate::console::Console;
use crate::error::ShellResult;
use crate::session::Session;

/// How many positional arguments a builtin takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub required: usize,
    pub optional: usize,
}

impl Arity {
    pub const NONE: Arity = Arity { required: 0, optional: 0 };

    pub const fn exactly(n: usize) -> Self {
        Self { required: n, optional: 0 }
    }

    pub const fn optional(n: usize) -> Self {
        Self { required: 0, optional: n }
    }

    pub fn max(&self) -> usize {
        self.required + self.optional
    }
}

/// Outcome of a builtin that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit status code
    pub exit_code: i32,
    /// The shell should terminate with `exit_code`.
    pub terminate: bool,
}

impl ExecutionResult {
    /// Create a successful execution result
    pub fn success(exit_code: i32) -> Self {
        Self { exit_code, terminate: false }
    }

    /// Ask the shell to end the session.
    pub fn exit(exit_code: i32) -> Self {
        Self { exit_code, terminate: true }
    }
}

/// Everything a builtin may read or change while it runs.
pub struct Context<'a> {
    /// Positional arguments, already trimmed to the builtin's arity.
    pub args: Vec<String>,
    pub session: &'a mut Session,
    pub console: &'a mut Console,
    pub fs: &'a FileSystem,
    pub system: &'a dyn SystemInfoProvider,
    pub registry: &'a BuiltinRegistry,
}

impl Context<'_> {
    /// Argument `index`, or `""` when it was not supplied.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }
}

pub trait Builtin {
    /// Get the name of the builtin
    fn name(&self) -> &'static str;

    /// One-line description for `help`
    fn synopsis(&self) -> &'static str;

    /// Usage line, e.g. `copy <src> <dest>`
    fn usage(&self) -> &'static str;

    fn arity(&self) -> Arity;

    /// Whether usage errors from this builtin go to the error log.
    fn logs_usage_errors(&self) -> bool {
        true
    }

    /// Execute the builtin command
    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult>;
}

/// Registry of builtins, keyed by verb, remembering registration order.
#[derive(Default)]
pub struct BuiltinRegistry {
    builtins: Vec<Box<dyn Builtin>>,
    index: HashMap<&'static str, usize>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builtin; a later registration of the same verb replaces
    /// the earlier one in place.
    pub fn register(&mut self, builtin: Box<dyn Builtin>) {
        let name = builtin.name();
        match self.index.get(name) {
            Some(&slot) => self.builtins[slot] = builtin,
            None => {
                self.index.insert(name, self.builtins.len());
                self.builtins.push(builtin);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.index.get(name).map(|&slot| self.builtins[slot].as_ref())
    }

    /// Builtins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Builtin> {
        self.builtins.iter().map(|b| b.as_ref())
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }
}
