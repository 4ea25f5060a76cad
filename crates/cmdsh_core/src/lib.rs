//! cmdsh Core Library
//!
//! Session state, command-line splitting, the [`Builtin`] interface and the
//! [`Dispatcher`] that ties them together. Concrete commands live in the
//! `cmdsh_builtins` crate; OS access goes through `cmdsh_hal`.

pub mod config;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod logging;
pub mod parser;
pub mod session;

// Re-export commonly used types and functions
pub use config::ShellConfig;
pub use console::{CapturedOutput, Console};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::{ErrorKind, IoErrorKind, RuntimeErrorKind, ShellError, ShellResult};
pub use executor::{Arity, Builtin, BuiltinRegistry, Context, ExecutionResult};
pub use logging::ErrorLog;
pub use parser::CommandLine;
pub use session::Session;
