//! Collection of built-in commands for cmdsh.
//!
//! Each module holds one command as a [`cmdsh_core::Builtin`]
//! implementation; [`standard_registry`] installs the full set.

pub mod alias;
pub mod cd;
pub mod clear;
pub mod copy;
pub mod create;
pub mod del;
pub mod dir;
pub mod exit;
pub mod help;
pub mod history;
pub mod mkdir;
pub mod move_cmd;
pub mod registry;
pub mod rename;
pub mod sysinfo;
pub mod r#type;
pub mod unalias;

pub use registry::{register_standard_builtins, standard_registry};
