//! cmdsh Hardware Abstraction Layer (HAL)
//!
//! Thin, stateless wrappers over the OS calls the shell needs: filesystem
//! mutations and reads in [`fs`], host inspection in [`platform`]. Every
//! failure is returned as a classified [`HalError`]; nothing here prints.

pub mod error;
pub mod fs;
pub mod platform;

pub use error::{FsFault, HalError, HalResult};
pub use fs::{DirEntryInfo, FileSystem, Removed};
pub use platform::{
    DisplayMode, HostSystemInfo, MemoryInfo, StaticSystemInfo, StorageInfo, SystemInfo,
    SystemInfoProvider,
};
