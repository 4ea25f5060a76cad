//! `sysinfo` builtin - report host CPU, memory, storage and display facts.
//!
//! Facts the host could not provide are simply left out of the report.

use cmdsh_core::{Arity, Builtin, Context, ExecutionResult, ShellResult};
use cmdsh_hal::SystemInfo;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const GIB_U64: u64 = 1024 * 1024 * 1024;

pub struct SysinfoCommand;

impl Builtin for SysinfoCommand {
    fn name(&self) -> &'static str {
        "sysinfo"
    }

    fn synopsis(&self) -> &'static str {
        "Display system information"
    }

    fn usage(&self) -> &'static str {
        "sysinfo"
    }

    fn arity(&self) -> Arity {
        Arity::NONE
    }

    fn invoke(&self, ctx: &mut Context<'_>) -> ShellResult<ExecutionResult> {
        let info = ctx.system.snapshot();
        for line in render(&info) {
            ctx.console.line(&line)?;
        }
        Ok(ExecutionResult::success(0))
    }
}

/// Report lines for `info`, in display order.
pub fn render(info: &SystemInfo) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(arch) = &info.architecture {
        lines.push(format!("Processor Architecture: {arch}"));
    }
    if let Some(count) = info.logical_processors {
        lines.push(format!("Number of Processors: {count}"));
    }
    if let Some(mem) = info.memory {
        lines.push(format!("Total RAM: {:.2} GB", mem.total as f64 / GIB));
        lines.push(format!("Available RAM: {:.2} GB", mem.available as f64 / GIB));
    }
    if let Some(disk) = info.storage {
        lines.push(format!("Total Storage: {} GB", disk.total / GIB_U64));
        lines.push(format!("Free Storage: {} GB", disk.free / GIB_U64));
    }
    if !info.display_adapters.is_empty() {
        lines.push("Graphics Cards:".to_string());
        for (i, name) in info.display_adapters.iter().take(2).enumerate() {
            lines.push(format!("  {}. {name}", i + 1));
        }
    }
    if let Some(mode) = info.display_mode {
        lines.push(format!("Display Resolution: {}x{}", mode.width, mode.height));
        if let Some(hz) = mode.refresh_hz {
            lines.push(format!("Refresh Rate: {hz} Hz"));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdsh_hal::{DisplayMode, MemoryInfo, StorageInfo};

    #[test]
    fn full_report() {
        let info = SystemInfo {
            architecture: Some("x64".into()),
            logical_processors: Some(8),
            memory: Some(MemoryInfo { total: 16 * GIB_U64, available: 8 * GIB_U64 + GIB_U64 / 2 }),
            storage: Some(StorageInfo { total: 512 * GIB_U64 + 123, free: 100 * GIB_U64 }),
            display_adapters: vec!["Adapter One".into(), "Adapter Two".into(), "Adapter Three".into()],
            display_mode: Some(DisplayMode { width: 2560, height: 1440, refresh_hz: Some(144) }),
        };

        assert_eq!(
            render(&info),
            vec![
                "Processor Architecture: x64",
                "Number of Processors: 8",
                "Total RAM: 16.00 GB",
                "Available RAM: 8.50 GB",
                "Total Storage: 512 GB",
                "Free Storage: 100 GB",
                "Graphics Cards:",
                "  1. Adapter One",
                "  2. Adapter Two",
                "Display Resolution: 2560x1440",
                "Refresh Rate: 144 Hz",
            ]
        );
    }

    #[test]
    fn absent_facts_are_omitted() {
        let info = SystemInfo {
            logical_processors: Some(2),
            display_mode: Some(DisplayMode { width: 800, height: 600, refresh_hz: None }),
            ..Default::default()
        };
        assert_eq!(render(&info), vec!["Number of Processors: 2", "Display Resolution: 800x600"]);
        assert!(render(&SystemInfo::default()).is_empty());
    }
}
