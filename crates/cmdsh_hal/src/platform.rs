//! Host inspection
//!
//! The shell only ever asks the host for a [`SystemInfo`] snapshot, through
//! the [`SystemInfoProvider`] capability. [`HostSystemInfo`] is the real
//! implementation; the display probing underneath it is selected per target
//! platform. Every field is best-effort and left empty when the host cannot
//! answer.

use std::env;
use std::path::{Path, PathBuf};

use sysinfo::{DiskExt, System, SystemExt};
use tracing::debug;

/// Physical memory, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub total: u64,
    pub available: u64,
}

/// Capacity of the default volume, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageInfo {
    pub total: u64,
    pub free: u64,
}

/// Mode of the primary display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub refresh_hz: Option<u32>,
}

/// Plain snapshot of host facts; absent facts stay `None` / empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInfo {
    pub architecture: Option<String>,
    pub logical_processors: Option<usize>,
    pub memory: Option<MemoryInfo>,
    pub storage: Option<StorageInfo>,
    /// At most two adapter names.
    pub display_adapters: Vec<String>,
    pub display_mode: Option<DisplayMode>,
}

/// Source of [`SystemInfo`] snapshots.
pub trait SystemInfoProvider {
    fn snapshot(&self) -> SystemInfo;
}

/// Queries the machine the shell is running on.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSystemInfo;

impl HostSystemInfo {
    pub fn new() -> Self {
        Self
    }
}

impl SystemInfoProvider for HostSystemInfo {
    fn snapshot(&self) -> SystemInfo {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_disks_list();

        let memory = match sys.total_memory() {
            0 => None,
            total => Some(MemoryInfo { total, available: sys.available_memory() }),
        };

        let cwd = env::current_dir().ok();
        let volumes: Vec<(PathBuf, StorageInfo)> = sys
            .disks()
            .iter()
            .map(|d| {
                (
                    d.mount_point().to_path_buf(),
                    StorageInfo { total: d.total_space(), free: d.available_space() },
                )
            })
            .collect();
        let storage = default_volume(cwd.as_deref(), &volumes);

        let (display_adapters, display_mode) = display::probe();
        debug!(adapters = display_adapters.len(), has_mode = display_mode.is_some(), "display probe finished");

        SystemInfo {
            architecture: Some(architecture_label(env::consts::ARCH)),
            logical_processors: Some(num_cpus::get()).filter(|n| *n > 0),
            memory,
            storage,
            display_adapters,
            display_mode,
        }
    }
}

/// Provider returning a fixed snapshot; handy for hosts without probing and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSystemInfo(pub SystemInfo);

impl SystemInfoProvider for StaticSystemInfo {
    fn snapshot(&self) -> SystemInfo {
        self.0.clone()
    }
}

/// Windows-style names for the common architectures.
pub fn architecture_label(arch: &str) -> String {
    match arch {
        "x86_64" => "x64".to_string(),
        "x86" => "x86".to_string(),
        "aarch64" => "ARM64".to_string(),
        "arm" => "ARM".to_string(),
        other => other.to_string(),
    }
}

/// Pick the volume whose mount point is the longest prefix of `cwd`,
/// falling back to the first volume listed.
fn default_volume(cwd: Option<&Path>, volumes: &[(PathBuf, StorageInfo)]) -> Option<StorageInfo> {
    let by_prefix = cwd.and_then(|cwd| {
        volumes
            .iter()
            .filter(|(mount, _)| cwd.starts_with(mount))
            .max_by_key(|(mount, _)| mount.as_os_str().len())
    });
    by_prefix.or_else(|| volumes.first()).map(|(_, info)| *info)
}

#[cfg(windows)]
mod display {
    use super::DisplayMode;
    use windows_sys::Win32::Graphics::Gdi::{
        EnumDisplayDevicesW, EnumDisplaySettingsW, DEVMODEW, DISPLAY_DEVICEW, ENUM_CURRENT_SETTINGS,
    };

    fn wide_to_string(buf: &[u16]) -> String {
        let end = buf.iter().position(|c| *c == 0).unwrap_or(buf.len());
        String::from_utf16_lossy(&buf[..end])
    }

    pub(super) fn probe() -> (Vec<String>, Option<DisplayMode>) {
        let mut adapters: Vec<String> = Vec::new();
        let mut index = 0u32;
        loop {
            // SAFETY: DISPLAY_DEVICEW is plain data; cb is set before the call.
            let mut device: DISPLAY_DEVICEW = unsafe { std::mem::zeroed() };
            device.cb = std::mem::size_of::<DISPLAY_DEVICEW>() as u32;
            let found = unsafe { EnumDisplayDevicesW(std::ptr::null(), index, &mut device, 0) };
            if found == 0 {
                break;
            }
            let name = wide_to_string(&device.DeviceString);
            if !name.is_empty() && !adapters.contains(&name) && adapters.len() < 2 {
                adapters.push(name);
            }
            index += 1;
        }

        // SAFETY: DEVMODEW is plain data; dmSize is set before the call.
        let mut mode: DEVMODEW = unsafe { std::mem::zeroed() };
        mode.dmSize = std::mem::size_of::<DEVMODEW>() as u16;
        let ok = unsafe { EnumDisplaySettingsW(std::ptr::null(), ENUM_CURRENT_SETTINGS, &mut mode) };
        let display_mode = (ok != 0 && mode.dmPelsWidth > 0).then(|| DisplayMode {
            width: mode.dmPelsWidth,
            height: mode.dmPelsHeight,
            refresh_hz: Some(mode.dmDisplayFrequency).filter(|hz| *hz > 1),
        });

        (adapters, display_mode)
    }
}

#[cfg(target_os = "linux")]
mod display {
    use super::DisplayMode;
    use std::fs;
    use std::path::Path;

    const DRM_ROOT: &str = "/sys/class/drm";

    pub(super) fn probe() -> (Vec<String>, Option<DisplayMode>) {
        let Ok(entries) = fs::read_dir(DRM_ROOT) else {
            return (Vec::new(), None);
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        let mut adapters = Vec::new();
        let mut mode = None;
        for name in &names {
            let node = Path::new(DRM_ROOT).join(name);
            if name.contains('-') {
                if mode.is_none() && is_connected(&node) {
                    mode = first_mode(&node);
                }
            } else if name.starts_with("card") && adapters.len() < 2 {
                if let Some(driver) = driver_name(&node) {
                    adapters.push(driver);
                }
            }
        }
        (adapters, mode)
    }

    fn is_connected(connector: &Path) -> bool {
        fs::read_to_string(connector.join("status"))
            .map(|s| s.trim() == "connected")
            .unwrap_or(false)
    }

    fn first_mode(connector: &Path) -> Option<DisplayMode> {
        let modes = fs::read_to_string(connector.join("modes")).ok()?;
        parse_mode(modes.lines().next()?)
    }

    fn driver_name(card: &Path) -> Option<String> {
        let uevent = fs::read_to_string(card.join("device/uevent")).ok()?;
        uevent
            .lines()
            .find_map(|l| l.strip_prefix("DRIVER="))
            .map(str::to_string)
    }

    pub(super) fn parse_mode(line: &str) -> Option<DisplayMode> {
        let (w, h) = line.trim().split_once('x')?;
        // Interlaced modes carry a trailing 'i'.
        let h = h.trim_end_matches(|c: char| !c.is_ascii_digit());
        Some(DisplayMode { width: w.parse().ok()?, height: h.parse().ok()?, refresh_hz: None })
    }
}

#[cfg(not(any(windows, target_os = "linux")))]
mod display {
    use super::DisplayMode;

    pub(super) fn probe() -> (Vec<String>, Option<DisplayMode>) {
        (Vec::new(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_labels() {
        assert_eq!(architecture_label("x86_64"), "x64");
        assert_eq!(architecture_label("aarch64"), "ARM64");
        assert_eq!(architecture_label("riscv64"), "riscv64");
    }

    #[test]
    fn default_volume_prefers_longest_mount_prefix() {
        let root = StorageInfo { total: 100, free: 10 };
        let home = StorageInfo { total: 500, free: 250 };
        let volumes = vec![(PathBuf::from("/"), root), (PathBuf::from("/home"), home)];

        assert_eq!(default_volume(Some(Path::new("/home/user")), &volumes), Some(home));
        assert_eq!(default_volume(Some(Path::new("/tmp")), &volumes), Some(root));
        assert_eq!(default_volume(None, &volumes), Some(root));
        assert_eq!(default_volume(None, &[]), None);
    }

    #[test]
    fn static_provider_returns_its_snapshot() {
        let info = SystemInfo { logical_processors: Some(4), ..Default::default() };
        assert_eq!(StaticSystemInfo(info.clone()).snapshot(), info);
    }

    #[test]
    fn host_snapshot_reports_architecture() {
        let info = HostSystemInfo::new().snapshot();
        assert!(info.architecture.is_some());
        assert!(info.display_adapters.len() <= 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn parses_drm_modes() {
        assert_eq!(
            display::parse_mode("1920x1080"),
            Some(DisplayMode { width: 1920, height: 1080, refresh_hz: None })
        );
        assert_eq!(display::parse_mode("1920x1080i").map(|m| m.height), Some(1080));
        assert_eq!(display::parse_mode("garbage"), None);
    }
}
