//! Host and terminal queries.
//!
//! Resolution only needs two facts from the machine it runs on: a summary
//! of the host for the run record, and the terminal width for banners.
//! Both come through [`HostProbe`] so tests can pin them.

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Columns assumed when the terminal size cannot be queried.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Summary of the machine a run executes on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub hostname: String,
    pub os: String,
    pub logical_cores: usize,
    pub physical_cores: usize,
    /// Total physical memory in bytes.
    pub total_memory: u64,
}

impl HostInfo {
    /// Whether the CPU exposes more logical than physical cores.
    pub fn hyperthreading(&self) -> bool {
        self.logical_cores > self.physical_cores
    }
}

/// Source of host facts.
pub trait HostProbe {
    fn host_info(&self) -> HostInfo;

    fn terminal_width(&self) -> usize;
}

/// Probes the real machine and terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl HostProbe for SystemProbe {
    fn host_info(&self) -> HostInfo {
        let mut sys = System::new();
        sys.refresh_memory();
        HostInfo {
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            os: System::long_os_version().unwrap_or_else(|| std::env::consts::OS.to_string()),
            logical_cores: num_cpus::get(),
            physical_cores: num_cpus::get_physical(),
            total_memory: sys.total_memory(),
        }
    }

    fn terminal_width(&self) -> usize {
        crossterm::terminal::size()
            .map(|(columns, _)| usize::from(columns))
            .unwrap_or(DEFAULT_TERMINAL_WIDTH)
    }
}

/// Returns fixed answers.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    pub host: HostInfo,
    pub width: usize,
}

impl StaticProbe {
    pub fn new(host: HostInfo, width: usize) -> Self {
        Self { host, width }
    }
}

impl HostProbe for StaticProbe {
    fn host_info(&self) -> HostInfo {
        self.host.clone()
    }

    fn terminal_width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_probe_reports_cores() {
        let info = SystemProbe.host_info();
        assert!(info.logical_cores >= 1);
        assert!(info.physical_cores >= 1);
        assert!(!info.hostname.is_empty());
    }

    #[test]
    fn test_static_probe() {
        let host = HostInfo {
            hostname: "node01".to_string(),
            logical_cores: 16,
            physical_cores: 8,
            ..HostInfo::default()
        };
        let probe = StaticProbe::new(host, 120);
        assert_eq!(probe.terminal_width(), 120);
        assert!(probe.host_info().hyperthreading());
    }
}
