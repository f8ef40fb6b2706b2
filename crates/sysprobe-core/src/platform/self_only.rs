//! Unix without procfs (macOS, the BSDs): only the calling process can be
//! inspected, through `/dev/fd` and `getrlimit(2)`.

use std::path::Path;

use tracing::debug;

use super::Sigar;
use crate::collector::procfs::fd::count_dir_entries;
use crate::collector::syscall;
use crate::collector::traits::{FileSystem, RealFs};
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::model::{FileSystemUsage, ProcFdUsage, Uptime};

#[derive(Debug, Clone)]
pub struct SelfOnlySigar<F: FileSystem = RealFs> {
    fs: F,
    config: ProbeConfig,
    platform: String,
}

impl<F: FileSystem> SelfOnlySigar<F> {
    pub fn new(fs: F, config: ProbeConfig) -> Self {
        Self::with_platform(fs, config, std::env::consts::OS)
    }

    pub fn with_platform(fs: F, config: ProbeConfig, platform: impl Into<String>) -> Self {
        Self {
            fs,
            config,
            platform: platform.into(),
        }
    }
}

impl<F: FileSystem> Sigar for SelfOnlySigar<F> {
    fn platform(&self) -> &str {
        &self.platform
    }

    fn proc_fd_usage(&self, pid: u32) -> Result<ProcFdUsage> {
        if pid != std::process::id() {
            debug!(pid, "descriptor usage of other processes is unavailable");
            return Err(self.not_implemented());
        }
        let open = count_dir_entries(&self.fs, &self.config.dev_fd)?;
        let (soft_limit, hard_limit) = syscall::own_open_files_limit()?;
        Ok(ProcFdUsage {
            open,
            soft_limit,
            hard_limit,
        })
    }

    fn file_system_usage(&self, path: &Path) -> Result<FileSystemUsage> {
        syscall::get_file_system_usage(path)
    }

    fn uptime(&self) -> Result<Uptime> {
        syscall::get_uptime()
    }
}
