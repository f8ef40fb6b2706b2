//! Linux: everything from procfs, plus `sysinfo(2)` and `statvfs(3)`.

use std::io;
use std::path::Path;

use tracing::debug;

use super::Sigar;
use crate::collector::procfs;
use crate::collector::syscall;
use crate::collector::traits::{FileSystem, RealFs};
use crate::config::ProbeConfig;
use crate::error::{Error, Result};
use crate::model::{
    Cpu, CpuList, FdUsage, FileSystemList, FileSystemUsage, HugeTlbPages, LoadAverage, Mem,
    ProcFdUsage, ProcState, Swap, Uptime,
};

/// Reads metrics from a proc filesystem through `F`.
///
/// With [`RealFs`] this is the production accessor; with
/// [`MockFs`](crate::collector::MockFs) it reads fixtures.
#[derive(Debug, Clone)]
pub struct LinuxSigar<F: FileSystem = RealFs> {
    fs: F,
    config: ProbeConfig,
}

impl<F: FileSystem> LinuxSigar<F> {
    pub fn new(fs: F, config: ProbeConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Boot time in seconds since the epoch, from the `btime` line.
    pub fn boot_time(&self) -> Result<Option<u64>> {
        procfs::get_boot_time(&self.fs, &self.config)
    }
}

impl LinuxSigar<RealFs> {
    /// Accessor over the real `/proc` with default paths.
    pub fn real() -> Self {
        Self::new(RealFs::new(), ProbeConfig::default())
    }
}

impl<F: FileSystem> Sigar for LinuxSigar<F> {
    fn platform(&self) -> &str {
        "linux"
    }

    fn mem(&self) -> Result<Mem> {
        procfs::get_mem(&self.fs, &self.config)
    }

    fn swap(&self) -> Result<Swap> {
        procfs::get_swap(&self.fs, &self.config)
    }

    fn cpu(&self) -> Result<Cpu> {
        procfs::get_cpu(&self.fs, &self.config)
    }

    fn cpu_list(&self) -> Result<CpuList> {
        procfs::get_cpu_list(&self.fs, &self.config)
    }

    fn fd_usage(&self) -> Result<FdUsage> {
        procfs::get_fd_usage(&self.fs, &self.config)
    }

    /// Reading another user's `limits` or `fd` needs privileges; a
    /// permission error for a foreign pid is reported as `NotImplemented`.
    fn proc_fd_usage(&self, pid: u32) -> Result<ProcFdUsage> {
        match procfs::get_proc_fd_usage(&self.fs, &self.config, pid) {
            Err(Error::Io(e))
                if e.kind() == io::ErrorKind::PermissionDenied && pid != std::process::id() =>
            {
                debug!(pid, error = %e, "cross-process descriptor introspection denied");
                Err(self.not_implemented())
            }
            other => other,
        }
    }

    fn proc_state(&self, pid: u32) -> Result<ProcState> {
        procfs::get_proc_state(&self.fs, &self.config, pid)
    }

    fn file_system_list(&self) -> Result<FileSystemList> {
        procfs::get_file_system_list(&self.fs, &self.config)
    }

    fn file_system_usage(&self, path: &Path) -> Result<FileSystemUsage> {
        syscall::get_file_system_usage(path)
    }

    fn huge_tlb_pages(&self) -> Result<HugeTlbPages> {
        procfs::get_huge_tlb_pages(&self.fs, &self.config)
    }

    fn load_average(&self) -> Result<LoadAverage> {
        procfs::get_load_average(&self.fs, &self.config)
    }

    fn uptime(&self) -> Result<Uptime> {
        syscall::get_uptime()
    }
}
