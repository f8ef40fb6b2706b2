//! One `Sigar` implementation per platform family.
//!
//! Every metric method has a default body returning
//! [`Error::NotImplemented`], so a variant only overrides what its platform
//! can produce. [`native`] picks the variant for the running OS.

mod linux;
mod self_only;
mod unsupported;

use std::path::Path;

use tracing::{debug, warn};

use crate::collector::traits::{FileSystem, RealFs};
use crate::config::ProbeConfig;
use crate::error::{Error, Result};
use crate::model::{
    Cpu, CpuList, FdUsage, FileSystemList, FileSystemUsage, HugeTlbPages, LoadAverage, Mem,
    ProcFdUsage, ProcState, Swap, Uptime,
};

pub use linux::LinuxSigar;
pub use self_only::SelfOnlySigar;
pub use unsupported::Unsupported;

/// Point-in-time metric accessors for one platform.
///
/// Calls are independent and stateless; implementations are safe to share
/// between threads.
pub trait Sigar: Send + Sync {
    /// Platform name carried by `NotImplemented` errors, e.g. `"linux"`.
    fn platform(&self) -> &str;

    fn not_implemented(&self) -> Error {
        Error::not_implemented(self.platform())
    }

    fn mem(&self) -> Result<Mem> {
        Err(self.not_implemented())
    }

    fn swap(&self) -> Result<Swap> {
        Err(self.not_implemented())
    }

    /// Aggregate CPU counters.
    fn cpu(&self) -> Result<Cpu> {
        Err(self.not_implemented())
    }

    /// Per-CPU counters.
    fn cpu_list(&self) -> Result<CpuList> {
        Err(self.not_implemented())
    }

    /// System-wide descriptor counters.
    fn fd_usage(&self) -> Result<FdUsage> {
        Err(self.not_implemented())
    }

    /// Descriptor usage of process `pid`.
    fn proc_fd_usage(&self, _pid: u32) -> Result<ProcFdUsage> {
        Err(self.not_implemented())
    }

    fn proc_state(&self, _pid: u32) -> Result<ProcState> {
        Err(self.not_implemented())
    }

    fn file_system_list(&self) -> Result<FileSystemList> {
        Err(self.not_implemented())
    }

    /// Capacity of the filesystem mounted at `path`.
    fn file_system_usage(&self, _path: &Path) -> Result<FileSystemUsage> {
        Err(self.not_implemented())
    }

    fn huge_tlb_pages(&self) -> Result<HugeTlbPages> {
        Err(self.not_implemented())
    }

    fn load_average(&self) -> Result<LoadAverage> {
        Err(self.not_implemented())
    }

    fn uptime(&self) -> Result<Uptime> {
        Err(self.not_implemented())
    }
}

/// Selects the `Sigar` variant for the running operating system.
///
/// Linux without a readable proc root falls back to [`Unsupported`].
pub fn native(config: ProbeConfig) -> Box<dyn Sigar> {
    let os = std::env::consts::OS;
    match os {
        "linux" | "android" => {
            let fs = RealFs::new();
            if fs.exists(&config.proc_root) {
                debug!(proc_root = %config.proc_root.display(), "using procfs");
                Box::new(LinuxSigar::new(fs, config))
            } else {
                warn!(
                    proc_root = %config.proc_root.display(),
                    "proc filesystem not found, metrics unavailable"
                );
                Box::new(Unsupported::new(os))
            }
        }
        _ if cfg!(unix) => Box::new(SelfOnlySigar::new(RealFs::new(), config)),
        _ => Box::new(Unsupported::new(os)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_native_linux() {
        let sigar = native(ProbeConfig::default());
        assert_eq!(sigar.platform(), "linux");
        assert!(sigar.mem().unwrap().total > 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_native_without_proc_root() {
        let config = ProbeConfig::default().with_proc_root("/nonexistent/proc/12345");
        let sigar = native(config);
        assert!(sigar.mem().unwrap_err().is_not_implemented());
    }

    #[test]
    fn test_trait_object_is_shareable() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Sigar>();
    }
}
