//! Source paths used by the accessors.
//!
//! Every `Sigar` instance owns one `ProbeConfig`. Tests point it at a
//! fixture tree; production code uses the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default mount point of the proc filesystem.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Default mount table.
pub const DEFAULT_MOUNT_TABLE: &str = "/etc/mtab";

/// Default per-process descriptor directory on systems without procfs.
pub const DEFAULT_DEV_FD: &str = "/dev/fd";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Root of the proc filesystem.
    pub proc_root: PathBuf,
    /// Mount table read by `file_system_list`.
    pub mount_table: PathBuf,
    /// Directory listing the caller's own open descriptors.
    pub dev_fd: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            mount_table: PathBuf::from(DEFAULT_MOUNT_TABLE),
            dev_fd: PathBuf::from(DEFAULT_DEV_FD),
        }
    }
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proc_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.proc_root = path.into();
        self
    }

    pub fn with_mount_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.mount_table = path.into();
        self
    }

    pub fn with_dev_fd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dev_fd = path.into();
        self
    }

    /// Path of a system-wide file below the proc root, e.g. `meminfo`.
    pub fn proc_file(&self, name: impl AsRef<Path>) -> PathBuf {
        self.proc_root.join(name)
    }

    /// Path of a per-process file, e.g. `/proc/<pid>/limits`.
    pub fn pid_file(&self, pid: u32, name: impl AsRef<Path>) -> PathBuf {
        self.proc_root.join(pid.to_string()).join(name)
    }
}
