//! Mounted filesystem records.

use serde::{Deserialize, Serialize};

/// One line of the mount table.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct FileSystem {
    /// Mount source, e.g. `/dev/sda1` or `tmpfs`.
    pub dev_name: String,
    /// Mount point.
    pub dir_name: String,
    /// Generic type ("local", "network", ...). Not reported on Linux.
    pub type_name: String,
    /// Kernel filesystem type, e.g. `ext4`.
    pub sys_type_name: String,
    /// Comma-separated mount options.
    pub options: String,
    pub flags: u32,
}

/// Mount table in file order. Bind and overlay mounts may repeat a mount
/// point; nothing is merged or filtered.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct FileSystemList {
    pub list: Vec<FileSystem>,
}

/// Capacity of one mounted filesystem.
///
/// Source: `statvfs(3)`
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct FileSystemUsage {
    /// Bytes.
    pub total: u64,
    pub used: u64,
    pub free: u64,
    /// Bytes available to unprivileged users.
    pub avail: u64,
    /// Inodes.
    pub files: u64,
    pub free_files: u64,
}
