//! Mount table parsing (`/etc/mtab`, `/proc/mounts`, `/proc/self/mounts`).

use std::borrow::Cow;
use std::ops::ControlFlow;

use tracing::trace;

use crate::collector::procfs::fields::Columns;
use crate::collector::procfs::table::read_lines;
use crate::collector::traits::FileSystem as Fs;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::model::{FileSystem, FileSystemList};

/// Decodes the octal escapes the kernel uses for whitespace and backslashes
/// in mount sources and mount points (`\040` is a space).
///
/// Records keep the raw tokens; apply this to `dev_name` or `dir_name` when a
/// usable path is needed. Malformed escapes are kept as-is.
pub fn decode_octal_escapes(field: &str) -> Cow<'_, str> {
    if !field.contains('\\') {
        return Cow::Borrowed(field);
    }

    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\'
            && i + 3 < bytes.len()
            && bytes[i + 1..=i + 3].iter().all(|b| (b'0'..=b'7').contains(b))
        {
            let value = (bytes[i + 1] - b'0') as u32 * 64
                + (bytes[i + 2] - b'0') as u32 * 8
                + (bytes[i + 3] - b'0') as u32;
            if let Ok(byte) = u8::try_from(value) {
                out.push(byte);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

/// Parses one mount table line.
///
/// Format: `device mount_point fstype options dump pass`
///
/// Device and mount point are mandatory and stored exactly as the first two
/// tokens; `None` for shorter lines. Missing type or options become empty
/// strings.
pub fn parse_mount_line(line: &str) -> Option<FileSystem> {
    let cols = Columns::new(line);
    let (Some(dev), Some(dir)) = (cols.get(0), cols.get(1)) else {
        return None;
    };

    Some(FileSystem {
        dev_name: dev.to_string(),
        dir_name: dir.to_string(),
        type_name: String::new(),
        sys_type_name: cols.get(2).unwrap_or_default().to_string(),
        options: cols.get(3).unwrap_or_default().to_string(),
        flags: 0,
    })
}

/// Reads the configured mount table. One record per line, in file order;
/// duplicates and pseudo filesystems are kept.
pub fn get_file_system_list<F: Fs + ?Sized>(fs: &F, config: &ProbeConfig) -> Result<FileSystemList> {
    let mut list = Vec::new();
    read_lines(fs, &config.mount_table, |line| {
        match parse_mount_line(line) {
            Some(entry) => list.push(entry),
            None if !line.trim().is_empty() => trace!(line, "skipping short mount line"),
            None => {}
        }
        ControlFlow::Continue(())
    })?;
    Ok(FileSystemList { list })
}
