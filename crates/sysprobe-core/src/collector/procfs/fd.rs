//! File descriptor accounting: system-wide from `/proc/sys/fs/file-nr`,
//! per-process from `/proc/[pid]/limits` and `/proc/[pid]/fd`.

use std::io;
use std::ops::ControlFlow;
use std::path::Path;

use tracing::trace;

use crate::collector::procfs::fields::{Columns, parse_limit};
use crate::collector::procfs::table::read_lines;
use crate::collector::traits::FileSystem;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::model::{FdUsage, ProcFdUsage};

const OPEN_FILES_PREFIX: &str = "Max open files";

/// Parses the single line of `file-nr`: `allocated unused max`.
///
/// Any other shape yields zeroed counters.
pub fn parse_file_nr(line: &str) -> FdUsage {
    let cols = Columns::new(line);
    if cols.len() != 3 {
        trace!(line, "unexpected file-nr shape");
        return FdUsage::default();
    }
    FdUsage {
        open: cols.u64_at(0).unwrap_or(0),
        unused: cols.u64_at(1).unwrap_or(0),
        max: cols.u64_at(2).unwrap_or(0),
    }
}

/// Parses the `Max open files` row of `/proc/[pid]/limits` into
/// `(soft, hard)`.
///
/// The row must split into exactly six tokens:
/// `Max open files <soft> <hard> files`. `None` for any other row.
pub fn parse_open_files_limit(line: &str) -> Option<(u64, u64)> {
    if !line.starts_with(OPEN_FILES_PREFIX) {
        return None;
    }
    let cols = Columns::new(line);
    if cols.len() != 6 {
        return None;
    }
    Some((
        cols.get(3).and_then(parse_limit).unwrap_or(0),
        cols.get(4).and_then(parse_limit).unwrap_or(0),
    ))
}

/// Reads system-wide descriptor counters from `<proc>/sys/fs/file-nr`.
pub fn get_fd_usage<F: FileSystem + ?Sized>(fs: &F, config: &ProbeConfig) -> Result<FdUsage> {
    let mut usage = FdUsage::default();
    read_lines(fs, &config.proc_file("sys/fs/file-nr"), |line| {
        usage = parse_file_nr(line);
        ControlFlow::Break(())
    })?;
    Ok(usage)
}

/// Counts the entries of a directory, e.g. `/proc/[pid]/fd`.
pub fn count_dir_entries<F: FileSystem + ?Sized>(fs: &F, dir: &Path) -> io::Result<u64> {
    Ok(fs.read_dir(dir)?.len() as u64)
}

/// Reads descriptor limits and the open count of process `pid`.
///
/// A limits file without a well-formed `Max open files` row leaves both
/// limits at zero. Errors from either source are returned unchanged; a
/// `NotFound` means the process exited.
pub fn get_proc_fd_usage<F: FileSystem + ?Sized>(
    fs: &F,
    config: &ProbeConfig,
    pid: u32,
) -> Result<ProcFdUsage> {
    let mut usage = ProcFdUsage::default();

    read_lines(fs, &config.pid_file(pid, "limits"), |line| {
        if !line.starts_with(OPEN_FILES_PREFIX) {
            return ControlFlow::Continue(());
        }
        if let Some((soft, hard)) = parse_open_files_limit(line) {
            usage.soft_limit = soft;
            usage.hard_limit = hard;
        }
        ControlFlow::Break(())
    })?;

    usage.open = count_dir_entries(fs, &config.pid_file(pid, "fd"))?;
    Ok(usage)
}
