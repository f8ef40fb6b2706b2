//! Line-oriented reader shared by every pseudo-file accessor.

use std::io::{self, BufRead};
use std::ops::ControlFlow;
use std::path::Path;

use tracing::debug;

use super::fields::{KvTable, parse_kv_line};
use crate::collector::traits::FileSystem;

/// Streams `path` line by line into `visit`.
///
/// Reading stops at the first `ControlFlow::Break` or at end of file. The
/// line terminator (`\n` or `\r\n`) is stripped and invalid UTF-8 is
/// replaced with U+FFFD. An empty file never calls `visit`. I/O errors, including a file vanishing mid-read, are returned
/// unchanged.
pub fn read_lines<F, V>(fs: &F, path: &Path, mut visit: V) -> io::Result<()>
where
    F: FileSystem + ?Sized,
    V: FnMut(&str) -> ControlFlow<()>,
{
    debug!(path = %path.display(), "reading");
    let mut reader = fs.open(path)?;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        // Mount points and comm names are raw bytes, not necessarily UTF-8
        let line = String::from_utf8_lossy(raw);
        if visit(&line).is_break() {
            return Ok(());
        }
    }
}

/// Reads a `Key: value [kB]` file such as `/proc/meminfo` into a table.
///
/// Values with a `kB` unit are converted to bytes. Lines without a colon
/// and keys with unparsable values are left out of the table.
pub fn read_table<F>(fs: &F, path: &Path) -> io::Result<KvTable>
where
    F: FileSystem + ?Sized,
{
    let mut table = KvTable::new();
    read_lines(fs, path, |line| {
        if let Some((key, Some(value))) = parse_kv_line(line) {
            table.insert(key, value);
        }
        ControlFlow::Continue(())
    })?;
    Ok(table)
}
