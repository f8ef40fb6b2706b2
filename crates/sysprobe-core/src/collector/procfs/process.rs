//! Process identity and scheduling state from `/proc/[pid]/stat`.

use crate::collector::procfs::fields::Columns;
use crate::collector::traits::FileSystem;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::model::{ProcState, ProcessorState};

/// Parses `/proc/[pid]/stat` content.
///
/// The format is tricky because the comm field can contain spaces and
/// parentheses: `pid (comm) state ppid pgrp session tty_nr tpgid ...`. The
/// name is everything between the first `(` and the last `)`.
///
/// A truncated line yields default values for the missing fields.
pub fn parse_proc_stat(content: &str) -> ProcState {
    let content = content.trim();

    let (name, remaining) = match (content.find('('), content.rfind(')')) {
        (Some(open), Some(close)) if close > open => {
            (&content[open + 1..close], &content[close + 1..])
        }
        (Some(open), _) => (&content[open + 1..], ""),
        _ => ("", ""),
    };

    // Columns after the name: state(0) ppid(1) pgrp(2) session(3) tty_nr(4)
    // tpgid(5) ... priority(15) nice(16) ... processor(36)
    let cols = Columns::new(remaining);

    ProcState {
        name: name.to_string(),
        state: cols
            .get(0)
            .and_then(|s| s.chars().next())
            .map(ProcessorState::from_char)
            .unwrap_or_default(),
        ppid: cols.i32_at(1).unwrap_or(0),
        pgid: cols.i32_at(2).unwrap_or(0),
        tty: cols.i32_at(4).unwrap_or(0),
        priority: cols.i32_at(15).unwrap_or(0),
        nice: cols.i32_at(16).unwrap_or(0),
        processor: cols.i32_at(36).unwrap_or(0),
    }
}

/// Reads `<proc>/<pid>/stat`.
pub fn get_proc_state<F: FileSystem + ?Sized>(
    fs: &F,
    config: &ProbeConfig,
    pid: u32,
) -> Result<ProcState> {
    let content = fs.read_to_string(&config.pid_file(pid, "stat"))?;
    Ok(parse_proc_stat(&content))
}
