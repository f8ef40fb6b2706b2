//! Per-process records.

use serde::{Deserialize, Serialize};

/// Descriptor usage of one process.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct ProcFdUsage {
    /// Entries in the process's descriptor directory.
    pub open: u64,
    /// `RLIMIT_NOFILE` soft limit. `u64::MAX` means unlimited.
    pub soft_limit: u64,
    /// `RLIMIT_NOFILE` hard limit. `u64::MAX` means unlimited.
    pub hard_limit: u64,
}

/// Scheduler state of a process.
///
/// Source: field 3 of `/proc/[pid]/stat`
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub enum ProcessorState {
    Running,
    Sleeping,
    /// Uninterruptible sleep (`D`).
    DiskSleep,
    Stopped,
    Zombie,
    Dead,
    /// Kernel idle thread (`I`).
    Idle,
    #[default]
    Unknown,
}

impl ProcessorState {
    pub fn from_char(c: char) -> Self {
        match c {
            'R' => ProcessorState::Running,
            'S' => ProcessorState::Sleeping,
            'D' => ProcessorState::DiskSleep,
            'T' | 't' => ProcessorState::Stopped,
            'Z' => ProcessorState::Zombie,
            'X' | 'x' => ProcessorState::Dead,
            'I' => ProcessorState::Idle,
            _ => ProcessorState::Unknown,
        }
    }
}

/// Identity and scheduling fields of a process.
///
/// Source: `/proc/[pid]/stat`
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct ProcState {
    /// Command name (`comm`), may contain spaces and parentheses.
    pub name: String,
    pub state: ProcessorState,
    pub ppid: i32,
    pub pgid: i32,
    pub tty: i32,
    pub priority: i32,
    pub nice: i32,
    /// CPU the process last ran on.
    pub processor: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_char() {
        assert_eq!(ProcessorState::from_char('R'), ProcessorState::Running);
        assert_eq!(ProcessorState::from_char('S'), ProcessorState::Sleeping);
        assert_eq!(ProcessorState::from_char('D'), ProcessorState::DiskSleep);
        assert_eq!(ProcessorState::from_char('t'), ProcessorState::Stopped);
        assert_eq!(ProcessorState::from_char('Z'), ProcessorState::Zombie);
        assert_eq!(ProcessorState::from_char('I'), ProcessorState::Idle);
        assert_eq!(ProcessorState::from_char('?'), ProcessorState::Unknown);
    }
}
