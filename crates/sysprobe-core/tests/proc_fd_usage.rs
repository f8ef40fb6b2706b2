//! Opening and closing a file moves this process's descriptor count by one.
//!
//! Lives in its own test binary with a single test, so no sibling test
//! thread opens descriptors while the count is compared.

#![cfg(unix)]

use std::fs::File;

use sysprobe_core::{ProbeConfig, native};

#[test]
fn open_and_close_track_descriptor_count() {
    let sigar = native(ProbeConfig::default());
    let pid = std::process::id();

    let before = sigar.proc_fd_usage(pid).unwrap();
    assert!(before.soft_limit <= before.hard_limit);

    let file = File::open(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).unwrap();
    let during = sigar.proc_fd_usage(pid).unwrap();
    assert_eq!(during.open, before.open + 1);

    drop(file);
    let after = sigar.proc_fd_usage(pid).unwrap();
    assert_eq!(after.open, before.open);

    // No process can have this pid; the answer is a gone-process I/O error
    // or, where other processes cannot be inspected, NotImplemented.
    let err = sigar.proc_fd_usage(u32::MAX - 1).unwrap_err();
    assert!(err.is_not_implemented() || err.is_process_gone());
}
