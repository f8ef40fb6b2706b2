//! sysprobe-core: point-in-time host metrics.
//!
//! Provides:
//! - `collector`: per-metric accessors over `/proc` and single system calls
//! - `platform`: the `Sigar` capability gate, one variant per OS family
//! - `model`: serializable metric records
//! - `config`: source paths (`/proc`, mount table, `/dev/fd`)
//! - `error`: `Error::Io` pass-through and `Error::NotImplemented`
//!
//! ```no_run
//! use sysprobe_core::{ProbeConfig, native};
//!
//! let sigar = native(ProbeConfig::default());
//! match sigar.mem() {
//!     Ok(mem) => println!("used {} of {}", mem.used, mem.total),
//!     Err(e) if e.is_not_implemented() => println!("memory: {e}"),
//!     Err(e) => eprintln!("memory: {e}"),
//! }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;

pub use config::ProbeConfig;
pub use error::{Error, Result};
pub use model::{
    Cpu, CpuList, FdUsage, FileSystem, FileSystemList, FileSystemUsage, HugeTlbPages, LoadAverage,
    Mem, ProcFdUsage, ProcState, ProcessorState, Swap, Uptime,
};
pub use platform::{LinuxSigar, SelfOnlySigar, Sigar, Unsupported, native};
