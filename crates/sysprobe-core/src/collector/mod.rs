//! Metric accessors and the filesystem seam they read through.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         procfs::*                            │
//! │  memory  cpu  fd  mounts  hugepages  load  process           │
//! │                     │                                        │
//! │          ┌──────────▼──────────┐    ┌──────────────────────┐ │
//! │          │ table (read_lines)  │    │ syscall              │ │
//! │          │ fields (Columns,    │    │ sysinfo, statvfs,    │ │
//! │          │         KvTable)    │    │ getrlimit            │ │
//! │          └──────────┬──────────┘    └──────────────────────┘ │
//! │              ┌──────▼──────┐                                 │
//! │              │  FileSystem │ (trait)                         │
//! │              └──────┬──────┘                                 │
//! └─────────────────────┼────────────────────────────────────────┘
//!              ┌────────┴────────┐
//!       ┌──────▼──────┐   ┌──────▼──────┐
//!       │   RealFs    │   │   MockFs    │
//!       └─────────────┘   └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sysprobe_core::ProbeConfig;
//! use sysprobe_core::collector::{MockFs, procfs};
//!
//! let fs = MockFs::typical_system();
//! let mem = procfs::get_mem(&fs, &ProbeConfig::default()).unwrap();
//! assert_eq!(mem.used, mem.total - mem.free);
//! ```

pub mod mock;
pub mod procfs;
pub mod syscall;
pub mod traits;

pub use mock::MockFs;
pub use traits::{FileSystem, RealFs};
