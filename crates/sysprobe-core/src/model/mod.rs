//! Typed records returned by the accessors.

mod filesystem;
mod process;
mod system;

pub use filesystem::{FileSystem, FileSystemList, FileSystemUsage};
pub use process::{ProcFdUsage, ProcState, ProcessorState};
pub use system::{Cpu, CpuList, FdUsage, HugeTlbPages, LoadAverage, Mem, Swap, Uptime};
