//! Accessors for the Linux `/proc` filesystem.
//!
//! `table` streams pseudo-files line by line, `fields` maps lines and tokens
//! to typed values, and one module per metric composes the two.

pub mod cpu;
pub mod fd;
pub mod fields;
pub mod hugepages;
pub mod load;
pub mod memory;
pub mod mounts;
pub mod process;
pub mod table;

pub use cpu::{get_boot_time, get_cpu, get_cpu_list, parse_cpu_stat};
pub use fd::{get_fd_usage, get_proc_fd_usage};
pub use hugepages::get_huge_tlb_pages;
pub use load::get_load_average;
pub use memory::{get_mem, get_swap};
pub use mounts::get_file_system_list;
pub use process::get_proc_state;
pub use table::{read_lines, read_table};
