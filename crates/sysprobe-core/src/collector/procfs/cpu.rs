//! CPU tick counters and boot time from `/proc/stat`.

use std::ops::ControlFlow;

use crate::collector::procfs::fields::Columns;
use crate::collector::procfs::table::read_lines;
use crate::collector::traits::FileSystem;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::model::{Cpu, CpuList};

/// Parses one `cpu` line of `/proc/stat` into tick counters.
///
/// Format: `cpuN user nice system idle iowait irq softirq steal [guest guest_nice]`
///
/// The label in column 0 is not checked; callers locate the line. Missing or
/// non-numeric columns are zero, so short lines from old kernels (no `steal`)
/// parse without error.
pub fn parse_cpu_stat(line: &str) -> Cpu {
    let cols = Columns::new(line);
    let get_val = |idx: usize| -> u64 { cols.u64_at(idx).unwrap_or(0) };

    Cpu {
        user: get_val(1),
        nice: get_val(2),
        sys: get_val(3),
        idle: get_val(4),
        wait: get_val(5),
        irq: get_val(6),
        soft_irq: get_val(7),
        stolen: get_val(8),
    }
}

/// True for per-CPU labels such as `cpu0`, false for the aggregate `cpu`.
fn is_per_cpu_label(label: &str) -> bool {
    label
        .strip_prefix("cpu")
        .is_some_and(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
}

/// Reads the aggregate `cpu` line of `<proc>/stat`.
///
/// Returns zeroed counters when the line is absent.
pub fn get_cpu<F: FileSystem + ?Sized>(fs: &F, config: &ProbeConfig) -> Result<Cpu> {
    let mut cpu = Cpu::default();
    read_lines(fs, &config.proc_file("stat"), |line| {
        if Columns::new(line).get(0) == Some("cpu") {
            cpu = parse_cpu_stat(line);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    })?;
    Ok(cpu)
}

/// Reads every `cpuN` line of `<proc>/stat`, in file order.
pub fn get_cpu_list<F: FileSystem + ?Sized>(fs: &F, config: &ProbeConfig) -> Result<CpuList> {
    let mut list = Vec::new();
    read_lines(fs, &config.proc_file("stat"), |line| {
        if Columns::new(line).get(0).is_some_and(is_per_cpu_label) {
            list.push(parse_cpu_stat(line));
        }
        ControlFlow::Continue(())
    })?;
    Ok(CpuList { list })
}

/// Reads the boot time (seconds since the epoch) from the `btime` line of
/// `<proc>/stat`. `None` when the line is absent or unparsable.
pub fn get_boot_time<F: FileSystem + ?Sized>(fs: &F, config: &ProbeConfig) -> Result<Option<u64>> {
    let mut boot_time = None;
    read_lines(fs, &config.proc_file("stat"), |line| {
        let cols = Columns::new(line);
        if cols.get(0) == Some("btime") {
            boot_time = cols.u64_at(1);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    })?;
    Ok(boot_time)
}
