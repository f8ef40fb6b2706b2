//! System-wide records: memory, swap, CPU, descriptors, huge pages, load and
//! uptime.
//!
//! Every record is a plain value produced fresh by each accessor call.

use serde::{Deserialize, Serialize};

/// Physical memory usage in bytes.
///
/// Source: `/proc/meminfo`
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct Mem {
    pub total: u64,
    /// `total - free`.
    pub used: u64,
    pub free: u64,
    /// Page cache (`Cached`).
    pub cached: u64,
    /// Memory available to new workloads without swapping: `MemAvailable`
    /// when the kernel reports it, else `free + buffers + cached`.
    pub actual_free: u64,
    /// `total - actual_free`.
    pub actual_used: u64,
}

/// Swap usage in bytes.
///
/// Source: `/proc/meminfo` (`SwapTotal`, `SwapFree`)
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct Swap {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Cumulative CPU time in clock ticks (USER_HZ).
///
/// Source: a `cpu` or `cpuN` line of `/proc/stat`, columns 1..=8.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct Cpu {
    pub user: u64,
    pub nice: u64,
    pub sys: u64,
    pub idle: u64,
    /// I/O wait.
    pub wait: u64,
    pub irq: u64,
    pub soft_irq: u64,
    /// Time stolen by the hypervisor.
    pub stolen: u64,
}

impl Cpu {
    /// Sum of all eight counters.
    pub fn total(&self) -> u64 {
        self.user
            .saturating_add(self.nice)
            .saturating_add(self.sys)
            .saturating_add(self.idle)
            .saturating_add(self.wait)
            .saturating_add(self.irq)
            .saturating_add(self.soft_irq)
            .saturating_add(self.stolen)
    }

    /// Ticks accumulated since `previous`.
    ///
    /// Counters can appear to go backwards after CPU hotplug; such fields
    /// saturate at zero.
    pub fn delta(&self, previous: &Cpu) -> Cpu {
        Cpu {
            user: self.user.saturating_sub(previous.user),
            nice: self.nice.saturating_sub(previous.nice),
            sys: self.sys.saturating_sub(previous.sys),
            idle: self.idle.saturating_sub(previous.idle),
            wait: self.wait.saturating_sub(previous.wait),
            irq: self.irq.saturating_sub(previous.irq),
            soft_irq: self.soft_irq.saturating_sub(previous.soft_irq),
            stolen: self.stolen.saturating_sub(previous.stolen),
        }
    }
}

/// Per-CPU counters in `/proc/stat` order (`cpu0`, `cpu1`, ...).
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct CpuList {
    pub list: Vec<Cpu>,
}

/// System-wide file descriptor counters.
///
/// Source: `/proc/sys/fs/file-nr`
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct FdUsage {
    /// Allocated handles.
    pub open: u64,
    /// Allocated but unused handles.
    pub unused: u64,
    /// System-wide maximum (`fs.file-max`).
    pub max: u64,
}

/// Huge page pool statistics.
///
/// Source: `/proc/meminfo`
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct HugeTlbPages {
    /// Pages in the pool (`HugePages_Total`).
    pub total: u64,
    /// Pages not yet allocated (`HugePages_Free`).
    pub free: u64,
    /// Pages committed but not yet faulted in (`HugePages_Rsvd`).
    pub reserved: u64,
    /// Pages above the persistent pool size (`HugePages_Surp`).
    pub surplus: u64,
    /// Default huge page size in bytes (`Hugepagesize`).
    pub default_size: u64,
    /// Bytes consumed by huge pages of all sizes.
    ///
    /// Read from `Hugetlb` when present. Older kernels lack it and the value
    /// is approximated as `(total - free + reserved) * default_size`, which
    /// undercounts when several huge page sizes are in use.
    pub total_allocated_size: u64,
}

/// Seconds since boot.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct Uptime {
    pub length: f64,
}

/// 1, 5 and 15 minute load averages.
///
/// Source: `/proc/loadavg`
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_total() {
        let cpu = Cpu {
            user: 10,
            nice: 2,
            sys: 5,
            idle: 100,
            wait: 1,
            irq: 3,
            soft_irq: 4,
            stolen: 5,
        };
        assert_eq!(cpu.total(), 130);
    }

    #[test]
    fn test_cpu_delta() {
        let before = Cpu {
            user: 10,
            idle: 100,
            ..Default::default()
        };
        let after = Cpu {
            user: 15,
            idle: 190,
            sys: 3,
            ..Default::default()
        };
        let delta = after.delta(&before);
        assert_eq!(delta.user, 5);
        assert_eq!(delta.idle, 90);
        assert_eq!(delta.sys, 3);
        assert_eq!(delta.total(), 98);
    }

    #[test]
    fn test_cpu_delta_saturates() {
        let before = Cpu {
            user: 50,
            ..Default::default()
        };
        let after = Cpu {
            user: 10,
            ..Default::default()
        };
        assert_eq!(after.delta(&before).user, 0);
    }
}
