//! Memory and swap usage from `/proc/meminfo`.

use crate::collector::procfs::fields::KvTable;
use crate::collector::procfs::table::read_table;
use crate::collector::traits::FileSystem;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::model::{Mem, Swap};

/// Derives memory usage from a parsed meminfo table.
///
/// `MemAvailable` (kernel 3.14+) is preferred for `actual_free`; older
/// kernels fall back to `MemFree + Buffers + Cached`.
pub fn mem_from_table(table: &KvTable) -> Mem {
    let total = table.get_or_zero("MemTotal");
    let free = table.get_or_zero("MemFree");
    let buffers = table.get_or_zero("Buffers");
    let cached = table.get_or_zero("Cached");

    let actual_free = table
        .get("MemAvailable")
        .unwrap_or_else(|| free.saturating_add(buffers).saturating_add(cached));

    Mem {
        total,
        used: total.saturating_sub(free),
        free,
        cached,
        actual_free,
        actual_used: total.saturating_sub(actual_free),
    }
}

/// Derives swap usage from a parsed meminfo table.
pub fn swap_from_table(table: &KvTable) -> Swap {
    let total = table.get_or_zero("SwapTotal");
    let free = table.get_or_zero("SwapFree");
    Swap {
        total,
        used: total.saturating_sub(free),
        free,
    }
}

/// Reads `<proc>/meminfo` and returns memory usage.
pub fn get_mem<F: FileSystem + ?Sized>(fs: &F, config: &ProbeConfig) -> Result<Mem> {
    let table = read_table(fs, &config.proc_file("meminfo"))?;
    Ok(mem_from_table(&table))
}

/// Reads `<proc>/meminfo` and returns swap usage.
pub fn get_swap<F: FileSystem + ?Sized>(fs: &F, config: &ProbeConfig) -> Result<Swap> {
    let table = read_table(fs, &config.proc_file("meminfo"))?;
    Ok(swap_from_table(&table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;
    use crate::error::Error;

    const KB: u64 = 1024;

    #[test]
    fn test_mem_prefers_mem_available() {
        let fs = MockFs::typical_system();
        let mem = get_mem(&fs, &ProbeConfig::default()).unwrap();

        assert_eq!(mem.total, 16384000 * KB);
        assert_eq!(mem.free, 8192000 * KB);
        assert_eq!(mem.cached, 2048000 * KB);
        assert_eq!(mem.actual_free, 12000000 * KB);
        assert_eq!(mem.used, mem.total - mem.free);
        assert_eq!(mem.actual_used, mem.total - mem.actual_free);
    }

    #[test]
    fn test_mem_legacy_kernel_derives_available() {
        let fs = MockFs::legacy_kernel();
        let mem = get_mem(&fs, &ProbeConfig::default()).unwrap();

        assert_eq!(mem.actual_free, (512000 + 128000 + 1024000) * KB);
        assert_eq!(mem.used, mem.total - mem.free);
        assert_eq!(mem.actual_used, mem.total - mem.actual_free);
    }

    #[test]
    fn test_mem_malformed_fields_default_to_zero() {
        let fs = MockFs::malformed_system();
        let mem = get_mem(&fs, &ProbeConfig::default()).unwrap();

        assert_eq!(mem.total, 0);
        assert_eq!(mem.free, 0);
        assert_eq!(mem.cached, 100 * KB);
        // free + buffers + cached exceeds total; used figures saturate
        assert_eq!(mem.actual_free, 100 * KB);
        assert_eq!(mem.actual_used, 0);
        assert_eq!(mem.used, 0);
    }

    #[test]
    fn test_mem_missing_file() {
        let fs = MockFs::new();
        let err = get_mem(&fs, &ProbeConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_mem_invariants_hold_for_any_table() {
        for (total, free, avail) in [(100, 40, Some(70)), (100, 40, None), (0, 0, None)] {
            let mut table = KvTable::new();
            table.insert("MemTotal", total);
            table.insert("MemFree", free);
            table.insert("Buffers", 5);
            table.insert("Cached", 10);
            if let Some(avail) = avail {
                table.insert("MemAvailable", avail);
            }
            let mem = mem_from_table(&table);
            assert_eq!(mem.used, total.saturating_sub(free));
            assert_eq!(mem.actual_used, total.saturating_sub(mem.actual_free));
        }
    }

    #[test]
    fn test_swap() {
        let fs = MockFs::typical_system();
        let swap = get_swap(&fs, &ProbeConfig::default()).unwrap();
        assert_eq!(swap.total, 4096000 * KB);
        assert_eq!(swap.free, 3072000 * KB);
        assert_eq!(swap.used, 1024000 * KB);
    }

    #[test]
    fn test_swap_disabled() {
        let fs = MockFs::legacy_kernel();
        let swap = get_swap(&fs, &ProbeConfig::default()).unwrap();
        assert_eq!(swap, Swap::default());
    }

    #[test]
    fn test_custom_proc_root() {
        let mut fs = MockFs::new();
        fs.add_file("/host/proc/meminfo", "MemTotal: 4 kB\nMemFree: 1 kB\n");
        let config = ProbeConfig::default().with_proc_root("/host/proc");

        let mem = get_mem(&fs, &config).unwrap();
        assert_eq!(mem.total, 4 * KB);
        assert_eq!(mem.used, 3 * KB);
    }
}
