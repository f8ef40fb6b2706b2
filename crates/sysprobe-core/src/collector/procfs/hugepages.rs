//! Huge page pool statistics from `/proc/meminfo`.

use crate::collector::procfs::fields::KvTable;
use crate::collector::procfs::table::read_table;
use crate::collector::traits::FileSystem;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::model::HugeTlbPages;

/// Maps the huge page keys of a meminfo table.
///
/// `total_allocated_size` is the kernel's `Hugetlb` figure when present
/// (kernel 4.17+). Otherwise it is approximated from the default-size pool
/// only; pages of other sizes are not counted.
// TODO: add the per-size pools from /sys/kernel/mm/hugepages when Hugetlb is missing
pub fn huge_tlb_pages_from_table(table: &KvTable) -> HugeTlbPages {
    let total = table.get_or_zero("HugePages_Total");
    let free = table.get_or_zero("HugePages_Free");
    let reserved = table.get_or_zero("HugePages_Rsvd");
    let surplus = table.get_or_zero("HugePages_Surp");
    let default_size = table.get_or_zero("Hugepagesize");

    let total_allocated_size = table.get("Hugetlb").unwrap_or_else(|| {
        total
            .saturating_sub(free)
            .saturating_add(reserved)
            .saturating_mul(default_size)
    });

    HugeTlbPages {
        total,
        free,
        reserved,
        surplus,
        default_size,
        total_allocated_size,
    }
}

/// Reads `<proc>/meminfo` and returns huge page statistics.
pub fn get_huge_tlb_pages<F: FileSystem + ?Sized>(
    fs: &F,
    config: &ProbeConfig,
) -> Result<HugeTlbPages> {
    let table = read_table(fs, &config.proc_file("meminfo"))?;
    Ok(huge_tlb_pages_from_table(&table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_direct_hugetlb_figure_is_used_verbatim() {
        let fs = MockFs::typical_system();
        let pages = get_huge_tlb_pages(&fs, &ProbeConfig::default()).unwrap();

        assert_eq!(pages.total, 16);
        assert_eq!(pages.free, 10);
        assert_eq!(pages.reserved, 2);
        assert_eq!(pages.surplus, 0);
        assert_eq!(pages.default_size, 2048 * 1024);
        // Derived formula would give (16 - 10 + 2) * 2 MiB = 16 MiB
        assert_eq!(pages.total_allocated_size, 65536 * 1024);
    }

    #[test]
    fn test_derived_when_hugetlb_missing() {
        let fs = MockFs::legacy_kernel();
        let pages = get_huge_tlb_pages(&fs, &ProbeConfig::default()).unwrap();

        assert_eq!(
            pages.total_allocated_size,
            (pages.total - pages.free + pages.reserved) * pages.default_size
        );
        assert_eq!(pages.total_allocated_size, 5 * 2048 * 1024);
    }

    #[test]
    fn test_missing_keys_are_zero() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "MemTotal: 1 kB\n");
        let pages = get_huge_tlb_pages(&fs, &ProbeConfig::default()).unwrap();
        assert_eq!(pages, HugeTlbPages::default());
    }

    #[test]
    fn test_unreadable_table_is_an_error() {
        let fs = MockFs::new();
        assert!(get_huge_tlb_pages(&fs, &ProbeConfig::default()).is_err());
    }

    #[test]
    fn test_zero_hugetlb_is_still_direct() {
        let mut table = KvTable::new();
        table.insert("HugePages_Total", 4);
        table.insert("Hugepagesize", 2048 * 1024);
        table.insert("Hugetlb", 0);
        assert_eq!(huge_tlb_pages_from_table(&table).total_allocated_size, 0);
    }
}
