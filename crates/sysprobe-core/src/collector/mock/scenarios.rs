//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` filesystem states
//! for testing various system conditions.

use super::filesystem::MockFs;

/// `/proc/[pid]/limits` as printed by a 6.x kernel.
pub const LIMITS_TYPICAL: &str = "\
Limit                     Soft Limit           Hard Limit           Units
Max cpu time              unlimited            unlimited            seconds
Max file size             unlimited            unlimited            bytes
Max data size             unlimited            unlimited            bytes
Max stack size            8388608              unlimited            bytes
Max core file size        0                    unlimited            bytes
Max resident set          unlimited            unlimited            bytes
Max processes             63304                63304                processes
Max open files            1024                 524288               files
Max locked memory         8388608              8388608              bytes
Max address space         unlimited            unlimited            bytes
Max file locks            unlimited            unlimited            locks
Max pending signals       63304                63304                signals
Max msgqueue size         819200               819200               bytes
Max nice priority         0                    0
Max realtime priority     0                    0
Max realtime timeout      unlimited            unlimited            us
";

impl MockFs {
    /// Creates a typical modern system (kernel with `MemAvailable` and
    /// `Hugetlb` in meminfo) with two processes.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
SwapTotal:       4096000 kB
SwapFree:        3072000 kB
Dirty:              1024 kB
Writeback:             0 kB
Slab:             512000 kB
SReclaimable:     256000 kB
HugePages_Total:      16
HugePages_Free:       10
HugePages_Rsvd:        2
HugePages_Surp:        0
Hugepagesize:       2048 kB
Hugetlb:           65536 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 50 0 0
cpu0 2500 125 750 20000 250 50 25 10 0 0
cpu1 2500 125 750 20000 250 50 25 20 0 0
cpu2 2500 125 750 20000 250 50 25 10 0 0
cpu3 2500 125 750 20000 250 50 25 10 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
",
        );
        fs.add_file("/proc/sys/fs/file-nr", "3104\t0\t9223372036854775807\n");
        fs.add_file(
            "/etc/mtab",
            "\
sysfs /sys sysfs rw,nosuid,nodev,noexec,relatime 0 0
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
/dev/mapper/ubuntu--vg-root / ext4 rw,relatime,errors=remount-ro 0 0
tmpfs /run tmpfs rw,nosuid,nodev,noexec,relatime,size=6496012k,mode=755 0 0
/dev/nvme0n1p1 /boot/efi vfat rw,relatime,fmask=0077,dmask=0077 0 0
",
        );

        fs.add_process(
            1,
            "1 (systemd) S 0 1 1 0 -1 4194560 50000 100000 50 100 1000 500 2000 1000 20 0 1 0 1 200000000 3000 18446744073709551615 1 1 0 0 0 0 671173123 4096 1260 0 0 0 17 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n",
            LIMITS_TYPICAL,
            64,
        );
        fs.add_process(
            1000,
            "1000 (bash) S 999 1000 1000 34816 1000 4194304 3000 10000 5 20 100 50 200 100 20 0 1 0 100000 25000000 1500 18446744073709551615 1 1 0 0 0 0 65536 3670020 1266777851 0 0 0 17 2 0 0 0 0 0 0 0 0 0 0 0 0 0\n",
            LIMITS_TYPICAL,
            4,
        );

        fs
    }

    /// Creates a system running a kernel older than 3.14: meminfo has no
    /// `MemAvailable` and no `Hugetlb` line.
    pub fn legacy_kernel() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        4048000 kB
MemFree:          512000 kB
Buffers:          128000 kB
Cached:          1024000 kB
SwapCached:            0 kB
SwapTotal:             0 kB
SwapFree:              0 kB
HugePages_Total:       8
HugePages_Free:        4
HugePages_Rsvd:        1
HugePages_Surp:        0
Hugepagesize:       2048 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  500 0 300 9000 20 0 5
cpu0 500 0 300 9000 20 0 5
",
        );
        fs.add_file("/proc/loadavg", "1.50 1.25 1.00 2/80 999\n");
        fs.add_file("/proc/sys/fs/file-nr", "960\t0\t400000\n");

        fs
    }

    /// Creates a system whose pseudo-files contain malformed or truncated
    /// lines, as seen mid-write or on exotic kernels.
    pub fn malformed_system() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       garbage kB
MemFree:
this line has no separator
Cached:           100 kB
HugePages_Total:      x
",
        );
        fs.add_file("/proc/stat", "cpu 1 2\nbtime notanumber\n");
        fs.add_file("/proc/loadavg", "high\n");
        fs.add_file("/proc/sys/fs/file-nr", "1 2\n");
        fs.add_file(
            "/etc/mtab",
            "\
rootfs

/dev/sda1 /
/dev/sda2 /home ext4 rw 0 0
",
        );
        fs.add_process(
            300,
            "300 (broken",
            "Max open files            1024                 files\n",
            1,
        );

        fs
    }

    /// Creates processes whose command names contain spaces and parentheses.
    pub fn with_special_names() -> Self {
        let mut fs = Self::new();

        fs.add_process(
            5000,
            "5000 (Web Content) S 4999 5000 5000 0 -1 4194304 100 0 0 0 10 5 0 0 20 0 1 0 12345 12345678 100 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 3 0 0 0 0 0\n",
            LIMITS_TYPICAL,
            2,
        );
        fs.add_process(
            5001,
            "5001 (foo) (bar)) R 1 5001 5001 0 -1 4194304 100 0 0 0 10 5 0 0 39 19 1 0 12345 12345678 100 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 1 0 0 0 0 0\n",
            LIMITS_TYPICAL,
            2,
        );
        fs.add_process(
            5002,
            "5002 (defunct) Z 1 5002 5002 0 -1 4194348 0 0 0 0 0 0 0 0 20 0 1 0 12400 0 0 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 0 0 0 0 0 0\n",
            "",
            0,
        );

        fs
    }
}
