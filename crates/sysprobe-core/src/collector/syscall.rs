//! Metrics read with a single system call instead of a pseudo-file.

use std::io;
use std::path::Path;

use crate::error::Result;
use crate::model::{FileSystemUsage, Uptime};

/// Seconds since boot from `sysinfo(2)`.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn get_uptime() -> Result<Uptime> {
    let mut info = std::mem::MaybeUninit::<libc::sysinfo>::zeroed();
    // SAFETY: sysinfo writes into the provided buffer, which is sized for
    // `struct sysinfo`.
    let rc = unsafe { libc::sysinfo(info.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error().into());
    }
    // SAFETY: sysinfo returned success, so the struct is initialised.
    let info = unsafe { info.assume_init() };
    Ok(Uptime {
        length: info.uptime as f64,
    })
}

/// Seconds since boot, from the `kern.boottime` sysctl.
#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
pub fn get_uptime() -> Result<Uptime> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let mut boottime = std::mem::MaybeUninit::<libc::timeval>::zeroed();
    let mut size = std::mem::size_of::<libc::timeval>();
    // SAFETY: the name is NUL-terminated and the output buffer is a timeval
    // whose size is passed alongside it.
    let rc = unsafe {
        libc::sysctlbyname(
            c"kern.boottime".as_ptr(),
            boottime.as_mut_ptr().cast(),
            &mut size,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(io::Error::last_os_error().into());
    }
    // SAFETY: sysctlbyname returned success.
    let boottime = unsafe { boottime.assume_init() };
    let boot = boottime.tv_sec as f64 + boottime.tv_usec as f64 / 1_000_000.0;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(io::Error::other)?
        .as_secs_f64();
    Ok(Uptime {
        length: (now - boot).max(0.0),
    })
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd"
)))]
pub fn get_uptime() -> Result<Uptime> {
    Err(crate::error::Error::not_implemented(std::env::consts::OS))
}

/// Capacity of the filesystem mounted at `path`, from `statvfs(3)`.
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
pub fn get_file_system_usage(path: &Path) -> Result<FileSystemUsage> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut stat = std::mem::MaybeUninit::<libc::statvfs>::zeroed();
    // SAFETY: c_path is NUL-terminated and stat points to a statvfs buffer.
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error().into());
    }
    // SAFETY: statvfs returned success.
    let stat = unsafe { stat.assume_init() };

    let block = stat.f_frsize as u64;
    let total = (stat.f_blocks as u64).saturating_mul(block);
    let free = (stat.f_bfree as u64).saturating_mul(block);
    Ok(FileSystemUsage {
        total,
        used: total.saturating_sub(free),
        free,
        avail: (stat.f_bavail as u64).saturating_mul(block),
        files: stat.f_files as u64,
        free_files: stat.f_ffree as u64,
    })
}

#[cfg(not(unix))]
pub fn get_file_system_usage(_path: &Path) -> Result<FileSystemUsage> {
    Err(crate::error::Error::not_implemented(std::env::consts::OS))
}

/// `(soft, hard)` descriptor limits of the calling process from
/// `getrlimit(RLIMIT_NOFILE)`. Infinity maps to `u64::MAX`.
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
pub fn own_open_files_limit() -> Result<(u64, u64)> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: limit is a valid, writable rlimit.
    let rc = unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, &mut limit) };
    if rc != 0 {
        return Err(io::Error::last_os_error().into());
    }
    let map = |v: libc::rlim_t| {
        if v == libc::RLIM_INFINITY {
            u64::MAX
        } else {
            v as u64
        }
    };
    Ok((map(limit.rlim_cur), map(limit.rlim_max)))
}

#[cfg(not(unix))]
pub fn own_open_files_limit() -> Result<(u64, u64)> {
    Err(crate::error::Error::not_implemented(std::env::consts::OS))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::Error;

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    #[test]
    fn test_uptime_non_decreasing() {
        let first = get_uptime().unwrap();
        assert!(first.length > 0.0);
        let mut previous = first.length;
        for _ in 0..5 {
            std::thread::sleep(std::time::Duration::from_millis(20));
            let next = get_uptime().unwrap().length;
            assert!(next >= previous, "{next} < {previous}");
            previous = next;
        }
    }

    #[test]
    fn test_file_system_usage_root() {
        let usage = get_file_system_usage(Path::new("/")).unwrap();
        assert!(usage.total >= usage.free);
        assert_eq!(usage.used, usage.total - usage.free);
    }

    #[test]
    fn test_file_system_usage_missing_path() {
        let err = get_file_system_usage(Path::new("/nonexistent/path/12345")).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_own_open_files_limit() {
        let (soft, hard) = own_open_files_limit().unwrap();
        assert!(soft <= hard);
        assert!(soft > 0);
    }
}
