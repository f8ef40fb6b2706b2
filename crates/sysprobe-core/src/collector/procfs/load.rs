//! Load average from `/proc/loadavg`.

use std::ops::ControlFlow;

use crate::collector::procfs::fields::Columns;
use crate::collector::procfs::table::read_lines;
use crate::collector::traits::FileSystem;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::model::LoadAverage;

/// Parses `/proc/loadavg` content.
///
/// Format: `load1 load5 load15 running/total last_pid`. Unparsable averages
/// are zero.
pub fn parse_loadavg(line: &str) -> LoadAverage {
    let cols = Columns::new(line);
    LoadAverage {
        one: cols.f64_at(0).unwrap_or(0.0),
        five: cols.f64_at(1).unwrap_or(0.0),
        fifteen: cols.f64_at(2).unwrap_or(0.0),
    }
}

pub fn get_load_average<F: FileSystem + ?Sized>(
    fs: &F,
    config: &ProbeConfig,
) -> Result<LoadAverage> {
    let mut load = LoadAverage::default();
    read_lines(fs, &config.proc_file("loadavg"), |line| {
        load = parse_loadavg(line);
        ControlFlow::Break(())
    })?;
    Ok(load)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_load_average() {
        let fs = MockFs::typical_system();
        let load = get_load_average(&fs, &ProbeConfig::default()).unwrap();
        assert_eq!(load.one, 0.15);
        assert_eq!(load.five, 0.10);
        assert_eq!(load.fifteen, 0.05);
    }

    #[test]
    fn test_load_average_garbage() {
        let fs = MockFs::malformed_system();
        let load = get_load_average(&fs, &ProbeConfig::default()).unwrap();
        assert_eq!(load, LoadAverage::default());
    }
}
