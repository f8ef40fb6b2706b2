//! sysprobe - print host metrics once.
//!
//! Reads the selected metrics through the platform's `Sigar` accessor and
//! prints them as aligned text or JSON. Metrics the platform cannot provide
//! are reported as "not implemented" and do not fail the run.

mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use sysprobe_core::{ProbeConfig, Sigar, native};

use crate::report::Report;

/// Print host memory, CPU, descriptor and filesystem metrics once.
#[derive(Parser, Debug)]
#[command(name = "sysprobe", about = "Print host metrics once", version)]
struct Args {
    /// Metrics to print. Prints all of them when none is given.
    #[arg(value_enum)]
    metrics: Vec<Metric>,

    /// JSON file with source paths (proc_root, mount_table, dev_fd).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the proc filesystem.
    #[arg(long, value_name = "PATH")]
    proc_root: Option<PathBuf>,

    /// Mount table to list filesystems from.
    #[arg(long, value_name = "PATH")]
    mount_table: Option<PathBuf>,

    /// Process for proc-fd and proc-state. Defaults to sysprobe itself.
    #[arg(long)]
    pid: Option<u32>,

    /// Mount point for fs-usage.
    #[arg(long, value_name = "PATH", default_value = "/")]
    path: PathBuf,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Metric {
    Mem,
    Swap,
    Cpu,
    CpuList,
    Fd,
    ProcFd,
    ProcState,
    FsList,
    FsUsage,
    Hugepages,
    Load,
    Uptime,
}

impl Metric {
    fn key(self) -> &'static str {
        match self {
            Metric::Mem => "mem",
            Metric::Swap => "swap",
            Metric::Cpu => "cpu",
            Metric::CpuList => "cpu_list",
            Metric::Fd => "fd",
            Metric::ProcFd => "proc_fd",
            Metric::ProcState => "proc_state",
            Metric::FsList => "fs_list",
            Metric::FsUsage => "fs_usage",
            Metric::Hugepages => "hugepages",
            Metric::Load => "load",
            Metric::Uptime => "uptime",
        }
    }
}

/// Initializes the tracing subscriber on stderr so stdout stays parseable.
fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("sysprobe={}", level).parse()?)
        .add_directive(format!("sysprobe_core={}", level).parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Builds the probe configuration: defaults, then the config file, then flags.
fn load_config(args: &Args) -> anyhow::Result<ProbeConfig> {
    let mut config = match &args.config {
        Some(path) => read_config_file(path)?,
        None => ProbeConfig::default(),
    };
    if let Some(proc_root) = &args.proc_root {
        config = config.with_proc_root(proc_root.clone());
    }
    if let Some(mount_table) = &args.mount_table {
        config = config.with_mount_table(mount_table.clone());
    }
    Ok(config)
}

fn read_config_file(path: &Path) -> anyhow::Result<ProbeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}

fn collect(sigar: &dyn Sigar, metrics: &[Metric], args: &Args) -> anyhow::Result<Report> {
    let pid = args.pid.unwrap_or_else(std::process::id);
    let mut report = Report::new();
    for &metric in metrics {
        let key = metric.key();
        debug!(metric = key, "reading");
        match metric {
            Metric::Mem => report.record(key, sigar.mem())?,
            Metric::Swap => report.record(key, sigar.swap())?,
            Metric::Cpu => report.record(key, sigar.cpu())?,
            Metric::CpuList => report.record(key, sigar.cpu_list())?,
            Metric::Fd => report.record(key, sigar.fd_usage())?,
            Metric::ProcFd => report.record(key, sigar.proc_fd_usage(pid))?,
            Metric::ProcState => report.record(key, sigar.proc_state(pid))?,
            Metric::FsList => report.record(key, sigar.file_system_list())?,
            Metric::FsUsage => report.record(key, sigar.file_system_usage(&args.path))?,
            Metric::Hugepages => report.record(key, sigar.huge_tlb_pages())?,
            Metric::Load => report.record(key, sigar.load_average())?,
            Metric::Uptime => report.record(key, sigar.uptime())?,
        }
    }
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet)?;

    let config = load_config(&args)?;
    info!(
        "sysprobe {} on {}, proc={}, mtab={}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        config.proc_root.display(),
        config.mount_table.display()
    );

    let metrics = if args.metrics.is_empty() {
        Metric::value_variants().to_vec()
    } else {
        args.metrics.clone()
    };

    let sigar = native(config);
    let report = collect(sigar.as_ref(), &metrics, &args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report.to_json()).context("encoding report")?;
        println!("{json}");
    } else {
        print!("{}", report.render_text());
    }

    let failures = report.failures();
    if failures > 0 {
        bail!("{failures} metric(s) could not be read");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use sysprobe_core::LinuxSigar;
    use sysprobe_core::collector::MockFs;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sysprobe").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_metrics_and_flags() {
        let args = parse(&["mem", "cpu-list", "--pid", "42", "--json", "-vv"]);
        assert_eq!(args.metrics, vec![Metric::Mem, Metric::CpuList]);
        assert_eq!(args.pid, Some(42));
        assert!(args.json);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.path, PathBuf::from("/"));
    }

    #[test]
    fn test_unknown_metric_rejected() {
        assert!(Args::try_parse_from(["sysprobe", "gpu"]).is_err());
    }

    #[test]
    fn test_load_config_flags_override_defaults() {
        let args = parse(&["--proc-root", "/host/proc", "--mount-table", "/proc/mounts"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.proc_root, PathBuf::from("/host/proc"));
        assert_eq!(config.mount_table, PathBuf::from("/proc/mounts"));
        assert_eq!(config.dev_fd, PathBuf::from("/dev/fd"));
    }

    #[test]
    fn test_load_config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"proc_root": "/snapshot/proc", "dev_fd": "/snapshot/fd"}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let config = load_config(&parse(&["--config", path])).unwrap();
        assert_eq!(config.proc_root, PathBuf::from("/snapshot/proc"));
        assert_eq!(config.mount_table, PathBuf::from("/etc/mtab"));
        assert_eq!(config.dev_fd, PathBuf::from("/snapshot/fd"));

        let config = load_config(&parse(&["--config", path, "--proc-root", "/proc"])).unwrap();
        assert_eq!(config.proc_root, PathBuf::from("/proc"));
    }

    #[test]
    fn test_load_config_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = file.path().to_str().unwrap();

        let err = load_config(&parse(&["--config", path])).unwrap_err();
        assert!(err.to_string().starts_with("parsing config"));
    }

    #[test]
    fn test_collect_from_fixture() {
        let sigar = LinuxSigar::new(MockFs::typical_system(), ProbeConfig::default());
        let args = parse(&["--pid", "1000"]);
        let metrics = [Metric::Mem, Metric::ProcFd, Metric::ProcState, Metric::Hugepages];

        let report = collect(&sigar, &metrics, &args).unwrap();
        let json = report.to_json();

        assert_eq!(report.failures(), 0);
        assert_eq!(json["proc_fd"]["open"], 4);
        assert_eq!(json["proc_state"]["name"], "bash");
        assert_eq!(json["hugepages"]["total"], 16);
    }

    #[test]
    fn test_every_metric_has_distinct_key() {
        let mut keys: Vec<_> = Metric::value_variants().iter().map(|m| m.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Metric::value_variants().len());
    }
}
