mod cli;
mod console;
mod context;
mod privilege;

use std::time::{Duration, Instant};

use clap::Parser;
use eyre::{bail, Result};

use haul_core::engine::CopyEngine;
use haul_core::stats::CopyStats;
use haul_core::CopyOptions;

use crate::cli::Cli;
use crate::console::ConsoleSink;
use crate::context::AppContext;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Cli::parse();
    let ctx = AppContext::load();
    run(&args, &ctx)
}

fn run(args: &Cli, ctx: &AppContext) -> Result<()> {
    if !args.source.is_dir() {
        bail!("source directory does not exist: {}", args.source.display());
    }

    println!("Directory Copying Utility");
    println!("{}", "-".repeat(30));
    if !ctx.elevated {
        println!("Note: some protected files may be skipped without elevated privileges.");
        println!("{}", "-".repeat(30));
    }
    println!("\nCopying files from:");
    println!("Source: {}", args.source.display());
    println!("Destination: {}", args.destination.display());

    let options = build_options(args);
    let start = Instant::now();
    let mut sink = ConsoleSink::new(args.progress);
    let stats = CopyEngine::new(options).run(&args.source, &args.destination, &mut sink)?;
    print_summary(&stats, start.elapsed());

    let report = console::failure_report(&stats, ctx.elevated);
    if !report.is_empty() {
        println!();
        for line in report {
            println!("{line}");
        }
    }

    Ok(())
}

fn build_options(args: &Cli) -> CopyOptions {
    let mut options = CopyOptions {
        preserve_times: !args.no_preserve_times,
        widen_source_reads: !args.no_widen_reads,
        ..CopyOptions::default()
    };
    if let Some(ms) = args.interval_ms {
        options.progress_interval = Duration::from_millis(ms);
    }
    options
}

fn print_summary(stats: &CopyStats, elapsed: Duration) {
    let throughput = if elapsed.as_secs_f64() > 0.0 {
        stats.bytes_copied as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!(
        "Copied {} file(s), {} in {:.2?}",
        stats.files_copied,
        format_bytes(stats.bytes_copied),
        elapsed
    );
    println!("• Directories created: {}", stats.dirs_created);
    if stats.files_skipped > 0 || stats.dirs_skipped > 0 {
        println!(
            "• Skipped: {} file(s), {} dir(s)",
            stats.files_skipped, stats.dirs_skipped
        );
    }
    println!("• Throughput: {}/s", format_bytes(throughput as u64));
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    if bytes == 0 {
        return "0 B".to_owned();
    }
    let mut value = bytes as f64;
    let mut unit = 0usize;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_args(source: PathBuf, destination: PathBuf) -> Cli {
        Cli {
            source,
            destination,
            progress: false,
            no_preserve_times: false,
            no_widen_reads: false,
            interval_ms: None,
        }
    }

    #[test]
    fn copies_a_tree_end_to_end() -> Result<()> {
        let tmp = tempdir()?;
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        std::fs::create_dir_all(src.join("nested"))?;
        std::fs::write(src.join("hello.txt"), b"hello")?;
        std::fs::write(src.join("nested").join("deep.txt"), b"deep")?;

        let ctx = AppContext { elevated: false };
        run(&base_args(src, dest.clone()), &ctx)?;

        assert_eq!(std::fs::read(dest.join("hello.txt"))?, b"hello");
        assert_eq!(std::fs::read(dest.join("nested").join("deep.txt"))?, b"deep");
        Ok(())
    }

    #[test]
    fn missing_source_is_an_error() -> Result<()> {
        let tmp = tempdir()?;
        let args = base_args(tmp.path().join("absent"), tmp.path().join("dest"));
        let ctx = AppContext { elevated: false };

        let err = run(&args, &ctx).unwrap_err();
        assert!(err.to_string().contains("source directory"));
        Ok(())
    }

    #[test]
    fn flags_map_onto_engine_options() {
        let mut args = base_args(PathBuf::from("a"), PathBuf::from("b"));
        let defaults = build_options(&args);
        assert!(defaults.preserve_times);
        assert!(defaults.widen_source_reads);
        assert_eq!(defaults.progress_interval, Duration::from_millis(500));

        args.no_preserve_times = true;
        args.no_widen_reads = true;
        args.interval_ms = Some(50);
        let tuned = build_options(&args);
        assert!(!tuned.preserve_times);
        assert!(!tuned.widen_source_reads);
        assert_eq!(tuned.progress_interval, Duration::from_millis(50));
    }

    #[test]
    fn format_bytes_scales_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KiB");
    }
}
