use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "haul")]
#[command(about = "Copy a directory tree, skipping unreadable items instead of aborting")]
pub struct Cli {
    /// Directory to copy from
    pub source: PathBuf,
    /// Directory to copy into (created if missing)
    pub destination: PathBuf,
    /// Show a spinner while the pre-copy scan runs
    #[arg(long, short = 'p')]
    pub progress: bool,
    /// Do not carry source timestamps over to copied files
    #[arg(long)]
    pub no_preserve_times: bool,
    /// Do not add a read bit to unreadable source files before copying
    #[arg(long)]
    pub no_widen_reads: bool,
    /// Milliseconds between progress lines (advanced debugging only)
    #[arg(long, hide = true, value_name = "MS")]
    pub interval_ms: Option<u64>,
}
