//! # batch 子命令 CLI 定义
//!
//! 输入 CSV 表头: `name,peak_nm,width_nm[,strength]`
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use crate::cli::common::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input CSV file with calibration targets
    pub input: PathBuf,

    /// Summary CSV output path
    #[arg(short, long, default_value = "calibration_summary.csv")]
    pub output: PathBuf,

    /// Directory for per-target spectra (omit to skip spectrum output)
    #[arg(long)]
    pub spectra_dir: Option<PathBuf>,

    /// Format of the per-target spectra
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Wavelength range in nm (e.g., "200-350")
    #[arg(short, long, default_value = "200-350")]
    pub range: String,

    /// Number of wavelength samples
    #[arg(long, default_value_t = 500)]
    pub points: usize,

    /// Maximum accepted peak deviation in nm
    #[arg(long, default_value_t = 1.0)]
    pub tolerance: f64,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing spectrum files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
