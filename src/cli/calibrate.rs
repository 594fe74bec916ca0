//! # calibrate 子命令 CLI 定义
//!
//! 默认参数复现吡啶 260 nm 紫外吸收标定实验。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calibrate.rs`

use crate::cli::common::{parse_positive_nm, OutputFormat};

use clap::Args;
use std::path::PathBuf;

/// calibrate 子命令参数
#[derive(Args, Debug)]
pub struct CalibrateArgs {
    /// Name of the target molecule
    #[arg(long, default_value = "Pyridine")]
    pub name: String,

    /// Literature peak wavelength in nm
    #[arg(long, default_value_t = 260.0, value_parser = parse_positive_nm)]
    pub peak: f64,

    /// Approximate absorption band width in nm
    #[arg(long, default_value_t = 50.0, value_parser = parse_positive_nm)]
    pub width: f64,

    /// Oscillator strength (dimensionless)
    #[arg(long, default_value_t = 1.0)]
    pub strength: f64,

    /// Wavelength range in nm (e.g., "200-350")
    #[arg(short, long, default_value = "200-350")]
    pub range: String,

    /// Number of wavelength samples
    #[arg(long, default_value_t = 500)]
    pub points: usize,

    /// Maximum accepted peak deviation in nm
    #[arg(long, default_value_t = 1.0)]
    pub tolerance: f64,

    /// Output file path
    #[arg(short, long, default_value = "pyridine_spectrum.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width_px: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height_px: u32,

    /// Title for the plot (default: derived from the molecule name)
    #[arg(long)]
    pub title: Option<String>,

    /// Skip writing the output file
    #[arg(long, default_value_t = false)]
    pub no_output: bool,

    /// Exit with an error when the peak deviation exceeds the tolerance
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
