//! # spectrum 子命令 CLI 定义
//!
//! 吸收带以 `PEAK:WIDTH[:STRENGTH]`（nm, nm, 无量纲）形式给出，可重复。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/spectrum.rs`

use crate::cli::common::OutputFormat;
use crate::error::{LorentzError, Result};

use clap::Args;
use std::path::PathBuf;

/// 单个吸收带参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSpec {
    /// 峰位（nm）
    pub peak_nm: f64,
    /// 带宽（nm）
    pub width_nm: f64,
    /// 振子强度
    pub strength: f64,
}

/// 解析吸收带 (e.g., "260:50" 或 "260:50:0.8")
pub fn parse_band(input: &str) -> Result<BandSpec> {
    let parts: Vec<&str> = input.split(':').map(str::trim).collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(LorentzError::InvalidBand(format!(
            "'{}'. Expected PEAK:WIDTH or PEAK:WIDTH:STRENGTH (e.g., 260:50)",
            input
        )));
    }

    let number = |s: &str, what: &str| {
        s.parse::<f64>().map_err(|_| {
            LorentzError::InvalidBand(format!("invalid {} '{}' in '{}'", what, s, input))
        })
    };

    let peak_nm = number(parts[0], "peak")?;
    let width_nm = number(parts[1], "width")?;
    let strength = match parts.get(2) {
        Some(s) => number(*s, "strength")?,
        None => 1.0,
    };

    if peak_nm.is_nan() || peak_nm <= 0.0 || width_nm.is_nan() || width_nm <= 0.0 {
        return Err(LorentzError::InvalidBand(format!(
            "'{}'. Peak and width must be positive",
            input
        )));
    }

    Ok(BandSpec {
        peak_nm,
        width_nm,
        strength,
    })
}

/// spectrum 子命令参数
#[derive(Args, Debug)]
pub struct SpectrumArgs {
    /// Absorption band as PEAK:WIDTH[:STRENGTH] in nm (repeatable)
    #[arg(short, long = "band", required = true, value_parser = parse_band)]
    pub bands: Vec<BandSpec>,

    /// Wavelength range in nm (e.g., "200-350")
    #[arg(short, long, default_value = "200-350")]
    pub range: String,

    /// Number of wavelength samples
    #[arg(long, default_value_t = 500)]
    pub points: usize,

    /// Output file path
    #[arg(short, long, default_value = "absorption_spectrum.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also draw / export each band's individual normalized spectrum
    #[arg(long, default_value_t = false)]
    pub show_components: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width_px: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height_px: u32,

    /// Title for the plot
    #[arg(long, default_value = "Absorption Spectrum (Lorentz Resonator Model)")]
    pub title: String,
}
