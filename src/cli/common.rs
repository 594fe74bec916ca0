//! # 子命令共用的参数类型
//!
//! 输出格式、波长范围解析与正数校验。
//!
//! ## 依赖关系
//! - 被 `cli/calibrate.rs`, `cli/spectrum.rs`, `cli/batch.rs` 使用
//! - 被 `commands/` 用于解析范围和推断输出格式

use crate::error::{LorentzError, Result};

use clap::ValueEnum;
use std::path::Path;

/// 光谱输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (wavelength, absorption)
    Csv,
    /// XY data file (tab separated, commented header)
    Xy,
}

impl OutputFormat {
    /// 对应的文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
            OutputFormat::Xy => "xy",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Svg)
    }
}

/// 从文件扩展名推断输出格式
pub fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OutputFormat::Svg,
        Some("csv") => OutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
        _ => OutputFormat::Png,
    }
}

/// 校验物理量为正，NaN 同样视为非法
pub fn require_positive(value: f64, what: &str) -> Result<f64> {
    if value.is_nan() || value <= 0.0 {
        return Err(LorentzError::InvalidArgument(format!(
            "{} must be positive, got {}",
            what, value
        )));
    }
    Ok(value)
}

/// 解析正数参数（峰位、带宽等，单位 nm）
pub fn parse_positive_nm(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| LorentzError::InvalidArgument(format!("'{}' is not a number", input)))?;
    require_positive(value, "Value")
}

/// 解析波长范围 (e.g., "200-350")
pub fn parse_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(LorentzError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| LorentzError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| LorentzError::InvalidRange(range.to_string()))?;

    if min <= 0.0 || max <= min {
        return Err(LorentzError::InvalidRange(format!(
            "{} (must be 0 < min < max, in nm)",
            range
        )));
    }

    Ok((min, max))
}
