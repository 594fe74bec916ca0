//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calibrate`: 吡啶紫外吸收峰标定实验
//! - `spectrum`: 多个吸收带的合成光谱
//! - `convert`: 波长 → 频率 / 能量换算
//! - `constants`: 打印物理常数与参考波段
//! - `batch`: 从 CSV 批量标定
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: common, calibrate, spectrum, convert, batch

pub mod batch;
pub mod calibrate;
pub mod common;
pub mod convert;
pub mod spectrum;

use clap::{Parser, Subcommand};

/// lorentzkit - Lorentz 谐振子紫外吸收光谱工具箱
#[derive(Parser)]
#[command(name = "lorentzkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Classical Lorentz oscillator toolkit for UV absorption spectra", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Fit a resonator to a literature peak and validate the computed spectrum
    Calibrate(calibrate::CalibrateArgs),

    /// Compute the combined spectrum of one or more absorption bands
    Spectrum(spectrum::SpectrumArgs),

    /// Convert wavelengths (nm) to frequency, angular frequency and photon energy
    Convert(convert::ConvertArgs),

    /// Print physical constants and reference spectral bands
    Constants,

    /// Calibrate every target listed in a CSV file in parallel
    Batch(batch::BatchArgs),
}
