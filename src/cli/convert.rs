//! # convert 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Wavelengths in nm, or photon energies in eV with --ev (all must be positive)
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Interpret the inputs as photon energies in eV
    #[arg(long, default_value_t = false)]
    pub ev: bool,
}
