//! # 数据模型模块
//!
//! 定义 Lorentz 谐振子模型与吸收光谱数据结构。
//!
//! ## 依赖关系
//! - 被 `uv/` 和 `commands/` 使用
//! - 使用 `constants/` 模块
//! - 子模块: resonator, spectrum

pub mod resonator;
pub mod spectrum;

pub use resonator::{combine_resonators, fit_lorentz_to_peak, LorentzResonator};
pub use spectrum::{linspace, AbsorptionSpectrum};
