//! # 物理常数与单位换算模块
//!
//! 提供 SI 物理常数（CODATA 2018）以及波长、频率、能量之间的换算。
//!
//! ## 子模块
//! - `physical`: 物理常数值对象
//! - `conversion`: 波长 ↔ 频率 ↔ 能量换算
//! - `bands`: 参考光谱波段（UV 区间、吡啶吸收峰）
//!
//! ## 依赖关系
//! - 被 `models/resonator.rs` 使用
//! - 被 `commands/` 使用
//! - 只依赖 `error.rs`

pub mod bands;
pub mod conversion;
pub mod physical;

pub use bands::{SpectralBand, PYRIDINE_UV, UV_RANGE};
pub use conversion::{
    angular_frequency, energy_ev_to_wavelength, frequency_to_energy, frequency_to_wavenumber,
    wavelength_to_energy_ev, wavelength_to_frequency, wavelengths_to_energies_ev,
    wavelengths_to_frequencies,
};
pub use physical::CONSTANTS;
