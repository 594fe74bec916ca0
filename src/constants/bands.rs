//! # 参考光谱波段
//!
//! 在首次访问时由物理常数计算出的参考数据，之后只读。
//!
//! - `UV_RANGE`: 紫外区 100–400 nm
//! - `PYRIDINE_UV`: 吡啶主吸收峰 260 nm（文献值）
//!
//! ## 依赖关系
//! - 被 `cli/calibrate.rs` 提供默认值
//! - 被 `commands/constants.rs`, `uv/calibration.rs` 使用
//! - 使用 `constants/conversion.rs` 计算频率与能量

use crate::constants::conversion::{wavelength_to_energy_ev, wavelength_to_frequency};

use std::sync::LazyLock;

/// 命名光谱波段
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralBand {
    /// 波段名称
    pub name: &'static str,
    /// 波长下限（nm）
    pub wavelength_min_nm: Option<f64>,
    /// 波长上限（nm）
    pub wavelength_max_nm: Option<f64>,
    /// 频率下限（Hz），对应波长上限
    pub frequency_min_hz: Option<f64>,
    /// 频率上限（Hz），对应波长下限
    pub frequency_max_hz: Option<f64>,
    /// 峰值波长（nm）
    pub peak_wavelength_nm: Option<f64>,
    /// 峰值频率（Hz）
    pub peak_frequency_hz: Option<f64>,
    /// 峰值光子能量（eV）
    pub peak_energy_ev: Option<f64>,
    /// 摩尔吸光系数（L·mol⁻¹·cm⁻¹）
    pub molar_absorptivity: Option<f64>,
}

impl SpectralBand {
    /// 由波长区间构造波段
    fn range(name: &'static str, min_nm: f64, max_nm: f64) -> Self {
        Self {
            name,
            wavelength_min_nm: Some(min_nm),
            wavelength_max_nm: Some(max_nm),
            frequency_min_hz: wavelength_to_frequency(max_nm).ok(),
            frequency_max_hz: wavelength_to_frequency(min_nm).ok(),
            peak_wavelength_nm: None,
            peak_frequency_hz: None,
            peak_energy_ev: None,
            molar_absorptivity: None,
        }
    }

    /// 由吸收峰构造波段
    fn peak(name: &'static str, peak_nm: f64, molar_absorptivity: f64) -> Self {
        Self {
            name,
            wavelength_min_nm: None,
            wavelength_max_nm: None,
            frequency_min_hz: None,
            frequency_max_hz: None,
            peak_wavelength_nm: Some(peak_nm),
            peak_frequency_hz: wavelength_to_frequency(peak_nm).ok(),
            peak_energy_ev: wavelength_to_energy_ev(peak_nm).ok(),
            molar_absorptivity: Some(molar_absorptivity),
        }
    }
}

/// 紫外光谱区间
pub static UV_RANGE: LazyLock<SpectralBand> =
    LazyLock::new(|| SpectralBand::range("Ultraviolet", 100.0, 400.0));

/// 吡啶紫外吸收参考（实验文献值）
pub static PYRIDINE_UV: LazyLock<SpectralBand> =
    LazyLock::new(|| SpectralBand::peak("Pyridine", 260.0, 2500.0));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_range_frequency_bounds() {
        let uv = &*UV_RANGE;
        let f_min = uv.frequency_min_hz.unwrap();
        let f_max = uv.frequency_max_hz.unwrap();
        assert!(f_min < f_max);
        assert!((f_max / f_min - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_pyridine_reference() {
        let py = &*PYRIDINE_UV;
        assert_eq!(py.peak_wavelength_nm, Some(260.0));
        assert_eq!(py.molar_absorptivity, Some(2500.0));
        let ev = py.peak_energy_ev.unwrap();
        assert!(ev > 4.7 && ev < 4.8);
    }
}
