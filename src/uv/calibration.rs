//! # 紫外吸收峰标定实验
//!
//! 由目标分子的文献峰位与带宽拟合 Lorentz 谐振子，计算吸收谱，
//! 再比较计算峰位与文献值，判断是否落在容差之内。
//!
//! ## 流程
//! 1. `fit_lorentz_to_peak` 得到 (ω₀, γ)
//! 2. 在等间距波长网格上计算归一化吸收谱
//! 3. 取吸收最大的采样点作为计算峰位
//! 4. |计算峰位 − 目标峰位| < 容差 → SUCCESS，否则 NEEDS_TUNING
//!
//! ## 依赖关系
//! - 被 `commands/calibrate.rs`, `commands/batch.rs` 调用
//! - 使用 `models/` 的 LorentzResonator, AbsorptionSpectrum
//! - 使用 `constants/` 计算光子能量

use crate::constants::wavelength_to_energy_ev;
use crate::error::{LorentzError, Result};
use crate::models::{fit_lorentz_to_peak, linspace, AbsorptionSpectrum, LorentzResonator};

use serde::{Deserialize, Serialize};

/// 标定结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalibrationStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "NEEDS_TUNING")]
    NeedsTuning,
}

impl std::fmt::Display for CalibrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalibrationStatus::Success => write!(f, "SUCCESS"),
            CalibrationStatus::NeedsTuning => write!(f, "NEEDS_TUNING"),
        }
    }
}

fn default_strength() -> f64 {
    1.0
}

/// 标定目标（一个分子的一条吸收带）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationTarget {
    /// 分子名称
    pub name: String,
    /// 文献峰位（nm）
    pub peak_nm: f64,
    /// 吸收带宽（nm）
    pub width_nm: f64,
    /// 振子强度
    #[serde(default = "default_strength")]
    pub strength: f64,
}

impl CalibrationTarget {
    pub fn new(name: impl Into<String>, peak_nm: f64, width_nm: f64, strength: f64) -> Self {
        Self {
            name: name.into(),
            peak_nm,
            width_nm,
            strength,
        }
    }
}

/// 标定计算设置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationSettings {
    /// 波长网格下限（nm）
    pub range_min_nm: f64,
    /// 波长网格上限（nm）
    pub range_max_nm: f64,
    /// 采样点数
    pub points: usize,
    /// 峰位容差（nm）
    pub tolerance_nm: f64,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        CalibrationSettings {
            range_min_nm: 200.0,
            range_max_nm: 350.0,
            points: 500,
            tolerance_nm: 1.0,
        }
    }
}

/// 标定报告
#[derive(Debug, Clone)]
pub struct CalibrationReport {
    pub target: CalibrationTarget,
    pub resonator: LorentzResonator,
    pub spectrum: AbsorptionSpectrum,
    /// 目标峰位的光子能量（eV）
    pub photon_energy_ev: f64,
    /// 计算峰位（nm）
    pub computed_peak_nm: f64,
    /// 峰位偏差 |计算 − 目标|（nm）
    pub deviation_nm: f64,
    pub status: CalibrationStatus,
}

/// 运行一次标定
pub fn run_calibration(
    target: &CalibrationTarget,
    settings: &CalibrationSettings,
) -> Result<CalibrationReport> {
    let photon_energy_ev = wavelength_to_energy_ev(target.peak_nm)?;
    let resonator = fit_lorentz_to_peak(target.peak_nm, target.width_nm, target.strength)?;

    let wavelengths = linspace(settings.range_min_nm, settings.range_max_nm, settings.points);
    let absorption = resonator.absorption_spectrum(&wavelengths)?;
    let spectrum = AbsorptionSpectrum::new(target.name.clone(), wavelengths, absorption);

    let (computed_peak_nm, _) = spectrum.peak().ok_or_else(|| {
        LorentzError::InvalidArgument("Wavelength grid must contain at least one point".into())
    })?;

    let deviation_nm = (computed_peak_nm - target.peak_nm).abs();
    let status = if deviation_nm < settings.tolerance_nm {
        CalibrationStatus::Success
    } else {
        CalibrationStatus::NeedsTuning
    };

    Ok(CalibrationReport {
        target: target.clone(),
        resonator,
        spectrum,
        photon_energy_ev,
        computed_peak_nm,
        deviation_nm,
        status,
    })
}
