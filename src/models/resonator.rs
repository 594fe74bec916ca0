//! # Lorentz 经典谐振子模型
//!
//! 把一个电子跃迁描述为受迫阻尼谐振子，计算其复极化率与吸收谱。
//!
//! ## 公式
//! χ(ω) = f·e² / [mₑ·(ω₀² − ω² − iγω)]
//!
//! 这里省略了 ε₀ 和数密度前因子：下游只关心归一化后的谱形，
//! 绝对幅值没有意义。吸收截面取 Im χ（任意单位）。
//!
//! ## 参数拟合
//! `fit_lorentz_to_peak` 把光谱学参数（峰位、带宽，单位 nm）换算成
//! (ω₀, γ)。带宽换算用 f = c/λ 的一阶导数：Δf ≈ c·Δλ/λ²，
//! 只在 Δλ ≪ λ 时成立。宽带时峰位会向长波方向偏移。
//!
//! ## 依赖关系
//! - 被 `uv/calibration.rs`, `commands/spectrum.rs` 调用
//! - 使用 `constants/` 的物理常数与换算函数
//! - 使用 `num-complex` 表示复极化率

use crate::constants::{
    angular_frequency, wavelength_to_frequency, wavelengths_to_frequencies, CONSTANTS,
};
use crate::error::Result;

use num_complex::Complex64;
use std::f64::consts::PI;

/// Lorentz 谐振子
///
/// 构造后不可变。ω₀ 与 γ 都应为正，γ = 0 时在 ω = ω₀ 处发散。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorentzResonator {
    /// 共振角频率 ω₀（rad/s）
    omega_0: f64,
    /// 阻尼系数 γ（rad/s）
    gamma: f64,
    /// 振子强度 f（无量纲）
    oscillator_strength: f64,
}

impl LorentzResonator {
    /// 创建振子强度为 1.0 的谐振子
    pub fn new(omega_0: f64, gamma: f64) -> Self {
        Self {
            omega_0,
            gamma,
            oscillator_strength: 1.0,
        }
    }

    /// 设置振子强度
    pub fn with_strength(mut self, oscillator_strength: f64) -> Self {
        self.oscillator_strength = oscillator_strength;
        self
    }

    pub fn omega_0(&self) -> f64 {
        self.omega_0
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn oscillator_strength(&self) -> f64 {
        self.oscillator_strength
    }

    /// 共振频率 ω₀/2π（Hz）
    pub fn resonance_frequency_hz(&self) -> f64 {
        self.omega_0 / (2.0 * PI)
    }

    /// 共振频率对应的波长（nm）
    pub fn resonance_wavelength_nm(&self) -> f64 {
        CONSTANTS.speed_of_light / self.resonance_frequency_hz() / CONSTANTS.nm_to_meter
    }

    /// 角频率 ω 处的复极化率
    pub fn susceptibility(&self, omega: f64) -> Complex64 {
        let denominator = Complex64::new(
            self.omega_0 * self.omega_0 - omega * omega,
            -self.gamma * omega,
        );
        let numerator = self.oscillator_strength
            * CONSTANTS.elementary_charge
            * CONSTANTS.elementary_charge;
        numerator / (CONSTANTS.electron_mass * denominator)
    }

    /// 逐点计算复极化率
    pub fn susceptibility_series(&self, omegas: &[f64]) -> Vec<Complex64> {
        omegas.iter().map(|&w| self.susceptibility(w)).collect()
    }

    /// 吸收截面 Im χ（任意单位）
    pub fn absorption_cross_section(&self, omega: f64) -> f64 {
        self.susceptibility(omega).im
    }

    /// 计算归一化吸收谱（峰值 = 1.0）
    ///
    /// 波长 → 频率 → 角频率 → 吸收截面，再整体除以最大值。
    /// 若所有截面都 ≤ 0，结果为非有限值；调用方需保证 ω₀ 落在波长范围内。
    pub fn absorption_spectrum(&self, wavelengths_nm: &[f64]) -> Result<Vec<f64>> {
        let omegas: Vec<f64> = wavelengths_to_frequencies(wavelengths_nm)?
            .into_iter()
            .map(angular_frequency)
            .collect();

        let cross_section: Vec<f64> = self
            .susceptibility_series(&omegas)
            .into_iter()
            .map(|chi| chi.im)
            .collect();

        let max = cross_section
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(cross_section.into_iter().map(|s| s / max).collect())
    }

    /// 半高全宽 γ/2π（Hz）
    pub fn fwhm(&self) -> f64 {
        self.gamma / (2.0 * PI)
    }

    /// 品质因子 Q = ω₀/γ
    pub fn quality_factor(&self) -> f64 {
        self.omega_0 / self.gamma
    }
}

/// 由峰位和带宽（nm）构造谐振子
pub fn fit_lorentz_to_peak(
    peak_wavelength_nm: f64,
    width_nm: f64,
    oscillator_strength: f64,
) -> Result<LorentzResonator> {
    let peak_freq = wavelength_to_frequency(peak_wavelength_nm)?;
    let omega_0 = angular_frequency(peak_freq);

    // 一阶近似: Δf ≈ c·Δλ/λ²，λ 以 nm 计故乘 1e9
    let freq_width = CONSTANTS.speed_of_light * width_nm
        / (peak_wavelength_nm * peak_wavelength_nm)
        / CONSTANTS.nm_to_meter;
    let gamma = angular_frequency(freq_width);

    Ok(LorentzResonator::new(omega_0, gamma).with_strength(oscillator_strength))
}

/// 多个谐振子的合成吸收谱
///
/// 各谐振子先各自归一化再逐点相加，因此振子强度的相对权重会丢失。
/// 需要按强度叠加时应直接合成未归一化的截面。
pub fn combine_resonators(
    wavelengths_nm: &[f64],
    resonators: &[LorentzResonator],
) -> Result<Vec<f64>> {
    let mut total = vec![0.0; wavelengths_nm.len()];

    for resonator in resonators {
        let spectrum = resonator.absorption_spectrum(wavelengths_nm)?;
        for (t, s) in total.iter_mut().zip(spectrum) {
            *t += s;
        }
    }

    let max = total.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        for t in total.iter_mut() {
            *t /= max;
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LorentzError;
    use crate::models::linspace;

    fn argmax(values: &[f64]) -> usize {
        let mut best = 0;
        for (i, v) in values.iter().enumerate() {
            if *v > values[best] {
                best = i;
            }
        }
        best
    }

    #[test]
    fn test_quality_factor_and_fwhm() {
        let r = LorentzResonator::new(7.0e15, 2.0e14);
        assert_eq!(r.quality_factor(), 7.0e15 / 2.0e14);
        assert!((r.quality_factor() - 35.0).abs() < 1e-12);
        assert!((r.fwhm() - 2.0e14 / (2.0 * PI)).abs() < 1e-3);
        assert_eq!(r.oscillator_strength(), 1.0);
    }

    #[test]
    fn test_absorption_is_positive_imaginary_part() {
        let r = LorentzResonator::new(7.0e15, 2.0e14).with_strength(0.5);
        for omega in [1.0e15, 7.0e15, 1.2e16] {
            let chi = r.susceptibility(omega);
            assert!(chi.im > 0.0);
            assert_eq!(r.absorption_cross_section(omega), chi.im);
        }
        // 共振处实部为零
        assert!(r.susceptibility(7.0e15).re.abs() < 1e-30);
    }

    #[test]
    fn test_susceptibility_scales_with_strength() {
        let a = LorentzResonator::new(7.0e15, 2.0e14);
        let b = LorentzResonator::new(7.0e15, 2.0e14).with_strength(2.5);
        let ratio = b.absorption_cross_section(6.5e15) / a.absorption_cross_section(6.5e15);
        assert!((ratio - 2.5).abs() < 1e-12);

        let series = a.susceptibility_series(&[6.0e15, 7.0e15]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1], a.susceptibility(7.0e15));
    }

    #[test]
    fn test_spectrum_normalized_to_unity() {
        let r = fit_lorentz_to_peak(300.0, 20.0, 1.0).unwrap();
        let grid = linspace(200.0, 400.0, 401);
        let spectrum = r.absorption_spectrum(&grid).unwrap();

        assert_eq!(spectrum.len(), grid.len());
        assert!(spectrum.iter().any(|&a| a == 1.0));
        assert!(spectrum.iter().all(|&a| a <= 1.0 && a > 0.0));
    }

    #[test]
    fn test_spectrum_propagates_invalid_wavelength() {
        let r = LorentzResonator::new(7.0e15, 2.0e14);
        match r.absorption_spectrum(&[250.0, 0.0, 300.0]) {
            Err(LorentzError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_spectrum_of_empty_grid_is_empty() {
        let r = LorentzResonator::new(7.0e15, 2.0e14);
        assert!(r.absorption_spectrum(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_fit_parameters() {
        let r = fit_lorentz_to_peak(260.0, 50.0, 1.0).unwrap();
        // Q = λ/Δλ
        assert!((r.quality_factor() - 5.2).abs() < 1e-9);
        assert!((r.resonance_wavelength_nm() - 260.0).abs() < 1e-9);
        // FWHM ≈ 221.7 THz
        assert!((r.fwhm() / 1e12 - 221.74).abs() < 0.01);
    }

    #[test]
    fn test_fit_rejects_non_positive_peak() {
        assert!(matches!(
            fit_lorentz_to_peak(0.0, 50.0, 1.0),
            Err(LorentzError::InvalidArgument(_))
        ));
        assert!(fit_lorentz_to_peak(-260.0, 50.0, 1.0).is_err());
    }

    #[test]
    fn test_pyridine_peak_position() {
        // 一阶带宽近似使 Im χ 的极大略低于 ω₀，宽带时峰位红移约 1.3 nm
        let r = fit_lorentz_to_peak(260.0, 50.0, 1.0).unwrap();
        let grid = linspace(200.0, 350.0, 500);
        let spectrum = r.absorption_spectrum(&grid).unwrap();
        let peak = grid[argmax(&spectrum)];

        assert!(peak > 260.0);
        assert!((peak - 260.0).abs() < 1.5, "peak at {} nm", peak);
    }

    #[test]
    fn test_narrow_band_peak_within_one_nm() {
        let r = fit_lorentz_to_peak(260.0, 10.0, 1.0).unwrap();
        let grid = linspace(200.0, 350.0, 500);
        let spectrum = r.absorption_spectrum(&grid).unwrap();
        let peak = grid[argmax(&spectrum)];

        assert!((peak - 260.0).abs() < 1.0, "peak at {} nm", peak);
    }

    #[test]
    fn test_combine_identical_resonators() {
        let r = fit_lorentz_to_peak(260.0, 50.0, 1.0).unwrap();
        let grid = linspace(200.0, 350.0, 500);
        let single = r.absorption_spectrum(&grid).unwrap();
        let combined = combine_resonators(&grid, &[r, r]).unwrap();

        for (a, b) in single.iter().zip(&combined) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_combine_empty_is_zero() {
        let grid = linspace(200.0, 350.0, 50);
        let combined = combine_resonators(&grid, &[]).unwrap();
        assert_eq!(combined.len(), 50);
        assert!(combined.iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_combine_ignores_oscillator_strength() {
        let grid = linspace(200.0, 350.0, 300);
        let weak = fit_lorentz_to_peak(220.0, 10.0, 0.1).unwrap();
        let strong = fit_lorentz_to_peak(300.0, 10.0, 10.0).unwrap();
        let combined = combine_resonators(&grid, &[weak, strong]).unwrap();

        let near = |target: f64| {
            grid.iter()
                .enumerate()
                .filter(|(_, w)| (**w - target).abs() < 5.0)
                .map(|(i, _)| combined[i])
                .fold(0.0_f64, f64::max)
        };
        // 两个峰高度接近，强度权重在预归一化中丢失
        assert!((near(220.0) - near(300.0)).abs() < 0.1);
        assert!(combined.iter().all(|&a| a <= 1.0));
    }
}
