//! # 光谱单位换算
//!
//! 波长（nm）、频率（Hz）、能量（J / eV）之间的换算。
//!
//! ## 校验边界
//! 只有波长→频率方向会做输入校验：任何 λ ≤ 0（包括 NaN）都返回
//! `InvalidArgument`。序列版本逐元素校验，不只检查第一个值。
//! 其余换算都是不做检查的纯算术。
//!
//! ## 依赖关系
//! - 被 `models/resonator.rs` 调用
//! - 被 `commands/convert.rs` 调用
//! - 使用 `constants/physical.rs` 的 CONSTANTS

use crate::constants::physical::CONSTANTS;
use crate::error::{LorentzError, Result};

use std::f64::consts::PI;

/// 波长（nm）→ 频率（Hz），f = c / λ
pub fn wavelength_to_frequency(wavelength_nm: f64) -> Result<f64> {
    if wavelength_nm.is_nan() || wavelength_nm <= 0.0 {
        return Err(LorentzError::InvalidArgument(format!(
            "Wavelength must be positive, got {} nm",
            wavelength_nm
        )));
    }
    Ok(CONSTANTS.speed_of_light / (wavelength_nm * CONSTANTS.nm_to_meter))
}

/// 波长序列（nm）→ 频率序列（Hz）
///
/// 任一元素非正即整体失败，错误信息给出该元素的下标。
pub fn wavelengths_to_frequencies(wavelengths_nm: &[f64]) -> Result<Vec<f64>> {
    wavelengths_nm
        .iter()
        .enumerate()
        .map(|(i, &wl)| {
            wavelength_to_frequency(wl).map_err(|_| {
                LorentzError::InvalidArgument(format!(
                    "Wavelength must be positive, got {} nm at index {}",
                    wl, i
                ))
            })
        })
        .collect()
}

/// 频率（Hz）→ 能量（J），E = h·f
pub fn frequency_to_energy(frequency_hz: f64) -> f64 {
    CONSTANTS.planck * frequency_hz
}

/// 波长（nm）→ 光子能量（eV）
pub fn wavelength_to_energy_ev(wavelength_nm: f64) -> Result<f64> {
    let freq = wavelength_to_frequency(wavelength_nm)?;
    Ok(frequency_to_energy(freq) / CONSTANTS.ev_to_joule)
}

/// 波长序列（nm）→ 光子能量序列（eV）
pub fn wavelengths_to_energies_ev(wavelengths_nm: &[f64]) -> Result<Vec<f64>> {
    let freqs = wavelengths_to_frequencies(wavelengths_nm)?;
    Ok(freqs
        .into_iter()
        .map(|f| frequency_to_energy(f) / CONSTANTS.ev_to_joule)
        .collect())
}

/// 光子能量（eV）→ 波长（nm），`wavelength_to_energy_ev` 的逆运算
pub fn energy_ev_to_wavelength(energy_ev: f64) -> f64 {
    let energy_j = energy_ev * CONSTANTS.ev_to_joule;
    CONSTANTS.planck * CONSTANTS.speed_of_light / energy_j / CONSTANTS.nm_to_meter
}

/// 频率（Hz）→ 波数（cm⁻¹）
pub fn frequency_to_wavenumber(frequency_hz: f64) -> f64 {
    frequency_hz / CONSTANTS.cm_inv_to_hz
}

/// 频率（Hz）→ 角频率（rad/s），ω = 2πf
pub fn angular_frequency(frequency_hz: f64) -> f64 {
    2.0 * PI * frequency_hz
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_of_known_wavelength() {
        // 500 nm ≈ 599.6 THz
        let f = wavelength_to_frequency(500.0).unwrap();
        assert!((f - 5.995_849_16e14).abs() / f < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_wavelength() {
        for wl in [0.0, -5.0, f64::NAN] {
            match wavelength_to_frequency(wl) {
                Err(LorentzError::InvalidArgument(_)) => {}
                other => panic!("Expected InvalidArgument for {}, got {:?}", wl, other),
            }
        }
    }

    #[test]
    fn test_sequence_validates_every_element() {
        let grid = [200.0, 250.0, -1.0, 300.0];
        match wavelengths_to_frequencies(&grid) {
            Err(LorentzError::InvalidArgument(msg)) => assert!(msg.contains("index 2")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }

        assert!(wavelengths_to_energies_ev(&[100.0, 0.0]).is_err());
    }

    #[test]
    fn test_frequency_strictly_decreasing() {
        let grid: Vec<f64> = (1..=200).map(|i| i as f64 * 5.0).collect();
        let freqs = wavelengths_to_frequencies(&grid).unwrap();
        assert!(freqs.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_energy_round_trip() {
        for wl in [121.6, 260.0, 532.0, 1064.0] {
            let ev = wavelength_to_energy_ev(wl).unwrap();
            let back = energy_ev_to_wavelength(ev);
            assert!((back - wl).abs() < 1e-9, "{} -> {} eV -> {}", wl, ev, back);
        }
    }

    #[test]
    fn test_pyridine_photon_energy() {
        // 260 nm 光子约 4.77 eV
        let ev = wavelength_to_energy_ev(260.0).unwrap();
        assert!((ev - 4.7686).abs() < 1e-3);
    }

    #[test]
    fn test_frequency_to_energy_is_unchecked() {
        assert_eq!(frequency_to_energy(0.0), 0.0);
        assert!(frequency_to_energy(-1.0e15) < 0.0);
    }

    #[test]
    fn test_wavenumber_and_angular_frequency() {
        // 1 cm⁻¹ 对应 c·100 Hz
        let f = CONSTANTS.cm_inv_to_hz * 2500.0;
        assert!((frequency_to_wavenumber(f) - 2500.0).abs() < 1e-9);
        assert!((angular_frequency(1.0) - 2.0 * PI).abs() < 1e-15);
    }

    #[test]
    fn test_input_slice_not_mutated() {
        let grid = vec![200.0, 300.0];
        let copy = grid.clone();
        let _ = wavelengths_to_frequencies(&grid).unwrap();
        assert_eq!(grid, copy);
    }
}
