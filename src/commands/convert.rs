//! # convert 子命令实现
//!
//! 把一组波长换算为频率、角频率、光子能量和波数，并以表格输出。
//! `--ev` 时输入为光子能量，先换回波长再走同一条路径。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `constants/conversion.rs` 的换算函数

use crate::cli::convert::ConvertArgs;
use crate::constants::{
    angular_frequency, energy_ev_to_wavelength, frequency_to_energy, frequency_to_wavenumber,
    wavelengths_to_energies_ev, wavelengths_to_frequencies,
};
use crate::error::{LorentzError, Result};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 换算结果行
#[derive(Debug, Tabled)]
struct ConversionRow {
    #[tabled(rename = "λ (nm)")]
    wavelength: String,
    #[tabled(rename = "f (Hz)")]
    frequency: String,
    #[tabled(rename = "ω (rad/s)")]
    angular: String,
    #[tabled(rename = "E (J)")]
    energy_j: String,
    #[tabled(rename = "E (eV)")]
    energy_ev: String,
    #[tabled(rename = "ν̃ (cm⁻¹)")]
    wavenumber: String,
}

/// 执行单位换算
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Wavelength Conversion");

    let wavelengths = if args.ev {
        wavelengths_from_energies(&args.values)?
    } else {
        args.values
    };

    let rows = conversion_rows(&wavelengths)?;
    println!("{}", Table::new(&rows));

    output::print_done(&format!("Converted {} wavelength(s)", rows.len()));
    Ok(())
}

/// 光子能量（eV）→ 波长（nm），非正能量报告其下标
fn wavelengths_from_energies(energies_ev: &[f64]) -> Result<Vec<f64>> {
    energies_ev
        .iter()
        .enumerate()
        .map(|(i, &ev)| {
            if ev.is_nan() || ev <= 0.0 {
                Err(LorentzError::InvalidArgument(format!(
                    "Photon energy must be positive, got {} eV at index {}",
                    ev, i
                )))
            } else {
                Ok(energy_ev_to_wavelength(ev))
            }
        })
        .collect()
}

/// 生成换算表格行，任一波长非正即失败
fn conversion_rows(wavelengths_nm: &[f64]) -> Result<Vec<ConversionRow>> {
    let frequencies = wavelengths_to_frequencies(wavelengths_nm)?;
    let energies_ev = wavelengths_to_energies_ev(wavelengths_nm)?;

    Ok(wavelengths_nm
        .iter()
        .zip(frequencies.iter().zip(&energies_ev))
        .map(|(wl, (f, ev))| ConversionRow {
            wavelength: format!("{:.2}", wl),
            frequency: format!("{:.4e}", f),
            angular: format!("{:.4e}", angular_frequency(*f)),
            energy_j: format!("{:.4e}", frequency_to_energy(*f)),
            energy_ev: format!("{:.4}", ev),
            wavenumber: format!("{:.1}", frequency_to_wavenumber(*f)),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::wavelength_to_energy_ev;

    #[test]
    fn test_conversion_rows() {
        let rows = conversion_rows(&[260.0, 500.0]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].energy_ev, "4.7686");
        assert_eq!(rows[1].wavenumber, "20000.0");
    }

    #[test]
    fn test_conversion_rejects_non_positive() {
        assert!(matches!(
            conversion_rows(&[260.0, -5.0]),
            Err(LorentzError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_energies_back_to_wavelengths() {
        let ev = wavelength_to_energy_ev(260.0).unwrap();
        let wavelengths = wavelengths_from_energies(&[ev]).unwrap();
        assert!((wavelengths[0] - 260.0).abs() < 1e-9);

        let rows = conversion_rows(&wavelengths).unwrap();
        assert_eq!(rows[0].wavelength, "260.00");
        assert_eq!(rows[0].energy_ev, "4.7686");
    }

    #[test]
    fn test_energies_reject_non_positive() {
        match wavelengths_from_energies(&[4.0, 0.0]) {
            Err(LorentzError::InvalidArgument(msg)) => assert!(msg.contains("index 1")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }
}
