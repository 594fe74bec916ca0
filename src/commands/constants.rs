//! # constants 子命令实现
//!
//! 打印物理常数表和参考光谱波段。
//!
//! ## 依赖关系
//! - 使用 `constants/` 模块的 CONSTANTS, UV_RANGE, PYRIDINE_UV

use crate::constants::{SpectralBand, CONSTANTS, PYRIDINE_UV, UV_RANGE};
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 常数表格行
#[derive(Tabled)]
struct ConstantRow {
    #[tabled(rename = "Constant")]
    name: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

/// 执行常数打印
pub fn execute() -> Result<()> {
    output::print_header("Physical Constants (CODATA 2018, SI)");

    let rows: Vec<ConstantRow> = CONSTANTS
        .entries()
        .into_iter()
        .map(|(name, symbol, value, unit)| ConstantRow {
            name,
            symbol,
            value: format!("{:.10e}", value),
            unit,
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_header("Reference Spectral Bands");
    print_band(&UV_RANGE);
    print_band(&PYRIDINE_UV);

    Ok(())
}

/// 打印单个波段的已知字段
fn print_band(band: &SpectralBand) {
    output::print_info(band.name);

    let fields = [
        ("Wavelength min", band.wavelength_min_nm, "nm"),
        ("Wavelength max", band.wavelength_max_nm, "nm"),
        ("Frequency min", band.frequency_min_hz, "Hz"),
        ("Frequency max", band.frequency_max_hz, "Hz"),
        ("Peak wavelength", band.peak_wavelength_nm, "nm"),
        ("Peak frequency", band.peak_frequency_hz, "Hz"),
        ("Peak energy", band.peak_energy_ev, "eV"),
        ("Molar absorptivity", band.molar_absorptivity, "L/(mol·cm)"),
    ];

    for (key, value, unit) in fields {
        if let Some(v) = value {
            output::print_field(key, &format!("{} {}", format_value(v), unit));
        }
    }
    println!();
}

fn format_value(v: f64) -> String {
    if v.abs() >= 1e5 {
        format!("{:.4e}", v)
    } else {
        format!("{}", v)
    }
}
