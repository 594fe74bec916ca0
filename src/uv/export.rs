//! # 吸收光谱数据导出
//!
//! 导出光谱到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: `wavelength_nm,absorption`，有分量时每个分量追加一列
//! - XY: 以 `#` 开头的注释头 + 制表符分隔的数据，分量同样逐列追加
//!
//! ## 依赖关系
//! - 被 `commands/calibrate.rs`, `commands/spectrum.rs`, `commands/batch.rs` 调用
//! - 使用 `models/spectrum.rs` 的 AbsorptionSpectrum
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{LorentzError, Result};
use crate::models::AbsorptionSpectrum;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 分量必须与主曲线共用同一波长网格
fn check_components(main: &AbsorptionSpectrum, components: &[AbsorptionSpectrum]) -> Result<()> {
    match components.iter().find(|c| c.len() != main.len()) {
        Some(c) => Err(LorentzError::InvalidArgument(format!(
            "Component '{}' has {} points, expected {}",
            c.label,
            c.len(),
            main.len()
        ))),
        None => Ok(()),
    }
}

/// 导出为 CSV 格式
pub fn to_csv(
    main: &AbsorptionSpectrum,
    components: &[AbsorptionSpectrum],
    output_path: &Path,
) -> Result<()> {
    check_components(main, components)?;

    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec!["wavelength_nm".to_string(), "absorption".to_string()];
    header.extend(components.iter().map(|c| c.label.clone()));
    wtr.write_record(&header)?;

    for (i, (wl, a)) in main.points().enumerate() {
        let mut record = vec![format!("{:.4}", wl), format!("{:.6}", a)];
        record.extend(components.iter().map(|c| format!("{:.6}", c.absorption[i])));
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| LorentzError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(
    spectrum: &AbsorptionSpectrum,
    components: &[AbsorptionSpectrum],
    comments: &[String],
    output_path: &Path,
) -> Result<()> {
    check_components(spectrum, components)?;

    let write_err = |e: std::io::Error| LorentzError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut file = BufWriter::new(file);

    writeln!(file, "# Absorption Spectrum: {}", spectrum.label).map_err(write_err)?;
    for line in comments {
        writeln!(file, "# {}", line).map_err(write_err)?;
    }
    let mut columns = String::from("wavelength (nm), absorption (normalized)");
    for c in components {
        columns.push_str(", ");
        columns.push_str(&c.label);
    }
    writeln!(file, "# Columns: {}", columns).map_err(write_err)?;
    writeln!(file, "#").map_err(write_err)?;

    for (i, (wl, a)) in spectrum.points().enumerate() {
        write!(file, "{:.4}\t{:.6}", wl, a).map_err(write_err)?;
        for c in components {
            write!(file, "\t{:.6}", c.absorption[i]).map_err(write_err)?;
        }
        writeln!(file).map_err(write_err)?;
    }

    file.flush().map_err(write_err)?;
    Ok(())
}
