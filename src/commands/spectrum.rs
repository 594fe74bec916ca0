//! # spectrum 子命令实现
//!
//! 由多个吸收带合成归一化吸收谱。
//!
//! 每个吸收带先各自归一化再求和，振子强度不影响合成谱中的相对峰高。
//!
//! ## 依赖关系
//! - 使用 `cli/spectrum.rs` 定义的参数
//! - 使用 `models/resonator.rs` 拟合与合成
//! - 使用 `commands/mod.rs` 的 save_spectrum 写出结果

use crate::cli::common::{guess_format_from_extension, parse_range};
use crate::cli::spectrum::SpectrumArgs;
use crate::commands::save_spectrum;
use crate::error::Result;
use crate::models::{combine_resonators, fit_lorentz_to_peak, linspace, AbsorptionSpectrum};
use crate::uv::{MarkerKind, PeakMarker, PlotOptions};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 吸收带表格行
#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Peak (nm)")]
    peak: String,
    #[tabled(rename = "Width (nm)")]
    width: String,
    #[tabled(rename = "f")]
    strength: String,
    #[tabled(rename = "Q")]
    quality: String,
    #[tabled(rename = "FWHM (THz)")]
    fwhm: String,
}

/// 执行合成光谱计算
pub fn execute(args: SpectrumArgs) -> Result<()> {
    output::print_header("Combined Lorentz Absorption Spectrum");

    let (range_min, range_max) = parse_range(&args.range)?;
    let wavelengths = linspace(range_min, range_max, args.points);

    let resonators = args
        .bands
        .iter()
        .map(|b| fit_lorentz_to_peak(b.peak_nm, b.width_nm, b.strength))
        .collect::<Result<Vec<_>>>()?;

    output::print_success(&format!("Fitted {} resonator(s)", resonators.len()));

    let rows: Vec<BandRow> = args
        .bands
        .iter()
        .zip(&resonators)
        .enumerate()
        .map(|(i, (band, r))| BandRow {
            index: i + 1,
            peak: format!("{:.1}", band.peak_nm),
            width: format!("{:.1}", band.width_nm),
            strength: format!("{:.3}", r.oscillator_strength()),
            quality: format!("{:.1}", r.quality_factor()),
            fwhm: format!("{:.2}", r.fwhm() / 1e12),
        })
        .collect();
    println!("{}", Table::new(&rows));

    let total = combine_resonators(&wavelengths, &resonators)?;
    let combined = AbsorptionSpectrum::new("Combined", wavelengths.clone(), total);

    let components = if args.show_components {
        args.bands
            .iter()
            .zip(&resonators)
            .map(|(band, r)| -> Result<AbsorptionSpectrum> {
                let absorption = r.absorption_spectrum(&wavelengths)?;
                Ok(AbsorptionSpectrum::new(
                    format!("{:.0} nm band", band.peak_nm),
                    wavelengths.clone(),
                    absorption,
                ))
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let mut markers = Vec::new();
    if let Some((peak_nm, _)) = combined.peak() {
        output::print_info(&format!("Combined peak at {:.1} nm", peak_nm));
        markers.push(PeakMarker {
            wavelength_nm: peak_nm,
            label: format!("Peak: {:.1} nm", peak_nm),
            kind: MarkerKind::Computed,
        });
    }

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    let comments: Vec<String> = args
        .bands
        .iter()
        .map(|b| {
            format!(
                "Band: peak {} nm, width {} nm, strength {}",
                b.peak_nm, b.width_nm, b.strength
            )
        })
        .collect();

    let plot = PlotOptions {
        title: &args.title,
        width: args.width_px,
        height: args.height_px,
        use_svg: false,
        annotation: None,
    };

    save_spectrum(
        &combined,
        &components,
        &markers,
        &comments,
        &args.output,
        format,
        &plot,
    )?;

    output::print_done(&format!("Spectrum saved to '{}'", args.output.display()));
    Ok(())
}
