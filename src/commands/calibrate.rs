//! # calibrate 子命令实现
//!
//! 标定实验：由文献峰位和带宽构造谐振子，计算吸收谱并验证峰位。
//!
//! ## 功能
//! - 打印输入参数与光子能量
//! - 打印谐振子诊断量（ω₀、Q、FWHM）
//! - 峰位偏差验证（SUCCESS / NEEDS_TUNING）
//! - 输出图像 (PNG/SVG) 或数据文件 (CSV/XY)
//!
//! ## 依赖关系
//! - 使用 `cli/calibrate.rs` 定义的参数
//! - 使用 `uv/calibration.rs` 运行实验
//! - 使用 `constants/bands.rs` 的吡啶参考值

use crate::cli::calibrate::CalibrateArgs;
use crate::cli::common::{guess_format_from_extension, parse_range, OutputFormat};
use crate::commands::save_spectrum;
use crate::constants::PYRIDINE_UV;
use crate::error::{LorentzError, Result};
use crate::uv::{
    run_calibration, CalibrationReport, CalibrationSettings, CalibrationStatus,
    CalibrationTarget, MarkerKind, PeakMarker, PlotOptions,
};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Quantity")]
    quantity: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行标定实验
pub fn execute(args: CalibrateArgs) -> Result<()> {
    output::print_header("Lorentz Resonator UV Absorption Calibration");

    let (range_min, range_max) = parse_range(&args.range)?;

    let target = CalibrationTarget::new(args.name.clone(), args.peak, args.width, args.strength);
    let settings = CalibrationSettings {
        range_min_nm: range_min,
        range_max_nm: range_max,
        points: args.points,
        tolerance_nm: args.tolerance,
    };

    output::print_info(&format!("Target: {} (λ = {} nm)", target.name, target.peak_nm));
    output::print_field("Peak wavelength", &format!("{} nm", target.peak_nm));
    output::print_field("Estimated bandwidth", &format!("{} nm", target.width_nm));
    output::print_field("Oscillator strength", &format!("{}", target.strength));
    if is_pyridine(&target) {
        if let Some(eps) = PYRIDINE_UV.molar_absorptivity {
            output::print_field("Literature ε", &format!("{} L/(mol·cm)", eps));
        }
    }
    println!();

    output::print_info("Constructing Lorentz resonator model...");
    output::print_info(&format!(
        "Computing absorption spectrum over {:.1}-{:.1} nm ({} points)...",
        range_min, range_max, args.points
    ));
    let report = run_calibration(&target, &settings)?;

    print_results_table(&report);

    match report.status {
        CalibrationStatus::Success => output::print_success(&format!(
            "VALIDATION: Peak position matches target (< {} nm error)",
            settings.tolerance_nm
        )),
        CalibrationStatus::NeedsTuning => output::print_warning(&format!(
            "VALIDATION: Peak deviation {:.2} nm exceeds {} nm threshold",
            report.deviation_nm, settings.tolerance_nm
        )),
    }

    if !args.no_output {
        let format = args
            .format
            .unwrap_or_else(|| guess_format_from_extension(&args.output));
        let title = args.title.clone().unwrap_or_else(|| {
            format!("{} UV Absorption Spectrum (Lorentz Resonator Model)", target.name)
        });
        write_report(&report, &args, format, &title)?;
        output::print_success(&format!("Spectrum saved to '{}'", args.output.display()));
    }

    output::print_separator();
    output::print_done(&format!("Experiment status: {}", report.status));

    if args.strict && report.status == CalibrationStatus::NeedsTuning {
        return Err(LorentzError::Other(format!(
            "Peak deviation {:.2} nm exceeds tolerance {} nm",
            report.deviation_nm, settings.tolerance_nm
        )));
    }

    Ok(())
}

fn is_pyridine(target: &CalibrationTarget) -> bool {
    target.name.eq_ignore_ascii_case(PYRIDINE_UV.name)
        && PYRIDINE_UV.peak_wavelength_nm == Some(target.peak_nm)
}

/// 打印诊断结果表格
fn print_results_table(report: &CalibrationReport) {
    let r = &report.resonator;
    let rows = vec![
        ResultRow {
            quantity: "Photon energy",
            value: format!("{:.2} eV", report.photon_energy_ev),
        },
        ResultRow {
            quantity: "Resonance frequency ω₀/2π",
            value: format!("{:.3e} Hz", r.resonance_frequency_hz()),
        },
        ResultRow {
            quantity: "Resonance wavelength",
            value: format!("{:.2} nm", r.resonance_wavelength_nm()),
        },
        ResultRow {
            quantity: "Angular frequency ω₀",
            value: format!("{:.3e} rad/s", r.omega_0()),
        },
        ResultRow {
            quantity: "Damping γ",
            value: format!("{:.3e} rad/s", r.gamma()),
        },
        ResultRow {
            quantity: "Cross-section Im χ(ω₀)",
            value: format!("{:.3e} (arb.)", r.absorption_cross_section(r.omega_0())),
        },
        ResultRow {
            quantity: "Quality factor Q",
            value: format!("{:.1}", r.quality_factor()),
        },
        ResultRow {
            quantity: "FWHM",
            value: format!("{:.2} THz", r.fwhm() / 1e12),
        },
        ResultRow {
            quantity: "Computed peak wavelength",
            value: format!("{:.1} nm", report.computed_peak_nm),
        },
        ResultRow {
            quantity: "Target peak wavelength",
            value: format!("{} nm", report.target.peak_nm),
        },
        ResultRow {
            quantity: "Peak deviation",
            value: format!("{:.2} nm", report.deviation_nm),
        },
    ];

    output::print_header("Results");
    println!("{}", Table::new(&rows));
}

/// 写出光谱文件
fn write_report(
    report: &CalibrationReport,
    args: &CalibrateArgs,
    format: OutputFormat,
    title: &str,
) -> Result<()> {
    let markers = vec![
        PeakMarker {
            wavelength_nm: report.target.peak_nm,
            label: format!("Target: {} nm", report.target.peak_nm),
            kind: MarkerKind::Target,
        },
        PeakMarker {
            wavelength_nm: report.computed_peak_nm,
            label: format!("Computed: {:.1} nm", report.computed_peak_nm),
            kind: MarkerKind::Computed,
        },
    ];

    let comments = vec![
        format!("Target peak: {} nm", report.target.peak_nm),
        format!("Computed peak: {:.4} nm", report.computed_peak_nm),
        format!("Quality factor: {:.4}", report.resonator.quality_factor()),
        format!("FWHM: {:.6e} Hz", report.resonator.fwhm()),
        format!("Status: {}", report.status),
    ];

    let plot = PlotOptions {
        title,
        width: args.width_px,
        height: args.height_px,
        use_svg: false,
        annotation: Some(format!("Q = {:.1}", report.resonator.quality_factor())),
    };

    save_spectrum(
        &report.spectrum,
        &[],
        &markers,
        &comments,
        &args.output,
        format,
        &plot,
    )
}
