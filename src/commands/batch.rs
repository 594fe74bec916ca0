//! # batch 子命令实现
//!
//! 从 CSV 读取多个标定目标，并行运行标定实验并汇总。
//!
//! ## 功能
//! - 读取 `name,peak_nm,width_nm[,strength]` 格式的目标表
//! - 并行计算（rayon），每个目标独立拥有自己的谐振子
//! - 可选逐目标输出光谱文件，文件名按目标名去重
//! - 已存在的光谱文件不重写，但该目标仍进入汇总
//! - 汇总 CSV 与终端表格
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块进行并行处理
//! - 使用 `uv/calibration.rs` 进行计算

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::cli::common::{parse_range, require_positive, OutputFormat};
use crate::commands::save_spectrum;
use crate::error::{LorentzError, Result};
use crate::uv::{
    run_calibration, CalibrationReport, CalibrationSettings, CalibrationStatus,
    CalibrationTarget, MarkerKind, PeakMarker, PlotOptions,
};
use crate::utils::output;

use serde::Serialize;
use std::collections::HashSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tabled::{Table, Tabled};

/// 汇总 CSV 表头，与 `SummaryRow` 字段顺序一致
const SUMMARY_HEADER: [&str; 8] = [
    "name",
    "peak_nm",
    "width_nm",
    "computed_peak_nm",
    "deviation_nm",
    "quality_factor",
    "fwhm_thz",
    "status",
];

/// 汇总表中的一行
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub peak_nm: f64,
    pub width_nm: f64,
    pub computed_peak_nm: f64,
    pub deviation_nm: f64,
    pub quality_factor: f64,
    pub fwhm_thz: f64,
    pub status: CalibrationStatus,
}

impl From<&CalibrationReport> for SummaryRow {
    fn from(report: &CalibrationReport) -> Self {
        SummaryRow {
            name: report.target.name.clone(),
            peak_nm: report.target.peak_nm,
            width_nm: report.target.width_nm,
            computed_peak_nm: report.computed_peak_nm,
            deviation_nm: report.deviation_nm,
            quality_factor: report.resonator.quality_factor(),
            fwhm_thz: report.resonator.fwhm() / 1e12,
            status: report.status,
        }
    }
}

/// 终端表格行
#[derive(Tabled)]
struct SummaryTableRow {
    #[tabled(rename = "Target")]
    name: String,
    #[tabled(rename = "Peak (nm)")]
    peak: String,
    #[tabled(rename = "Computed (nm)")]
    computed: String,
    #[tabled(rename = "Δ (nm)")]
    deviation: String,
    #[tabled(rename = "Q")]
    quality: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 批量处理配置
struct BatchCalibrationConfig {
    settings: CalibrationSettings,
    spectra_dir: Option<PathBuf>,
    format: OutputFormat,
    overwrite: bool,
}

/// 单个批处理任务：目标及其光谱输出路径
#[derive(Debug, Clone)]
struct BatchJob {
    target: CalibrationTarget,
    spectrum_path: Option<PathBuf>,
}

/// 执行批量标定
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Lorentz Resonator Calibration");

    let targets = load_targets(&args.input)?;
    if targets.is_empty() {
        output::print_warning(&format!(
            "No calibration targets found in '{}'",
            args.input.display()
        ));
        return Ok(());
    }
    output::print_info(&format!("Loaded {} calibration targets", targets.len()));

    let (range_min, range_max) = parse_range(&args.range)?;

    if let Some(ref dir) = args.spectra_dir {
        fs::create_dir_all(dir).map_err(|e| LorentzError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    // 创建共享配置
    let config = Arc::new(BatchCalibrationConfig {
        settings: CalibrationSettings {
            range_min_nm: range_min,
            range_max_nm: range_max,
            points: args.points,
            tolerance_nm: args.tolerance,
        },
        spectra_dir: args.spectra_dir.clone(),
        format: args.format,
        overwrite: args.overwrite,
    });

    // 并行处理
    let jobs = plan_jobs(targets, &config);
    let runner = BatchRunner::new(args.jobs).with_progress(!args.no_progress);
    output::print_info(&format!("Running with {} parallel jobs", runner.jobs()));
    let result = runner.run(jobs, |job| process_target(job, &config))?;

    write_summary(&result.outputs, &args.output)?;
    print_summary_table(&result.outputs);

    for reason in result.skip_reasons.iter().take(10) {
        output::print_warning(reason);
    }
    if result.skip_reasons.len() > 10 {
        output::print_warning(&format!("... and {} more", result.skip_reasons.len() - 10));
    }

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} targets ({} success, {} skipped, {} failed)",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));
    output::print_success(&format!("Summary saved to '{}'", args.output.display()));

    if !result.failures.is_empty() {
        output::print_warning("Failed targets:");
        for (name, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", name, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 读取目标表
pub fn load_targets(path: &Path) -> Result<Vec<CalibrationTarget>> {
    if !path.is_file() {
        return Err(LorentzError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| LorentzError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut targets = Vec::new();
    for record in rdr.deserialize() {
        let target: CalibrationTarget = record?;
        targets.push(target);
    }
    Ok(targets)
}

/// 为每个目标分配光谱输出路径
///
/// 不同名称清洗后可能得到相同文件名（大小写不敏感比较），
/// 冲突时追加行号，保证并行任务不会写同一个文件。
fn plan_jobs(targets: Vec<CalibrationTarget>, config: &BatchCalibrationConfig) -> Vec<BatchJob> {
    let stems = unique_file_stems(&targets);
    targets
        .into_iter()
        .zip(stems)
        .map(|(target, stem)| BatchJob {
            spectrum_path: config.spectra_dir.as_ref().map(|dir| {
                dir.join(format!("{}_spectrum.{}", stem, config.format.extension()))
            }),
            target,
        })
        .collect()
}

/// 处理单个目标
fn process_target(
    job: &BatchJob,
    config: &Arc<BatchCalibrationConfig>,
) -> ProcessResult<SummaryRow> {
    let target = &job.target;

    if let Err(e) = require_positive(target.width_nm, "Band width") {
        return ProcessResult::Failed(target.name.clone(), e.to_string());
    }

    let report = match run_calibration(target, &config.settings) {
        Ok(r) => r,
        Err(e) => return ProcessResult::Failed(target.name.clone(), e.to_string()),
    };
    let row = SummaryRow::from(&report);

    if let Some(ref path) = job.spectrum_path {
        if path.exists() && !config.overwrite {
            return ProcessResult::Skipped(
                row,
                format!("Spectrum exists, not rewritten: {}", path.display()),
            );
        }
        if let Err(e) = write_target_spectrum(&report, path, config.format) {
            return ProcessResult::Failed(target.name.clone(), e.to_string());
        }
    }

    ProcessResult::Success(row)
}

/// 写出单个目标的光谱
fn write_target_spectrum(
    report: &CalibrationReport,
    path: &Path,
    format: OutputFormat,
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
        format!("Status: {}", report.status),
    ];
    let plot = PlotOptions {
        title: &report.target.name,
        width: 1200,
        height: 800,
        use_svg: false,
        annotation: Some(format!("Q = {:.1}", report.resonator.quality_factor())),
    };

    save_spectrum(&report.spectrum, &[], &markers, &comments, path, format, &plot)
}

/// 写出汇总 CSV，没有任何结果时也写出表头
pub fn write_summary(rows: &[SummaryRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;
    wtr.write_record(SUMMARY_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| LorentzError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// 打印汇总表格
fn print_summary_table(rows: &[SummaryRow]) {
    let table_rows: Vec<SummaryTableRow> = rows
        .iter()
        .take(20)
        .map(|r| SummaryTableRow {
            name: r.name.clone(),
            peak: format!("{:.1}", r.peak_nm),
            computed: format!("{:.1}", r.computed_peak_nm),
            deviation: format!("{:.2}", r.deviation_nm),
            quality: format!("{:.1}", r.quality_factor),
            status: r.status.to_string(),
        })
        .collect();

    if !table_rows.is_empty() {
        output::print_header(&format!("Calibration Summary ({} targets)", rows.len()));
        println!("{}", Table::new(&table_rows));
    }
}

/// 把目标名称转换为安全的文件名
fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "target".to_string()
    } else {
        stem
    }
}

/// 按输入顺序生成互不冲突的文件名
fn unique_file_stems(targets: &[CalibrationTarget]) -> Vec<String> {
    let mut used = HashSet::new();
    targets
        .iter()
        .enumerate()
        .map(|(i, target)| {
            let base = sanitize_file_stem(&target.name);
            let mut stem = base.clone();
            let mut n = i + 1;
            while !used.insert(stem.to_lowercase()) {
                stem = format!("{}_{}", base, n);
                n += 1;
            }
            stem
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lorentzkit_batch_{}", name))
    }

    #[test]
    fn test_load_targets_trims_fields() {
        let path = temp_path("targets.csv");
        fs::write(
            &path,
            "name,peak_nm,width_nm,strength\nPyridine, 260, 50, 1.0\nBenzene,255,20,0.5\n",
        )
        .unwrap();

        let targets = load_targets(&path).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0], CalibrationTarget::new("Pyridine", 260.0, 50.0, 1.0));
        assert_eq!(targets[1].name, "Benzene");
        assert_eq!(targets[1].peak_nm, 255.0);
        assert_eq!(targets[1].strength, 0.5);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_targets_without_strength_column() {
        let path = temp_path("targets_short.csv");
        fs::write(&path, "name,peak_nm,width_nm\nAcetone,275,30\n").unwrap();

        let targets = load_targets(&path).unwrap();
        assert_eq!(targets[0].strength, 1.0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_targets_missing_file() {
        assert!(matches!(
            load_targets(Path::new("/nonexistent/targets.csv")),
            Err(LorentzError::FileNotFound { .. })
        ));
    }

    fn config(spectra_dir: Option<PathBuf>) -> Arc<BatchCalibrationConfig> {
        Arc::new(BatchCalibrationConfig {
            settings: CalibrationSettings::default(),
            spectra_dir,
            format: OutputFormat::Xy,
            overwrite: false,
        })
    }

    fn job(target: CalibrationTarget) -> BatchJob {
        BatchJob {
            target,
            spectrum_path: None,
        }
    }

    #[test]
    fn test_process_and_summarize() {
        let config = config(None);

        let good = CalibrationTarget::new("Narrow band", 260.0, 10.0, 1.0);
        let row = match process_target(&job(good), &config) {
            ProcessResult::Success(row) => row,
            other => panic!("Expected success, got {:?}", other),
        };
        assert_eq!(row.status, CalibrationStatus::Success);

        let bad = CalibrationTarget::new("Bad", 0.0, 10.0, 1.0);
        assert!(matches!(
            process_target(&job(bad), &config),
            ProcessResult::Failed(_, _)
        ));

        let path = temp_path("summary.csv");
        write_summary(&[row], &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("name,peak_nm,width_nm,computed_peak_nm,deviation_nm,quality_factor,fwhm_thz,status")
        );
        let data = lines.next().unwrap();
        assert!(data.starts_with("Narrow band,260.0,10.0,"));
        assert!(data.ends_with(",SUCCESS"));
        assert_eq!(lines.next(), None);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_summary_has_header() {
        let path = temp_path("summary_empty.csv");
        write_summary(&[], &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), vec![SUMMARY_HEADER.join(",")]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_non_positive_width_fails_target() {
        let config = config(None);
        for width in [0.0, -10.0, f64::NAN] {
            let target = CalibrationTarget::new("Flat", 260.0, width, 1.0);
            match process_target(&job(target), &config) {
                ProcessResult::Failed(name, err) => {
                    assert_eq!(name, "Flat");
                    assert!(err.contains("Band width must be positive"));
                }
                other => panic!("Expected failure for width {}, got {:?}", width, other),
            }
        }
    }

    #[test]
    fn test_spectrum_file_written_then_kept() {
        let dir = temp_path("spectra_kept");
        fs::create_dir_all(&dir).unwrap();
        let config = config(Some(dir.clone()));

        let target = CalibrationTarget::new("Pyridine (gas)", 260.0, 50.0, 1.0);
        let jobs = plan_jobs(vec![target], &config);
        let expected = dir.join("Pyridine__gas__spectrum.xy");
        assert_eq!(jobs[0].spectrum_path.as_deref(), Some(expected.as_path()));
        fs::remove_file(&expected).ok();

        assert!(matches!(
            process_target(&jobs[0], &config),
            ProcessResult::Success(_)
        ));
        assert!(expected.exists());
        match process_target(&jobs[0], &config) {
            ProcessResult::Skipped(row, reason) => {
                assert_eq!(row.name, "Pyridine (gas)");
                assert!(reason.contains("Pyridine__gas__spectrum.xy"));
            }
            other => panic!("Expected skipped, got {:?}", other),
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_rerun_keeps_every_target_in_summary() {
        let dir = temp_path("spectra_rerun");
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        let config = config(Some(dir.clone()));
        let targets = vec![
            CalibrationTarget::new("Pyridine", 260.0, 50.0, 1.0),
            CalibrationTarget::new("Narrow band", 260.0, 10.0, 1.0),
        ];
        let runner = BatchRunner::new(2).with_progress(false);

        let first = runner
            .run(plan_jobs(targets.clone(), &config), |j| process_target(j, &config))
            .unwrap();
        assert_eq!(first.success, 2);

        let second = runner
            .run(plan_jobs(targets, &config), |j| process_target(j, &config))
            .unwrap();
        assert_eq!(second.skipped, 2);
        assert_eq!(second.outputs.len(), 2);

        let summary = dir.join("summary.csv");
        write_summary(&second.outputs, &summary).unwrap();
        let text = fs::read_to_string(&summary).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Pyridine,"));
        assert!(lines[2].starts_with("Narrow band,"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_colliding_names_get_distinct_files() {
        let targets = vec![
            CalibrationTarget::new("Pyridine (gas)", 260.0, 50.0, 1.0),
            CalibrationTarget::new("Pyridine [gas]", 260.0, 50.0, 1.0),
            CalibrationTarget::new("pyridine (GAS)", 260.0, 50.0, 1.0),
            CalibrationTarget::new("Benzene", 255.0, 20.0, 1.0),
        ];
        assert_eq!(
            sanitize_file_stem("Pyridine (gas)"),
            sanitize_file_stem("Pyridine [gas]")
        );

        let stems = unique_file_stems(&targets);
        assert_eq!(
            stems,
            vec!["Pyridine__gas_", "Pyridine__gas__2", "pyridine__GAS__3", "Benzene"]
        );

        let config = config(Some(PathBuf::from("spectra")));
        let paths: HashSet<PathBuf> = plan_jobs(targets, &config)
            .into_iter()
            .filter_map(|j| j.spectrum_path)
            .collect();
        assert_eq!(paths.len(), 4);
    }
}
