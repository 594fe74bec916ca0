//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `uv/`, `models/`, `constants/`, `utils/`
//! - 子模块: calibrate, spectrum, convert, constants, batch

pub mod batch;
pub mod calibrate;
pub mod constants;
pub mod convert;
pub mod spectrum;

use crate::cli::common::OutputFormat;
use crate::cli::Commands;
use crate::error::Result;
use crate::models::AbsorptionSpectrum;
use crate::uv::{self, PeakMarker, PlotOptions};

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calibrate(args) => calibrate::execute(args),
        Commands::Spectrum(args) => spectrum::execute(args),
        Commands::Convert(args) => convert::execute(args),
        Commands::Constants => constants::execute(),
        Commands::Batch(args) => batch::execute(args),
    }
}

/// 按格式写出光谱（图像或数据文件）
///
/// `comments` 只写入 XY 文件头；`components` 在图像中叠加绘制，
/// 在 CSV / XY 中逐列追加。
pub(crate) fn save_spectrum(
    main: &AbsorptionSpectrum,
    components: &[AbsorptionSpectrum],
    markers: &[PeakMarker],
    comments: &[String],
    output: &Path,
    format: OutputFormat,
    plot: &PlotOptions,
) -> Result<()> {
    if format.is_image() {
        let options = PlotOptions {
            use_svg: format == OutputFormat::Svg,
            ..plot.clone()
        };
        return uv::plot::generate_spectrum_plot(main, components, markers, output, &options);
    }

    match format {
        OutputFormat::Csv => uv::export::to_csv(main, components, output),
        _ => uv::export::to_xy(main, components, comments, output),
    }
}
