//! # 吸收光谱图表生成
//!
//! 使用 `plotters` 库绘制归一化吸收谱。
//!
//! ## 功能
//! - 主曲线（填充曲线下方区域）与可选的分量曲线
//! - 目标峰位 / 计算峰位竖线标记
//! - 可选文字注释（如品质因子）
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/calibrate.rs`, `commands/spectrum.rs`, `commands/batch.rs` 调用
//! - 使用 `models/spectrum.rs` 的 AbsorptionSpectrum
//! - 使用 `plotters` 渲染图表

use crate::error::{LorentzError, Result};
use crate::models::AbsorptionSpectrum;

use plotters::prelude::*;
use std::path::Path;

/// 峰位标记类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// 文献目标峰位
    Target,
    /// 模型计算峰位
    Computed,
}

/// 竖线峰位标记
#[derive(Debug, Clone)]
pub struct PeakMarker {
    pub wavelength_nm: f64,
    pub label: String,
    pub kind: MarkerKind,
}

/// 图表配置
#[derive(Debug, Clone)]
pub struct PlotOptions<'a> {
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
    /// 右上角注释文字
    pub annotation: Option<String>,
}

/// 分量曲线配色
const COMPONENT_COLORS: [RGBColor; 5] = [
    RGBColor(230, 97, 1),
    RGBColor(94, 60, 153),
    RGBColor(27, 158, 119),
    RGBColor(217, 95, 2),
    RGBColor(117, 112, 179),
];

/// 生成吸收光谱图
///
/// `main` 为主曲线，`components` 为叠加显示的单个谐振子分量。
pub fn generate_spectrum_plot(
    main: &AbsorptionSpectrum,
    components: &[AbsorptionSpectrum],
    markers: &[PeakMarker],
    output_path: &Path,
    options: &PlotOptions,
) -> Result<()> {
    if main.is_empty() {
        return Err(LorentzError::PlotError(format!(
            "Spectrum '{}' has no data points",
            main.label
        )));
    }

    if options.use_svg {
        let root =
            SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_spectrum_chart(&root, main, components, markers, options)?;
        root.present()
            .map_err(|e| LorentzError::PlotError(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_spectrum_chart(&root, main, components, markers, options)?;
        root.present()
            .map_err(|e| LorentzError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_spectrum_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    main: &AbsorptionSpectrum,
    components: &[AbsorptionSpectrum],
    markers: &[PeakMarker],
    options: &PlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?;

    let (x_min, x_max) = main.wavelength_bounds().unwrap_or((200.0, 350.0));

    let mut chart = ChartBuilder::on(root)
        .caption(options.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..1.1)
        .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Wavelength (nm)")
        .y_desc("Normalized Absorption")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?;

    // 填充主曲线下方区域
    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(AreaSeries::new(main.points(), 0.0, line_color.mix(0.15)))
        .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?;

    chart
        .draw_series(LineSeries::new(main.points(), line_color.stroke_width(2)))
        .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?
        .label(main.label.clone())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    for (i, component) in components.iter().enumerate() {
        let color = COMPONENT_COLORS[i % COMPONENT_COLORS.len()];
        chart
            .draw_series(LineSeries::new(component.points(), color.stroke_width(1)))
            .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?
            .label(component.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    for marker in markers {
        if marker.wavelength_nm < x_min || marker.wavelength_nm > x_max {
            continue;
        }
        let color = match marker.kind {
            MarkerKind::Target => RED,
            MarkerKind::Computed => RGBColor(0, 153, 51),
        };
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(marker.wavelength_nm, 0.0), (marker.wavelength_nm, 1.05)],
                color.stroke_width(2),
            )))
            .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?
            .label(marker.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if let Some(ref text) = options.annotation {
        let x_pos = x_min + (x_max - x_min) * 0.05;
        chart
            .draw_series(std::iter::once(Text::new(
                text.clone(),
                (x_pos, 1.05),
                ("sans-serif", 16).into_font().color(&BLACK),
            )))
            .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| LorentzError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
