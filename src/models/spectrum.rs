//! # 吸收光谱数据模型
//!
//! 波长序列与吸收序列按下标一一对应，长度始终相同。
//!
//! ## 依赖关系
//! - 被 `uv/` 的计算、绘图和导出模块使用
//! - 被 `commands/spectrum.rs` 使用

/// 在 [start, stop] 上生成 n 个等间距采样点（含端点）
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = stop;
            grid
        }
    }
}

/// 吸收光谱
#[derive(Debug, Clone)]
pub struct AbsorptionSpectrum {
    /// 光谱名称（用于图例和导出文件头）
    pub label: String,
    /// 波长（nm）
    pub wavelengths_nm: Vec<f64>,
    /// 归一化吸收（0-1）
    pub absorption: Vec<f64>,
}

impl AbsorptionSpectrum {
    /// 组装光谱，两条序列长度必须相同
    pub fn new(label: impl Into<String>, wavelengths_nm: Vec<f64>, absorption: Vec<f64>) -> Self {
        debug_assert_eq!(wavelengths_nm.len(), absorption.len());
        Self {
            label: label.into(),
            wavelengths_nm,
            absorption,
        }
    }

    pub fn len(&self) -> usize {
        self.wavelengths_nm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths_nm.is_empty()
    }

    /// (波长, 吸收) 数据点
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelengths_nm
            .iter()
            .copied()
            .zip(self.absorption.iter().copied())
    }

    /// 吸收最大的采样点 (波长, 吸收)，并列时取第一个
    ///
    /// 只有严格更大的值才替换当前最大值，因此 NaN 不会顶替已有结果；
    /// 全 NaN 的谱返回第一个采样点。
    pub fn peak(&self) -> Option<(f64, f64)> {
        let mut points = self.points();
        let first = points.next()?;
        Some(points.fold(first, |best, p| if p.1 > best.1 { p } else { best }))
    }

    /// 波长范围 (最小, 最大)
    pub fn wavelength_bounds(&self) -> Option<(f64, f64)> {
        let min = self
            .wavelengths_nm
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max = self
            .wavelengths_nm
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}
