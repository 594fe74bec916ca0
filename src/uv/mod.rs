//! # 紫外吸收光谱模块
//!
//! 标定实验、图表生成与数据导出。
//!
//! ## 子模块
//! - `calibration`: 峰位标定实验
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 和 `constants/`

pub mod calibration;
pub mod export;
pub mod plot;

pub use calibration::{
    run_calibration, CalibrationReport, CalibrationSettings, CalibrationStatus, CalibrationTarget,
};
pub use plot::{MarkerKind, PeakMarker, PlotOptions};
