//! # lorentzkit - Lorentz 谐振子紫外吸收光谱工具箱
//!
//! 用经典 Lorentz 谐振子模型计算分子紫外吸收谱，
//! 并把计算峰位与文献值比较（默认目标：吡啶 260 nm）。
//!
//! 模型是经典唯象模型，不涉及任何量子力学求解。
//!
//! ## 子命令
//! - `calibrate` - 峰位标定实验
//! - `spectrum`  - 多吸收带合成光谱
//! - `convert`   - 波长 → 频率 / 能量换算
//! - `constants` - 物理常数与参考波段
//! - `batch`     - 从 CSV 批量标定
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── uv/        (标定实验、绘图、导出)
//!   │     ├── models/    (谐振子模型、光谱数据)
//!   │     └── constants/ (物理常数、单位换算)
//!   ├── batch/      (并行批处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod constants;
mod error;
mod models;
mod utils;
mod uv;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
