//! # 物理常数
//!
//! SI 单位制下的基本物理常数，数值取自 CODATA 2018。
//!
//! 所有常数集中在一个不可变的 `PhysicalConstants` 值对象中，
//! 进程内只有一个静态实例 `CONSTANTS`，没有任何修改接口。
//!
//! ## 依赖关系
//! - 被 `constants/conversion.rs`, `models/resonator.rs` 使用
//! - 被 `commands/constants.rs` 用于打印常数表

use std::f64::consts::PI;

/// 物理常数集合（SI 单位）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Planck 常数 h（J·s）
    pub planck: f64,
    /// 约化 Planck 常数 ħ = h/2π（J·s）
    pub hbar: f64,
    /// 真空光速 c（m/s）
    pub speed_of_light: f64,
    /// 元电荷 e（C）
    pub elementary_charge: f64,
    /// 电子质量 mₑ（kg）
    pub electron_mass: f64,
    /// Boltzmann 常数 k_B（J/K）
    pub boltzmann: f64,
    /// Avogadro 常数 N_A（mol⁻¹）
    pub avogadro: f64,
    /// 精细结构常数 α（无量纲）
    pub fine_structure: f64,
    /// Bohr 半径 a₀（m）
    pub bohr_radius: f64,
    /// Rydberg 能量（eV）
    pub rydberg_energy_ev: f64,

    /// 1 eV 对应的焦耳数
    pub ev_to_joule: f64,
    /// 1 nm 对应的米数
    pub nm_to_meter: f64,
    /// 1 THz 对应的 Hz 数
    pub thz_to_hz: f64,
    /// 1 cm⁻¹ 对应的 Hz 数
    pub cm_inv_to_hz: f64,
}

impl PhysicalConstants {
    /// CODATA 2018 推荐值
    pub const CODATA_2018: PhysicalConstants = PhysicalConstants {
        planck: 6.626_070_15e-34,
        hbar: 6.626_070_15e-34 / (2.0 * PI),
        speed_of_light: 299_792_458.0,
        elementary_charge: 1.602_176_634e-19,
        electron_mass: 9.109_383_701_5e-31,
        boltzmann: 1.380_649e-23,
        avogadro: 6.022_140_76e23,
        fine_structure: 7.297_352_569_3e-3,
        bohr_radius: 5.291_772_109_03e-11,
        rydberg_energy_ev: 13.605_693_122_994,

        ev_to_joule: 1.602_176_634e-19,
        nm_to_meter: 1e-9,
        thz_to_hz: 1e12,
        cm_inv_to_hz: 299_792_458.0 * 100.0,
    };

    /// 以 (名称, 符号, 数值, 单位) 形式列出全部常数，供表格输出使用
    pub fn entries(&self) -> Vec<(&'static str, &'static str, f64, &'static str)> {
        vec![
            ("Planck constant", "h", self.planck, "J·s"),
            ("Reduced Planck constant", "ħ", self.hbar, "J·s"),
            ("Speed of light", "c", self.speed_of_light, "m/s"),
            ("Elementary charge", "e", self.elementary_charge, "C"),
            ("Electron mass", "mₑ", self.electron_mass, "kg"),
            ("Boltzmann constant", "k_B", self.boltzmann, "J/K"),
            ("Avogadro constant", "N_A", self.avogadro, "mol⁻¹"),
            ("Fine-structure constant", "α", self.fine_structure, "1"),
            ("Bohr radius", "a₀", self.bohr_radius, "m"),
            ("Rydberg energy", "Ry", self.rydberg_energy_ev, "eV"),
            ("eV to joule", "eV", self.ev_to_joule, "J"),
            ("Nanometre to metre", "nm", self.nm_to_meter, "m"),
            ("THz to Hz", "THz", self.thz_to_hz, "Hz"),
            ("Wavenumber to Hz", "cm⁻¹", self.cm_inv_to_hz, "Hz"),
        ]
    }
}

/// 全局只读常数实例
pub static CONSTANTS: PhysicalConstants = PhysicalConstants::CODATA_2018;
