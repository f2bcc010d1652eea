// ==========================================
// 装箱匹配系统 - 领域类型定义
// ==========================================
// 依据: Carton_Match_Spec.md - §3 数据模型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 摆放朝向 (Orientation)
// ==========================================
// 箱体三个轴对齐面配对之一:
// - LB: 接触面 = 长×宽, 剩余维度 = 高
// - BH: 接触面 = 宽×高, 剩余维度 = 长
// - HL: 接触面 = 高×长, 剩余维度 = 宽
// 红线: 枚举顺序 LB → BH → HL 固定, 影响平局裁决
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    Lb, // 长×宽面, 沿高堆叠
    Bh, // 宽×高面, 沿长堆叠
    Hl, // 高×长面, 沿宽堆叠
}

impl Orientation {
    /// 固定评估顺序(候选生成与平局裁决共用)
    pub const ALL: [Orientation; 3] = [Orientation::Lb, Orientation::Bh, Orientation::Hl];

    /// 平局裁决用的固定序号(LB=0, BH=1, HL=2)
    pub fn rank(&self) -> u8 {
        match self {
            Orientation::Lb => 0,
            Orientation::Bh => 1,
            Orientation::Hl => 2,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Lb => write!(f, "LB"),
            Orientation::Bh => write!(f, "BH"),
            Orientation::Hl => write!(f, "HL"),
        }
    }
}

// ==========================================
// 匹配状态 (Fit Status)
// ==========================================
// 红线: NO_BOX_FOUND 是合法的终态结果, 不是错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitStatus {
    PerfectFit, // 剩余维度 ≥ 堆叠高度, 最紧凑可行解
    Fallback,   // 面积匹配但高度不足, 溢出最小的次优解
    NoBoxFound, // 没有任何箱面能容纳主导 SKU
}

impl FitStatus {
    /// 报表用人类可读标签
    pub fn label(&self) -> &'static str {
        match self {
            FitStatus::PerfectFit => "Perfect Fit",
            FitStatus::Fallback => "Fallback",
            FitStatus::NoBoxFound => "No Box Found",
        }
    }
}

impl fmt::Display for FitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitStatus::PerfectFit => write!(f, "PERFECT_FIT"),
            FitStatus::Fallback => write!(f, "FALLBACK"),
            FitStatus::NoBoxFound => write!(f, "NO_BOX_FOUND"),
        }
    }
}
