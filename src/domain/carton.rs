// ==========================================
// 装箱匹配系统 - 箱型领域模型
// ==========================================
// 依据: Carton_Match_Spec.md - §3 数据模型 / Carton
// ==========================================
// 红线: 预处理完成后不可变, 引擎层只读
// ==========================================

use crate::domain::types::Orientation;
use serde::{Deserialize, Serialize};

// ==========================================
// RawCarton - 箱型原始记录
// ==========================================
// 用途: 导入层产出, 几何预处理的输入
// 尺寸未经正性校验, 面面积尚未派生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCarton {
    pub carton_id: String, // 箱型唯一标识
    pub length: f64,       // 长(英寸)
    pub breadth: f64,      // 宽(英寸)
    pub height: f64,       // 高(英寸)
}

// ==========================================
// Carton - 预处理后的箱型
// ==========================================
// 面面积不变式: area_lb * height == area_bh * length == area_hl * breadth
// (三者都等于 length * breadth * height)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carton {
    pub carton_id: String,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,

    // ===== 派生字段(Geometry Preprocessor 写入)=====
    pub area_lb: f64, // 长×宽 面面积
    pub area_bh: f64, // 宽×高 面面积
    pub area_hl: f64, // 高×长 面面积
}

impl Carton {
    /// 指定朝向的接触面面积
    pub fn face_area(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Lb => self.area_lb,
            Orientation::Bh => self.area_bh,
            Orientation::Hl => self.area_hl,
        }
    }

    /// 指定朝向的剩余维度(沿该轴可用的堆叠深度)
    ///
    /// # 规则
    /// 剩余维度 = 未参与构成接触面的那条边
    pub fn remaining_dimension(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Lb => self.height,
            Orientation::Bh => self.length,
            Orientation::Hl => self.breadth,
        }
    }
}
