// ==========================================
// 装箱匹配系统 - 匹配结果领域模型
// ==========================================
// 依据: Carton_Match_Spec.md - §3 数据模型 / Candidate, CaseMatch, ReportRow
// ==========================================
// 红线: 候选与匹配结果每次运行重新生成, 无持久身份
// ==========================================

use crate::domain::types::{FitStatus, Orientation};
use serde::{Deserialize, Serialize};

// ==========================================
// Candidate - 面积可容候选
// ==========================================
// 产生条件: face_area ≥ 主导 SKU 底面积(含相等)
// 同一箱型可以不同朝向多次成为同一 case 的候选
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub case_id: String,
    pub carton_id: String,
    pub orientation: Orientation,
    pub face_area: f64,           // 匹配面的面积
    pub remaining_dimension: f64, // 该朝向下可用的堆叠深度
    pub stack_height: f64,        // 冗余携带, 供高度可行性过滤
}

impl Candidate {
    /// 高度可行: 剩余维度足够容纳整个堆叠
    pub fn is_height_feasible(&self) -> bool {
        self.remaining_dimension >= self.stack_height
    }
}

// ==========================================
// SelectedCarton - 选中的箱型与朝向
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCarton {
    pub carton_id: String,
    pub orientation: Orientation,
    pub face_area: f64,
    pub remaining_dimension: f64,
}

// ==========================================
// CaseMatch - 每个装箱单元的唯一裁决
// ==========================================
// selection 为 None 当且仅当 fit_status == NoBoxFound
// 红线: 所有裁决必须输出 reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseMatch {
    pub case_id: String,
    pub selection: Option<SelectedCarton>,
    pub fit_status: FitStatus,
    pub reasons: Vec<String>, // 裁决原因(可解释性)
}

// ==========================================
// ReportRow - 最终报表行
// ==========================================
// 依据: Carton_Match_Spec.md - §4.5 Result Assembler
// 每个装箱单元恰好一行; 匹配字段在 NO_BOX_FOUND 时为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub case_id: String,
    pub skus: Vec<String>,
    pub dominant_sku: String,
    pub dominant_area: f64,
    pub stack_height: f64,
    pub carton_id: Option<String>,
    pub orientation: Option<Orientation>,
    pub face_area: Option<f64>,
    pub remaining_dimension: Option<f64>,
    pub fit_status: FitStatus,
}
