// ==========================================
// 装箱匹配系统 - SKU 与装箱单元领域模型
// ==========================================
// 依据: Carton_Match_Spec.md - §3 数据模型 / SkuItem, CaseSummary
// ==========================================
// 红线: 底面积只用长×宽, 高度专供堆叠计算
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawSkuItem - SKU 原始记录
// ==========================================
// 用途: 导入层产出, 几何预处理的输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSkuItem {
    pub sku: String,     // SKU 编码
    pub case_id: String, // 所属装箱单元标识
    pub length: f64,     // 长(英寸)
    pub breadth: f64,    // 宽(英寸)
    pub height: f64,     // 高(英寸)
}

// ==========================================
// SkuItem - 预处理后的 SKU
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuItem {
    pub sku: String,
    pub case_id: String,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,

    // ===== 派生字段(Geometry Preprocessor 写入)=====
    pub footprint_area: f64, // 底面积 = 长×宽
}

// ==========================================
// CaseSummary - 装箱单元汇总
// ==========================================
// 用途: Case Aggregator 输出, 候选生成与报表的输入
// 每个 case_id 恰好一条; skus 保持原始输入顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub case_id: String,
    pub skus: Vec<String>,     // 成员 SKU, 按输入顺序
    pub dominant_sku: String,  // 底面积最大的 SKU(平局取先出现者)
    pub dominant_area: f64,    // 主导 SKU 的底面积
    pub stack_height: f64,     // 成员高度之和(严格为正)
}
