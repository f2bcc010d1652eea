// ==========================================
// 装箱匹配系统 - 引擎错误类型
// ==========================================
// 依据: Carton_Match_Spec.md - §7 错误处理设计
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 匹配引擎错误类型
///
/// 红线: "No Box Found" 不在此列 —— 它是报表里的合法终态,
/// 通过 FitStatus::NoBoxFound 表达, 不通过错误通道
#[derive(Error, Debug)]
pub enum MatchError {
    // ===== 几何校验错误 =====
    #[error("非法尺寸 ({entity} {id}, 字段 {field}): 值 {value} 必须为正有限数")]
    InvalidDimension {
        entity: &'static str, // "carton" 或 "sku"
        id: String,
        field: &'static str,
        value: f64,
    },

    // ===== 聚合错误 =====
    #[error("SKU 表为空: 没有任何装箱单元可匹配")]
    EmptyCaseTable,
}

/// Result 类型别名
pub type MatchResult<T> = Result<T, MatchError>;
