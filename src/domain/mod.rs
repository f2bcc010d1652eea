// ==========================================
// 装箱匹配系统 - 领域模型层
// ==========================================
// 依据: Carton_Match_Spec.md - §3 数据模型
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑;
//       所有实体派生完成后不可变
// ==========================================

pub mod carton;
pub mod matching;
pub mod sku;
pub mod types;

// 重导出核心类型
pub use carton::{Carton, RawCarton};
pub use matching::{Candidate, CaseMatch, ReportRow, SelectedCarton};
pub use sku::{CaseSummary, RawSkuItem, SkuItem};
pub use types::{FitStatus, Orientation};
