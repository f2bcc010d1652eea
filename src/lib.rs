// ==========================================
// 装箱匹配系统 - 核心库
// ==========================================
// 依据: Carton_Match_Spec.md
// 系统定位: 箱型选择决策支持
// 核心: 主导 SKU 底面积决定面匹配, 堆叠高度决定可行性
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 匹配决策规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 源表列映射
pub mod config;

// 报表层 - 结果输出
pub mod report;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{FitStatus, Orientation};

// 领域实体
pub use domain::{
    Candidate, Carton, CaseMatch, CaseSummary, RawCarton, RawSkuItem, ReportRow, SelectedCarton,
    SkuItem,
};

// 引擎
pub use engine::{
    CandidateGenerator, CaseAggregator, FitSelector, GeometryPreprocessor, MatchError,
    MatchOrchestrator, MatchResult, MatchRunResult, ResultAssembler,
};

// 导入与报表
pub use config::ImportConfig;
pub use importer::{ImportError, TableLoader};
pub use report::ReportWriter;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "装箱匹配系统";
