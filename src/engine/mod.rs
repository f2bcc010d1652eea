// ==========================================
// 装箱匹配系统 - 引擎层
// ==========================================
// 依据: Carton_Match_Spec.md - §2 系统总览 / 五组件
// ==========================================
// 职责: 实现匹配决策规则, 不做文件 I/O
// 红线: 组件间数据单向流动, 不原地修改上游输出;
//       所有裁决必须输出 reason
// ==========================================

pub mod aggregator;
pub mod assembler;
pub mod candidate;
pub mod error;
pub mod geometry;
pub mod orchestrator;
pub mod selector;

// 重导出核心引擎
pub use aggregator::CaseAggregator;
pub use assembler::ResultAssembler;
pub use candidate::CandidateGenerator;
pub use error::{MatchError, MatchResult};
pub use geometry::GeometryPreprocessor;
pub use orchestrator::{MatchOrchestrator, MatchRunResult};
pub use selector::FitSelector;
