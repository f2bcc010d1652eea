// ==========================================
// 装箱匹配系统 - 引擎编排器
// ==========================================
// 依据: Carton_Match_Spec.md - §2 系统总览 / 计算主流程
// 用途: 协调五个核心组件的执行顺序
// 数据严格单向流动: 预处理 → 聚合 → 候选生成 → 裁决 → 装配
// ==========================================

use crate::domain::carton::RawCarton;
use crate::domain::matching::ReportRow;
use crate::domain::sku::RawSkuItem;
use crate::domain::types::FitStatus;
use crate::engine::error::MatchResult;
use crate::engine::{
    CandidateGenerator, CaseAggregator, FitSelector, GeometryPreprocessor, ResultAssembler,
};
use tracing::{debug, info};

// ==========================================
// MatchRunResult - 运行结果
// ==========================================
#[derive(Debug, Clone)]
pub struct MatchRunResult {
    pub rows: Vec<ReportRow>,

    // ===== 阶段统计 =====
    pub carton_count: usize,
    pub item_count: usize,
    pub case_count: usize,
    pub candidate_count: usize,
    pub perfect_fit_count: usize,
    pub fallback_count: usize,
    pub no_box_count: usize,
}

// ==========================================
// MatchOrchestrator - 引擎编排器
// ==========================================
pub struct MatchOrchestrator;

impl MatchOrchestrator {
    /// 执行完整匹配流程
    ///
    /// # 参数
    /// - raw_cartons: 箱型原始表(导入层产出)
    /// - raw_items: SKU 原始表(导入层产出)
    ///
    /// # 返回
    /// 每个装箱单元一行的最终报表及阶段统计
    ///
    /// # 错误
    /// - InvalidDimension: 预处理阶段, 在聚合开始前整体中止
    /// - EmptyCaseTable: SKU 表为空
    pub fn execute(
        raw_cartons: Vec<RawCarton>,
        raw_items: Vec<RawSkuItem>,
    ) -> MatchResult<MatchRunResult> {
        info!(
            carton_count = raw_cartons.len(),
            item_count = raw_items.len(),
            "开始执行装箱匹配流程"
        );

        // 步骤1: Geometry Preprocessor - 几何预处理
        debug!("步骤1: 几何预处理(面面积/底面积派生)");
        let cartons = GeometryPreprocessor::preprocess_cartons(raw_cartons)?;
        let items = GeometryPreprocessor::preprocess_items(raw_items)?;
        let carton_count = cartons.len();
        let item_count = items.len();

        // 步骤2: Case Aggregator - 装箱单元聚合
        debug!("步骤2: 装箱单元聚合(主导 SKU/堆叠高度)");
        let cases = CaseAggregator::summarize(&items)?;
        info!(case_count = cases.len(), "装箱单元聚合完成");

        // 步骤3: Candidate Generator - 候选生成
        debug!("步骤3: 候选生成(装箱单元 × 箱型 × 3 朝向)");
        let candidates = CandidateGenerator::generate(&cases, &cartons);
        info!(candidate_count = candidates.len(), "候选生成完成");

        // 步骤4: Fit Selector - 选箱裁决
        debug!("步骤4: 选箱裁决(最紧凑可行/次优回退)");
        let matches = FitSelector::select(&cases, &candidates);

        // 步骤5: Result Assembler - 结果装配
        debug!("步骤5: 结果装配(左连接)");
        let rows = ResultAssembler::assemble(&cases, &matches);

        let perfect_fit_count = rows
            .iter()
            .filter(|r| r.fit_status == FitStatus::PerfectFit)
            .count();
        let fallback_count = rows
            .iter()
            .filter(|r| r.fit_status == FitStatus::Fallback)
            .count();
        let no_box_count = rows
            .iter()
            .filter(|r| r.fit_status == FitStatus::NoBoxFound)
            .count();

        info!(
            case_count = rows.len(),
            perfect_fit_count,
            fallback_count,
            no_box_count,
            "装箱匹配流程完成"
        );

        Ok(MatchRunResult {
            case_count: rows.len(),
            rows,
            carton_count,
            item_count,
            candidate_count: candidates.len(),
            perfect_fit_count,
            fallback_count,
            no_box_count,
        })
    }
}
