// ==========================================
// 装箱匹配系统 - 结果装配器
// ==========================================
// 依据: Carton_Match_Spec.md - §4.5 Result Assembler
// ==========================================
// 职责: 装箱汇总与裁决结果左连接成最终报表
// 红线: 纯投影/连接, 不做任何计算;
//       每个装箱单元恰好一行, NO_BOX_FOUND 也不例外
// ==========================================

use crate::domain::matching::{CaseMatch, ReportRow};
use crate::domain::sku::CaseSummary;
use crate::domain::types::FitStatus;
use std::collections::HashMap;

// ==========================================
// ResultAssembler - 结果装配器
// ==========================================
pub struct ResultAssembler;

impl ResultAssembler {
    /// 左连接: 每条装箱汇总配一条裁决
    ///
    /// Fit Selector 保证每个 case 恰好一条裁决; 防御性地把
    /// 缺失裁决当作 NO_BOX_FOUND 处理, 保持"每单元一行"不变式
    pub fn assemble(cases: &[CaseSummary], matches: &[CaseMatch]) -> Vec<ReportRow> {
        let mut by_case: HashMap<&str, &CaseMatch> = matches
            .iter()
            .map(|m| (m.case_id.as_str(), m))
            .collect();

        cases
            .iter()
            .map(|case| {
                let matched = by_case.remove(case.case_id.as_str());
                let (selection, fit_status) = match matched {
                    Some(m) => (m.selection.as_ref(), m.fit_status),
                    None => (None, FitStatus::NoBoxFound),
                };

                ReportRow {
                    case_id: case.case_id.clone(),
                    skus: case.skus.clone(),
                    dominant_sku: case.dominant_sku.clone(),
                    dominant_area: case.dominant_area,
                    stack_height: case.stack_height,
                    carton_id: selection.map(|s| s.carton_id.clone()),
                    orientation: selection.map(|s| s.orientation),
                    face_area: selection.map(|s| s.face_area),
                    remaining_dimension: selection.map(|s| s.remaining_dimension),
                    fit_status,
                }
            })
            .collect()
    }
}
