// ==========================================
// 装箱匹配系统 - 选箱裁决器
// ==========================================
// 依据: Carton_Match_Spec.md - §4.4 Fit Selector
// ==========================================
// 职责: 每个装箱单元裁决唯一箱型
// 规则: 可行集取最小剩余维度(最紧凑);
//       可行集为空取不可行集最大剩余维度(溢出最小);
//       候选为空出具 NO_BOX_FOUND 终态
// 红线: 纯函数, 无外部状态, 无重试;
//       平局用显式排序键 (剩余维度, 箱型ID, 朝向序号) 裁决;
//       所有裁决必须输出 reason
// ==========================================

use crate::domain::matching::{Candidate, CaseMatch, SelectedCarton};
use crate::domain::sku::CaseSummary;
use crate::domain::types::FitStatus;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// FitSelector - 选箱裁决器
// ==========================================
pub struct FitSelector;

impl FitSelector {
    /// 为每个装箱单元裁决唯一匹配
    ///
    /// # 参数
    /// - cases: 装箱单元汇总(决定输出顺序, 每单元恰好一条裁决)
    /// - candidates: 候选生成器的全量输出
    ///
    /// # 返回
    /// 与 cases 等长、同序的裁决列表
    pub fn select(cases: &[CaseSummary], candidates: &[Candidate]) -> Vec<CaseMatch> {
        // 按 case 分桶; 桶内顺序无关紧要, 裁决前会按显式键重排
        let mut by_case: HashMap<&str, Vec<&Candidate>> = HashMap::new();
        for candidate in candidates {
            by_case
                .entry(candidate.case_id.as_str())
                .or_default()
                .push(candidate);
        }

        cases
            .iter()
            .map(|case| {
                let bucket = by_case.remove(case.case_id.as_str()).unwrap_or_default();
                let case_match = Self::select_for_case(case, bucket);
                debug!(
                    case_id = %case_match.case_id,
                    fit_status = %case_match.fit_status,
                    reasons = ?case_match.reasons,
                    "装箱单元裁决完成"
                );
                case_match
            })
            .collect()
    }

    /// 单个装箱单元的裁决(纯函数)
    fn select_for_case(case: &CaseSummary, mut bucket: Vec<&Candidate>) -> CaseMatch {
        // 显式排序键取代枚举顺序, 保证平局裁决可复现:
        // 升序排列后, 可行集的最小值是第一个命中项;
        // 不可行集的最大值取其值组内排序最靠前的一项
        bucket.sort_by(|a, b| Self::compare_tie_break(a, b));

        let (feasible, infeasible): (Vec<&Candidate>, Vec<&Candidate>) =
            bucket.into_iter().partition(|c| c.is_height_feasible());

        if let Some(best) = feasible.first() {
            // 最紧凑可行解: 升序首项即最小剩余维度
            return Self::build_match(
                case,
                best,
                FitStatus::PerfectFit,
                vec![format!(
                    "PERFECT_FIT: remaining={} >= stack_height={}, feasible={}",
                    best.remaining_dimension,
                    case.stack_height,
                    feasible.len()
                )],
            );
        }

        if !infeasible.is_empty() {
            // 溢出最小的次优解: 最大剩余维度,
            // 同值平局取排序最靠前者(箱型ID, 朝向序号)
            let max_remaining = infeasible
                .last()
                .map(|c| c.remaining_dimension)
                .unwrap_or_default();
            let best = infeasible
                .iter()
                .find(|c| c.remaining_dimension == max_remaining)
                .copied()
                .unwrap_or(infeasible[infeasible.len() - 1]);

            return Self::build_match(
                case,
                best,
                FitStatus::Fallback,
                vec![format!(
                    "FALLBACK: best remaining={} < stack_height={}, infeasible={}",
                    best.remaining_dimension,
                    case.stack_height,
                    infeasible.len()
                )],
            );
        }

        // 候选为空: 合法终态, 不报错
        CaseMatch {
            case_id: case.case_id.clone(),
            selection: None,
            fit_status: FitStatus::NoBoxFound,
            reasons: vec![format!(
                "NO_BOX_FOUND: dominant_area={} exceeds every carton face",
                case.dominant_area
            )],
        }
    }

    /// 平局裁决比较: (剩余维度, 箱型 ID, 朝向序号) 升序
    fn compare_tie_break(a: &Candidate, b: &Candidate) -> Ordering {
        a.remaining_dimension
            .total_cmp(&b.remaining_dimension)
            .then_with(|| a.carton_id.cmp(&b.carton_id))
            .then_with(|| a.orientation.rank().cmp(&b.orientation.rank()))
    }

    fn build_match(
        case: &CaseSummary,
        candidate: &Candidate,
        fit_status: FitStatus,
        reasons: Vec<String>,
    ) -> CaseMatch {
        CaseMatch {
            case_id: case.case_id.clone(),
            selection: Some(SelectedCarton {
                carton_id: candidate.carton_id.clone(),
                orientation: candidate.orientation,
                face_area: candidate.face_area,
                remaining_dimension: candidate.remaining_dimension,
            }),
            fit_status,
            reasons,
        }
    }
}
