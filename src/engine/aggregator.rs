// ==========================================
// 装箱匹配系统 - 装箱单元聚合器
// ==========================================
// 依据: Carton_Match_Spec.md - §4.2 Case Aggregator
// ==========================================
// 职责: 按 case_id 分组, 选出主导 SKU, 合计堆叠高度
// 红线: 分组保持首次出现顺序, 不依赖 HashMap 迭代顺序
// ==========================================

use crate::domain::sku::{CaseSummary, SkuItem};
use crate::engine::error::{MatchError, MatchResult};
use std::collections::HashMap;

// ==========================================
// CaseAggregator - 装箱单元聚合器
// ==========================================
pub struct CaseAggregator;

impl CaseAggregator {
    /// 聚合 SKU 表为装箱单元汇总
    ///
    /// # 规则
    /// 1. 按 case_id 分组, 组顺序 = case_id 首次出现顺序
    /// 2. 主导 SKU = 组内底面积最大者(严格大于才替换, 平局保留先出现者)
    /// 3. stack_height = 组内所有成员高度之和
    ///
    /// # 错误
    /// - EmptyCaseTable: 输入为空表
    pub fn summarize(items: &[SkuItem]) -> MatchResult<Vec<CaseSummary>> {
        if items.is_empty() {
            return Err(MatchError::EmptyCaseTable);
        }

        // 首次出现顺序分组: HashMap 只做 case_id → 槽位索引
        let mut order: Vec<Vec<&SkuItem>> = Vec::new();
        let mut slot_of: HashMap<&str, usize> = HashMap::new();

        for item in items {
            let slot = *slot_of.entry(item.case_id.as_str()).or_insert_with(|| {
                order.push(Vec::new());
                order.len() - 1
            });
            order[slot].push(item);
        }

        let summaries = order
            .into_iter()
            .map(|members| {
                // 分组构造保证 members 非空
                let mut dominant = members[0];
                for item in &members[1..] {
                    if item.footprint_area > dominant.footprint_area {
                        dominant = item;
                    }
                }

                let stack_height: f64 = members.iter().map(|m| m.height).sum();

                CaseSummary {
                    case_id: dominant.case_id.clone(),
                    skus: members.iter().map(|m| m.sku.clone()).collect(),
                    dominant_sku: dominant.sku.clone(),
                    dominant_area: dominant.footprint_area,
                    stack_height,
                }
            })
            .collect();

        Ok(summaries)
    }
}
