// ==========================================
// 装箱匹配系统 - 几何预处理器
// ==========================================
// 依据: Carton_Match_Spec.md - §4.1 Geometry Preprocessor
// ==========================================
// 职责: 从原始长宽高派生箱型三面面积与 SKU 底面积
// 红线: 无状态、无副作用、无 I/O;
//       尺寸正性为防御性校验(导入层已先行把关)
// ==========================================

use crate::domain::carton::{Carton, RawCarton};
use crate::domain::sku::{RawSkuItem, SkuItem};
use crate::engine::error::{MatchError, MatchResult};

// ==========================================
// GeometryPreprocessor - 纯函数工具类
// ==========================================
pub struct GeometryPreprocessor;

impl GeometryPreprocessor {
    /// 预处理箱型表: 校验尺寸并派生三个面面积
    ///
    /// # 规则
    /// - area_lb = length × breadth (剩余维度 = height)
    /// - area_bh = breadth × height (剩余维度 = length)
    /// - area_hl = height × length (剩余维度 = breadth)
    ///
    /// # 错误
    /// - InvalidDimension: 任一尺寸非正或非有限
    pub fn preprocess_cartons(raw: Vec<RawCarton>) -> MatchResult<Vec<Carton>> {
        raw.into_iter()
            .map(|r| {
                Self::validate_dimension("carton", &r.carton_id, "length", r.length)?;
                Self::validate_dimension("carton", &r.carton_id, "breadth", r.breadth)?;
                Self::validate_dimension("carton", &r.carton_id, "height", r.height)?;

                Ok(Carton {
                    area_lb: r.length * r.breadth,
                    area_bh: r.breadth * r.height,
                    area_hl: r.height * r.length,
                    carton_id: r.carton_id,
                    length: r.length,
                    breadth: r.breadth,
                    height: r.height,
                })
            })
            .collect()
    }

    /// 预处理 SKU 表: 校验尺寸并派生底面积
    ///
    /// # 规则
    /// - footprint_area = length × breadth
    /// - 高度不参与底面积, 专供堆叠高度合计
    pub fn preprocess_items(raw: Vec<RawSkuItem>) -> MatchResult<Vec<SkuItem>> {
        raw.into_iter()
            .map(|r| {
                Self::validate_dimension("sku", &r.sku, "length", r.length)?;
                Self::validate_dimension("sku", &r.sku, "breadth", r.breadth)?;
                Self::validate_dimension("sku", &r.sku, "height", r.height)?;

                Ok(SkuItem {
                    footprint_area: r.length * r.breadth,
                    sku: r.sku,
                    case_id: r.case_id,
                    length: r.length,
                    breadth: r.breadth,
                    height: r.height,
                })
            })
            .collect()
    }

    /// 校验单个尺寸: 必须为正有限数
    fn validate_dimension(
        entity: &'static str,
        id: &str,
        field: &'static str,
        value: f64,
    ) -> MatchResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(MatchError::InvalidDimension {
                entity,
                id: id.to_string(),
                field,
                value,
            });
        }
        Ok(())
    }
}
