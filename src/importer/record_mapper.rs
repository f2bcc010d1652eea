// ==========================================
// 装箱匹配系统 - 记录映射器
// ==========================================
// 依据: Carton_Match_Spec.md - §6.1 导入层
// ==========================================
// 职责: 原始行记录 → RawCarton / RawSkuItem
//       含组合尺寸串拆分("10×8×6" → 三个数值字段)
// 红线: 畸形行在此处整体拒绝, 引擎收到的表已满足
//       数值/正性不变式; 错误携带行号(1 起, 不含表头)
// ==========================================

use crate::config::ImportConfig;
use crate::domain::carton::RawCarton;
use crate::domain::sku::RawSkuItem;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::{HashMap, HashSet};

// ==========================================
// RecordMapper - 记录映射器
// ==========================================
pub struct RecordMapper<'a> {
    config: &'a ImportConfig,
}

impl<'a> RecordMapper<'a> {
    pub fn new(config: &'a ImportConfig) -> Self {
        Self { config }
    }

    /// 映射箱型表: 拆分组合尺寸串, 校验主键唯一
    pub fn map_cartons(
        &self,
        records: &[HashMap<String, String>],
    ) -> ImportResult<Vec<RawCarton>> {
        let columns = &self.config.carton_columns;
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut cartons = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;

            let carton_id = Self::required_field(record, &columns.id, row)?;
            if !seen_ids.insert(carton_id.clone()) {
                return Err(ImportError::DuplicateCartonId { row, carton_id });
            }

            let dims_raw = Self::required_field(record, &columns.dimensions, row)?;
            let [length, breadth, height] = self.split_dimensions(&dims_raw, row)?;

            Self::check_positive(length, "length", row)?;
            Self::check_positive(breadth, "breadth", row)?;
            Self::check_positive(height, "height", row)?;

            cartons.push(RawCarton {
                carton_id,
                length,
                breadth,
                height,
            });
        }

        Ok(cartons)
    }

    /// 映射 SKU 表: 三个尺寸来自独立数值列
    pub fn map_sku_items(
        &self,
        records: &[HashMap<String, String>],
    ) -> ImportResult<Vec<RawSkuItem>> {
        let columns = &self.config.sku_columns;
        let mut items = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;

            let sku = Self::required_field(record, &columns.sku, row)?;
            let case_id = Self::required_field(record, &columns.case_id, row)?;
            let length = Self::numeric_field(record, &columns.length, row)?;
            let breadth = Self::numeric_field(record, &columns.breadth, row)?;
            let height = Self::numeric_field(record, &columns.height, row)?;

            Self::check_positive(length, "length", row)?;
            Self::check_positive(breadth, "breadth", row)?;
            Self::check_positive(height, "height", row)?;

            items.push(RawSkuItem {
                sku,
                case_id,
                length,
                breadth,
                height,
            });
        }

        Ok(items)
    }

    /// 拆分组合尺寸串为 [长, 宽, 高]
    ///
    /// # 规则
    /// - 按配置分隔符(默认 × x X *)切成恰好三段
    /// - 每段 TRIM 后转 f64
    pub fn split_dimensions(&self, value: &str, row: usize) -> ImportResult<[f64; 3]> {
        let delimiters = self.config.dimension_delimiters.as_slice();
        let parts: Vec<&str> = value
            .split(|c: char| delimiters.contains(&c))
            .map(str::trim)
            .collect();

        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(ImportError::DimensionFormatError {
                row,
                value: value.to_string(),
            });
        }

        let mut dims = [0.0f64; 3];
        for (i, part) in parts.iter().enumerate() {
            dims[i] = part
                .parse::<f64>()
                .map_err(|_| ImportError::TypeConversionError {
                    row,
                    field: ["length", "breadth", "height"][i].to_string(),
                    value: (*part).to_string(),
                })?;
        }

        Ok(dims)
    }

    // ==========================================
    // 字段提取辅助
    // ==========================================

    fn required_field(
        record: &HashMap<String, String>,
        column: &str,
        row: usize,
    ) -> ImportResult<String> {
        match record.get(column) {
            None => Err(ImportError::MissingColumn {
                row,
                column: column.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(ImportError::PrimaryKeyMissing {
                row,
                column: column.to_string(),
            }),
            Some(v) => Ok(v.trim().to_string()),
        }
    }

    fn numeric_field(
        record: &HashMap<String, String>,
        column: &str,
        row: usize,
    ) -> ImportResult<f64> {
        let raw = record
            .get(column)
            .ok_or_else(|| ImportError::MissingColumn {
                row,
                column: column.to_string(),
            })?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| ImportError::TypeConversionError {
                row,
                field: column.to_string(),
                value: raw.clone(),
            })
    }

    fn check_positive(value: f64, field: &str, row: usize) -> ImportResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ImportError::NonPositiveDimension {
                row,
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }
}
