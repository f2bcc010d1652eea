// ==========================================
// 装箱匹配系统 - 配置层
// ==========================================
// 依据: Carton_Match_Spec.md - §8 配置
// ==========================================
// 职责: 源表列名与尺寸串分隔符配置
// 默认值对齐原始数据文件表头
// ==========================================

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

// ==========================================
// CartonColumns - 箱型表列名
// ==========================================
// 箱型源表的尺寸是单列组合串(如 "10×8×6"), 导入层拆分
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CartonColumns {
    pub id: String,         // 箱型 ID 列
    pub dimensions: String, // 组合尺寸列("长×宽×高")
}

impl Default for CartonColumns {
    fn default() -> Self {
        Self {
            id: "Box ID".to_string(),
            dimensions: "Dimensions (in inches)".to_string(),
        }
    }
}

// ==========================================
// SkuColumns - SKU 表列名
// ==========================================
// SKU 源表的三个尺寸是独立数值列
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SkuColumns {
    pub sku: String,
    pub case_id: String,
    pub length: String,
    pub breadth: String,
    pub height: String,
}

impl Default for SkuColumns {
    fn default() -> Self {
        Self {
            sku: "SKU".to_string(),
            case_id: "CASE".to_string(),
            length: "LENGTH".to_string(),
            breadth: "BREADTH".to_string(),
            height: "HEIGHT".to_string(),
        }
    }
}

// ==========================================
// ImportConfig - 导入配置
// ==========================================
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub carton_columns: CartonColumns,
    pub sku_columns: SkuColumns,
    pub dimension_delimiters: Vec<char>, // 尺寸串接受的分隔符
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            carton_columns: CartonColumns::default(),
            sku_columns: SkuColumns::default(),
            dimension_delimiters: vec!['×', 'x', 'X', '*'],
        }
    }
}

impl ImportConfig {
    /// 从 JSON 文件加载配置(缺省字段回落默认值)
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: ImportConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns_match_source_headers() {
        let config = ImportConfig::default();
        assert_eq!(config.carton_columns.id, "Box ID");
        assert_eq!(config.carton_columns.dimensions, "Dimensions (in inches)");
        assert_eq!(config.sku_columns.case_id, "CASE");
        assert!(config.dimension_delimiters.contains(&'×'));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{ "sku_columns": { "case_id": "CASE_NO" } }"#;
        let config: ImportConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.sku_columns.case_id, "CASE_NO");
        // 未覆盖的字段保持默认
        assert_eq!(config.sku_columns.sku, "SKU");
        assert_eq!(config.carton_columns.id, "Box ID");
    }
}
