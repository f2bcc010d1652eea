// ==========================================
// 装箱匹配系统 - 导入层
// ==========================================
// 依据: Carton_Match_Spec.md - §6.1 导入层
// ==========================================
// 职责: 源文件 → 引擎可用的干净内存表
// 红线: 畸形行在导入层整体拒绝;
//       引擎收到的表已满足数值/正性不变式
// ==========================================

pub mod error;
pub mod file_parser;
pub mod record_mapper;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
pub use record_mapper::RecordMapper;

use crate::config::ImportConfig;
use crate::domain::carton::RawCarton;
use crate::domain::sku::RawSkuItem;
use std::path::Path;
use tracing::info;

// ==========================================
// TableLoader - 两张源表的装载入口
// ==========================================
pub struct TableLoader {
    config: ImportConfig,
}

impl TableLoader {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// 装载箱型表(按扩展名分派 CSV/Excel)
    pub fn load_cartons(&self, path: &Path) -> ImportResult<Vec<RawCarton>> {
        let records = UniversalFileParser.parse(path)?;
        let cartons = RecordMapper::new(&self.config).map_cartons(&records)?;
        info!(
            path = %path.display(),
            carton_count = cartons.len(),
            "箱型表装载完成"
        );
        Ok(cartons)
    }

    /// 装载 SKU 表(按扩展名分派 CSV/Excel)
    pub fn load_sku_items(&self, path: &Path) -> ImportResult<Vec<RawSkuItem>> {
        let records = UniversalFileParser.parse(path)?;
        let items = RecordMapper::new(&self.config).map_sku_items(&records)?;
        info!(
            path = %path.display(),
            item_count = items.len(),
            "SKU 表装载完成"
        );
        Ok(items)
    }
}
