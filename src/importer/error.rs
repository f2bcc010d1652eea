// ==========================================
// 装箱匹配系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("缺少列 (行 {row}): {column}")]
    MissingColumn { row: usize, column: String },

    #[error("尺寸串格式错误 (行 {row}): 期望 长×宽×高 三段, 实际 {value}")]
    DimensionFormatError { row: usize, value: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法将 {value} 解析为数值")]
    TypeConversionError {
        row: usize,
        field: String,
        value: String,
    },

    // ===== 数据质量错误 =====
    #[error("主键缺失 (行 {row}): {column} 为空")]
    PrimaryKeyMissing { row: usize, column: String },

    #[error("箱型 ID 重复 (行 {row}): {carton_id}")]
    DuplicateCartonId { row: usize, carton_id: String },

    #[error("尺寸非正 (行 {row}, 字段 {field}): 值 {value}")]
    NonPositiveDimension {
        row: usize,
        field: String,
        value: f64,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
