// ==========================================
// 装箱匹配系统 - 报表输出层
// ==========================================
// 依据: Carton_Match_Spec.md - §6.2 报表层
// ==========================================
// 职责: 最终报表的文本/CSV/JSON 三种视图
// 红线: 纯展示, 不做任何匹配计算;
//       NO_BOX_FOUND 行的匹配字段渲染为空
// ==========================================

use crate::domain::matching::ReportRow;
use crate::importer::error::ImportResult;
use std::path::Path;

/// 报表列头(与源数据口径一致的大写蛇形)
const HEADERS: [&str; 10] = [
    "CASE",
    "SKUS",
    "DOMINANT_SKU",
    "DOMINANT_AREA",
    "STACK_HEIGHT",
    "CARTON_ID",
    "ORIENTATION",
    "FACE_AREA",
    "REMAINING_DIMENSION",
    "FIT_STATUS",
];

// ==========================================
// ReportWriter - 报表输出器
// ==========================================
pub struct ReportWriter;

impl ReportWriter {
    /// 对齐的纯文本表格(控制台展示用)
    pub fn render_text(rows: &[ReportRow]) -> String {
        let cells: Vec<Vec<String>> = rows.iter().map(Self::row_cells).collect();

        // 每列宽度 = max(表头, 各行单元格)
        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let mut out = String::new();
        let push_line = |fields: &[String], out: &mut String| {
            let line: Vec<String> = fields
                .iter()
                .enumerate()
                .map(|(i, f)| format!("{:<width$}", f, width = widths[i]))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        };

        let header_fields: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        push_line(&header_fields, &mut out);
        for row in &cells {
            push_line(row, &mut out);
        }
        out
    }

    /// CSV 导出
    pub fn write_csv(rows: &[ReportRow], path: &Path) -> ImportResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(HEADERS)?;
        for row in rows {
            writer.write_record(Self::row_cells(row))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// JSON 导出(结构化字段, 供下游程序消费)
    pub fn to_json(rows: &[ReportRow]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(rows)
    }

    /// 单行投影为展示单元格
    fn row_cells(row: &ReportRow) -> Vec<String> {
        vec![
            row.case_id.clone(),
            row.skus.join(", "),
            row.dominant_sku.clone(),
            format_number(row.dominant_area),
            format_number(row.stack_height),
            row.carton_id.clone().unwrap_or_default(),
            row.orientation.map(|o| o.to_string()).unwrap_or_default(),
            row.face_area.map(format_number).unwrap_or_default(),
            row.remaining_dimension
                .map(format_number)
                .unwrap_or_default(),
            row.fit_status.label().to_string(),
        ]
    }
}

/// 整数值不带小数点, 其余保留原始精度
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{FitStatus, Orientation};

    fn matched_row() -> ReportRow {
        ReportRow {
            case_id: "C1".to_string(),
            skus: vec!["S1".to_string(), "S2".to_string()],
            dominant_sku: "S1".to_string(),
            dominant_area: 16.0,
            stack_height: 3.5,
            carton_id: Some("B1".to_string()),
            orientation: Some(Orientation::Lb),
            face_area: Some(100.0),
            remaining_dimension: Some(10.0),
            fit_status: FitStatus::PerfectFit,
        }
    }

    fn unmatched_row() -> ReportRow {
        ReportRow {
            case_id: "C3".to_string(),
            skus: vec!["S9".to_string()],
            dominant_sku: "S9".to_string(),
            dominant_area: 999.0,
            stack_height: 1.0,
            carton_id: None,
            orientation: None,
            face_area: None,
            remaining_dimension: None,
            fit_status: FitStatus::NoBoxFound,
        }
    }

    #[test]
    fn test_render_text_contains_all_columns() {
        let text = ReportWriter::render_text(&[matched_row()]);
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("CASE"));
        assert!(header.contains("FIT_STATUS"));
        let data = lines.next().unwrap();
        assert!(data.contains("C1"));
        assert!(data.contains("S1, S2"));
        assert!(data.contains("Perfect Fit"));
        assert!(data.contains("LB"));
    }

    #[test]
    fn test_render_text_unmatched_fields_empty() {
        let text = ReportWriter::render_text(&[unmatched_row()]);
        let data = text.lines().nth(1).unwrap();
        assert!(data.contains("No Box Found"));
        assert!(!data.contains("B1"));
    }

    #[test]
    fn test_render_text_is_deterministic() {
        let rows = vec![matched_row(), unmatched_row()];
        assert_eq!(
            ReportWriter::render_text(&rows),
            ReportWriter::render_text(&rows)
        );
    }

    #[test]
    fn test_to_json_round_trips_rows() {
        let rows = vec![matched_row()];
        let json = ReportWriter::to_json(&rows).unwrap();
        let parsed: Vec<ReportRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rows);
    }

    #[test]
    fn test_format_number_trims_integral_values() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(3.5), "3.5");
    }
}
