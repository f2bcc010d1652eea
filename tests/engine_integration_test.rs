// ==========================================
// 装箱匹配系统 - 匹配引擎集成测试
// ==========================================
// 覆盖: 完整流水线场景(完美匹配/次优回退/无箱可用/多SKU主导)
//       与可测性质(面面积一致性/单调性/幂等性/平局确定性)
// ==========================================

use carton_match::domain::types::{FitStatus, Orientation};
use carton_match::domain::{RawCarton, RawSkuItem};
use carton_match::engine::{GeometryPreprocessor, MatchOrchestrator};
use carton_match::logging;

fn carton(id: &str, l: f64, b: f64, h: f64) -> RawCarton {
    RawCarton {
        carton_id: id.to_string(),
        length: l,
        breadth: b,
        height: h,
    }
}

fn sku(sku: &str, case_id: &str, l: f64, b: f64, h: f64) -> RawSkuItem {
    RawSkuItem {
        sku: sku.to_string(),
        case_id: case_id.to_string(),
        length: l,
        breadth: b,
        height: h,
    }
}

// ==========================================
// 场景 A: 完美匹配
// ==========================================

#[test]
fn test_scenario_a_perfect_fit() {
    logging::init_test();

    // 10×10×10 箱, 单 SKU 4×4×1: 三面各 100 ≥ 16, 三朝向剩余均为 10
    let result = MatchOrchestrator::execute(
        vec![carton("B1", 10.0, 10.0, 10.0)],
        vec![sku("S1", "C1", 4.0, 4.0, 1.0)],
    )
    .unwrap();

    assert_eq!(result.rows.len(), 1);
    let row = &result.rows[0];
    assert_eq!(row.fit_status, FitStatus::PerfectFit);
    assert_eq!(row.carton_id.as_deref(), Some("B1"));
    // 三朝向平局 → 取 LB
    assert_eq!(row.orientation, Some(Orientation::Lb));
    assert_eq!(row.remaining_dimension, Some(10.0));
    assert_eq!(row.dominant_area, 16.0);
    assert_eq!(row.stack_height, 1.0);
}

// ==========================================
// 场景 B: 次优回退
// ==========================================

#[test]
fn test_scenario_b_fallback_when_stack_too_tall() {
    logging::init_test();

    // 堆叠高度 50, 唯一面积合格箱的最大剩余维度只有 10
    let result = MatchOrchestrator::execute(
        vec![carton("B1", 10.0, 10.0, 10.0)],
        vec![
            sku("S1", "C2", 4.0, 4.0, 25.0),
            sku("S2", "C2", 3.0, 3.0, 25.0),
        ],
    )
    .unwrap();

    let row = &result.rows[0];
    assert_eq!(row.stack_height, 50.0);
    assert_eq!(row.fit_status, FitStatus::Fallback);
    assert_eq!(row.carton_id.as_deref(), Some("B1"));
    assert_eq!(row.remaining_dimension, Some(10.0));
    assert_eq!(result.fallback_count, 1);
}

// ==========================================
// 场景 C: 无箱可用
// ==========================================

#[test]
fn test_scenario_c_no_box_found() {
    logging::init_test();

    // 主导底面积 400 超过所有面
    let result = MatchOrchestrator::execute(
        vec![carton("B1", 10.0, 10.0, 10.0), carton("B2", 5.0, 5.0, 5.0)],
        vec![sku("S1", "C3", 20.0, 20.0, 1.0)],
    )
    .unwrap();

    let row = &result.rows[0];
    assert_eq!(row.fit_status, FitStatus::NoBoxFound);
    assert!(row.carton_id.is_none());
    assert!(row.orientation.is_none());
    assert!(row.face_area.is_none());
    assert!(row.remaining_dimension.is_none());
    assert_eq!(result.no_box_count, 1);
}

// ==========================================
// 场景 D: 多 SKU 主导选择
// ==========================================

#[test]
fn test_scenario_d_multi_item_dominant() {
    logging::init_test();

    // 2×3, 5×1, 4×4 → 主导是 4×4(面积16); 堆叠高度是三件之和
    let result = MatchOrchestrator::execute(
        vec![carton("B1", 10.0, 10.0, 10.0)],
        vec![
            sku("S1", "C4", 2.0, 3.0, 1.0),
            sku("S2", "C4", 5.0, 1.0, 2.0),
            sku("S3", "C4", 4.0, 4.0, 3.0),
        ],
    )
    .unwrap();

    let row = &result.rows[0];
    assert_eq!(row.dominant_sku, "S3");
    assert_eq!(row.dominant_area, 16.0);
    assert_eq!(row.stack_height, 6.0);
    assert_eq!(row.skus, vec!["S1", "S2", "S3"]);
    assert_eq!(row.fit_status, FitStatus::PerfectFit);
}

// ==========================================
// 综合场景: 三种终态共存
// ==========================================

#[test]
fn test_mixed_statuses_one_row_per_case() {
    logging::init_test();

    let result = MatchOrchestrator::execute(
        vec![carton("B1", 10.0, 10.0, 10.0)],
        vec![
            sku("S1", "C1", 4.0, 4.0, 1.0),    // Perfect Fit
            sku("S2", "C2", 4.0, 4.0, 50.0),   // Fallback
            sku("S3", "C3", 20.0, 20.0, 1.0),  // No Box Found
        ],
    )
    .unwrap();

    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.perfect_fit_count, 1);
    assert_eq!(result.fallback_count, 1);
    assert_eq!(result.no_box_count, 1);
    // 行顺序 = case 首次出现顺序
    assert_eq!(result.rows[0].case_id, "C1");
    assert_eq!(result.rows[1].case_id, "C2");
    assert_eq!(result.rows[2].case_id, "C3");
}

// ==========================================
// 性质 1: 面面积两两一致
// ==========================================

#[test]
fn test_property_face_areas_pairwise_consistent() {
    let cartons = GeometryPreprocessor::preprocess_cartons(vec![
        carton("B1", 2.0, 3.0, 5.0),
        carton("B2", 10.5, 8.25, 6.0),
        carton("B3", 0.1, 0.2, 0.3),
    ])
    .unwrap();

    for c in &cartons {
        let volume = c.length * c.breadth * c.height;
        assert!((c.area_lb * c.height - volume).abs() < 1e-9, "{}", c.carton_id);
        assert!((c.area_bh * c.length - volume).abs() < 1e-9, "{}", c.carton_id);
        assert!((c.area_hl * c.breadth - volume).abs() < 1e-9, "{}", c.carton_id);
    }
}

// ==========================================
// 性质 2: 箱尺寸增大只会改善可行性
// ==========================================

#[test]
fn test_property_feasibility_monotonic_in_carton_dimensions() {
    let items = vec![sku("S1", "C1", 3.0, 3.0, 8.0)];

    // 逐步放大同一箱型的高度, 匹配状态只会沿
    // NO_BOX_FOUND → FALLBACK → PERFECT_FIT 方向改善
    let rank = |status: FitStatus| match status {
        FitStatus::NoBoxFound => 0,
        FitStatus::Fallback => 1,
        FitStatus::PerfectFit => 2,
    };

    let mut previous_rank = 0;
    for height in [1.0, 4.0, 8.0, 16.0] {
        let result = MatchOrchestrator::execute(
            vec![carton("B1", 4.0, 4.0, height)],
            items.clone(),
        )
        .unwrap();
        let current_rank = rank(result.rows[0].fit_status);
        assert!(
            current_rank >= previous_rank,
            "height={height} 时状态退化"
        );
        previous_rank = current_rank;
    }
}

// ==========================================
// 性质 3: 幂等性
// ==========================================

#[test]
fn test_property_pipeline_idempotent() {
    let cartons = vec![
        carton("B3", 6.0, 6.0, 2.0),
        carton("B1", 10.0, 10.0, 10.0),
        carton("B2", 8.0, 4.0, 12.0),
    ];
    let items = vec![
        sku("S1", "C1", 4.0, 4.0, 1.0),
        sku("S2", "C2", 5.0, 5.0, 9.0),
        sku("S3", "C1", 2.0, 2.0, 2.0),
    ];

    let r1 = MatchOrchestrator::execute(cartons.clone(), items.clone()).unwrap();
    let r2 = MatchOrchestrator::execute(cartons, items).unwrap();

    assert_eq!(r1.rows, r2.rows);
    // 字节级一致: 文本报表也逐字符相同
    assert_eq!(
        carton_match::report::ReportWriter::render_text(&r1.rows),
        carton_match::report::ReportWriter::render_text(&r2.rows)
    );
}

// ==========================================
// 性质 4: 平局确定性
// ==========================================

#[test]
fn test_property_tie_break_prefers_smaller_carton_id() {
    // 两个同尺寸箱的可行解剩余维度相同 → 取箱型 ID 较小者,
    // 与箱型输入顺序无关
    let items = vec![sku("S1", "C1", 4.0, 4.0, 1.0)];

    let forward = MatchOrchestrator::execute(
        vec![carton("B1", 10.0, 10.0, 10.0), carton("B2", 10.0, 10.0, 10.0)],
        items.clone(),
    )
    .unwrap();
    let reversed = MatchOrchestrator::execute(
        vec![carton("B2", 10.0, 10.0, 10.0), carton("B1", 10.0, 10.0, 10.0)],
        items,
    )
    .unwrap();

    assert_eq!(forward.rows[0].carton_id.as_deref(), Some("B1"));
    assert_eq!(forward.rows[0].orientation, Some(Orientation::Lb));
    assert_eq!(forward.rows[0], reversed.rows[0]);
}

// ==========================================
// 边界: 恰好等面积与恰好等高
// ==========================================

#[test]
fn test_exact_area_and_height_boundaries_qualify() {
    // 面面积 == 主导面积 且 剩余维度 == 堆叠高度 → 完美匹配
    let result = MatchOrchestrator::execute(
        vec![carton("B1", 4.0, 4.0, 3.0)],
        vec![
            sku("S1", "C1", 4.0, 4.0, 1.5),
            sku("S2", "C1", 2.0, 2.0, 1.5),
        ],
    )
    .unwrap();

    let row = &result.rows[0];
    assert_eq!(row.fit_status, FitStatus::PerfectFit);
    assert_eq!(row.face_area, Some(16.0));
    assert_eq!(row.remaining_dimension, Some(3.0));
}
