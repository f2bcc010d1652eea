// ==========================================
// 装箱匹配系统 - 候选生成器
// ==========================================
// 依据: Carton_Match_Spec.md - §4.3 Candidate Generator
// ==========================================
// 职责: 对每个 (装箱单元 × 箱型) 评估三个朝向,
//       记录面面积足以容纳主导 SKU 的全部组合
// 红线: 枚举顺序固定(case 外层, 箱型按输入序, 朝向 LB→BH→HL);
//       面积判定含相等(恰好等面积也入选)
// ==========================================

use crate::domain::carton::Carton;
use crate::domain::matching::Candidate;
use crate::domain::sku::CaseSummary;
use crate::domain::types::Orientation;

// ==========================================
// CandidateGenerator - 候选生成器
// ==========================================
pub struct CandidateGenerator;

impl CandidateGenerator {
    /// 生成全量候选列表 (装箱单元 × 箱型 × 3 朝向)
    ///
    /// # 规则
    /// - 入选条件: face_area ≥ dominant_area
    /// - 某 case 候选为空是合法状态, 由 Fit Selector 出具
    ///   NO_BOX_FOUND 终态, 不是错误
    pub fn generate(cases: &[CaseSummary], cartons: &[Carton]) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for case in cases {
            for carton in cartons {
                for orientation in Orientation::ALL {
                    let face_area = carton.face_area(orientation);
                    if face_area >= case.dominant_area {
                        candidates.push(Candidate {
                            case_id: case.case_id.clone(),
                            carton_id: carton.carton_id.clone(),
                            orientation,
                            face_area,
                            remaining_dimension: carton.remaining_dimension(orientation),
                            stack_height: case.stack_height,
                        });
                    }
                }
            }
        }

        candidates
    }
}
