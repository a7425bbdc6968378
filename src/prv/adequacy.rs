/// 가용 면적과 요구 면적을 비교한 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adequacy {
    Adequate,
    Inadequate,
}

/// 가용 discharge area가 요구 면적 이상이면 Adequate로 판정한다. 경계값은 포함한다.
pub fn assess_adequacy(available_area_in2: f64, required_area_in2: f64) -> Adequacy {
    if available_area_in2 >= required_area_in2 {
        Adequacy::Adequate
    } else {
        Adequacy::Inadequate
    }
}
