use serde::{Deserialize, Serialize};

/// 절대점도 단위. 내부 기준은 centipoise이다.
/// 레이놀즈수 식이 cP 입력을 전제하므로 cP를 기준으로 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    Centipoise,
    PascalSecond,
}

fn to_centipoise(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value,
        ViscosityUnit::PascalSecond => value * 1000.0,
    }
}

fn from_centipoise(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value,
        ViscosityUnit::PascalSecond => value / 1000.0,
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    let cp = to_centipoise(value, from);
    from_centipoise(cp, to)
}
