use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 psi이다.
/// PRV 설정압과 배압은 같은 척도로 입력되어 식에는 차압만 들어가므로
/// 게이지/절대 구분은 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    KiloPascal,
    MegaPascal,
    Bar,
    KgPerCm2,
}

const KPA_PER_PSI: f64 = 6.894757;
const PSI_PER_BAR: f64 = 14.503774;
const PSI_PER_KG_CM2: f64 = 14.223343;

fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::KiloPascal => value / KPA_PER_PSI,
        PressureUnit::MegaPascal => value * 1000.0 / KPA_PER_PSI,
        PressureUnit::Bar => value * PSI_PER_BAR,
        PressureUnit::KgPerCm2 => value * PSI_PER_KG_CM2,
    }
}

fn from_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::KiloPascal => value * KPA_PER_PSI,
        PressureUnit::MegaPascal => value * KPA_PER_PSI / 1000.0,
        PressureUnit::Bar => value / PSI_PER_BAR,
        PressureUnit::KgPerCm2 => value / PSI_PER_KG_CM2,
    }
}

/// 압력을 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let psi = to_psi(value, from);
    from_psi(psi, to)
}
