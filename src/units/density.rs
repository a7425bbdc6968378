use serde::{Deserialize, Serialize};

/// 머드 비중(밀도) 단위. 내부 기준은 담수 대비 비중(sg)이다.
/// ppg(lb/gal)는 시추 현장에서 머드 웨이트에 가장 흔히 쓰이는 단위로,
/// 담수 1.0 sg = 8.345404 ppg 로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MudDensityUnit {
    SpecificGravity,
    PoundPerGallon,
    KilogramPerCubicMeter,
}

const PPG_PER_SG: f64 = 8.345404;

fn to_sg(value: f64, unit: MudDensityUnit) -> f64 {
    match unit {
        MudDensityUnit::SpecificGravity => value,
        MudDensityUnit::PoundPerGallon => value / PPG_PER_SG,
        MudDensityUnit::KilogramPerCubicMeter => value / 1000.0,
    }
}

fn from_sg(value: f64, unit: MudDensityUnit) -> f64 {
    match unit {
        MudDensityUnit::SpecificGravity => value,
        MudDensityUnit::PoundPerGallon => value * PPG_PER_SG,
        MudDensityUnit::KilogramPerCubicMeter => value * 1000.0,
    }
}

/// 머드 비중을 변환한다.
pub fn convert_mud_density(value: f64, from: MudDensityUnit, to: MudDensityUnit) -> f64 {
    let sg = to_sg(value, from);
    from_sg(sg, to)
}
