use serde::{Deserialize, Serialize};

/// 유량 단위. 내부 기준은 gpm(US 갤런/분)이다.
/// 시추 현장 관례에 따라 배럴은 42갤런 오일 배럴로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRateUnit {
    GallonPerMinute,
    CubicMeterPerHour,
    LiterPerMinute,
    BarrelPerMinute,
}

const LITER_PER_GALLON: f64 = 3.785411784;
const GALLON_PER_BARREL: f64 = 42.0;

fn to_gpm(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::GallonPerMinute => value,
        FlowRateUnit::CubicMeterPerHour => value * 1000.0 / 60.0 / LITER_PER_GALLON,
        FlowRateUnit::LiterPerMinute => value / LITER_PER_GALLON,
        FlowRateUnit::BarrelPerMinute => value * GALLON_PER_BARREL,
    }
}

fn from_gpm(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::GallonPerMinute => value,
        FlowRateUnit::CubicMeterPerHour => value * LITER_PER_GALLON * 60.0 / 1000.0,
        FlowRateUnit::LiterPerMinute => value * LITER_PER_GALLON,
        FlowRateUnit::BarrelPerMinute => value / GALLON_PER_BARREL,
    }
}

/// 유량을 변환한다.
pub fn convert_flow_rate(value: f64, from: FlowRateUnit, to: FlowRateUnit) -> f64 {
    let gpm = to_gpm(value, from);
    from_gpm(gpm, to)
}
