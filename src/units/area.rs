use serde::{Deserialize, Serialize};

/// 토출 면적 단위. 내부 기준은 제곱인치이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareInch,
    SquareMillimeter,
    SquareCentimeter,
}

const MM2_PER_IN2: f64 = 645.16;

fn to_square_inch(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareInch => value,
        AreaUnit::SquareMillimeter => value / MM2_PER_IN2,
        AreaUnit::SquareCentimeter => value * 100.0 / MM2_PER_IN2,
    }
}

fn from_square_inch(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareInch => value,
        AreaUnit::SquareMillimeter => value * MM2_PER_IN2,
        AreaUnit::SquareCentimeter => value * MM2_PER_IN2 / 100.0,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let in2 = to_square_inch(value, from);
    from_square_inch(in2, to)
}
