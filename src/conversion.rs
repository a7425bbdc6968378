use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `gpm`, `psi`, `in2`, `sg`, `cP` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::FlowRate => {
            let from = parse_flow_rate_unit(from_unit_str)?;
            let to = parse_flow_rate_unit(to_unit_str)?;
            Ok(convert_flow_rate(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::MudDensity => {
            let from = parse_mud_density_unit(from_unit_str)?;
            let to = parse_mud_density_unit(to_unit_str)?;
            Ok(convert_mud_density(value, from, to))
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
    }
}

fn parse_flow_rate_unit(s: &str) -> Result<FlowRateUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "gpm" | "gal/min" => Ok(FlowRateUnit::GallonPerMinute),
        "m3/h" | "m^3/h" => Ok(FlowRateUnit::CubicMeterPerHour),
        "l/min" | "lpm" => Ok(FlowRateUnit::LiterPerMinute),
        "bbl/min" | "bpm" => Ok(FlowRateUnit::BarrelPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "psi" => Ok(PressureUnit::Psi),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "bar" => Ok(PressureUnit::Bar),
        "kg/cm2" | "kgf/cm2" => Ok(PressureUnit::KgPerCm2),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "in2" | "in^2" | "sqin" => Ok(AreaUnit::SquareInch),
        "mm2" | "mm^2" => Ok(AreaUnit::SquareMillimeter),
        "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_mud_density_unit(s: &str) -> Result<MudDensityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "sg" => Ok(MudDensityUnit::SpecificGravity),
        "ppg" | "lb/gal" => Ok(MudDensityUnit::PoundPerGallon),
        "kg/m3" | "kg/m^3" => Ok(MudDensityUnit::KilogramPerCubicMeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pa·s" | "pa.s" | "pas" => Ok(ViscosityUnit::PascalSecond),
        "cps" | "cp" => Ok(ViscosityUnit::Centipoise),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
