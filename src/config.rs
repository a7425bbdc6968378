use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 유전 현장 관례 단위 (gpm/psi/in²/sg/cP). 내부 계산 기본값.
    Oilfield,
    /// 미터법 혼합 (m³/h / kPa / mm² / kg/m³ / Pa·s)
    Metric,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub flow_rate: FlowRateUnit,
    pub pressure: PressureUnit,
    pub area: AreaUnit,
    pub mud_density: MudDensityUnit,
    pub viscosity: ViscosityUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        units_for(UnitSystem::Oilfield)
    }
}

/// 프리셋에 해당하는 기본 단위 세트를 반환한다.
pub fn units_for(system: UnitSystem) -> DefaultUnits {
    match system {
        UnitSystem::Oilfield => DefaultUnits {
            flow_rate: FlowRateUnit::GallonPerMinute,
            pressure: PressureUnit::Psi,
            area: AreaUnit::SquareInch,
            mud_density: MudDensityUnit::SpecificGravity,
            viscosity: ViscosityUnit::Centipoise,
        },
        UnitSystem::Metric => DefaultUnits {
            flow_rate: FlowRateUnit::CubicMeterPerHour,
            pressure: PressureUnit::KiloPascal,
            area: AreaUnit::SquareMillimeter,
            mud_density: MudDensityUnit::KilogramPerCubicMeter,
            viscosity: ViscosityUnit::PascalSecond,
        },
    }
}

/// Sizing 입력 폼에 채워지는 기본값을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingDefaults {
    /// 기본 mud weight [sg]
    pub mud_weight_sg: f64,
    /// Capacity correction factor Kw 기본값
    pub capacity_correction_factor: f64,
    /// Coefficient of discharge Kd 기본값
    pub coefficient_of_discharge: f64,
    /// Combination correction factor Kc 기본값
    pub combination_correction_factor: f64,
}

impl Default for SizingDefaults {
    fn default() -> Self {
        Self {
            mud_weight_sg: 1.20,
            capacity_correction_factor: 1.0,
            coefficient_of_discharge: 0.65,
            combination_correction_factor: 1.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/en 등)
    pub language: String,
    /// 언어팩 디렉터리 재정의 (없으면 locales/ 및 내장팩 사용)
    pub language_pack_dir: Option<String>,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    pub sizing_defaults: SizingDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            unit_system: UnitSystem::Oilfield,
            default_units: DefaultUnits::default(),
            sizing_defaults: SizingDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화/역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
