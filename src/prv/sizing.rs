/// PRV set pressure에 곱해 overpressure P1을 구하는 계수 (10% margin).
const OVER_PRESSURE_FACTOR: f64 = 1.1;
/// API 계열 discharge area 공식의 상수 계수 (gpm, sg, psi, in² 단위계 기준).
const SIZING_COEFFICIENT: f64 = 38.0;
/// Reynolds 수 계산 계수 (gpm, sg, cP, in² 단위계 기준).
const REYNOLDS_COEFFICIENT: f64 = 2800.0;

/// PRV discharge sizing 계산 입력.
#[derive(Debug, Clone)]
pub struct SizingParameters {
    /// 최대 펌프 토출 유량 [gpm]
    pub flow_rate_gpm: f64,
    /// Mud weight 목록 [sg]. 첫 항목만 공식에 참여한다.
    pub mud_weights_sg: Vec<f64>,
    /// Capacity correction factor Kw
    pub capacity_correction_factor: f64,
    /// Coefficient of discharge Kd
    pub coefficient_of_discharge: f64,
    /// Combination correction factor Kc
    pub combination_correction_factor: f64,
    /// 절대점도 µ [cP]. available area와 함께 주어지면 점도 보정을 적용한다.
    pub absolute_viscosity_cp: Option<f64>,
    /// 설치(후보) 밸브의 가용 discharge area [in²]
    pub available_area_in2: Option<f64>,
    /// PRV set pressure [psi]
    pub prv_setting_psi: f64,
    /// 최대 hydrostatic backpressure P2 [psi]
    pub max_hydrostatic_backpressure_psi: f64,
}

impl Default for SizingParameters {
    fn default() -> Self {
        Self {
            flow_rate_gpm: 0.0,
            mud_weights_sg: vec![super::DEFAULT_MUD_WEIGHT_SG],
            capacity_correction_factor: 1.0,
            coefficient_of_discharge: 0.65,
            combination_correction_factor: 1.0,
            absolute_viscosity_cp: None,
            available_area_in2: None,
            prv_setting_psi: 0.0,
            max_hydrostatic_backpressure_psi: 0.0,
        }
    }
}

/// Sizing 계산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum SizingError {
    /// 입력값 검증 실패. 위반된 전제조건별 고정 사유 문자열을 담는다.
    InvalidInput(&'static str),
}

impl SizingError {
    /// 검증 실패 사유 문자열을 반환한다.
    pub fn reason(&self) -> &'static str {
        match self {
            SizingError::InvalidInput(msg) => msg,
        }
    }
}

impl std::fmt::Display for SizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingError::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SizingError {}

/// PRV discharge sizing 계산 결과.
#[derive(Debug, Clone)]
pub struct SizingResult {
    /// 요구 discharge area [in²]
    pub required_area_in2: f64,
    /// Overpressure P1 = set pressure × 1.1 [psi]
    pub over_pressure_prv_psi: f64,
    /// Reynolds 수. 점도 보정 경로를 타지 않았으면 None이다.
    pub reynolds_number: Option<f64>,
    /// 적용된 점도 보정 계수 Kv. 보정이 없으면 1.0이다.
    pub viscosity_correction: f64,
}

/// Reynolds 수를 계산한다. R = (Q × 2800 × G) / (µ × √A)
/// - Q: gpm, G: sg, µ: cP, A: in²
pub fn reynolds_number(flow_rate_gpm: f64, mud_weight_sg: f64, viscosity_cp: f64, area_in2: f64) -> f64 {
    (flow_rate_gpm * REYNOLDS_COEFFICIENT * mud_weight_sg) / (viscosity_cp * area_in2.sqrt())
}

/// Reynolds 수로부터 점도 보정 계수 Kv를 계산한다.
/// Kv = (0.9935 + 2.878/√R + 342.75/R^1.5)⁻¹
pub fn viscosity_correction(reynolds: f64) -> f64 {
    1.0 / (0.9935 + 2.878 / reynolds.sqrt() + 342.75 / reynolds.powf(1.5))
}

/// 요구 discharge area를 계산한다. A = (Q / (38·Kw·Kd·Kc·Kv)) × √(G / (P1 − P2))
///
/// 검증은 선언된 순서대로 수행하며 첫 번째 위반에서 중단한다.
/// 부수효과와 I/O가 없는 순수 함수이다.
pub fn calculate(params: &SizingParameters) -> Result<SizingResult, SizingError> {
    let mud_weight = match params.mud_weights_sg.first() {
        Some(&w) => w,
        None => {
            return Err(SizingError::InvalidInput(
                "At least one Mud Weight must be provided.",
            ))
        }
    };
    if params.flow_rate_gpm <= 0.0 {
        return Err(SizingError::InvalidInput(
            "Max Pump Rate must be greater than zero.",
        ));
    }
    if mud_weight <= 0.0 {
        return Err(SizingError::InvalidInput(
            "Mud Weight must be greater than zero.",
        ));
    }
    if params.capacity_correction_factor <= 0.0 {
        return Err(SizingError::InvalidInput(
            "Capacity Correction Factor must be greater than zero.",
        ));
    }
    if params.coefficient_of_discharge <= 0.0 {
        return Err(SizingError::InvalidInput(
            "Coefficient of Discharge must be greater than zero.",
        ));
    }
    if params.combination_correction_factor <= 0.0 {
        return Err(SizingError::InvalidInput(
            "Combination Correction Factor must be greater than zero.",
        ));
    }

    let over_pressure = params.prv_setting_psi * OVER_PRESSURE_FACTOR;
    if over_pressure <= params.max_hydrostatic_backpressure_psi {
        return Err(SizingError::InvalidInput(
            "P1 (Over Pressure PRV) must be greater than P2 (Max Hydrostatic Backpressure).",
        ));
    }

    // 점도 보정은 µ와 가용 면적이 모두 양수로 주어진 경우에만 적용한다.
    let (reynolds, kv) = match (params.absolute_viscosity_cp, params.available_area_in2) {
        (Some(viscosity), Some(area)) if viscosity > 0.0 && area > 0.0 => {
            let r = reynolds_number(params.flow_rate_gpm, mud_weight, viscosity, area);
            (Some(r), viscosity_correction(r))
        }
        _ => (None, 1.0),
    };

    let denominator = SIZING_COEFFICIENT
        * params.capacity_correction_factor
        * params.coefficient_of_discharge
        * params.combination_correction_factor
        * kv;
    let pressure_term =
        (mud_weight / (over_pressure - params.max_hydrostatic_backpressure_psi)).sqrt();
    let required_area = (params.flow_rate_gpm / denominator) * pressure_term;

    Ok(SizingResult {
        required_area_in2: required_area,
        over_pressure_prv_psi: over_pressure,
        reynolds_number: reynolds,
        viscosity_correction: kv,
    })
}
