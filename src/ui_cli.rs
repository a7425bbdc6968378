use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{self, Config, UnitSystem};
use crate::conversion;
use crate::i18n::{fill_template, keys, Translator};
use crate::prv::{self, MudWeightSet, SizingParameters};
use crate::quantity::QuantityKind;
use crate::units::{
    convert_area, convert_flow_rate, convert_mud_density, convert_pressure, convert_viscosity,
    AreaUnit, FlowRateUnit, MudDensityUnit, PressureUnit, ViscosityUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PrvSizing,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PRV_SIZING));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PrvSizing),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// PRV discharge sizing 대화형 계산기.
///
/// 입력은 설정된 표시 단위로 받고, 계산 전에 oilfield 기준 단위
/// (gpm/sg/cP/in²/psi)로 환산한다.
pub fn handle_prv_sizing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRV_SIZING_HEADING));
    println!("{}", tr.t(keys::HELP_PRV_SIZING));

    let units = &cfg.default_units;
    let defaults = &cfg.sizing_defaults;

    let flow_prompt = fill_template(
        tr.t(keys::PROMPT_FLOW_RATE),
        &[("unit", flow_unit_code(units.flow_rate).to_string())],
    );
    let flow_input = read_f64(tr, &flow_prompt)?;
    let flow_rate_gpm = convert_flow_rate(flow_input, units.flow_rate, FlowRateUnit::GallonPerMinute);

    let mud_weights = read_mud_weights(tr, units.mud_density, defaults.mud_weight_sg)?;

    let kw = read_f64_or(
        tr,
        &fill_template(
            tr.t(keys::PROMPT_CAPACITY_FACTOR),
            &[("default", defaults.capacity_correction_factor.to_string())],
        ),
        defaults.capacity_correction_factor,
    )?;
    let kd = read_f64_or(
        tr,
        &fill_template(
            tr.t(keys::PROMPT_DISCHARGE_COEFF),
            &[("default", defaults.coefficient_of_discharge.to_string())],
        ),
        defaults.coefficient_of_discharge,
    )?;
    let kc = read_f64_or(
        tr,
        &fill_template(
            tr.t(keys::PROMPT_COMBINATION_FACTOR),
            &[("default", defaults.combination_correction_factor.to_string())],
        ),
        defaults.combination_correction_factor,
    )?;

    let viscosity_prompt = fill_template(
        tr.t(keys::PROMPT_VISCOSITY_OPTIONAL),
        &[("unit", viscosity_unit_code(units.viscosity).to_string())],
    );
    let absolute_viscosity_cp = read_optional_f64(tr, &viscosity_prompt)?
        .map(|v| convert_viscosity(v, units.viscosity, ViscosityUnit::Centipoise));

    let area_prompt = fill_template(
        tr.t(keys::PROMPT_AVAILABLE_AREA_OPTIONAL),
        &[("unit", area_unit_code(units.area).to_string())],
    );
    let available_area_in2 = read_optional_f64(tr, &area_prompt)?
        .map(|v| convert_area(v, units.area, AreaUnit::SquareInch));

    let prv_prompt = fill_template(
        tr.t(keys::PROMPT_PRV_SETTING),
        &[("unit", pressure_unit_code(units.pressure).to_string())],
    );
    let prv_input = read_f64(tr, &prv_prompt)?;
    let prv_setting_psi = convert_pressure(prv_input, units.pressure, PressureUnit::Psi);

    let backpressure_prompt = fill_template(
        tr.t(keys::PROMPT_BACKPRESSURE),
        &[("unit", pressure_unit_code(units.pressure).to_string())],
    );
    let backpressure_input = read_f64(tr, &backpressure_prompt)?;
    let max_hydrostatic_backpressure_psi =
        convert_pressure(backpressure_input, units.pressure, PressureUnit::Psi);

    let params = SizingParameters {
        flow_rate_gpm,
        mud_weights_sg: mud_weights.values().to_vec(),
        capacity_correction_factor: kw,
        coefficient_of_discharge: kd,
        combination_correction_factor: kc,
        absolute_viscosity_cp,
        available_area_in2,
        prv_setting_psi,
        max_hydrostatic_backpressure_psi,
    };

    match prv::calculate(&params) {
        Ok(result) => print_sizing_result(tr, cfg, &result, available_area_in2),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Mud weight 목록을 대화형으로 입력받아 sg 기준으로 반환한다.
fn read_mud_weights(
    tr: &Translator,
    unit: MudDensityUnit,
    default_sg: f64,
) -> Result<MudWeightSet, AppError> {
    let mut set = MudWeightSet::new();
    let code = mud_density_unit_code(unit).to_string();
    let default_display = convert_mud_density(default_sg, MudDensityUnit::SpecificGravity, unit);
    let mut index = 1usize;
    loop {
        let prompt = fill_template(
            tr.t(keys::PROMPT_MUD_WEIGHT),
            &[
                ("index", index.to_string()),
                ("unit", code.clone()),
                ("default", format!("{default_display:.2}")),
            ],
        );
        let value = read_f64_or(tr, &prompt, default_display)?;
        set.update(
            index - 1,
            convert_mud_density(value, unit, MudDensityUnit::SpecificGravity),
        );
        if set.is_full() {
            println!("{}", tr.t(keys::MUD_WEIGHTS_FULL));
            break;
        }
        let more = read_line(tr.t(keys::PROMPT_MUD_WEIGHT_MORE))?;
        if !matches!(more.trim().to_lowercase().as_str(), "y" | "yes") {
            break;
        }
        set.add();
        index += 1;
    }
    Ok(set)
}

/// Sizing 결과를 표시 단위로 환산해 출력한다.
fn print_sizing_result(
    tr: &Translator,
    cfg: &Config,
    result: &prv::SizingResult,
    available_area_in2: Option<f64>,
) {
    let units = &cfg.default_units;
    println!();
    println!("{}", tr.t(keys::RESULT_HEADING));

    let area_display = convert_area(result.required_area_in2, AreaUnit::SquareInch, units.area);
    println!(
        "{} {:.4} {}",
        tr.t(keys::RESULT_REQUIRED_AREA),
        area_display,
        area_unit_code(units.area)
    );

    let p1_display =
        convert_pressure(result.over_pressure_prv_psi, PressureUnit::Psi, units.pressure);
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_OVER_PRESSURE),
        p1_display,
        pressure_unit_code(units.pressure)
    );

    if let Some(re) = result.reynolds_number {
        println!("{} {:.1}", tr.t(keys::RESULT_REYNOLDS), re);
        println!(
            "{} {:.4}",
            tr.t(keys::RESULT_VISCOSITY_CORRECTION),
            result.viscosity_correction
        );
    }

    // 적정성 판정 문구는 표시 단위와 무관하게 in² 기준으로 기술한다.
    if let Some(available) = available_area_in2 {
        if available > 0.0 {
            let template = match prv::assess_adequacy(available, result.required_area_in2) {
                prv::Adequacy::Adequate => tr.t(keys::RESULT_ADEQUATE_SIZE),
                prv::Adequacy::Inadequate => tr.t(keys::RESULT_INADEQUATE_SIZE),
            };
            let sentence = fill_template(
                template,
                &[
                    ("available", format!("{available:.2}")),
                    ("required", format!("{:.2}", result.required_area_in2)),
                ],
            );
            println!("{sentence}");
        }
    }
}

/// 단위 변환 대화형 메뉴.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    println!("{}", tr.t(keys::HELP_UNIT_CONVERSION));

    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };

    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;

    let converted = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {converted} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::FlowRate),
        2 => Some(QuantityKind::Pressure),
        3 => Some(QuantityKind::Area),
        4 => Some(QuantityKind::MudDensity),
        5 => Some(QuantityKind::Viscosity),
        _ => None,
    }
}

/// 설정 메뉴. 단위계, 계산 기본값, 언어를 편집한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));

    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => apply_unit_system(tr, cfg, UnitSystem::Oilfield),
        "2" => apply_unit_system(tr, cfg, UnitSystem::Metric),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{}", tr.t(keys::SETTINGS_DEFAULTS_HEADING));
    let mud_default = read_f64_or(
        tr,
        &fill_template(
            tr.t(keys::SETTINGS_PROMPT_MUD_DEFAULT),
            &[("current", cfg.sizing_defaults.mud_weight_sg.to_string())],
        ),
        cfg.sizing_defaults.mud_weight_sg,
    )?;
    cfg.sizing_defaults.mud_weight_sg = mud_default;
    let kw_default = read_f64_or(
        tr,
        &fill_template(
            tr.t(keys::SETTINGS_PROMPT_KW_DEFAULT),
            &[(
                "current",
                cfg.sizing_defaults.capacity_correction_factor.to_string(),
            )],
        ),
        cfg.sizing_defaults.capacity_correction_factor,
    )?;
    cfg.sizing_defaults.capacity_correction_factor = kw_default;
    let kd_default = read_f64_or(
        tr,
        &fill_template(
            tr.t(keys::SETTINGS_PROMPT_KD_DEFAULT),
            &[(
                "current",
                cfg.sizing_defaults.coefficient_of_discharge.to_string(),
            )],
        ),
        cfg.sizing_defaults.coefficient_of_discharge,
    )?;
    cfg.sizing_defaults.coefficient_of_discharge = kd_default;
    let kc_default = read_f64_or(
        tr,
        &fill_template(
            tr.t(keys::SETTINGS_PROMPT_KC_DEFAULT),
            &[(
                "current",
                cfg.sizing_defaults
                    .combination_correction_factor
                    .to_string(),
            )],
        ),
        cfg.sizing_defaults.combination_correction_factor,
    )?;
    cfg.sizing_defaults.combination_correction_factor = kc_default;

    let lang = read_line(&fill_template(
        tr.t(keys::SETTINGS_PROMPT_LANGUAGE),
        &[("current", cfg.language.clone())],
    ))?;
    if !lang.trim().is_empty() {
        cfg.language = lang.trim().to_string();
        println!("{} {}", tr.t(keys::SETTINGS_LANGUAGE_SAVED), cfg.language);
    }
    Ok(())
}

fn apply_unit_system(tr: &Translator, cfg: &mut Config, system: UnitSystem) {
    cfg.unit_system = system;
    cfg.default_units = config::units_for(system);
    println!("{} {system:?}", tr.t(keys::SETTINGS_SAVED));
}

/// 프롬프트를 출력하고 한 줄을 읽는다. EOF는 오류로 처리한다.
fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

/// 숫자 하나를 읽는다. 잘못된 입력이면 다시 묻는다.
fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 숫자 하나를 읽되 빈 입력이면 기본값을 반환한다.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 숫자 하나를 읽되 빈 입력이면 None을 반환한다.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let line = read_line(prompt)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn flow_unit_code(unit: FlowRateUnit) -> &'static str {
    match unit {
        FlowRateUnit::GallonPerMinute => "gpm",
        FlowRateUnit::CubicMeterPerHour => "m3/h",
        FlowRateUnit::LiterPerMinute => "l/min",
        FlowRateUnit::BarrelPerMinute => "bbl/min",
    }
}

fn pressure_unit_code(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::Psi => "psi",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::MegaPascal => "MPa",
        PressureUnit::Bar => "bar",
        PressureUnit::KgPerCm2 => "kg/cm2",
    }
}

fn area_unit_code(unit: AreaUnit) -> &'static str {
    match unit {
        AreaUnit::SquareInch => "in2",
        AreaUnit::SquareMillimeter => "mm2",
        AreaUnit::SquareCentimeter => "cm2",
    }
}

fn mud_density_unit_code(unit: MudDensityUnit) -> &'static str {
    match unit {
        MudDensityUnit::SpecificGravity => "sg",
        MudDensityUnit::PoundPerGallon => "ppg",
        MudDensityUnit::KilogramPerCubicMeter => "kg/m3",
    }
}

fn viscosity_unit_code(unit: ViscosityUnit) -> &'static str {
    match unit {
        ViscosityUnit::Centipoise => "cP",
        ViscosityUnit::PascalSecond => "Pa·s",
    }
}
