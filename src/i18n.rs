use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const APP_TITLE: &str = "app.title";
    pub const APP_TAGLINE: &str = "app.tagline";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PRV_SIZING: &str = "main_menu.prv_sizing";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PRV_SIZING_HEADING: &str = "prv_sizing.heading";
    pub const MUD_WEIGHTS_FULL: &str = "prv_sizing.mud_weights_full";
    pub const PROMPT_FLOW_RATE: &str = "prompt.flow_rate";
    pub const PROMPT_MUD_WEIGHT: &str = "prompt.mud_weight";
    pub const PROMPT_MUD_WEIGHT_MORE: &str = "prompt.mud_weight_more";
    pub const PROMPT_CAPACITY_FACTOR: &str = "prompt.capacity_factor";
    pub const PROMPT_DISCHARGE_COEFF: &str = "prompt.discharge_coeff";
    pub const PROMPT_COMBINATION_FACTOR: &str = "prompt.combination_factor";
    pub const PROMPT_VISCOSITY_OPTIONAL: &str = "prompt.viscosity_optional";
    pub const PROMPT_AVAILABLE_AREA_OPTIONAL: &str = "prompt.available_area_optional";
    pub const PROMPT_PRV_SETTING: &str = "prompt.prv_setting";
    pub const PROMPT_BACKPRESSURE: &str = "prompt.backpressure";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_REQUIRED_AREA: &str = "result.required_area";
    pub const RESULT_OVER_PRESSURE: &str = "result.over_pressure";
    pub const RESULT_REYNOLDS: &str = "result.reynolds";
    pub const RESULT_VISCOSITY_CORRECTION: &str = "result.viscosity_correction";
    pub const RESULT_ADEQUATE_SIZE: &str = "result.adequate_size";
    pub const RESULT_INADEQUATE_SIZE: &str = "result.inadequate_size";

    pub const FORMULA_TITLE: &str = "formula.title";
    pub const FORMULA_AREA: &str = "formula.area";
    pub const FORMULA_REYNOLDS: &str = "formula.reynolds";
    pub const FORMULA_KV: &str = "formula.kv";
    pub const FORMULA_WHERE: &str = "formula.where";
    pub const FORMULA_VAR_AREA: &str = "formula.var.area";
    pub const FORMULA_VAR_FLOW: &str = "formula.var.flow_rate";
    pub const FORMULA_VAR_KD: &str = "formula.var.kd";
    pub const FORMULA_VAR_KW: &str = "formula.var.kw";
    pub const FORMULA_VAR_KC: &str = "formula.var.kc";
    pub const FORMULA_VAR_KV: &str = "formula.var.kv";
    pub const FORMULA_VAR_VISCOSITY: &str = "formula.var.viscosity";
    pub const FORMULA_VAR_SG: &str = "formula.var.sg";
    pub const FORMULA_VAR_P1: &str = "formula.var.p1";
    pub const FORMULA_VAR_P2: &str = "formula.var.p2";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_DEFAULTS_HEADING: &str = "settings.defaults_heading";
    pub const SETTINGS_PROMPT_MUD_DEFAULT: &str = "settings.prompt_mud_default";
    pub const SETTINGS_PROMPT_KW_DEFAULT: &str = "settings.prompt_kw_default";
    pub const SETTINGS_PROMPT_KD_DEFAULT: &str = "settings.prompt_kd_default";
    pub const SETTINGS_PROMPT_KC_DEFAULT: &str = "settings.prompt_kc_default";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_LANGUAGE_SAVED: &str = "settings.language_saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const HELP_PRV_SIZING: &str = "help.prv_sizing";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

/// `{name}` 형태의 자리표시자를 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "PRV Sizing Toolbox",
        APP_TAGLINE => "Drilling mud 순환 계통용 PRV discharge sizing 계산기",
        MAIN_MENU_TITLE => "\n=== PRV Sizing Toolbox ===",
        MAIN_MENU_PRV_SIZING => "1) PRV Discharge Sizing",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PRV_SIZING_HEADING => "\n-- PRV Discharge Sizing --",
        MUD_WEIGHTS_FULL => "Mud weight는 최대 5개까지 입력할 수 있습니다.",
        PROMPT_FLOW_RATE => "최대 펌프 유량 [{unit}]: ",
        PROMPT_MUD_WEIGHT => "Mud weight #{index} [{unit}] (엔터={default}): ",
        PROMPT_MUD_WEIGHT_MORE => "Mud weight를 추가하시겠습니까? (y/N): ",
        PROMPT_CAPACITY_FACTOR => "Capacity correction factor Kw (엔터={default}): ",
        PROMPT_DISCHARGE_COEFF => "Coefficient of discharge Kd (엔터={default}): ",
        PROMPT_COMBINATION_FACTOR => "Combination correction factor Kc (엔터={default}): ",
        PROMPT_VISCOSITY_OPTIONAL => "절대점도 µ [{unit}] (보정 없으면 엔터): ",
        PROMPT_AVAILABLE_AREA_OPTIONAL => "가용 discharge area [{unit}] (없으면 엔터): ",
        PROMPT_PRV_SETTING => "PRV set pressure [{unit}]: ",
        PROMPT_BACKPRESSURE => "최대 hydrostatic backpressure P2 [{unit}]: ",
        RESULT_HEADING => "계산 결과:",
        RESULT_REQUIRED_AREA => "요구 discharge area:",
        RESULT_OVER_PRESSURE => "Over pressure P1:",
        RESULT_REYNOLDS => "Reynolds 수:",
        RESULT_VISCOSITY_CORRECTION => "점도 보정 Kv:",
        RESULT_ADEQUATE_SIZE => {
            "가용 discharge area {available} in²가 요구 면적 {required} in²를 초과하므로 현재 PRV 구성은 예상 유량을 안전하게 처리할 수 있는 크기입니다."
        }
        RESULT_INADEQUATE_SIZE => {
            "경고: 가용 discharge area {available} in²가 요구 면적 {required} in²보다 작습니다. 현재 PRV 구성은 예상 유량을 안전하게 처리하기에 부족할 수 있습니다."
        }
        FORMULA_TITLE => "사용 공식",
        FORMULA_AREA => "A = Q / (38·Kd·Kw·Kc·Kv) × √(G / (P1 - P2))",
        FORMULA_REYNOLDS => "R = (Q × 2800 × G) / (µ × √A_avail)",
        FORMULA_KV => "Kv = (0.9935 + 2.878/√R + 342.75/R^1.5)⁻¹",
        FORMULA_WHERE => "기호:",
        FORMULA_VAR_AREA => "A: 요구 discharge area (in²)",
        FORMULA_VAR_FLOW => "Q: 유량 (gpm)",
        FORMULA_VAR_KD => "Kd: Coefficient of discharge (무차원)",
        FORMULA_VAR_KW => "Kw: Capacity correction factor (무차원)",
        FORMULA_VAR_KC => "Kc: Combination correction factor",
        FORMULA_VAR_KV => "Kv: Viscosity correction factor (무차원)",
        FORMULA_VAR_VISCOSITY => "µ: 유동 온도 기준 절대점도 [cP]",
        FORMULA_VAR_SG => "G: 유체 비중 (sg)",
        FORMULA_VAR_P1 => "P1: Set pressure + overpressure (psi)",
        FORMULA_VAR_P2 => "P2: Backpressure (psi)",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 유량  2) 압력  3) 면적  4) Mud 밀도  5) 점도",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: gpm, psi, in2): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: m3/h, kPa, mm2): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) Oilfield (gpm/psi/in²)  2) Metric (m³/h / kPa / mm²)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        SETTINGS_DEFAULTS_HEADING => "Sizing 기본값 (엔터=유지):",
        SETTINGS_PROMPT_MUD_DEFAULT => "기본 mud weight [sg] (현재 {current}): ",
        SETTINGS_PROMPT_KW_DEFAULT => "기본 Kw (현재 {current}): ",
        SETTINGS_PROMPT_KD_DEFAULT => "기본 Kd (현재 {current}): ",
        SETTINGS_PROMPT_KC_DEFAULT => "기본 Kc (현재 {current}): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en, 현재 {current}, 엔터=유지): ",
        SETTINGS_LANGUAGE_SAVED => "언어 설정이 저장되었습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HELP_PRV_SIZING => "도움말: 유량과 mud weight(최대 5개, 계산에는 첫 값 사용), 보정계수(엔터=기본값), 선택 입력인 점도/가용 면적, PRV set/backpressure 순으로 입력합니다.",
        HELP_UNIT_CONVERSION => "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: gpm/m3/h, psi/kPa, in2/mm2, sg/ppg, cP/Pa·s).",
        HELP_SETTINGS => "도움말: 단위 프리셋(Oilfield/Metric), sizing 기본값, 언어를 설정합니다. 변경은 config.toml에 저장됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "PRV Sizing Toolbox",
        APP_TAGLINE => "PRV discharge sizing for drilling-mud circulation systems",
        MAIN_MENU_TITLE => "\n=== PRV Sizing Toolbox ===",
        MAIN_MENU_PRV_SIZING => "1) PRV Discharge Sizing",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit Converter",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PRV_SIZING_HEADING => "\n-- PRV Discharge Sizing --",
        MUD_WEIGHTS_FULL => "Mud weight list is limited to 5 entries.",
        PROMPT_FLOW_RATE => "Max pump rate [{unit}]: ",
        PROMPT_MUD_WEIGHT => "Mud weight #{index} [{unit}] (enter={default}): ",
        PROMPT_MUD_WEIGHT_MORE => "Add another mud weight? (y/N): ",
        PROMPT_CAPACITY_FACTOR => "Capacity correction factor Kw (enter={default}): ",
        PROMPT_DISCHARGE_COEFF => "Coefficient of discharge Kd (enter={default}): ",
        PROMPT_COMBINATION_FACTOR => "Combination correction factor Kc (enter={default}): ",
        PROMPT_VISCOSITY_OPTIONAL => "Absolute viscosity µ [{unit}] (enter to skip correction): ",
        PROMPT_AVAILABLE_AREA_OPTIONAL => "Available discharge area [{unit}] (enter if none): ",
        PROMPT_PRV_SETTING => "PRV set pressure [{unit}]: ",
        PROMPT_BACKPRESSURE => "Max hydrostatic backpressure P2 [{unit}]: ",
        RESULT_HEADING => "Results:",
        RESULT_REQUIRED_AREA => "Required discharge area:",
        RESULT_OVER_PRESSURE => "Over pressure P1:",
        RESULT_REYNOLDS => "Reynold’s Number:",
        RESULT_VISCOSITY_CORRECTION => "Viscosity correction Kv:",
        RESULT_ADEQUATE_SIZE => {
            "The available discharge area of {available} in² exceeds the required area of {required} in², indicating that the current PRV setup is adequately sized to handle the expected flow rate safely."
        }
        RESULT_INADEQUATE_SIZE => {
            "Warning: The available discharge area of {available} in² is less than the required area of {required} in². The current PRV setup may not be adequately sized to handle the expected flow rate safely."
        }
        FORMULA_TITLE => "Formula Used",
        FORMULA_AREA => "A = Q / (38·Kd·Kw·Kc·Kv) × √(G / (P1 - P2))",
        FORMULA_REYNOLDS => "R = (Q × 2800 × G) / (µ × √A_avail)",
        FORMULA_KV => "Kv = (0.9935 + 2.878/√R + 342.75/R^1.5)⁻¹",
        FORMULA_WHERE => "Where:",
        FORMULA_VAR_AREA => "A: Required discharge area (in²)",
        FORMULA_VAR_FLOW => "Q: Flow rate (gpm)",
        FORMULA_VAR_KD => "Kd: Coefficient of discharge (dimensionless)",
        FORMULA_VAR_KW => "Kw: Capacity correction factor (dimensionless)",
        FORMULA_VAR_KC => "Kc: Combination correction factor",
        FORMULA_VAR_KV => "Kv: Viscosity correction factor (dimensionless)",
        FORMULA_VAR_VISCOSITY => "µ: Absolute viscosity at the flowing temperature, centipoise",
        FORMULA_VAR_SG => "G: Specific gravity of the fluid (sg)",
        FORMULA_VAR_P1 => "P1: Set pressure plus overpressure (psi)",
        FORMULA_VAR_P2 => "P2: Backpressure (psi)",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Flow rate  2) Pressure  3) Area  4) Mud density  5) Viscosity",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: gpm, psi, in2): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: m3/h, kPa, mm2): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Oilfield (gpm/psi/in²)  2) Metric (m³/h / kPa / mm²)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        SETTINGS_DEFAULTS_HEADING => "Sizing defaults (enter to keep):",
        SETTINGS_PROMPT_MUD_DEFAULT => "Default mud weight [sg] (current {current}): ",
        SETTINGS_PROMPT_KW_DEFAULT => "Default Kw (current {current}): ",
        SETTINGS_PROMPT_KD_DEFAULT => "Default Kd (current {current}): ",
        SETTINGS_PROMPT_KC_DEFAULT => "Default Kc (current {current}): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en, current {current}, enter to keep): ",
        SETTINGS_LANGUAGE_SAVED => "Language preference saved:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HELP_PRV_SIZING => "Help: enter flow rate, mud weights (up to 5; the first drives the formula), correction factors (enter = default), optional viscosity/available area, then PRV set pressure and backpressure.",
        HELP_UNIT_CONVERSION => "Help: choose quantity → enter value → from/to units (gpm/m3/h, psi/kPa, in2/mm2, sg/ppg, cP/Pa·s).",
        HELP_SETTINGS => "Help: unit preset (Oilfield/Metric), sizing defaults and language; changes persist to config.toml.",
        _ => return None,
    })
}
