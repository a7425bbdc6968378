#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use prv_sizing_toolbox::{
    config, conversion,
    i18n::{self, keys},
    prv,
    quantity::QuantityKind,
    units::{
        convert_area, convert_flow_rate, convert_mud_density, convert_pressure, convert_viscosity,
        AreaUnit, FlowRateUnit, MudDensityUnit, PressureUnit, ViscosityUnit,
    },
};
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default();
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "PRV Sizing Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    show_formula_modal: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    apply_initial_view_size: bool,
    ui_scale: f32,
    // PRV sizing 입력
    flow_rate: f64,
    flow_unit: String,
    mud_weights: Vec<f64>,
    density_unit: String,
    capacity_factor: f64,
    discharge_coeff: f64,
    combination_factor: f64,
    use_viscosity: bool,
    viscosity: f64,
    viscosity_unit: String,
    use_available_area: bool,
    available_area: f64,
    area_unit: String,
    prv_setting: f64,
    backpressure: f64,
    pressure_unit: String,
    sizing_result: Option<prv::SizingResult>,
    sizing_error: Option<String>,
    adequacy_note: Option<(prv::Adequacy, String)>,
    report_status: Option<String>,
    // 단위 변환
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_kind: QuantityKind,
    conv_result: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    PrvSizing,
    UnitConv,
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시를 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환하고 egui 기본 폰트로 동작한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Korean font not found; falling back to the default egui font.".into())
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let (conv_from, conv_to) = default_units_for_kind(QuantityKind::FlowRate);
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let has_overrides = tr.lookup("gui.nav.app_title").is_some();
        eprintln!("GUI language resolved: {lang_code}, overrides_loaded={has_overrides}");
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        let defaults = config.sizing_defaults.clone();
        let mut s = Self {
            config,
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            tab: Tab::PrvSizing,
            show_formula_modal: false,
            show_settings_modal: false,
            show_help_modal: false,
            apply_initial_view_size: true,
            ui_scale: 1.0,
            flow_rate: 500.0,
            flow_unit: "gpm".into(),
            mud_weights: Vec::new(),
            density_unit: "sg".into(),
            capacity_factor: defaults.capacity_correction_factor,
            discharge_coeff: defaults.coefficient_of_discharge,
            combination_factor: defaults.combination_correction_factor,
            use_viscosity: false,
            viscosity: 200.0,
            viscosity_unit: "cP".into(),
            use_available_area: false,
            available_area: 3.0,
            area_unit: "in2".into(),
            prv_setting: 100.0,
            backpressure: 50.0,
            pressure_unit: "psi".into(),
            sizing_result: None,
            sizing_error: None,
            adequacy_note: None,
            report_status: None,
            conv_value: 100.0,
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_kind: QuantityKind::FlowRate,
            conv_result: None,
        };
        s.apply_unit_preset(s.config.unit_system);
        s.mud_weights = vec![convert_mud_density(
            defaults.mud_weight_sg,
            MudDensityUnit::SpecificGravity,
            parse_density_unit_gui(&s.density_unit),
        )];
        s
    }

    /// 단위 시스템 프리셋을 UI 기본 단위에 적용한다.
    pub(crate) fn apply_unit_preset(&mut self, system: config::UnitSystem) {
        match system {
            config::UnitSystem::Oilfield => {
                self.flow_unit = "gpm".into();
                self.pressure_unit = "psi".into();
                self.area_unit = "in2".into();
                self.density_unit = "sg".into();
                self.viscosity_unit = "cP".into();
            }
            config::UnitSystem::Metric => {
                self.flow_unit = "m3/h".into();
                self.pressure_unit = "kPa".into();
                self.area_unit = "mm2".into();
                self.density_unit = "kg/m3".into();
                self.viscosity_unit = "Pa·s".into();
            }
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::PrvSizing, txt("gui.tab.prv_sizing", "PRV Sizing")),
            (Tab::UnitConv, txt("gui.tab.unit_conv", "Unit Converter")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    /// 현재 입력 폼을 기준 단위(gpm/sg/cP/in²/psi)로 환산한 계산 인자.
    fn sizing_parameters(&self) -> prv::SizingParameters {
        let flow_unit = parse_flow_unit_gui(&self.flow_unit);
        let density_unit = parse_density_unit_gui(&self.density_unit);
        let pressure_unit = parse_pressure_unit_gui(&self.pressure_unit);
        prv::SizingParameters {
            flow_rate_gpm: convert_flow_rate(self.flow_rate, flow_unit, FlowRateUnit::GallonPerMinute),
            mud_weights_sg: self
                .mud_weights
                .iter()
                .map(|w| convert_mud_density(*w, density_unit, MudDensityUnit::SpecificGravity))
                .collect(),
            capacity_correction_factor: self.capacity_factor,
            coefficient_of_discharge: self.discharge_coeff,
            combination_correction_factor: self.combination_factor,
            absolute_viscosity_cp: self.use_viscosity.then(|| {
                convert_viscosity(
                    self.viscosity,
                    parse_viscosity_unit_gui(&self.viscosity_unit),
                    ViscosityUnit::Centipoise,
                )
            }),
            available_area_in2: self.use_available_area.then(|| {
                convert_area(
                    self.available_area,
                    parse_area_unit_gui(&self.area_unit),
                    AreaUnit::SquareInch,
                )
            }),
            prv_setting_psi: convert_pressure(self.prv_setting, pressure_unit, PressureUnit::Psi),
            max_hydrostatic_backpressure_psi: convert_pressure(
                self.backpressure,
                pressure_unit,
                PressureUnit::Psi,
            ),
        }
    }

    fn run_sizing(&mut self) {
        let params = self.sizing_parameters();
        match prv::calculate(&params) {
            Ok(result) => {
                self.adequacy_note = params
                    .available_area_in2
                    .filter(|a| *a > 0.0)
                    .map(|available| {
                        let adequacy = prv::assess_adequacy(available, result.required_area_in2);
                        let key = match adequacy {
                            prv::Adequacy::Adequate => keys::RESULT_ADEQUATE_SIZE,
                            prv::Adequacy::Inadequate => keys::RESULT_INADEQUATE_SIZE,
                        };
                        let sentence = i18n::fill_template(
                            self.tr.t(key),
                            &[
                                ("available", format!("{available:.2}")),
                                ("required", format!("{:.2}", result.required_area_in2)),
                            ],
                        );
                        (adequacy, sentence)
                    });
                self.sizing_result = Some(result);
                self.sizing_error = None;
            }
            Err(e) => {
                self.sizing_result = None;
                self.adequacy_note = None;
                self.sizing_error = Some(e.reason().to_string());
            }
        }
    }

    /// 텍스트 리포트를 만든다. 계산 결과가 없으면 None.
    fn build_report(&self) -> Option<String> {
        use std::fmt::Write as _;
        let result = self.sizing_result.as_ref()?;
        let tr = &self.tr;
        let txt = |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        let mut out = String::new();
        let _ = writeln!(out, "{}", tr.t(keys::APP_TITLE));
        let _ = writeln!(out, "{}", tr.t(keys::APP_TAGLINE));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", txt("gui.report.inputs", "[Inputs]"));
        let _ = writeln!(out, "Q = {} {}", self.flow_rate, self.flow_unit);
        let weights = self
            .mud_weights
            .iter()
            .map(|w| format!("{w:.2}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Mud weights [{}] = {}", self.density_unit, weights);
        let _ = writeln!(
            out,
            "Kw = {}  Kd = {}  Kc = {}",
            self.capacity_factor, self.discharge_coeff, self.combination_factor
        );
        if self.use_viscosity {
            let _ = writeln!(out, "µ = {} {}", self.viscosity, self.viscosity_unit);
        }
        if self.use_available_area {
            let _ = writeln!(
                out,
                "Available area = {} {}",
                self.available_area, self.area_unit
            );
        }
        let _ = writeln!(
            out,
            "PRV set = {} {}  P2 = {} {}",
            self.prv_setting, self.pressure_unit, self.backpressure, self.pressure_unit
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", txt("gui.report.results", "[Results]"));
        let area_unit = parse_area_unit_gui(&self.area_unit);
        let area_display = convert_area(result.required_area_in2, AreaUnit::SquareInch, area_unit);
        let mut area_line = format!(
            "{} {:.4} {}",
            tr.t(keys::RESULT_REQUIRED_AREA),
            area_display,
            self.area_unit
        );
        if area_unit != AreaUnit::SquareInch {
            let _ = write!(area_line, " ({:.4} in2)", result.required_area_in2);
        }
        let _ = writeln!(out, "{area_line}");
        let _ = writeln!(
            out,
            "{} {:.2} psi",
            tr.t(keys::RESULT_OVER_PRESSURE),
            result.over_pressure_prv_psi
        );
        if let Some(re) = result.reynolds_number {
            let _ = writeln!(out, "{} {:.1}", tr.t(keys::RESULT_REYNOLDS), re);
            let _ = writeln!(
                out,
                "{} {:.4}",
                tr.t(keys::RESULT_VISCOSITY_CORRECTION),
                result.viscosity_correction
            );
        }
        if let Some((_, sentence)) = &self.adequacy_note {
            let _ = writeln!(out, "{sentence}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", tr.t(keys::FORMULA_TITLE));
        let _ = writeln!(out, "{}", tr.t(keys::FORMULA_AREA));
        let _ = writeln!(out, "{}", tr.t(keys::FORMULA_REYNOLDS));
        let _ = writeln!(out, "{}", tr.t(keys::FORMULA_KV));
        Some(out)
    }

    fn ui_prv_sizing(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.prv.heading", "PRV Discharge Sizing"),
            &txt(
                "gui.prv.tip",
                "Size the relief discharge area for a drilling-mud circulation PRV.",
            ),
        );
        label_with_tip(
            ui,
            &txt("gui.prv.card_label", "Sizing inputs"),
            &txt(
                "gui.prv.card_tip",
                "Enter flow, mud weights and pressures, then calculate.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("prv_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.prv.flow", "Max pump rate"),
                        &txt(
                            "gui.prv.flow_tip",
                            "Highest expected pump rate the valve must relieve",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.flow_rate).speed(5.0));
                    unit_combo(ui, &mut self.flow_unit, flow_unit_options());
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.prv.kw", "Capacity correction Kw"),
                        &txt(
                            "gui.prv.kw_tip",
                            "Correction for constant back pressure on balanced valves",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.capacity_factor).speed(0.01));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.prv.kd", "Discharge coefficient Kd"),
                        &txt("gui.prv.kd_tip", "Effective coefficient of discharge"),
                    );
                    ui.add(egui::DragValue::new(&mut self.discharge_coeff).speed(0.01));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.prv.kc", "Combination correction Kc"),
                        &txt(
                            "gui.prv.kc_tip",
                            "Correction when a rupture disk is installed upstream",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.combination_factor).speed(0.01));
                    ui.end_row();

                    ui.checkbox(
                        &mut self.use_viscosity,
                        txt("gui.prv.viscosity", "Absolute viscosity µ"),
                    )
                    .on_hover_text(txt(
                        "gui.prv.viscosity_tip",
                        "Apply viscosity correction (needs available area too)",
                    ));
                    ui.add_enabled(
                        self.use_viscosity,
                        egui::DragValue::new(&mut self.viscosity).speed(1.0),
                    );
                    unit_combo(ui, &mut self.viscosity_unit, viscosity_unit_options());
                    ui.end_row();

                    ui.checkbox(
                        &mut self.use_available_area,
                        txt("gui.prv.available_area", "Available discharge area"),
                    )
                    .on_hover_text(txt(
                        "gui.prv.available_area_tip",
                        "Installed orifice area to check adequacy against",
                    ));
                    ui.add_enabled(
                        self.use_available_area,
                        egui::DragValue::new(&mut self.available_area).speed(0.1),
                    );
                    unit_combo(ui, &mut self.area_unit, area_unit_options());
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.prv.set_pressure", "PRV set pressure"),
                        &txt("gui.prv.set_pressure_tip", "Opening set point of the valve"),
                    );
                    ui.add(egui::DragValue::new(&mut self.prv_setting).speed(1.0));
                    unit_combo(ui, &mut self.pressure_unit, pressure_unit_options());
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.prv.backpressure", "Max hydrostatic backpressure"),
                        &txt(
                            "gui.prv.backpressure_tip",
                            "Largest hydrostatic pressure downstream of the valve",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.backpressure).speed(1.0));
                    unit_combo(ui, &mut self.pressure_unit, pressure_unit_options());
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.label(txt("gui.prv.mud_weights", "Mud weights"));
            ui.small(txt(
                "gui.prv.mud_note",
                "The first mud weight drives the sizing formula.",
            ));
            let unit_code = self.density_unit.clone();
            let removable = self.mud_weights.len() > 1;
            let mut remove_idx: Option<usize> = None;
            for (i, w) in self.mud_weights.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("#{}", i + 1));
                    ui.add(egui::DragValue::new(w).speed(0.01));
                    ui.label(unit_code.as_str());
                    if removable && ui.button("✕").clicked() {
                        remove_idx = Some(i);
                    }
                });
            }
            if let Some(i) = remove_idx {
                self.mud_weights.remove(i);
            }
            ui.horizontal(|ui| {
                let can_add = self.mud_weights.len() < prv::MAX_MUD_WEIGHTS;
                if ui
                    .add_enabled(
                        can_add,
                        egui::Button::new(txt("gui.prv.mud_add", "Add mud weight")),
                    )
                    .clicked()
                {
                    self.mud_weights.push(convert_mud_density(
                        self.config.sizing_defaults.mud_weight_sg,
                        MudDensityUnit::SpecificGravity,
                        parse_density_unit_gui(&self.density_unit),
                    ));
                }
                if !can_add {
                    ui.small(txt("gui.prv.mud_full", "Up to 5 mud weights."));
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(txt("gui.prv.run", "Calculate")).clicked() {
                    self.run_sizing();
                    self.report_status = None;
                }
                if ui
                    .button(txt("gui.prv.export", "Export report..."))
                    .clicked()
                {
                    match self.build_report() {
                        Some(report) => {
                            if let Some(path) = FileDialog::new()
                                .set_file_name("prv_sizing_report.txt")
                                .add_filter("Text", &["txt"])
                                .save_file()
                            {
                                self.report_status = Some(match fs::write(&path, report) {
                                    Ok(()) => txt("gui.prv.export_done", "Report saved."),
                                    Err(e) => {
                                        format!("{}: {e}", txt("gui.prv.export_err", "Save failed"))
                                    }
                                });
                            }
                        }
                        None => {
                            self.report_status =
                                Some(txt("gui.prv.export_none", "Run a calculation first."));
                        }
                    }
                }
                if let Some(status) = &self.report_status {
                    ui.label(status);
                }
            });
        });

        if let Some(err) = &self.sizing_error {
            ui.add_space(8.0);
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
        if let Some(result) = self.sizing_result.clone() {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.style_mut().wrap = Some(true);
                ui.heading(txt("gui.prv.results", "Results"));
                let area_unit = parse_area_unit_gui(&self.area_unit);
                let area_display =
                    convert_area(result.required_area_in2, AreaUnit::SquareInch, area_unit);
                let mut area_line = format!(
                    "{} {:.4} {}",
                    tr.t(keys::RESULT_REQUIRED_AREA),
                    area_display,
                    unit_label_for(&self.area_unit, area_unit_options())
                );
                if area_unit != AreaUnit::SquareInch {
                    area_line.push_str(&format!(" ({:.4} in²)", result.required_area_in2));
                }
                ui.label(area_line);

                let pressure_unit = parse_pressure_unit_gui(&self.pressure_unit);
                let p1_display =
                    convert_pressure(result.over_pressure_prv_psi, PressureUnit::Psi, pressure_unit);
                let mut p1_line = format!(
                    "{} {:.2} {}",
                    tr.t(keys::RESULT_OVER_PRESSURE),
                    p1_display,
                    unit_label_for(&self.pressure_unit, pressure_unit_options())
                );
                if pressure_unit != PressureUnit::Psi {
                    p1_line.push_str(&format!(" ({:.2} psi)", result.over_pressure_prv_psi));
                }
                ui.label(p1_line);

                if let Some(re) = result.reynolds_number {
                    ui.label(format!("{} {:.1}", tr.t(keys::RESULT_REYNOLDS), re));
                    ui.label(format!(
                        "{} {:.4}",
                        tr.t(keys::RESULT_VISCOSITY_CORRECTION),
                        result.viscosity_correction
                    ));
                }
                if let Some((adequacy, sentence)) = &self.adequacy_note {
                    ui.add_space(4.0);
                    match adequacy {
                        prv::Adequacy::Adequate => {
                            ui.label(sentence);
                        }
                        prv::Adequacy::Inadequate => {
                            ui.colored_label(ui.visuals().warn_fg_color, sentence);
                        }
                    }
                }
            });
        }
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Unit Converter"),
            &txt(
                "gui.unit.tip",
                "Convert drilling units between oilfield and metric.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.unit.quantity.label", "Quantity"),
                            &txt("gui.unit.quantity_tip", "Select the quantity type"),
                        );
                        let before = self.conv_kind;
                        let q_options = vec![
                            (
                                QuantityKind::FlowRate,
                                txt("gui.unit.quantity.flow_rate", "Flow rate"),
                            ),
                            (
                                QuantityKind::Pressure,
                                txt("gui.unit.quantity.pressure", "Pressure"),
                            ),
                            (QuantityKind::Area, txt("gui.unit.quantity.area", "Area")),
                            (
                                QuantityKind::MudDensity,
                                txt("gui.unit.quantity.mud_density", "Mud density"),
                            ),
                            (
                                QuantityKind::Viscosity,
                                txt("gui.unit.quantity.viscosity", "Viscosity"),
                            ),
                        ];
                        let selected_label = q_options
                            .iter()
                            .find(|(k, _)| *k == self.conv_kind)
                            .map(|(_, l)| l.clone())
                            .unwrap_or_else(|| txt("gui.unit.quantity.label", "Quantity"));
                        egui::ComboBox::from_id_source("conv_kind")
                            .selected_text(selected_label)
                            .show_ui(ui, |ui| {
                                for (k, label) in &q_options {
                                    ui.selectable_value(&mut self.conv_kind, *k, label.clone());
                                }
                            });
                        if before != self.conv_kind {
                            let (f, t) = default_units_for_kind(self.conv_kind);
                            self.conv_from = f.to_string();
                            self.conv_to = t.to_string();
                        }
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.value", "Value"),
                            &txt("gui.unit.value_tip", "Enter the value to convert"),
                        );
                        ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.from", "From unit"),
                            &txt("gui.unit.from_tip", "Current unit of the value"),
                        );
                        egui::ComboBox::from_id_source("conv_from")
                            .selected_text(unit_label(&self.conv_from, self.conv_kind))
                            .show_ui(ui, |ui| {
                                for (label, code) in unit_options(self.conv_kind) {
                                    ui.selectable_value(&mut self.conv_from, code.to_string(), *label);
                                }
                            });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.to", "To unit"),
                            &txt("gui.unit.to_tip", "Desired unit after conversion"),
                        );
                        egui::ComboBox::from_id_source("conv_to")
                            .selected_text(unit_label(&self.conv_to, self.conv_kind))
                            .show_ui(ui, |ui| {
                                for (label, code) in unit_options(self.conv_kind) {
                                    ui.selectable_value(&mut self.conv_to, code.to_string(), *label);
                                }
                            });
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.unit.run", "Convert")).clicked() {
                    self.conv_result = match conversion::convert(
                        self.conv_kind,
                        self.conv_value,
                        self.conv_from.trim(),
                        self.conv_to.trim(),
                    ) {
                        Ok(v) => Some(format!("{v:.6} {}", self.conv_to.trim())),
                        Err(e) => Some(format!("{}: {e}", txt("gui.unit.error_prefix", "Error"))),
                    };
                }
                if let Some(res) = &self.conv_result {
                    ui.label(res);
                }
            });
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.55).max(860.0), (screen.y * 0.6).max(640.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        // 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "PRV Sizing Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui
                    .button(txt("gui.formula.button", "Formula reference"))
                    .clicked()
                {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_unit_system = self.config.unit_system;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.unit_preset", "Unit system preset"));
                    ui.horizontal(|ui| {
                        for (label, us) in [
                            ("Oilfield", config::UnitSystem::Oilfield),
                            ("Metric", config::UnitSystem::Metric),
                        ] {
                            ui.selectable_value(&mut new_unit_system, us, label);
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.sizing_defaults", "Sizing defaults"));
                    egui::Grid::new("defaults_grid")
                        .num_columns(2)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            ui.label(txt("gui.settings.default_mud", "Mud weight [sg]"));
                            ui.add(
                                egui::DragValue::new(&mut self.config.sizing_defaults.mud_weight_sg)
                                    .speed(0.01),
                            );
                            ui.end_row();
                            ui.label(txt("gui.settings.default_kw", "Kw"));
                            ui.add(
                                egui::DragValue::new(
                                    &mut self.config.sizing_defaults.capacity_correction_factor,
                                )
                                .speed(0.01),
                            );
                            ui.end_row();
                            ui.label(txt("gui.settings.default_kd", "Kd"));
                            ui.add(
                                egui::DragValue::new(
                                    &mut self.config.sizing_defaults.coefficient_of_discharge,
                                )
                                .speed(0.01),
                            );
                            ui.end_row();
                            ui.label(txt("gui.settings.default_kc", "Kc"));
                            ui.add(
                                egui::DragValue::new(
                                    &mut self.config.sizing_defaults.combination_correction_factor,
                                )
                                .speed(0.01),
                            );
                            ui.end_row();
                        });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.horizontal(|ui| {
                        ui.label(txt("gui.settings.lang_pack_dir", "Language pack dir"));
                        ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                    });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.language_pack_dir = if self.lang_pack_dir_input.trim().is_empty()
                        {
                            None
                        } else {
                            Some(self.lang_pack_dir_input.trim().to_string())
                        };
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if new_unit_system != self.config.unit_system {
                self.config.unit_system = new_unit_system;
                self.config.default_units = config::units_for(new_unit_system);
                self.apply_unit_preset(new_unit_system);
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(self.tr.t(keys::APP_TITLE));
                    ui.label(self.tr.t(keys::APP_TAGLINE));
                    ui.label(txt("gui.about.version", "Version: 0.1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.first_weight",
                        "- The first mud weight in the list drives the sizing formula.",
                    ));
                    ui.label(txt(
                        "gui.about.viscosity",
                        "- Viscosity correction needs both viscosity and available area.",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust units and defaults in settings; changes persist to config.toml.",
                    ));
                });
        }

        // 공식 모달
        if self.show_formula_modal {
            egui::Window::new(self.tr.t(keys::FORMULA_TITLE))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(self.tr.t(keys::FORMULA_AREA));
                    ui.label(self.tr.t(keys::FORMULA_REYNOLDS));
                    ui.label(self.tr.t(keys::FORMULA_KV));
                    ui.separator();
                    ui.label(self.tr.t(keys::FORMULA_WHERE));
                    ui.label(self.tr.t(keys::FORMULA_VAR_AREA));
                    ui.label(self.tr.t(keys::FORMULA_VAR_FLOW));
                    ui.label(self.tr.t(keys::FORMULA_VAR_KD));
                    ui.label(self.tr.t(keys::FORMULA_VAR_KW));
                    ui.label(self.tr.t(keys::FORMULA_VAR_KC));
                    ui.label(self.tr.t(keys::FORMULA_VAR_KV));
                    ui.label(self.tr.t(keys::FORMULA_VAR_VISCOSITY));
                    ui.label(self.tr.t(keys::FORMULA_VAR_SG));
                    ui.label(self.tr.t(keys::FORMULA_VAR_P1));
                    ui.label(self.tr.t(keys::FORMULA_VAR_P2));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::PrvSizing => self.ui_prv_sizing(ui),
                    Tab::UnitConv => self.ui_unit_conv(ui),
                });
        });
    }
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::FlowRate => ("gpm", "m3/h"),
        QuantityKind::Pressure => ("psi", "kPa"),
        QuantityKind::Area => ("in2", "mm2"),
        QuantityKind::MudDensity => ("sg", "ppg"),
        QuantityKind::Viscosity => ("cP", "Pa·s"),
    }
}

fn unit_options(kind: QuantityKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        QuantityKind::FlowRate => flow_unit_options(),
        QuantityKind::Pressure => pressure_unit_options(),
        QuantityKind::Area => area_unit_options(),
        QuantityKind::MudDensity => density_unit_options(),
        QuantityKind::Viscosity => viscosity_unit_options(),
    }
}

fn unit_label(code: &str, kind: QuantityKind) -> String {
    unit_label_for(code, unit_options(kind))
}

fn unit_label_for(code: &str, options: &[(&str, &str)]) -> String {
    for (label, c) in options {
        if code.eq_ignore_ascii_case(c) {
            return label.to_string();
        }
    }
    code.to_string()
}

fn unit_combo(ui: &mut egui::Ui, value: &mut String, options: &[(&str, &str)]) {
    let current = options
        .iter()
        .find(|(_, c)| value.eq_ignore_ascii_case(c))
        .map(|(l, _)| *l)
        .unwrap_or(value.as_str());
    egui::ComboBox::from_id_source(ui.next_auto_id())
        .selected_text(current)
        .show_ui(ui, |ui| {
            for (label, code) in options {
                ui.selectable_value(value, code.to_string(), *label);
            }
        });
}

fn flow_unit_options() -> &'static [(&'static str, &'static str)] {
    &[
        ("gpm", "gpm"),
        ("m³/h", "m3/h"),
        ("L/min", "l/min"),
        ("bbl/min", "bbl/min"),
    ]
}

fn pressure_unit_options() -> &'static [(&'static str, &'static str)] {
    &[
        ("psi", "psi"),
        ("kPa", "kPa"),
        ("MPa", "MPa"),
        ("bar", "bar"),
        ("kg/cm²", "kg/cm2"),
    ]
}

fn area_unit_options() -> &'static [(&'static str, &'static str)] {
    &[("in²", "in2"), ("mm²", "mm2"), ("cm²", "cm2")]
}

fn density_unit_options() -> &'static [(&'static str, &'static str)] {
    &[("sg", "sg"), ("ppg", "ppg"), ("kg/m³", "kg/m3")]
}

fn viscosity_unit_options() -> &'static [(&'static str, &'static str)] {
    &[("cP", "cP"), ("Pa·s", "Pa·s")]
}

fn parse_flow_unit_gui(s: &str) -> FlowRateUnit {
    match s.to_lowercase().as_str() {
        "m3/h" | "m^3/h" => FlowRateUnit::CubicMeterPerHour,
        "l/min" | "lpm" => FlowRateUnit::LiterPerMinute,
        "bbl/min" | "bpm" => FlowRateUnit::BarrelPerMinute,
        _ => FlowRateUnit::GallonPerMinute,
    }
}

fn parse_pressure_unit_gui(s: &str) -> PressureUnit {
    match s.to_lowercase().as_str() {
        "kpa" => PressureUnit::KiloPascal,
        "mpa" => PressureUnit::MegaPascal,
        "bar" => PressureUnit::Bar,
        "kg/cm2" | "kgf/cm2" => PressureUnit::KgPerCm2,
        _ => PressureUnit::Psi,
    }
}

fn parse_area_unit_gui(s: &str) -> AreaUnit {
    match s.to_lowercase().as_str() {
        "mm2" | "mm^2" => AreaUnit::SquareMillimeter,
        "cm2" | "cm^2" => AreaUnit::SquareCentimeter,
        _ => AreaUnit::SquareInch,
    }
}

fn parse_density_unit_gui(s: &str) -> MudDensityUnit {
    match s.to_lowercase().as_str() {
        "ppg" | "lb/gal" => MudDensityUnit::PoundPerGallon,
        "kg/m3" | "kg/m^3" => MudDensityUnit::KilogramPerCubicMeter,
        _ => MudDensityUnit::SpecificGravity,
    }
}

fn parse_viscosity_unit_gui(s: &str) -> ViscosityUnit {
    match s.to_lowercase().as_str() {
        "pa·s" | "pa.s" | "pas" => ViscosityUnit::PascalSecond,
        _ => ViscosityUnit::Centipoise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_oilfield_applies_field_units() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(config::UnitSystem::Oilfield);
        assert_eq!(app.flow_unit, "gpm");
        assert_eq!(app.pressure_unit, "psi");
        assert_eq!(app.area_unit, "in2");
        assert_eq!(app.density_unit, "sg");
        assert_eq!(app.viscosity_unit, "cP");
    }

    #[test]
    fn preset_metric_applies_metric_units() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(config::UnitSystem::Metric);
        assert_eq!(app.flow_unit, "m3/h");
        assert_eq!(app.pressure_unit, "kPa");
        assert_eq!(app.area_unit, "mm2");
        assert_eq!(app.density_unit, "kg/m3");
        assert_eq!(app.viscosity_unit, "Pa·s");
    }

    #[test]
    fn sizing_parameters_convert_display_units() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(config::UnitSystem::Metric);
        app.flow_rate = 113.56235;
        app.mud_weights = vec![1200.0];
        app.prv_setting = 689.4757;
        app.backpressure = 344.73785;
        let params = app.sizing_parameters();
        assert!((params.flow_rate_gpm - 500.0).abs() < 1e-3);
        assert!((params.mud_weights_sg[0] - 1.2).abs() < 1e-9);
        assert!((params.prv_setting_psi - 100.0).abs() < 1e-6);
        assert!((params.max_hydrostatic_backpressure_psi - 50.0).abs() < 1e-6);
    }

    #[test]
    fn optional_inputs_stay_off_until_enabled() {
        let mut app = GuiApp::new(config::Config::default());
        app.viscosity = 200.0;
        app.available_area = 3.0;
        let params = app.sizing_parameters();
        assert!(params.absolute_viscosity_cp.is_none());
        assert!(params.available_area_in2.is_none());

        app.use_viscosity = true;
        app.use_available_area = true;
        let params = app.sizing_parameters();
        assert_eq!(params.absolute_viscosity_cp, Some(200.0));
        assert_eq!(params.available_area_in2, Some(3.0));
    }

    #[test]
    fn adequacy_note_fills_template_values() {
        let mut app = GuiApp::new(config::Config::default());
        app.use_available_area = true;
        app.available_area = 3.0;
        app.run_sizing();
        let (adequacy, sentence) = app.adequacy_note.clone().expect("note");
        assert_eq!(adequacy, prv::Adequacy::Adequate);
        assert!(sentence.contains("3.00"), "{sentence}");
        assert!(sentence.contains("2.86"), "{sentence}");
    }

    #[test]
    fn report_contains_results() {
        let mut app = GuiApp::new(config::Config::default());
        app.flow_rate = 500.0;
        app.prv_setting = 100.0;
        app.backpressure = 50.0;
        app.run_sizing();
        let report = app.build_report().unwrap();
        assert!(report.contains("110.00"), "{report}");
        assert!(report.contains("2.8628"), "{report}");
    }

    #[test]
    fn report_requires_a_result() {
        let app = GuiApp::new(config::Config::default());
        assert!(app.build_report().is_none());
    }
}
