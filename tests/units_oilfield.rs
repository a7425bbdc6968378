use prv_sizing_toolbox::{
    conversion::{self, ConversionError},
    quantity::QuantityKind,
    units::{
        convert_area, convert_flow_rate, convert_mud_density, convert_pressure, convert_viscosity,
        AreaUnit, FlowRateUnit, MudDensityUnit, PressureUnit, ViscosityUnit,
    },
};

#[test]
fn flow_rate_gpm_to_metric() {
    let m3h = convert_flow_rate(500.0, FlowRateUnit::GallonPerMinute, FlowRateUnit::CubicMeterPerHour);
    assert!((m3h - 113.56235).abs() < 1e-4, "m3h={m3h}");
    let back = convert_flow_rate(m3h, FlowRateUnit::CubicMeterPerHour, FlowRateUnit::GallonPerMinute);
    assert!((back - 500.0).abs() < 1e-9);
}

#[test]
fn flow_rate_barrels_use_42_gallons() {
    let gpm = convert_flow_rate(1.0, FlowRateUnit::BarrelPerMinute, FlowRateUnit::GallonPerMinute);
    assert!((gpm - 42.0).abs() < 1e-12);
    let lpm = convert_flow_rate(1.0, FlowRateUnit::GallonPerMinute, FlowRateUnit::LiterPerMinute);
    assert!((lpm - 3.785411784).abs() < 1e-9);
}

#[test]
fn pressure_psi_to_metric() {
    let kpa = convert_pressure(100.0, PressureUnit::Psi, PressureUnit::KiloPascal);
    assert!((kpa - 689.4757).abs() < 1e-4, "kpa={kpa}");
    let psi = convert_pressure(10.0, PressureUnit::Bar, PressureUnit::Psi);
    assert!((psi - 145.03774).abs() < 1e-5);
    let mpa = convert_pressure(1000.0, PressureUnit::KiloPascal, PressureUnit::MegaPascal);
    assert!((mpa - 1.0).abs() < 1e-12);
    let psi = convert_pressure(1.0, PressureUnit::KgPerCm2, PressureUnit::Psi);
    assert!((psi - 14.223343).abs() < 1e-9);
}

#[test]
fn area_square_inch_to_metric() {
    let mm2 = convert_area(1.0, AreaUnit::SquareInch, AreaUnit::SquareMillimeter);
    assert!((mm2 - 645.16).abs() < 1e-9);
    let cm2 = convert_area(1.0, AreaUnit::SquareInch, AreaUnit::SquareCentimeter);
    assert!((cm2 - 6.4516).abs() < 1e-9);
}

#[test]
fn mud_density_sg_ppg_kg_m3() {
    let ppg = convert_mud_density(1.0, MudDensityUnit::SpecificGravity, MudDensityUnit::PoundPerGallon);
    assert!((ppg - 8.345404).abs() < 1e-9);
    let sg = convert_mud_density(
        1200.0,
        MudDensityUnit::KilogramPerCubicMeter,
        MudDensityUnit::SpecificGravity,
    );
    assert!((sg - 1.2).abs() < 1e-12);
}

#[test]
fn viscosity_cp_pa_s() {
    let cp = convert_viscosity(0.2, ViscosityUnit::PascalSecond, ViscosityUnit::Centipoise);
    assert!((cp - 200.0).abs() < 1e-9);
    let pas = convert_viscosity(200.0, ViscosityUnit::Centipoise, ViscosityUnit::PascalSecond);
    assert!((pas - 0.2).abs() < 1e-12);
}

#[test]
fn string_dispatch_accepts_aliases() {
    let v = conversion::convert(QuantityKind::FlowRate, 500.0, "gpm", "m3/h").expect("convert");
    assert!((v - 113.56235).abs() < 1e-4);
    let v = conversion::convert(QuantityKind::Pressure, 100.0, "PSI", "kPa").expect("convert");
    assert!((v - 689.4757).abs() < 1e-4);
    let v = conversion::convert(QuantityKind::Area, 645.16, "mm^2", "in2").expect("convert");
    assert!((v - 1.0).abs() < 1e-9);
    let v = conversion::convert(QuantityKind::MudDensity, 8.345404, "lb/gal", "sg").expect("convert");
    assert!((v - 1.0).abs() < 1e-9);
    let v = conversion::convert(QuantityKind::Viscosity, 1.0, "Pa.s", "cP").expect("convert");
    assert!((v - 1000.0).abs() < 1e-9);
}

#[test]
fn string_dispatch_rejects_unknown_units() {
    let err = conversion::convert(QuantityKind::Pressure, 1.0, "torr", "psi").unwrap_err();
    match err {
        ConversionError::UnknownUnit(u) => assert_eq!(u, "torr"),
    }
    assert!(conversion::convert(QuantityKind::FlowRate, 1.0, "gpm", "scfm").is_err());
}
