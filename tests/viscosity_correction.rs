use prv_sizing_toolbox::prv::{
    calculate, reynolds_number, viscosity_correction, SizingParameters,
};

fn viscous_params() -> SizingParameters {
    SizingParameters {
        flow_rate_gpm: 500.0,
        mud_weights_sg: vec![1.2],
        capacity_correction_factor: 1.0,
        coefficient_of_discharge: 0.65,
        combination_correction_factor: 1.0,
        absolute_viscosity_cp: Some(200.0),
        available_area_in2: Some(3.0),
        prv_setting_psi: 100.0,
        max_hydrostatic_backpressure_psi: 50.0,
    }
}

#[test]
fn reynolds_number_matches_hand_calculation() {
    // R = (500 × 2800 × 1.2) / (200 × √3)
    let r = reynolds_number(500.0, 1.2, 200.0, 3.0);
    assert!((r - 4849.742).abs() < 1e-2, "r={r}");
}

#[test]
fn correction_factor_below_one_for_viscous_flow() {
    let r = reynolds_number(500.0, 1.2, 200.0, 3.0);
    let kv = viscosity_correction(r);
    assert!((kv - 0.96540).abs() < 1e-4, "kv={kv}");
    assert!(kv < 1.0);
}

#[test]
fn correction_approaches_one_for_thin_fluids() {
    // R이 커질수록 Kv → 1/0.9935에 수렴한다.
    let kv = viscosity_correction(1.0e9);
    assert!(kv > 0.999 && kv < 1.01, "kv={kv}");
    assert!(viscosity_correction(1.0e4) < kv);
}

#[test]
fn viscous_sizing_increases_required_area() {
    let res = calculate(&viscous_params()).expect("sizing");
    let re = res.reynolds_number.expect("reynolds");
    assert!((re - 4849.742).abs() < 1e-2);
    assert!((res.viscosity_correction - 0.96540).abs() < 1e-4);
    assert!((res.required_area_in2 - 2.9654).abs() < 1e-3, "area={}", res.required_area_in2);

    // 같은 조건에서 보정이 없으면 면적이 더 작다.
    let mut inviscid = viscous_params();
    inviscid.absolute_viscosity_cp = None;
    let res_inviscid = calculate(&inviscid).expect("sizing");
    assert!(res.required_area_in2 > res_inviscid.required_area_in2);
}

#[test]
fn correction_skipped_without_available_area() {
    let mut params = viscous_params();
    params.available_area_in2 = None;
    let res = calculate(&params).expect("sizing");
    assert!(res.reynolds_number.is_none());
    assert!((res.viscosity_correction - 1.0).abs() < 1e-12);
    assert!((res.required_area_in2 - 2.8628).abs() < 1e-3);
}

#[test]
fn correction_skipped_without_viscosity() {
    let mut params = viscous_params();
    params.absolute_viscosity_cp = None;
    let res = calculate(&params).expect("sizing");
    assert!(res.reynolds_number.is_none());
    assert!((res.viscosity_correction - 1.0).abs() < 1e-12);
}

#[test]
fn correction_skipped_for_non_positive_inputs() {
    let mut params = viscous_params();
    params.absolute_viscosity_cp = Some(0.0);
    let res = calculate(&params).expect("sizing");
    assert!(res.reynolds_number.is_none());

    let mut params = viscous_params();
    params.available_area_in2 = Some(-1.0);
    let res = calculate(&params).expect("sizing");
    assert!(res.reynolds_number.is_none());
    assert!((res.viscosity_correction - 1.0).abs() < 1e-12);
}
