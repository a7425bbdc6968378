use prv_sizing_toolbox::prv::{calculate, SizingParameters};

fn base_params() -> SizingParameters {
    SizingParameters {
        flow_rate_gpm: 500.0,
        mud_weights_sg: vec![1.2],
        capacity_correction_factor: 1.0,
        coefficient_of_discharge: 0.65,
        combination_correction_factor: 1.0,
        absolute_viscosity_cp: None,
        available_area_in2: None,
        prv_setting_psi: 100.0,
        max_hydrostatic_backpressure_psi: 50.0,
    }
}

#[test]
fn required_area_matches_hand_calculation() {
    let res = calculate(&base_params()).expect("sizing");
    assert!(
        (res.required_area_in2 - 2.8628).abs() < 1e-3,
        "area={}",
        res.required_area_in2
    );
    assert!((res.over_pressure_prv_psi - 110.0).abs() < 1e-9);
    assert!(res.reynolds_number.is_none());
    assert!((res.viscosity_correction - 1.0).abs() < 1e-12);
}

#[test]
fn over_pressure_is_ten_percent_above_set_point() {
    let mut params = base_params();
    params.prv_setting_psi = 250.0;
    let res = calculate(&params).expect("sizing");
    assert!((res.over_pressure_prv_psi - 275.0).abs() < 1e-9);
}

#[test]
fn empty_mud_weight_list_rejected_first() {
    // 유량이 0이어도 mud weight 검증이 먼저 걸린다.
    let mut params = base_params();
    params.mud_weights_sg = Vec::new();
    params.flow_rate_gpm = 0.0;
    let err = calculate(&params).unwrap_err();
    assert_eq!(err.reason(), "At least one Mud Weight must be provided.");
}

#[test]
fn non_positive_flow_rejected() {
    let mut params = base_params();
    params.flow_rate_gpm = 0.0;
    let err = calculate(&params).unwrap_err();
    assert_eq!(err.reason(), "Max Pump Rate must be greater than zero.");

    params.flow_rate_gpm = -10.0;
    let err = calculate(&params).unwrap_err();
    assert_eq!(err.reason(), "Max Pump Rate must be greater than zero.");
}

#[test]
fn non_positive_primary_mud_weight_rejected() {
    let mut params = base_params();
    params.mud_weights_sg = vec![0.0];
    let err = calculate(&params).unwrap_err();
    assert_eq!(err.reason(), "Mud Weight must be greater than zero.");
}

#[test]
fn only_first_mud_weight_is_validated() {
    // 두 번째 이후 항목은 참고용 목록이라 음수여도 계산은 진행된다.
    let mut params = base_params();
    params.mud_weights_sg = vec![1.2, -5.0];
    let res = calculate(&params).expect("sizing");
    assert!((res.required_area_in2 - 2.8628).abs() < 1e-3);
}

#[test]
fn non_positive_factors_rejected_in_order() {
    let mut params = base_params();
    params.capacity_correction_factor = 0.0;
    let err = calculate(&params).unwrap_err();
    assert_eq!(
        err.reason(),
        "Capacity Correction Factor must be greater than zero."
    );

    let mut params = base_params();
    params.coefficient_of_discharge = -0.1;
    let err = calculate(&params).unwrap_err();
    assert_eq!(
        err.reason(),
        "Coefficient of Discharge must be greater than zero."
    );

    let mut params = base_params();
    params.combination_correction_factor = 0.0;
    let err = calculate(&params).unwrap_err();
    assert_eq!(
        err.reason(),
        "Combination Correction Factor must be greater than zero."
    );

    // Kw와 Kd가 둘 다 틀리면 Kw가 먼저 보고된다.
    let mut params = base_params();
    params.capacity_correction_factor = 0.0;
    params.coefficient_of_discharge = 0.0;
    let err = calculate(&params).unwrap_err();
    assert_eq!(
        err.reason(),
        "Capacity Correction Factor must be greater than zero."
    );
}

#[test]
fn backpressure_at_or_above_over_pressure_rejected() {
    // set 50 → P1 = 55 ≤ P2 = 60
    let mut params = base_params();
    params.prv_setting_psi = 50.0;
    params.max_hydrostatic_backpressure_psi = 60.0;
    let err = calculate(&params).unwrap_err();
    assert_eq!(
        err.reason(),
        "P1 (Over Pressure PRV) must be greater than P2 (Max Hydrostatic Backpressure)."
    );

    // 경계값: P1 == P2도 거부된다 (set 100 → P1 = 110).
    let mut params = base_params();
    params.max_hydrostatic_backpressure_psi = 110.0;
    let err = calculate(&params).unwrap_err();
    assert_eq!(
        err.reason(),
        "P1 (Over Pressure PRV) must be greater than P2 (Max Hydrostatic Backpressure)."
    );
}

#[test]
fn area_grows_with_flow() {
    let res_low = calculate(&base_params()).expect("sizing");
    let mut params = base_params();
    params.flow_rate_gpm = 1000.0;
    let res_high = calculate(&params).expect("sizing");
    assert!(res_high.required_area_in2 > res_low.required_area_in2);
    // 분자에 선형으로 들어가므로 정확히 2배가 된다.
    assert!(
        (res_high.required_area_in2 - 2.0 * res_low.required_area_in2).abs() < 1e-9
    );
}

#[test]
fn area_shrinks_with_better_discharge_coefficient() {
    let res_base = calculate(&base_params()).expect("sizing");
    let mut params = base_params();
    params.coefficient_of_discharge = 0.975;
    let res_better = calculate(&params).expect("sizing");
    assert!(res_better.required_area_in2 < res_base.required_area_in2);
}

#[test]
fn area_grows_with_heavier_mud() {
    let res_base = calculate(&base_params()).expect("sizing");
    let mut params = base_params();
    params.mud_weights_sg = vec![1.8];
    let res_heavy = calculate(&params).expect("sizing");
    assert!(res_heavy.required_area_in2 > res_base.required_area_in2);
}

#[test]
fn narrower_differential_pressure_needs_more_area() {
    let res_base = calculate(&base_params()).expect("sizing");
    let mut params = base_params();
    params.max_hydrostatic_backpressure_psi = 100.0;
    let res_tight = calculate(&params).expect("sizing");
    assert!(res_tight.required_area_in2 > res_base.required_area_in2);
}
