use prv_sizing_toolbox::prv::{
    assess_adequacy, Adequacy, MudWeightSet, DEFAULT_MUD_WEIGHT_SG, MAX_MUD_WEIGHTS,
};

#[test]
fn starts_with_single_default_entry() {
    let set = MudWeightSet::new();
    assert_eq!(set.len(), 1);
    assert!(!set.is_empty());
    assert!((set.primary() - DEFAULT_MUD_WEIGHT_SG).abs() < 1e-12);
}

#[test]
fn add_stops_at_capacity() {
    let mut set = MudWeightSet::new();
    for _ in 1..MAX_MUD_WEIGHTS {
        assert!(set.add());
    }
    assert_eq!(set.len(), MAX_MUD_WEIGHTS);
    assert!(set.is_full());
    assert!(!set.add());
    assert_eq!(set.len(), MAX_MUD_WEIGHTS);
}

#[test]
fn update_respects_bounds() {
    let mut set = MudWeightSet::new();
    assert!(set.update(0, 1.55));
    assert!((set.primary() - 1.55).abs() < 1e-12);
    assert!(!set.update(1, 2.0));
    assert_eq!(set.values(), &[1.55]);
}

#[test]
fn remove_keeps_at_least_one_entry() {
    let mut set = MudWeightSet::new();
    assert!(!set.remove(0));

    assert!(set.add());
    assert!(set.update(1, 1.8));
    assert!(set.remove(0));
    assert_eq!(set.len(), 1);
    assert!((set.primary() - 1.8).abs() < 1e-12);
    assert!(!set.remove(5));
}

#[test]
fn adequacy_boundary_is_inclusive() {
    assert_eq!(assess_adequacy(2.8628, 2.8628), Adequacy::Adequate);
}

#[test]
fn adequacy_reflects_margin() {
    assert_eq!(assess_adequacy(3.0, 2.8628), Adequacy::Adequate);
    assert_eq!(assess_adequacy(2.5, 2.8628), Adequacy::Inadequate);
}
