//! 희석·보정과 끓임 부피/비중 회귀 테스트.
use brew_calc::{
    adjust_extract, adjust_water, boil_off, dilute, evap_loss_per_hour, post_boil_gravity,
    post_boil_volume, shrinkage, total_boil_loss, BoilInput, CalcError, EvapMode, ExtractKind,
};

#[test]
fn dilution_conserves_gravity_points() {
    // 54 pts × 6 gal / 7 gal = 46.3 pts
    assert_eq!(dilute(1.054, 6.0, 1.0).expect("dilute"), 1.046);
    assert_eq!(dilute(1.054, 6.0, 0.0).expect("dilute"), 1.054);
}

#[test]
fn water_adjustment() {
    assert_eq!(adjust_water(1.088, 1.078, 5.0).expect("water"), 0.64);
    assert_eq!(adjust_water(1.078, 1.078, 5.0).expect("water"), 0.0);
    assert_eq!(
        adjust_water(1.078, 1.088, 5.0),
        Err(CalcError::InvalidRange(
            "target gravity must not exceed current gravity"
        ))
    );
}

#[test]
fn water_adjustment_to_plain_water_target_is_rejected() {
    // 목표 GP가 0이면 필요한 물이 무한대가 된다.
    assert!(matches!(
        adjust_water(1.050, 1.000, 5.0),
        Err(CalcError::InvalidArgument(_))
    ));
}

#[test]
fn extract_adjustment_by_kind() {
    assert_eq!(adjust_extract(1.078, 1.088, 5.0, ExtractKind::Lme).expect("lme"), 1.39);
    assert_eq!(adjust_extract(1.078, 1.088, 5.0, ExtractKind::Dme).expect("dme"), 1.14);
    assert_eq!(
        adjust_extract(1.078, 1.088, 5.0, ExtractKind::Custom(46.0)).expect("custom"),
        1.09
    );
}

#[test]
fn extract_adjustment_range_and_arguments() {
    assert_eq!(
        adjust_extract(1.088, 1.078, 5.0, ExtractKind::Lme),
        Err(CalcError::InvalidRange(
            "target gravity must not be less than current gravity"
        ))
    );
    assert!(matches!(
        adjust_extract(f64::NAN, 1.078, 5.0, ExtractKind::Lme),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        adjust_extract(1.078, 1.088, 5.0, ExtractKind::Custom(f64::NAN)),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        adjust_extract(1.078, 1.088, 5.0, ExtractKind::Custom(0.0)),
        Err(CalcError::InvalidArgument(_))
    ));
}

#[test]
fn extract_kind_parsing() {
    assert_eq!("LME".parse::<ExtractKind>(), Ok(ExtractKind::Lme));
    assert_eq!("DME".parse::<ExtractKind>(), Ok(ExtractKind::Dme));
    assert!(matches!(
        "dme".parse::<ExtractKind>(),
        Err(CalcError::InvalidArgument(_))
    ));
    assert_eq!("46".parse::<ExtractKind>(), Ok(ExtractKind::Custom(46.0)));
    assert!(matches!(
        "syrup".parse::<ExtractKind>(),
        Err(CalcError::InvalidArgument(_))
    ));
}

#[test]
fn evaporation_per_hour_modes() {
    assert_eq!(evap_loss_per_hour(6.0, 10.0, EvapMode::default()).expect("evap"), 0.6);
    assert_eq!(evap_loss_per_hour(6.0, 10.0, EvapMode::Percentage).expect("evap"), 0.6);
    assert_eq!(evap_loss_per_hour(6.0, 0.5, EvapMode::Volume).expect("evap"), 0.5);
    assert!(matches!(
        "boiling".parse::<EvapMode>(),
        Err(CalcError::InvalidArgument(_))
    ));
    assert_eq!("volume".parse::<EvapMode>(), Ok(EvapMode::Volume));
}

#[test]
fn boil_volume_steps() {
    assert_eq!(total_boil_loss(0.6, 90.0).expect("loss"), 0.9);
    assert_eq!(shrinkage(7.0, 0.9, None).expect("shrink"), 0.24);
    assert_eq!(shrinkage(7.0, 0.9, Some(3.0)).expect("shrink"), 0.18);
    assert_eq!(post_boil_volume(7.0, 0.9, 0.24).expect("volume"), 5.86);
    assert_eq!(post_boil_gravity(7.0, 1.059, 5.71).expect("gravity"), 1.072);
}

#[test]
fn boil_steps_reject_non_finite() {
    assert!(matches!(
        shrinkage(7.0, 0.9, Some(f64::NAN)),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        post_boil_gravity(7.0, 1.059, 0.0),
        Err(CalcError::InvalidArgument(_))
    ));
}

#[test]
fn boil_off_chains_all_steps() {
    let res = boil_off(BoilInput {
        pre_boil_volume: 7.0,
        pre_boil_gravity: 1.059,
        evap_rate: 10.0,
        evap_mode: EvapMode::Percentage,
        boil_minutes: 90.0,
        shrink_pct: None,
    })
    .expect("boil");
    assert_eq!(res.loss_per_hour, 0.7);
    assert_eq!(res.boil_loss, 1.05);
    assert_eq!(res.shrink_loss, 0.24);
    assert_eq!(res.post_boil_volume, 5.71);
    assert_eq!(res.post_boil_gravity, 1.072);
}

#[test]
fn written_ties_round_up_at_two_places() {
    assert_eq!(evap_loss_per_hour(6.0, 1.005, EvapMode::Volume).expect("evap"), 1.01);
    assert_eq!(total_boil_loss(1.005, 60.0).expect("loss"), 1.01);
    assert_eq!(post_boil_gravity(1.0, 1.025, 2.0).expect("gravity"), 1.013);
}

#[test]
fn volume_functions_reject_non_finite() {
    assert!(matches!(dilute(f64::NAN, 6.0, 1.0), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(
        dilute(1.054, 6.0, f64::INFINITY),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        evap_loss_per_hour(f64::NAN, 10.0, EvapMode::Percentage),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        evap_loss_per_hour(6.0, f64::INFINITY, EvapMode::Volume),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        total_boil_loss(0.6, f64::NEG_INFINITY),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        post_boil_volume(7.0, f64::NAN, 0.24),
        Err(CalcError::InvalidArgument(_))
    ));
}
