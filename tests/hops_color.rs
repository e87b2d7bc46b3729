//! 홉 쓴맛(Tinseth)과 맥주 색(Morey) 회귀 테스트.
use brew_calc::{aau, ibu, lovibond_to_srm, mcu, srm, srm_to_lovibond, utilization, CalcError, HopForm};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:.3e}, tol {tol})"
    );
}

#[test]
fn alpha_acid_units() {
    assert_eq!(aau(1.5, 12.0).expect("aau"), 18.0);
    assert!(matches!(aau(f64::NAN, 12.0), Err(CalcError::InvalidArgument(_))));
}

#[test]
fn tinseth_utilization_reference() {
    let u = utilization(60.0, 1.048).expect("utilization");
    assert_close("utilization", u, 0.234_847_609_771_060_6, 1e-12);
    assert_eq!(utilization(0.0, 1.048).expect("utilization"), 0.0);
}

#[test]
fn ibu_without_and_with_adjustment() {
    assert_eq!(ibu(1.5, 12.0, 60.0, 1.048, 5.5, None).expect("ibu"), 57.6);
    assert_eq!(ibu(1.5, 12.0, 60.0, 1.048, 5.5, Some(10.0)).expect("ibu"), 63.3);
}

#[test]
fn pellet_form_matches_ten_percent_adjustment() {
    let pellet = ibu(1.5, 12.0, 60.0, 1.048, 5.5, HopForm::Pellet.utilization_adjust_pct());
    assert_eq!(pellet.expect("pellet"), 63.3);
    let whole = ibu(1.5, 12.0, 60.0, 1.048, 5.5, HopForm::Whole.utilization_adjust_pct());
    assert_eq!(whole.expect("whole"), 57.6);
}

#[test]
fn ibu_rejects_invalid_inputs() {
    assert!(matches!(
        ibu(1.5, 12.0, 60.0, 1.048, 5.5, Some(f64::NAN)),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        ibu(1.5, 12.0, 60.0, 1.048, 0.0, None),
        Err(CalcError::InvalidArgument(_))
    ));
}

#[test]
fn malt_color_units() {
    assert_eq!(mcu(9.0, 3.5, 5.5).expect("mcu"), 5.727);
    assert!(matches!(mcu(9.0, 3.5, 0.0), Err(CalcError::InvalidArgument(_))));
}

#[test]
fn srm_from_mcu_contributions() {
    assert_eq!(srm(&[5.72]).expect("srm"), 4.9);
    assert_eq!(srm(&[5.72, 2.54]).expect("srm"), 6.4);
    assert_eq!(srm(&[]).expect("srm"), 0.0);
}

#[test]
fn srm_is_order_independent() {
    let a = srm(&[5.72, 2.54, 0.8]).expect("srm");
    let b = srm(&[0.8, 2.54, 5.72]).expect("srm");
    assert_eq!(srm(&[5.72, 2.54]), srm(&[2.54, 5.72]));
    assert_eq!(a, b);
}

#[test]
fn srm_rejects_any_invalid_element() {
    assert!(matches!(
        srm(&[5.72, f64::NAN, 2.54]),
        Err(CalcError::InvalidArgument(_))
    ));
}

#[test]
fn srm_lovibond_conversions() {
    assert_eq!(srm_to_lovibond(8.0).expect("lovibond"), 6.5);
    assert_eq!(srm_to_lovibond(30.0).expect("lovibond"), 22.7);
    assert_eq!(lovibond_to_srm(7.0).expect("srm"), 8.7);
    assert_eq!(lovibond_to_srm(23.0).expect("srm"), 30.4);
}

#[test]
fn utilization_and_color_reject_non_finite() {
    assert!(matches!(utilization(f64::NAN, 1.048), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(utilization(60.0, f64::INFINITY), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(srm_to_lovibond(f64::NAN), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(
        lovibond_to_srm(f64::NEG_INFINITY),
        Err(CalcError::InvalidArgument(_))
    ));
}
