//! 알코올/엑기스/발효도/열량 회귀 테스트.
use brew_calc::{
    abv, abw, apparent_attenuation, apparent_extract, attenuation_coefficient, calories_alcohol,
    calories_carbs, calories_total, original_extract, real_attenuation, real_extract,
    real_extract_hall, CalcError,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn abv_reference_values() {
    assert_eq!(abv(1.089, 1.012).expect("abv"), 10.11);
    assert_eq!(abv(1.089, 1.019).expect("abv"), 9.13);
}

#[test]
fn abv_requires_og_above_fg() {
    assert_eq!(
        abv(1.012, 1.089),
        Err(CalcError::InvalidRange("original gravity must exceed final gravity"))
    );
    assert!(matches!(abv(1.050, 1.050), Err(CalcError::InvalidRange(_))));
}

#[test]
fn numeric_check_runs_before_range_check() {
    // NaN은 범위 비교도 실패하지만 InvalidArgument로 보고되어야 한다.
    assert!(matches!(abv(f64::NAN, 1.089), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(abw(1.0, f64::INFINITY), Err(CalcError::InvalidArgument(_))));
}

#[test]
fn abw_reference_values() {
    assert_eq!(abw(1.089, 1.012).expect("abw"), 8.02);
    assert_eq!(abw(1.089, 1.019).expect("abw"), 7.24);
    assert!(matches!(abw(1.012, 1.089), Err(CalcError::InvalidRange(_))));
}

#[test]
fn alcohol_is_non_negative_over_brewing_range() {
    for og_pts in 1..=150 {
        for fg_pts in 0..og_pts {
            let og = 1.0 + og_pts as f64 / 1000.0;
            let fg = 1.0 + fg_pts as f64 / 1000.0;
            assert!(abv(og, fg).expect("abv") >= 0.0, "abv({og}, {fg})");
            assert!(abw(og, fg).expect("abw") >= 0.0, "abw({og}, {fg})");
        }
    }
}

#[test]
fn real_extract_plato_formula() {
    assert_close("re", real_extract(1.088, 1.012).expect("re"), 6.3544, 1e-9);
}

#[test]
fn real_extract_hall_chain() {
    let oe = original_extract(1.088).expect("oe");
    let ae = apparent_extract(1.012).expect("ae");
    assert_close("oe", oe, 21.1001, 1e-4);
    assert_close("ae", ae, 3.0665, 1e-4);
    assert_close("q", attenuation_coefficient(oe).expect("q"), 0.2411, 1e-4);
    assert_eq!(real_extract_hall(1.088, 1.012).expect("re"), 6.5697);
}

#[test]
fn calories_reference_values() {
    assert_eq!(calories_alcohol(1.088, 1.012).expect("alcohol"), 210.61);
    assert_eq!(calories_carbs(1.088, 1.012).expect("carbs"), 91.04);
    assert_eq!(calories_total(1.088, 1.012).expect("total"), 301.65);
}

#[test]
fn attenuation_reference_values() {
    assert_eq!(apparent_attenuation(1.088, 1.012).expect("aa"), 85.3);
    assert_eq!(real_attenuation(1.088, 1.012).expect("ra"), 69.9);
}

#[test]
fn attenuation_rejects_zero_plato_og() {
    // SG 1.000은 °P 0이 되어 나눗셈이 발산한다.
    assert!(matches!(
        apparent_attenuation(1.0, 0.99),
        Err(CalcError::InvalidArgument(_))
    ));
    assert!(matches!(
        real_attenuation(f64::NAN, 1.012),
        Err(CalcError::InvalidArgument(_))
    ));
}

#[test]
fn calories_reject_non_finite() {
    assert!(matches!(calories_alcohol(f64::NAN, 1.012), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(calories_carbs(1.088, f64::INFINITY), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(
        calories_total(f64::NEG_INFINITY, 1.012),
        Err(CalcError::InvalidArgument(_))
    ));
}

#[test]
fn extract_chain_rejects_non_finite() {
    assert!(matches!(real_extract(1.088, f64::NAN), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(original_extract(f64::INFINITY), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(apparent_extract(f64::NAN), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(
        attenuation_coefficient(f64::NEG_INFINITY),
        Err(CalcError::InvalidArgument(_))
    ));
}
