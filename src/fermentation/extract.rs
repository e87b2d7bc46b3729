//! 원엑기스/겉보기엑기스/진엑기스 계산.
//!
//! 진엑기스는 플라토 기반식(`real_extract`)을 기본으로 쓴다. Hall(Zymurgy, 1995)의
//! 감쇠계수 연쇄식은 값이 다르므로 `real_extract_hall`로만 따로 제공하고 섞어 쓰지 않는다.

use crate::check::{ensure_finite, round_to, CalcError};
use crate::gravity::sg_to_plato;

fn hall_extract(gravity: f64) -> f64 {
    -668.962 + 1262.45 * gravity - 776.43 * gravity.powi(2) + 182.94 * gravity.powi(3)
}

/// OG로부터 원엑기스(OE, °P)를 구한다. 반올림하지 않는다.
pub fn original_extract(og: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og])?;
    Ok(hall_extract(og))
}

/// FG로부터 겉보기엑기스(AE, °P)를 구한다. 반올림하지 않는다.
pub fn apparent_extract(fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[fg])?;
    Ok(hall_extract(fg))
}

/// 원엑기스로부터 감쇠계수 q = 0.22 + 0.001·OE 를 구한다.
pub fn attenuation_coefficient(oe: f64) -> Result<f64, CalcError> {
    ensure_finite(&[oe])?;
    Ok(0.22 + 0.001 * oe)
}

/// 진엑기스(RE) = 0.1808·°P(OG) + 0.8192·°P(FG).
///
/// 다른 계산식의 입력으로 쓰이므로 반올림하지 않는다.
pub fn real_extract(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    Ok(0.1808 * sg_to_plato(og)? + 0.8192 * sg_to_plato(fg)?)
}

/// Hall 방식 진엑기스 RE = (q·OE + AE) / (1 + q) (소수 4자리).
pub fn real_extract_hall(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    let oe = original_extract(og)?;
    let ae = apparent_extract(fg)?;
    let q = attenuation_coefficient(oe)?;
    Ok(round_to((q * oe + ae) / (1.0 + q), 4))
}
