//! 12oz(355ml) 1잔 기준 열량 추정.

use crate::check::{ensure_finite, finite_result, round_to, CalcError};

/// 알코올에서 오는 열량(kcal).
///
/// 1881.22 × FG × ((OG - FG) / (1.775 - OG)) (소수 2자리)
pub fn calories_alcohol(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    let calc = finite_result(1881.22 * fg * ((og - fg) / (1.775 - og)))?;
    Ok(round_to(calc, 2))
}

/// 탄수화물에서 오는 열량(kcal).
///
/// 3550.0 × FG × (0.1808·OG + 0.8192·FG - 1.0004) (소수 2자리)
pub fn calories_carbs(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    let calc = 3550.0 * fg * (0.1808 * og + (0.8192 * fg - 1.0004));
    Ok(round_to(calc, 2))
}

/// 총 열량 = 알코올 열량 + 탄수화물 열량 (소수 2자리).
pub fn calories_total(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    let total = calories_alcohol(og, fg)? + calories_carbs(og, fg)?;
    Ok(round_to(total, 2))
}
