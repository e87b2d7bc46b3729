//! 레시피 단계에서 OG/FG를 미리 추정한다.

use crate::check::{ensure_finite, finite_result, round_to, CalcError};
use crate::gravity::conversions::gp_to_sg;

/// 당화 온도 보정의 기준 온도(°F).
const MASH_TEMP_CENTER_F: f64 = 151.0;
/// 기준 온도에서 1°F 벗어날 때마다 더해지는 발효도(%).
const ATTENUATION_PER_DEGREE_F: f64 = -1.25;
/// 단당류(덱스트로스 등)에 적용하는 겉보기 발효도(%).
const SIMPLE_SUGAR_ATTENUATION: f64 = 122.0;

/// 발효성 재료의 총 비중 포인트와 효율로 OG를 추정한다.
///
/// OG = gp_to_sg(points × efficiency × 0.01 / final_volume) (소수 3자리)
pub fn estimate_original_gravity(
    gravity_points: f64,
    efficiency_pct: f64,
    final_volume: f64,
) -> Result<f64, CalcError> {
    ensure_finite(&[gravity_points, efficiency_pct, final_volume])?;
    let points = finite_result(gravity_points * efficiency_pct * 0.01 / final_volume)?;
    Ok(round_to(gp_to_sg(points)?, 3))
}

/// 효모 발효도로 발효 후 남는 비중 포인트를 구한다.
/// `rounded`가 true면 정수로 반올림한다.
pub fn estimate_final_gp(
    attenuation_pct: f64,
    gravity_points: f64,
    rounded: bool,
) -> Result<f64, CalcError> {
    ensure_finite(&[attenuation_pct, gravity_points])?;
    let final_gp = (1.0 - attenuation_pct * 0.01) * gravity_points;
    if rounded {
        Ok(round_to(final_gp, 0))
    } else {
        Ok(final_gp)
    }
}

/// 곡물/단당류 포인트를 나눠 FG를 추정한다. 당화 온도가 주어지면 발효도를 보정한다.
pub fn estimate_final_gravity(
    grain_points: f64,
    sugar_points: f64,
    attenuation_pct: f64,
    mash_temp_f: Option<f64>,
) -> Result<f64, CalcError> {
    ensure_finite(&[grain_points, sugar_points, attenuation_pct])?;
    let attenuation = match mash_temp_f {
        Some(temp) => {
            ensure_finite(&[temp])?;
            attenuation_pct + (temp - MASH_TEMP_CENTER_F) * ATTENUATION_PER_DEGREE_F
        }
        None => attenuation_pct,
    };

    let grain = estimate_final_gp(attenuation, grain_points, false)?;
    let sugar = estimate_final_gp(SIMPLE_SUGAR_ATTENUATION, sugar_points, false)?;
    Ok(round_to(gp_to_sg(grain + sugar)?, 3))
}
