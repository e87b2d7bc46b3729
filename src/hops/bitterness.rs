use serde::{Deserialize, Serialize};

use crate::check::{ensure_finite, finite_result, round_to, CalcError};

/// Tinseth 식의 IBU 환산 상수(oz, gal 기준).
const IBU_CONVERSION: f64 = 74.89;

/// 홉 형태. 펠렛은 통홉보다 이용률이 약 10% 높다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HopForm {
    Whole,
    #[default]
    Pellet,
}

impl HopForm {
    /// `ibu`의 `utilization_adjust_pct`로 넘길 이용률 보정값(%).
    pub fn utilization_adjust_pct(&self) -> Option<f64> {
        match self {
            HopForm::Whole => None,
            HopForm::Pellet => Some(10.0),
        }
    }
}

/// 알파산 단위(AAU) = 무게(oz) × 알파산(%). 반올림하지 않는다.
pub fn aau(weight: f64, alpha_acid_pct: f64) -> Result<f64, CalcError> {
    ensure_finite(&[weight, alpha_acid_pct])?;
    Ok(weight * alpha_acid_pct)
}

/// Tinseth 홉 이용률.
///
/// - bigness factor = 1.65 × 0.000125^(SG - 1)
/// - boil time factor = (1 - e^(-0.04 × 분)) / 4.15
pub fn utilization(boil_minutes: f64, gravity: f64) -> Result<f64, CalcError> {
    ensure_finite(&[boil_minutes, gravity])?;
    let bigness = 1.65 * 0.000125f64.powf(gravity - 1.0);
    let time_factor = (1.0 - (-0.04 * boil_minutes).exp()) / 4.15;
    Ok(bigness * time_factor)
}

/// 한 번의 홉 투입이 만드는 IBU (소수 1자리).
///
/// IBU = AAU × 이용률 × (1 + 보정%/100) × 74.89 / 끓인 후 부피
pub fn ibu(
    weight: f64,
    alpha_acid_pct: f64,
    boil_minutes: f64,
    gravity: f64,
    post_boil_volume: f64,
    utilization_adjust_pct: Option<f64>,
) -> Result<f64, CalcError> {
    ensure_finite(&[weight, alpha_acid_pct, boil_minutes, gravity, post_boil_volume])?;
    let mut util = utilization(boil_minutes, gravity)?;
    if let Some(adjust) = utilization_adjust_pct {
        ensure_finite(&[adjust])?;
        util *= 1.0 + adjust / 100.0;
    }
    let calc = finite_result(aau(weight, alpha_acid_pct)? * util * IBU_CONVERSION / post_boil_volume)?;
    Ok(round_to(calc, 1))
}
