use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::check::{ensure_finite, finite_result, round_to, CalcError};
use crate::gravity::{gp_to_sg, sg_to_gp};

/// 냉각 수축률 기본값(%).
pub const DEFAULT_SHRINK_PCT: f64 = 4.0;

/// 증발률 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvapMode {
    /// 시간당 끓임 전 부피 대비 백분율
    #[default]
    Percentage,
    /// 시간당 증발 부피 그대로
    Volume,
}

impl FromStr for EvapMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(EvapMode::Percentage),
            "volume" => Ok(EvapMode::Volume),
            _ => Err(CalcError::InvalidArgument(
                "evaporation mode must be percentage or volume",
            )),
        }
    }
}

/// 시간당 증발 손실 부피 (소수 2자리).
pub fn evap_loss_per_hour(volume: f64, rate: f64, mode: EvapMode) -> Result<f64, CalcError> {
    ensure_finite(&[volume, rate])?;
    let loss = match mode {
        EvapMode::Percentage => volume * (rate / 100.0),
        EvapMode::Volume => rate,
    };
    Ok(round_to(loss, 2))
}

/// 끓이는 동안의 총 증발 손실 = 시간당 손실 × (분 / 60) (소수 2자리)
pub fn total_boil_loss(loss_per_hour: f64, boil_minutes: f64) -> Result<f64, CalcError> {
    ensure_finite(&[loss_per_hour, boil_minutes])?;
    Ok(round_to(loss_per_hour * (boil_minutes / 60.0), 2))
}

/// 냉각 수축 손실 = (끓임 전 부피 - 증발 손실) × 수축률 / 100 (소수 2자리)
///
/// `shrink_pct`가 `None`이면 [`DEFAULT_SHRINK_PCT`]를 쓴다.
pub fn shrinkage(
    pre_boil_volume: f64,
    boil_loss: f64,
    shrink_pct: Option<f64>,
) -> Result<f64, CalcError> {
    let pct = shrink_pct.unwrap_or(DEFAULT_SHRINK_PCT);
    ensure_finite(&[pre_boil_volume, boil_loss, pct])?;
    Ok(round_to((pre_boil_volume - boil_loss) * (pct / 100.0), 2))
}

/// 끓인 후 부피 = 시작 부피 - (증발 손실 + 수축 손실) (소수 2자리)
pub fn post_boil_volume(
    start_volume: f64,
    boil_loss: f64,
    shrink_loss: f64,
) -> Result<f64, CalcError> {
    ensure_finite(&[start_volume, boil_loss, shrink_loss])?;
    Ok(round_to(start_volume - (boil_loss + shrink_loss), 2))
}

/// 부피 변화 후 비중 = gp_to_sg(시작 부피 × GP / 최종 부피) (소수 3자리)
pub fn post_boil_gravity(start_volume: f64, sg: f64, final_volume: f64) -> Result<f64, CalcError> {
    ensure_finite(&[start_volume, sg, final_volume])?;
    let points = finite_result(start_volume * sg_to_gp(sg)? / final_volume)?;
    Ok(round_to(gp_to_sg(points)?, 3))
}

/// 한 번의 끓임 전체를 계산하기 위한 입력.
#[derive(Debug, Clone)]
pub struct BoilInput {
    /// 끓임 전 부피
    pub pre_boil_volume: f64,
    /// 끓임 전 비중
    pub pre_boil_gravity: f64,
    /// 증발률 (mode에 따라 % 또는 부피/h)
    pub evap_rate: f64,
    /// 증발률 입력 방식
    pub evap_mode: EvapMode,
    /// 끓이는 시간(분)
    pub boil_minutes: f64,
    /// 냉각 수축률(%). `None`이면 4%.
    pub shrink_pct: Option<f64>,
}

/// 끓임 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct BoilResult {
    pub loss_per_hour: f64,
    pub boil_loss: f64,
    pub shrink_loss: f64,
    pub post_boil_volume: f64,
    pub post_boil_gravity: f64,
}

/// 증발 → 수축 → 최종 부피 → 최종 비중을 차례로 계산한다.
pub fn boil_off(input: BoilInput) -> Result<BoilResult, CalcError> {
    let loss_per_hour = evap_loss_per_hour(input.pre_boil_volume, input.evap_rate, input.evap_mode)?;
    let boil_loss = total_boil_loss(loss_per_hour, input.boil_minutes)?;
    let shrink_loss = shrinkage(input.pre_boil_volume, boil_loss, input.shrink_pct)?;
    let final_volume = post_boil_volume(input.pre_boil_volume, boil_loss, shrink_loss)?;
    let gravity = post_boil_gravity(input.pre_boil_volume, input.pre_boil_gravity, final_volume)?;
    Ok(BoilResult {
        loss_per_hour,
        boil_loss,
        shrink_loss,
        post_boil_volume: final_volume,
        post_boil_gravity: gravity,
    })
}
