use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::check::{ensure_finite, finite_result, round_to, CalcError};
use crate::gravity::{gp_to_sg, sg_to_gp};

/// 보정에 쓰는 맥아 엑기스 종류.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ExtractKind {
    /// 액상 맥아 엑기스, 36 ppg
    #[default]
    Lme,
    /// 건조 맥아 엑기스, 44 ppg
    Dme,
    /// 사용자 지정 파운드당 비중 포인트
    Custom(f64),
}

impl ExtractKind {
    /// 파운드당 비중 포인트(ppg)를 돌려준다.
    pub fn points_per_pound(&self) -> Result<f64, CalcError> {
        match *self {
            ExtractKind::Lme => Ok(36.0),
            ExtractKind::Dme => Ok(44.0),
            ExtractKind::Custom(ppg) => {
                ensure_finite(&[ppg])?;
                Ok(ppg)
            }
        }
    }
}

impl FromStr for ExtractKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "LME" => Ok(ExtractKind::Lme),
            "DME" => Ok(ExtractKind::Dme),
            other => match other.parse::<f64>() {
                Ok(ppg) if ppg.is_finite() => Ok(ExtractKind::Custom(ppg)),
                _ => Err(CalcError::InvalidArgument(
                    "extract kind must be LME, DME or a number",
                )),
            },
        }
    }
}

/// 물을 더해 희석한 뒤의 비중 (소수 3자리).
///
/// GP_new = GP × 부피 / (부피 + 추가 부피)
pub fn dilute(sg: f64, volume: f64, volume_added: f64) -> Result<f64, CalcError> {
    ensure_finite(&[sg, volume, volume_added])?;
    let points = finite_result(sg_to_gp(sg)? * volume / (volume + volume_added))?;
    Ok(round_to(gp_to_sg(points)?, 3))
}

/// 목표 비중까지 낮추는 데 필요한 물의 양 (소수 2자리).
///
/// 물 = 부피 × GP(현재) / GP(목표) - 부피, 전제: 현재 ≥ 목표
pub fn adjust_water(sg: f64, target_gravity: f64, volume: f64) -> Result<f64, CalcError> {
    ensure_finite(&[sg, target_gravity, volume])?;
    if sg < target_gravity {
        tracing::debug!(sg, target_gravity, "rejected water adjustment");
        return Err(CalcError::InvalidRange(
            "target gravity must not exceed current gravity",
        ));
    }
    let calc = finite_result(volume * sg_to_gp(sg)? / sg_to_gp(target_gravity)? - volume)?;
    Ok(round_to(calc, 2))
}

/// 목표 비중까지 올리는 데 필요한 엑기스 무게(lb) (소수 2자리).
///
/// lb = (GP(목표) - GP(현재)) × 부피 / ppg, 전제: 목표 ≥ 현재
pub fn adjust_extract(
    sg: f64,
    target_gravity: f64,
    volume: f64,
    extract: ExtractKind,
) -> Result<f64, CalcError> {
    ensure_finite(&[sg, target_gravity, volume])?;
    if target_gravity < sg {
        tracing::debug!(sg, target_gravity, "rejected extract adjustment");
        return Err(CalcError::InvalidRange(
            "target gravity must not be less than current gravity",
        ));
    }
    let ppg = extract.points_per_pound()?;
    let calc = finite_result((sg_to_gp(target_gravity)? - sg_to_gp(sg)?) * volume / ppg)?;
    Ok(round_to(calc, 2))
}
