use crate::check::{ensure_finite, round_to, CalcError};

/// ABV → ABW 환산 계수.
const ABW_FACTOR: f64 = 0.79336;

fn ensure_og_above_fg(og: f64, fg: f64) -> Result<(), CalcError> {
    if og > fg {
        Ok(())
    } else {
        tracing::debug!(og, fg, "rejected gravity pair");
        Err(CalcError::InvalidRange(
            "original gravity must exceed final gravity",
        ))
    }
}

/// 알코올 도수(ABV, %)를 계산한다.
///
/// ABV = (1.05 × (OG - FG) / FG / 0.79) × 100 (소수 2자리)
pub fn abv(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    ensure_og_above_fg(og, fg)?;
    let calc = 1.05 * (og - fg) / fg / 0.79 * 100.0;
    Ok(round_to(calc, 2))
}

/// 중량 기준 알코올(ABW, %) = ABV × 0.79336 (소수 2자리).
pub fn abw(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    // 단독 호출에서도 OG > FG를 직접 보장한다.
    ensure_og_above_fg(og, fg)?;
    Ok(round_to(abv(og, fg)? * ABW_FACTOR, 2))
}
