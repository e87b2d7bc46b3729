use crate::check::{ensure_finite, finite_result, round_to, CalcError};

/// 맥아 색 단위(MCU) = 무게(lb) × Lovibond / 부피(gal) (소수 3자리)
pub fn mcu(weight: f64, lovibond: f64, volume: f64) -> Result<f64, CalcError> {
    ensure_finite(&[weight, lovibond, volume])?;
    let calc = finite_result(weight * lovibond / volume)?;
    Ok(round_to(calc, 3))
}

/// Morey 식으로 맥주 색(SRM)을 구한다. SRM = 1.4922 × (ΣMCU)^0.6859 (소수 1자리)
///
/// 곡물마다 구한 MCU를 순서 없이 넘긴다. 하나라도 유효하지 않으면 전체가 실패한다.
pub fn srm(mcu_values: &[f64]) -> Result<f64, CalcError> {
    ensure_finite(mcu_values)?;
    let total: f64 = mcu_values.iter().sum();
    let calc = finite_result(1.4922 * total.powf(0.6859))?;
    Ok(round_to(calc, 1))
}

/// SRM → Lovibond = (SRM + 0.76) / 1.3546 (소수 1자리)
pub fn srm_to_lovibond(srm: f64) -> Result<f64, CalcError> {
    ensure_finite(&[srm])?;
    Ok(round_to((srm + 0.76) / 1.3546, 1))
}

/// Lovibond → SRM = 1.3546 × Lovibond - 0.76 (소수 1자리)
pub fn lovibond_to_srm(lovibond: f64) -> Result<f64, CalcError> {
    ensure_finite(&[lovibond])?;
    Ok(round_to(1.3546 * lovibond - 0.76, 1))
}
