use crate::check::{ensure_finite, finite_result, round_to, CalcError};
use crate::fermentation::extract::real_extract;
use crate::gravity::sg_to_plato;

/// 겉보기 발효도(%) = 100 × (1 - °P(FG) / °P(OG)) (소수 1자리)
pub fn apparent_attenuation(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    let calc = finite_result(100.0 * (1.0 - sg_to_plato(fg)? / sg_to_plato(og)?))?;
    Ok(round_to(calc, 1))
}

/// 실제 발효도(%) = 100 × (1 - RE / °P(OG)) (소수 1자리)
pub fn real_attenuation(og: f64, fg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[og, fg])?;
    let calc = finite_result(100.0 * (1.0 - real_extract(og, fg)? / sg_to_plato(og)?))?;
    Ok(round_to(calc, 1))
}
