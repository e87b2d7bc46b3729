use crate::check::{ensure_finite, round_to, CalcError};

/// 비중(SG)을 플라토(°P)로 변환한다. 브릭스 환산에도 그대로 쓴다.
///
/// °P = -616.868 + 1111.14·SG - 630.272·SG² + 135.997·SG³ (소수 1자리)
pub fn sg_to_plato(sg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[sg])?;
    let plato = -616.868 + 1111.14 * sg - 630.272 * sg.powi(2) + 135.997 * sg.powi(3);
    Ok(round_to(plato, 1))
}

/// 플라토(°P)를 비중(SG)으로 변환한다.
///
/// SG = °P / (258.6 - (°P / 258.2)·227.1) + 1 (소수 3자리)
pub fn plato_to_sg(plato: f64) -> Result<f64, CalcError> {
    ensure_finite(&[plato])?;
    let sg = plato / (258.6 - (plato / 258.2) * 227.1) + 1.0;
    Ok(round_to(sg, 3))
}

/// 비중을 비중 포인트로 변환한다. (SG - 1) × 1000, 정수 반올림.
pub fn sg_to_gp(sg: f64) -> Result<f64, CalcError> {
    ensure_finite(&[sg])?;
    Ok(round_to((sg - 1.0) * 1000.0, 0))
}

/// 비중 포인트를 비중으로 변환한다. 반올림하지 않는다.
pub fn gp_to_sg(gp: f64) -> Result<f64, CalcError> {
    ensure_finite(&[gp])?;
    Ok(gp / 1000.0 + 1.0)
}
