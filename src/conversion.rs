use crate::check::{ensure_finite, round_to, CalcError};
use crate::color::{lovibond_to_srm, srm_to_lovibond};
use crate::gravity::{gp_to_sg, plato_to_sg, sg_to_gp, sg_to_plato};
use crate::scale::Scale;

/// 척도 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 척도 문자열
    UnknownScale(String),
    /// 당 농도와 색처럼 서로 다른 묶음 사이의 변환
    Incompatible(Scale, Scale),
    /// 변환식 자체의 입력 오류
    Calc(CalcError),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownScale(s) => write!(f, "unknown scale: {s}"),
            ConversionError::Incompatible(from, to) => {
                write!(f, "cannot convert {} to {}", from.symbol(), to.symbol())
            }
            ConversionError::Calc(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<CalcError> for ConversionError {
    fn from(value: CalcError) -> Self {
        ConversionError::Calc(value)
    }
}

fn to_sg(value: f64, from: Scale) -> Result<f64, ConversionError> {
    match from {
        Scale::SpecificGravity => Ok(value),
        Scale::GravityPoints => Ok(gp_to_sg(value)?),
        Scale::Plato => Ok(plato_to_sg(value)?),
        Scale::Srm | Scale::Lovibond => Err(ConversionError::Incompatible(from, Scale::SpecificGravity)),
    }
}

fn from_sg(sg: f64, to: Scale) -> Result<f64, ConversionError> {
    match to {
        Scale::SpecificGravity => Ok(round_to(sg, 3)),
        Scale::GravityPoints => Ok(sg_to_gp(sg)?),
        Scale::Plato => Ok(sg_to_plato(sg)?),
        Scale::Srm | Scale::Lovibond => Err(ConversionError::Incompatible(Scale::SpecificGravity, to)),
    }
}

/// 같은 묶음 안에서 척도를 변환한다. 당 농도는 SG, 색은 SRM을 거친다.
pub fn convert_scale(value: f64, from: Scale, to: Scale) -> Result<f64, ConversionError> {
    if from.family() != to.family() {
        return Err(ConversionError::Incompatible(from, to));
    }
    if from == to {
        ensure_finite(&[value])?;
        return Ok(value);
    }
    match (from, to) {
        (Scale::Srm, Scale::Lovibond) => Ok(srm_to_lovibond(value)?),
        (Scale::Lovibond, Scale::Srm) => Ok(lovibond_to_srm(value)?),
        _ => from_sg(to_sg(value, from)?, to),
    }
}

/// 문자열로 전달된 척도명을 enum으로 변환한 뒤 환산한다.
///
/// 예: `convert(1.088, "sg", "plato")`
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from: Scale = from.parse().map_err(ConversionError::UnknownScale)?;
    let to: Scale = to.parse().map_err(ConversionError::UnknownScale)?;
    convert_scale(value, from, to)
}
