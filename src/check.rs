//! 모든 계산식이 공유하는 입력 검증·반올림 규칙.

/// 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// 숫자가 아니거나(NaN) 무한대인 인자, 인식할 수 없는 선택값
    InvalidArgument(&'static str),
    /// 숫자는 유효하지만 비중 대소 관계 등 전제 조건을 위반
    InvalidRange(&'static str),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            CalcError::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
        }
    }
}

impl std::error::Error for CalcError {}

/// 모든 값이 유한한 실수인지 확인한다.
pub fn ensure_finite(values: &[f64]) -> Result<(), CalcError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(CalcError::InvalidArgument("arguments must be finite numbers"))
    }
}

/// 0 나누기 등으로 결과가 발산하면 오류로 바꾼다.
pub fn finite_result(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidArgument("result is not a finite number"))
    }
}

/// 소수점 `places` 자리에서 반올림한다(0.5는 양의 무한대 쪽).
///
/// 곱셈 대신 십진 표기의 지수를 옮기므로 `1.005`처럼 적힌 값은 `1.01`이 된다.
pub fn round_to(value: f64, places: i32) -> f64 {
    let shifted = shift_exponent(value, places);
    let floor = shifted.floor();
    let rounded = if shifted - floor >= 0.5 { floor + 1.0 } else { floor };
    shift_exponent(rounded, -places)
}

/// `value × 10^exp`를 문자열 지수 표기로 계산한다.
fn shift_exponent(value: f64, exp: i32) -> f64 {
    format!("{value}e{exp}")
        .parse()
        .unwrap_or(value * 10f64.powi(exp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_and_infinity() {
        assert!(ensure_finite(&[1.0, 2.0]).is_ok());
        assert_eq!(
            ensure_finite(&[1.0, f64::NAN]),
            Err(CalcError::InvalidArgument("arguments must be finite numbers"))
        );
        assert!(ensure_finite(&[f64::NEG_INFINITY]).is_err());
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_to(13.5, 0), 14.0);
        assert_eq!(round_to(-2.25, 1), -2.2);
        assert_eq!(round_to(5.72727, 3), 5.727);
    }

    #[test]
    fn written_decimal_ties_round_up() {
        assert_eq!(round_to(1.005, 2), 1.01);
        assert_eq!(round_to(1.0125, 3), 1.013);
        assert_eq!(round_to(1.0500000000000003, 2), 1.05);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 1), f64::INFINITY);
    }

    #[test]
    fn divergent_result_is_invalid_argument() {
        assert!(matches!(
            finite_result(1.0 / 0.0),
            Err(CalcError::InvalidArgument(_))
        ));
    }
}
