//! 홉 쓴맛(AAU, 이용률, IBU) 계산 모듈.

pub mod bitterness;

pub use bitterness::*;
