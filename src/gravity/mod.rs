//! 비중(SG)·플라토·비중 포인트(GP) 변환과 비중 추정 모듈.

pub mod conversions;
pub mod estimate;

pub use conversions::*;
pub use estimate::*;
