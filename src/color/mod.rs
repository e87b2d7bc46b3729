//! 맥아 색도(MCU, SRM, Lovibond) 계산 모듈.

pub mod srm;

pub use srm::*;
