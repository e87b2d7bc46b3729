//! 발효 결과(알코올, 엑기스, 발효도, 열량) 계산 모듈 모음.

pub mod alcohol;
pub mod attenuation;
pub mod calories;
pub mod extract;

pub use alcohol::*;
pub use attenuation::*;
pub use calories::*;
pub use extract::*;
