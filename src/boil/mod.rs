//! 희석·보정과 끓임 중 부피/비중 변화 계산 모듈.
//! 모든 식은 비중 포인트 총량(GP × 부피)이 보존된다는 가정을 따른다.

pub mod adjustment;
pub mod volume;

pub use adjustment::*;
pub use volume::*;
