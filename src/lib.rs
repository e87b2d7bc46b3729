//! 양조 계산식(비중, 알코올, 쓴맛, 색, 부피 손실)을 라이브러리로 분리하여
//! CLI 외의 호출자도 같은 함수를 그대로 쓸 수 있게 한다.
//!
//! 모든 계산 함수는 순수 함수이며 `Result<f64, CalcError>`를 돌려준다.

pub mod app;
pub mod boil;
pub mod check;
pub mod color;
pub mod config;
pub mod conversion;
pub mod fermentation;
pub mod gravity;
pub mod hops;
pub mod i18n;
pub mod scale;
pub mod ui_cli;

pub use boil::{
    adjust_extract, adjust_water, boil_off, dilute, evap_loss_per_hour, post_boil_gravity,
    post_boil_volume, shrinkage, total_boil_loss, BoilInput, BoilResult, EvapMode, ExtractKind,
};
pub use check::CalcError;
pub use color::{lovibond_to_srm, mcu, srm, srm_to_lovibond};
pub use fermentation::{
    abv, abw, apparent_attenuation, apparent_extract, attenuation_coefficient, calories_alcohol,
    calories_carbs, calories_total, original_extract, real_attenuation, real_extract,
    real_extract_hall,
};
pub use gravity::{
    estimate_final_gp, estimate_final_gravity, estimate_original_gravity, gp_to_sg, plato_to_sg,
    sg_to_gp, sg_to_plato,
};
pub use hops::{aau, ibu, utilization, HopForm};
