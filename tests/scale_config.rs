//! 척도 변환과 설정 파일 저장/로드 회귀 테스트.
use brew_calc::boil::{EvapMode, ExtractKind};
use brew_calc::config::{self, Config};
use brew_calc::conversion::{convert, convert_scale, ConversionError};
use brew_calc::hops::HopForm;
use brew_calc::scale::{Scale, ScaleFamily};

#[test]
fn gravity_scales_route_through_sg() {
    assert_eq!(convert(1.088, "sg", "plato").expect("plato"), 21.1);
    assert_eq!(convert(18.0, "brix", "SG").expect("sg"), 1.074);
    assert_eq!(convert(88.0, "gp", "sg").expect("sg"), 1.088);
    assert_eq!(convert(18.0, "plato", "gp").expect("gp"), 74.0);
}

#[test]
fn color_scales_convert_directly() {
    assert_eq!(convert(8.0, "srm", "lovibond").expect("lovibond"), 6.5);
    assert_eq!(convert(7.0, "L", "srm").expect("srm"), 8.7);
}

#[test]
fn scale_families_do_not_mix() {
    assert_eq!(Scale::Plato.family(), ScaleFamily::Gravity);
    assert!(matches!(
        convert_scale(1.05, Scale::SpecificGravity, Scale::Srm),
        Err(ConversionError::Incompatible(Scale::SpecificGravity, Scale::Srm))
    ));
    assert!(matches!(
        convert(1.0, "kelvin", "sg"),
        Err(ConversionError::UnknownScale(s)) if s == "kelvin"
    ));
}

#[test]
fn identity_conversion_still_validates() {
    assert_eq!(convert_scale(1.05, Scale::SpecificGravity, Scale::SpecificGravity).expect("sg"), 1.05);
    assert!(matches!(
        convert_scale(f64::NAN, Scale::Srm, Scale::Srm),
        Err(ConversionError::Calc(_))
    ));
}

#[test]
fn config_is_created_then_round_trips() {
    let path = std::env::temp_dir().join(format!("brew_calc_cfg_{}.toml", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut cfg = config::load_from(&path).expect("create default");
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.defaults.shrink_pct, 4.0);

    cfg.defaults.evap_mode = EvapMode::Volume;
    cfg.defaults.extract = ExtractKind::Dme;
    cfg.defaults.hop_form = HopForm::Whole;
    cfg.save().expect("save");

    let reloaded: Config = config::load_from(&path).expect("reload");
    assert_eq!(reloaded, cfg);
    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let path = std::env::temp_dir().join(format!("brew_calc_partial_{}.toml", std::process::id()));
    std::fs::write(&path, "language = \"ko\"\n").expect("write");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.defaults.extract, ExtractKind::Lme);
    assert_eq!(cfg.defaults.hop_form, HopForm::Pellet);
    std::fs::remove_file(&path).expect("cleanup");
}
