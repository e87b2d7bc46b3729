use std::io::{self, Write};

use crate::app::AppError;
use crate::boil::{self, BoilInput, EvapMode, ExtractKind};
use crate::color;
use crate::config::Config;
use crate::conversion;
use crate::fermentation;
use crate::gravity;
use crate::hops::{self, HopForm};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ScaleConversion,
    Fermentation,
    Hops,
    Color,
    Adjustment,
    Boil,
    Estimate,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_SCALE,
        keys::MAIN_MENU_FERMENTATION,
        keys::MAIN_MENU_HOPS,
        keys::MAIN_MENU_COLOR,
        keys::MAIN_MENU_ADJUST,
        keys::MAIN_MENU_BOIL,
        keys::MAIN_MENU_ESTIMATE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ScaleConversion),
            "2" => return Ok(MenuChoice::Fermentation),
            "3" => return Ok(MenuChoice::Hops),
            "4" => return Ok(MenuChoice::Color),
            "5" => return Ok(MenuChoice::Adjustment),
            "6" => return Ok(MenuChoice::Boil),
            "7" => return Ok(MenuChoice::Estimate),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 척도 변환 메뉴를 처리한다.
pub fn handle_scale_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SCALE_HEADING));
    println!("{}", tr.t(keys::SCALE_NOTE));
    let value = read_f64(tr, tr.t(keys::SCALE_PROMPT_VALUE))?;
    let from = read_line(tr.t(keys::SCALE_PROMPT_FROM))?;
    let to = read_line(tr.t(keys::SCALE_PROMPT_TO))?;
    let result = conversion::convert(value, from.trim(), to.trim())?;
    println!("{} {result} {}", tr.t(keys::SCALE_RESULT), to.trim());
    Ok(())
}

/// OG/FG로 알코올, 엑기스, 발효도, 열량을 한 번에 보여준다.
pub fn handle_fermentation(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FERMENTATION_HEADING));
    let og = read_f64(tr, tr.t(keys::PROMPT_OG))?;
    let fg = read_f64(tr, tr.t(keys::PROMPT_FG))?;
    let abv = fermentation::abv(og, fg)?;
    let abw = fermentation::abw(og, fg)?;
    println!("{} {abv:.2} / {abw:.2}", tr.t(keys::RESULT_ABV_ABW));
    let re = fermentation::real_extract(og, fg)?;
    println!("{} {re:.4}", tr.t(keys::RESULT_EXTRACT));
    println!(
        "{} {:.1} / {:.1}",
        tr.t(keys::RESULT_ATTENUATION),
        fermentation::apparent_attenuation(og, fg)?,
        fermentation::real_attenuation(og, fg)?
    );
    println!(
        "{} {:.2} + {:.2} = {:.2}",
        tr.t(keys::RESULT_CALORIES),
        fermentation::calories_alcohol(og, fg)?,
        fermentation::calories_carbs(og, fg)?,
        fermentation::calories_total(og, fg)?
    );
    Ok(())
}

/// 여러 번의 홉 투입을 받아 IBU 합계를 계산한다.
pub fn handle_hops(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HOPS_HEADING));
    let volume = read_f64(tr, tr.t(keys::PROMPT_POST_BOIL_VOLUME))?;
    let adjust = cfg.defaults.hop_form.utilization_adjust_pct();
    let mut total = 0.0;
    loop {
        let weight = read_f64(tr, tr.t(keys::PROMPT_HOP_WEIGHT))?;
        let alpha = read_f64(tr, tr.t(keys::PROMPT_ALPHA_ACID))?;
        let minutes = read_f64(tr, tr.t(keys::PROMPT_BOIL_TIME_LEFT))?;
        let gravity = read_f64(tr, tr.t(keys::PROMPT_BOIL_GRAVITY))?;
        let ibu = hops::ibu(weight, alpha, minutes, gravity, volume, adjust)?;
        println!("{} {ibu:.1}", tr.t(keys::RESULT_HOP_ADDITION));
        total += ibu;
        if !read_yes(tr.t(keys::PROMPT_ADD_MORE))? {
            break;
        }
    }
    println!("{} {total:.1}", tr.t(keys::RESULT_TOTAL_IBU));
    Ok(())
}

/// 곡물별 MCU를 모아 SRM을 계산한다.
pub fn handle_color(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COLOR_HEADING));
    let volume = read_f64(tr, tr.t(keys::PROMPT_BATCH_VOLUME))?;
    let mut mcus = Vec::new();
    loop {
        let weight = read_f64(tr, tr.t(keys::PROMPT_GRAIN_WEIGHT))?;
        let lovibond = read_f64(tr, tr.t(keys::PROMPT_GRAIN_LOVIBOND))?;
        let mcu = color::mcu(weight, lovibond, volume)?;
        println!("{} {mcu:.3}", tr.t(keys::RESULT_MCU));
        mcus.push(mcu);
        if !read_yes(tr.t(keys::PROMPT_ADD_MORE))? {
            break;
        }
    }
    let srm = color::srm(&mcus)?;
    let lovibond = color::srm_to_lovibond(srm)?;
    println!("{} {srm:.1} / {lovibond:.1}", tr.t(keys::RESULT_SRM));
    Ok(())
}

/// 희석/물/엑기스 보정 메뉴를 처리한다.
pub fn handle_adjustment(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ADJUST_HEADING));
    println!("{}", tr.t(keys::ADJUST_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let sg = read_f64(tr, tr.t(keys::PROMPT_CURRENT_GRAVITY))?;
            let volume = read_f64(tr, tr.t(keys::PROMPT_CURRENT_VOLUME))?;
            let added = read_f64(tr, tr.t(keys::PROMPT_ADDED_VOLUME))?;
            let diluted = boil::dilute(sg, volume, added)?;
            println!("{} {diluted:.3}", tr.t(keys::RESULT_DILUTED_GRAVITY));
        }
        "2" => {
            let sg = read_f64(tr, tr.t(keys::PROMPT_CURRENT_GRAVITY))?;
            let target = read_f64(tr, tr.t(keys::PROMPT_TARGET_GRAVITY))?;
            let volume = read_f64(tr, tr.t(keys::PROMPT_CURRENT_VOLUME))?;
            let water = boil::adjust_water(sg, target, volume)?;
            println!("{} {water:.2}", tr.t(keys::RESULT_WATER_NEEDED));
        }
        "3" => {
            let sg = read_f64(tr, tr.t(keys::PROMPT_CURRENT_GRAVITY))?;
            let target = read_f64(tr, tr.t(keys::PROMPT_TARGET_GRAVITY))?;
            let volume = read_f64(tr, tr.t(keys::PROMPT_CURRENT_VOLUME))?;
            let raw = read_line(tr.t(keys::PROMPT_EXTRACT_KIND))?;
            let extract = if raw.trim().is_empty() {
                cfg.defaults.extract
            } else {
                raw.parse::<ExtractKind>()?
            };
            let pounds = boil::adjust_extract(sg, target, volume, extract)?;
            println!("{} {pounds:.2}", tr.t(keys::RESULT_EXTRACT_NEEDED));
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 끓임 전 부피/비중으로 끓인 후 부피와 비중을 계산한다.
pub fn handle_boil(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BOIL_HEADING));
    let input = BoilInput {
        pre_boil_volume: read_f64(tr, tr.t(keys::PROMPT_PRE_BOIL_VOLUME))?,
        pre_boil_gravity: read_f64(tr, tr.t(keys::PROMPT_PRE_BOIL_GRAVITY))?,
        evap_rate: read_f64(tr, tr.t(keys::PROMPT_EVAP_RATE))?,
        evap_mode: cfg.defaults.evap_mode,
        boil_minutes: read_f64(tr, tr.t(keys::PROMPT_BOIL_MINUTES))?,
        shrink_pct: Some(
            read_optional_f64(tr, tr.t(keys::PROMPT_SHRINK_PCT))?
                .unwrap_or(cfg.defaults.shrink_pct),
        ),
    };
    let result = boil::boil_off(input)?;
    println!(
        "{} {:.2} / {:.2} / {:.2}",
        tr.t(keys::RESULT_BOIL_LOSS),
        result.loss_per_hour,
        result.boil_loss,
        result.shrink_loss
    );
    println!(
        "{} {:.2} / {:.3}",
        tr.t(keys::RESULT_POST_BOIL),
        result.post_boil_volume,
        result.post_boil_gravity
    );
    Ok(())
}

/// OG와 FG를 차례로 추정한다.
pub fn handle_estimate(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ESTIMATE_HEADING));
    let points = read_f64(tr, tr.t(keys::PROMPT_TOTAL_POINTS))?;
    let efficiency = read_f64(tr, tr.t(keys::PROMPT_EFFICIENCY))?;
    let volume = read_f64(tr, tr.t(keys::PROMPT_FINAL_VOLUME))?;
    let og = gravity::estimate_original_gravity(points, efficiency, volume)?;
    println!("{} {og:.3}", tr.t(keys::RESULT_ESTIMATED_OG));

    let grain = read_f64(tr, tr.t(keys::PROMPT_GRAIN_POINTS))?;
    let sugar = read_f64(tr, tr.t(keys::PROMPT_SUGAR_POINTS))?;
    let attenuation = read_f64(tr, tr.t(keys::PROMPT_YEAST_ATTENUATION))?;
    let mash_temp = read_optional_f64(tr, tr.t(keys::PROMPT_MASH_TEMP))?;
    let fg = gravity::estimate_final_gravity(grain, sugar, attenuation, mash_temp)?;
    println!("{} {fg:.3}", tr.t(keys::RESULT_ESTIMATED_FG));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT), cfg.defaults);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let defaults = &mut cfg.defaults;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            defaults.evap_mode = match defaults.evap_mode {
                EvapMode::Percentage => EvapMode::Volume,
                EvapMode::Volume => EvapMode::Percentage,
            };
        }
        "2" => {
            let raw = read_line(tr.t(keys::PROMPT_EXTRACT_KIND))?;
            defaults.extract = raw.parse::<ExtractKind>()?;
        }
        "3" => {
            defaults.hop_form = match defaults.hop_form {
                HopForm::Pellet => HopForm::Whole,
                HopForm::Whole => HopForm::Pellet,
            };
        }
        "4" => {
            defaults.shrink_pct = read_f64(tr, tr.t(keys::PROMPT_SHRINK_PCT))?;
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            return Ok(());
        }
    }
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.defaults);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if read == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 `None`을 돌려준다.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    Ok(matches!(s.trim(), "y" | "Y" | "yes"))
}
