use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SCALE: &str = "main_menu.scale";
    pub const MAIN_MENU_FERMENTATION: &str = "main_menu.fermentation";
    pub const MAIN_MENU_HOPS: &str = "main_menu.hops";
    pub const MAIN_MENU_COLOR: &str = "main_menu.color";
    pub const MAIN_MENU_ADJUST: &str = "main_menu.adjust";
    pub const MAIN_MENU_BOIL: &str = "main_menu.boil";
    pub const MAIN_MENU_ESTIMATE: &str = "main_menu.estimate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SCALE_HEADING: &str = "scale.heading";
    pub const SCALE_NOTE: &str = "scale.note";
    pub const SCALE_PROMPT_VALUE: &str = "scale.prompt_value";
    pub const SCALE_PROMPT_FROM: &str = "scale.prompt_from";
    pub const SCALE_PROMPT_TO: &str = "scale.prompt_to";
    pub const SCALE_RESULT: &str = "scale.result";

    pub const FERMENTATION_HEADING: &str = "fermentation.heading";
    pub const PROMPT_OG: &str = "prompt.og";
    pub const PROMPT_FG: &str = "prompt.fg";
    pub const RESULT_ABV_ABW: &str = "result.abv_abw";
    pub const RESULT_EXTRACT: &str = "result.extract";
    pub const RESULT_ATTENUATION: &str = "result.attenuation";
    pub const RESULT_CALORIES: &str = "result.calories";

    pub const HOPS_HEADING: &str = "hops.heading";
    pub const PROMPT_HOP_WEIGHT: &str = "prompt.hop_weight";
    pub const PROMPT_ALPHA_ACID: &str = "prompt.alpha_acid";
    pub const PROMPT_BOIL_TIME_LEFT: &str = "prompt.boil_time_left";
    pub const PROMPT_BOIL_GRAVITY: &str = "prompt.boil_gravity";
    pub const PROMPT_POST_BOIL_VOLUME: &str = "prompt.post_boil_volume";
    pub const PROMPT_ADD_MORE: &str = "prompt.add_more";
    pub const RESULT_HOP_ADDITION: &str = "result.hop_addition";
    pub const RESULT_TOTAL_IBU: &str = "result.total_ibu";

    pub const COLOR_HEADING: &str = "color.heading";
    pub const PROMPT_GRAIN_WEIGHT: &str = "prompt.grain_weight";
    pub const PROMPT_GRAIN_LOVIBOND: &str = "prompt.grain_lovibond";
    pub const PROMPT_BATCH_VOLUME: &str = "prompt.batch_volume";
    pub const RESULT_MCU: &str = "result.mcu";
    pub const RESULT_SRM: &str = "result.srm";

    pub const ADJUST_HEADING: &str = "adjust.heading";
    pub const ADJUST_OPTIONS: &str = "adjust.options";
    pub const PROMPT_CURRENT_GRAVITY: &str = "prompt.current_gravity";
    pub const PROMPT_TARGET_GRAVITY: &str = "prompt.target_gravity";
    pub const PROMPT_CURRENT_VOLUME: &str = "prompt.current_volume";
    pub const PROMPT_ADDED_VOLUME: &str = "prompt.added_volume";
    pub const PROMPT_EXTRACT_KIND: &str = "prompt.extract_kind";
    pub const RESULT_DILUTED_GRAVITY: &str = "result.diluted_gravity";
    pub const RESULT_WATER_NEEDED: &str = "result.water_needed";
    pub const RESULT_EXTRACT_NEEDED: &str = "result.extract_needed";

    pub const BOIL_HEADING: &str = "boil.heading";
    pub const PROMPT_PRE_BOIL_VOLUME: &str = "prompt.pre_boil_volume";
    pub const PROMPT_PRE_BOIL_GRAVITY: &str = "prompt.pre_boil_gravity";
    pub const PROMPT_EVAP_RATE: &str = "prompt.evap_rate";
    pub const PROMPT_BOIL_MINUTES: &str = "prompt.boil_minutes";
    pub const PROMPT_SHRINK_PCT: &str = "prompt.shrink_pct";
    pub const RESULT_BOIL_LOSS: &str = "result.boil_loss";
    pub const RESULT_POST_BOIL: &str = "result.post_boil";

    pub const ESTIMATE_HEADING: &str = "estimate.heading";
    pub const PROMPT_TOTAL_POINTS: &str = "prompt.total_points";
    pub const PROMPT_EFFICIENCY: &str = "prompt.efficiency";
    pub const PROMPT_FINAL_VOLUME: &str = "prompt.final_volume";
    pub const PROMPT_GRAIN_POINTS: &str = "prompt.grain_points";
    pub const PROMPT_SUGAR_POINTS: &str = "prompt.sugar_points";
    pub const PROMPT_YEAST_ATTENUATION: &str = "prompt.yeast_attenuation";
    pub const PROMPT_MASH_TEMP: &str = "prompt.mash_temp";
    pub const RESULT_ESTIMATED_OG: &str = "result.estimated_og";
    pub const RESULT_ESTIMATED_FG: &str = "result.estimated_fg";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "loaded locale override pack");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 언어 → 영어 순으로 찾고, 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)).unwrap_or(key),
            Language::En => en(key).unwrap_or(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Brew Calculator ===",
        MAIN_MENU_SCALE => "1) 척도 변환 (SG/GP/°P, SRM/°L)",
        MAIN_MENU_FERMENTATION => "2) 알코올·발효도·열량",
        MAIN_MENU_HOPS => "3) 홉 쓴맛 (IBU)",
        MAIN_MENU_COLOR => "4) 맥주 색 (SRM)",
        MAIN_MENU_ADJUST => "5) 비중 보정 (희석/물/엑기스)",
        MAIN_MENU_BOIL => "6) 끓임 부피·비중",
        MAIN_MENU_ESTIMATE => "7) OG/FG 추정",
        MAIN_MENU_SETTINGS => "8) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_SELECTION => "잘못된 선택입니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SCALE_HEADING => "\n-- 척도 변환 --",
        SCALE_NOTE => "척도: sg, gp, plato(brix), srm, lovibond",
        SCALE_PROMPT_VALUE => "값 입력: ",
        SCALE_PROMPT_FROM => "입력 척도: ",
        SCALE_PROMPT_TO => "변환 척도: ",
        SCALE_RESULT => "변환 결과:",
        FERMENTATION_HEADING => "\n-- 알코올·발효도·열량 --",
        PROMPT_OG => "초기 비중(OG): ",
        PROMPT_FG => "최종 비중(FG): ",
        RESULT_ABV_ABW => "ABV / ABW (%):",
        RESULT_EXTRACT => "진엑기스 (°P):",
        RESULT_ATTENUATION => "겉보기 / 실제 발효도 (%):",
        RESULT_CALORIES => "열량 12oz (알코올 + 탄수화물 = 합계 kcal):",
        HOPS_HEADING => "\n-- 홉 쓴맛 (Tinseth) --",
        PROMPT_HOP_WEIGHT => "홉 무게 [oz]: ",
        PROMPT_ALPHA_ACID => "알파산 [%]: ",
        PROMPT_BOIL_TIME_LEFT => "남은 끓임 시간 [분]: ",
        PROMPT_BOIL_GRAVITY => "끓임 중 비중(SG): ",
        PROMPT_POST_BOIL_VOLUME => "끓인 후 부피 [gal]: ",
        PROMPT_ADD_MORE => "추가 입력? (y/N): ",
        RESULT_HOP_ADDITION => "이번 투입 IBU:",
        RESULT_TOTAL_IBU => "총 IBU:",
        COLOR_HEADING => "\n-- 맥주 색 (Morey) --",
        PROMPT_GRAIN_WEIGHT => "곡물 무게 [lb]: ",
        PROMPT_GRAIN_LOVIBOND => "곡물 색 [°L]: ",
        PROMPT_BATCH_VOLUME => "배치 부피 [gal]: ",
        RESULT_MCU => "MCU:",
        RESULT_SRM => "SRM / °L:",
        ADJUST_HEADING => "\n-- 비중 보정 --",
        ADJUST_OPTIONS => "1) 물로 희석한 비중  2) 목표 비중까지 필요한 물  3) 목표 비중까지 필요한 엑기스",
        PROMPT_CURRENT_GRAVITY => "현재 비중(SG): ",
        PROMPT_TARGET_GRAVITY => "목표 비중(SG): ",
        PROMPT_CURRENT_VOLUME => "현재 부피 [gal]: ",
        PROMPT_ADDED_VOLUME => "추가할 물 [gal]: ",
        PROMPT_EXTRACT_KIND => "엑기스 (LME/DME/ppg 숫자, 엔터=설정값): ",
        RESULT_DILUTED_GRAVITY => "희석 후 비중:",
        RESULT_WATER_NEEDED => "필요한 물 [gal]:",
        RESULT_EXTRACT_NEEDED => "필요한 엑기스 [lb]:",
        BOIL_HEADING => "\n-- 끓임 부피·비중 --",
        PROMPT_PRE_BOIL_VOLUME => "끓임 전 부피 [gal]: ",
        PROMPT_PRE_BOIL_GRAVITY => "끓임 전 비중(SG): ",
        PROMPT_EVAP_RATE => "증발률 (설정 방식 기준, %/h 또는 gal/h): ",
        PROMPT_BOIL_MINUTES => "끓임 시간 [분]: ",
        PROMPT_SHRINK_PCT => "냉각 수축률 [%] (엔터=설정값): ",
        RESULT_BOIL_LOSS => "증발 손실 (시간당 / 총) / 수축 손실 [gal]:",
        RESULT_POST_BOIL => "끓인 후 부피 [gal] / 비중:",
        ESTIMATE_HEADING => "\n-- OG/FG 추정 --",
        PROMPT_TOTAL_POINTS => "발효성 재료 총 비중 포인트: ",
        PROMPT_EFFICIENCY => "효율 [%]: ",
        PROMPT_FINAL_VOLUME => "발효조 투입 부피 [gal]: ",
        PROMPT_GRAIN_POINTS => "곡물 비중 포인트(OG 기준): ",
        PROMPT_SUGAR_POINTS => "단당류 비중 포인트(OG 기준): ",
        PROMPT_YEAST_ATTENUATION => "효모 발효도 [%]: ",
        PROMPT_MASH_TEMP => "당화 온도 [°F] (엔터=생략): ",
        RESULT_ESTIMATED_OG => "예상 OG:",
        RESULT_ESTIMATED_FG => "예상 FG:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 증발률 방식 전환  2) 기본 엑기스 (LME/DME/ppg)  3) 홉 형태 전환  4) 수축률",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_SAVED => "설정이 변경되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Brew Calculator ===",
        MAIN_MENU_SCALE => "1) Scale conversion (SG/GP/°P, SRM/°L)",
        MAIN_MENU_FERMENTATION => "2) Alcohol, attenuation & calories",
        MAIN_MENU_HOPS => "3) Hop bitterness (IBU)",
        MAIN_MENU_COLOR => "4) Beer color (SRM)",
        MAIN_MENU_ADJUST => "5) Gravity adjustment (dilute/water/extract)",
        MAIN_MENU_BOIL => "6) Boil volume & gravity",
        MAIN_MENU_ESTIMATE => "7) Estimate OG/FG",
        MAIN_MENU_SETTINGS => "8) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        INVALID_SELECTION => "Invalid selection.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SCALE_HEADING => "\n-- Scale Conversion --",
        SCALE_NOTE => "Scales: sg, gp, plato(brix), srm, lovibond",
        SCALE_PROMPT_VALUE => "Value: ",
        SCALE_PROMPT_FROM => "From scale: ",
        SCALE_PROMPT_TO => "To scale: ",
        SCALE_RESULT => "Result:",
        FERMENTATION_HEADING => "\n-- Alcohol, Attenuation & Calories --",
        PROMPT_OG => "Original gravity (OG): ",
        PROMPT_FG => "Final gravity (FG): ",
        RESULT_ABV_ABW => "ABV / ABW (%):",
        RESULT_EXTRACT => "Real extract (°P):",
        RESULT_ATTENUATION => "Apparent / real attenuation (%):",
        RESULT_CALORIES => "Calories per 12oz (alcohol + carbs = total kcal):",
        HOPS_HEADING => "\n-- Hop Bitterness (Tinseth) --",
        PROMPT_HOP_WEIGHT => "Hop weight [oz]: ",
        PROMPT_ALPHA_ACID => "Alpha acids [%]: ",
        PROMPT_BOIL_TIME_LEFT => "Boil time remaining [min]: ",
        PROMPT_BOIL_GRAVITY => "Boil gravity (SG): ",
        PROMPT_POST_BOIL_VOLUME => "Post-boil volume [gal]: ",
        PROMPT_ADD_MORE => "Add another? (y/N): ",
        RESULT_HOP_ADDITION => "Addition IBU:",
        RESULT_TOTAL_IBU => "Total IBU:",
        COLOR_HEADING => "\n-- Beer Color (Morey) --",
        PROMPT_GRAIN_WEIGHT => "Grain weight [lb]: ",
        PROMPT_GRAIN_LOVIBOND => "Grain color [°L]: ",
        PROMPT_BATCH_VOLUME => "Batch volume [gal]: ",
        RESULT_MCU => "MCU:",
        RESULT_SRM => "SRM / °L:",
        ADJUST_HEADING => "\n-- Gravity Adjustment --",
        ADJUST_OPTIONS => "1) Gravity after dilution  2) Water to reach target  3) Extract to reach target",
        PROMPT_CURRENT_GRAVITY => "Current gravity (SG): ",
        PROMPT_TARGET_GRAVITY => "Target gravity (SG): ",
        PROMPT_CURRENT_VOLUME => "Current volume [gal]: ",
        PROMPT_ADDED_VOLUME => "Water to add [gal]: ",
        PROMPT_EXTRACT_KIND => "Extract (LME/DME/ppg number, enter = default): ",
        RESULT_DILUTED_GRAVITY => "Diluted gravity:",
        RESULT_WATER_NEEDED => "Water needed [gal]:",
        RESULT_EXTRACT_NEEDED => "Extract needed [lb]:",
        BOIL_HEADING => "\n-- Boil Volume & Gravity --",
        PROMPT_PRE_BOIL_VOLUME => "Pre-boil volume [gal]: ",
        PROMPT_PRE_BOIL_GRAVITY => "Pre-boil gravity (SG): ",
        PROMPT_EVAP_RATE => "Evaporation rate (per configured mode, %/h or gal/h): ",
        PROMPT_BOIL_MINUTES => "Boil time [min]: ",
        PROMPT_SHRINK_PCT => "Cooling shrinkage [%] (enter = default): ",
        RESULT_BOIL_LOSS => "Evaporation (per hour / total) / shrinkage [gal]:",
        RESULT_POST_BOIL => "Post-boil volume [gal] / gravity:",
        ESTIMATE_HEADING => "\n-- Estimate OG/FG --",
        PROMPT_TOTAL_POINTS => "Total fermentable gravity points: ",
        PROMPT_EFFICIENCY => "Efficiency [%]: ",
        PROMPT_FINAL_VOLUME => "Volume into fermenter [gal]: ",
        PROMPT_GRAIN_POINTS => "Grain gravity points (at OG): ",
        PROMPT_SUGAR_POINTS => "Simple sugar gravity points (at OG): ",
        PROMPT_YEAST_ATTENUATION => "Yeast attenuation [%]: ",
        PROMPT_MASH_TEMP => "Mash temperature [°F] (enter = skip): ",
        RESULT_ESTIMATED_OG => "Estimated OG:",
        RESULT_ESTIMATED_FG => "Estimated FG:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Toggle evaporation mode  2) Default extract (LME/DME/ppg)  3) Toggle hop form  4) Shrinkage",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_SAVED => "Settings changed:",
        _ => return None,
    })
}
