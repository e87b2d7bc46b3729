use crate::check::CalcError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 척도 변환 오류
    Conversion(conversion::ConversionError),
    /// 계산식 입력 오류
    Calc(CalcError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "{e}"),
            AppError::Calc(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// 메뉴를 계속 진행해도 되는 입력 오류인지 여부.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Conversion(_) | AppError::Calc(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<CalcError> for AppError {
    fn from(value: CalcError) -> Self {
        AppError::Calc(value)
    }
}

fn dispatch(choice: MenuChoice, config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    match choice {
        MenuChoice::ScaleConversion => ui_cli::handle_scale_conversion(tr),
        MenuChoice::Fermentation => ui_cli::handle_fermentation(tr),
        MenuChoice::Hops => ui_cli::handle_hops(tr, config),
        MenuChoice::Color => ui_cli::handle_color(tr),
        MenuChoice::Adjustment => ui_cli::handle_adjustment(tr, config),
        MenuChoice::Boil => ui_cli::handle_boil(tr, config),
        MenuChoice::Estimate => ui_cli::handle_estimate(tr),
        MenuChoice::Settings => {
            ui_cli::handle_settings(tr, config)?;
            config.save()?;
            Ok(())
        }
        MenuChoice::Exit => Ok(()),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let choice = ui_cli::main_menu(tr)?;
        if choice == MenuChoice::Exit {
            config.save()?;
            println!("{}", tr.t(i18n::keys::APP_EXIT));
            break;
        }
        match dispatch(choice, config, tr) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                tracing::warn!(?choice, error = %err, "calculation rejected");
                println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
