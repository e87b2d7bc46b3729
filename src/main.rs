use clap::Parser;
use tracing_subscriber::EnvFilter;

use brew_calc::{app, config, i18n};

/// 양조 레시피 계산기 (대화형 CLI)
#[derive(Debug, Parser)]
#[command(name = "brew_calc_cli", version, about)]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(short, long, default_value = "config.toml")]
    config: String,
    /// 언어팩(TOML) 디렉터리
    #[arg(long)]
    locales: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        tracing::error!(error = %err, "brew_calc_cli stopped");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_from(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cli.locales.as_deref());
    tracing::debug!(lang = %lang, config = %cfg.path().display(), "starting");
    app::run(&mut cfg, &tr)?;
    Ok(())
}
