use clap::Parser;
use prv_sizing_toolbox::{app, config, i18n};

/// CLI 실행 인자.
#[derive(Parser, Debug)]
#[command(name = "prv-sizing-toolbox", version, about = "Drilling mud 순환 계통용 PRV discharge sizing 계산기")]
struct Cli {
    /// 표시 언어 (auto/ko/en/ko-kr/en-us)
    #[arg(long, default_value = "auto")]
    lang: String,

    /// 언어팩 TOML 디렉터리 경로
    #[arg(long)]
    locales_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let pack_dir = cli
        .locales_dir
        .as_deref()
        .or(cfg.language_pack_dir.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, pack_dir);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
