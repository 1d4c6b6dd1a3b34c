#[macro_use]
extern crate rust_i18n;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};
use gsave_rs::cli::{self, Cli};
use gsave_rs::{commands, error, ui};

// Initialize i18n for binary crate
i18n!("locales", fallback = "en");

fn main() -> Result<()> {
    human_panic::setup_panic!();

    // 先加载配置，语言设置要在解析 CLI 之前生效（支持多语言 help text）
    let loaded = gsave_rs::config::load_config();
    init_locale_early(
        loaded
            .as_ref()
            .ok()
            .and_then(|config| config.ui.language.as_deref()),
    );

    let cli = parse_cli_localized()?;

    // 配置损坏时无法确定日志位置，直接报错退出
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, true);
            std::process::exit(1);
        }
    };

    init_tracing(config.ui.verbose);

    let options = commands::SaveOptions::from_cli(&cli, &config);
    match commands::save::run(&options, &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // 日志文件无法创建或写入：致命错误
            report_error(&e, config.ui.colored);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    // 根据 verbose 设置日志级别，RUST_LOG 可以覆盖
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // stdout 留给操作结果，tracing 输出到 stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn report_error(e: &error::GsaveError, colored: bool) {
    ui::error(&e.to_string(), colored);
    if let Some(suggestion) = e.suggestion() {
        eprintln!("{}", ui::info(&suggestion, colored));
    }
}

/// Parse CLI arguments with localized help text
///
/// `--help` / `--version` exit with 0, every other parse error with 1.
fn parse_cli_localized() -> Result<Cli> {
    let cmd = Cli::command()
        .about(rust_i18n::t!("cli.about").to_string())
        .mut_arg("message", |arg| {
            arg.help(rust_i18n::t!("cli.message").to_string())
        });

    let matches = match cmd.try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            std::process::exit(cli::exit_code_for(&e));
        }
    };
    Cli::from_arg_matches(&matches)
        .map_err(|e| anyhow::anyhow!("Failed to parse CLI arguments: {}", e))
}

/// Initialize locale early in the startup process
///
/// Priority order:
/// 1. Environment variable GSAVE_UI_LANGUAGE (highest priority)
/// 2. Configuration ui.language
/// 3. System locale detection
/// 4. Fallback to English
fn init_locale_early(configured: Option<&str>) {
    let locale = std::env::var("GSAVE_UI_LANGUAGE")
        .ok()
        .or_else(|| configured.map(str::to_string))
        .or_else(detect_system_locale)
        .unwrap_or_else(|| "en".to_string());

    rust_i18n::set_locale(&locale);
}

/// Detect system locale using sys-locale crate
///
/// Returns locale in BCP 47 format (e.g., "en", "zh-CN")
fn detect_system_locale() -> Option<String> {
    sys_locale::get_locale().map(|locale| locale.replace('_', "-"))
}
