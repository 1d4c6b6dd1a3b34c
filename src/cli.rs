use clap::{Parser, builder::styling, error::ErrorKind};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "gsave-rs")]
#[command(author, version, long_about = None)]
#[command(styles = STYLES)]
pub struct Cli {
    /// Commit message (defaults to "Auto save <timestamp>")
    #[arg(index = 1, allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Anything after the message is accepted and ignored
    #[arg(index = 2, hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

/// 参数解析失败时的进程退出码
///
/// `--help` / `--version` 属于正常退出（0），其余解析错误统一为 1，
/// 不使用 clap 默认的 2。
pub fn exit_code_for(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_message_with_spaces_is_single_argument() {
        let cli = Cli::parse_from(["gsave-rs", "  two words  "]);
        assert_eq!(cli.message.as_deref(), Some("  two words  "));
    }

    #[test]
    fn test_message_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["gsave-rs", "-reverted tag edits"]).unwrap();
        assert_eq!(cli.message.as_deref(), Some("-reverted tag edits"));

        let cli = Cli::try_parse_from(["gsave-rs", "--no-alarms"]).unwrap();
        assert_eq!(cli.message.as_deref(), Some("--no-alarms"));
    }

    #[test]
    fn test_hyphen_message_after_separator() {
        let cli = Cli::parse_from(["gsave-rs", "--", "-reverted alarm"]);
        assert_eq!(cli.message.as_deref(), Some("-reverted alarm"));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let cli = Cli::try_parse_from(["gsave-rs", "first", "second", "-x"]).unwrap();
        assert_eq!(cli.message.as_deref(), Some("first"));
        assert_eq!(cli.ignored, vec!["second", "-x"]);
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["gsave-rs"]).unwrap();
        assert_eq!(cli.message, None);
        assert!(cli.ignored.is_empty());
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let err = Cli::try_parse_from(["gsave-rs", "--help"]).unwrap_err();
        assert_eq!(exit_code_for(&err), 0);

        let err = Cli::try_parse_from(["gsave-rs", "--version"]).unwrap_err();
        assert_eq!(exit_code_for(&err), 0);
    }

    #[test]
    fn test_parse_errors_exit_one() {
        let err = clap::Error::new(ErrorKind::InvalidUtf8);
        assert_eq!(exit_code_for(&err), 1);
        let err = clap::Error::new(ErrorKind::UnknownArgument);
        assert_eq!(exit_code_for(&err), 1);
    }
}
