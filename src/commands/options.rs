//! 命令选项结构
//!
//! 由 CLI 参数和配置构造，统一传给 `commands::save::run()`。

use crate::cli::Cli;
use crate::config::AppConfig;

/// Save 命令选项
///
/// # 字段
/// - `message`: 命令行提供的 commit message（可选，原样使用）
/// - `colored`: 是否彩色输出
///
/// # Example
/// ```
/// use gsave_rs::commands::options::SaveOptions;
///
/// let options = SaveOptions {
///     message: Some("Updated tag history"),
///     colored: false,
/// };
/// assert_eq!(options.message, Some("Updated tag history"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SaveOptions<'a> {
    pub message: Option<&'a str>,
    pub colored: bool,
}

impl<'a> SaveOptions<'a> {
    pub fn from_cli(cli: &'a Cli, config: &AppConfig) -> Self {
        Self {
            message: cli.message.as_deref(),
            colored: config.ui.colored,
        }
    }
}
