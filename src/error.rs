use thiserror::Error;

pub type Result<T> = std::result::Result<T, GsaveError>;

#[derive(Error, Debug)]
pub enum GsaveError {
    #[error("Failed to run {program}: {source}")]
    Command {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),
}

impl GsaveError {
    /// 错误是否表示可执行文件不存在
    pub fn is_not_found(&self) -> bool {
        match self {
            GsaveError::Command { source, .. } | GsaveError::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// 获取错误的解决建议
    pub fn suggestion(&self) -> Option<String> {
        match self {
            GsaveError::Command { .. } if self.is_not_found() => {
                Some(rust_i18n::t!("error.suggestion.install_git").to_string())
            }
            GsaveError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Some(rust_i18n::t!("error.suggestion.permission").to_string())
            }
            GsaveError::Config(_) | GsaveError::ConfigParse(_) => {
                Some(rust_i18n::t!("error.suggestion.config").to_string())
            }
            _ => None,
        }
    }
}
