use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::error::{GsaveError, Result};

/// 应用配置
///
/// 生效配置由低到高合并：
/// 1. Rust 默认值（`Default` + `serde(default)`）
/// 2. 用户配置文件（平台配置目录下的 `gsave/config.toml`）
/// 3. `GSAVE__*` 环境变量
///
/// 默认值与不带任何配置运行时的行为完全一致。
///
/// # 配置示例
/// ```toml
/// [repo]
/// base_dir = "/usr/local/bin/ignition"
/// data_dir = "data"
///
/// [ui]
/// colored = false
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 仓库布局与 git 程序
    #[serde(default)]
    pub repo: RepoConfig,

    /// 终端输出
    #[serde(default)]
    pub ui: UIConfig,
}

impl AppConfig {
    /// 校验配置一致性
    pub fn validate(&self) -> Result<()> {
        self.repo.validate()
    }
}

/// 仓库配置
///
/// # 字段
/// - `base_dir`: 所有相对路径的基准目录；未设置时取可执行文件所在目录
/// - `git_program`: git 可执行文件名或路径
/// - `data_dir`: 被 `git add` 的数据目录，同时存放日志文件
/// - `log_file`: `data_dir` 下的日志文件名
#[derive(Debug, Clone, Deserialize)]
pub struct RepoConfig {
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    #[serde(default = "default_git_program")]
    pub git_program: String,

    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            git_program: default_git_program(),
            data_dir: default_data_dir(),
            log_file: default_log_file(),
        }
    }
}

impl RepoConfig {
    fn validate(&self) -> Result<()> {
        if self.git_program.trim().is_empty() {
            return Err(GsaveError::Config(
                "repo.git_program must not be empty".to_string(),
            ));
        }
        validate_relative("repo.data_dir", &self.data_dir)?;
        validate_relative("repo.log_file", &self.log_file)?;
        Ok(())
    }

    /// 解析基准目录
    ///
    /// 配置了 `base_dir` 时直接使用，否则取当前可执行文件所在目录。
    pub fn resolve_base_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.base_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe()?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            GsaveError::Config(format!(
                "Cannot determine directory of executable {}",
                exe.display()
            ))
        })
    }

    /// 日志文件的完整路径
    pub fn log_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.data_dir).join(&self.log_file)
    }

    /// 传给 `git add` 的路径（带结尾斜杠，例如 `data/`）
    pub fn stage_path(&self) -> String {
        format!("{}/", self.data_dir.trim_end_matches('/'))
    }
}

fn validate_relative(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GsaveError::Config(format!("{} must not be empty", key)));
    }
    let path = Path::new(value);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(GsaveError::Config(format!(
            "{} must be a relative path inside the base directory, got '{}'",
            key, value
        )));
    }
    Ok(())
}

/// UI 配置
#[derive(Debug, Clone, Deserialize)]
pub struct UIConfig {
    /// 是否启用彩色输出
    #[serde(default = "default_true")]
    pub colored: bool,

    /// 是否输出 debug 级别的 tracing 日志
    #[serde(default)]
    pub verbose: bool,

    /// 终端提示语言（BCP 47，例如 `"en"`、`"zh-CN"`），`None` 表示跟随系统
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            colored: true,
            verbose: false,
            language: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_git_program() -> String {
    constants::repo::GIT_PROGRAM.to_string()
}

fn default_data_dir() -> String {
    constants::repo::DATA_DIR.to_string()
}

fn default_log_file() -> String {
    constants::repo::LOG_FILE.to_string()
}
