// 配置加载逻辑
//
// 此文件负责从配置文件和环境变量加载配置。

use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::schema::AppConfig;
use crate::error::Result;

/// 加载应用配置
///
/// 配置加载优先级（从高到低）：
/// 1. 环境变量（GSAVE__* 前缀，双下划线表示嵌套）
///    - 例如：`GSAVE__REPO__BASE_DIR=/opt/ignition`
///    - 例如：`GSAVE__UI__COLORED=false`
/// 2. 配置文件（~/.config/gsave/config.toml）
/// 3. 默认值（来自 schema.rs 的 Default trait 和 serde(default) 属性）
pub fn load_config() -> Result<AppConfig> {
    load_config_from(get_config_path().as_deref())
}

/// 从指定配置文件（可选）和环境变量加载配置
///
/// 文件不存在时跳过，不视为错误。
pub fn load_config_from(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    // 1. 加载配置文件（如果存在）
    if let Some(path) = config_path
        && path.exists()
    {
        tracing::debug!("Loading config file {}", path.display());
        builder = builder.add_source(File::from(path));
    }

    // 2. 加载环境变量（GSAVE__*，优先级最高）
    // 使用双下划线作为嵌套层级分隔符，避免与字段名中的单下划线冲突
    // 例如：GSAVE__REPO__DATA_DIR -> repo.data_dir
    builder = builder.add_source(
        Environment::with_prefix("GSAVE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}

/// 获取配置文件路径
///
/// 返回 ~/.config/gsave/config.toml
pub fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gsave").map(|dirs| dirs.config_dir().join("config.toml"))
}
