//! 配置管理
//!
//! - `schema` - 配置结构与默认值
//! - `loader` - 配置文件与环境变量加载

pub mod loader;
pub mod schema;

pub use loader::{get_config_path, load_config, load_config_from};
pub use schema::*;
