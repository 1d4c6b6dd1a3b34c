//! # gsave-rs
//!
//! 把数据目录交给 git 保存的小工具：暂存 `data/`，有变更时提交，并把每一步
//! 写进 `data/git-commits.log`。
//!
//! 所有版本控制语义都由外部 `git` 完成，本 crate 只负责按顺序调用子进程、
//! 根据退出码决定下一步，并把结果映射为进程退出码（0 成功，1 失败）。
//!
//! ## 快速开始
//! ```bash
//! # 使用自定义 message
//! gsave-rs "Updated alarm pipelines"
//!
//! # 使用 "Auto save <时间戳>"
//! gsave-rs
//! ```
//!
//! ### 作为库使用
//! ```no_run
//! use gsave_rs::commands::SaveRunner;
//! use gsave_rs::config::RepoConfig;
//! use gsave_rs::git::runner::SystemRunner;
//! use std::path::Path;
//!
//! # fn main() -> gsave_rs::error::Result<()> {
//! let runner = SaveRunner::from_config(
//!     SystemRunner,
//!     &RepoConfig::default(),
//!     Path::new("/usr/local/bin/ignition"),
//! );
//! let outcome = runner.run(Some("Nightly snapshot"))?;
//! std::process::exit(outcome.exit_code());
//! # }
//! ```
//!
//! ## 核心模块
//! - [`commands`] - 保存流程
//! - [`git`] - 子进程抽象与 git 子命令封装
//! - [`savelog`] - 追加式日志文件
//! - [`message`] - commit message 解析
//! - [`config`] - 配置管理
//! - [`error`] - 统一错误类型
//! - [`ui`] - 终端输出
//!
//! ## 配置
//! 可选配置文件位置：
//! - Linux: `~/.config/gsave/config.toml`
//! - macOS: `~/Library/Application Support/gsave/config.toml`
//! - Windows: `%APPDATA%\gsave\config\config.toml`
//!
//! 示例配置：
//! ```toml
//! [repo]
//! base_dir = "/usr/local/bin/ignition"
//!
//! [ui]
//! colored = false
//! ```

#[macro_use]
extern crate rust_i18n;

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod message;
pub mod savelog;
pub mod ui;

// Initialize i18n for library modules
i18n!("locales", fallback = "en");
