//! Commit message 解析

use chrono::{DateTime, Local};

use crate::constants::{log::TIMESTAMP_FORMAT, messages::AUTO_SAVE_PREFIX};

/// 决定本次保存使用的 commit message
///
/// 传入非空字符串时原样使用（不 trim、不转义）；否则生成
/// `Auto save YYYY-MM-DD HH:MM:SS`。
pub fn resolve(arg: Option<&str>, now: DateTime<Local>) -> String {
    match arg {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("{} {}", AUTO_SAVE_PREFIX, now.format(TIMESTAMP_FORMAT)),
    }
}
