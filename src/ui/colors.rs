use colored::Colorize;

/// 成功消息（绿色 ✓）
pub fn success(msg: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", "✓".green().bold(), msg.green())
    } else {
        format!("✓ {}", msg)
    }
}

/// 失败消息（红色 ✗）
pub fn failure(msg: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", "✗".red().bold(), msg.red())
    } else {
        format!("✗ {}", msg)
    }
}

/// 显示致命错误（stderr）
pub fn error(msg: &str, colored: bool) {
    eprintln!("{}", failure(msg, colored));
}

/// 信息消息（蓝色 ℹ）
pub fn info(msg: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", "ℹ".blue().bold(), msg.blue())
    } else {
        format!("ℹ {}", msg)
    }
}

/// 补救提示（灰色，不带前缀，保留原有缩进）
pub fn hint(msg: &str, colored: bool) -> String {
    if colored {
        msg.bright_black().to_string()
    } else {
        msg.to_string()
    }
}
