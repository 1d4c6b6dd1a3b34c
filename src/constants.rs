//! 全局常量定义

/// 仓库布局相关常量
pub mod repo {
    /// 默认 git 可执行文件
    pub const GIT_PROGRAM: &str = "git";

    /// 仓库元数据目录（只检查是否存在）
    pub const METADATA_DIR: &str = ".git";

    /// 被暂存的数据目录
    pub const DATA_DIR: &str = "data";

    /// 数据目录下的日志文件名
    pub const LOG_FILE: &str = "git-commits.log";
}

/// 日志文件格式
pub mod log {
    /// 日志文件首次创建时写入的两行头部
    pub const HEADER: &str = "Ignition Git Save Log\n=====================\n";

    /// 时间戳格式，commit message 与日志共用
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// 写入日志和终端的固定消息
///
/// 日志是审计记录，这些文本不做本地化。
pub mod messages {
    pub const AUTO_SAVE_PREFIX: &str = "Auto save";
    pub const SAVING_PREFIX: &str = "Saving:";
    pub const GIT_MISSING: &str = "ERROR: Git is not installed. Please install Git first.";
    pub const NOT_INITIALIZED: &str = "ERROR: Git is not set up yet. Run these commands first:";
    pub const ADD_FAILED: &str = "ERROR: Could not add files";
    pub const DIFF_FAILED: &str = "ERROR: Could not check for changes";
    pub const NOTHING_TO_SAVE: &str = "Nothing has changed - nothing to save";
    pub const SAVED: &str = "SUCCESS: Changes saved to Git!";
    pub const COMMIT_FAILED: &str = "ERROR: Failed to save changes";
}
