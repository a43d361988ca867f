//! `version` 子命令

/// 构建时注入的提交号（未设置时为 unknown）
const GIT_COMMIT: Option<&str> = option_env!("MAESTRO_GIT_COMMIT");
/// 构建时注入的构建日期
const BUILD_DATE: Option<&str> = option_env!("MAESTRO_BUILD_DATE");

/// 版本信息文本
pub fn version_text() -> String {
    [
        format!("maestro-cli version {}", env!("CARGO_PKG_VERSION")),
        format!("Git commit: {}", GIT_COMMIT.unwrap_or("unknown")),
        format!("Built: {}", BUILD_DATE.unwrap_or("unknown")),
        format!(
            "OS/Arch: {}/{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
    ]
    .join("\n")
}

pub fn run() {
    println!("{}", version_text());
}
