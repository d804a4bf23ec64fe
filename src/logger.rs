use crate::config::LOG_LEVEL;
use log::{Level, LevelFilter, Metadata, Record};
use std::env;

struct Logger;

/// 初始化日志系统，重复调用时保持第一次安装的 logger。
pub fn init() {
    static LOGGER: Logger = Logger;
    if log::set_logger(&LOGGER).is_err() {
        return;
    }

    let log_level = env::var(LOG_LEVEL).unwrap_or_else(|_| String::from("INFO"));
    log::set_max_level(level_filter(&log_level));
}

/// 将 `LOG_LEVEL` 的取值映射为过滤级别，无法识别时使用 INFO。
fn level_filter(level: &str) -> LevelFilter {
    match level.to_ascii_uppercase().as_str() {
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "INFO" => LevelFilter::Info,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

impl Logger {
    /// 根据日志级别从环境变量 `LOG_COLOR_<LEVEL>` 中获取颜色，未设置则使用默认颜色。
    fn get_color_for_level(level: Level) -> u8 {
        let (var, default) = match level {
            Level::Error => ("LOG_COLOR_ERROR", 31),
            Level::Warn => ("LOG_COLOR_WARN", 93),
            Level::Info => ("LOG_COLOR_INFO", 34),
            Level::Debug => ("LOG_COLOR_DEBUG", 32),
            Level::Trace => ("LOG_COLOR_TRACE", 90),
        };
        env::var(var)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = Logger::get_color_for_level(record.level());

        println!(
            "\u{1B}[{}m[{:>5}]: {} - {}\u{1B}[0m",
            color,
            record.level(),
            record.target(),
            record.args(),
        );
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(LevelFilter::Debug, level_filter("debug"));
        assert_eq!(LevelFilter::Warn, level_filter("WARN"));
        assert_eq!(LevelFilter::Info, level_filter("verbose"));
    }
}
