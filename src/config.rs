use std::env;

use crate::consts::{COMMANDS_URL, DOCUMENTATION_BASE_URL, DOCUMENTATION_SUFFIX};

/// 日志级别对应的环境变量名。
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// 覆盖命令清单地址的环境变量名。
pub const MANIFEST_URL: &str = "CMDGEN_MANIFEST_URL";

/// 覆盖文档目录地址的环境变量名。
pub const DOC_BASE_URL: &str = "CMDGEN_DOC_BASE_URL";

/// 一次运行所需的远程资源地址。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub manifest_url: String,
    pub doc_base_url: String,
    pub doc_suffix: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            manifest_url: COMMANDS_URL.to_string(),
            doc_base_url: DOCUMENTATION_BASE_URL.to_string(),
            doc_suffix: DOCUMENTATION_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// 以默认值为基础，应用环境变量（以及 `.env` 中加载的变量）。
    pub fn from_env() -> Config {
        let mut config = Config::default();
        if let Ok(url) = env::var(MANIFEST_URL) {
            config.manifest_url = url;
        }
        if let Ok(url) = env::var(DOC_BASE_URL) {
            config.doc_base_url = url;
        }
        config
    }

    /// 命令行参数优先级最高。
    pub fn with_overrides(mut self, manifest_url: Option<String>, doc_base_url: Option<String>) -> Config {
        if let Some(url) = manifest_url {
            self.manifest_url = url;
        }
        if let Some(url) = doc_base_url {
            self.doc_base_url = url;
        }
        self
    }

    /// 返回命令 `name` 的文档地址：`{base}/{name}{suffix}`。
    pub fn documentation_url(&self, name: &str) -> String {
        let mut url = self.doc_base_url.clone();
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(name);
        url.push_str(&self.doc_suffix);
        url
    }
}
