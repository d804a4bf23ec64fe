use thiserror::Error;

use crate::coverage::CoverageReport;

/// 拉取或解析远程资源时的错误，出现即终止本次运行。
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed command manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// 客户端尚未支持的命令，汇总后一次性报告。
    #[error("redis commands missing from client:{0}")]
    MissingCommands(CoverageReport),
}
