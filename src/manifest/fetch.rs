use std::collections::BTreeMap;

use async_trait::async_trait;
use log::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::manifest::descriptor::{parse_manifest, CommandDescriptor};

/// 命令文档的来源。
///
/// 生成器逐条命令按顺序调用，每次调用都拿到该命令 markdown 文档的所有行。
#[async_trait]
pub trait DocSource {
    async fn documentation(&self, name: &str) -> Result<Vec<String>, FetchError>;
}

/// 从远程拉取命令清单和文档。每次调用只发起一次请求，不重试也不缓存。
#[derive(Debug, Clone)]
pub struct ManifestFetcher {
    client: reqwest::Client,
    config: Config,
}

impl ManifestFetcher {
    pub fn new(config: Config) -> ManifestFetcher {
        ManifestFetcher {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 拉取并解析命令清单，按文档顺序返回 `(原始命令名, 描述)`。
    pub async fn fetch_manifest(&self) -> Result<Vec<(String, CommandDescriptor)>, FetchError> {
        let body = self.get_text(&self.config.manifest_url).await?;
        parse_manifest(&body)
    }

    /// 拉取 `{base}/{name}{suffix}` 并按行切分，不做其它解析。
    pub async fn fetch_documentation(&self, name: &str) -> Result<Vec<String>, FetchError> {
        let url = self.config.documentation_url(name);
        let body = self.get_text(&url).await?;
        Ok(body.lines().map(String::from).collect())
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl DocSource for ManifestFetcher {
    async fn documentation(&self, name: &str) -> Result<Vec<String>, FetchError> {
        self.fetch_documentation(name).await
    }
}

/// 内存中的文档，没有记录的命令返回空文档。
#[async_trait]
impl DocSource for BTreeMap<String, Vec<String>> {
    async fn documentation(&self, name: &str) -> Result<Vec<String>, FetchError> {
        Ok(self.get(name).cloned().unwrap_or_default())
    }
}
