//! 一次完整的批处理：拉取清单、覆盖检查、生成接口。

use std::collections::BTreeSet;
use std::path::Path;

use log::info;

use crate::coverage::{self, CoverageReport};
use crate::error::GeneratorError;
use crate::generate::{self, InterfaceGenerator};
use crate::known::CommandReference;
use crate::manifest::{into_ordered, CommandDescriptor, ManifestFetcher};

/// 拉取清单并按 `(group, name)` 排序。
pub async fn load_commands(fetcher: &ManifestFetcher) -> Result<BTreeSet<CommandDescriptor>, GeneratorError> {
    let commands = into_ordered(fetcher.fetch_manifest().await?);
    info!(
        "fetched {} commands from {}",
        commands.len(),
        fetcher.config().manifest_url
    );
    Ok(commands)
}

/// 只做覆盖检查。
pub async fn check<R>(fetcher: &ManifestFetcher, reference: &R) -> Result<CoverageReport, GeneratorError>
where
    R: CommandReference + ?Sized,
{
    let commands = load_commands(fetcher).await?;
    Ok(coverage::check(&commands, reference))
}

/// 只生成接口，写入日志，并在给出 `output` 时写入文件。
pub async fn generate(
    fetcher: &ManifestFetcher,
    generator: &InterfaceGenerator,
    output: Option<&Path>,
) -> Result<String, GeneratorError> {
    let commands = load_commands(fetcher).await?;
    render(&commands, fetcher, generator, output).await
}

/// 先检查再生成，最后若有缺失命令则整体失败；生成结果不受检查结果影响。
pub async fn run<R>(
    fetcher: &ManifestFetcher,
    reference: &R,
    generator: &InterfaceGenerator,
    output: Option<&Path>,
) -> Result<String, GeneratorError>
where
    R: CommandReference + ?Sized,
{
    let commands = load_commands(fetcher).await?;
    let report = coverage::check(&commands, reference);
    let text = render(&commands, fetcher, generator, output).await?;
    report.into_result()?;
    Ok(text)
}

async fn render(
    commands: &BTreeSet<CommandDescriptor>,
    fetcher: &ManifestFetcher,
    generator: &InterfaceGenerator,
    output: Option<&Path>,
) -> Result<String, GeneratorError> {
    let text = generator.render(commands, fetcher).await?;
    generate::emit(&text);
    if let Some(path) = output {
        tokio::fs::write(path, &text).await?;
        info!("interface written to {}", path.display());
    }
    Ok(text)
}
