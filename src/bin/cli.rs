use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::{debug, info};

use redis_cmdgen::config::Config;
use redis_cmdgen::consts::{DEFAULT_INTERFACE, DEFAULT_PACKAGE};
use redis_cmdgen::error::GeneratorError;
use redis_cmdgen::generate::InterfaceGenerator;
use redis_cmdgen::known::{CommandReference, SupportedCommands};
use redis_cmdgen::manifest::ManifestFetcher;
use redis_cmdgen::{logger, runner};

/// 运行模式，缺省为 `run`。
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// 只检查清单中是否有客户端未支持的命令
    Check,
    /// 只生成客户端接口
    Generate,
    /// 检查并生成，有缺失命令时以失败退出
    Run,
}

#[derive(Parser, Debug)]
#[clap(
    name = "redis-cmdgen",
    version,
    author,
    about = "Check redis command coverage and generate the client interface"
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// 命令清单地址
    #[clap(long)]
    manifest_url: Option<String>,

    /// 命令文档目录地址
    #[clap(long)]
    doc_base_url: Option<String>,

    #[clap(long, default_value = DEFAULT_PACKAGE)]
    package: String,

    #[clap(long, default_value = DEFAULT_INTERFACE)]
    interface: String,

    /// 额外把生成的接口写入该文件
    #[clap(long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// 用逗号分隔的命令名代替内置的已知命令表
    #[clap(long, value_delimiter = ',')]
    known: Option<Vec<String>>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), GeneratorError> {
    dotenv().ok();
    logger::init();

    let cli = Cli::parse();
    debug!("generator started: {:?}", cli);

    let config = Config::from_env().with_overrides(cli.manifest_url.clone(), cli.doc_base_url.clone());
    let fetcher = ManifestFetcher::new(config);
    let generator = InterfaceGenerator::new(&cli.package, &cli.interface);

    let custom: Option<BTreeSet<String>> = cli
        .known
        .as_ref()
        .map(|names| names.iter().map(|n| n.trim().to_lowercase()).collect());
    let reference: &dyn CommandReference = match &custom {
        Some(set) => set,
        None => &SupportedCommands,
    };

    match cli.command.unwrap_or(Command::Run) {
        Command::Check => {
            runner::check(&fetcher, reference).await?.into_result()?;
            info!("every redis command is supported");
        }
        Command::Generate => {
            runner::generate(&fetcher, &generator, cli.output.as_deref()).await?;
        }
        Command::Run => {
            runner::run(&fetcher, reference, &generator, cli.output.as_deref()).await?;
        }
    }
    Ok(())
}
