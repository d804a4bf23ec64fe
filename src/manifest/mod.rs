//! 命令清单：描述、排序以及远程拉取。

mod descriptor;
mod fetch;

pub use descriptor::{into_ordered, parse_manifest, ArgValue, Argument, CommandDescriptor};
pub use fetch::{DocSource, ManifestFetcher};
