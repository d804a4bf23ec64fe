//! 比较远程清单与客户端已知命令，找出尚未支持的命令。

use std::fmt;

use log::{debug, warn};

use crate::error::GeneratorError;
use crate::known::CommandReference;
use crate::manifest::CommandDescriptor;

/// 清单中存在、客户端却没有的命令。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCommand {
    pub name: String,
    pub group: String,
}

/// 覆盖检查结果，顺序与描述集合一致（先按 group 再按 name）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    missing: Vec<MissingCommand>,
}

impl CoverageReport {
    pub fn missing(&self) -> &[MissingCommand] {
        &self.missing
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// 非空的报告视为本次运行失败。
    pub fn into_result(self) -> Result<(), GeneratorError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(GeneratorError::MissingCommands(self))
        }
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for cmd in &self.missing {
            writeln!(f, "{} missing in group {}", cmd.name, cmd.group)?;
        }
        Ok(())
    }
}

/// 对每个描述按小写名称在 `reference` 中精确查找，不做模糊匹配或别名解析。
pub fn check<'a, I, R>(descriptors: I, reference: &R) -> CoverageReport
where
    I: IntoIterator<Item = &'a CommandDescriptor>,
    R: CommandReference + ?Sized,
{
    let mut report = CoverageReport::default();
    for cmd in descriptors {
        if reference.contains(&cmd.name().to_lowercase()) {
            continue;
        }
        debug!("command '{}' ({}) is not supported", cmd.name(), cmd.group());
        report.missing.push(MissingCommand {
            name: cmd.name().to_string(),
            group: cmd.group().to_string(),
        });
    }

    if !report.is_empty() {
        warn!("{} redis commands are missing from the client", report.missing.len());
    }
    report
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::known::SupportedCommands;

    fn descriptors(cmds: &[(&str, &str)]) -> BTreeSet<CommandDescriptor> {
        cmds.iter()
            .map(|(name, group)| CommandDescriptor::new(name, group))
            .collect()
    }

    fn reference(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn all_known_gives_empty_report() {
        let cmds = descriptors(&[("get", "string"), ("lpush", "list"), ("HSET", "hash")]);
        let report = check(&cmds, &SupportedCommands);
        assert!(report.is_empty());
        assert_eq!("\n", report.to_string());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn missing_commands_listed_once_in_descriptor_order() {
        let cmds = descriptors(&[
            ("get", "string"),
            ("getex", "string"),
            ("xadd", "stream"),
            ("hello", "connection"),
        ]);
        let report = check(&cmds, &reference(&["get"]));
        let missing: Vec<_> = report
            .missing()
            .iter()
            .map(|m| (m.name.as_str(), m.group.as_str()))
            .collect();
        assert_eq!(
            vec![("hello", "connection"), ("xadd", "stream"), ("getex", "string")],
            missing
        );
    }

    #[test]
    fn report_text_lists_name_and_group() {
        let cmds = descriptors(&[("xadd", "stream"), ("get", "string")]);
        let report = check(&cmds, &reference(&["get"]));
        assert_eq!("\nxadd missing in group stream\n", report.to_string());
        assert!(matches!(report.into_result(), Err(GeneratorError::MissingCommands(_))));
    }

    #[test]
    fn get_is_missing_only_when_absent() {
        let cmds = descriptors(&[("GET", "string")]);
        assert!(check(&cmds, &reference(&["get"])).is_empty());
        assert_eq!(1, check(&cmds, &reference(&["set"])).missing().len());
    }
}
