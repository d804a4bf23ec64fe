//! 根据命令描述生成带文档注释的客户端接口骨架。
//!
//! 输出只供人工比对参考，不保证可以直接编译。

use log::{debug, info};

use crate::consts::{DEFAULT_INTERFACE, DEFAULT_PACKAGE, LOG_TARGET};
use crate::error::FetchError;
use crate::manifest::{CommandDescriptor, DocSource};

mod javadoc;
mod overrides;
mod signature;

pub use javadoc::{write_javadoc, ReplyType, ReturnType};
pub use overrides::OVERRIDES;
pub use signature::{parameter_list, parameter_name, parameter_type, KEY_TYPE, POSIX_TIME_TYPE};

#[derive(Debug, Clone)]
pub struct InterfaceGenerator {
    package: String,
    interface: String,
}

impl Default for InterfaceGenerator {
    fn default() -> InterfaceGenerator {
        InterfaceGenerator::new(DEFAULT_PACKAGE, DEFAULT_INTERFACE)
    }
}

impl InterfaceGenerator {
    pub fn new(package: impl ToString, interface: impl ToString) -> InterfaceGenerator {
        InterfaceGenerator {
            package: package.to_string(),
            interface: interface.to_string(),
        }
    }

    /// 按描述的顺序逐条生成方法，文档依次从 `docs` 拉取，任何一次失败都会中止生成。
    pub async fn render<'a, I, D>(&self, descriptors: I, docs: &D) -> Result<String, FetchError>
    where
        I: IntoIterator<Item = &'a CommandDescriptor>,
        D: DocSource + ?Sized,
    {
        let mut out = String::new();
        self.write_header(&mut out);
        for cmd in descriptors {
            self.render_command(&mut out, cmd, docs).await?;
        }
        out.push_str("}\n");
        Ok(out)
    }

    /// 生成单个命令。覆盖表中的命令直接输出手写签名，不拉取文档。
    pub async fn render_command<D>(
        &self,
        dst: &mut String,
        cmd: &CommandDescriptor,
        docs: &D,
    ) -> Result<(), FetchError>
    where
        D: DocSource + ?Sized,
    {
        if let Some(signature) = overrides::lookup(cmd.name()) {
            debug!("using hand-written signature for '{}'", cmd.name());
            dst.push('\t');
            dst.push_str(signature);
            dst.push_str("\n\n");
            return Ok(());
        }

        let doc = docs.documentation(cmd.name()).await?;
        let return_type = write_javadoc(dst, cmd, &doc);
        debug!("'{}' returns {}", cmd.name(), return_type.label());

        dst.push_str(&format!(
            "\t{} {}({});\n\n",
            return_type,
            cmd.name(),
            parameter_list(cmd.arguments.as_deref())
        ));
        Ok(())
    }

    fn write_header(&self, dst: &mut String) {
        dst.push_str(&format!("package {};\n\n", self.package));
        dst.push_str(&format!("public interface {}<K,V,HK> {{\n", self.interface));
        dst.push_str("\tpublic static enum LINSERT_POSITION {\n");
        dst.push_str("\t\tBEFORE,\n");
        dst.push_str("\t\tAFTER\n");
        dst.push_str("\t}\n\n");
    }
}

/// 将生成的接口作为一条日志写出。
pub fn emit(text: &str) {
    info!(target: LOG_TARGET, "{}", text);
}
