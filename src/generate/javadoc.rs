use std::fmt;

use crate::consts::PLACEHOLDER_RETURN_TYPE;
use crate::manifest::CommandDescriptor;

/// 文档中 `@xxx-reply` 标记所表示的回复类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyType {
    Bulk,
    MultiBulk,
    Status,
    Integer,
}

impl ReplyType {
    const ALL: [ReplyType; 4] = [
        ReplyType::Bulk,
        ReplyType::MultiBulk,
        ReplyType::Status,
        ReplyType::Integer,
    ];

    pub fn marker(&self) -> &'static str {
        match self {
            ReplyType::Bulk => "@bulk-reply",
            ReplyType::MultiBulk => "@multi-bulk-reply",
            ReplyType::Status => "@status-reply",
            ReplyType::Integer => "@integer-reply",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReplyType::Bulk => "blob",
            ReplyType::MultiBulk => "blob-list",
            ReplyType::Status => "status",
            ReplyType::Integer => "integer",
        }
    }

    /// 生成的方法签名中使用的 Java 类型。
    pub fn java_type(&self) -> &'static str {
        match self {
            ReplyType::Bulk => "byte[]",
            ReplyType::MultiBulk => "List<byte[]>",
            ReplyType::Status => "Status",
            ReplyType::Integer => "long",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            ReplyType::Bulk => "a bulk reply",
            ReplyType::MultiBulk => "a multi-bulk reply",
            ReplyType::Status => "a status reply",
            ReplyType::Integer => "an integer reply",
        }
    }

    /// 如果该行以回复类型标记开头，返回类型和标记之后的剩余文本。
    fn parse(line: &str) -> Option<(ReplyType, &str)> {
        ReplyType::ALL
            .iter()
            .find_map(|reply| line.strip_prefix(reply.marker()).map(|rest| (*reply, rest)))
    }
}

/// 生成方法的返回类型，文档里没有回复类型标记时为占位类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    Placeholder,
    Reply(ReplyType),
}

impl Default for ReturnType {
    fn default() -> ReturnType {
        ReturnType::Placeholder
    }
}

impl ReturnType {
    pub fn label(&self) -> &'static str {
        match self {
            ReturnType::Placeholder => PLACEHOLDER_RETURN_TYPE,
            ReturnType::Reply(reply) => reply.label(),
        }
    }

    pub fn java_type(&self) -> &'static str {
        match self {
            ReturnType::Placeholder => PLACEHOLDER_RETURN_TYPE,
            ReturnType::Reply(reply) => reply.java_type(),
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.java_type())
    }
}

/// 单行文档的改写结果。
#[derive(Debug, PartialEq, Eq)]
enum DocLine<'a> {
    Skip,
    Text(&'a str),
    Header(&'static str),
    Reply(ReplyType, &'a str),
}

fn classify(line: &str) -> DocLine<'_> {
    if line.starts_with("@description") || line.starts_with("@return") || line.starts_with("    @cli") {
        DocLine::Skip
    } else if line.starts_with("@examples") {
        DocLine::Header("Examples :")
    } else if line.starts_with("@complexity") {
        DocLine::Header("Complexity :")
    } else if let Some((reply, rest)) = ReplyType::parse(line) {
        DocLine::Reply(reply, rest)
    } else {
        DocLine::Text(line)
    }
}

/// 写出一个命令的文档注释，返回从文档中推断出的返回类型（最后一个回复标记生效）。
pub fn write_javadoc<S: AsRef<str>>(dst: &mut String, cmd: &CommandDescriptor, doc: &[S]) -> ReturnType {
    let mut return_type = ReturnType::Placeholder;

    dst.push_str("\t/**\n");
    dst.push_str(&format!("\t * {}.<br />\n", cmd.summary()));
    dst.push_str(&format!("\t * ({} operation)<br /><br />\n", cmd.group));

    for line in doc {
        match classify(line.as_ref()) {
            DocLine::Skip => {}
            DocLine::Header(header) => {
                dst.push_str("\t * ");
                dst.push_str(header);
                dst.push('\n');
            }
            DocLine::Reply(reply, rest) => {
                dst.push_str(&format!("\t * @return {} {}\n", reply.phrase(), rest));
                return_type = ReturnType::Reply(reply);
            }
            DocLine::Text(text) => {
                dst.push_str("\t * ");
                dst.push_str(text);
                dst.push('\n');
            }
        }
    }
    dst.push_str("\t */\n");

    return_type
}
