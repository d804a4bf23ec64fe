use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use log::{debug, warn};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::FetchError;

/// 参数描述中的取值。
///
/// 清单里每个参数都是一个结构不固定的对象，生成器只读取 `name` 和 `type`，
/// 其余字段（`optional`、`multiple`、`enum` 等）只需能被解析。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Str(String),
    Number(serde_json::Number),
    Flag(bool),
    List(Vec<ArgValue>),
    Map(Entries<ArgValue>),
    Null,
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(s) => write!(f, "{}", s),
            ArgValue::Number(n) => write!(f, "{}", n),
            ArgValue::Flag(b) => write!(f, "{}", b),
            ArgValue::List(items) => {
                // 复合参数（例如 `[integer, integer]`）原样展示
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ArgValue::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", k, v)?;
                }
                write!(f, "}}")
            }
            ArgValue::Null => write!(f, "null"),
        }
    }
}

/// 按 JSON 文档顺序保存的键值对。重复的键只保留一项，位置取第一次出现，值取最后一次。
#[derive(Debug, Clone, PartialEq)]
pub struct Entries<V>(Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Entries<V> {
        Entries(Vec::new())
    }
}

impl<V> Entries<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, key: String, value: V) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }
}

impl<V> IntoIterator for Entries<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V> std::iter::FromIterator<(K, V)> for Entries<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Entries<V> {
        let mut entries = Entries::default();
        for (k, v) in iter {
            entries.insert(k.into(), v);
        }
        entries
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Entries<V>, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries<V>, A::Error> {
                let mut entries = Entries(Vec::with_capacity(map.size_hint().unwrap_or(0)));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.insert(key, value);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// 单个命令参数。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Argument(Entries<ArgValue>);

impl Argument {
    pub fn get(&self, field: &str) -> Option<&ArgValue> {
        self.0.get(field)
    }

    pub fn name(&self) -> Option<&ArgValue> {
        self.get("name")
    }

    pub fn arg_type(&self) -> Option<&ArgValue> {
        self.get("type")
    }

    /// 参数类型是否为给定的字符串标记。
    pub fn has_type(&self, tag: &str) -> bool {
        matches!(self.arg_type(), Some(ArgValue::Str(t)) if t == tag)
    }
}

impl<K: Into<String>, V: Into<ArgValue>> std::iter::FromIterator<(K, V)> for Argument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Argument {
        Argument(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> ArgValue {
        ArgValue::Str(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> ArgValue {
        ArgValue::Str(s)
    }
}

/// 一条 Redis 命令的元数据。
///
/// 排序与相等只看 `(group, name)`，有序集合中两个相等的描述会冲突。
#[derive(Debug, Clone, Deserialize)]
pub struct CommandDescriptor {
    /// 清单中的键转为小写后的命令名，反序列化后再填充。
    #[serde(skip)]
    pub name: String,
    /// 缺失时在注释中输出 `null`。
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub since: Option<String>,
    pub group: String,
    /// `None` 表示清单中没有 `arguments` 字段，与空列表不同。
    #[serde(default)]
    pub arguments: Option<Vec<Argument>>,
}

impl CommandDescriptor {
    pub fn new(name: impl ToString, group: impl ToString) -> CommandDescriptor {
        CommandDescriptor {
            name: name.to_string().to_lowercase(),
            summary: None,
            since: None,
            group: group.to_string(),
            arguments: None,
        }
    }

    pub fn with_summary(mut self, summary: impl ToString) -> CommandDescriptor {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<Argument>) -> CommandDescriptor {
        self.arguments = Some(arguments);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or("null")
    }
}

impl PartialEq for CommandDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CommandDescriptor {}

impl PartialOrd for CommandDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CommandDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group
            .cmp(&other.group)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// 解析 JSON 清单，按文档顺序返回 `(原始命令名, 描述)`，描述中的 `name` 已转为小写。
pub fn parse_manifest(src: &str) -> Result<Vec<(String, CommandDescriptor)>, FetchError> {
    let entries: Entries<CommandDescriptor> = serde_json::from_str(src)?;
    let commands: Vec<_> = entries
        .into_iter()
        .map(|(key, mut cmd)| {
            cmd.name = key.to_lowercase();
            (key, cmd)
        })
        .collect();
    debug!("parsed {} commands from manifest", commands.len());
    Ok(commands)
}

/// 将清单整理为按 `(group, name)` 排序的集合，冲突时保留文档中先出现的一项。
pub fn into_ordered<I>(commands: I) -> BTreeSet<CommandDescriptor>
where
    I: IntoIterator<Item = (String, CommandDescriptor)>,
{
    let mut ordered = BTreeSet::new();
    for (key, cmd) in commands {
        if ordered.contains(&cmd) {
            warn!("duplicate command '{}' in group '{}', keeping the first one", key, cmd.group);
            continue;
        }
        ordered.insert(cmd);
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(commands: &'a [(String, CommandDescriptor)], key: &str) -> &'a CommandDescriptor {
        &commands.iter().find(|(k, _)| k == key).unwrap().1
    }

    const MANIFEST: &str = r#"{
        "GET": {"summary": "Get the value of a key", "since": "0.07", "group": "string",
                "arguments": [{"name": "key", "type": "key"}]},
        "APPEND": {"summary": "Append a value to a key", "group": "string",
                   "arguments": [{"name": "key", "type": "key"}, {"name": "value", "type": "string"}]},
        "BLPOP": {"summary": "Remove and get the first element in a list", "group": "list",
                  "arguments": [{"name": "key", "type": "key", "multiple": true},
                                {"name": "timeout", "type": "integer"}]},
        "PING": {"summary": "Ping the server", "group": "connection"},
        "ZRangeByScore": {"summary": "Return a range of members", "group": "sorted_set",
                          "arguments": [{"command": "LIMIT", "name": ["offset", "count"],
                                         "type": ["integer", "integer"], "optional": true}]}
    }"#;

    #[test]
    fn names_are_lowercased_manifest_keys() {
        let commands = parse_manifest(MANIFEST).unwrap();
        for (key, cmd) in &commands {
            assert_eq!(key.to_lowercase(), cmd.name);
        }
        assert_eq!("zrangebyscore", find(&commands, "ZRangeByScore").name());
    }

    #[test]
    fn missing_fields_default() {
        let commands = parse_manifest(MANIFEST).unwrap();
        let ping = find(&commands, "PING");
        assert!(ping.arguments.is_none());
        assert!(ping.since.is_none());
        assert_eq!(Some("0.07"), find(&commands, "GET").since.as_deref());
    }

    #[test]
    fn missing_group_is_malformed() {
        let err = parse_manifest(r#"{"GET": {"summary": "x"}}"#).unwrap_err();
        assert!(matches!(err, FetchError::Json(_)));
    }

    #[test]
    fn ordered_by_group_then_name() {
        let ordered = into_ordered(parse_manifest(MANIFEST).unwrap());
        let names: Vec<_> = ordered.iter().map(|c| (c.group(), c.name())).collect();
        assert_eq!(
            vec![
                ("connection", "ping"),
                ("list", "blpop"),
                ("sorted_set", "zrangebyscore"),
                ("string", "append"),
                ("string", "get"),
            ],
            names
        );
    }

    #[test]
    fn manifest_keeps_document_order() {
        let commands = parse_manifest(MANIFEST).unwrap();
        let keys: Vec<_> = commands.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(vec!["GET", "APPEND", "BLPOP", "PING", "ZRangeByScore"], keys);
    }

    #[test]
    fn first_key_in_document_wins_on_collision() {
        let src = r#"{
            "get": {"summary": "first", "group": "string"},
            "GET": {"summary": "second", "group": "string"}
        }"#;
        let ordered = into_ordered(parse_manifest(src).unwrap());
        assert_eq!(1, ordered.len());
        assert_eq!("first", ordered.iter().next().unwrap().summary());
    }

    #[test]
    fn absent_summary_renders_null() {
        let commands = parse_manifest(r#"{"PING": {"group": "connection"}}"#).unwrap();
        assert_eq!("null", find(&commands, "PING").summary());
    }

    #[test]
    fn nested_maps_render_in_document_order() {
        let arg: Argument = serde_json::from_str(
            r#"{"type": {"zeta": "z", "alpha": 1, "mid": [true, null]}, "name": "x"}"#,
        )
        .unwrap();
        assert_eq!("{zeta=z, alpha=1, mid=[true, null]}", arg.arg_type().unwrap().to_string());
    }

    #[test]
    fn composite_arguments_render_as_lists() {
        let commands = parse_manifest(MANIFEST).unwrap();
        let args = find(&commands, "ZRangeByScore").arguments.as_ref().unwrap();
        assert_eq!("[offset, count]", args[0].name().unwrap().to_string());
        assert_eq!("[integer, integer]", args[0].arg_type().unwrap().to_string());
        assert_eq!(Some(&ArgValue::Flag(true)), args[0].get("optional"));
    }

    #[test]
    fn type_tags_match_strings_only() {
        let arg: Argument = vec![("name", "key"), ("type", "key")].into_iter().collect();
        assert!(arg.has_type("key"));
        assert!(!arg.has_type("posix time"));
    }
}
