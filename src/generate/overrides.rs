/// 参数形态无法从清单推断的命令，直接使用手写的方法签名。
///
/// 生成器在走通用流程之前按命令名查表。
pub const OVERRIDES: &[(&str, &str)] = &[
    ("sort", "List<byte[]> sort(final K key, final SortCommand... sortCommands);"),
    ("hmset", "Status hmset(final K key, final Map<HK, V> hash);"),
    (
        "linsert",
        "long linsert(final K key, final LINSERT_POSITION where, final V pivot, final V value);",
    ),
];

pub fn lookup(name: &str) -> Option<&'static str> {
    OVERRIDES
        .iter()
        .find(|(cmd, _)| *cmd == name)
        .map(|(_, signature)| *signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listed_commands_are_overridden() {
        assert!(lookup("sort").unwrap().starts_with("List<byte[]> sort("));
        assert!(lookup("hmset").unwrap().contains("Map<HK, V>"));
        assert!(lookup("linsert").unwrap().contains("LINSERT_POSITION where"));
        assert_eq!(None, lookup("get"));
        assert_eq!(None, lookup("SORT"));
    }
}
