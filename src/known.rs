//! 客户端已经支持的命令。
//!
//! 这是一个封闭的枚举，新增命令时需要手动维护，覆盖检查会报告清单中存在而这里缺失的命令。

use std::collections::BTreeSet;

macro_rules! known_commands {
    ($($variant:ident => $name:literal,)*) => {
        /// 客户端接口中已经存在对应方法的 Redis 命令。
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum KnownCommand {
            $($variant,)*
        }

        impl KnownCommand {
            /// 所有已知命令。
            pub const ALL: &'static [KnownCommand] = &[$(KnownCommand::$variant,)*];

            /// 不区分大小写地按名称查找命令。
            pub fn from_name(name: &str) -> Option<KnownCommand> {
                match &name.to_lowercase()[..] {
                    $($name => Some(KnownCommand::$variant),)*
                    _ => None,
                }
            }

            /// 小写的命令名。
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(KnownCommand::$variant => $name,)*
                }
            }
        }
    };
}

known_commands! {
    Append => "append",
    Auth => "auth",
    Bgrewriteaof => "bgrewriteaof",
    Bgsave => "bgsave",
    Blpop => "blpop",
    Brpop => "brpop",
    Brpoplpush => "brpoplpush",
    Config => "config",
    Dbsize => "dbsize",
    Debug => "debug",
    Decr => "decr",
    Decrby => "decrby",
    Del => "del",
    Discard => "discard",
    Echo => "echo",
    Exec => "exec",
    Exists => "exists",
    Expire => "expire",
    Expireat => "expireat",
    Flushall => "flushall",
    Flushdb => "flushdb",
    Get => "get",
    Getbit => "getbit",
    Getrange => "getrange",
    Getset => "getset",
    Hdel => "hdel",
    Hexists => "hexists",
    Hget => "hget",
    Hgetall => "hgetall",
    Hincrby => "hincrby",
    Hkeys => "hkeys",
    Hlen => "hlen",
    Hmget => "hmget",
    Hmset => "hmset",
    Hset => "hset",
    Hsetnx => "hsetnx",
    Hvals => "hvals",
    Incr => "incr",
    Incrby => "incrby",
    Info => "info",
    Keys => "keys",
    Lastsave => "lastsave",
    Lindex => "lindex",
    Linsert => "linsert",
    Llen => "llen",
    Lpop => "lpop",
    Lpush => "lpush",
    Lpushx => "lpushx",
    Lrange => "lrange",
    Lrem => "lrem",
    Lset => "lset",
    Ltrim => "ltrim",
    Mget => "mget",
    Monitor => "monitor",
    Move => "move",
    Mset => "mset",
    Msetnx => "msetnx",
    Multi => "multi",
    Object => "object",
    Persist => "persist",
    Ping => "ping",
    Psubscribe => "psubscribe",
    Publish => "publish",
    Punsubscribe => "punsubscribe",
    Quit => "quit",
    Randomkey => "randomkey",
    Rename => "rename",
    Renamenx => "renamenx",
    Rpop => "rpop",
    Rpoplpush => "rpoplpush",
    Rpush => "rpush",
    Rpushx => "rpushx",
    Sadd => "sadd",
    Save => "save",
    Scard => "scard",
    Sdiff => "sdiff",
    Sdiffstore => "sdiffstore",
    Select => "select",
    Set => "set",
    Setbit => "setbit",
    Setex => "setex",
    Setnx => "setnx",
    Setrange => "setrange",
    Shutdown => "shutdown",
    Sinter => "sinter",
    Sinterstore => "sinterstore",
    Sismember => "sismember",
    Slaveof => "slaveof",
    Slowlog => "slowlog",
    Smembers => "smembers",
    Smove => "smove",
    Sort => "sort",
    Spop => "spop",
    Srandmember => "srandmember",
    Srem => "srem",
    Strlen => "strlen",
    Subscribe => "subscribe",
    Sunion => "sunion",
    Sunionstore => "sunionstore",
    Sync => "sync",
    Ttl => "ttl",
    Type => "type",
    Unsubscribe => "unsubscribe",
    Unwatch => "unwatch",
    Watch => "watch",
    Zadd => "zadd",
    Zcard => "zcard",
    Zcount => "zcount",
    Zincrby => "zincrby",
    Zinterstore => "zinterstore",
    Zrange => "zrange",
    Zrangebyscore => "zrangebyscore",
    Zrank => "zrank",
    Zrem => "zrem",
    Zremrangebyrank => "zremrangebyrank",
    Zremrangebyscore => "zremrangebyscore",
    Zrevrange => "zrevrange",
    Zrevrangebyscore => "zrevrangebyscore",
    Zrevrank => "zrevrank",
    Zscore => "zscore",
    Zunionstore => "zunionstore",
}

/// 覆盖检查所依赖的唯一操作：按名称（不区分大小写）查找命令是否已支持。
pub trait CommandReference {
    fn contains(&self, name: &str) -> bool;
}

/// 内置的已知命令表，即 [`KnownCommand`]。
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportedCommands;

impl CommandReference for SupportedCommands {
    fn contains(&self, name: &str) -> bool {
        KnownCommand::from_name(name).is_some()
    }
}

/// 由小写命令名组成的集合，例如命令行 `--known` 传入的列表。
impl CommandReference for BTreeSet<String> {
    fn contains(&self, name: &str) -> bool {
        BTreeSet::contains(self, &name.to_lowercase())
    }
}

impl<T: CommandReference + ?Sized> CommandReference for &T {
    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Some(KnownCommand::Get), KnownCommand::from_name("GET"));
        assert_eq!(Some(KnownCommand::Zrevrangebyscore), KnownCommand::from_name("ZRevRangeByScore"));
        assert_eq!(None, KnownCommand::from_name("getex"));
    }

    #[test]
    fn names_round_trip() {
        for cmd in KnownCommand::ALL {
            assert_eq!(Some(*cmd), KnownCommand::from_name(cmd.as_str()));
            assert_eq!(cmd.as_str().to_lowercase(), cmd.as_str());
        }
    }

    #[test]
    fn special_cased_commands_are_known() {
        let reference = SupportedCommands;
        for name in &["sort", "hmset", "linsert", "config", "debug"] {
            assert!(reference.contains(name), "{} should be known", name);
        }
        assert!(!reference.contains("hello"));
    }

    #[test]
    fn string_sets_lowercase_the_lookup() {
        let set: BTreeSet<String> = vec!["get".to_string()].into_iter().collect();
        assert!(CommandReference::contains(&set, "GET"));
        assert!(!CommandReference::contains(&set, "set"));
    }
}
