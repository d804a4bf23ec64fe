/// 最新的 Redis 命令清单（JSON 格式）。
pub const COMMANDS_URL: &str = "https://raw.github.com/antirez/redis-doc/master/commands.json";

/// 每个命令的 markdown 文档所在目录。
pub const DOCUMENTATION_BASE_URL: &str = "https://raw.github.com/antirez/redis-doc/master/commands/";

pub const DOCUMENTATION_SUFFIX: &str = ".md";

/// 生成的接口所在的 Java 包名。
pub const DEFAULT_PACKAGE: &str = "redis.client";

pub const DEFAULT_INTERFACE: &str = "IRedisClient";

/// 无法从文档推断返回值时使用的占位类型，需要人工修改。
pub const PLACEHOLDER_RETURN_TYPE: &str = "UpdateMe";

/// 生成结果写入日志时使用的 target。
pub const LOG_TARGET: &str = "GENERATOR";
