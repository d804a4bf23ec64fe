use crate::manifest::{ArgValue, Argument};

/// 泛型 key 类型参数。
pub const KEY_TYPE: &str = "K";

/// `posix time` 参数对应的 64 位整数类型。
pub const POSIX_TIME_TYPE: &str = "long";

/// 参数类型标记到 Java 参数类型的映射，无法识别的标记原样输出。
pub fn parameter_type(arg: &Argument) -> String {
    if arg.has_type("key") {
        KEY_TYPE.to_string()
    } else if arg.has_type("posix time") {
        POSIX_TIME_TYPE.to_string()
    } else {
        render_value(arg.arg_type())
    }
}

pub fn parameter_name(arg: &Argument) -> String {
    render_value(arg.name())
}

fn render_value(value: Option<&ArgValue>) -> String {
    value.map_or_else(|| "null".to_string(), ToString::to_string)
}

/// 渲染参数列表，例如 `final K key, final long timestamp`。
pub fn parameter_list(arguments: Option<&[Argument]>) -> String {
    arguments
        .unwrap_or_default()
        .iter()
        .map(|arg| format!("final {} {}", parameter_type(arg), parameter_name(arg)))
        .collect::<Vec<_>>()
        .join(", ")
}
