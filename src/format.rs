//! Value formatting shared by the `Display` impls

use std::fmt::{self, Display};

/// Render a slice as `[a, b, c]`
pub(crate) fn list<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Write an optional value, printing `None` when unset
pub(crate) fn write_optional<T: Display>(f: &mut fmt::Formatter<'_>, value: Option<&T>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{}", value),
        None => write!(f, "None"),
    }
}

/// Write an optional list, printing `None` when unset
pub(crate) fn write_optional_list<T: Display>(
    f: &mut fmt::Formatter<'_>,
    values: Option<&[T]>,
) -> fmt::Result {
    match values {
        Some(values) => write!(f, "{}", list(values)),
        None => write!(f, "None"),
    }
}
