//! Symbol icon resolution / 符号图标解析

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Closed mapping of entry types to icon file stems / 条目类型到图标文件名的固定映射
static ICON_KEYS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Associated Type", "At"),
        ("Class", "C"),
        ("Case", "Ca"),
        ("Enumeration", "E"),
        ("Instance Method", "F"),
        ("Initializer", "I"),
        ("Protocol", "Pr"),
        ("Structure", "S"),
        ("Type Alias", "Ta"),
        ("Type Property", "V"),
    ])
});

/// Icon URL for a documentation entry type / 条目类型对应的图标URL
///
/// Unknown types resolve to the literal `undefined.svg`, matching the wire
/// behavior the service's assets already tolerate; a miss is never an error.
/// 未知类型固定解析为 undefined.svg，与线上行为一致。
pub fn icon_url(icon_base: &str, entry_type: &str) -> String {
    let stem = ICON_KEYS.get(entry_type).copied().unwrap_or("undefined");
    format!("{}{}.svg", icon_base, stem)
}
