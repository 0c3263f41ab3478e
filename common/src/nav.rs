//! ナビゲーションサイドバーのモデル
//!
//! 現在のパスから強調表示する項目を決める純粋関数のみ。

/// サイドバーの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// 固定のナビゲーション項目
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/" },
    NavItem { label: "Analyze", path: "/analyze" },
    NavItem { label: "Settings", path: "/settings" },
];

fn trim_trailing_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// 項目のパスが現在のパスに一致するか
///
/// "/" は完全一致のみ。それ以外は完全一致またはセグメント単位の前方一致。
pub fn matches_route(item_path: &str, current: &str) -> bool {
    let item = trim_trailing_slash(item_path);
    let current = trim_trailing_slash(current);

    if item == "/" {
        return current == "/";
    }
    current == item
        || current
            .strip_prefix(item)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// 強調表示する項目のインデックス（一致が複数あれば最長パス）
pub fn active_index(items: &[NavItem], current: &str) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_route(item.path, current))
        .max_by_key(|(_, item)| item.path.len())
        .map(|(i, _)| i)
}
