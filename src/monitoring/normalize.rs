// Outlet name normalization.
//
// Monitoring services decorate outlet labels with parenthetical notes such
// as "(인터넷)" or "(web edition)". Those notes are stripped so target names
// and mention labels compare on the bare outlet name.

/// Remove every balanced `(...)` group from `raw` and trim the result.
///
/// Nested groups go with their enclosing group, so `"A (b (c)) "` becomes
/// `"A"`. Unbalanced parentheses are left in place. The function is
/// idempotent: its output contains no balanced group to remove.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    // Byte offsets in `out` of currently open parentheses
    let mut open: Vec<usize> = Vec::new();

    for ch in raw.chars() {
        match ch {
            '(' => {
                open.push(out.len());
                out.push(ch);
            }
            ')' => match open.pop() {
                Some(start) => out.truncate(start),
                None => out.push(ch),
            },
            _ => out.push(ch),
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_annotation() {
        assert_eq!(normalize_name("조선일보 (인터넷)"), "조선일보");
        assert_eq!(normalize_name("(지면) 매일경제"), "매일경제");
    }

    #[test]
    fn test_strips_nested_and_multiple() {
        assert_eq!(normalize_name("A (b (c)) x (d)"), "A  x");
        assert_eq!(normalize_name("((()))Outlet"), "Outlet");
    }

    #[test]
    fn test_unbalanced_parens_kept() {
        assert_eq!(normalize_name("Outlet (web"), "Outlet (web");
        assert_eq!(normalize_name("Outlet) x"), "Outlet) x");
        assert_eq!(normalize_name("a (b (c) d"), "a (b  d");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["  A (b) ", "((x)) y (z", "plain", "", "(only)", "a(b)c(d(e)f)g", ") (x"] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once, "not idempotent for {raw:?}");
        }
    }
}
