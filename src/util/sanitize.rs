use regex::Regex;

// Story titles and author names come from the server and ultimately from
// other users; strip ANSI escapes and control characters before they reach
// the terminal, collapse whitespace, and cap the width.
pub fn sanitize_for_terminal(s: &str) -> String {
    // CSI sequences (ESC[ ... cmd). Covers the styling/movement sequences
    // that matter for terminal output; falls back to the raw string if the
    // regex somehow fails to compile.
    let re = Regex::new(r"\x1B\[[0-9;?]*[ -/]*[@-~]").ok();
    let no_ansi = match &re {
        Some(r) => r.replace_all(s, "").into_owned(),
        None => s.to_string(),
    };

    // Drop remaining C0 controls and DEL.
    let cleaned: String = no_ansi
        .chars()
        .filter(|&ch| ch >= ' ' && ch != '\x7f')
        .collect();

    let collapsed = cleaned.replace(['\n', '\r', '\t'], " ");
    let trimmed = collapsed.trim();

    // Keep labels narrow enough for one menu row.
    trimmed.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_csi_sequences() {
        assert_eq!(
            sanitize_for_terminal("\x1B[31mred\x1B[0m title"),
            "red title"
        );
    }

    #[test]
    fn drops_control_characters_and_trims() {
        assert_eq!(sanitize_for_terminal("  a\x07b\x00c  "), "abc");
    }

    #[test]
    fn truncates_very_long_titles() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_for_terminal(&long).chars().count(), 200);
    }
}
