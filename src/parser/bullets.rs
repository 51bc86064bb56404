// file: src/parser/bullets.rs
// description: bullet list splitting into label and body
// reference: marketplace bullet point conventions

use crate::models::BulletEntry;

const LABEL_SEPARATOR: &str = " - ";

/// Splits free text into bullet entries, one per non-empty line.
///
/// Leading `•`, `-` and `*` glyphs are stripped. A line containing `" - "`
/// is split at the first occurrence into label and body; otherwise the
/// whole line becomes the body.
pub fn split_bullets(raw: &str) -> Vec<BulletEntry> {
    raw.lines().filter_map(parse_bullet_line).collect()
}

pub fn parse_bullet_line(line: &str) -> Option<BulletEntry> {
    let text = strip_bullet_prefix(line);
    if text.is_empty() {
        return None;
    }

    if let Some((label, body)) = text.split_once(LABEL_SEPARATOR) {
        let label = label.trim();
        let body = body.trim();
        if !label.is_empty() && !body.is_empty() {
            return Some(BulletEntry::new(Some(label.to_string()), body));
        }
    }

    Some(BulletEntry::new(None, text))
}

/// Strips leading bullet glyphs and whitespace.
///
/// A leading `**` is bold markup, not a glyph, and is kept.
pub fn strip_bullet_prefix(line: &str) -> &str {
    let mut rest = line.trim();
    loop {
        let mut chars = rest.chars();
        match chars.next() {
            Some('•') => rest = chars.as_str().trim_start(),
            Some('*') if chars.as_str().starts_with('*') => break,
            Some('-' | '*') => rest = chars.as_str().trim_start(),
            _ => break,
        }
    }
    rest.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_and_plain_lines() {
        let bullets = split_bullets("🔥 Fast Battery - Charges in 30 minutes\nWaterproof");
        assert_eq!(
            bullets,
            vec![
                BulletEntry::new(Some("🔥 Fast Battery".to_string()), "Charges in 30 minutes"),
                BulletEntry::new(None, "Waterproof"),
            ]
        );
    }

    #[test]
    fn test_no_separator_yields_trimmed_body() {
        let bullets = split_bullets("   Long lasting battery-powered fun   ");
        assert_eq!(bullets, vec![BulletEntry::new(None, "Long lasting battery-powered fun")]);
    }

    #[test]
    fn test_prefix_glyphs_removed() {
        let bullets = split_bullets("• One\n- Two - second\n* Three\n•Four\n- • Five");
        let bodies: Vec<_> = bullets.iter().map(|b| b.body.as_str()).collect();
        assert_eq!(bodies, vec!["One", "second", "Three", "Four", "Five"]);
        assert_eq!(bullets[1].label.as_deref(), Some("Two"));
    }

    #[test]
    fn test_bold_markup_survives() {
        let bullets = split_bullets("**Bold Feature** - Transformation benefit");
        assert_eq!(bullets[0].label.as_deref(), Some("**Bold Feature**"));
    }

    #[test]
    fn test_empty_lines_dropped() {
        let bullets = split_bullets("\n\n  •  \nOnly\n\n");
        assert_eq!(bullets.len(), 1);
        assert!(split_bullets("").is_empty());
    }

    #[test]
    fn test_split_on_first_separator_only() {
        let bullets = split_bullets("Label - body - with dash");
        assert_eq!(bullets[0].label.as_deref(), Some("Label"));
        assert_eq!(bullets[0].body, "body - with dash");
    }

    #[test]
    fn test_idempotent_after_rejoin() {
        let raw = "• 🔥 Fast - Charges quickly\n* plain line\n- A - b - c";
        let first = split_bullets(raw);
        let rejoined = first
            .iter()
            .map(BulletEntry::to_line)
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(split_bullets(&rejoined), first);
    }
}
