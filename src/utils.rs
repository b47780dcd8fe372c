use super::*;

pub(crate) fn format_comments(count: u64) -> String {
  match count {
    1 => "1 comment".to_string(),
    _ => format!("{count} comments"),
  }
}

pub(crate) fn format_points(score: u64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

/// Drops characters XML 1.0 cannot carry, keeping tab, newline and carriage
/// return.
pub(crate) fn strip_control_chars(text: &str) -> String {
  text
    .chars()
    .filter(|&ch| matches!(ch, '\t' | '\n' | '\r') || !ch.is_control())
    .collect()
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn format_points_handles_singular_and_plural() {
    assert_eq!(format_points(1), "1 point");
    assert_eq!(format_points(2), "2 points");
    assert_eq!(format_points(0), "0 points");
  }

  #[test]
  fn format_comments_handles_singular_and_plural() {
    assert_eq!(format_comments(1), "1 comment");
    assert_eq!(format_comments(0), "0 comments");
    assert_eq!(format_comments(57), "57 comments");
  }

  #[test]
  fn strip_control_chars_keeps_whitespace() {
    assert_eq!(
      strip_control_chars("a\u{0}b\u{1b}c\td\ne\rf\u{7f}"),
      "abc\td\ne\rf"
    );
  }

  #[test]
  fn strip_control_chars_keeps_unicode() {
    assert_eq!(strip_control_chars("naïve — ok ✓"), "naïve — ok ✓");
  }
}
