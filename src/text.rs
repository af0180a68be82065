/// Measures string width in pixels for the raylib default font.
pub fn measure_text(text: &str, font_size: i32) -> i32 {
    let c_text = std::ffi::CString::new(text).unwrap();
    unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), font_size) }
}

/// Greedy word wrap against an arbitrary measuring function (pixel width for
/// the raylib font at runtime, character count in tests).
pub fn wrap(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_chars(s: &str) -> i32 {
        s.len() as i32
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("hello world", 20, by_chars), vec!["hello world"]);
    }

    #[test]
    fn breaks_at_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10, by_chars),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn a_word_longer_than_the_width_gets_its_own_line() {
        assert_eq!(
            wrap("hi extraordinarily hi", 6, by_chars),
            vec!["hi", "extraordinarily", "hi"]
        );
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(wrap("a   b\n c", 20, by_chars), vec!["a b c"]);
    }

    #[test]
    fn empty_text_wraps_to_nothing() {
        assert!(wrap("", 10, by_chars).is_empty());
    }
}
