/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 05/09/2026
Last Modified: 05/09/2026
License: MIT
*/

use std::time::{Duration, Instant};

/// Returns a formatted string of elapsed time, e.g. `1min 34.052s`.
pub fn get_formatted_elapsed_time(instant: Instant) -> String {
    format_duration(instant.elapsed())
}

pub fn format_duration(dur: Duration) -> String {
    let minutes = dur.as_secs() / 60;
    let sub_sec = dur.as_secs() % 60;
    let sub_milli = dur.subsec_millis();
    if minutes > 0 {
        return format!("{}min {}.{:03}s", minutes, sub_sec, sub_milli);
    }
    format!("{}.{:03}s", sub_sec, sub_milli)
}

pub fn wrapped_text(val: &str, width: usize) -> String {
    let paragraphs: Vec<&str> = val.split("\n\n").collect();
    let mut ret = String::new();
    for i in 0..paragraphs.len() {
        let s = paragraphs[i].replace("\n", " ");
        let mut line = String::new();
        for word in s.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
            } else if line.len() + word.len() + 1 <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                ret.push_str(&format!("{}\n", line));
                line = word.to_string();
            }
        }
        if i < paragraphs.len() - 1 {
            ret.push_str(&format!("{}\n\n", line));
        } else {
            ret.push_str(&line);
        }
    }
    ret
}

/// Quotes a value as a Python string literal.
pub fn python_string_literal(val: &str) -> String {
    let mut s = String::with_capacity(val.len() + 2);
    s.push('"');
    for c in val.chars() {
        match c {
            '\\' => s.push_str("\\\\"),
            '"' => s.push_str("\\\""),
            '\n' => s.push_str("\\n"),
            '\r' => s.push_str("\\r"),
            '\t' => s.push_str("\\t"),
            _ => s.push(c),
        }
    }
    s.push('"');
    s
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1005)), "1.005s");
        assert_eq!(format_duration(Duration::from_millis(94_852)), "1min 34.852s");
        assert_eq!(format_duration(Duration::from_millis(60_040)), "1min 0.040s");
    }

    #[test]
    fn test_wrapped_text() {
        let s = wrapped_text("Aggregates points within a specified distance into polygons.", 20);
        for line in s.lines() {
            assert!(line.len() <= 20, "line too long: {}", line);
        }
        assert_eq!(s.split_whitespace().count(), 8);
    }

    #[test]
    fn test_wrapped_text_keeps_paragraphs() {
        assert_eq!(wrapped_text("one\ntwo\n\nthree", 80), "one two\n\nthree");
    }

    #[test]
    fn test_python_string_literal() {
        assert_eq!(python_string_literal(r"C:\data\in.shp"), r#""C:\\data\\in.shp""#);
        assert_eq!(python_string_literal("\"POP\" > 5"), r#""\"POP\" > 5""#);
    }
}
