//! Shallow structure sniffing: bracket envelopes only, no parsing.

pub fn looks_like_array(text: &str) -> bool {
    is_enclosed(text, '[', ']')
}

pub fn looks_like_object(text: &str) -> bool {
    is_enclosed(text, '{', '}')
}

fn is_enclosed(text: &str, open: char, close: char) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.starts_with(open) && trimmed.ends_with(close)
}
