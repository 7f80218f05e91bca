//! HTML adapter: turns filtered views into markup for the display regions.
//! Every catalog or query string that reaches markup goes through
//! [`escape_html`].

pub mod cards;
pub mod page;

use std::borrow::Cow;

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(SPECIAL) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
