//! Phone number masking.

use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").expect("valid regex"));

/// Pour the digits of `raw` into `pattern`, where every `#` is a digit slot.
///
/// Literal characters are copied only while digits remain, so a partial
/// number yields a partial mask. Surplus digits are dropped.
///
/// `mask_phone("555 123 4567", "(###) ###-####")` → `"(555) 123-4567"`
pub fn mask_phone(raw: &str, pattern: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "");
    let mut digits = digits.chars().peekable();
    let mut out = String::with_capacity(pattern.len());

    for p in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if p == '#' {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(p);
        }
    }

    out
}
