//! Partial redaction of revealed names.

use serde::{Deserialize, Serialize};

/// Character substituted for hidden letters
pub const MASK_CHAR: char = '*';

/// How many characters stay visible on each side of a masked name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaskWidths {
    pub left: usize,
    pub right: usize,
}

impl MaskWidths {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Mask `name` with these widths
    pub fn apply(&self, name: &str) -> String {
        mask(name, self.left, self.right)
    }
}

/// Hide the middle of `name`, keeping `left` leading and `right` trailing characters.
///
/// Lengths are counted in characters, so multi-byte names keep their shape.
/// When `left + right` covers the whole name it is returned unchanged.
///
/// ```
/// use lucky_draw_core::draw::mask;
///
/// assert_eq!(mask("Alexander", 2, 2), "Al*****er");
/// assert_eq!(mask("Bob", 2, 2), "Bob");
/// assert_eq!(mask("Alexander", 3, 0), "Ale******");
/// ```
pub fn mask(name: &str, left: usize, right: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    let total = chars.len();
    if left.saturating_add(right) >= total {
        return name.to_string();
    }

    let hidden = total - left - right;
    let mut masked = String::with_capacity(name.len());
    masked.extend(&chars[..left]);
    masked.extend(std::iter::repeat(MASK_CHAR).take(hidden));
    masked.extend(&chars[total - right..]);
    masked
}
