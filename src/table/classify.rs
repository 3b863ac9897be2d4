use regex::Regex;

use super::loader::RawRow;

// Matches anywhere in the description, so "F1 pressed" and "pressed F12"
// are both function-key rows.
const FUNCTION_KEY_PATTERN: &str = "F[0-9]+";

pub struct Classifier {
    function_key: Regex,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            function_key: Regex::new(FUNCTION_KEY_PATTERN).unwrap(),
        }
    }

    // A qualifying row yields its scan code and glyph; everything else is
    // dropped without diagnostic, including rows whose code field is not
    // valid hex.
    pub fn classify(&self, row: &RawRow) -> Option<(u32, char)> {
        if !Self::has_two_fields(row) {
            return None;
        }
        let description = &row.fields[1];
        if !Self::is_press(description)
            || Self::is_keypad(description)
            || self.is_function_key(description)
        {
            return None;
        }
        let code = u32::from_str_radix(row.fields[0].trim(), 16).ok()?;
        let glyph = Self::glyph_of(description)?;
        Some((code, glyph))
    }

    fn has_two_fields(row: &RawRow) -> bool {
        row.fields.len() == 2
    }

    fn is_press(description: &str) -> bool {
        description.contains("pressed")
    }

    fn is_keypad(description: &str) -> bool {
        description.contains("(keypad)")
    }

    fn is_function_key(&self, description: &str) -> bool {
        self.function_key.is_match(description)
    }

    fn glyph_of(description: &str) -> Option<char> {
        let token = description.split_whitespace().next()?;
        token.to_lowercase().chars().next()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
