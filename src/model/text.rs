use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Zero-terminated signed-byte text as stored in name attributes.
///
/// The buffer always holds one more element than the declared count and that
/// last element is zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Text(Vec<i8>);

impl Text {
    /// Take decoded characters and append the terminator.
    pub fn from_payload(mut payload: Vec<i8>) -> Self {
        payload.push(0);
        Self(payload)
    }

    /// Declared character count, excluding the terminator.
    pub fn len(&self) -> usize {
        self.0.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whole buffer including the terminator.
    pub fn as_raw(&self) -> &[i8] {
        &self.0
    }

    /// Declared characters as unsigned bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0[..self.len()])
    }

    /// Characters up to the first zero, decoded as UTF-8.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        let bytes = self.as_bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        String::from_utf8_lossy(&bytes[..end])
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.to_str_lossy().into_owned()
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::from_payload(bytemuck::cast_slice(s.as_bytes()).to_vec())
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::from_payload(bytemuck::cast_slice(s.as_bytes()).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminator_is_always_present() {
        let text = Text::from_payload(vec![b'c' as i8, b'a' as i8, b't' as i8]);
        assert_eq!(text.len(), 3);
        assert_eq!(text.as_raw().len(), 4);
        assert_eq!(text.as_raw()[3], 0);
        assert_eq!(text.to_string(), "cat");

        let empty = Text::from_payload(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.as_raw(), &[0]);
    }

    #[test]
    fn embedded_zero_ends_the_string() {
        let text = Text::from_payload(vec![b'a' as i8, 0, b'b' as i8]);
        assert_eq!(text.len(), 3);
        assert_eq!(text.as_bytes(), b"a\0b");
        assert_eq!(text.to_str_lossy(), "a");
    }

    #[test]
    fn serializes_as_string() {
        let text = Text::from("cube");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"cube\"");
        let back: Text = serde_json::from_str("\"cube\"").unwrap();
        assert_eq!(back, text);
    }
}
