use bytes::Bytes;

use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BytesStr(Bytes);

impl BytesStr {
    pub(crate) fn new() -> Self {
        Self(Bytes::new())
    }

    pub const fn from_static(value: &'static str) -> Self {
        BytesStr(Bytes::from_static(value.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        // Safety: only ever constructed from str / String
        unsafe { std::str::from_utf8_unchecked(self.0.as_ref()) }
    }

    pub fn into_inner(self) -> Bytes {
        self.0
    }
}

impl From<&str> for BytesStr {
    fn from(value: &str) -> Self {
        BytesStr(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for BytesStr {
    fn from(value: String) -> Self {
        BytesStr(Bytes::from(value.into_bytes()))
    }
}

impl std::ops::Deref for BytesStr {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for BytesStr {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BytesStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for BytesStr {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for BytesStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
