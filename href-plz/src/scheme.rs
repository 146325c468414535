use std::{fmt, str::FromStr};

use crate::error::UriError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    #[default]
    None,
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::None => "",
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// The implicit port of the scheme, treated as equivalent to "no
    /// port specified".
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Scheme::None => None,
            Scheme::Http => Some(80),
            Scheme::Https => Some(443),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Scheme::None)
    }
}

impl TryFrom<&str> for Scheme {
    type Error = UriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // a trailing ":" or "://" is tolerated, the match is case-sensitive
        let bare = value
            .strip_suffix("://")
            .or_else(|| value.strip_suffix(':'))
            .unwrap_or(value);
        match bare {
            "" => Ok(Scheme::None),
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            _ => Err(UriError::InvalidScheme),
        }
    }
}

impl FromStr for Scheme {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TryFrom::try_from(s)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Scheme {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<Scheme> for str {
    fn eq(&self, other: &Scheme) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Scheme::None)]
    #[case(":", Scheme::None)]
    #[case("http", Scheme::Http)]
    #[case("http:", Scheme::Http)]
    #[case("http://", Scheme::Http)]
    #[case("https", Scheme::Https)]
    #[case("https:", Scheme::Https)]
    #[case("https://", Scheme::Https)]
    fn parses_allowed_schemes(#[case] input: &str, #[case] expected: Scheme) {
        assert_eq!(input.parse::<Scheme>().unwrap(), expected);
    }

    #[rstest]
    #[case("ftp")]
    #[case("ftp://")]
    #[case("HTTP")]
    #[case("Https")]
    #[case("https:/")]
    #[case("ws")]
    fn rejects_everything_else(#[case] input: &str) {
        assert_eq!(
            input.parse::<Scheme>().unwrap_err(),
            UriError::InvalidScheme
        );
    }

    #[test]
    fn scheme_eq_to_str() {
        assert_eq!(&Scheme::Http, "http");
        assert_eq!(&Scheme::Https, "https");
        assert_eq!(&Scheme::None, "");
    }

    #[rstest]
    #[case(Scheme::None, None)]
    #[case(Scheme::Http, Some(80))]
    #[case(Scheme::Https, Some(443))]
    fn default_ports(#[case] scheme: Scheme, #[case] expected: Option<u16>) {
        assert_eq!(scheme.default_port(), expected);
    }
}
