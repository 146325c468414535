use percent_encoding::percent_encode_byte;

use crate::bytes_str::BytesStr;

// Escape-aware filter: a "%" already forming a valid two-hex-digit
// escape passes through untouched, so filtering is idempotent. Every
// other byte outside the component's safe set is percent-encoded.
fn filter(input: &str, keep: fn(u8) -> bool) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            out.push_str(&input[i..i + 3]);
            i += 3;
        } else if keep(b) {
            out.push(b as char);
            i += 1;
        } else {
            out.push_str(percent_encode_byte(b));
            i += 1;
        }
    }
    out
}

fn path_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'-'
                | b'.'
                | b'~'
                | b':'
                | b'@'
                | b'&'
                | b'='
                | b'+'
                | b'$'
                | b','
                | b'/'
                | b';'
        )
}

fn query_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'-'
                | b'.'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
                | b'@'
                | b'/'
                | b'?'
        )
}

// ":" and "@" are encoded here, unlike in path and query
fn user_info_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'-'
                | b'.'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
        )
}

pub(crate) fn path(input: &str) -> BytesStr {
    BytesStr::from(filter(input, path_safe))
}

pub(crate) fn query(input: &str) -> BytesStr {
    let input = input.strip_prefix('?').unwrap_or(input);
    BytesStr::from(filter(input, query_safe))
}

pub(crate) fn fragment(input: &str) -> BytesStr {
    let input = input.strip_prefix('#').unwrap_or(input);
    BytesStr::from(filter(input, query_safe))
}

pub(crate) fn user_info(input: &str) -> BytesStr {
    BytesStr::from(filter(input, user_info_safe))
}

// "" or exactly one leading "/" and no trailing "/"
pub(crate) fn base_path(input: &str) -> BytesStr {
    let trimmed = input.trim_matches('/');
    if trimmed.is_empty() {
        BytesStr::new()
    } else {
        BytesStr::from(format!("/{}", filter(trimmed, path_safe)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/includes?/new", "/includes%3F/new")]
    #[case("/include%25s/new", "/include%25s/new")]
    #[case("/foo bar", "/foo%20bar")]
    #[case("/foo/bar", "/foo/bar")]
    #[case("0", "0")]
    #[case("100%", "100%25")]
    #[case("/a%2x/b", "/a%252x/b")]
    #[case("/caf\u{e9}", "/caf%C3%A9")]
    #[case("/:@&=+$,;", "/:@&=+$,;")]
    fn path_filter(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(path(input), expected);
        // idempotent
        assert_eq!(path(expected), expected);
    }

    #[rstest]
    #[case("?foobar=%match", "foobar=%25match")]
    #[case("abc=123", "abc=123")]
    #[case("a=1&b=2", "a=1&b=2")]
    #[case("a=^", "a=%5E")]
    #[case("a=1%5B%5D", "a=1%5B%5D")]
    #[case("??twice", "%3Ftwice")]
    #[case("!$&'()*+,;=:@/?", "!$&'()*+,;=:@/?")]
    fn query_filter(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(query(input), expected);
        assert_eq!(query(expected), expected);
    }

    #[rstest]
    #[case("#section3", "section3")]
    #[case("section3", "section3")]
    #[case("#a b", "a%20b")]
    #[case("##nested", "%23nested")]
    fn fragment_filter(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(fragment(input), expected);
    }

    #[rstest]
    #[case("test", "test")]
    #[case("Test123", "Test123")]
    #[case("a:b@c", "a%3Ab%40c")]
    #[case("pa%3Ass", "pa%3Ass")]
    #[case("sp ace", "sp%20ace")]
    fn user_info_filter(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(user_info(input), expected);
        assert_eq!(user_info(expected), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("/", "")]
    #[case("//", "")]
    #[case("base", "/base")]
    #[case("/base", "/base")]
    #[case("/base/", "/base")]
    #[case("base/sub/", "/base/sub")]
    #[case("spaced seg", "/spaced%20seg")]
    fn base_path_normalization(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(base_path(input), expected);
    }
}
