use std::cmp::Reverse;

/// Time elapsed since a job was posted, normalized to minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recency {
    Minutes(i64),
    /// The posted text had no readable magnitude or unit
    Unknown,
}

impl Recency {
    pub fn minutes(self) -> Option<i64> {
        match self {
            Recency::Minutes(minutes) => Some(minutes),
            Recency::Unknown => None,
        }
    }

    /// Sort key placing smaller elapsed times first and unknown ones last
    pub(crate) fn newest_first_key(self) -> (bool, i64) {
        match self {
            Recency::Minutes(minutes) => (false, minutes),
            Recency::Unknown => (true, 0),
        }
    }

    /// Sort key placing larger elapsed times first and unknown ones last
    pub(crate) fn oldest_first_key(self) -> (bool, Reverse<i64>) {
        match self {
            Recency::Minutes(minutes) => (false, Reverse(minutes)),
            Recency::Unknown => (true, Reverse(0)),
        }
    }
}

/// Reads posted text such as `"45 minutes"` or `"3 hours"`.
///
/// The first token's leading integer is the magnitude. A second token
/// containing "minute" (in any case) counts minutes, anything else counts
/// hours. Units like days or weeks are read as hours as well.
///
/// A magnitude too large for `i64` minutes gives `Unknown`, so such a
/// posting sorts with the unreadable ones rather than as the oldest.
pub fn recency_minutes(posted: &str) -> Recency {
    let mut tokens = posted.split_whitespace();
    let magnitude = match tokens.next().and_then(leading_integer) {
        Some(magnitude) => magnitude,
        None => return Recency::Unknown,
    };
    let unit = match tokens.next() {
        Some(unit) => unit.to_lowercase(),
        None => return Recency::Unknown,
    };
    if unit.contains("minute") {
        return Recency::Minutes(magnitude);
    }
    if !unit.contains("hour") {
        log::debug!("posted unit '{}' in '{}' is counted as hours", unit, posted);
    }
    magnitude.checked_mul(60).map_or(Recency::Unknown, Recency::Minutes)
}

/// An optional sign followed by digits; whatever follows the digits is ignored.
fn leading_integer(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(|c: char| c == '+' || c == '-'));
    let digits_len = token[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len() - sign_len);
    if digits_len == 0 {
        return None;
    }
    token[..sign_len + digits_len].parse().ok()
}
