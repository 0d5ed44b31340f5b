// Copyright 2022 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Provides the [`Ttl`] structure for DNS RR TTLs.

use std::fmt;

////////////////////////////////////////////////////////////////////////
// TTLS                                                               //
////////////////////////////////////////////////////////////////////////

/// The time to live (TTL) of a DNS record, in seconds.
///
/// [RFC 2181 § 8] clarified that TTL values are unsigned integers
/// between 0 and 2³¹ - 1, inclusive. Zone files may nonetheless contain
/// longer digit strings, so [`Ttl::from_digits`] saturates at
/// [`Ttl::MAX`] instead of failing.
///
/// [RFC 2181 § 8]: https://datatracker.ietf.org/doc/html/rfc2181#section-8
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Ttl(u32);

impl Ttl {
    /// The largest TTL permitted by RFC 2181 § 8.
    pub const MAX: Ttl = Ttl(i32::MAX as u32);

    /// Creates a [`Ttl`] of `secs` seconds, saturating at
    /// [`Ttl::MAX`].
    pub const fn from_secs(secs: u32) -> Self {
        if secs > Self::MAX.0 {
            Self::MAX
        } else {
            Self(secs)
        }
    }

    /// Converts a string of ASCII decimal digits into a [`Ttl`],
    /// saturating at [`Ttl::MAX`]. Returns [`None`] if `digits` is
    /// empty or contains anything other than ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut value: u32 = 0;
        for digit in digits.bytes() {
            value = value
                .saturating_mul(10)
                .saturating_add(u32::from(digit - b'0'));
        }
        Some(Self::from(value))
    }
}

impl From<u32> for Ttl {
    fn from(raw: u32) -> Self {
        Self::from_secs(raw)
    }
}

impl From<Ttl> for u32 {
    fn from(ttl: Ttl) -> Self {
        ttl.0
    }
}

impl fmt::Debug for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_ttls_are_not_modified() {
        let i32_max = i32::MAX as u32;
        assert_eq!(u32::from(Ttl::from(0)), 0);
        assert_eq!(u32::from(Ttl::from(23)), 23);
        assert_eq!(u32::from(Ttl::from(i32_max)), i32_max);
    }

    #[test]
    fn large_ttls_saturate() {
        assert_eq!(Ttl::from(i32::MAX as u32 + 1), Ttl::MAX);
        assert_eq!(Ttl::from_digits("99999999999999999999"), Some(Ttl::MAX));
    }

    #[test]
    fn from_digits_rejects_non_digits() {
        assert_eq!(Ttl::from_digits("3600"), Some(Ttl::from(3600)));
        assert_eq!(Ttl::from_digits(""), None);
        assert_eq!(Ttl::from_digits("1h"), None);
        assert_eq!(Ttl::from_digits("-5"), None);
    }
}
