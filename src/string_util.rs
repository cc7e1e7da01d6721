// Copyright (C) 2025 The region-e164 Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

/// Removes every character outside ASCII `0`-`9` from the input, keeping
/// the surviving digits in order. Returns `Cow::Borrowed` when there is
/// nothing to remove, so already-clean (or empty) input passes through in
/// its original representation.
///
/// The set of removed characters is open ended: the filter is defined by
/// what it keeps, not by a blacklist, so decorative punctuation from any
/// locale's formatting convention (Unicode dashes, ideographic spaces,
/// zero-width characters, bracket variants) is dropped without being
/// enumerated anywhere.
pub fn strip_non_digits(input: &str) -> Cow<'_, str> {
    match input.find(|c: char| !c.is_ascii_digit()) {
        None => Cow::Borrowed(input),
        Some(clean_until) => {
            let mut digits = String::with_capacity(input.len());
            digits.push_str(&input[..clean_until]);
            digits.extend(input[clean_until..].chars().filter(char::is_ascii_digit));
            Cow::Owned(digits)
        }
    }
}
