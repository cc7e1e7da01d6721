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

/// A structured phone number: a region hint plus the national number as it
/// was written.
///
/// Both fields may be empty. The all-empty value is the valid "no number"
/// state and converts to the empty canonical string rather than failing.
/// The codec never mutates a value it is given, it only reads the fields
/// and produces new instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumber {
    /// Two-letter uppercase region code (e.g. "CN"), or empty when no
    /// region is known.
    pub country_code: String,
    /// National number exactly as written, decorative punctuation and all,
    /// or empty.
    pub number: String,
}

impl PhoneNumber {
    pub fn new(country_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            number: number.into(),
        }
    }
}
