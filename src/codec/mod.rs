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

use std::sync::LazyLock;

use log::error;

use crate::errors::InvalidNumberError;
use crate::phone_number::PhoneNumber;
use crate::regions::RegionTable;
use crate::string_util::strip_non_digits;

/// Process-wide codec over the embedded territory metadata, built on first
/// use and never rebuilt.
pub static PHONE_NUMBER_CODEC: LazyLock<PhoneNumberCodec> =
    LazyLock::new(PhoneNumberCodec::new);

/// Parses region-tagged phone number strings and converts structured
/// numbers to the canonical `REGION|+CODEnumber` representation.
///
/// All operations take `&self` and are pure; the codec holds nothing but
/// the immutable region table.
pub struct PhoneNumberCodec {
    regions: RegionTable,
}

impl PhoneNumberCodec {
    /// Creates a codec over the embedded metadata.
    ///
    /// Panics when the compiled-in document cannot be parsed: without a
    /// region table no phone-number operation can be served.
    pub fn new() -> Self {
        let regions = match RegionTable::from_embedded() {
            Ok(regions) => regions,
            Err(err) => {
                let message = format!("Could not parse compiled-in territory metadata: {err}");
                error!("{message}");
                panic!("{message}");
            }
        };
        Self { regions }
    }

    /// Creates a codec over a caller-supplied table, for embedders and
    /// tests that bring their own metadata.
    pub fn for_regions(regions: RegionTable) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Parses a stored or free-form number string. Never fails: anything
    /// without a recognizable `REGION|+...` structure comes back with an
    /// empty region and the input preserved verbatim in `number`, so
    /// legacy free-form data survives a parse/serialize cycle unchanged.
    pub fn parse(&self, raw_number: &str) -> PhoneNumber {
        let trimmed = raw_number.trim();
        if trimmed.is_empty() {
            return PhoneNumber::default();
        }
        let Some(region) = self.get_region(trimmed) else {
            return PhoneNumber::new("", raw_number);
        };
        match self.extract_national_number(trimmed, region) {
            Some(number) => PhoneNumber::new(region, number),
            None => PhoneNumber::new("", raw_number),
        }
    }

    /// Region hint of a stored number string: the text before the first
    /// `|`, when that text names a supported region. Whitespace around the
    /// whole string is tolerated.
    pub fn get_region<'a>(&self, raw_number: &'a str) -> Option<&'a str> {
        let trimmed = raw_number.trim();
        let (hint, _) = trimmed.split_once('|')?;
        self.regions.is_supported_region(hint).then_some(hint)
    }

    /// National number of a region-hinted string: everything after the `|`,
    /// which must start with `+`, minus the region's calling code.
    ///
    /// The calling code is removed as a literal substring, first occurrence
    /// wherever it appears, not as a positional prefix. A number whose
    /// digits repeat the calling code can therefore lose an occurrence past
    /// the front; stored canonical strings always carry it at the front.
    fn extract_national_number(&self, trimmed: &str, region: &str) -> Option<String> {
        let (_, international) = trimmed.split_once('|')?;
        if international.is_empty() || !international.starts_with('+') {
            return None;
        }
        let calling_code = self.regions.calling_code(region)?;
        let prefixed_code = fast_cat::concat_str!("+", calling_code);
        Some(international.replacen(prefixed_code.as_str(), "", 1))
    }

    /// Converts a structured number to its canonical representation.
    ///
    /// The all-empty number converts to the empty string; that is the
    /// "nothing to convert" success case. Otherwise the national number is
    /// reduced to its digits and emitted as
    /// `{region}|+{calling code}{digits}`.
    pub fn to_canonical(&self, phone_number: &PhoneNumber) -> Result<String, InvalidNumberError> {
        if phone_number.country_code.is_empty() && phone_number.number.is_empty() {
            return Ok(String::new());
        }
        let digits = strip_non_digits(&phone_number.number);
        match self.regions.region(&phone_number.country_code) {
            Some(region) if !digits.is_empty() => Ok(fast_cat::concat_str!(
                region.name(),
                "|+",
                region.calling_code(),
                digits.as_ref()
            )),
            _ => Err(InvalidNumberError {
                region: phone_number.country_code.clone(),
                number: phone_number.number.clone(),
            }),
        }
    }

    /// Best-effort variant of [`Self::to_canonical`] for callers that must
    /// not propagate the failure; the `Option` is the whole outcome.
    pub fn try_to_canonical(&self, phone_number: &PhoneNumber) -> Option<String> {
        self.to_canonical(phone_number).ok()
    }

    /// Lenient variant used when round-tripping free-form numbers for
    /// storage: the canonical string when the number converts, otherwise
    /// the national number exactly as the caller supplied it (empty when
    /// it is empty).
    pub fn to_parsable_string(&self, phone_number: &PhoneNumber) -> String {
        self.to_canonical(phone_number)
            .unwrap_or_else(|_| phone_number.number.clone())
    }

    /// Region/label pairs for populating a selection widget; see
    /// [`RegionTable::display_options`].
    pub fn display_options(&self) -> &[(String, String)] {
        self.regions.display_options()
    }
}
