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

use thiserror::Error;

/// Returned when a structured phone number cannot be converted to its
/// canonical representation: the region code is not in the table, or the
/// national number is empty once reduced to digits.
///
/// Carries both fields exactly as the caller supplied them, so the failure
/// can be reported against the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid country code or empty number: {region}|{number}")]
pub struct InvalidNumberError {
    /// Region code as supplied, before validation.
    pub region: String,
    /// National number as supplied, before digit filtering.
    pub number: String,
}

/// Raised while building the region table from a territory metadata
/// document that cannot be scanned at all.
///
/// This is a startup condition, not a caller-facing validation outcome: no
/// phone-number operation can run without the table, so the singleton path
/// treats it as fatal. Individual ill-formed territory records do not
/// produce this error, they are skipped during the load.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Malformed territory metadata: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed territory attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
}
