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

use std::collections::HashMap;

use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::errors::MetadataError;

/// Territory metadata the process-wide table is built from.
const PHONE_NUMBER_METADATA: &str = include_str!("../../resources/PhoneNumberMetadata.xml");

/// One territory record: a region and the calling code dialled to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
    calling_code: String,
}

impl Region {
    /// Two-letter uppercase region code, e.g. "CN".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calling code as a digit string, e.g. "86". May be empty when the
    /// source record carried an empty countryCode attribute.
    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }
}

/// Immutable region lookup table, built once from a territory metadata
/// document and read-only for the rest of the process lifetime.
pub struct RegionTable {
    regions: HashMap<String, Region>,
    display_options: Vec<(String, String)>,
}

impl RegionTable {
    /// Builds the table from the compiled-in metadata document.
    pub fn from_embedded() -> Result<Self, MetadataError> {
        Self::from_xml(PHONE_NUMBER_METADATA)
    }

    /// Builds the table from a caller-supplied territory document.
    ///
    /// Records with an ill-formed id or without a countryCode attribute are
    /// skipped; a duplicated id keeps the later record. Only a document
    /// that cannot be scanned at all is an error.
    pub fn from_xml(xml: &str) -> Result<Self, MetadataError> {
        let regions = parse_territories(xml)?;
        let display_options = build_display_options(&regions);
        Ok(Self {
            regions,
            display_options,
        })
    }

    pub fn is_supported_region(&self, region_code: &str) -> bool {
        self.regions.contains_key(region_code)
    }

    /// Calling code for a supported region, `None` otherwise.
    pub fn calling_code(&self, region_code: &str) -> Option<&str> {
        self.region(region_code).map(Region::calling_code)
    }

    pub fn region(&self, region_code: &str) -> Option<&Region> {
        self.regions.get(region_code)
    }

    /// Region/label pairs for populating a selection widget, sorted
    /// ascending by label.
    pub fn display_options(&self) -> &[(String, String)] {
        &self.display_options
    }
}

fn parse_territories(xml: &str) -> Result<HashMap<String, Region>, MetadataError> {
    let mut regions = HashMap::new();
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element)
                if element.local_name().as_ref() == b"territory" =>
            {
                if let Some(region) = parse_territory(&element)? {
                    if let Some(previous) = regions.insert(region.name.clone(), region) {
                        debug!(
                            "Territory {} defined more than once, keeping the later record",
                            previous.name
                        );
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(regions)
}

/// Reads one territory record, or `None` when the record does not describe
/// a region this table can hold.
fn parse_territory(element: &BytesStart<'_>) -> Result<Option<Region>, MetadataError> {
    let Some(id) = attribute(element, b"id")? else {
        return Ok(None);
    };
    if !is_valid_region_name(&id) {
        // Non-geographic entries (id "001" and friends) land here.
        debug!("Skipping territory with non-region id {:?}", id);
        return Ok(None);
    }
    let Some(calling_code) = attribute(element, b"countryCode")? else {
        warn!("Skipping territory {} without a countryCode attribute", id);
        return Ok(None);
    };
    Ok(Some(Region {
        name: id,
        calling_code,
    }))
}

/// Trimmed attribute value, or `None` when the attribute is absent. An
/// attribute that is present but empty stays present.
fn attribute(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, MetadataError> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            let value = String::from_utf8_lossy(&attr.value);
            return Ok(Some(value.trim().to_owned()));
        }
    }
    Ok(None)
}

fn is_valid_region_name(id: &str) -> bool {
    id.len() == 2 && id.bytes().all(|b| b.is_ascii_uppercase())
}

/// Derives the label-sorted (region, label) list exposed to UI callers.
fn build_display_options(regions: &HashMap<String, Region>) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = regions
        .values()
        .map(|region| (region.name.clone(), display_label(region)))
        .collect();
    // Label order, region code as the tie-break, so the result is
    // deterministic regardless of map iteration order.
    options.sort_unstable_by(|a, b| (&a.1, &a.0).cmp(&(&b.1, &b.0)));
    options
}

/// `"CN (+86)"`, except that GB is displayed as UK.
fn display_label(region: &Region) -> String {
    let displayed = if region.name == "GB" {
        "UK"
    } else {
        region.name.as_str()
    };
    fast_cat::concat_str!(displayed, " (+", &region.calling_code, ")")
}
