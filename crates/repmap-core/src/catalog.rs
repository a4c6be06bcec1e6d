//! Representative catalog: state options and the district lookup table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// File name of the state → representatives document.
pub const STATE_OPTIONS_FILE: &str = "stateOptions.json";
/// File name of the district → representative document.
pub const DISTRICT_TO_REP_FILE: &str = "districtToRep.json";

/// Mapping from state code to an ordered list of representative names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepresentativeOptions(BTreeMap<String, Vec<String>>);

impl RepresentativeOptions {
    pub fn new(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }

    /// Representatives listed for a state, in document order.
    pub fn reps_for(&self, abbr: &str) -> &[String] {
        self.0.get(abbr).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` is a listed representative of `abbr`.
    pub fn contains(&self, abbr: &str, name: &str) -> bool {
        self.reps_for(abbr).iter().any(|rep| rep == name)
    }

    /// First state listing `name`, if any.
    pub fn state_of(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, reps)| reps.iter().any(|rep| rep == name))
            .map(|(abbr, _)| abbr.as_str())
    }

    pub fn state_count(&self) -> usize {
        self.0.len()
    }

    pub fn rep_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Mapping from a district identifier (the SVG element id) to a representative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictToRep(BTreeMap<String, String>);

impl DistrictToRep {
    pub fn new(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }

    pub fn rep_for(&self, district: &str) -> Option<&str> {
        self.0.get(district).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Both static lookup tables, loaded once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub options: RepresentativeOptions,
    pub districts: DistrictToRep,
}

impl Catalog {
    pub fn new(options: RepresentativeOptions, districts: DistrictToRep) -> Self {
        Self { options, districts }
    }

    /// Decode the two JSON documents as served under `/data`.
    pub fn from_json(state_options: &str, district_to_rep: &str) -> CoreResult<Self> {
        let options = serde_json::from_str(state_options).map_err(|source| {
            CoreError::InvalidDocument {
                document: STATE_OPTIONS_FILE,
                source,
            }
        })?;
        let districts = serde_json::from_str(district_to_rep).map_err(|source| {
            CoreError::InvalidDocument {
                document: DISTRICT_TO_REP_FILE,
                source,
            }
        })?;
        Ok(Self { options, districts })
    }

    /// Districts whose representative is not listed under any state.
    pub fn orphaned_districts(&self) -> Vec<(&str, &str)> {
        self.districts
            .iter()
            .filter(|(_, rep)| self.options.state_of(rep).is_none())
            .collect()
    }
}
