//! Data models for the planet catalog
//!
//! This module contains the record types parsed from catalog lines: a shared
//! [`PlanetBase`] and three variants (generic, habitable, mining) wrapped in
//! the [`Record`] sum type. Every record exposes the same [`Record::fields`]
//! projection so reporting code never has to branch on the variant.

use crate::app::services::record_parser::validators::{
    ensure_not_blank, ensure_positive, ensure_single_line, validate_discovery_date,
};
use crate::constants::fields;
use crate::error::InvalidRecordData;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

type RecordResult<T> = std::result::Result<T, InvalidRecordData>;

// =============================================================================
// Record Kinds
// =============================================================================

/// The three record variants a catalog line can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Generic,
    Habitable,
    Mining,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Generic => "generic",
            RecordKind::Habitable => "habitable",
            RecordKind::Mining => "mining",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Base Fields
// =============================================================================

/// Fields shared by every celestial body record
///
/// Invariants are checked once in [`PlanetBase::new`]; fields are private so
/// a constructed value can never drift out of range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetBase {
    name: String,
    discovery_date: String,
    radius: f64,
    mass: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_to_sun: Option<f64>,
}

impl PlanetBase {
    /// Create base fields with validation
    ///
    /// Checks run in a fixed order (date, radius, mass, name) so the same bad
    /// input always reports the same message.
    pub fn new(
        name: impl Into<String>,
        discovery_date: impl Into<String>,
        radius: f64,
        mass: f64,
    ) -> RecordResult<Self> {
        let name = name.into();
        let discovery_date = discovery_date.into();

        validate_discovery_date(&discovery_date)?;
        ensure_positive(fields::RADIUS, radius)?;
        ensure_positive(fields::MASS, mass)?;
        ensure_not_blank(fields::NAME, &name)?;
        ensure_single_line(fields::NAME, &name)?;

        Ok(Self {
            name,
            discovery_date,
            radius,
            mass,
            distance_to_sun: None,
        })
    }

    /// Attach the distance to the Sun (km)
    pub fn with_distance_to_sun(mut self, distance: f64) -> Self {
        self.distance_to_sun = Some(distance);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn discovery_date(&self) -> &str {
        &self.discovery_date
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn distance_to_sun(&self) -> Option<f64> {
        self.distance_to_sun
    }

    fn project_into(&self, map: &mut FieldMap) {
        map.insert_text(fields::NAME, &self.name);
        map.insert_text(fields::DATE, &self.discovery_date);
        map.insert_number(fields::RADIUS, self.radius);
        map.insert_number(fields::MASS, self.mass);
        if let Some(distance) = self.distance_to_sun {
            map.insert_number(fields::DISTANCE, distance);
        }
    }
}

// =============================================================================
// Variants
// =============================================================================

/// A body with surface temperature and a habitability estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitablePlanet {
    #[serde(flatten)]
    base: PlanetBase,
    temperature: f64,
    habitability_score: f64,
}

impl HabitablePlanet {
    /// Habitability score is conventionally 0..1 but not range-checked
    pub fn new(base: PlanetBase, temperature: f64, habitability_score: f64) -> Self {
        Self {
            base,
            temperature,
            habitability_score,
        }
    }

    pub fn base(&self) -> &PlanetBase {
        &self.base
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn habitability_score(&self) -> f64 {
        self.habitability_score
    }
}

/// A body worth mining, with its main resource and extraction difficulty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiningPlanet {
    #[serde(flatten)]
    base: PlanetBase,
    resource: String,
    difficulty: String,
}

impl MiningPlanet {
    pub fn new(
        base: PlanetBase,
        resource: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> RecordResult<Self> {
        let resource = resource.into();
        let difficulty = difficulty.into();

        ensure_not_blank(fields::RESOURCE, &resource)?;
        ensure_single_line(fields::RESOURCE, &resource)?;
        ensure_not_blank(fields::DIFFICULTY, &difficulty)?;
        ensure_single_line(fields::DIFFICULTY, &difficulty)?;

        Ok(Self {
            base,
            resource,
            difficulty,
        })
    }

    pub fn base(&self) -> &PlanetBase {
        &self.base
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }
}

/// One validated catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Generic(PlanetBase),
    Habitable(HabitablePlanet),
    Mining(MiningPlanet),
}

impl Record {
    /// Build a generic record from raw values
    pub fn generic(
        name: impl Into<String>,
        discovery_date: impl Into<String>,
        radius: f64,
        mass: f64,
    ) -> RecordResult<Self> {
        Ok(Record::Generic(PlanetBase::new(
            name,
            discovery_date,
            radius,
            mass,
        )?))
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Generic(_) => RecordKind::Generic,
            Record::Habitable(_) => RecordKind::Habitable,
            Record::Mining(_) => RecordKind::Mining,
        }
    }

    pub fn base(&self) -> &PlanetBase {
        match self {
            Record::Generic(base) => base,
            Record::Habitable(planet) => planet.base(),
            Record::Mining(planet) => planet.base(),
        }
    }

    pub fn name(&self) -> &str {
        self.base().name()
    }

    pub fn discovery_date(&self) -> &str {
        self.base().discovery_date()
    }

    pub fn radius(&self) -> f64 {
        self.base().radius()
    }

    pub fn mass(&self) -> f64 {
        self.base().mass()
    }

    pub fn distance_to_sun(&self) -> Option<f64> {
        self.base().distance_to_sun()
    }

    /// Project the record into a field-name → value mapping
    ///
    /// Optional keys (`distance`, `temperature`/`habitability`,
    /// `resource`/`difficulty`) appear only when the record carries them.
    pub fn fields(&self) -> FieldMap {
        let mut map = FieldMap::default();
        self.base().project_into(&mut map);

        match self {
            Record::Generic(_) => {}
            Record::Habitable(planet) => {
                map.insert_number(fields::TEMPERATURE, planet.temperature);
                map.insert_number(fields::HABITABILITY, planet.habitability_score);
            }
            Record::Mining(planet) => {
                map.insert_text(fields::RESOURCE, &planet.resource);
                map.insert_text(fields::DIFFICULTY, &planet.difficulty);
            }
        }

        map
    }
}

impl From<PlanetBase> for Record {
    fn from(base: PlanetBase) -> Self {
        Record::Generic(base)
    }
}

impl From<HabitablePlanet> for Record {
    fn from(planet: HabitablePlanet) -> Self {
        Record::Habitable(planet)
    }
}

impl From<MiningPlanet> for Record {
    fn from(planet: MiningPlanet) -> Self {
        Record::Mining(planet)
    }
}

// =============================================================================
// Field Projection
// =============================================================================

/// A single projected value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }
}

/// Uniform key-value view of a record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<&'static str, FieldValue>);

impl FieldMap {
    fn insert_text(&mut self, key: &'static str, value: &str) {
        self.0.insert(key, FieldValue::Text(value.to_string()));
    }

    fn insert_number(&mut self, key: &'static str, value: f64) {
        self.0.insert(key, FieldValue::Number(value));
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_number)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The in-memory collection of records owned by a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records per variant
    pub fn count_by_kind(&self) -> BTreeMap<RecordKind, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.kind()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
