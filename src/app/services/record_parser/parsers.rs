//! Per-variant line parsers
//!
//! Every parser applies the same rules in the same order and stops at the
//! first one that fails:
//!
//! 1. tokenize (`parse_error`)
//! 2. minimum token count (`insufficient_data`)
//! 3. numeric conversion (`number_conversion_error`)
//! 4. semantic validation in the record constructors (`invalid_values`)
//!
//! Tokens past the variant's minimum are ignored.

use super::tokenizer::tokenize;
use super::validators::parse_number;
use crate::app::models::{HabitablePlanet, MiningPlanet, PlanetBase, Record, RecordKind};
use crate::constants::{arity, fields};
use crate::error::InvalidRecordData;
use tracing::trace;

type ParseResult = std::result::Result<Record, InvalidRecordData>;

/// Raw base fields pulled out of a token list, numbers already converted
struct BaseTokens<'a> {
    name: &'a str,
    date: &'a str,
    radius: f64,
    mass: f64,
}

impl BaseTokens<'_> {
    fn build(self) -> Result<PlanetBase, InvalidRecordData> {
        PlanetBase::new(self.name, self.date, self.radius, self.mass)
    }
}

/// Tokenize and enforce the minimum arity for `kind`
fn tokens_for(
    line: &str,
    kind: RecordKind,
    min_tokens: usize,
) -> Result<Vec<String>, InvalidRecordData> {
    let tokens = tokenize(line).map_err(|e| InvalidRecordData::parse_error(e.to_string()))?;

    if tokens.len() < min_tokens {
        return Err(InvalidRecordData::insufficient_data(format!(
            "{} record needs at least {} fields, found {}",
            kind,
            min_tokens,
            tokens.len()
        )));
    }

    trace!("{} parser: {} tokens", kind, tokens.len());
    Ok(tokens)
}

fn base_tokens(tokens: &[String]) -> Result<BaseTokens<'_>, InvalidRecordData> {
    Ok(BaseTokens {
        name: &tokens[0],
        date: &tokens[1],
        radius: parse_number(fields::RADIUS, &tokens[2])?,
        mass: parse_number(fields::MASS, &tokens[3])?,
    })
}

/// Parse `"<name>" <YYYY.MM.DD> <radius> <mass>`
pub fn parse_generic(line: &str) -> ParseResult {
    let tokens = tokens_for(line, RecordKind::Generic, arity::GENERIC)?;
    let base = base_tokens(&tokens)?;

    Ok(Record::Generic(base.build()?))
}

/// Parse `"<name>" <YYYY.MM.DD> <radius> <mass> <temperature> <habitability_score>`
pub fn parse_habitable(line: &str) -> ParseResult {
    let tokens = tokens_for(line, RecordKind::Habitable, arity::HABITABLE)?;
    let base = base_tokens(&tokens)?;
    let temperature = parse_number(fields::TEMPERATURE, &tokens[4])?;
    let habitability_score = parse_number(fields::HABITABILITY, &tokens[5])?;

    Ok(HabitablePlanet::new(base.build()?, temperature, habitability_score).into())
}

/// Parse `"<name>" <YYYY.MM.DD> <radius> <mass> "<resource>" "<difficulty>"`
pub fn parse_mining(line: &str) -> ParseResult {
    let tokens = tokens_for(line, RecordKind::Mining, arity::MINING)?;
    let base = base_tokens(&tokens)?;
    let resource = tokens[4].as_str();
    let difficulty = tokens[5].as_str();

    Ok(MiningPlanet::new(base.build()?, resource, difficulty)?.into())
}
