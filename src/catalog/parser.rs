//! Parser for the airport reference CSV.
//!
//! The dataset has a header row followed by one airport per line:
//!
//! ```text
//! AirportID,AirportName
//! 10397,Hartsfield-Jackson Atlanta International
//! 12892,"Los Angeles International, CA"
//! ```
//!
//! Fields may be wrapped in double quotes; inside quotes a comma is literal
//! and `""` is an escaped quote.

use std::io::{BufRead, BufReader, Read};

use crate::models::Airport;

/// Expected header columns
const ID_COLUMN: &str = "AirportID";
const NAME_COLUMN: &str = "AirportName";

/// Error type for airport CSV parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing header row")]
    MissingHeader,
    #[error("Header must contain AirportID and AirportName columns, found: {0}")]
    InvalidHeader(String),
    #[error("Invalid airport row at line {line}: {message}")]
    InvalidRow { line: usize, message: String },
}

/// Parser for the airport reference CSV.
pub struct AirportCsvParser;

impl AirportCsvParser {
    /// Parse all airports, skipping rows that fail to parse.
    ///
    /// Fails only if the input cannot be read or the header is wrong.
    pub fn parse_all<R: Read>(reader: R) -> Result<Vec<Airport>, ParseError> {
        let mut lines = BufReader::new(reader).lines();

        let header = lines.next().ok_or(ParseError::MissingHeader)??;
        let (id_idx, name_idx) = Self::header_columns(&header)?;

        let mut airports = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            // +2: one for the header, one for 1-based numbering
            match Self::parse_row(&line, id_idx, name_idx, idx + 2) {
                Ok(airport) => airports.push(airport),
                Err(e) => log::warn!("Skipping airport row: {}", e),
            }
        }
        Ok(airports)
    }

    fn header_columns(header: &str) -> Result<(usize, usize), ParseError> {
        let columns = split_fields(header.trim_start_matches('\u{feff}'));
        let find = |name: &str| {
            columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(name))
        };

        match (find(ID_COLUMN), find(NAME_COLUMN)) {
            (Some(id), Some(name)) => Ok((id, name)),
            _ => Err(ParseError::InvalidHeader(header.to_string())),
        }
    }

    fn parse_row(
        line: &str,
        id_idx: usize,
        name_idx: usize,
        line_no: usize,
    ) -> Result<Airport, ParseError> {
        let fields = split_fields(line);
        let invalid = |message: String| ParseError::InvalidRow {
            line: line_no,
            message,
        };

        let raw_id = fields
            .get(id_idx)
            .ok_or_else(|| invalid("missing id".to_string()))?;
        let id: i32 = raw_id
            .trim()
            .parse()
            .map_err(|_| invalid(format!("bad id '{}'", raw_id)))?;

        let name = fields
            .get(name_idx)
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| invalid("missing name".to_string()))?;

        Ok(Airport::new(id, name))
    }
}

/// Split one CSV line into fields, honouring double-quoted sections
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
