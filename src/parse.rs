//! Textual map-format parser.
//!
//! One city per line: `Name dir=Destination dir=Destination ...`, tokens
//! separated by whitespace, blank lines ignored. All malformed input is
//! rejected here so the simulation core can assume a structurally valid
//! graph: unique city names, labels within the four-direction alphabet,
//! and every road ending at a declared city.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::model::{City, Direction, World};

#[derive(Debug)]
pub enum ParseError {
    Io(io::Error),
    /// A road token without `=` or with an empty destination.
    BadRoad { line: usize, token: String },
    /// A road label outside {north, south, east, west}.
    UnknownDirection { line: usize, token: String },
    /// The same city declared on two lines.
    DuplicateCity { line: usize, name: String },
    /// Two roads with the same label leaving one city. Parallel labeled
    /// roads are unsupported by design.
    DuplicateRoad { line: usize, direction: Direction },
    /// A road ending at a city no line declares.
    UnknownDestination { city: String, destination: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "failed to read map: {err}"),
            ParseError::BadRoad { line, token } => {
                write!(f, "line {line}: malformed road token {token:?}")
            }
            ParseError::UnknownDirection { line, token } => {
                write!(f, "line {line}: unknown direction {token:?}")
            }
            ParseError::DuplicateCity { line, name } => {
                write!(f, "line {line}: city {name:?} declared twice")
            }
            ParseError::DuplicateRoad { line, direction } => {
                write!(f, "line {line}: duplicate {direction} road")
            }
            ParseError::UnknownDestination { city, destination } => {
                write!(f, "road from {city:?} ends at undeclared city {destination:?}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Io(err)
    }
}

/// Parse a map into a [`World`] with an empty alien registry.
pub fn parse_world(input: &str) -> Result<World, ParseError> {
    let mut world = World::new();
    for (index, raw_line) in input.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw_line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue; // blank line
        };
        let mut roads = BTreeMap::new();
        for token in tokens {
            let Some((label, destination)) = token.split_once('=') else {
                return Err(ParseError::BadRoad {
                    line,
                    token: token.to_string(),
                });
            };
            if destination.is_empty() {
                return Err(ParseError::BadRoad {
                    line,
                    token: token.to_string(),
                });
            }
            let direction =
                Direction::parse(label).ok_or_else(|| ParseError::UnknownDirection {
                    line,
                    token: label.to_string(),
                })?;
            if roads.insert(direction, destination.to_string()).is_some() {
                return Err(ParseError::DuplicateRoad { line, direction });
            }
        }
        let mut city = City::new(name);
        city.roads = roads;
        if world.cities.insert(name.to_string(), city).is_some() {
            return Err(ParseError::DuplicateCity {
                line,
                name: name.to_string(),
            });
        }
    }

    // Roads must end at declared cities; the core never re-validates.
    for city in world.cities.values() {
        for destination in city.roads.values() {
            if !world.cities.contains_key(destination) {
                return Err(ParseError::UnknownDestination {
                    city: city.name.clone(),
                    destination: destination.clone(),
                });
            }
        }
    }

    Ok(world)
}

/// Read and parse a map file.
pub fn parse_world_file(path: &Path) -> Result<World, ParseError> {
    parse_world(&fs::read_to_string(path)?)
}
