use crate::error::{PedigreeError, Result};
use csv;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One line of a family file: a member, whether it has the power, and its
/// parents (none or exactly two).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    has_power: bool,
    parents: Vec<String>,
}

impl Record {
    pub fn new(name: &str, has_power: bool, parents: Vec<String>) -> Result<Self> {
        if name.is_empty() {
            return Err(PedigreeError::MalformedRecord(
                "member name is empty".to_string(),
            ));
        }
        if !(parents.is_empty() || parents.len() == 2) {
            return Err(PedigreeError::MalformedRecord(format!(
                "'{}' lists {} parent(s), expected none or two",
                name,
                parents.len()
            )));
        }
        Ok(Self {
            name: name.into(),
            has_power,
            parents,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_power(&self) -> bool {
        self.has_power
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }
}

/// Splits `Name[0]` / `Name[1]` into the name and the power flag.
fn parse_member_field(field: &str) -> Option<(&str, bool)> {
    let (name, has_power) = if let Some(name) = field.strip_suffix("[1]") {
        (name, true)
    } else if let Some(name) = field.strip_suffix("[0]") {
        (name, false)
    } else {
        return None;
    };
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some((name, has_power))
    }
}

/// Produces `Record`s from `=` delimited family data
///
/// `RecordReader` implements Iterator so it can be passed
/// directly to `FamilyGraph::observe()`
pub struct RecordReader {
    records: csv::StringRecordsIntoIter<Box<dyn Read>>,
    parent_separator: String,
}

impl RecordReader {
    fn new(records: csv::StringRecordsIntoIter<Box<dyn Read>>, parent_separator: &str) -> Self {
        Self {
            records,
            parent_separator: parent_separator.to_owned(),
        }
    }

    fn parse(&self, row: &csv::StringRecord) -> Result<Record> {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let malformed = |reason: &str| {
            PedigreeError::MalformedRecord(format!("line {}: {}", line, reason))
        };

        let member = row.get(0).unwrap_or_default();
        let (name, has_power) = parse_member_field(member)
            .ok_or_else(|| malformed(&format!("'{}' is not of the form Name[0] or Name[1]", member)))?;

        let parents = match row.len() {
            1 => vec![],
            2 => {
                let parents: Vec<String> = row[1]
                    .split(self.parent_separator.as_str())
                    .map(|p| p.trim().to_string())
                    .collect();
                if parents.iter().any(|p| p.is_empty()) {
                    return Err(malformed(&format!("empty parent name in '{}'", &row[1])));
                }
                parents
            }
            n => {
                return Err(malformed(&format!(
                    "expected at most one parent list, found {} fields",
                    n
                )))
            }
        };

        Record::new(name, has_power, parents).map_err(|e| match e {
            PedigreeError::MalformedRecord(reason) => malformed(&reason),
            other => other,
        })
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Result<Record>> {
        loop {
            match self.records.next()? {
                Ok(row) => {
                    // Whitespace-only lines come through as a single empty field.
                    if row.iter().all(|field| field.is_empty()) {
                        continue;
                    }
                    return Some(self.parse(&row));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

pub struct RecordReaderBuilder {
    delimiter: u8,
    parent_separator: String,
    comment: Option<u8>,
}

impl RecordReaderBuilder {
    /// Construct a new record reader builder
    pub fn new() -> Self {
        Self {
            delimiter: b'=',
            parent_separator: "+".to_owned(),
            comment: None,
        }
    }

    /// Byte separating the member from its parents.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Separator between the two parent names.
    pub fn parent_separator(&mut self, parent_separator: &str) -> &mut Self {
        self.parent_separator = parent_separator.to_owned();
        self
    }

    /// Lines starting with this byte are ignored.
    pub fn comment(&mut self, comment: Option<u8>) -> &mut Self {
        self.comment = comment;
        self
    }

    pub fn from_reader(&self, reader: Box<dyn Read>) -> RecordReader {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .comment(self.comment)
            .from_reader(reader);

        RecordReader::new(rdr.into_records(), &self.parent_separator)
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<RecordReader> {
        let path = path.as_ref();
        log::info!("Reading family records from {}", path.display());
        let file = File::open(path)?;
        Ok(self.from_reader(Box::new(file)))
    }
}

impl Default for RecordReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
