//! Typed CSV tables
//!
//! Column binding happens once, at load time. The lookup-demo tables bind by
//! position (the source files share the OWID layout: Entity, Code, then value
//! columns) and normalize their entity column; the assistant tables
//! deserialize by exact header name and keep `Entity` verbatim, because the
//! aggregator matches the exact user-entered string.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

use crate::error::DatasetError;

/// Trim and lower-case a country/entity name for lookup-demo matching.
pub fn normalize_entity(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One row of the comfort-speaking table: share of respondents very /
/// somewhat / not at all comfortable discussing anxiety or depression.
#[derive(Debug, Clone)]
pub struct ComfortRow {
    pub entity: String,
    pub very: Option<f64>,
    pub somewhat: Option<f64>,
    pub not_at_all: Option<f64>,
}

/// The comfort-speaking table, entity-normalized at load.
#[derive(Debug, Clone)]
pub struct ComfortTable {
    pub rows: Vec<ComfortRow>,
}

impl ComfortTable {
    /// Load from CSV. The three share columns are bound from positions 2..=4.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
        let headers = reader.headers().map_err(|e| csv_error(path, e))?;
        if headers.len() < 5 {
            return Err(DatasetError::MissingColumn {
                table: display_name(path),
                column: "share columns (expected at positions 2..=4)".into(),
            });
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| csv_error(path, e))?;
            let entity = normalize_entity(record.get(0).unwrap_or(""));
            rows.push(ComfortRow {
                entity,
                very: parse_cell(record.get(2)),
                somewhat: parse_cell(record.get(3)),
                not_at_all: parse_cell(record.get(4)),
            });
        }
        tracing::debug!(rows = rows.len(), path = %path.display(), "loaded comfort table");
        Ok(Self { rows })
    }

    /// First row matching the normalized country name, in file order.
    pub fn find(&self, country: &str) -> Option<&ComfortRow> {
        let needle = normalize_entity(country);
        self.rows.iter().find(|r| r.entity == needle)
    }
}

/// One row of a single-statistic table. The value cell stays textual: the
/// policy table carries yes/no answers, the others numbers.
#[derive(Debug, Clone)]
pub struct ValueRow {
    pub entity: String,
    pub value: String,
}

/// A table whose statistic lives in the last column, entity-normalized at load.
#[derive(Debug, Clone)]
pub struct SingleValueTable {
    pub rows: Vec<ValueRow>,
}

impl SingleValueTable {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
        let headers = reader.headers().map_err(|e| csv_error(path, e))?;
        let last = match headers.len().checked_sub(1) {
            Some(last) if last >= 1 => last,
            _ => {
                return Err(DatasetError::MissingColumn {
                    table: display_name(path),
                    column: "value column (expected after Entity)".into(),
                })
            }
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| csv_error(path, e))?;
            rows.push(ValueRow {
                entity: normalize_entity(record.get(0).unwrap_or("")),
                value: record.get(last).unwrap_or("").trim().to_string(),
            });
        }
        tracing::debug!(rows = rows.len(), path = %path.display(), "loaded single-value table");
        Ok(Self { rows })
    }

    /// First row matching the normalized country name, in file order.
    pub fn find(&self, country: &str) -> Option<&ValueRow> {
        let needle = normalize_entity(country);
        self.rows.iter().find(|r| r.entity == needle)
    }
}

/// One row of the processed prevalence table. Value columns are optional:
/// empty cells deserialize to `None` and are excluded from averages.
#[derive(Debug, Clone, Deserialize)]
pub struct PrevalenceRow {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Major depression")]
    pub major_depression: Option<f64>,
    #[serde(rename = "Bipolar disorder")]
    pub bipolar_disorder: Option<f64>,
    #[serde(rename = "Eating disorders")]
    pub eating_disorders: Option<f64>,
    #[serde(rename = "Dysthymia")]
    pub dysthymia: Option<f64>,
    #[serde(rename = "Schizophrenia")]
    pub schizophrenia: Option<f64>,
    #[serde(rename = "Anxiety disorders")]
    pub anxiety_disorders: Option<f64>,
}

/// One row of the coping-strategies table.
#[derive(Debug, Clone, Deserialize)]
pub struct CopingRow {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Religious/Spiritual Activities")]
    pub religion: Option<f64>,
    #[serde(rename = "Improved Lifestyle")]
    pub lifestyle: Option<f64>,
    #[serde(rename = "Changed Work Situation")]
    pub work: Option<f64>,
    #[serde(rename = "Changed Relationships")]
    pub relationships: Option<f64>,
    #[serde(rename = "Talked to Friends/Family")]
    pub social: Option<f64>,
    #[serde(rename = "Took Medication")]
    pub medication: Option<f64>,
    #[serde(rename = "Spent Time Outdoors")]
    pub outdoors: Option<f64>,
    #[serde(rename = "Talked to Professional")]
    pub professional: Option<f64>,
}

/// Load a header-addressed table into typed rows.
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| csv_error(path, e))?);
    }
    Ok(rows)
}

fn parse_cell(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|v| v.trim().parse::<f64>().ok())
}

fn csv_error(path: &Path, source: csv::Error) -> DatasetError {
    let message = source.to_string();
    match source.into_kind() {
        csv::ErrorKind::Io(io) => DatasetError::Io {
            path: path.to_path_buf(),
            source: io,
        },
        _ => DatasetError::Csv {
            path: path.to_path_buf(),
            message,
        },
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn comfort_table_normalizes_entity_and_binds_positions() {
        let file = write_csv(
            "Entity,Code,Very,Somewhat,Not at all\n\
             \x20 India ,IND,42.5,30.1,20.4\n\
             Norway,NOR,55.0,25.0,10.0\n",
        );
        let table = ComfortTable::load(file.path()).unwrap();

        let row = table.find("INDIA").unwrap();
        assert_eq!(row.entity, "india");
        assert_eq!(row.very, Some(42.5));
        assert_eq!(row.somewhat, Some(30.1));
        assert_eq!(row.not_at_all, Some(20.4));

        assert!(table.find("france").is_none());
    }

    #[test]
    fn comfort_table_rejects_narrow_files() {
        let file = write_csv("Entity,Code\nIndia,IND\n");
        let err = ComfortTable::load(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn { .. }));
    }

    #[test]
    fn single_value_table_takes_last_column() {
        let file = write_csv(
            "Entity,Code,Year,Share\n\
             India,IND,2020,71.2\n\
             India,IND,2015,60.0\n",
        );
        let table = SingleValueTable::load(file.path()).unwrap();

        // Duplicate entities: first in file order wins.
        let row = table.find(" india ").unwrap();
        assert_eq!(row.value, "71.2");
    }

    #[test]
    fn prevalence_rows_keep_entity_verbatim_and_none_for_blanks() {
        let file = write_csv(
            "Entity,Year,Major depression,Bipolar disorder,Eating disorders,Dysthymia,Schizophrenia,Anxiety disorders\n\
             India,2019,3.9,,0.2,1.1,0.3,3.0\n",
        );
        let rows: Vec<PrevalenceRow> = load_rows(file.path()).unwrap();
        assert_eq!(rows[0].entity, "India");
        assert_eq!(rows[0].major_depression, Some(3.9));
        assert_eq!(rows[0].bipolar_disorder, None);
    }

    #[test]
    fn missing_file_reports_io_error_with_path() {
        let err = ComfortTable::load(Path::new("does-not-exist.csv")).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(message.contains("does-not-exist.csv"));
    }
}
