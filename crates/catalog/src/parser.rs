//! Parser for the Wikipedia movie plots CSV export.
//!
//! The source file has a header row naming the columns:
//! `Release Year, Title, Origin/Ethnicity, Director, Cast, Genre, Wiki Page, Plot`.
//! Plot fields are quoted and routinely contain commas, doubled quotes and
//! embedded newlines, so records are split with a quote-aware reader rather
//! than per-line. Column positions are taken from the header, not assumed.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, MovieRecord};
use std::fs;
use std::path::Path;
use tracing::info;

/// Split CSV text into records of raw fields, honoring quoted fields.
///
/// Returns each record with the line number it started on, for error
/// context. Blank lines are skipped. Fails on an unterminated quote.
fn read_records(content: &str, file: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_start = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                // A doubled quote inside a quoted field is a literal quote
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                '\r' => {} // CRLF line endings; the '\n' closes the record
                '\n' => {
                    line += 1;
                    fields.push(std::mem::take(&mut field));
                    // A lone empty field is a blank line, not a record
                    if fields.len() > 1 || !fields[0].is_empty() {
                        records.push((record_start, std::mem::take(&mut fields)));
                    } else {
                        fields.clear();
                    }
                    record_start = line;
                }
                _ => field.push(c),
            }
        }
    }

    if in_quotes {
        return Err(CatalogError::ParseError {
            file: file.to_string(),
            line,
            reason: "unterminated quoted field".to_string(),
        });
    }

    // Final record when the file doesn't end with a newline
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push((record_start, fields));
    }

    Ok(records)
}

/// Column positions resolved from the header row.
///
/// Every column except `Cast` is required; `Cast` is optional in the data
/// contract and maps to `None` when absent or empty.
#[derive(Debug)]
struct ColumnMap {
    title: usize,
    release_year: usize,
    origin: usize,
    director: usize,
    cast: Option<usize>,
    genre: usize,
    wiki_page: usize,
    plot: usize,
}

impl ColumnMap {
    fn from_header(header: &[String], file: &str) -> Result<Self> {
        let find = |column: &str| -> Result<usize> {
            header
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| CatalogError::MissingColumn {
                    file: file.to_string(),
                    column: column.to_string(),
                })
        };

        Ok(Self {
            title: find("Title")?,
            release_year: find("Release Year")?,
            origin: find("Origin/Ethnicity")?,
            director: find("Director")?,
            cast: header.iter().position(|h| h.trim() == "Cast"),
            genre: find("Genre")?,
            wiki_page: find("Wiki Page")?,
            plot: find("Plot")?,
        })
    }
}

/// Decode one raw record into a [`MovieRecord`].
fn decode_record(
    fields: &[String],
    columns: &ColumnMap,
    file: &str,
    line: usize,
) -> Result<MovieRecord> {
    let field = |index: usize, column: &str| -> Result<&str> {
        fields
            .get(index)
            .map(|s| s.as_str())
            .ok_or_else(|| CatalogError::ParseError {
                file: file.to_string(),
                line,
                reason: format!("Missing {} field", column),
            })
    };

    let year_str = field(columns.release_year, "Release Year")?;
    let release_year = year_str
        .trim()
        .parse()
        .map_err(|e| CatalogError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Invalid Release Year {:?}: {}", year_str, e),
        })?;

    let cast = columns
        .cast
        .and_then(|index| fields.get(index))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    Ok(MovieRecord {
        title: field(columns.title, "Title")?.to_string(),
        release_year,
        origin: field(columns.origin, "Origin/Ethnicity")?.to_string(),
        director: field(columns.director, "Director")?.to_string(),
        cast,
        genre: field(columns.genre, "Genre")?.to_string(),
        wiki_page: field(columns.wiki_page, "Wiki Page")?.to_string(),
        plot: field(columns.plot, "Plot")?.to_string(),
    })
}

impl Catalog {
    /// Load the catalog from a movie plots CSV export.
    ///
    /// Row order in the file defines catalog order, which in turn defines
    /// the positions the similarity model's neighbor table refers to.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let content = fs::read_to_string(path)?;
        let mut records = read_records(&content, &file)?;

        if records.is_empty() {
            return Err(CatalogError::ParseError {
                file,
                line: 1,
                reason: "Missing header row".to_string(),
            });
        }

        let (_, header) = records.remove(0);
        let columns = ColumnMap::from_header(&header, &file)?;

        let mut catalog = Catalog::new();
        for (line, fields) in &records {
            catalog.push(decode_record(fields, &columns, &file, *line)?);
        }

        info!("Loaded {} movies from {}", catalog.len(), file);
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Release Year,Title,Origin/Ethnicity,Director,Cast,Genre,Wiki Page,Plot";

    fn catalog_from(content: &str) -> Catalog {
        let mut records = read_records(content, "test.csv").unwrap();
        let (_, header) = records.remove(0);
        let columns = ColumnMap::from_header(&header, "test.csv").unwrap();

        let mut catalog = Catalog::new();
        for (line, fields) in &records {
            catalog.push(decode_record(fields, &columns, "test.csv", *line).unwrap());
        }
        catalog
    }

    #[test]
    fn test_read_records_plain() {
        let records = read_records("a,b,c\nd,e,f\n", "test.csv").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].1, vec!["a", "b", "c"]);
        assert_eq!(records[1].0, 2);
    }

    #[test]
    fn test_read_records_quoted_comma_and_quote() {
        let records = read_records("\"a, b\",\"say \"\"hi\"\"\"\n", "test.csv").unwrap();
        assert_eq!(records[0].1, vec!["a, b", "say \"hi\""]);
    }

    #[test]
    fn test_read_records_embedded_newline() {
        let records = read_records("\"line one\nline two\",x\ny,z\n", "test.csv").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].1[0], "line one\nline two");
        // Second record starts after the two lines the first one spans
        assert_eq!(records[1].0, 3);
    }

    #[test]
    fn test_read_records_skips_blank_lines_and_crlf() {
        let records = read_records("a,b\r\n\r\nc,d\r\n", "test.csv").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].1, vec!["c", "d"]);
    }

    #[test]
    fn test_read_records_no_trailing_newline() {
        let records = read_records("a,b\nc,d", "test.csv").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].1, vec!["c", "d"]);
    }

    #[test]
    fn test_read_records_unterminated_quote() {
        let err = read_records("\"never closed\n", "test.csv").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn test_decode_full_row() {
        let content = format!(
            "{}\n1999,The Matrix,American,The Wachowskis,Keanu Reeves,sci-fi,\
             https://en.wikipedia.org/wiki/The_Matrix,\"A hacker learns, slowly.\"\n",
            HEADER
        );
        let catalog = catalog_from(&content);

        assert_eq!(catalog.len(), 1);
        let record = catalog.get(0).unwrap();
        assert_eq!(record.title, "The Matrix");
        assert_eq!(record.release_year, 1999);
        assert_eq!(record.cast.as_deref(), Some("Keanu Reeves"));
        assert_eq!(record.plot, "A hacker learns, slowly.");
    }

    #[test]
    fn test_decode_empty_cast_is_none() {
        let content = format!("{}\n1901,Kansas Saloon Smashers,American,Unknown,,comedy,url,plot\n", HEADER);
        let catalog = catalog_from(&content);
        assert_eq!(catalog.get(0).unwrap().cast, None);
    }

    #[test]
    fn test_header_columns_in_any_order() {
        let content = "Title,Release Year,Origin/Ethnicity,Director,Cast,Genre,Wiki Page,Plot\n\
                       Backwards,1950,American,Someone,Someone Else,drama,url,plot\n";
        let catalog = catalog_from(content);

        let record = catalog.get(0).unwrap();
        assert_eq!(record.title, "Backwards");
        assert_eq!(record.release_year, 1950);
    }

    #[test]
    fn test_missing_required_column() {
        let header: Vec<String> = ["Release Year", "Title", "Genre"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let err = ColumnMap::from_header(&header, "test.csv").unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn { .. }));
    }

    #[test]
    fn test_missing_cast_column_is_allowed() {
        let content = "Release Year,Title,Origin/Ethnicity,Director,Genre,Wiki Page,Plot\n\
                       1960,No Cast Listed,American,Someone,drama,url,plot\n";
        let catalog = catalog_from(content);
        assert_eq!(catalog.get(0).unwrap().cast, None);
    }

    #[test]
    fn test_invalid_year_reports_line() {
        let content = format!("{}\n1999,Fine,American,A,B,drama,url,plot\nsoon,Bad,American,A,B,drama,url,plot\n", HEADER);
        let mut records = read_records(&content, "test.csv").unwrap();
        let (_, header) = records.remove(0);
        let columns = ColumnMap::from_header(&header, "test.csv").unwrap();

        let err = records
            .iter()
            .map(|(line, fields)| decode_record(fields, &columns, "test.csv", *line))
            .find_map(|r| r.err())
            .unwrap();
        match err {
            CatalogError::ParseError { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("Release Year"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
