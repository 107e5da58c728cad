//! Header and schema detection.

use coltab_model::{Column, Schema, Span};
use tracing::debug;

use crate::error::FormatError;
use crate::options::ParseOptions;
use crate::tokenize::{is_data_line, is_header_line, tokenize};

/// Locates the header row and builds the column schema for a report.
///
/// The first line starting with a digit is the first data row. The nearest
/// line above it that starts with a letter is the header. Each header word
/// becomes a column spanning the word itself. If the first data row's
/// leading field ends before the first header word begins, an unlabeled id
/// column covering `[0, end)` of that field is prepended.
pub fn detect_schema<S: AsRef<str>>(
    lines: &[S],
    options: &ParseOptions,
) -> Result<Schema, FormatError> {
    let data_idx = lines
        .iter()
        .position(|line| is_data_line(line.as_ref()))
        .ok_or(FormatError::NoDataRow)?;
    let header_idx = lines[..data_idx]
        .iter()
        .rposition(|line| is_header_line(line.as_ref()))
        .ok_or(FormatError::NoHeaderRow {
            data_line: data_idx + 1,
        })?;
    debug!(
        header_line = header_idx + 1,
        data_line = data_idx + 1,
        "located header and first data row"
    );

    let columns: Vec<Column> = tokenize(lines[header_idx].as_ref())
        .into_iter()
        .map(|token| Column {
            name: token.text,
            span: token.span,
        })
        .collect();
    let schema = Schema::new(columns);

    let leading_end = tokenize(lines[data_idx].as_ref())
        .first()
        .map(|field| field.span.end);
    let first_start = schema.get(0).map(|column| column.span.start);
    match (leading_end, first_start) {
        (Some(end), Some(start)) if end < start => {
            let name = unique_id_name(&schema, &options.id_prefix);
            debug!(column = %name, end, "data rows carry an unlabeled leading id field");
            Ok(schema.with_id_column(Column {
                name,
                span: Span::new(0, end),
            }))
        }
        _ => Ok(schema),
    }
}

/// Lowest-numbered `<prefix><n>` not already used as a column name.
pub fn unique_id_name(schema: &Schema, prefix: &str) -> String {
    let mut n = 0usize;
    loop {
        let name = format!("{prefix}{n}");
        if !schema.contains(&name) {
            return name;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(lines: &[&str]) -> Result<Schema, FormatError> {
        detect_schema(lines, &ParseOptions::default())
    }

    #[test]
    fn test_header_directly_above_data() {
        let schema = detect(&["A   B   C", "1       9"]).unwrap();
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(schema.get(1).map(|c| c.span), Some(Span::new(4, 5)));
        assert!(!schema.has_id_column());
    }

    #[test]
    fn test_header_skips_blank_and_symbol_lines() {
        let lines = ["Title line", "  Dy MxT", "", "  ----", "   1  88"];
        let schema = detect(&lines).unwrap();
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["Dy", "MxT"]);
    }

    #[test]
    fn test_nearest_header_wins() {
        let lines = ["Report", "Dy MxT", "1  2"];
        let schema = detect(&lines).unwrap();
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["Dy", "MxT"]);
    }

    #[test]
    fn test_id_column_synthesized() {
        let lines = ["      Name  Score", "3     Alice   10"];
        let schema = detect(&lines).unwrap();
        assert!(schema.has_id_column());
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["ID-0", "Name", "Score"]);
        assert_eq!(schema.get(0).map(|c| c.span), Some(Span::new(0, 1)));
    }

    #[test]
    fn test_id_column_name_avoids_collisions() {
        let lines = ["      ID-0  ID-1", "3     x     y"];
        let schema = detect(&lines).unwrap();
        assert_eq!(schema.get(0).map(|c| c.name.as_str()), Some("ID-2"));
    }

    #[test]
    fn test_id_column_uses_configured_prefix() {
        let lines = ["    Team", "1.  Leeds"];
        let options = ParseOptions::default().with_id_prefix("Rank");
        let schema = detect_schema(&lines, &options).unwrap();
        assert_eq!(schema.get(0).map(|c| c.name.as_str()), Some("Rank0"));
    }

    #[test]
    fn test_touching_id_field_is_not_synthesized() {
        // leading field ends exactly where the first label starts
        let lines = [" Dy MxT", "1  88"];
        let schema = detect(&lines).unwrap();
        assert!(!schema.has_id_column());
    }

    #[test]
    fn test_no_data_row() {
        assert_eq!(detect(&["A B", "x y"]), Err(FormatError::NoDataRow));
        assert_eq!(detect(&[]), Err(FormatError::NoDataRow));
    }

    #[test]
    fn test_no_header_row() {
        assert_eq!(
            detect(&["----", "1 2"]),
            Err(FormatError::NoHeaderRow { data_line: 2 })
        );
        assert_eq!(
            detect(&["1 2"]),
            Err(FormatError::NoHeaderRow { data_line: 1 })
        );
    }
}
