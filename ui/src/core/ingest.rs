//! CSV ingestion: raw file text in, field rows out.
//!
//! The reader is deliberately permissive: no header row is expected, rows may
//! have any number of fields (`flexible`), and surrounding whitespace is
//! trimmed. Shape and value validation happens later, in the aggregation
//! pass, so a ragged row here is not an error.

/// One CSV row as raw text fields. Validation is the aggregator's job.
pub type RawRow = Vec<String>;

/// Parse CSV text into raw rows. Empty lines are skipped by the reader.
pub fn parse_rows(text: &str) -> Vec<RawRow> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .records()
        .filter_map(|record| record.ok())
        .map(|record| record.iter().map(str::to_string).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_column_rows() {
        let rows = parse_rows("2024-01-01 08:00,120\n2024-01-01 08:05,124\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["2024-01-01 08:00", "120"]);
        assert_eq!(rows[1], vec!["2024-01-01 08:05", "124"]);
    }

    #[test]
    fn keeps_ragged_rows_for_the_aggregator() {
        let rows = parse_rows("2024-01-01 08:00,120\njust-one-field\na,b,c\n");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[2].len(), 3);
    }

    #[test]
    fn trims_whitespace_and_handles_quotes() {
        let rows = parse_rows("\"2024-01-01 08:00\", 120 \n");
        assert_eq!(rows, vec![vec!["2024-01-01 08:00", "120"]]);
    }

    #[test]
    fn empty_text_yields_no_rows() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\n\n").is_empty());
    }
}
