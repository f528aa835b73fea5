use crate::config::CHANNEL_LABELS;
use crate::selection::TableRow;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::io::Write;

// Space separated, unquoted, header and data lines of different widths
fn create_table_writer<W: Write>(writer: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(writer)
}

fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

pub fn header_fields() -> Vec<String> {
    let mut fields = vec!["#".to_string()];
    for (i, label) in CHANNEL_LABELS.iter().enumerate() {
        fields.push(format!("[{}]", i + 1));
        fields.push(label.to_string());
    }
    fields
}

pub fn row_fields(row: &TableRow) -> Vec<String> {
    std::iter::once(row.time)
        .chain(row.instantaneous.iter().copied())
        .chain(row.cumulative.iter().copied())
        .map(format_value)
        .collect()
}

/// Write the `#` header line followed by one line per row.
pub fn write_table<W: Write>(writer: W, rows: &[TableRow]) -> Result<()> {
    let mut wtr = create_table_writer(writer);

    wtr.write_record(header_fields())
        .context("Failed to write table header")?;

    for (i, row) in rows.iter().enumerate() {
        wtr.write_record(row_fields(row))
            .with_context(|| format!("Failed to write table row {}", i))?;
    }

    wtr.flush().context("Failed to flush table output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[TableRow]) -> String {
        let mut out = Vec::new();
        write_table(&mut out, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn row(time: f64, ncol: usize) -> TableRow {
        TableRow {
            time,
            instantaneous: (0..ncol).map(|c| c as f64 + 0.5).collect(),
            cumulative: (0..ncol).map(|c| -(c as f64)).collect(),
        }
    }

    #[test]
    fn header_lists_twelve_indexed_labels() {
        let text = render(&[]);
        assert_eq!(
            text,
            "# [1] time [2] prl_str [3] prl_str_rad [4] prl_str_rad_phi [5] mirror \
             [6] mirror_rad [7] mgn_drft [8] mgn_drft_rad [9] mgn_drft_rad_phi \
             [10] exb_nl [11] zf_source [12] zf_comm\n"
        );
    }

    #[test]
    fn header_has_twelve_pairs() {
        let fields = header_fields();
        assert_eq!(fields.len(), 1 + 2 * 12);
        assert_eq!(fields[0], "#");
        assert_eq!(fields[1], "[1]");
        assert_eq!(fields[24], "zf_comm");
    }

    #[test]
    fn data_line_has_time_then_both_blocks() {
        let rows = vec![TableRow {
            time: 0.5,
            instantaneous: vec![1.0, 2.0],
            cumulative: vec![1.0, 3.0],
        }];
        let text = render(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "0.5 1.0 2.0 1.0 3.0");
    }

    #[test]
    fn every_data_line_has_one_plus_two_ncol_fields() {
        let ncol = 12;
        let rows: Vec<TableRow> = (0..5).map(|t| row(t as f64 * 0.1, ncol)).collect();
        let text = render(&rows);
        let data: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(data.len(), 5);
        for line in data {
            assert_eq!(line.split_whitespace().count(), 1 + 2 * ncol);
        }
    }

    #[test]
    fn values_parse_back() {
        let rows = vec![row(1e-5, 3), row(12345.678, 3)];
        let text = render(&rows);
        for (line, expected) in text.lines().skip(1).zip(&rows) {
            let values: Vec<f64> = line
                .split_whitespace()
                .map(|s| s.parse().unwrap())
                .collect();
            assert_eq!(values[0], expected.time);
            assert_eq!(&values[1..4], expected.instantaneous.as_slice());
            assert_eq!(&values[4..], expected.cumulative.as_slice());
        }
    }
}
