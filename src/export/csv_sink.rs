use crate::errors::AppError;
use crate::record::{ID_FIELD, Record, USER_ID_KEYS, VIDEO_URL_KEYS, cell_text, first_present};
use std::io::Write;

pub const CSV_HEADER: [&str; 6] = ["_id", "user_id", "score", "video_url", "latitude", "longitude"];
pub const CSV_FILENAME: &str = "export.csv";

fn plain(record: &Record, key: &str) -> String {
    record.get(key).map(cell_text).unwrap_or_default()
}

fn aliased(record: &Record, keys: &[&str]) -> String {
    first_present(record, keys).map(cell_text).unwrap_or_default()
}

/// One row in `CSV_HEADER` order. Missing fields become empty cells.
#[must_use]
pub fn csv_row(record: &Record) -> [String; 6] {
    [
        plain(record, ID_FIELD),
        aliased(record, USER_ID_KEYS),
        plain(record, "score"),
        aliased(record, VIDEO_URL_KEYS),
        plain(record, "latitude"),
        plain(record, "longitude"),
    ]
}

/// Writes the header on creation, then one row per record.
pub struct CsvSink<W: Write> {
    w: csv::Writer<W>,
    written: u64,
}

impl<W: Write> CsvSink<W> {
    /// # Errors
    /// Returns `Csv` if the header cannot be written.
    pub fn new(inner: W) -> Result<Self, AppError> {
        let mut w = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        w.write_record(CSV_HEADER)?;
        Ok(Self { w, written: 0 })
    }

    /// # Errors
    /// Returns `Csv` on a write failure.
    pub fn write_record(&mut self, record: &Record) -> Result<(), AppError> {
        self.w.write_record(csv_row(record))?;
        self.written += 1;
        Ok(())
    }

    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// # Errors
    /// Returns `Csv` if the final flush fails.
    pub fn finish(self) -> Result<W, AppError> {
        self.w.into_inner().map_err(|e| AppError::Csv(e.to_string()))
    }
}

/// Encode the whole result set as UTF-8 CSV bytes.
///
/// # Errors
/// Returns `Csv` on an encoding failure.
pub fn render_csv(records: &[Record]) -> Result<Vec<u8>, AppError> {
    let mut sink = CsvSink::new(Vec::new())?;
    for r in records {
        sink.write_record(r)?;
    }
    log::debug!("csv: rows={}", sink.written());
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn empty_input_is_header_only() {
        let bytes = render_csv(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "_id,user_id,score,video_url,latitude,longitude\r\n");
    }

    #[test]
    fn row_uses_aliases_and_blanks() {
        let r = Record::new(doc! {"_id": "x1", "userid": "u9", "videoUrl": "https://v", "score": 3});
        assert_eq!(csv_row(&r), ["x1", "u9", "3", "https://v", "", ""].map(String::from));
    }

    #[test]
    fn commas_are_quoted() {
        let r = Record::new(doc! {"_id": "a", "user_id": "last, first"});
        let out = String::from_utf8(render_csv(&[r]).unwrap()).unwrap();
        assert!(out.contains("a,\"last, first\",,,,"));
    }

    #[test]
    fn quotes_and_line_breaks_are_quoted() {
        let r = Record::new(doc! {"_id": "say \"hi\"", "video": "line1\r\nline2", "latitude": " 25"});
        let out = String::from_utf8(render_csv(&[r]).unwrap()).unwrap();
        assert!(out.ends_with("\"say \"\"hi\"\"\",,,\"line1\r\nline2\", 25,\r\n"));
    }
}
