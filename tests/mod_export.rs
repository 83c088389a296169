use bson::{Bson, doc, oid::ObjectId};
use emogo::export::{CSV_HEADER, CsvSink, records_to_json, render_csv};
use emogo::record::Record;

fn rows(bytes: Vec<u8>) -> Vec<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(false).from_reader(bytes.as_slice());
    rdr.records().map(|r| r.unwrap().iter().map(String::from).collect()).collect()
}

#[test]
fn header_is_always_first() {
    let out = rows(render_csv(&[Record::new(doc! {"zzz": 1})]).unwrap());
    assert_eq!(out[0], CSV_HEADER.map(String::from).to_vec());
    assert_eq!(out[1], vec!["", "", "", "", "", ""]);
}

#[test]
fn userid_alias_fills_user_column() {
    let out = rows(render_csv(&[Record::new(doc! {"_id": "a", "userid": "legacy", "user": "older"})]).unwrap());
    assert_eq!(out[1][1], "legacy");
}

#[test]
fn video_aliases_in_priority_order() {
    let recs = [
        Record::new(doc! {"video": "v2", "videoUrl": "v3"}),
        Record::new(doc! {"videoUrl": "v3"}),
        Record::new(doc! {"video_url": "v1", "video": "v2"}),
    ];
    let out = rows(render_csv(&recs).unwrap());
    let col: Vec<&str> = out[1..].iter().map(|r| r[3].as_str()).collect();
    assert_eq!(col, vec!["v2", "v3", "v1"]);
}

#[test]
fn missing_and_null_coordinates_are_empty_cells() {
    let recs = [
        Record::new(doc! {"_id": "no-coords", "score": 10}),
        Record::new(doc! {"_id": "nil-coords", "latitude": Bson::Null, "longitude": Bson::Null}),
    ];
    let text = String::from_utf8(render_csv(&recs).unwrap()).unwrap();
    assert!(!text.contains("None"));
    assert!(!text.contains("null"));
    let out = rows(text.into_bytes());
    assert_eq!(out[1][4], "");
    assert_eq!(out[1][5], "");
    assert_eq!(out[2][0], "nil-coords");
    assert_eq!(out[2][4], "");
    assert_eq!(out[2][5], "");
}

#[test]
fn object_id_renders_as_hex() {
    let oid = ObjectId::parse_str("69313e6a0af14e4d1806d0a4").unwrap();
    let out = rows(render_csv(&[Record::new(doc! {"_id": oid})]).unwrap());
    assert_eq!(out[1][0], "69313e6a0af14e4d1806d0a4");
}

#[test]
fn sink_counts_rows() {
    let mut sink = CsvSink::new(Vec::new()).unwrap();
    for i in 0..3 {
        sink.write_record(&Record::new(doc! {"_id": i})).unwrap();
    }
    assert_eq!(sink.written(), 3);
    let bytes = sink.finish().unwrap();
    assert_eq!(rows(bytes).len(), 4);
}

#[test]
fn json_listing_is_an_array_in_store_order() {
    let v = records_to_json(&[Record::new(doc! {"_id": 2}), Record::new(doc! {"_id": 1})]);
    assert_eq!(v, serde_json::json!([{"_id": 2}, {"_id": 1}]));
}
