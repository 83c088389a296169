//! Field lookup across legacy aliases, and cell text for tabular output.

use super::Record;
use bson::Bson;

/// Historical names for the user field, highest priority first.
pub const USER_ID_KEYS: &[&str] = &["user_id", "userid", "user"];
/// Historical names for the video field, highest priority first.
pub const VIDEO_URL_KEYS: &[&str] = &["video_url", "video", "videoUrl"];

/// True for values the alias chain skips over: null, empty, zero, false.
#[must_use]
pub fn is_blank(v: &Bson) -> bool {
    match v {
        Bson::Null | Bson::Undefined => true,
        Bson::String(s) => s.is_empty(),
        Bson::Int32(i) => *i == 0,
        Bson::Int64(i) => *i == 0,
        Bson::Double(f) => *f == 0.0,
        Bson::Boolean(b) => !*b,
        Bson::Array(a) => a.is_empty(),
        Bson::Document(d) => d.is_empty(),
        _ => false,
    }
}

/// First non-blank value among `keys`, in order.
#[must_use]
pub fn first_present<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Bson> {
    keys.iter().filter_map(|k| record.get(k)).find(|v| !is_blank(v))
}

/// Text for one CSV cell. Null renders empty.
#[must_use]
pub fn cell_text(v: &Bson) -> String {
    match v {
        Bson::Null | Bson::Undefined => String::new(),
        Bson::String(s) => s.clone(),
        Bson::Int32(i) => i.to_string(),
        Bson::Int64(i) => i.to_string(),
        Bson::Double(f) => float_text(*f),
        Bson::Boolean(b) => String::from(if *b { "True" } else { "False" }),
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.clone().into_relaxed_extjson().to_string(),
    }
}

// Shortest round-trip digits. Exponent form below 1e-4 and from 1e16 up, with a
// signed two-digit exponent; integral values otherwise keep a trailing ".0".
fn float_text(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return String::from(if f > 0.0 { "inf" } else { "-inf" });
    }
    let sci = format!("{f:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return f.to_string();
    };
    if !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
    }
    let plain = f.to_string();
    if plain.contains('.') { plain } else { format!("{plain}.0") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};

    #[test]
    fn user_alias_priority() {
        let r = Record::new(doc! {"user": "c", "userid": "b"});
        assert_eq!(first_present(&r, USER_ID_KEYS), Some(&Bson::String("b".into())));
        let r = Record::new(doc! {"user": "c", "userid": "b", "user_id": "a"});
        assert_eq!(first_present(&r, USER_ID_KEYS), Some(&Bson::String("a".into())));
        let r = Record::new(doc! {"user": "c"});
        assert_eq!(first_present(&r, USER_ID_KEYS), Some(&Bson::String("c".into())));
    }

    #[test]
    fn blank_values_fall_through() {
        let r = Record::new(doc! {"video_url": "", "video": Bson::Null, "videoUrl": "https://x/v.mp4"});
        assert_eq!(first_present(&r, VIDEO_URL_KEYS).map(cell_text).as_deref(), Some("https://x/v.mp4"));
    }

    #[test]
    fn all_aliases_missing() {
        let r = Record::new(doc! {"score": 1});
        assert!(first_present(&r, USER_ID_KEYS).is_none());
        assert!(first_present(&r, VIDEO_URL_KEYS).is_none());
    }

    #[test]
    fn cell_text_formats() {
        assert_eq!(cell_text(&Bson::Double(121.5648)), "121.5648");
        assert_eq!(cell_text(&Bson::Double(25.0)), "25.0");
        assert_eq!(cell_text(&Bson::Int32(87)), "87");
        assert_eq!(cell_text(&Bson::Int64(-3)), "-3");
        assert_eq!(cell_text(&Bson::Null), "");
        assert_eq!(cell_text(&Bson::Boolean(true)), "True");
        let oid = ObjectId::parse_str("69313e820af14e4d1806d0a6").unwrap();
        assert_eq!(cell_text(&Bson::ObjectId(oid)), "69313e820af14e4d1806d0a6");
    }

    #[test]
    fn extreme_doubles_use_exponent_form() {
        let cases = [
            (1e16, "1e+16"),
            (1e-5, "1e-05"),
            (2.5e-7, "2.5e-07"),
            (-1.5e300, "-1.5e+300"),
            (1.7976931348623157e308, "1.7976931348623157e+308"),
            (5e-324, "5e-324"),
            (0.0001, "0.0001"),
            (9999999999999998.0, "9999999999999998.0"),
            (1e15, "1000000000000000.0"),
            (0.0, "0.0"),
            (-0.0, "-0.0"),
            (f64::NAN, "nan"),
            (f64::NEG_INFINITY, "-inf"),
        ];
        for (f, want) in cases {
            assert_eq!(cell_text(&Bson::Double(f)), want, "{f:?}");
        }
    }
}
