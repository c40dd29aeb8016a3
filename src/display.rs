//! Plain-text and JSON rendering of the normalized item sequence.
//!
//! Defaulting lives here and only here: the normalizer hands over absent
//! fields as absent, and display substitutes an empty title and a `-` date.

use crate::feed::FeedItem;
use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Format an item timestamp for the entry list, `-` when absent.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => "-".to_string(),
    }
}

/// Render one entry as list lines: index, date, and title on the first,
/// the link indented below when there is one.
pub fn render_item(index: usize, item: &FeedItem) -> String {
    let mut out = format!(
        "{:>3}  {:<19}  {}",
        index,
        format_date(item.date.as_ref()),
        item.title.as_deref().unwrap_or("")
    );
    if let Some(link) = &item.link {
        out.push_str("\n     ");
        out.push_str(link);
    }
    out
}

/// Render the whole sequence as pretty-printed JSON for `--json` output.
pub fn render_json(items: &[FeedItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 12, 4, 9, 5, 0).unwrap()
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(format_date(Some(&sample_date())), "2017/12/04 09:05:00");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_render_item_with_all_fields() {
        let item = FeedItem {
            title: Some("Hello".to_string()),
            date: Some(sample_date()),
            link: Some("http://example.com/hello".to_string()),
        };
        assert_eq!(
            render_item(0, &item),
            "  0  2017/12/04 09:05:00  Hello\n     http://example.com/hello"
        );
    }

    #[test]
    fn test_render_item_defaults_absent_fields() {
        let item = FeedItem {
            title: None,
            date: None,
            link: None,
        };
        assert_eq!(render_item(12, &item), " 12  -                    ");
    }

    #[test]
    fn test_json_round_trips_absent_fields_as_null() {
        let items = vec![FeedItem {
            title: None,
            date: None,
            link: None,
        }];
        let json = render_json(&items).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], serde_json::Value::Null);
        assert_eq!(value[0]["link"], serde_json::Value::Null);
    }
}
