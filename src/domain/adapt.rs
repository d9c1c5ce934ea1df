//! Maps source records into the adapted output schema and wraps result
//! lists in the paging envelope. Row-level malformation is handled by
//! exclusion here; whole-document problems never reach these functions.

use serde::Serialize;
use serde_json::Value;

use crate::source::{FlatQuote, Prayer};

/// Author shown when the source record carries none.
pub const DEFAULT_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdaptedQuote {
    pub id: i64,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble_arabic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble_transliteration: Option<String>,
}

impl AdaptedQuote {
    fn bare(id: i64, content: String, author: String) -> Self {
        Self {
            id,
            content,
            author,
            tags: None,
            length: None,
            title: None,
            arabic_text: None,
            transliteration: None,
            reference: None,
            notes: None,
            preamble_arabic: None,
            preamble_transliteration: None,
        }
    }
}

/// List-response wrapper mimicking the external API. Paging fields are
/// constants: the whole list is always one page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub count: usize,
    pub total_count: usize,
    pub page: u32,
    pub total_pages: u32,
    pub last_item_index: Option<usize>,
    pub results: Vec<AdaptedQuote>,
    // Outer None: not a category-scoped request, key omitted entirely.
    // Inner None: scoped request whose path segment was not numeric,
    // serialized as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<i64>>,
}

impl Envelope {
    pub fn new(results: Vec<AdaptedQuote>) -> Self {
        Self::build(results, None)
    }

    pub fn scoped(results: Vec<AdaptedQuote>, category_id: Option<i64>) -> Self {
        Self::build(results, Some(category_id))
    }

    fn build(results: Vec<AdaptedQuote>, category_id: Option<Option<i64>>) -> Self {
        let count = results.len();
        Self {
            count,
            total_count: count,
            page: 1,
            total_pages: 1,
            last_item_index: (count > 0).then_some(count),
            results,
            category_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub count: usize,
    pub categories: Vec<Value>,
}

/// Ordered precedence for the adapted `content` field of a prayer:
/// the Albanian translation wins, the Arabic text is the fallback, and
/// an empty string is the floor.
pub fn preferred_content(translation_al: Option<&str>, arabic_text: Option<&str>) -> String {
    [translation_al, arabic_text]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

pub fn adapt_flat_quotes(quotes: Vec<FlatQuote>) -> Vec<AdaptedQuote> {
    quotes
        .into_iter()
        .filter_map(|quote| {
            let id = quote.id?;
            Some(AdaptedQuote::bare(
                id,
                quote.text.unwrap_or_default(),
                quote.source.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            ))
        })
        .collect()
}

pub fn adapt_prayers(prayers: Vec<Prayer>) -> Vec<AdaptedQuote> {
    prayers.into_iter().filter_map(adapt_prayer).collect()
}

fn adapt_prayer(prayer: Prayer) -> Option<AdaptedQuote> {
    let id = prayer.id?;
    if !has_translation(&prayer) {
        return None;
    }

    let content = preferred_content(
        prayer.translation_al.as_deref(),
        prayer.arabic_text.as_deref(),
    );

    let mut adapted = AdaptedQuote::bare(
        id,
        content,
        prayer
            .source_type
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
    );
    adapted.tags = Some(Vec::new());
    adapted.length = Some(adapted.content.chars().count());
    adapted.title = prayer.title;
    adapted.arabic_text = prayer.arabic_text;
    adapted.transliteration = prayer.transliteration;
    adapted.reference = prayer.reference;
    adapted.notes = prayer.notes;
    adapted.preamble_arabic = prayer.preamble_arabic;
    adapted.preamble_transliteration = prayer.preamble_transliteration;
    Some(adapted)
}

fn has_translation(prayer: &Prayer) -> bool {
    prayer
        .translation_al
        .as_deref()
        .is_some_and(|value| !value.trim().is_empty())
}

/// Retains prayers tagged with the requested category. A `None` id (the
/// path segment did not parse as an integer) matches nothing.
pub fn filter_prayers_by_category(prayers: Vec<Prayer>, category_id: Option<i64>) -> Vec<Prayer> {
    let Some(category_id) = category_id else {
        return Vec::new();
    };

    prayers
        .into_iter()
        .filter(|prayer| prayer.category_ids.contains(&category_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn prayer(id: i64, translation_al: Option<&str>) -> Prayer {
        Prayer {
            id: Some(id),
            translation_al: translation_al.map(str::to_string),
            ..Prayer::default()
        }
    }

    #[test]
    fn content_prefers_translation() {
        let content = preferred_content(Some("translated"), Some("arabic"));
        assert_eq!(content, "translated");
    }

    #[test]
    fn content_falls_back_to_arabic_text() {
        assert_eq!(preferred_content(None, Some("arabic")), "arabic");
        assert_eq!(preferred_content(Some("  "), Some("arabic")), "arabic");
    }

    #[test]
    fn content_floor_is_empty_string() {
        assert_eq!(preferred_content(None, None), "");
        assert_eq!(preferred_content(Some(""), Some(" ")), "");
    }

    #[test]
    fn flat_quotes_map_text_and_source_in_order() {
        let adapted = adapt_flat_quotes(vec![
            FlatQuote {
                id: Some(1),
                text: Some("first".to_string()),
                source: Some("author one".to_string()),
            },
            FlatQuote {
                id: Some(2),
                text: Some("second".to_string()),
                source: Some("author two".to_string()),
            },
        ]);

        assert_eq!(adapted.len(), 2);
        assert_eq!(adapted[0].id, 1);
        assert_eq!(adapted[0].content, "first");
        assert_eq!(adapted[0].author, "author one");
        assert_eq!(adapted[1].id, 2);
        assert_eq!(adapted[1].content, "second");
        assert_eq!(adapted[1].author, "author two");
    }

    #[test]
    fn flat_quote_without_id_is_excluded() {
        let adapted = adapt_flat_quotes(vec![
            FlatQuote {
                id: None,
                text: Some("orphan".to_string()),
                source: None,
            },
            FlatQuote {
                id: Some(7),
                text: Some("kept".to_string()),
                source: None,
            },
        ]);

        assert_eq!(adapted.len(), 1);
        assert_eq!(adapted[0].id, 7);
    }

    #[test]
    fn flat_quote_without_source_gets_default_author() {
        let adapted = adapt_flat_quotes(vec![FlatQuote {
            id: Some(1),
            text: Some("quote".to_string()),
            source: None,
        }]);

        assert_eq!(adapted[0].author, DEFAULT_AUTHOR);
    }

    #[test]
    fn flat_quotes_omit_nested_only_fields() {
        let adapted = adapt_flat_quotes(vec![FlatQuote {
            id: Some(1),
            text: Some("quote".to_string()),
            source: Some("author".to_string()),
        }]);

        let serialized = serde_json::to_value(&adapted[0]).expect("serializes");
        assert!(serialized.get("tags").is_none());
        assert!(serialized.get("length").is_none());
        assert!(serialized.get("arabic_text").is_none());
    }

    #[test]
    fn prayer_without_translation_is_excluded() {
        let adapted = adapt_prayers(vec![
            prayer(1, None),
            prayer(2, Some("")),
            prayer(3, Some("kept")),
        ]);

        assert_eq!(adapted.len(), 1);
        assert_eq!(adapted[0].id, 3);
    }

    #[test]
    fn prayer_without_id_is_excluded() {
        let adapted = adapt_prayers(vec![Prayer {
            id: None,
            translation_al: Some("text".to_string()),
            ..Prayer::default()
        }]);

        assert!(adapted.is_empty());
    }

    #[test]
    fn prayer_maps_source_type_and_carries_descriptive_fields() {
        let adapted = adapt_prayers(vec![Prayer {
            id: Some(4),
            translation_al: Some("translated text".to_string()),
            arabic_text: Some("arabic".to_string()),
            source_type: Some("Hadith".to_string()),
            title: Some("Morning".to_string()),
            reference: Some("Book 1".to_string()),
            ..Prayer::default()
        }]);

        assert_eq!(adapted.len(), 1);
        assert_eq!(adapted[0].content, "translated text");
        assert_eq!(adapted[0].author, "Hadith");
        assert_eq!(adapted[0].tags, Some(Vec::new()));
        assert_eq!(adapted[0].length, Some("translated text".chars().count()));
        assert_eq!(adapted[0].title.as_deref(), Some("Morning"));
        assert_eq!(adapted[0].arabic_text.as_deref(), Some("arabic"));
        assert_eq!(adapted[0].reference.as_deref(), Some("Book 1"));
    }

    #[test]
    fn prayer_without_source_type_gets_default_author() {
        let adapted = adapt_prayers(vec![prayer(5, Some("text"))]);
        assert_eq!(adapted[0].author, DEFAULT_AUTHOR);
    }

    #[test]
    fn category_filter_retains_matching_prayers() {
        let mut first = prayer(1, Some("one"));
        first.category_ids = vec![10, 20];
        let mut second = prayer(2, Some("two"));
        second.category_ids = vec![30];

        let filtered = filter_prayers_by_category(vec![first, second], Some(20));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, Some(1));
    }

    #[test]
    fn category_filter_without_id_matches_nothing() {
        let mut entry = prayer(1, Some("one"));
        entry.category_ids = vec![10];

        let filtered = filter_prayers_by_category(vec![entry], None);
        assert!(filtered.is_empty());
    }

    #[test]
    fn envelope_counts_match_results() {
        let envelope = Envelope::new(adapt_flat_quotes(vec![
            FlatQuote {
                id: Some(1),
                text: Some("a".to_string()),
                source: None,
            },
            FlatQuote {
                id: Some(2),
                text: Some("b".to_string()),
                source: None,
            },
        ]));

        assert_eq!(envelope.count, 2);
        assert_eq!(envelope.total_count, 2);
        assert_eq!(envelope.page, 1);
        assert_eq!(envelope.total_pages, 1);
        assert_eq!(envelope.last_item_index, Some(2));
    }

    #[test]
    fn empty_envelope_has_null_last_item_index() {
        let serialized = serde_json::to_value(Envelope::new(Vec::new())).expect("serializes");

        assert_eq!(serialized["count"], 0);
        assert_eq!(serialized["totalCount"], 0);
        assert_eq!(serialized["lastItemIndex"], json!(null));
        assert!(serialized.get("categoryId").is_none());
    }

    #[test]
    fn scoped_envelope_carries_category_id() {
        let serialized =
            serde_json::to_value(Envelope::scoped(Vec::new(), Some(12))).expect("serializes");
        assert_eq!(serialized["categoryId"], 12);

        let unparsed =
            serde_json::to_value(Envelope::scoped(Vec::new(), None)).expect("serializes");
        let fields = unparsed.as_object().expect("object");
        assert!(fields.contains_key("categoryId"));
        assert_eq!(fields["categoryId"], json!(null));
    }
}
