//! Corpus record types
//!
//! The crawl produces a tree of typed records: a [`Corpus`] owns
//! [`YearArchive`]s, which own [`MonthArchive`]s, which own [`Post`]s.
//! The whole tree is what the snapshot store serializes, so the serde
//! field names are part of the snapshot format.

use serde::{Deserialize, Serialize};

/// The full archived corpus, root of all persisted state
///
/// Serializes transparently as a JSON array of year objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    pub years: Vec<YearArchive>,
}

/// One archived year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearArchive {
    pub year: i32,
    /// Months in crawl order: 1 through 11, plus 12 when configured
    pub months: Vec<MonthArchive>,
}

/// One archived month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthArchive {
    pub month: u32,
    /// Posts in discovery order: highest listing page first, and within a
    /// page in reverse document order. This is a compatibility quirk of the
    /// crawl, not a chronological guarantee.
    pub posts: Vec<Post>,
}

/// One extracted blog post
///
/// `title` and `content` are non-empty by construction: extraction that
/// cannot fill them produces no `Post` at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Canonical `dd/mm/YYYY` date, or the `"Invalid date"` sentinel
    pub date: String,
    pub title: String,
    /// Serialized `<p>` and `<img>` fragments in document order
    pub content: Vec<String>,
    /// Source address the post was extracted from
    pub url: String,
}

impl MonthArchive {
    /// A month with zero posts contributes nothing to rendered output
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        Corpus {
            years: vec![YearArchive {
                year: 2021,
                months: vec![MonthArchive {
                    month: 1,
                    posts: vec![Post {
                        date: "15/01/2021".to_string(),
                        title: "Hello".to_string(),
                        content: vec!["<p>Body</p>".to_string()],
                        url: "https://blog.example.com/hello".to_string(),
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_corpus_serializes_as_array() {
        let json = serde_json::to_string(&sample_corpus()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"year\":2021"));
    }

    #[test]
    fn test_corpus_round_trip() {
        let corpus = sample_corpus();
        let json = serde_json::to_string_pretty(&corpus).unwrap();
        let restored: Corpus = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, corpus);
    }

    #[test]
    fn test_month_is_empty() {
        let month = MonthArchive {
            month: 3,
            posts: vec![],
        };
        assert!(month.is_empty());
        assert!(!sample_corpus().years[0].months[0].is_empty());
    }
}
