use std::collections::HashMap;

pub const URL_ID_COLUMN: &str = "urlID";
pub const SUMMARY_COLUMN: &str = "Summary";
pub const RATING_COLUMN: &str = "Rating";
pub const RATINGS_NUM_COLUMN: &str = "RatingsNum";
pub const REVIEWS_COLUMN: &str = "Reviews";

/// The four metadata columns the scraper fills in.
pub const METADATA_COLUMNS: [&str; 4] = [
    SUMMARY_COLUMN,
    RATING_COLUMN,
    RATINGS_NUM_COLUMN,
    REVIEWS_COLUMN,
];

/// One row of the book dataset. Known columns are typed fields; every other
/// column is carried verbatim in `extra` so it survives a load/save cycle.
/// Absent values are empty strings, never options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookRecord {
    pub url_id: String,
    pub summary: String,
    pub rating: String,
    pub ratings_num: String,
    pub reviews: String,
    pub extra: HashMap<String, String>,
}

impl BookRecord {
    /// All four metadata fields are present.
    pub fn is_complete(&self) -> bool {
        !self.summary.is_empty()
            && !self.rating.is_empty()
            && !self.ratings_num.is_empty()
            && !self.reviews.is_empty()
    }

    /// A record is worth a browser visit when any metadata field is still
    /// empty and there is a urlID to build the target from.
    pub fn needs_extraction(&self) -> bool {
        !self.is_complete() && !self.url_id.is_empty()
    }

    /// Merge an extraction result into the record. Only fields that are
    /// currently empty are set, and only from non-empty incoming values, so
    /// a present field is never overwritten and never blanked.
    pub fn fill_missing(&mut self, fields: BookFields) {
        if self.summary.is_empty() && !fields.summary.is_empty() {
            self.summary = fields.summary;
        }
        if self.rating.is_empty() && !fields.rating.is_empty() {
            self.rating = fields.rating;
        }
        if self.ratings_num.is_empty() && !fields.ratings_num.is_empty() {
            self.ratings_num = fields.ratings_num;
        }
        if self.reviews.is_empty() && !fields.reviews.is_empty() {
            self.reviews = fields.reviews;
        }
    }

    /// Value of a column by its header name, for serialization.
    pub fn field(&self, column: &str) -> &str {
        match column {
            URL_ID_COLUMN => &self.url_id,
            SUMMARY_COLUMN => &self.summary,
            RATING_COLUMN => &self.rating,
            RATINGS_NUM_COLUMN => &self.ratings_num,
            REVIEWS_COLUMN => &self.reviews,
            other => self.extra.get(other).map(String::as_str).unwrap_or(""),
        }
    }

    pub fn set_field(&mut self, column: &str, value: String) {
        match column {
            URL_ID_COLUMN => self.url_id = value,
            SUMMARY_COLUMN => self.summary = value,
            RATING_COLUMN => self.rating = value,
            RATINGS_NUM_COLUMN => self.ratings_num = value,
            REVIEWS_COLUMN => self.reviews = value,
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }
}

/// The dataset as loaded from disk: ordered records plus the column order of
/// the backing file. Offsets into `records` are the batch cursor positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    pub records: Vec<BookRecord>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<BookRecord>) -> Self {
        Dataset { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// What one page visit yields. Fields the page does not expose come back as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFields {
    pub summary: String,
    pub rating: String,
    pub ratings_num: String,
    pub reviews: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(summary: &str, rating: &str, ratings_num: &str, reviews: &str) -> BookFields {
        BookFields {
            summary: summary.to_string(),
            rating: rating.to_string(),
            ratings_num: ratings_num.to_string(),
            reviews: reviews.to_string(),
        }
    }

    #[test]
    fn complete_record_needs_no_extraction() {
        let record = BookRecord {
            url_id: "12345".to_string(),
            summary: "x".to_string(),
            rating: "4.5".to_string(),
            ratings_num: "10".to_string(),
            reviews: "2".to_string(),
            extra: HashMap::new(),
        };
        assert!(record.is_complete());
        assert!(!record.needs_extraction());
    }

    #[test]
    fn record_without_url_id_needs_no_extraction() {
        let record = BookRecord {
            summary: "x".to_string(),
            ..BookRecord::default()
        };
        assert!(!record.is_complete());
        assert!(!record.needs_extraction());
    }

    #[test]
    fn fill_missing_keeps_present_fields() {
        let mut record = BookRecord {
            url_id: "12345".to_string(),
            summary: "original summary".to_string(),
            ..BookRecord::default()
        };
        record.fill_missing(fields("scraped summary", "4.5", "10", "2"));

        assert_eq!(record.summary, "original summary");
        assert_eq!(record.rating, "4.5");
        assert_eq!(record.ratings_num, "10");
        assert_eq!(record.reviews, "2");
    }

    #[test]
    fn fill_missing_never_blanks_a_field() {
        let mut record = BookRecord {
            url_id: "12345".to_string(),
            rating: "4.5".to_string(),
            ..BookRecord::default()
        };
        record.fill_missing(fields("s", "", "", ""));

        assert_eq!(record.rating, "4.5");
        assert_eq!(record.summary, "s");
        assert_eq!(record.ratings_num, "");
        assert_eq!(record.reviews, "");
    }

    #[test]
    fn unknown_columns_go_through_extra() {
        let mut record = BookRecord::default();
        record.set_field("Notes", "keep me".to_string());

        assert_eq!(record.field("Notes"), "keep me");
        assert_eq!(record.field("Missing"), "");
    }
}
