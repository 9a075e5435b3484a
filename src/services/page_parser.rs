use regex::Regex;
use scraper::{Html, Selector};

use crate::domain::book::BookFields;
use crate::errors::ExtractionError;

pub const SUMMARY_SELECTOR: &str = "#js--summary-description";
pub const RATING_SELECTOR: &str = ".review-wrapper__rating-summary .summary-title";
pub const COUNT_SELECTOR: &str = "#js--rating-review-count-summary";

/// Pull the book fields out of a product page. The three elements must all
/// be present or the whole target fails; the ratings/reviews counts inside
/// the count element are optional and come back empty when the text does not
/// carry them.
pub fn parse_book_page(html: &str) -> Result<BookFields, ExtractionError> {
    let summary_selector = Selector::parse(SUMMARY_SELECTOR).unwrap();
    let rating_selector = Selector::parse(RATING_SELECTOR).unwrap();
    let count_selector = Selector::parse(COUNT_SELECTOR).unwrap();

    let document = Html::parse_document(html);

    let summary = document
        .select(&summary_selector)
        .next()
        .ok_or(ExtractionError::MissingElement(SUMMARY_SELECTOR))?
        .inner_html();

    let rating = document
        .select(&rating_selector)
        .next()
        .ok_or(ExtractionError::MissingElement(RATING_SELECTOR))?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    let count_text = document
        .select(&count_selector)
        .next()
        .ok_or(ExtractionError::MissingElement(COUNT_SELECTOR))?
        .text()
        .collect::<String>();

    let ratings_num = capture_count(r"(\d+)\sRatings", &count_text);
    let reviews = capture_count(r"and\s(\d+)\sReviews", &count_text);

    Ok(BookFields {
        summary,
        rating,
        ratings_num,
        reviews,
    })
}

fn capture_count(pattern: &str, text: &str) -> String {
    Regex::new(pattern)
        .unwrap()
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
        <html><body>
            <div id="js--summary-description"><p>A fine book.</p></div>
            <div class="review-wrapper__rating-summary">
                <span class="summary-title"> 4.5 </span>
            </div>
            <div id="js--rating-review-count-summary">15 Ratings and 3 Reviews</div>
        </body></html>
    "#;

    #[test]
    fn parses_all_fields() {
        let fields = parse_book_page(FULL_PAGE).unwrap();

        assert_eq!(fields.summary, "<p>A fine book.</p>");
        assert_eq!(fields.rating, "4.5");
        assert_eq!(fields.ratings_num, "15");
        assert_eq!(fields.reviews, "3");
    }

    #[test]
    fn counts_default_to_empty_when_pattern_absent() {
        let page = r#"
            <div id="js--summary-description">s</div>
            <div class="review-wrapper__rating-summary">
                <span class="summary-title">5.0</span>
            </div>
            <div id="js--rating-review-count-summary">No ratings yet</div>
        "#;
        let fields = parse_book_page(page).unwrap();

        assert_eq!(fields.ratings_num, "");
        assert_eq!(fields.reviews, "");
    }

    #[test]
    fn missing_summary_element_fails_the_target() {
        let page = r#"
            <div class="review-wrapper__rating-summary">
                <span class="summary-title">5.0</span>
            </div>
            <div id="js--rating-review-count-summary">1 Ratings and 1 Reviews</div>
        "#;

        assert!(matches!(
            parse_book_page(page),
            Err(ExtractionError::MissingElement(SUMMARY_SELECTOR))
        ));
    }

    #[test]
    fn missing_count_element_fails_the_target() {
        let page = r#"
            <div id="js--summary-description">s</div>
            <div class="review-wrapper__rating-summary">
                <span class="summary-title">5.0</span>
            </div>
        "#;

        assert!(matches!(
            parse_book_page(page),
            Err(ExtractionError::MissingElement(COUNT_SELECTOR))
        ));
    }
}
