//! Human-readable date normalization
//!
//! Blog posts carry their publication date as free text in whatever locale
//! the theme renders ("3 de enero de 2004", "15 août 2021", "1st of January
//! of 2005"). [`normalize`] turns such a string into a canonical
//! `dd/mm/YYYY` date, or `None` when no calendar date can be recovered.
//! The caller decides what to do with `None`; the post extractor maps it to
//! an explicit sentinel instead of dropping the post.

use chrono::NaiveDate;

/// Month names and abbreviations, Spanish / French / English plus a few
/// Portuguese and Italian spellings that differ. Accented forms are listed
/// alongside their bare-ASCII variants.
const MONTH_NAMES: &[(&str, u32)] = &[
    // January
    ("enero", 1),
    ("janvier", 1),
    ("january", 1),
    ("janeiro", 1),
    ("gennaio", 1),
    ("jan", 1),
    ("ene", 1),
    // February
    ("febrero", 2),
    ("février", 2),
    ("fevrier", 2),
    ("february", 2),
    ("fevereiro", 2),
    ("febbraio", 2),
    ("feb", 2),
    ("fév", 2),
    ("fev", 2),
    // March
    ("marzo", 3),
    ("mars", 3),
    ("march", 3),
    ("março", 3),
    ("mar", 3),
    // April
    ("abril", 4),
    ("avril", 4),
    ("april", 4),
    ("aprile", 4),
    ("abr", 4),
    ("avr", 4),
    ("apr", 4),
    // May
    ("mayo", 5),
    ("mai", 5),
    ("may", 5),
    ("maio", 5),
    ("maggio", 5),
    // June
    ("junio", 6),
    ("juin", 6),
    ("june", 6),
    ("junho", 6),
    ("giugno", 6),
    ("jun", 6),
    // July
    ("julio", 7),
    ("juillet", 7),
    ("july", 7),
    ("julho", 7),
    ("luglio", 7),
    ("jul", 7),
    // August
    ("agosto", 8),
    ("août", 8),
    ("aout", 8),
    ("august", 8),
    ("ago", 8),
    ("aug", 8),
    // September
    ("septiembre", 9),
    ("setiembre", 9),
    ("septembre", 9),
    ("september", 9),
    ("setembro", 9),
    ("settembre", 9),
    ("sep", 9),
    ("sept", 9),
    ("set", 9),
    // October
    ("octubre", 10),
    ("octobre", 10),
    ("october", 10),
    ("outubro", 10),
    ("ottobre", 10),
    ("oct", 10),
    ("out", 10),
    ("ott", 10),
    // November
    ("noviembre", 11),
    ("novembre", 11),
    ("november", 11),
    ("novembro", 11),
    ("nov", 11),
    // December
    ("diciembre", 12),
    ("décembre", 12),
    ("decembre", 12),
    ("december", 12),
    ("dezembro", 12),
    ("dicembre", 12),
    ("dic", 12),
    ("déc", 12),
    ("dec", 12),
    ("dez", 12),
];

/// Filler words that connect date components in supported locales
const FILLERS: &[&str] = &["de", "del", "of", "the", "el", "le", "du", "em", "di", "den", "on"];

/// Normalizes a free-text date into `dd/mm/YYYY`
///
/// Returns `None` when the text does not contain a recoverable day, month,
/// and four-digit year, or when the combination is not a real calendar date.
pub fn normalize(raw: &str) -> Option<String> {
    let mut day: Option<u32> = None;
    let mut month: Option<u32> = None;
    let mut year: Option<i32> = None;

    for token in tokenize(raw) {
        if FILLERS.contains(&token.as_str()) {
            continue;
        }

        if month.is_none() {
            if let Some(m) = month_from_name(&token) {
                month = Some(m);
                continue;
            }
        }

        let Some(value) = numeric_value(&token) else {
            // Unknown word; dates like "Published 3 January 2004" still
            // carry usable components around it.
            continue;
        };

        if (1000..=9999).contains(&value) && year.is_none() {
            year = Some(value as i32);
        } else if year.is_some() && month.is_none() && day.is_none() && (1..=12).contains(&value) {
            // Year-first dates (2004-01-03) put the month before the day
            month = Some(value);
        } else if day.is_none() && (1..=31).contains(&value) {
            day = Some(value);
        } else if month.is_none() && (1..=12).contains(&value) {
            month = Some(value);
        }
    }

    let date = NaiveDate::from_ymd_opt(year?, month?, day?)?;
    Some(date.format("%d/%m/%Y").to_string())
}

/// Splits the text on whitespace and date punctuation, lowercased
fn tokenize(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '/' | '-' | ';'))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Parses a numeric token, tolerating ordinal suffixes ("1st", "3º")
fn numeric_value(token: &str) -> Option<u32> {
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let rest = &token[digits.len()..];
    if !rest.is_empty() && !matches!(rest, "st" | "nd" | "rd" | "th" | "º" | "ª" | "er" | "e") {
        return None;
    }

    digits.parse().ok()
}

/// Looks up a month name or abbreviation
fn month_from_name(token: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, number)| number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_date() {
        assert_eq!(normalize("3 de enero de 2004").as_deref(), Some("03/01/2004"));
    }

    #[test]
    fn test_french_date_with_accent() {
        assert_eq!(normalize("15 août 2021").as_deref(), Some("15/08/2021"));
    }

    #[test]
    fn test_english_ordinal_date() {
        assert_eq!(
            normalize("1st of January of 2005").as_deref(),
            Some("01/01/2005")
        );
    }

    #[test]
    fn test_english_month_first() {
        assert_eq!(normalize("January 15, 2021").as_deref(), Some("15/01/2021"));
    }

    #[test]
    fn test_numeric_date() {
        assert_eq!(normalize("03/01/2004").as_deref(), Some("03/01/2004"));
        assert_eq!(normalize("2004-01-03").as_deref(), Some("03/01/2004"));
    }

    #[test]
    fn test_surrounding_words_ignored() {
        assert_eq!(
            normalize("Publicado el 7 de mayo de 2020").as_deref(),
            Some("07/05/2020")
        );
    }

    #[test]
    fn test_unparseable_returns_none() {
        assert_eq!(normalize("No date"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("sometime last week"), None);
    }

    #[test]
    fn test_impossible_date_returns_none() {
        assert_eq!(normalize("31 de febrero de 2004"), None);
    }

    #[test]
    fn test_missing_year_returns_none() {
        assert_eq!(normalize("3 de enero"), None);
    }
}
