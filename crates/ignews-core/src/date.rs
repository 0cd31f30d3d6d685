//! Publication-date handling.
//!
//! The CMS reports `last_publication_date` as RFC 3339; older fixtures
//! carry bare `MM-DD-YYYY` dates. Display formatting follows the
//! site's locale: lowercase Portuguese month names, `dd de <month> de
//! yyyy`.

use chrono::{DateTime, Datelike, NaiveDate};

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parses the date formats the CMS emits.
pub fn parse_publication_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%m-%d-%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// `01 de abril de 2021` style long date.
pub fn format_long(date: NaiveDate) -> String {
    let month = MONTHS_PT[date.month0() as usize];
    format!("{:02} de {} de {}", date.day(), month, date.year())
}

/// Formats a raw CMS date for display. Unparseable or missing input
/// renders as an empty string; a bad date never fails a page.
pub fn display_publication_date(raw: Option<&str>) -> String {
    raw.and_then(parse_publication_date)
        .map(format_long)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_day_year() {
        let date = parse_publication_date("04-01-2021").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 4, 1).unwrap());
    }

    #[test]
    fn parses_rfc3339() {
        let date = parse_publication_date("2021-04-01T03:00:00+00:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 4, 1).unwrap());
    }

    #[test]
    fn parses_iso_date() {
        let date = parse_publication_date("2021-04-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 4, 1).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_publication_date("yesterday"), None);
        assert_eq!(parse_publication_date(""), None);
    }

    #[test]
    fn formats_long_pt_br() {
        let date = NaiveDate::from_ymd_opt(2021, 4, 1).unwrap();
        assert_eq!(format_long(date), "01 de abril de 2021");
    }

    #[test]
    fn formats_december() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_long(date), "25 de dezembro de 2023");
    }

    #[test]
    fn display_handles_the_cms_formats() {
        assert_eq!(display_publication_date(Some("04-01-2021")), "01 de abril de 2021");
        assert_eq!(
            display_publication_date(Some("2021-04-01T03:00:00+00:00")),
            "01 de abril de 2021"
        );
    }

    #[test]
    fn display_swallows_bad_input() {
        assert_eq!(display_publication_date(Some("not a date")), "");
        assert_eq!(display_publication_date(None), "");
    }
}
