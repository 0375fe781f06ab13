use chrono::NaiveDate;

use crate::domain::models::holiday::HolidayCandidate;

pub const PRESET_REGIONS: [&str; 2] = ["DE", "AT"];

/// Built-in fixed-date public holidays per region, used when the external
/// feed is unavailable or unwanted. Movable feasts are left to the feed.
pub fn regional_preset(region: &str, year: i32) -> Option<Vec<HolidayCandidate>> {
    match region {
        "DE" => Some(vec![
            candidate(year, 1, 1, "Neujahr"),
            candidate(year, 5, 1, "Tag der Arbeit"),
            candidate(year, 10, 3, "Tag der Deutschen Einheit"),
            candidate(year, 12, 25, "1. Weihnachtstag"),
            candidate(year, 12, 26, "2. Weihnachtstag"),
        ]),
        "AT" => Some(vec![
            candidate(year, 1, 1, "Neujahr"),
            candidate(year, 1, 6, "Heilige Drei Könige"),
            candidate(year, 5, 1, "Staatsfeiertag"),
            candidate(year, 8, 15, "Mariä Himmelfahrt"),
            candidate(year, 10, 26, "Nationalfeiertag"),
            candidate(year, 12, 25, "Christtag"),
            candidate(year, 12, 26, "Stefanitag"),
        ]),
        _ => None,
    }
}

fn candidate(year: i32, month: u32, day: u32, name: &str) -> HolidayCandidate {
    HolidayCandidate {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        name: name.to_string(),
        reason: None,
    }
}
