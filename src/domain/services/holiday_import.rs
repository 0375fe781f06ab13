use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::models::holiday::{Holiday, HolidayCandidate};

#[derive(Debug)]
pub struct ImportOutcome {
    pub added: Vec<Holiday>,
    pub skipped: Vec<HolidayCandidate>,
}

/// Splits a candidate batch into rows to insert and duplicates to report.
/// An existing holiday always wins over an incoming one with the same date,
/// and a date repeated inside the batch is kept only the first time.
pub fn plan_import(existing: &[Holiday], candidates: Vec<HolidayCandidate>) -> ImportOutcome {
    let mut seen: HashSet<NaiveDate> = existing.iter().map(|h| h.date).collect();
    let mut added = Vec::new();
    let mut skipped = Vec::new();

    for candidate in candidates {
        if seen.insert(candidate.date) {
            added.push(Holiday::new(candidate.date, candidate.name, candidate.reason));
        } else {
            skipped.push(candidate);
        }
    }

    ImportOutcome { added, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(date: &str, name: &str) -> HolidayCandidate {
        HolidayCandidate {
            date: date.parse().unwrap(),
            name: name.to_string(),
            reason: None,
        }
    }

    #[test]
    fn test_import_twice_adds_once() {
        let batch = vec![
            candidate("2026-01-01", "New Year"),
            candidate("2026-05-01", "May Day"),
        ];

        let first = plan_import(&[], batch.clone());
        assert_eq!(first.added.len(), 2);
        assert!(first.skipped.is_empty());

        let second = plan_import(&first.added, batch);
        assert!(second.added.is_empty());
        assert_eq!(second.skipped.len(), 2);
    }

    #[test]
    fn test_existing_holiday_wins_over_candidate() {
        let existing = vec![Holiday::new(
            "2026-01-01".parse().unwrap(),
            "Kept Name".to_string(),
            None,
        )];

        let outcome = plan_import(&existing, vec![candidate("2026-01-01", "Incoming Name")]);
        assert!(outcome.added.is_empty());
        assert_eq!(outcome.skipped[0].name, "Incoming Name");
    }

    #[test]
    fn test_duplicate_date_within_batch_keeps_first() {
        let outcome = plan_import(
            &[],
            vec![
                candidate("2026-12-25", "Christmas Day"),
                candidate("2026-12-25", "Christmas Again"),
            ],
        );
        assert_eq!(outcome.added.len(), 1);
        assert_eq!(outcome.added[0].name, "Christmas Day");
        assert_eq!(outcome.skipped.len(), 1);
    }
}
