use std::cmp::Ordering;

use steamsweep_steam::GameRecord;

use crate::key::SortKey;

/// Returns the records ordered by `key`.
///
/// The sort is stable in both directions: records with equal keys keep their
/// input order.
pub fn sort(mut records: Vec<GameRecord>, key: SortKey, descending: bool) -> Vec<GameRecord> {
    sort_in_place(&mut records, key, descending);
    records
}

/// Orders records in place; see [`sort`].
pub fn sort_in_place(records: &mut [GameRecord], key: SortKey, descending: bool) {
    if descending {
        records.sort_by(|a, b| compare(b, a, key));
    } else {
        records.sort_by(|a, b| compare(a, b, key));
    }
}

/// Default ranking: least recently updated first.
pub fn rank(records: Vec<GameRecord>) -> Vec<GameRecord> {
    sort(records, SortKey::Recency, false)
}

fn compare(a: &GameRecord, b: &GameRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Recency => a.last_updated_timestamp.total_cmp(&b.last_updated_timestamp),
        SortKey::Size => a.size_gb.total_cmp(&b.size_gb),
        SortKey::Name => name_key(a).cmp(&name_key(b)),
    }
}

// Absent names sort as empty.
fn name_key(record: &GameRecord) -> String {
    record.name.as_deref().unwrap_or_default().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn game(id: &str, name: Option<&str>, size_gb: f64, ts: i64) -> GameRecord {
        GameRecord {
            id: id.into(),
            name: name.map(str::to_string),
            size_bytes: (size_gb * 1024.0 * 1024.0 * 1024.0) as u64,
            size_gb,
            last_updated_timestamp: ts as f64,
            last_updated_str: String::new(),
            path: PathBuf::from(format!("/steam/steamapps/appmanifest_{id}.acf")),
        }
    }

    fn ids(records: &[GameRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn fixtures() -> Vec<GameRecord> {
        vec![
            game("A", Some("Game A"), 10.0, 1_600_000_000),
            game("B", Some("Game B"), 50.0, 1_700_000_000),
        ]
    }

    fn mixed() -> Vec<GameRecord> {
        vec![
            game("1", Some("zeta"), 5.0, 300),
            game("2", Some("Alpha"), 20.0, 100),
            game("3", None, 5.0, 200),
            game("4", Some("beta"), 20.0, 100),
            game("5", Some("alpha"), 1.5, 300),
        ]
    }

    #[test]
    fn rank_puts_oldest_first() {
        assert_eq!(ids(&rank(fixtures())), vec!["A", "B"]);
    }

    #[test]
    fn size_descending_puts_largest_first() {
        let sorted = sort(fixtures(), SortKey::Size, true);
        assert_eq!(ids(&sorted), vec!["B", "A"]);
    }

    #[test]
    fn recency_ascending_is_non_decreasing() {
        let sorted = sort(mixed(), SortKey::Recency, false);
        assert!(
            sorted
                .windows(2)
                .all(|w| w[0].last_updated_timestamp <= w[1].last_updated_timestamp)
        );
    }

    #[test]
    fn recency_descending_is_non_increasing() {
        let sorted = sort(mixed(), SortKey::Recency, true);
        assert!(
            sorted
                .windows(2)
                .all(|w| w[0].last_updated_timestamp >= w[1].last_updated_timestamp)
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        // 2 and 4 share ts=100, 1 and 5 share ts=300.
        assert_eq!(
            ids(&sort(mixed(), SortKey::Recency, false)),
            vec!["2", "4", "3", "1", "5"]
        );
        assert_eq!(
            ids(&sort(mixed(), SortKey::Recency, true)),
            vec!["1", "5", "3", "2", "4"]
        );
        // 1 and 3 share 5.0 GB, 2 and 4 share 20.0 GB.
        assert_eq!(
            ids(&sort(mixed(), SortKey::Size, false)),
            vec!["5", "1", "3", "2", "4"]
        );
        assert_eq!(
            ids(&sort(mixed(), SortKey::Size, true)),
            vec!["2", "4", "1", "3", "5"]
        );
    }

    #[test]
    fn recency_orders_within_the_same_second() {
        let mut late = game("late", None, 1.0, 0);
        late.last_updated_timestamp = 1_600_000_000.75;
        let mut early = game("early", None, 1.0, 0);
        early.last_updated_timestamp = 1_600_000_000.25;

        let sorted = sort(vec![late, early], SortKey::Recency, false);
        assert_eq!(ids(&sorted), vec!["early", "late"]);
    }

    #[test]
    fn name_is_case_insensitive_and_absent_first() {
        // "Alpha" and "alpha" compare equal and keep input order.
        assert_eq!(
            ids(&sort(mixed(), SortKey::Name, false)),
            vec!["3", "2", "5", "4", "1"]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        for &key in SortKey::all() {
            for descending in [false, true] {
                let once = sort(mixed(), key, descending);
                let twice = sort(once.clone(), key, descending);
                assert_eq!(once, twice, "key={key} descending={descending}");
            }
        }
    }

    #[test]
    fn sorting_does_not_change_records() {
        let original = mixed();
        let mut sorted = sort(original.clone(), SortKey::Size, true);
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(sorted, original);
    }

    #[test]
    fn sort_in_place_matches_sort() {
        let mut records = mixed();
        sort_in_place(&mut records, SortKey::Name, true);
        assert_eq!(records, sort(mixed(), SortKey::Name, true));
    }

    #[test]
    fn empty_and_single() {
        assert!(rank(Vec::new()).is_empty());
        let one = vec![game("X", None, 1.0, 1)];
        assert_eq!(sort(one.clone(), SortKey::Size, true), one);
    }
}
