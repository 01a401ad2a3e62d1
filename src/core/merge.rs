// merge.rs - Most-recent-wins reduction of per-file user maps

use crate::data::loaders::load_file;
use crate::data::{Column, UserMap, UserRecord};
use std::collections::hash_map::{Entry, Values};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Pick the surviving record for one user ID.
///
/// The record with the later `last_active` date wins. An undated record is older than
/// any dated one. Equal dates, or no dates on either side, keep `incoming`, so the
/// outcome only ignores arrival order when the dates differ.
pub fn merge_record(existing: UserRecord, incoming: UserRecord) -> UserRecord {
    match (existing.last_active, incoming.last_active) {
        (Some(current), Some(new)) if current > new => existing,
        (Some(_), None) => existing,
        _ => incoming,
    }
}

/// One record per user ID across every processed file
#[derive(Debug, Default)]
pub struct AggregateUserMap {
    users: HashMap<String, UserRecord>,
}

impl AggregateUserMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's records into the aggregate
    pub fn merge_file(&mut self, file_users: UserMap) {
        let mut replaced = 0usize;
        let mut added = 0usize;

        for (user_id, incoming) in file_users {
            match self.users.entry(user_id) {
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                    added += 1;
                }
                Entry::Occupied(mut slot) => {
                    let existing = std::mem::take(slot.get_mut());
                    let mut winner = merge_record(existing, incoming);
                    winner.user_id = slot.key().clone();
                    *slot.get_mut() = winner;
                    replaced += 1;
                }
            }
        }

        debug!("Merged file: {} new users, {} collisions resolved", added, replaced);
    }

    pub fn get(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn records(&self) -> Values<'_, String, UserRecord> {
        self.users.values()
    }
}

impl FromIterator<UserMap> for AggregateUserMap {
    fn from_iter<I: IntoIterator<Item = UserMap>>(files: I) -> Self {
        let mut aggregate = Self::new();
        for file_users in files {
            aggregate.merge_file(file_users);
        }
        aggregate
    }
}

/// Load every input in order and reduce them into one map.
///
/// Unreadable files are logged and skipped.
pub fn merge_files(paths: &[PathBuf], columns: &[Column]) -> AggregateUserMap {
    let mut aggregate = AggregateUserMap::new();
    let mut loaded = 0usize;

    for path in paths {
        match load_file(path, columns) {
            Ok(file_users) => {
                aggregate.merge_file(file_users);
                loaded += 1;
            }
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }

    info!(
        "Merged {} of {} files into {} users",
        loaded,
        paths.len(),
        aggregate.len()
    );
    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loaders::process_file;
    use crate::data::Column;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn user_map(records: Vec<UserRecord>) -> UserMap {
        records.into_iter().map(|r| (r.user_id.clone(), r)).collect()
    }

    #[test]
    fn test_later_date_wins_in_either_order() {
        let a = UserRecord::new("A", "1", "", date(2021, 1, 5));
        let b = UserRecord::new("B", "1", "", date(2021, 3, 1));

        assert_eq!(merge_record(a.clone(), b.clone()), b);
        assert_eq!(merge_record(b.clone(), a), b);
    }

    #[test]
    fn test_dated_beats_undated_in_either_order() {
        let a = UserRecord::new("A", "1", "", None);
        let b = UserRecord::new("B", "1", "", date(2021, 1, 1));

        assert_eq!(merge_record(a.clone(), b.clone()), b);
        assert_eq!(merge_record(b.clone(), a), b);
    }

    #[test]
    fn test_ties_favor_incoming() {
        let first = UserRecord::new("First", "1", "", None);
        let second = UserRecord::new("Second", "1", "", None);
        assert_eq!(merge_record(first, second.clone()), second);

        let first = UserRecord::new("First", "1", "", date(2021, 1, 1));
        let second = UserRecord::new("Second", "1", "", date(2021, 1, 1));
        assert_eq!(merge_record(first, second.clone()), second);
    }

    #[test]
    fn test_merge_file_inserts_and_resolves() {
        let mut aggregate = AggregateUserMap::new();
        aggregate.merge_file(user_map(vec![
            UserRecord::new("Alice", "1", "", date(2021, 1, 5)),
            UserRecord::new("Bob", "2", "", None),
        ]));
        aggregate.merge_file(user_map(vec![
            UserRecord::new("Alice Old", "1", "", date(2020, 6, 1)),
            UserRecord::new("Bobby", "2", "", None),
            UserRecord::new("Carol", "3", "", None),
        ]));

        assert_eq!(aggregate.len(), 3);
        assert_eq!(aggregate.get("1").unwrap().name, "Alice");
        assert_eq!(aggregate.get("2").unwrap().name, "Bobby");
        assert_eq!(aggregate.get("3").unwrap().name, "Carol");
    }

    #[test]
    fn test_whole_record_replacement_across_files() {
        let columns = Column::default_columns();
        let file1 = process_file(
            "Name,User ID,Username,Last active\nAlice,U1,alice_old,\"Jan 05, 2021\"\n",
            &columns,
        );
        let file2 = process_file(
            "Username,User ID,Last active\nalice_new,U1,\"Mar 01, 2021\"\n",
            &columns,
        );

        let aggregate: AggregateUserMap = vec![file1, file2].into_iter().collect();
        let alice = aggregate.get("U1").unwrap();

        assert_eq!(alice.username, "alice_new");
        assert_eq!(alice.last_active, date(2021, 3, 1));
        // No partial-field merge: file 2 had no Name column
        assert_eq!(alice.name, "");
    }

    #[test]
    fn test_merge_files_skips_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        std::fs::write(&first, "Name,User ID,Last active\nAlice,1,\"Jan 05, 2021\"\n").unwrap();
        std::fs::write(&second, "Name,User ID,Last active\nAlicia,1,\"Feb 01, 2021\"\n").unwrap();

        let paths = vec![first, dir.path().join("missing.csv"), second];
        let aggregate = merge_files(&paths, &Column::default_columns());

        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate.get("1").unwrap().name, "Alicia");
    }

    #[test]
    fn test_reprocessing_same_file_is_stable() {
        let columns = Column::default_columns();
        let text = "Name,User ID,Last active\nAlice,1,\"Jan 05, 2021\"\nBob,2,\n";

        let once: AggregateUserMap = vec![process_file(text, &columns)].into_iter().collect();
        let twice: AggregateUserMap = vec![process_file(text, &columns), process_file(text, &columns)]
            .into_iter()
            .collect();

        assert_eq!(once.len(), twice.len());
        for record in once.records() {
            assert_eq!(twice.get(&record.user_id), Some(record));
        }
    }
}
