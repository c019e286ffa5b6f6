//! Partition properties of the classifier over generated trees

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use treematch::compare::comparer::{ComparerFactory, FileComparer};
use treematch::compare::similarity::letter_pair_similarity;
use treematch::diff::{Differ, MatchingConfig};
use treematch::error::DiffError;
use treematch::tree::snapshot::Snapshot;

/// Scores by the letter pairs of the two file names, no disk access.
struct NameScores;

struct NameComparer {
    before: String,
}

impl FileComparer for NameComparer {
    fn similarity(&self, after: &Path) -> Result<f64, DiffError> {
        let after = after.file_name().map(|n| n.to_string_lossy().to_string());
        Ok(letter_pair_similarity(&self.before, &after.unwrap_or_default()))
    }
}

impl ComparerFactory for NameScores {
    type Comparer = NameComparer;

    fn comparer_for(&self, before: &Path) -> Result<NameComparer, DiffError> {
        let dir = before
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(NameComparer {
            before: format!("{}{}", dir, before.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()),
        })
    }
}

fn tree() -> impl Strategy<Value = BTreeSet<PathBuf>> {
    prop::collection::btree_set(("[abc]{1,2}", "[xyz]"), 0..10).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(dir, name)| PathBuf::from(format!("{}/{}.txt", dir, name)))
            .collect()
    })
}

fn differ(threshold: f64, parallel: bool) -> Differ {
    Differ::new(MatchingConfig {
        similarity_threshold: threshold,
        close_match_threshold: 0.75,
        parallel,
    })
}

proptest! {
    #[test]
    fn every_before_path_gets_exactly_one_record(
        before in tree(),
        after in tree(),
        threshold in 0.0f64..=1.0,
    ) {
        let before_snap = Snapshot::from_paths(PathBuf::from("/before"), before.clone());
        let after_snap = Snapshot::from_paths(PathBuf::from("/after"), after.clone());
        let result = differ(threshold, false).compare(&before_snap, &after_snap, &NameScores).unwrap();

        let mut seen: Vec<&PathBuf> = Vec::new();
        seen.extend(result.unchanged().iter().map(|r| &r.path));
        seen.extend(result.moved().iter().map(|r| &r.orig_path));
        seen.extend(result.ambiguous().iter().map(|r| &r.orig_path));
        seen.sort();

        let expected: Vec<&PathBuf> = before.iter().collect();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(result.classified_count(), before.len());
    }

    #[test]
    fn new_files_are_exactly_the_unclaimed_after_paths(before in tree(), after in tree()) {
        let before_snap = Snapshot::from_paths(PathBuf::from("/before"), before);
        let after_snap = Snapshot::from_paths(PathBuf::from("/after"), after.clone());
        let result = differ(0.75, false).compare(&before_snap, &after_snap, &NameScores).unwrap();

        let mut claimed: BTreeSet<PathBuf> = BTreeSet::new();
        claimed.extend(result.unchanged().iter().map(|r| r.path.clone()));
        claimed.extend(result.moved().iter().map(|r| r.new_path.clone()));
        for r in result.ambiguous() {
            claimed.extend(r.candidates.keys().cloned());
        }

        let new_files: BTreeSet<PathBuf> = result.new_files().iter().cloned().collect();
        prop_assert!(new_files.is_disjoint(&claimed));
        let union: BTreeSet<PathBuf> = new_files.union(&claimed).cloned().collect();
        prop_assert_eq!(union, after);
    }

    #[test]
    fn parallel_matches_sequential(before in tree(), after in tree()) {
        let before_snap = Snapshot::from_paths(PathBuf::from("/before"), before);
        let after_snap = Snapshot::from_paths(PathBuf::from("/after"), after);
        let sequential = differ(0.75, false).compare(&before_snap, &after_snap, &NameScores).unwrap();
        let parallel = differ(0.75, true).compare(&before_snap, &after_snap, &NameScores).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}
