//! Property tests for the progress-state algebra.

use proptest::prelude::*;

use guide_store::{KvStore, ProgressState};

fn fresh_state(dir: &tempfile::TempDir) -> ProgressState {
    ProgressState::load(KvStore::at(dir.path()))
}

proptest! {
    #[test]
    fn toggle_bookmark_is_an_involution(id in "[a-z0-9-]{1,24}") {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut progress = fresh_state(&dir);
        let before = progress.is_bookmarked(&id);

        progress.toggle_bookmark(&id);
        prop_assert_eq!(progress.is_bookmarked(&id), !before);

        progress.toggle_bookmark(&id);
        prop_assert_eq!(progress.is_bookmarked(&id), before);
    }

    #[test]
    fn mark_completed_is_idempotent(id in "[a-z0-9-]{1,24}", repeats in 1usize..5) {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut progress = fresh_state(&dir);

        progress.mark_completed(&id);
        let once = progress.get().clone();

        for _ in 0..repeats {
            progress.mark_completed(&id);
        }
        prop_assert_eq!(progress.get(), &once);
    }

    #[test]
    fn completion_round_trips_through_incomplete(id in "[a-z0-9-]{1,24}") {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut progress = fresh_state(&dir);

        prop_assert!(!progress.is_completed(&id));
        progress.mark_completed(&id);
        prop_assert!(progress.is_completed(&id));
        progress.mark_incomplete(&id);
        prop_assert!(!progress.is_completed(&id));
    }

    #[test]
    fn mutations_are_durable_across_reload(
        completed in prop::collection::hash_set("[a-z0-9-]{1,16}", 0..8),
        bookmarked in prop::collection::hash_set("[a-z0-9-]{1,16}", 0..8),
    ) {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let mut progress = fresh_state(&dir);
            for id in &completed {
                progress.mark_completed(id);
            }
            for id in &bookmarked {
                progress.toggle_bookmark(id);
            }
        }

        let reloaded = fresh_state(&dir);
        prop_assert_eq!(&reloaded.get().completed, &completed);
        prop_assert_eq!(&reloaded.get().bookmarked, &bookmarked);
    }
}
