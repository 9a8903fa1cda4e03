mod common;

use bookrec::domain::values::action::Action;
use bookrec::infrastructure::flatfile::interaction_log::CsvInteractionLog;
use bookrec::infrastructure::memory::catalog::InMemoryCatalog;
use bookrec::infrastructure::random::shufflers::SeededShuffler;
use bookrec::BookRec;
use common::{books, line_index, setup, titles_of};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_empty_history_skips_similarity_engine() {
    let dir = tempfile::tempdir().unwrap();
    let (br, index) = setup(dir.path());

    assert!(br.recommend_for_user("nobody", 15).unwrap().is_empty());
    assert_eq!(index.queries(), 0);

    br.like("someone-else", "A").unwrap();
    assert!(br.recommend_for_user("nobody", 15).unwrap().is_empty());
    assert_eq!(index.queries(), 0);
}

#[test]
fn test_liked_seed_yields_its_neighbors() {
    let dir = tempfile::tempdir().unwrap();
    let (br, _) = setup(dir.path());
    br.like("alice", "A").unwrap();

    let recs = br.recommend_for_user("alice", 5).unwrap();
    let titles: HashSet<&str> = titles_of(&recs).into_iter().collect();
    assert!(titles.contains("B"));
    assert!(titles.contains("C"));
    assert!(!titles.contains("A"));
    assert_eq!(titles.len(), recs.len());
}

#[test]
fn test_excludes_history_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let (br, _) = setup(dir.path());
    br.like("bob", "C").unwrap();
    br.search_and_recommend("bob", "A", 5).unwrap();

    // seeds [C, A]: C gives B, D (A is a seed); A gives only repeats and seeds
    let recs = br.recommend_for_user("bob", 3).unwrap();
    assert_eq!(titles_of(&recs), vec!["B", "D"]);
}

#[test]
fn test_stops_as_soon_as_count_is_reached() {
    let dir = tempfile::tempdir().unwrap();
    let (br, index) = setup(dir.path());
    br.like("carol", "C").unwrap();
    br.like("carol", "E").unwrap();

    let recs = br.recommend_for_user("carol", 1).unwrap();
    assert_eq!(titles_of(&recs), vec!["B"]);
    assert_eq!(index.queries(), 1);
}

#[test]
fn test_unknown_seed_titles_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let (br, index) = setup(dir.path());
    br.like("dave", "Not In Catalog").unwrap();

    assert!(br.recommend_for_user("dave", 5).unwrap().is_empty());
    assert_eq!(index.queries(), 0);

    br.search_and_recommend("dave", "E", 5).unwrap();
    let recs = br.recommend_for_user("dave", 2).unwrap();
    assert_eq!(titles_of(&recs), vec!["D", "C"]);
}

#[test]
fn test_repeated_events_do_not_duplicate_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let (br, _) = setup(dir.path());
    for _ in 0..3 {
        br.like("erin", "A").unwrap();
        br.search_and_recommend("erin", "A", 5).unwrap();
    }

    let recs = br.recommend_for_user("erin", 10).unwrap();
    assert_eq!(titles_of(&recs), vec!["B", "C", "D", "E"]);
}

#[test]
fn test_seeded_shuffle_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("user_logs.csv");

    let build = || {
        BookRec::with_parts(
            Arc::new(InMemoryCatalog::from_books(books(&["A", "B", "C", "D", "E"]))),
            Arc::new(line_index()),
            Arc::new(CsvInteractionLog::new(&log_path)),
            Arc::new(SeededShuffler::new(99)),
        )
    };

    let first = build();
    for title in ["A", "E", "C"] {
        first.record("frank", Action::Liked, title).unwrap();
    }

    let a = first.recommend_for_user("frank", 2).unwrap();
    let b = build().recommend_for_user("frank", 2).unwrap();
    assert_eq!(a, b);
    assert!(a.iter().all(|r| !["A", "E", "C"].contains(&r.title.as_str())));
}

#[test]
fn test_huge_count_is_bounded_by_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let (br, _) = setup(dir.path());
    br.like("gina", "A").unwrap();

    let recs = br.recommend_for_user("gina", usize::MAX).unwrap();
    assert_eq!(titles_of(&recs), vec!["B", "C", "D", "E"]);
    let recs = br.recommend_for_user("gina", usize::MAX / 2).unwrap();
    assert_eq!(recs.len(), 4);
}
