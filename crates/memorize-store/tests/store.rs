//! Integration tests for the file-backed deck store.

use memorize::{Flashcard, NewDeck};
use memorize_store::{DeckStore, Error};
use tempfile::TempDir;

fn bio_deck() -> NewDeck {
    NewDeck::new(
        "Bio 101",
        vec![
            Flashcard::new("What is osmosis?", "Osmosis is the diffusion of water."),
            Flashcard::new(
                "Explain the role of chlorophyll.",
                "Chlorophyll absorbs light for photosynthesis.",
            ),
        ],
    )
}

#[test]
fn test_open_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data").join("memorize.db");

    let store = DeckStore::open(&path).unwrap();
    assert!(path.exists());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_decks_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memorize.db");

    let saved = {
        let store = DeckStore::open(&path).unwrap();
        store.save(&bio_deck()).unwrap()
    };

    let store = DeckStore::open(&path).unwrap();
    let decks = store.list().unwrap();
    assert_eq!(decks, vec![saved]);
}

#[test]
fn test_list_is_newest_first() {
    let store = DeckStore::open_in_memory().unwrap();

    let bio = store.save(&bio_deck()).unwrap();
    let chem = store
        .save(&NewDeck::new(
            "Chem",
            vec![Flashcard::new("What is a catalyst?", "A catalyst speeds up reactions.")],
        ))
        .unwrap();

    let decks = store.list().unwrap();
    let names: Vec<&str> = decks.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Chem", "Bio 101"]);
    assert!(decks[0].created_at >= decks[1].created_at);
    assert_eq!(decks[0].id, chem.id);
    assert_eq!(decks[1].cards, bio.cards);
}

#[test]
fn test_delete_removes_only_that_deck() {
    let store = DeckStore::open_in_memory().unwrap();
    let first = store.save(&bio_deck()).unwrap();
    let second = store.save(&bio_deck()).unwrap();

    assert!(store.delete(first.id).unwrap());

    let decks = store.list().unwrap();
    assert_eq!(decks.len(), 1);
    assert_eq!(decks[0].id, second.id);
}

#[test]
fn test_delete_missing_id_is_a_no_op() {
    let store = DeckStore::open_in_memory().unwrap();
    let saved = store.save(&bio_deck()).unwrap();

    assert!(!store.delete(saved.id + 1).unwrap());
    assert!(!store.delete(-1).unwrap());
    assert_eq!(store.list().unwrap(), vec![saved]);
}

#[test]
fn test_delete_twice() {
    let store = DeckStore::open_in_memory().unwrap();
    let saved = store.save(&bio_deck()).unwrap();

    assert!(store.delete(saved.id).unwrap());
    assert!(!store.delete(saved.id).unwrap());
}

#[test]
fn test_validation_errors_describe_the_problem() {
    let store = DeckStore::open_in_memory().unwrap();

    let err = store
        .save(&NewDeck::new("", bio_deck().cards))
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("name"));

    let err = store.save(&NewDeck::new("Empty", Vec::new())).unwrap_err();
    assert!(err.to_string().contains("card"));
}

#[test]
fn test_store_is_shareable_across_threads() {
    let store = std::sync::Arc::new(DeckStore::open_in_memory().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                store
                    .save(&NewDeck::new(
                        format!("Deck {}", i),
                        vec![Flashcard::new("Q?", "A.")],
                    ))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.list().unwrap().len(), 4);
}
