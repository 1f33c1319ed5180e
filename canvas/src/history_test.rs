#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::ItemKind;

fn add(doc: &mut ItemStore, history: &mut History, kind: ItemKind) -> ItemId {
    let item = CanvasItem::new(kind, "", 0.0, 0.0);
    let id = item.id;
    let index = doc.len();
    doc.insert(item.clone());
    history.record(Command::Add { index, item });
    id
}

fn ids(doc: &ItemStore) -> Vec<ItemId> {
    doc.iter().map(|i| i.id).collect()
}

#[test]
fn new_history_cannot_undo_or_redo() {
    let history = History::new(10);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.is_empty());
}

#[test]
fn undo_add_removes_item_and_redo_restores_it() {
    let mut doc = ItemStore::new();
    let mut history = History::new(10);
    let id = add(&mut doc, &mut history, ItemKind::Note);

    let undone = history.undo(&mut doc).unwrap();
    assert_eq!(undone.item_id(), id);
    assert!(doc.get(&id).is_none());
    assert!(history.can_redo());

    history.redo(&mut doc).unwrap();
    assert!(doc.get(&id).is_some());
    assert!(!history.can_redo());
}

#[test]
fn undo_remove_restores_original_position() {
    let mut doc = ItemStore::new();
    let mut history = History::new(10);
    let a = add(&mut doc, &mut history, ItemKind::Note);
    let b = add(&mut doc, &mut history, ItemKind::Square);
    let c = add(&mut doc, &mut history, ItemKind::Circle);

    let (index, item) = doc.remove(&b).unwrap();
    history.record(Command::Remove { index, item });
    assert_eq!(ids(&doc), vec![a, c]);

    history.undo(&mut doc);
    assert_eq!(ids(&doc), vec![a, b, c]);
}

#[test]
fn redo_add_keeps_edits_made_after_recording() {
    let mut doc = ItemStore::new();
    let mut history = History::new(10);
    let id = add(&mut doc, &mut history, ItemKind::Note);
    assert!(doc.set_prompt(&id, "use as hero copy"));
    doc.move_to(&id, 40.0, 60.0);

    history.undo(&mut doc).unwrap();
    let Some(Command::Add { item, .. }) = history.redo(&mut doc) else {
        panic!("expected the add to be re-applied");
    };
    assert_eq!(item.prompt, "use as hero copy");

    let restored = doc.get(&id).unwrap();
    assert_eq!(restored.prompt, "use as hero copy");
    assert_eq!((restored.x, restored.y), (40.0, 60.0));
}

#[test]
fn undo_remove_after_redo_keeps_latest_item_state() {
    let mut doc = ItemStore::new();
    let mut history = History::new(10);
    let id = add(&mut doc, &mut history, ItemKind::Note);
    let (index, item) = doc.remove(&id).unwrap();
    history.record(Command::Remove { index, item });

    history.undo(&mut doc).unwrap();
    assert!(doc.set_prompt(&id, "warmer palette"));
    history.redo(&mut doc).unwrap();
    assert!(doc.get(&id).is_none());

    history.undo(&mut doc).unwrap();
    assert_eq!(doc.get(&id).unwrap().prompt, "warmer palette");
}

#[test]
fn undo_move_restores_previous_corner() {
    let mut doc = ItemStore::new();
    let mut history = History::new(10);
    let id = add(&mut doc, &mut history, ItemKind::Square);

    doc.move_to(&id, 40.0, 50.0);
    history.record(Command::Move { id, from: Point::new(0.0, 0.0), to: Point::new(40.0, 50.0) });

    history.undo(&mut doc);
    let item = doc.get(&id).unwrap();
    assert_eq!((item.x, item.y), (0.0, 0.0));

    history.redo(&mut doc);
    let item = doc.get(&id).unwrap();
    assert_eq!((item.x, item.y), (40.0, 50.0));
}

#[test]
fn recording_after_undo_discards_redo_tail() {
    let mut doc = ItemStore::new();
    let mut history = History::new(10);
    add(&mut doc, &mut history, ItemKind::Note);
    add(&mut doc, &mut history, ItemKind::Square);

    history.undo(&mut doc);
    assert!(history.can_redo());

    add(&mut doc, &mut history, ItemKind::Arrow);
    assert!(!history.can_redo());
    assert_eq!(history.len(), 2);
}

#[test]
fn undo_redo_respect_bounds() {
    let mut doc = ItemStore::new();
    let mut history = History::new(10);
    assert!(history.undo(&mut doc).is_none());
    add(&mut doc, &mut history, ItemKind::Note);
    assert!(history.redo(&mut doc).is_none());
    assert!(history.undo(&mut doc).is_some());
    assert!(history.undo(&mut doc).is_none());
}

#[test]
fn limit_drops_oldest_commands() {
    let mut doc = ItemStore::new();
    let mut history = History::new(2);
    let first = add(&mut doc, &mut history, ItemKind::Note);
    add(&mut doc, &mut history, ItemKind::Square);
    add(&mut doc, &mut history, ItemKind::Circle);

    assert_eq!(history.len(), 2);
    history.undo(&mut doc);
    history.undo(&mut doc);
    assert!(!history.can_undo());
    assert!(doc.get(&first).is_some());
}

#[test]
fn clear_forgets_everything() {
    let mut doc = ItemStore::new();
    let mut history = History::new(10);
    add(&mut doc, &mut history, ItemKind::Note);
    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
