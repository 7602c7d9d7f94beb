//! Manager workflows and state persistence.

mod common;

use common::{sample_catalog, sample_styles};
use stylebook::{
    BulkEdit, CheckState, FieldEdit, FileStateStore, FontStatus, LineHeight, MemoryStateStore,
    SearchQuery, Slot, StateStore, StyleManager, StyleRecord,
};
use tempfile::TempDir;

#[test]
fn test_filter_combination() {
    let mut manager = StyleManager::builder()
        .snapshot(vec![
            StyleRecord::new("1", "A", common::inter("Regular"), 14.0),
            StyleRecord::new("2", "B", common::inter("Regular"), 16.0),
            StyleRecord::new("3", "C", stylebook::FontName::new("Roboto", "Regular"), 14.0),
        ])
        .build();
    manager.search(SearchQuery::new().family("Inter").font_size("14"));
    let ids: Vec<_> = manager.entries().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn test_reseed_twice_matches_snapshot() {
    let mut manager = StyleManager::builder().snapshot(sample_styles()).build();
    manager.search(SearchQuery::new().group("Body"));
    manager.search(SearchQuery::new().group("Body"));
    for entry in manager.entries() {
        assert_eq!(Some(entry), manager.snapshot().get(&entry.id));
    }
}

#[test]
fn test_bulk_edit_only_touches_selection() {
    let mut manager = StyleManager::builder().snapshot(sample_styles()).build();
    manager.toggle("S:1");
    manager.toggle("S:3");
    assert_eq!(manager.check_state(), CheckState::Indeterminate);

    let touched = manager.apply_bulk_edit(
        &BulkEdit::new()
            .group("Legacy/Type")
            .line_height("auto")
            .font_size("not a size"),
    );
    assert_eq!(touched, 2);

    let cache = manager.cache();
    assert_eq!(cache.get("S:1").unwrap().name, "Legacy/Type/H1");
    assert_eq!(cache.get("S:3").unwrap().name, "Legacy/Type/Regular");
    assert_eq!(cache.get("S:3").unwrap().line_height, LineHeight::Auto);
    assert_eq!(cache.get("S:3").unwrap().font_size, 14.0);
    assert_eq!(cache.get("S:2").unwrap().name, "Heading/H2");
}

#[test]
fn test_selection_flag_transitions() {
    let mut manager = StyleManager::builder().snapshot(sample_styles()).build();
    for id in ["S:1", "S:2", "S:3"] {
        manager.toggle(id);
        assert!(!manager.all_selected());
    }
    manager.toggle("S:4");
    assert!(manager.all_selected());
    manager.toggle("S:2");
    assert!(!manager.all_selected());

    manager.select_all();
    assert_eq!(manager.cache().selection_len(), 4);
    manager.deselect_all();
    assert_eq!(manager.cache().selection_len(), 0);
    assert_eq!(manager.check_state(), CheckState::Unchecked);
}

#[test]
fn test_edit_after_view_superseded_is_noop() {
    let mut manager = StyleManager::builder().snapshot(sample_styles()).build();
    manager.search(SearchQuery::new().group("Heading"));
    assert!(!manager.edit_field("S:3", FieldEdit::FontSize(99.0)));
    assert!(!manager.is_dirty());
}

#[test]
fn test_font_warnings_do_not_block_edits() {
    let mut manager = StyleManager::builder()
        .font_catalog(sample_catalog())
        .snapshot(sample_styles())
        .build();
    assert!(manager.edit_field("S:1", FieldEdit::FontFamily("Lato".into())));
    assert_eq!(manager.font_status("S:1"), Some(FontStatus::MissingFamily));
    assert!(manager.edit_field("S:1", FieldEdit::FontFamily("Roboto".into())));
    assert_eq!(manager.font_status("S:1"), Some(FontStatus::MissingStyle));
}

#[test]
fn test_state_survives_reopen_with_file_store() {
    let tmp = TempDir::new().unwrap();
    {
        let mut manager = StyleManager::builder()
            .state_store(FileStateStore::new(tmp.path()))
            .snapshot(sample_styles())
            .build();
        manager.search(SearchQuery::new().group("Body"));
        manager.edit_field("S:4", FieldEdit::FontSize(11.0));
        manager.select("S:3");
    }

    let manager = StyleManager::builder()
        .state_store(FileStateStore::new(tmp.path()))
        .build();
    assert_eq!(manager.snapshot().len(), 4);
    assert_eq!(manager.search_query().group, "Body");
    assert_eq!(manager.entries().len(), 2);
    assert_eq!(manager.cache().get("S:4").unwrap().font_size, 11.0);
    assert!(manager.cache().is_selected("S:3"));
    assert!(manager.is_dirty());
}

#[test]
fn test_reopen_with_snapshot_keeps_pending_edits() {
    let tmp = TempDir::new().unwrap();
    {
        let mut manager = StyleManager::builder()
            .state_store(FileStateStore::new(tmp.path()))
            .snapshot(sample_styles())
            .build();
        manager.edit_field("S:1", FieldEdit::FontSize(20.0));
        manager.select("S:1");
    }

    let manager = StyleManager::builder()
        .state_store(FileStateStore::new(tmp.path()))
        .snapshot(sample_styles())
        .build();
    assert_eq!(manager.cache().get("S:1").unwrap().font_size, 20.0);
    assert!(manager.cache().is_selected("S:1"));
    assert!(manager.is_dirty());

    let manager = StyleManager::builder()
        .state_store(FileStateStore::new(tmp.path()))
        .snapshot(sample_styles()[1..].to_vec())
        .build();
    assert!(!manager.cache().contains("S:1"));
    assert_eq!(manager.cache().selection_len(), 0);
    assert!(!manager.is_dirty());
}

#[test]
fn test_restore_tolerates_stale_selection_and_corrupt_slots() {
    let mut store = MemoryStateStore::new();
    let cache: Slot<Vec<StyleRecord>> = Slot::new("editCache");
    cache.set(&mut store, &sample_styles()[..2]).unwrap();
    store
        .save("selection", serde_json::json!(["S:1", "S:9"]))
        .unwrap();
    store
        .save("search.group", serde_json::json!({"not": "a string"}))
        .unwrap();

    let manager = StyleManager::builder().state_store(store).build();
    assert_eq!(manager.cache().len(), 2);
    assert_eq!(manager.cache().selected_ids(), vec!["S:1"]);
    assert!(!manager.all_selected());
    assert!(manager.search_query().group.is_empty());
}

#[test]
fn test_every_slot_written() {
    let mut manager = StyleManager::builder().snapshot(sample_styles()).build();
    manager.search(SearchQuery::new().name("H"));
    manager
        .handle_json(r#"{"type":"setShowTypoGroup","data":{}}"#)
        .unwrap();
    manager
        .handle_json(r#"{"type":"setShowDuplicateTypoGroup","data":{}}"#)
        .unwrap();

    let state = manager.state_store();
    for slot in [
        "snapshot",
        "editCache",
        "selection",
        "allSelected",
        "search.group",
        "search.name",
        "search.family",
        "search.style",
        "search.fontSize",
        "search.lineHeight",
        "showTypoGroup",
        "showDuplicateTypoGroup",
    ] {
        assert!(state.load(slot).unwrap().is_some(), "slot {} missing", slot);
    }
}
