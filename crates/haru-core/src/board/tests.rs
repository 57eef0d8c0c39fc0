//! Tests for the board module.

use super::*;
use crate::error::StoreError;
use crate::models::{Category, CategoryFilter};
use crate::params::{AddTask, EditTask, Id};
use crate::store::{MemoryStore, StoreEvent};

/// Helper function to create a board over a fresh in-memory store
fn create_test_board() -> Board {
    BoardBuilder::new()
        .build()
        .expect("Failed to create board")
}

fn add_params(text: &str) -> AddTask {
    AddTask {
        text: text.to_string(),
        date: "2024-03-05".to_string(),
        time: "09:30".to_string(),
        category: Category::Home,
    }
}

/// Drains subscription events into the board until a snapshot lands.
async fn sync_once(board: &mut Board, updates: &mut crate::store::Subscription) {
    while let Some(event) = updates.next().await {
        if board.apply_event(event) {
            return;
        }
    }
    panic!("subscription ended without a snapshot");
}

#[tokio::test]
async fn test_cache_reflects_store_after_add() {
    let mut board = create_test_board();
    let mut updates = board.connect();
    sync_once(&mut board, &mut updates).await;
    assert!(board.tasks().is_empty());

    let outcome = board
        .apply(Command::Add(add_params("Buy milk")))
        .await
        .expect("Failed to add task");
    assert_eq!(outcome, CommandOutcome::Submitted);

    // The cache only changes once the push arrives
    assert!(board.tasks().is_empty());
    sync_once(&mut board, &mut updates).await;

    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].text, "Buy milk");
    assert!(!board.tasks()[0].completed);
}

#[tokio::test]
async fn test_add_with_blank_text_is_ignored() {
    let board = create_test_board();
    let outcome = board
        .add_task(&add_params("   "))
        .await
        .expect("Add should not error");
    assert_eq!(outcome, CommandOutcome::Ignored);
}

#[tokio::test]
async fn test_edit_clears_editing_selection_on_success() {
    let mut board = create_test_board();
    let mut updates = board.connect();
    sync_once(&mut board, &mut updates).await;

    board.add_task(&add_params("Original")).await.unwrap();
    sync_once(&mut board, &mut updates).await;
    let id = board.tasks()[0].id.clone();

    board.open_edit(&Id { id: id.clone() });
    assert_eq!(board.selection().editing, Some(id.clone()));

    let outcome = board
        .edit_task(&EditTask {
            id,
            text: "Edited".to_string(),
            date: "2024-03-06".to_string(),
            time: "10:00".to_string(),
            category: Category::Work,
        })
        .await
        .expect("Failed to edit task");
    assert_eq!(outcome, CommandOutcome::Submitted);
    assert_eq!(board.selection().editing, None);

    sync_once(&mut board, &mut updates).await;
    assert_eq!(board.tasks()[0].text, "Edited");
    assert_eq!(board.tasks()[0].category, Category::Work);
    assert!(board.tasks()[0].updated_at.is_some());
}

#[tokio::test]
async fn test_toggle_unknown_id_is_ignored() {
    let board = create_test_board();
    let outcome = board
        .toggle_task(&Id {
            id: "missing".into(),
        })
        .await
        .expect("Toggle should not error");
    assert_eq!(outcome, CommandOutcome::Ignored);
}

#[tokio::test]
async fn test_open_edit_unknown_id_is_ignored() {
    let mut board = create_test_board();
    let outcome = board.open_edit(&Id {
        id: "missing".into(),
    });
    assert_eq!(outcome, CommandOutcome::Ignored);
    assert_eq!(board.selection().editing, None);
}

#[tokio::test]
async fn test_confirm_delete_without_request_is_ignored() {
    let mut board = create_test_board();
    let outcome = board
        .confirm_delete()
        .await
        .expect("Confirm should not error");
    assert_eq!(outcome, CommandOutcome::Ignored);
}

#[tokio::test]
async fn test_cancel_delete_clears_pending_state() {
    let mut board = create_test_board();
    board.request_delete(&Id { id: "t1".into() });
    assert!(board.pending_delete().is_some());

    let outcome = board.cancel_delete();
    assert_eq!(outcome, CommandOutcome::SelectionChanged);
    assert!(board.pending_delete().is_none());
}

#[tokio::test]
async fn test_set_filter_changes_view() {
    let mut board = create_test_board();
    let mut updates = board.connect();
    sync_once(&mut board, &mut updates).await;

    board.add_task(&add_params("Home task")).await.unwrap();
    sync_once(&mut board, &mut updates).await;
    board
        .add_task(&AddTask {
            text: "Work task".to_string(),
            date: "2024-03-05".to_string(),
            time: "11:00".to_string(),
            category: Category::Work,
        })
        .await
        .unwrap();
    sync_once(&mut board, &mut updates).await;

    assert_eq!(board.view().len(), 2);

    board.set_filter(CategoryFilter::Only(Category::Work));
    let view = board.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].text, "Work task");
}

#[tokio::test]
async fn test_lost_subscription_keeps_stale_cache() {
    let mut board = create_test_board();
    let mut updates = board.connect();
    sync_once(&mut board, &mut updates).await;

    board.add_task(&add_params("Survivor")).await.unwrap();
    sync_once(&mut board, &mut updates).await;
    assert_eq!(board.tasks().len(), 1);

    let rerender = board.apply_event(StoreEvent::Lost(StoreError::network("gone")));
    assert!(!rerender);
    assert_eq!(board.tasks().len(), 1, "stale cache must stay displayed");
}

#[tokio::test]
async fn test_builder_rejects_empty_database_url() {
    let result = BoardBuilder::new()
        .with_config(Some(crate::store::StoreConfig::new("  ")))
        .build();
    assert!(result.is_err());
}

#[tokio::test]
async fn test_builder_accepts_explicit_store() {
    let store = std::sync::Arc::new(MemoryStore::new());
    let board = BoardBuilder::new()
        .with_store(store)
        .build()
        .expect("Failed to build board");
    assert!(board.tasks().is_empty());
}
