//! Integration tests for board sessions backed by files on disk
//!
//! These tests verify:
//! - First launch generates and saves a board; later launches restore it
//! - Unusable saved state is replaced by a fresh board
//! - Configuration and word list files feed the board
//! - One-shot commands keep the saved board in step
//! - Export writes a single-page document

use bingo_board::commands::{BoardAction, SessionOptions, run_board_action, run_export};
use bingo_board::core::{FREE_INDEX, Line};
use bingo_board::export::{ExportError, SvgExporter};
use bingo_board::presenter::RenderedBoard;
use bingo_board::storage::{FileStore, PersistedState, STORAGE_KEY};
use bingo_board::wordlists::WordSource;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn session(dir: &Path) -> SessionOptions {
    SessionOptions {
        config_path: dir.join("config.json"),
        words: WordSource::Embedded,
        data_dir: dir.join("data"),
    }
}

fn saved_state_path(options: &SessionOptions) -> PathBuf {
    FileStore::new(&options.data_dir).path_for(STORAGE_KEY)
}

fn read_saved(options: &SessionOptions) -> PersistedState {
    let raw = fs::read_to_string(saved_state_path(options)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn write_words(dir: &Path, count: usize) -> PathBuf {
    let path = dir.join("words.txt");
    let words: Vec<String> = (0..count).map(|i| format!("phrase {i}")).collect();
    fs::write(&path, words.join("\n")).unwrap();
    path
}

#[test]
fn test_first_launch_saves_and_second_restores() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());

    let mut first_view = RenderedBoard::new();
    let first = options.open(&mut first_view);
    assert!(saved_state_path(&options).exists());

    let saved = read_saved(&options);
    assert_eq!(saved.contents.len(), 25);
    assert_eq!(saved.marks.len(), 25);
    assert!(saved.marks[FREE_INDEX]);
    assert!(saved.created_at.is_some());

    let mut second_view = RenderedBoard::new();
    let second = options.open(&mut second_view);
    assert_eq!(second.board(), first.board());
    assert_eq!(second_view.cells(), first_view.cells());
}

#[test]
fn test_saved_file_uses_camel_case_fields() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    options.open(&mut RenderedBoard::new());

    let raw = fs::read_to_string(saved_state_path(&options)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("contents").is_some());
    assert!(value.get("marks").is_some());
    assert!(value.get("createdAt").is_some());
}

#[test]
fn test_unparsable_saved_state_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    fs::create_dir_all(&options.data_dir).unwrap();
    fs::write(saved_state_path(&options), "{not json").unwrap();

    let mut view = RenderedBoard::new();
    let controller = options.open(&mut view);

    assert_eq!(controller.board().marked_count(), 1);
    let saved = read_saved(&options);
    assert_eq!(saved.contents, controller.board().contents().to_vec());
}

#[test]
fn test_wrong_length_saved_state_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    fs::create_dir_all(&options.data_dir).unwrap();
    let short = serde_json::json!({
        "contents": vec!["a"; 24],
        "marks": vec![true; 24],
    });
    fs::write(saved_state_path(&options), short.to_string()).unwrap();

    let mut view = RenderedBoard::new();
    let controller = options.open(&mut view);

    assert_eq!(controller.board().marked_count(), 1);
    assert!(controller.board().contents().iter().all(|c| c != "a"));
}

#[test]
fn test_saved_state_without_created_at_restores() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    fs::create_dir_all(&options.data_dir).unwrap();
    let mut contents: Vec<String> = (0..25).map(|i| format!("cell {i}")).collect();
    contents[FREE_INDEX] = "FREE".to_string();
    let mut marks = vec![false; 25];
    marks[FREE_INDEX] = true;
    marks[3] = true;
    let state = serde_json::json!({ "contents": contents, "marks": marks });
    fs::write(saved_state_path(&options), state.to_string()).unwrap();

    let mut view = RenderedBoard::new();
    let controller = options.open(&mut view);

    assert_eq!(controller.board().content(0), Some("cell 0"));
    assert!(controller.board().is_marked(3));
    assert_eq!(view.cell(3).unwrap().content, "cell 3");
}

#[test]
fn test_config_file_sets_free_label_and_title() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    fs::write(
        &options.config_path,
        r#"{"boardTitle": "Standup Bingo", "freeTileName": "Coffee"}"#,
    )
    .unwrap();

    let report = run_board_action(&options, BoardAction::Show).unwrap();

    assert_eq!(report.title, "Standup Bingo");
    assert_eq!(report.cells[FREE_INDEX].content, "Coffee");
    assert!(report.cells[FREE_INDEX].marked);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    fs::write(&options.config_path, "boardTitle = nope").unwrap();

    let report = run_board_action(&options, BoardAction::Show).unwrap();

    assert_eq!(report.title, "Bingo!");
    assert_eq!(report.cells[FREE_INDEX].content, "FREE");
}

#[test]
fn test_word_file_feeds_board() {
    let temp_dir = TempDir::new().unwrap();
    let mut options = session(temp_dir.path());
    options.words = WordSource::File(write_words(temp_dir.path(), 30));

    let report = run_board_action(&options, BoardAction::Show).unwrap();

    assert_eq!(report.pool_size, 30);
    for (index, cell) in report.cells.iter().enumerate() {
        if index != FREE_INDEX {
            assert!(cell.content.starts_with("phrase "), "cell {index}: {}", cell.content);
        }
    }
}

#[test]
fn test_missing_word_file_gives_blank_board() {
    let temp_dir = TempDir::new().unwrap();
    let mut options = session(temp_dir.path());
    options.words = WordSource::File(temp_dir.path().join("missing.txt"));

    let report = run_board_action(&options, BoardAction::Show).unwrap();

    assert_eq!(report.pool_size, 0);
    let blanks = report.cells.iter().filter(|c| c.content.is_empty()).count();
    assert_eq!(blanks, 24);
    assert_eq!(report.cells[FREE_INDEX].content, "FREE");
}

#[test]
fn test_shuffle_reloads_edited_word_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut options = session(temp_dir.path());
    let words = write_words(temp_dir.path(), 10);
    options.words = WordSource::File(words.clone());

    let before = run_board_action(&options, BoardAction::Show).unwrap();
    assert_eq!(before.pool_size, 10);

    let more: Vec<String> = (0..40).map(|i| format!("fresh {i}")).collect();
    fs::write(&words, more.join("\n")).unwrap();

    // The saved board still holds the old phrases until a shuffle deals again
    let restored = run_board_action(&options, BoardAction::Show).unwrap();
    assert_eq!(restored.cells, before.cells);

    let after = run_board_action(&options, BoardAction::Shuffle).unwrap();
    assert_eq!(after.pool_size, 40);
    assert!(
        after
            .cells
            .iter()
            .enumerate()
            .all(|(i, c)| i == FREE_INDEX || c.content.starts_with("fresh "))
    );
}

#[test]
fn test_toggles_persist_between_commands() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());

    let report = run_board_action(&options, BoardAction::Toggle(7)).unwrap();
    assert!(report.cells[7].marked);
    assert!(!report.win_signalled);
    assert!(read_saved(&options).marks[7]);

    let report = run_board_action(&options, BoardAction::Toggle(7)).unwrap();
    assert!(!report.cells[7].marked);
    assert!(!read_saved(&options).marks[7]);
}

#[test]
fn test_diagonal_through_free_cell_wins() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());

    for index in [0, 6, 18] {
        let report = run_board_action(&options, BoardAction::Toggle(index)).unwrap();
        assert!(!report.win_signalled);
    }
    let report = run_board_action(&options, BoardAction::Toggle(24)).unwrap();

    assert!(report.win_signalled);
    assert_eq!(report.winning_lines, vec![Line::Diagonal]);

    // Showing a restored winning board reports the line without a new signal
    let report = run_board_action(&options, BoardAction::Show).unwrap();
    assert!(!report.win_signalled);
    assert_eq!(report.winning_lines, vec![Line::Diagonal]);
}

#[test]
fn test_out_of_range_toggle_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    let before = run_board_action(&options, BoardAction::Show).unwrap();

    assert!(run_board_action(&options, BoardAction::Toggle(25)).is_err());

    let after = run_board_action(&options, BoardAction::Show).unwrap();
    assert_eq!(after.cells, before.cells);
}

#[test]
fn test_clear_deals_fresh_board() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    run_board_action(&options, BoardAction::Toggle(0)).unwrap();

    let report = run_board_action(&options, BoardAction::Clear).unwrap();

    assert!(!report.cells[0].marked);
    assert_eq!(report.cells.iter().filter(|c| c.marked).count(), 1);
    assert_eq!(read_saved(&options).marks.iter().filter(|m| **m).count(), 1);
}

#[test]
fn test_export_writes_single_page() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    let output = temp_dir.path().join("board.svg");

    let path = run_export(&options, &SvgExporter::new(&output)).unwrap();

    assert_eq!(path, output);
    let svg = fs::read_to_string(&output).unwrap();
    assert_eq!(svg.matches("<svg").count(), 1);
    assert!(svg.contains(r#"width="595.28pt""#));
    assert!(svg.contains("Bingo!"));
}

#[test]
fn test_export_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let options = session(temp_dir.path());
    let exporter = SvgExporter::new(temp_dir.path().join("no/such/dir/board.svg"));

    let result = run_export(&options, &exporter);

    assert!(matches!(result, Err(ExportError::Io { .. })));
}
