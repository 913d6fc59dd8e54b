// SPDX-License-Identifier: MPL-2.0
use snowletter::config::{self, Config};
use snowletter::content::{Block, LetterContent};
use tempfile::tempdir;

#[test]
fn config_round_trips_through_the_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");

    let written = Config {
        letter_path: Some("letters/solstice.txt".into()),
        photo_path: Some("family.jpg".into()),
        signature: Some("With love".to_string()),
    };
    config::save_to_path(&written, &settings_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&settings_path).expect("Failed to load config file");
    assert_eq!(loaded, written);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn letter_content_resolves_through_the_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let letter_path = dir.path().join("note.txt");
    std::fs::write(&letter_path, "Dear friend,\n\nSee you soon.").expect("write letter");

    let config = Config {
        letter_path: Some(letter_path),
        signature: Some("Always".to_string()),
        ..Config::default()
    };
    let content = LetterContent::resolve(None, &config);

    assert_eq!(
        content.blocks(),
        vec![
            Block::Paragraph("Dear friend,".to_string()),
            Block::Spacer,
            Block::Paragraph("See you soon.".to_string()),
        ]
    );
    assert_eq!(content.signature(), "Always");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn default_content_is_never_empty() {
    let content = LetterContent::default();
    assert!(content
        .blocks()
        .iter()
        .any(|block| matches!(block, Block::Paragraph(_))));
}
