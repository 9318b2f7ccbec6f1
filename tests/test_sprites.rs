use std::fs;

use shooter_jets::entities::EnemyKind;
use shooter_jets::sprites::*;

#[test]
fn loaded_sprite_is_cropped_and_padded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ship.txt");
    fs::write(&path, "abcdef\nxy\n").unwrap();

    let sprite = try_load_sprite(&path, 4, 3).unwrap();
    assert!(!sprite.placeholder);
    assert_eq!(sprite.lines, vec!["abcd", "xy  ", "    "]);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = try_load_sprite(&dir.path().join("nope.txt"), 2, 2).unwrap_err();
    assert!(matches!(err, AssetError::Read { .. }));
}

#[test]
fn blank_file_is_an_empty_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.txt");
    fs::write(&path, "  \n\n").unwrap();
    assert!(matches!(
        try_load_sprite(&path, 2, 2),
        Err(AssetError::Empty { .. })
    ));
}

#[test]
fn failures_fall_back_to_a_solid_block() {
    let dir = tempfile::tempdir().unwrap();
    let sprite = load_sprite(&dir.path().join("nope.txt"), 3, 2);
    assert!(sprite.placeholder);
    assert_eq!(sprite, Sprite::placeholder(3, 2));
    assert_eq!(sprite.lines, vec!["███", "███"]);
}

#[test]
fn sprite_set_from_empty_dir_is_all_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let set = SpriteSet::load(dir.path(), (0.16, 0.04));

    assert!(set.player.placeholder);
    assert_eq!((set.player.cols, set.player.rows), (20, 5));
    assert_eq!((set.bullet.cols, set.bullet.rows), (4, 2));
    for kind in EnemyKind::ALL {
        let sprite = set.enemy(kind).expect("every kind has a sprite");
        assert!(sprite.placeholder);
        assert_eq!(sprite.lines.len(), sprite.rows as usize);
    }
}

#[test]
fn sprite_set_reads_files_that_exist() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bullet.txt"), "||\n").unwrap();
    let set = SpriteSet::load(dir.path(), (0.16, 0.04));
    assert!(!set.bullet.placeholder);
    assert_eq!(set.bullet.lines[0], "||  ");
    assert!(set.player.placeholder);
}
