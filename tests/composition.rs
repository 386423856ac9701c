// Composition tests — the batch pipeline end to end on a temp directory tree.
//
// Builds "<Artist> - <Album>" folders of lyric files, runs the batch, and
// reads the JSON records back. No network access: the dictionary is built
// in memory.

use std::path::Path;

use songprint::album::record::AlbumRecord;
use songprint::dictionary::Dictionary;
use songprint::pipeline::batch;

fn dictionary() -> Dictionary {
    Dictionary::from_words(["wonderful", "hello", "world", "river", "stone"])
}

fn write_album(root: &Path, name: &str, tracks: &[(&str, &str)]) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    for (file, contents) in tracks {
        std::fs::write(dir.join(file), contents).unwrap();
    }
}

fn read_record(path: &Path) -> AlbumRecord {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn batch_writes_one_record_per_album() {
    let root = tempfile::tempdir().unwrap();
    write_album(
        root.path(),
        "Artist - Album",
        &[
            ("1 A.txt", "wonderful wonderful(x2)\nhello"),
            ("2 B.txt", "hello world"),
        ],
    );
    let output = root.path().join("JSON");

    let report = batch::run(root.path(), &output, &dictionary()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.written.len(), 1);
    assert_eq!(report.written[0].song_count, 2);
    assert_eq!(report.written[0].unique_word_count, 2);

    let record = read_record(&output.join("Artist - Album.json"));
    assert_eq!(record.artist, "Artist");
    assert_eq!(record.album_title, "Album");
    assert_eq!(record.songs[0].song_title, "A");
    assert_eq!(record.songs[0].unique_words, vec!["wonderful"]);
    assert_eq!(record.songs[1].song_title, "B");
    assert_eq!(record.songs[1].unique_words, vec!["world"]);
}

#[test]
fn failing_album_does_not_stop_the_batch() {
    let root = tempfile::tempdir().unwrap();
    write_album(
        root.path(),
        "Broken - Record",
        &[("2 Fine.txt", "river")],
    );
    // Not valid UTF-8, so reading it fails.
    std::fs::write(root.path().join("Broken - Record").join("1 Bad.txt"), [0xffu8, 0xfe, 0xfd])
        .unwrap();
    write_album(
        root.path(),
        "Zed - Later",
        &[("1 River.txt", "river stone"), ("2 Stone.txt", "stone")],
    );
    let output = root.path().join("JSON");

    let report = batch::run(root.path(), &output, &dictionary()).unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].directory, "Broken - Record");
    assert!(format!("{:#}", report.failures[0].error).contains("1 Bad.txt"));

    assert_eq!(report.written.len(), 1);
    assert!(!output.join("Broken - Record.json").exists());

    let record = read_record(&output.join("Zed - Later.json"));
    assert_eq!(record.songs[0].unique_words, vec!["river"]);
    assert!(record.songs[1].unique_words.is_empty());
}

#[test]
fn directories_without_separator_are_skipped() {
    let root = tempfile::tempdir().unwrap();
    write_album(root.path(), "Scratch", &[("1 A.txt", "hello")]);
    write_album(root.path(), "Artist - Album", &[("1 A.txt", "hello")]);
    std::fs::write(root.path().join("Loose - File.txt"), "hello").unwrap();
    let output = root.path().join("JSON");

    let report = batch::run(root.path(), &output, &dictionary()).unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.written.len(), 1);
    assert!(report.failures.is_empty());
}

#[test]
fn output_directory_is_created_and_reused() {
    let root = tempfile::tempdir().unwrap();
    write_album(root.path(), "Artist - Album", &[("1 A.txt", "hello")]);
    let output = root.path().join("nested").join("out");

    batch::run(root.path(), &output, &dictionary()).unwrap();
    let second = batch::run(root.path(), &output, &dictionary()).unwrap();

    assert_eq!(second.written.len(), 1);
    assert!(output.join("Artist - Album.json").exists());
}

#[test]
fn output_directory_inside_root_is_not_an_album() {
    let root = tempfile::tempdir().unwrap();
    write_album(root.path(), "Artist - Album", &[("1 A.txt", "hello")]);
    let output = root.path().join("Out - Put");

    let report = batch::run(root.path(), &output, &dictionary()).unwrap();

    assert_eq!(report.written.len(), 1);
    assert_eq!(report.written[0].directory, "Artist - Album");
}

#[test]
fn missing_root_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("does-not-exist");
    let output = root.path().join("JSON");

    assert!(batch::run(&missing, &output, &dictionary()).is_err());
}
