use rtimerecorder::core::clock::ManualClock;
use rtimerecorder::core::display::store_lines;
use rtimerecorder::core::store::{SessionStore, read_sessions};
use rtimerecorder::errors::{LoadError, SaveError};
use rtimerecorder::models::session::Session;
use rtimerecorder::utils::time::parse_offset;
use std::fs;

fn store_at(t: f64) -> (SessionStore<ManualClock>, ManualClock) {
    let clock = ManualClock::new(t);
    (SessionStore::with_clock(clock.clone()), clock)
}

fn store_with(sessions: &[(&str, f64, f64)]) -> SessionStore<ManualClock> {
    let (mut store, clock) = store_at(0.0);
    for (activity, start, end) in sessions {
        clock.set(*start);
        store.start();
        clock.set(*end);
        store.stop(activity);
    }
    store
}

#[test]
fn start_then_stop_records_one_session() {
    let (mut store, clock) = store_at(1_000.0);

    store.start();
    clock.advance(0.25);
    store.stop("Study");

    assert_eq!(store.sessions().len(), 1);
    let s = &store.sessions()[0];
    assert_eq!(s.activity, "Study");
    assert!(s.end - s.start >= 0.0);
    assert!(!store.is_running());
}

#[test]
fn blank_label_uses_fallback() {
    let (mut store, _clock) = store_at(10.0);

    store.start();
    store.stop("");
    store.start();
    store.stop("   ");

    assert_eq!(store.sessions().len(), 2);
    assert!(store.sessions().iter().all(|s| s.activity == "Breathing"));
}

#[test]
fn custom_fallback_label() {
    let clock = ManualClock::new(0.0);
    let mut store = SessionStore::with_clock(clock).with_fallback("Idle");

    store.start();
    store.stop("");

    assert_eq!(store.sessions()[0].activity, "Idle");
}

#[test]
fn label_is_trimmed() {
    let (mut store, _clock) = store_at(0.0);
    store.start();
    store.stop("  Reading \n");
    assert_eq!(store.sessions()[0].activity, "Reading");
}

#[test]
fn stop_while_idle_is_noop() {
    let mut store = store_with(&[("A", 0.0, 10.0)]);
    let before = store.sessions().to_vec();

    assert!(store.stop("Study").is_none());

    assert_eq!(store.sessions(), before.as_slice());
}

#[test]
fn second_start_keeps_first_start_time() {
    let (mut store, clock) = store_at(100.0);

    store.start();
    clock.set(150.0);
    store.start();

    assert_eq!(store.running().map(|r| r.start), Some(100.0));

    clock.set(160.0);
    store.stop("X");
    assert_eq!(store.sessions(), &[Session::new("X", 100.0, 160.0)]);
}

#[test]
fn elapsed_follows_clock_while_running() {
    let (mut store, clock) = store_at(50.0);
    assert_eq!(store.elapsed(), None);

    store.start();
    clock.advance(12.5);
    assert_eq!(store.elapsed(), Some(12.5));

    store.stop("A");
    assert_eq!(store.elapsed(), None);
}

#[test]
fn serialize_round_trip() {
    let store = store_with(&[
        ("Study", 1_718_000_000.123_456, 1_718_003_600.654_321),
        ("Web-Surfing", 0.0, 0.0),
        ("読書", 42.5, 99.75),
    ]);

    let blob = store.serialize().expect("serialize");

    let (mut other, _clock) = store_at(0.0);
    let n = other.deserialize(&blob).expect("deserialize");

    assert_eq!(n, 3);
    assert_eq!(other.sessions(), store.sessions());
}

#[test]
fn empty_store_round_trip() {
    let (store, _clock) = store_at(0.0);
    let blob = store.serialize().expect("serialize");
    assert_eq!(blob.trim(), "[]");

    let mut other = store_with(&[("A", 0.0, 1.0)]);
    assert_eq!(other.deserialize(&blob).expect("deserialize"), 0);
    assert!(other.sessions().is_empty());
}

#[test]
fn serialized_fields_match_file_format() {
    let store = store_with(&[("Study", 1.5, 3.0)]);
    let value: serde_json::Value =
        serde_json::from_str(&store.serialize().expect("serialize")).expect("json");

    assert_eq!(
        value,
        serde_json::json!([{ "activity": "Study", "start": 1.5, "end": 3.0 }])
    );
}

#[test]
fn running_interval_is_not_serialized() {
    let (mut store, clock) = store_at(0.0);
    store.start();
    clock.advance(5.0);

    let blob = store.serialize().expect("serialize");
    assert_eq!(blob.trim(), "[]");
    assert!(store.is_running());
}

#[test]
fn malformed_input_keeps_sessions() {
    let mut store = store_with(&[("A", 0.0, 10.0), ("B", 10.0, 20.0)]);
    let before = store.sessions().to_vec();

    let bad_inputs = [
        "not json",
        "{}",
        r#"[{"activity": "A", "start": 1}]"#,
        r#"[{"activity": "A", "start": "x", "end": 2}]"#,
        r#"[{"activity": 7, "start": 1, "end": 2}]"#,
        r#"[{"activity": "", "start": 1, "end": 2}]"#,
    ];

    for input in bad_inputs {
        assert!(store.deserialize(input).is_err(), "accepted {input}");
        assert_eq!(store.sessions(), before.as_slice());
    }
}

#[test]
fn load_error_kinds() {
    let (mut store, _clock) = store_at(0.0);

    match store.deserialize("[1, 2") {
        Err(e @ LoadError::Malformed { .. }) => assert!(!e.is_unreadable()),
        other => panic!("unexpected: {other:?}"),
    }

    match store.deserialize(r#"[{"activity": " ", "start": 0, "end": 1}]"#) {
        Err(LoadError::EmptyActivity { index }) => assert_eq!(index, 0),
        other => panic!("unexpected: {other:?}"),
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let err = store
        .load_from_path(&dir.path().join("missing.json"))
        .expect_err("missing file");
    assert!(err.is_unreadable());
}

#[test]
fn load_does_not_touch_running_interval() {
    let (mut store, _clock) = store_at(7.0);
    store.start();

    store
        .deserialize(r#"[{"activity": "A", "start": 0, "end": 1}]"#)
        .expect("deserialize");

    assert_eq!(store.running().map(|r| r.start), Some(7.0));
}

#[test]
fn backwards_session_loads_and_displays_signed() {
    let (mut store, _clock) = store_at(0.0);
    let off = parse_offset("+00:00").expect("offset");

    let n = store
        .deserialize(
            r#"[
                {"activity": "A", "start": 100, "end": 40},
                {"activity": "A", "start": 0, "end": 30},
                {"activity": "B", "start": 1e300, "end": 0}
            ]"#,
        )
        .expect("backwards sessions are accepted");
    assert_eq!(n, 3);

    let lines = store_lines(&store, &off);
    assert_eq!(lines[0], "A: 00:01 ~ 00:00 (-0:01:00)");
    assert_eq!(lines[1], "A: 00:00 ~ 00:00 (0:00:30)");
    assert!(lines[2].starts_with("B: "));
    assert!(lines[2].contains("(-"));

    let totals = store.aggregate_by_activity();
    assert_eq!(totals["A"], -30.0);
    assert!(totals["B"] < 0.0);
}

#[test]
fn aggregate_sums_per_activity() {
    let store = store_with(&[("A", 0.0, 10.0), ("B", 0.0, 5.0), ("A", 20.0, 25.0)]);

    let totals = store.aggregate_by_activity();

    assert_eq!(totals.len(), 2);
    assert_eq!(totals["A"], 15.0);
    assert_eq!(totals["B"], 5.0);
}

#[test]
fn totals_keep_first_appearance_order() {
    let store = store_with(&[("B", 0.0, 5.0), ("A", 0.0, 10.0), ("B", 20.0, 25.0)]);

    let totals = store.totals();

    let labels: Vec<&str> = totals.iter().map(|t| t.activity.as_str()).collect();
    assert_eq!(labels, ["B", "A"]);
    assert_eq!(totals[0].sessions, 2);
    assert_eq!(totals[0].seconds, 10.0);
}

#[test]
fn display_list_is_most_recent_first() {
    let store = store_with(&[("x", 0.0, 100.0), ("y", 0.0, 50.0), ("z", 0.0, 200.0)]);

    let ends: Vec<f64> = store.list_for_display().iter().map(|s| s.end).collect();

    assert_eq!(ends, [200.0, 100.0, 50.0]);
    // insertion order untouched
    assert_eq!(store.sessions()[0].end, 100.0);
}

#[test]
fn display_list_ties_keep_insertion_order() {
    let store = store_with(&[("first", 0.0, 10.0), ("second", 5.0, 10.0)]);

    let labels: Vec<&str> = store
        .list_for_display()
        .iter()
        .map(|s| s.activity.as_str())
        .collect();

    assert_eq!(labels, ["first", "second"]);
}

#[test]
fn clear_resets_everything() {
    let mut store = store_with(&[("A", 0.0, 10.0)]);
    store.start();

    store.clear();

    assert!(store.sessions().is_empty());
    assert!(!store.is_running());

    // clearing an empty store is fine too
    store.clear();
    assert!(store.sessions().is_empty());
}

#[test]
fn save_writes_timestamped_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("nested").join("sessions");
    let offset = parse_offset("+09:00").expect("offset");

    let mut store = store_with(&[("Study", 0.0, 60.0)]);
    store.start(); // left running: not part of the file

    let path = store.save_to_dir(&target, &offset).expect("save");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("1970-01-01_09-01-00.json")
    );
    let saved = read_sessions(&path).expect("read back");
    assert_eq!(saved, vec![Session::new("Study", 0.0, 60.0)]);
}

#[test]
fn save_into_a_file_path_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "x").expect("write");
    let offset = parse_offset("Z").expect("offset");

    let store = store_with(&[("A", 0.0, 1.0)]);
    let err = store.save_to_dir(&blocker, &offset).expect_err("must fail");

    assert!(matches!(err, SaveError::CreateDir { .. }));
    assert_eq!(store.sessions().len(), 1);
}

#[test]
fn load_from_path_accepts_any_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("backup.txt");
    fs::write(&path, r#"[{"activity": "A", "start": 0, "end": 3}]"#).expect("write");

    let (mut store, _clock) = store_at(0.0);
    assert_eq!(store.load_from_path(&path).expect("load"), 1);
    assert_eq!(store.sessions()[0], Session::new("A", 0.0, 3.0));
}
