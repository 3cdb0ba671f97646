use calendar_core::{
    ledger::{TransactionInput, TransactionKind, TransactionStore},
    profile::Profile,
    storage::SnapshotStore,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use tempfile::tempdir;

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn seeded_store() -> TransactionStore {
    let mut store = TransactionStore::new();
    store
        .add(
            TransactionInput::new(at(2026, 3, 21), 50_000, TransactionKind::Expense, "Makan")
                .with_title("Makan siang"),
        )
        .unwrap();
    store
        .add(TransactionInput::new(
            at(2026, 3, 1),
            9_500_000,
            TransactionKind::Income,
            "Gaji",
        ))
        .unwrap();
    store
}

#[test]
fn fresh_directory_loads_an_empty_store_and_default_profile() {
    let temp = tempdir().unwrap();
    let snapshots = SnapshotStore::open(temp.path()).unwrap();

    let store = snapshots.load_transactions().expect("fresh load succeeds");
    assert!(store.is_empty());

    let profile = snapshots.load_profile().expect("fresh profile load succeeds");
    assert_eq!(profile, Profile::default());
}

#[test]
fn transactions_survive_a_save_and_reload() {
    let temp = tempdir().unwrap();
    let snapshots = SnapshotStore::open(temp.path()).unwrap();

    let store = seeded_store();
    snapshots.save_transactions(&store).expect("save succeeds");

    let reloaded = snapshots.load_transactions().expect("reload succeeds");
    assert_eq!(reloaded.len(), 2);

    let originals = store.export_snapshot();
    let restored = reloaded.export_snapshot();
    for (restored_txn, original) in restored.iter().zip(originals.iter()) {
        assert_eq!(restored_txn.id, original.id);
        assert_eq!(restored_txn.date, original.date);
        assert_eq!(restored_txn.title, original.title);
        assert_eq!(restored_txn.amount, original.amount);
        assert_eq!(restored_txn.category, original.category);
    }
}

#[test]
fn failed_save_preserves_the_previous_snapshot() {
    let temp = tempdir().unwrap();
    let snapshots = SnapshotStore::open(temp.path()).unwrap();

    let mut store = seeded_store();
    snapshots.save_transactions(&store).expect("initial save");
    let original = fs::read_to_string(snapshots.transactions_path()).expect("read original");

    // Create a directory that collides with the staging file name to force
    // the write to fail.
    let staging = snapshots.transactions_path().with_extension("tmp");
    fs::create_dir_all(&staging).unwrap();

    store
        .add(TransactionInput::new(
            at(2026, 3, 22),
            75_000,
            TransactionKind::Expense,
            "Hiburan",
        ))
        .unwrap();
    let result = snapshots.save_transactions(&store);
    assert!(
        result.is_err(),
        "expected the save to fail when the staging path is a directory"
    );

    let current = fs::read_to_string(snapshots.transactions_path()).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed save must not corrupt the previous snapshot"
    );

    let _ = fs::remove_dir_all(&staging);
}

#[test]
fn corrupt_snapshot_is_an_error_not_a_reset() {
    let temp = tempdir().unwrap();
    let snapshots = SnapshotStore::open(temp.path()).unwrap();

    fs::write(snapshots.transactions_path(), "{ not json").unwrap();
    assert!(
        snapshots.load_transactions().is_err(),
        "corrupt data must surface instead of silently starting empty"
    );
}

#[test]
fn hand_edited_snapshot_with_a_broken_sign_fails_to_load() {
    let temp = tempdir().unwrap();
    let snapshots = SnapshotStore::open(temp.path()).unwrap();
    snapshots.save_transactions(&seeded_store()).unwrap();

    // Flip the stored expense positive, as a stray manual edit might.
    let path = snapshots.transactions_path();
    let data = fs::read_to_string(&path).expect("read saved snapshot");
    let edited = data.replace("\"amount\": -50000", "\"amount\": 50000");
    assert_ne!(edited, data, "the snapshot must contain the expense amount");
    fs::write(&path, edited).unwrap();

    assert!(
        snapshots.load_transactions().is_err(),
        "records that break the sign invariant must not load silently"
    );
}

#[test]
fn profile_round_trips_through_its_own_file() {
    let temp = tempdir().unwrap();
    let snapshots = SnapshotStore::open(temp.path()).unwrap();

    let profile = Profile::new(
        Some("Andrian".into()),
        Some("data:image/png;base64,aGVsbG8=".into()),
    );
    snapshots.save_profile(&profile).expect("profile saves");

    let reloaded = snapshots.load_profile().expect("profile reloads");
    assert_eq!(reloaded, profile);
    assert_ne!(
        snapshots.profile_path(),
        snapshots.transactions_path(),
        "concerns keep separate files"
    );
}

#[test]
fn snapshot_files_live_under_the_chosen_root() {
    let temp = tempdir().unwrap();
    let snapshots = SnapshotStore::open(temp.path().join("nested/data")).unwrap();

    snapshots.save_transactions(&seeded_store()).unwrap();
    assert!(snapshots.transactions_path().starts_with(temp.path()));
    assert!(snapshots.transactions_path().exists());
}
