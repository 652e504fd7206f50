use cardfile::codec;
use cardfile::collate;
use cardfile::store::fs_backend::FsBackend;
use cardfile::RecordStore;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 10;

#[test]
fn test_concurrent_adds_are_all_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.vcf");
    let store = Arc::new(RecordStore::with_backend(FsBackend::new(&path)));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|i| {
                        store
                            .add(&format!("Contact {t}-{i}"), &format!("+1{t}{i}"), "")
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "id handed out twice");
        }
    }

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), THREADS * PER_THREAD);
    assert!(listed
        .windows(2)
        .all(|w| collate::compare(w[0].name(), w[1].name()) == Ordering::Less));

    let on_disk = codec::decode(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.len(), THREADS * PER_THREAD);
}

#[test]
fn test_concurrent_duplicate_adds_admit_exactly_one() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(RecordStore::with_backend(FsBackend::new(
        dir.path().join("contacts.vcf"),
    )));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            let name = if t % 2 == 0 { "Alice" } else { "ALICE" };
            thread::spawn(move || store.add(name, "1", "").is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.len().unwrap(), 1);
}
