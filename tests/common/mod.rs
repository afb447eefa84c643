use medical_booking::Store;
use tempfile::TempDir;

/// Lowest bcrypt work factor, keeps hashing fast in tests.
pub const TEST_HASH_COST: u32 = 4;

pub fn setup_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open(temp_dir.path().join("medical.db"))
        .unwrap()
        .with_hash_cost(TEST_HASH_COST);
    (temp_dir, store)
}
