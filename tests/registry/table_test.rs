/*!
 * Slot Table Tests
 * Fixed-capacity semantics, first-empty-found reuse, and entry records
 */

use mempart::{BlockEntry, JobRecord, RegistryError, SlotTable};
use pretty_assertions::assert_eq;

#[test]
fn test_new_table_is_empty() {
    let table: SlotTable<BlockEntry> = SlotTable::new(10);

    assert_eq!(table.capacity(), 10);
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert!(!table.is_full());
    assert_eq!(table.find_free_slot(), Some(0));
}

#[test]
fn test_insert_fills_slots_in_index_order() {
    let mut table = SlotTable::new(4);

    assert_eq!(table.insert(BlockEntry::new(0, 100)), Ok(0));
    assert_eq!(table.insert(BlockEntry::new(100, 100)), Ok(1));
    assert_eq!(table.insert(BlockEntry::new(200, 100)), Ok(2));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_slot_reuse_is_first_empty_found() {
    let mut table = SlotTable::new(4);
    table.insert(BlockEntry::new(0, 10)).unwrap();
    table.insert(BlockEntry::new(10, 10)).unwrap();
    table.insert(BlockEntry::new(20, 10)).unwrap();

    table.delete_at(1);

    // The freed middle slot is reused before the untouched tail slot
    assert_eq!(table.find_free_slot(), Some(1));
    assert_eq!(table.insert(BlockEntry::new(30, 10)), Ok(1));
}

#[test]
fn test_full_table_rejects_inserts() {
    let mut table = SlotTable::new(2);
    table.insert(BlockEntry::new(0, 10)).unwrap();
    table.insert(BlockEntry::new(10, 10)).unwrap();

    assert!(table.is_full());
    assert_eq!(
        table.insert(BlockEntry::new(20, 10)),
        Err(RegistryError::TableFull { capacity: 2 })
    );
}

#[test]
fn test_delete_at_is_idempotent() {
    let mut table = SlotTable::new(2);
    let index = table.insert(BlockEntry::new(0, 10)).unwrap();

    table.delete_at(index);
    table.delete_at(index);
    // Out-of-range deletes are ignored as well
    table.delete_at(99);

    assert!(table.is_empty());
    assert_eq!(table.get(index), None);
}

#[test]
fn test_iterate_yields_occupied_slots_in_index_order() {
    let mut table = SlotTable::new(5);
    table.insert(BlockEntry::new(0, 10)).unwrap();
    table.insert(BlockEntry::new(10, 20)).unwrap();
    table.insert(BlockEntry::new(30, 30)).unwrap();
    table.delete_at(1);

    let entries: Vec<_> = table.iter().map(|(i, e)| (i, e.size)).collect();
    assert_eq!(entries, vec![(0, 10), (2, 30)]);
}

#[test]
fn test_insert_at_overwrites_the_chosen_slot() {
    let mut table = SlotTable::new(3);
    let index = table.find_free_slot().unwrap();
    table.insert_at(index, BlockEntry::new(0, 10));

    assert_eq!(table.get(index), Some(&BlockEntry::new(0, 10)));
}

#[test]
fn test_job_names_are_length_limited() {
    assert!(JobRecord::new("a".repeat(20), 100).is_ok());
    assert_eq!(
        JobRecord::new("a".repeat(21), 100),
        Err(RegistryError::NameTooLong { len: 21, max: 20 })
    );
}

#[test]
fn test_job_record_accessors() {
    let record = JobRecord::new("editor", 250).unwrap();

    assert_eq!(record.name(), "editor");
    assert_eq!(record.requested_size(), 250);
}

#[test]
fn test_job_table_round_trip() {
    let mut table = SlotTable::new(3);
    let index = table.insert(JobRecord::new("compiler", 400).unwrap()).unwrap();

    assert_eq!(table.get(index).map(JobRecord::name), Some("compiler"));
    table.delete_at(index);
    assert_eq!(table.get(index), None);
}
