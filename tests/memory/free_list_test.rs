/*!
 * Free List Tests
 * Ordering, coalescing, and read access over the free region set
 */

use mempart::memory::FreeList;
use mempart::Region;
use pretty_assertions::assert_eq;

#[test]
fn test_new_list_spans_the_whole_pool() {
    let list = FreeList::new(1000);

    assert_eq!(list.regions(), &[Region::new(0, 1000)]);
    assert_eq!(list.total_free(), 1000);
    assert_eq!(list.largest(), 1000);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_insert_preserves_address_order() {
    let mut list = FreeList::default();
    list.insert(Region::new(500, 100));
    list.insert(Region::new(0, 50));
    list.insert(Region::new(200, 80));

    let addresses: Vec<_> = list.iter().map(|r| r.address).collect();
    assert_eq!(addresses, vec![0, 200, 500]);
}

#[test]
fn test_zero_size_insert_is_a_no_op() {
    let mut list = FreeList::new(100);
    list.insert(Region::new(50, 0));

    assert_eq!(list.regions(), &[Region::new(0, 100)]);
}

#[test]
fn test_coalesce_merges_an_adjacent_pair() {
    let mut list = FreeList::default();
    list.insert(Region::new(100, 50));
    list.insert(Region::new(150, 30));
    list.coalesce();

    assert_eq!(list.regions(), &[Region::new(100, 80)]);
}

#[test]
fn test_coalesce_leaves_gapped_regions_alone() {
    let mut list = FreeList::default();
    list.insert(Region::new(0, 50));
    list.insert(Region::new(100, 50));
    list.coalesce();

    assert_eq!(list.regions(), &[Region::new(0, 50), Region::new(100, 50)]);
}

#[test]
fn test_coalesce_runs_to_fixed_point_in_one_pass() {
    // Three regions that collapse into one: the middle insert bridges both
    let mut list = FreeList::default();
    list.insert(Region::new(0, 100));
    list.insert(Region::new(200, 100));
    list.insert(Region::new(100, 100));
    list.coalesce();

    assert_eq!(list.regions(), &[Region::new(0, 300)]);
    assert_eq!(list.largest(), 300);
}

#[test]
fn test_largest_of_an_empty_list_is_zero() {
    let list = FreeList::default();

    assert!(list.is_empty());
    assert_eq!(list.largest(), 0);
    assert_eq!(list.total_free(), 0);
}
