/*!
 * mempart - Demo Driver
 *
 * Scripted variable-partition walkthrough: carve a 1000-unit pool with
 * first-fit, punch a hole by releasing a partition, then place into the
 * resulting layout with best-fit and worst-fit while keeping the block and
 * job tables in step with the allocator.
 */

use mempart::core::limits::{DEFAULT_BLOCK_TABLE_CAPACITY, DEFAULT_JOB_TABLE_CAPACITY};
use mempart::report::{render_blocks, render_free_list, render_jobs};
use mempart::{BlockEntry, JobRecord, MemoryManager, PlacementPolicy, SlotTable};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut manager = MemoryManager::new();
    let mut blocks: SlotTable<BlockEntry> = SlotTable::new(DEFAULT_BLOCK_TABLE_CAPACITY);
    let mut jobs: SlotTable<JobRecord> = SlotTable::new(DEFAULT_JOB_TABLE_CAPACITY);

    print!("{}", render_free_list(manager.free_regions()));

    // Carve four 100-unit partitions off the front of the pool
    let mut placed = Vec::new();
    for i in 0..4 {
        let address = manager.allocate(100, PlacementPolicy::FirstFit)?;
        let block_slot = blocks.insert(BlockEntry::new(address, 100))?;
        let job_slot = jobs.insert(JobRecord::new(format!("job-{i}"), 100)?)?;
        println!("Allocated block: start = {address}, size = 100");
        placed.push((address, block_slot, job_slot));
    }
    print!("{}", render_free_list(manager.free_regions()));

    // Release the second partition, leaving a 100-unit hole
    let (address, block_slot, job_slot) = placed[1];
    manager.release(address, 100)?;
    blocks.delete_at(block_slot);
    jobs.delete_at(job_slot);
    println!("Released block: start = {address}, size = 100");
    print!("{}", render_free_list(manager.free_regions()));

    // Best-fit prefers the hole, worst-fit the large tail region
    let best = manager.allocate(60, PlacementPolicy::BestFit)?;
    blocks.insert(BlockEntry::new(best, 60))?;
    jobs.insert(JobRecord::new("editor", 60)?)?;
    println!("best-fit placed 60 units at {best}");

    let worst = manager.allocate(60, PlacementPolicy::WorstFit)?;
    blocks.insert(BlockEntry::new(worst, 60))?;
    jobs.insert(JobRecord::new("compiler", 60)?)?;
    println!("worst-fit placed 60 units at {worst}");

    print!("{}", render_free_list(manager.free_regions()));
    print!("{}", render_blocks(&blocks));
    print!("{}", render_jobs(&jobs));

    let stats = manager.stats();
    println!(
        "{} of {} units in use ({:.1}%), {} outstanding blocks across {} free regions",
        stats.used_memory,
        stats.total_memory,
        stats.usage_percentage,
        stats.allocated_blocks,
        stats.free_regions
    );

    Ok(())
}
