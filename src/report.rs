/*!
 * Report
 * Text-table rendering of allocator and registry state
 */

use crate::memory::Region;
use crate::registry::{BlockEntry, JobRecord, SlotTable};
use std::fmt::Write;

/// Render the free list as one `start/size` row per region, address order
pub fn render_free_list(regions: &[Region]) -> String {
    let mut out = String::from("Free blocks:\n");
    for region in regions {
        let _ = writeln!(out, "{region}");
    }
    out
}

/// Render the allocated-block table, occupied slots only
pub fn render_blocks(table: &SlotTable<BlockEntry>) -> String {
    let mut out = String::from("Allocated blocks:\n");
    for (index, entry) in table.iter() {
        let _ = writeln!(out, "[{index}] {entry}");
    }
    out
}

/// Render the job table, occupied slots only
pub fn render_jobs(table: &SlotTable<JobRecord>) -> String {
    let mut out = String::from("Jobs:\n");
    for (index, record) in table.iter() {
        let _ = writeln!(out, "[{index}] {record}");
    }
    out
}
