/*!
 * Placement Policies
 * First-fit, best-fit, and worst-fit selection over the free list
 */

use super::types::{PlacementPolicy, Region};
use crate::core::types::Size;

impl PlacementPolicy {
    /// Pick the region that should satisfy a request for `size` units
    ///
    /// Pure read-only scan over the address-ordered slice; returns the index
    /// of the chosen region. Ties on equal size keep the earliest candidate
    /// under every policy (the scan never replaces a candidate with a later
    /// equal-sized one). `None` means no single region is large enough.
    pub fn select(&self, regions: &[Region], size: Size) -> Option<usize> {
        match self {
            PlacementPolicy::FirstFit => regions.iter().position(|r| r.fits(size)),
            PlacementPolicy::BestFit => {
                let mut best: Option<usize> = None;
                for (index, region) in regions.iter().enumerate() {
                    if !region.fits(size) {
                        continue;
                    }
                    if best.map_or(true, |b| region.size < regions[b].size) {
                        best = Some(index);
                    }
                }
                best
            }
            PlacementPolicy::WorstFit => {
                let mut worst: Option<usize> = None;
                for (index, region) in regions.iter().enumerate() {
                    if !region.fits(size) {
                        continue;
                    }
                    if worst.map_or(true, |w| region.size > regions[w].size) {
                        worst = Some(index);
                    }
                }
                worst
            }
        }
    }
}
