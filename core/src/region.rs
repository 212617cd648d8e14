//! Encounter region membership
//!
//! The helper panel is only relevant inside the Gauntlet instances. These
//! region IDs are the instance template regions the player is mapped back to.

use phf::phf_set;

use crate::host::LocationProvider;

/// Gauntlet (7512) and Corrupted Gauntlet (7768)
pub static GAUNTLET_REGION_IDS: phf::Set<u32> = phf_set! {
    7512u32,
    7768u32,
};

pub fn is_gauntlet_region(region_id: u32) -> bool {
    GAUNTLET_REGION_IDS.contains(&region_id)
}

/// True if the player is inside the encounter. No player means not inside.
pub fn in_gauntlet(location: &dyn LocationProvider) -> bool {
    location.current_region().is_some_and(is_gauntlet_region)
}
