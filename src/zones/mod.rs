//! Zones: the linear zone chain and the aura gate between zones.

mod data;
mod gate;

pub use data::{get_all_zones, Zone};
pub use gate::{
    check_requirements, target_index, total_aura_power, try_enter, unique_aura_count, Direction,
    GateDenial,
};
