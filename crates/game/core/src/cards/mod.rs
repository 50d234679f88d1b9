//! Card value types.
//!
//! Cards are immutable values: anything that looks like mutation
//! ([`WoodyPlantCard::with_dweller`], [`Cave::with_card_count`]) returns a new
//! snapshot so that catalog instances shared between lookups are never
//! corrupted in place.
mod cave;
mod dweller;
mod types;
mod woody_plant;

pub use cave::Cave;
pub use dweller::DwellerCard;
pub use types::{DwellerPosition, GameBox, TreeSymbol};
pub use woody_plant::WoodyPlantCard;
