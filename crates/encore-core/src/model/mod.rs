pub mod act;
pub mod dates;
pub mod ids;
pub mod location;

pub use act::Act;
pub use dates::ConcertDates;
pub use ids::ActId;
pub use location::{LocationRecord, LocationsPayload};
