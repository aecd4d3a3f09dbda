pub mod gateways;
pub mod query;
pub mod tag;
pub mod usecases;

pub mod entities {
    pub use poi_entities::{feature::*, geo::*, location::*, poi::*, weather::*};
}
