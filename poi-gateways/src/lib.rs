//! Clients for the external services.

mod http;
pub mod met_no;
pub mod nominatim;
pub mod overpass;

pub use self::http::{client, HttpConfig};
