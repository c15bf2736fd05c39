//! Service layer for the gateway.
//!
//! One client per upstream API family:
//! - NasaApi (keyed api.nasa.gov: APOD, Mars rovers, NEO, Earth imagery)
//! - MediaLibrary (NASA Image and Video Library search)
//! - Satellite (ISS position with primary/fallback sources, pass times)
//! - Launches (SpaceX launch records)
//! - Feeds (astronaut roster, spaceflight news)
//!
//! Plus the single-slot TTL cache used by the ISS position route.

mod cache;
mod feeds;
mod launches;
mod media;
mod nasa;
mod satellite;
mod upstream;

pub use cache::TtlSlot;
pub use feeds::FeedsService;
pub use launches::LaunchService;
pub use media::MediaLibraryService;
pub use nasa::{NasaApiService, RoverPhotoQuery};
pub use satellite::SatelliteService;
