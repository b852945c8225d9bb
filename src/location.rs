use crate::{Coordinates, Error};
use async_trait::async_trait;

/// Source of the device position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Returns `Error::PermissionDenied` when the user refused location access.
    async fn current_position(&self) -> Result<Coordinates, Error>;
}

/// A provider that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, Error> {
        Ok(self.0)
    }
}

/// A provider whose permission was refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn current_position(&self) -> Result<Coordinates, Error> {
        Err(Error::PermissionDenied(String::from(
            "We need your location to find nearby stations.",
        )))
    }
}
