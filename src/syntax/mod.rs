//! Syntax layer: the parsed record and its inverse, the composer
//!
//! - [`GeoUri`] - latitude, longitude, optional altitude, CRS, optional
//!   uncertainty and parameters
//! - [`compose`] / [`compose_with`] - render a [`GeoUri`] back to text
//! - [`compose_checked`] - the same, refusing records that would not parse back

pub mod composer;
mod geo_uri;

pub use composer::{
    ComposeError, ComposePolicy, check_composable, compose, compose_checked, compose_with,
    write_geo_uri,
};
pub use geo_uri::{GeoUri, Parameters};
