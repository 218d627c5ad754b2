/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 02/09/2026
Last Modified: 14/10/2026
License: MIT
*/

//! Shared infrastructure for the GpTools descriptors: parameter metadata,
//! typed parameter values, coded-value enumerations, environment settings,
//! persisted settings and errors.

#[macro_use]
mod macros;

pub mod configs;
pub mod environments;
pub mod errors;
pub mod parameters;
pub mod utils;
pub mod values;
