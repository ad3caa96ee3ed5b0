//! Work slip domain: records, catalogs, normalization and the contracts of
//! the record store and the services built on top of it.

pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod repository;
pub mod service;
