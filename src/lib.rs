//! Administrative web proxy for a fleet-tracking service.
//!
//! The proxy sits between an operator's browser and the upstream authoritative
//! backend. It owns the session token cookie, forwards CRUD operations for the
//! managed resource kinds (tracks, vehicles, vehicle types, points of
//! interest, POI types, trackers, users), and translates upstream failures
//! into a uniform plain-text HTTP error surface. Resource data itself always
//! lives upstream; nothing is cached or persisted here.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
