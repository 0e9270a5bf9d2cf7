//! Voyagewise travel planner server.
//!
//! A web application for planning multi-destination trips: an itinerary
//! editor that keeps leg dates consistent while stops are added, removed,
//! reordered, and edited, backed by the Voyagewise trip-storage REST API.

pub mod cache;
pub mod domain;
pub mod trips;
pub mod web;
