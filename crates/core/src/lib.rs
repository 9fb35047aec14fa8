#![warn(clippy::all, missing_docs)]

//! Core engine for the parcel routing simulator.
//!
//! This crate hosts the shipping network, the bounded router, tiered pricing,
//! the in-memory parcel registry and the delivery state machine. It never
//! prints; frontends render its return values.

pub mod config;
pub mod delivery;
pub mod error;
pub mod models;
pub mod network;
pub mod pricing;
pub mod registry;

pub use config::AppConfig;
pub use delivery::{DeliveryEngine, TickOutcome, TickSummary};
pub use error::{ParcelError, Result};
pub use models::{capitalize_first, Parcel, ParcelRequest, ParcelStatus, Quote, TrackingEvent};
pub use network::{LocationRegistry, Network, NetworkConfig, RouteEdge, Router};
pub use pricing::PricingEngine;
pub use registry::{ParcelRegistry, SharedRegistry};
