//! evasion-planner: travel itineraries generated by an LLM, shareable as links
//! and printable as PDF.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use evasion_planner::{Planner, PlannerRequest, TravelStyle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = Planner::from_env()?;
//!     let request = PlannerRequest::new("Kyoto", 3, TravelStyle::Relaxation);
//!
//!     let itinerary = planner.generate(&request).await?;
//!     println!("{}", itinerary.trip_title);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod render;
pub mod schemas;
pub mod services;
pub mod share;
pub mod types;

pub use crate::core::{LocationOutcome, Planner, PlannerForm, PlannerSession, Toast, ToastQueue};
pub use config::PlannerConfig;
pub use error::{ErrorKind, PlannerError, Result};
pub use export::{export_file_name, export_itinerary, ExportArtifact};
pub use render::{render_header, render_tab, ItineraryTab};
pub use schemas::{CompletionSchema, SchemaHandle};
pub use services::TextGenerator;
pub use types::{
    Activity, DayPlan, HistoricalSite, Hotel, HotelCategory, Itinerary, PlannerRequest,
    PracticalInfo, TravelStyle,
};

#[cfg(feature = "cli")]
pub mod cli;
