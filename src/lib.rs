//! Sales meeting follow-up and performance engine.
//!
//! Turns a raw sales-meeting transcript into a ranked shortlist of reference
//! documents, a staged follow-up plan branched on the customer's detected
//! objection, and a recency-weighted performance snapshot across a
//! salesperson's meeting history.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the pure
//! decision logic (sector routing, objection classification, document
//! ranking, follow-up composition, score aggregation), [`ports`] the trait
//! boundaries to external collaborators (document storage, meeting
//! persistence, the LLM analysis service), and [`adapters`] the concrete
//! implementations. [`pipeline::MeetingPipeline`] wires them together.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ports;

pub use error::{AppError, Result};
pub use pipeline::MeetingPipeline;
