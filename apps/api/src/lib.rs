//! Skill-gap analysis service.
//!
//! One library, two binaries:
//! - `api` — interactive HTTP surface (role picker → proficiency form →
//!   results page with recommendations and inline charts)
//! - `gap-report` — sequential batch job over the user-profile CSV

pub mod catalog;
pub mod charts;
pub mod config;
pub mod errors;
pub mod profiles;
pub mod report;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod web;
