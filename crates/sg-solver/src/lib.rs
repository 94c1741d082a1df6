//! Boundary to the external equilibrium solver.
//!
//! Turns the two payoff tables and the form fields into a
//! [`RequestPayload`], posts it to the solver's `/calculate` endpoint, and
//! maps whatever comes back into a [`ResultView`] for display. The solver
//! itself is opaque: this crate neither computes equilibria nor checks
//! payoff-function syntax.

pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod request;
pub mod response;

pub use client::SolverClient;
pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use render::{EquilibriumBlock, ResultView, render};
pub use request::{PayoffData, RequestBuilder, RequestPayload, strategy_list};
pub use response::{Equilibrium, SolverOutcome, SolverResponse};
