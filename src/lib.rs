// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! A floating chat panel that logs a user in against a bearer-token
//! endpoint and exchanges messages with a chat endpoint.
//!
//! The panel can be toggled, dragged by its header and resized from its
//! edges. All of that logic lives in a platform-agnostic core that needs no
//! DOM and is driven by plain events:
//!
//! # Key entry points
//!
//! - [`controller::ChatController`] - visibility, session, message log and
//!   the `begin_*` / `finish_*` halves of the two network operations
//! - [`input::PanelInput`] - the drag/resize gesture state machine
//! - [`geometry`] - pure drag and resize update functions
//! - [`options::WidgetOptions`] - endpoints, feature toggles, status text
//!
//! # Hosts
//!
//! - `native` feature: `transport::HttpTransport`, a blocking `ureq`
//!   backend used by the `chatpane` terminal client.
//! - `web` feature: `web::ChatWidget`, which binds the controller to the
//!   page markup and talks to the backend through `fetch`.

pub mod api;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod messages;
pub mod options;
pub mod session;
#[cfg(feature = "native")]
pub mod transport;
#[cfg(feature = "web")]
pub mod web;

pub use controller::{ChatController, LoginOutcome, SendStep};
pub use error::ChatError;
pub use options::WidgetOptions;
