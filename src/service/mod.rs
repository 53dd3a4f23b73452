//! Service layer: business logic orchestration.
//!
//! [`PublicationService`] validates incoming publication data and
//! delegates storage to the configured [`crate::persistence::PublicationStore`].

pub mod publication_service;

pub use publication_service::PublicationService;
