/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs) and the built-in portfolio (catalog.rs)
/// - Portfolio filter selection (filter.rs)
/// - Contact form draft and submission lifecycle (contact.rs)
/// - Inquiry delivery (delivery.rs) and the local outbox database (outbox.rs)
/// - Header and overlay menu state (navigation.rs)

pub mod catalog;
pub mod contact;
pub mod data;
pub mod delivery;
pub mod filter;
pub mod navigation;
pub mod outbox;
