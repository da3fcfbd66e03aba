//! Session, catalog and viewport stores for the EventMap application.
//!
//! All application state lives in memory and is rebuilt on every start.
//! Each store is an explicit object owned by [`App`], which the binary
//! constructs once and hands to the view layer.
//!
//! # Modules
//!
//! - [`session`] -- Zero-or-one signed-in user.
//! - [`catalog`] -- The event set, the active filter and the filtered view.
//! - [`viewport`] -- Map camera, loaded flag and weak selection.
//! - [`app`] -- [`App`] composition root and cross-store view operations.
//! - [`form`] -- Event creation form and required-field validation.
//! - [`auth`] -- [`Authenticator`] trait and [`MockAuthenticator`].
//! - [`id_gen`] -- [`IdGenerator`] trait with sequential and UUID strategies.
//! - [`notify`] -- [`Notifier`] toast sink trait and implementations.
//! - [`share`] -- Share-sheet / clipboard fallback for event links.
//! - [`seed`] -- The demo catalog.
//! - [`config`] -- Loading `eventmap-config.yaml` into typed structs.
//!
//! [`Authenticator`]: auth::Authenticator
//! [`MockAuthenticator`]: auth::MockAuthenticator
//! [`IdGenerator`]: id_gen::IdGenerator
//! [`Notifier`]: notify::Notifier

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod id_gen;
pub mod notify;
pub mod seed;
pub mod session;
pub mod share;
pub mod viewport;

pub use app::{App, CreatedEvent, Route};
pub use error::CoreError;
