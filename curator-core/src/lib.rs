//! # Curator Core
//!
//! Headless logic behind the Curator bulk gallery editor.
//!
//! ## Overview
//!
//! - **Aggregation**: reduce a selection of galleries to the values they
//!   share, field by field
//! - **Form state**: tri-state organized flag, set-field editors with a bulk
//!   mode, and touched tracking for single-valued fields
//! - **Diffing**: build a sparse `BulkGalleryUpdateInput` containing only
//!   what the user changed
//! - **Submission**: the dialog state machine, notifying through injected
//!   collaborators
//! - **Transport**: a GraphQL client implementing [`services::GalleryUpdater`]
//!
//! ## Examples
//!
//! ```no_run
//! use curator_core::bulk::{EditGalleriesDialog, FormEdit};
//! use curator_core::config::ClientConfig;
//! use curator_core::graphql::GraphQlClient;
//! use curator_core::i18n::MessageCatalog;
//! use curator_core::services::{Notifier, Translator};
//! use curator_core::error::CuratorError;
//! use curator_model::prelude::*;
//!
//! struct Log;
//!
//! impl Notifier for Log {
//!     fn success(&self, message: &str) {
//!         println!("{message}");
//!     }
//!
//!     fn error(&self, error: &CuratorError) {
//!         eprintln!("{error}");
//!     }
//! }
//!
//! async fn rate_all(
//!     selection: Vec<SelectedGallery>,
//! ) -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _) = ClientConfig::load_from_env()?;
//!     let client = GraphQlClient::new(&config)?;
//!     let catalog = MessageCatalog::english();
//!
//!     let mut dialog = EditGalleriesDialog::new(&selection, |applied| {
//!         println!("closed, applied = {applied}");
//!     });
//!     println!("{}", dialog.header(&catalog));
//!     dialog.apply(FormEdit::Rating(Some(Rating::new(4))))?;
//!     dialog.submit(&client, &Log, &catalog).await?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Selection aggregation, form state, diffing and the dialog state machine
pub mod bulk;

/// Catalog client configuration
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// GraphQL transport for bulk updates
pub mod graphql;

/// Message catalog and formatting
pub mod i18n;

/// Injected collaborator traits
pub mod services;

pub use error::{CuratorError, DialogError, Result};
