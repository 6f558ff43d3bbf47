use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use curator_core::config::{ClientConfig, ConfigSource};
use curator_core::graphql::GraphQlClient;
use curator_core::i18n::MessageCatalog;
use curator_core::services::GalleryUpdater;
use curator_model::prelude::*;
use iced::Task;

use crate::messages::Message;
use crate::selection;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub source: ConfigSource,
    pub selection: Arc<[SelectedGallery]>,
}

impl AppConfig {
    pub fn new(client: ClientConfig, selection: Vec<SelectedGallery>) -> Self {
        Self {
            client,
            source: ConfigSource::Default,
            selection: Arc::from(selection),
        }
    }

    /// Client settings from the `CURATOR_*` variables; the selection from
    /// `$CURATOR_SELECTION` or the first argument, else the demo selection.
    pub fn from_environment() -> anyhow::Result<Self> {
        let (client, source) = ClientConfig::load_from_env()
            .context("failed to load catalog client configuration")?;
        log::info!("Client configuration from {:?}: {}", source, client.endpoint);

        let selection_path = std::env::var("CURATOR_SELECTION")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| std::env::args().nth(1))
            .map(PathBuf::from);

        let selection = match selection_path {
            Some(path) => {
                log::info!("Loading selection from {}", path.display());
                selection::load_from_file(&path)?
            }
            None => {
                log::warn!("No selection given, opening the demo selection");
                selection::demo_selection()?
            }
        };

        Ok(Self {
            client,
            source,
            selection: Arc::from(selection),
        })
    }
}

/// State the editor starts from, talking to the configured catalog.
pub fn base_state(config: &AppConfig) -> anyhow::Result<State> {
    let client = GraphQlClient::new(&config.client)
        .context("failed to build catalog client")?;
    let updater: Arc<dyn GalleryUpdater> = Arc::new(client);
    Ok(State::new(
        config.selection.to_vec(),
        updater,
        Arc::new(MessageCatalog::english()),
    ))
}

/// Boot logic used by the runtime application.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    match base_state(config) {
        Ok(state) => (state, Task::none()),
        Err(err) => {
            log::error!("{err:#}");
            let updater: Arc<dyn GalleryUpdater> = Arc::new(Unreachable(
                format!("{err:#}"),
            ));
            let state = State::new(
                config.selection.to_vec(),
                updater,
                Arc::new(MessageCatalog::english()),
            );
            (state, Task::none())
        }
    }
}

/// Stands in for the catalog when the client could not be built, so the
/// dialog still opens and every submit reports why it cannot go through.
#[derive(Debug)]
struct Unreachable(String);

#[async_trait::async_trait]
impl GalleryUpdater for Unreachable {
    async fn bulk_gallery_update(
        &self,
        _input: BulkGalleryUpdateInput,
    ) -> curator_core::Result<Vec<GalleryID>> {
        Err(curator_core::CuratorError::Config(self.0.clone()))
    }
}
