//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the one
//! object a host workflow constructs and hands to its templates and scripts.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the vault capabilities, the clock, the configuration and the
//!   session's [`TemplateValueExchange`]
//! - **Dispatches** to the appropriate command function with configured values
//! - **Returns structured types**, never printing or notifying
//!
//! ## No Global Registry
//!
//! Nothing here is reachable through a global lookup. Hosts build one
//! `HelpersApi` per workflow session and inject it where it is needed; tests
//! build as many independent instances as they like.
//!
//! ## Generic Over Capabilities
//!
//! `HelpersApi<V: Vault, C: Clock>` is generic over the store and the clock:
//! - Production: `HelpersApi<FsVault, SystemClock>`
//! - Testing: `HelpersApi<InMemoryVault, FixedClock>`
//!
//! ## One Source of Configuration
//!
//! `new` pushes the configured primary extension into the vault, so link
//! resolution and reference rendering always agree on which documents are
//! notes.
//!
//! ## Testing Strategy
//!
//! API tests verify dispatch and the wiring of configured values. Command
//! behavior is tested in the command modules.

use crate::commands::note_types::{NoteTypeLookup, NoteTypeQuery};
use crate::commands::{self, CmdResult};
use crate::config::NotekitConfig;
use crate::error::Result;
use crate::exchange::TemplateValueExchange;
use crate::model::{
    ContextMode, FormattedReference, LinkParts, NoteContext, Payload, ReferenceInput,
};
use crate::sanitize;
use crate::store::{Clock, LinkResolver, Vault};

/// The main API facade for notekit operations.
pub struct HelpersApi<V: Vault, C: Clock> {
    vault: V,
    clock: C,
    config: NotekitConfig,
    exchange: TemplateValueExchange,
}

impl<V: Vault, C: Clock> HelpersApi<V, C> {
    pub fn new(mut vault: V, clock: C, config: NotekitConfig) -> Self {
        vault.set_primary_extension(&config.primary_extension());
        Self {
            vault,
            clock,
            config,
            exchange: TemplateValueExchange::new(),
        }
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn config(&self) -> &NotekitConfig {
        &self.config
    }

    pub fn exchange(&self) -> &TemplateValueExchange {
        &self.exchange
    }

    // --- References ---

    /// Formats one logical name or a batch. `None` when there is nothing to format.
    pub fn format_link(
        &self,
        input: impl Into<ReferenceInput>,
        quote: bool,
    ) -> Option<FormattedReference> {
        commands::links::run(&self.vault, &input.into(), &self.config, quote)
    }

    pub fn format_web_link(&self, url: &str, quote: bool) -> String {
        commands::web_links::run(url, quote, &self.config.default_scheme)
    }

    pub fn format_web_links<S: AsRef<str>>(&self, urls: &[S], quote: bool) -> Vec<String> {
        commands::web_links::run_many(urls, quote, &self.config.default_scheme)
    }

    pub fn clean_link(&self, text: &str) -> Option<LinkParts> {
        commands::links::clean_link(text)
    }

    // --- Names and identifiers ---

    pub fn sanitize_title(&self, title: &str) -> String {
        sanitize::sanitize_title(title)
    }

    /// Mints an identifier from the clock, decorated with the configured marker.
    pub fn create_unique_id(&self, label: Option<&str>) -> String {
        commands::unique_id::run(self.clock.timestamp(), label, self.config.id_marker())
    }

    /// Like [`create_unique_id`](Self::create_unique_id) without the marker.
    pub fn create_plain_unique_id(&self, label: Option<&str>) -> String {
        commands::unique_id::run(self.clock.timestamp(), label, None)
    }

    // --- Template values ---

    pub fn publish_template_value(&self, payload: Payload) {
        self.exchange.publish(payload);
    }

    pub fn consume_template_value(&self, clear: bool) -> Option<Payload> {
        self.exchange.consume(clear)
    }

    // --- Note types ---

    /// Looks up the catalogue: first record matching `query`, or all records.
    pub fn get_note_type(&self, query: Option<&NoteTypeQuery>) -> NoteTypeLookup {
        commands::note_types::run(
            &self.vault,
            &self.config.note_types_path,
            &self.config.note_types_field,
            query,
        )
    }

    pub fn tag_for_folder(&self, folder: &str) -> Option<String> {
        commands::note_types::tag_for_folder(
            &self.vault,
            &self.config.note_types_path,
            &self.config.note_types_field,
            folder,
        )
    }

    // --- Documents ---

    /// Renames a document to its sanitized title inside `new_folder`.
    pub fn move_file(
        &self,
        current_path: &str,
        new_title: &str,
        new_folder: &str,
    ) -> Result<CmdResult> {
        commands::move_file::run(
            &self.vault,
            current_path,
            new_title,
            new_folder,
            &self.config.primary_extension(),
        )
    }

    pub fn note_context(&self, path: &str, mode: ContextMode) -> Result<Option<NoteContext>> {
        commands::context::run(&self.vault, path, mode)
    }

    // --- Time ---

    pub fn sanitize_time(&self, input: &str) -> String {
        commands::time::sanitize_time(input, &self.clock)
    }

    pub fn calculate_duration(
        &self,
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> Option<String> {
        commands::time::calculate_duration(start_date, start_time, end_date, end_time)
    }
}
