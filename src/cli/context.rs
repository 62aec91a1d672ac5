use crate::config::{RenameSettings, SettingsRequest, resolve};
use crate::error::Result;
use crate::storage::StorageClient;

use super::entry::{Args, Field};
use super::prompts::Prompt;

/// Everything a session needs: resolved settings, pre-filled answers, the
/// prompt source and the storage client.
pub struct CliContext {
    args: Args,
    settings: RenameSettings,
    prompt: Prompt,
    client: StorageClient,
}

impl CliContext {
    pub fn from_args(args: Args, prompt: Prompt, client: StorageClient) -> Result<Self> {
        let request = SettingsRequest {
            config_path: args.config.clone(),
            start_index: args.start,
            sort_entries: args.sort,
        };
        let settings = resolve(request)?;

        Ok(Self::new(args, settings, prompt, client))
    }

    /// Build a context from already resolved settings.
    pub fn new(
        args: Args,
        settings: RenameSettings,
        prompt: Prompt,
        client: StorageClient,
    ) -> Self {
        Self {
            args,
            settings,
            prompt,
            client,
        }
    }

    pub fn settings(&self) -> &RenameSettings {
        &self.settings
    }

    pub fn client(&self) -> &StorageClient {
        &self.client
    }

    pub fn prompt_mut(&mut self) -> &mut Prompt {
        &mut self.prompt
    }

    /// Value supplied on the command line for a field, if any.
    pub fn preset(&self, field: Field) -> Option<&str> {
        match field {
            Field::Folder => self
                .args
                .folder
                .as_deref()
                .or(self.args.folder_flag.as_deref()),
            Field::Base => self.args.base.as_deref(),
            Field::Extension => self.args.ext.as_deref(),
            Field::Confirm => self.args.yes.then_some("y"),
        }
    }
}
