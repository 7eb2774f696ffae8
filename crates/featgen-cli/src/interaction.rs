//! Terminal implementation of the core `UserInteraction` port.
//!
//! Prompting uses dialoguer and is only compiled with the default
//! `interactive` feature; without it a missing name behaves like a
//! dismissed prompt and fails name validation downstream.

use featgen_core::{
    application::ports::{Notice, UserInteraction},
    error::FeatgenResult,
};

use crate::output::OutputManager;

/// Interactive terminal adapter: dialoguer for prompts, the output manager
/// for notifications.
pub struct ConsoleInteraction {
    output: OutputManager,
}

impl ConsoleInteraction {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl UserInteraction for ConsoleInteraction {
    #[cfg(feature = "interactive")]
    fn prompt_text(&self, label: &str) -> FeatgenResult<Option<String>> {
        use featgen_core::application::ApplicationError;

        match dialoguer::Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => Ok(Some(value)),
            // EOF / Ctrl-C are a dismissal, not a failure.
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(ApplicationError::InteractionFailed {
                reason: e.to_string(),
            }
            .into()),
        }
    }

    #[cfg(not(feature = "interactive"))]
    fn prompt_text(&self, _label: &str) -> FeatgenResult<Option<String>> {
        Ok(None)
    }

    fn notify(&self, notice: Notice, message: &str) -> FeatgenResult<()> {
        use featgen_core::application::ApplicationError;

        let result = match notice {
            Notice::Info => self.output.info(message),
            Notice::Success => self.output.success(message),
            Notice::Warning => self.output.warning(message),
            Notice::Error => self.output.error(message),
        };
        result.map_err(|e| {
            ApplicationError::InteractionFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
