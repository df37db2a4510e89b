use crate::client::models::analysis::AnalysisResult;
use crate::client::models::messages::Message;
use crate::client::services::analysis_service::{AnalysisError, AnalysisInput, AnalysisRequest};
use crate::config::ClientConfig;

/// A file read fully into memory at attach time, with the media type
/// declared from its extension.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

/// Lifecycle of the one request a submit may have outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzerState {
    pub text_content: String,
    pub file_path_input: String,
    pub selected_file: Option<AttachedFile>,
    pub phase: RequestPhase,
    pub error_message: Option<String>,
    pub result: Option<AnalysisResult>,
}

impl AnalyzerState {
    /// Whitespace-only text counts as no input.
    pub fn has_input(&self) -> bool {
        self.selected_file.is_some() || !self.text_content.trim().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Loading
    }

    /// Handle every synchronous UI message. The command-producing ones
    /// (`Submit`, `AttachFile`) live in `gui::app`.
    ///
    /// Invariant: text and file are mutually exclusive — an edit to one
    /// clears the other.
    pub fn apply(&mut self, message: Message) {
        match message {
            Message::TextContentChanged(text) => {
                self.text_content = text;
                self.selected_file = None;
                self.error_message = None;
            }
            Message::FilePathChanged(path) => {
                self.file_path_input = path;
            }
            Message::FileAttached(file) => {
                self.selected_file = Some(file);
                self.text_content.clear();
                self.error_message = None;
            }
            Message::AttachFailed(reason) => {
                self.selected_file = None;
                self.error_message = Some(reason);
            }
            Message::ClearFile => {
                self.selected_file = None;
                self.file_path_input.clear();
            }
            Message::AnalysisFinished(Ok(result)) => {
                self.phase = RequestPhase::Success;
                self.result = Some(result);
                self.error_message = None;
            }
            Message::AnalysisFinished(Err(error)) => {
                self.phase = RequestPhase::Failed;
                self.error_message = Some(error.to_string());
            }
            Message::Submit | Message::AttachFile | Message::None => {}
        }
    }

    /// Validate step of validate-and-submit. The input check precedes the
    /// configuration check, so an empty form is reported the same way
    /// whether or not an endpoint is configured.
    pub fn build_request(&self, config: &ClientConfig) -> Result<AnalysisRequest, AnalysisError> {
        let input = if let Some(file) = &self.selected_file {
            AnalysisInput::File(file.clone())
        } else if !self.text_content.trim().is_empty() {
            AnalysisInput::Text(self.text_content.clone())
        } else {
            return Err(AnalysisError::NoInput);
        };
        let base_url = config
            .api_base_url
            .clone()
            .ok_or(AnalysisError::MissingEndpoint)?;
        Ok(AnalysisRequest { base_url, input })
    }

    /// Transition into Loading, dropping the previous outcome.
    pub fn begin_loading(&mut self) {
        self.phase = RequestPhase::Loading;
        self.error_message = None;
        self.result = None;
    }

    /// Terminal failure that never reached the network.
    pub fn fail(&mut self, error: AnalysisError) {
        self.phase = RequestPhase::Failed;
        self.error_message = Some(error.to_string());
    }
}
