use crate::client::models::analysis::AnalysisResult;
use crate::client::models::app_state::AttachedFile;
use crate::client::services::analysis_service::AnalysisError;

#[derive(Debug, Clone)]
pub enum Message {
    /// No operation - used when a widget needs a message but nothing should happen
    None,
    TextContentChanged(String),
    FilePathChanged(String),
    /// Read the file named in the path input and turn it into the selected upload
    AttachFile,
    FileAttached(AttachedFile),
    AttachFailed(String),
    ClearFile,
    Submit,
    AnalysisFinished(Result<AnalysisResult, AnalysisError>),
}
