use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::models::app_state::AnalyzerState;
use crate::client::models::messages::Message;
use crate::client::services::analysis_service::AnalysisService;
use crate::client::services::article_file;
use crate::config::ClientConfig;

pub struct AnalyzerApp {
    pub state: AnalyzerState,
    pub service: Arc<AnalysisService>,
}

impl Application for AnalyzerApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let app = AnalyzerApp {
            state: AnalyzerState::default(),
            service: Arc::new(AnalysisService::new()),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "News Analyzer".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Submit => {
                // the submit control is disabled while Loading, but keep the
                // single-request invariant even if a stray submit arrives
                if self.state.is_loading() {
                    return Command::none();
                }
                let config = ClientConfig::from_env();
                match self.state.build_request(&config) {
                    Ok(request) => {
                        self.state.begin_loading();
                        let service = self.service.clone();
                        Command::perform(
                            async move { service.analyze(request).await },
                            Message::AnalysisFinished,
                        )
                    }
                    Err(error) => {
                        // validation or configuration failure: no network call
                        self.state.fail(error);
                        Command::none()
                    }
                }
            }
            Message::AttachFile => {
                let path = self.state.file_path_input.clone();
                Command::perform(article_file::load(path), |outcome| match outcome {
                    Ok(file) => Message::FileAttached(file),
                    Err(reason) => Message::AttachFailed(reason),
                })
            }
            other => {
                self.state.apply(other);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::analyze::view(&self.state)
    }
}
