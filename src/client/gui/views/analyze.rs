use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::alert;
use crate::client::models::app_state::{AnalyzerState, RequestPhase};
use crate::client::models::messages::Message;

// Consistent color palette for the single-screen layout
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26); // Input background
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3); // Green accent
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

// Custom container styles
fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(state: &AnalyzerState) -> Element<Message> {
    let loading = state.is_loading();
    let submit_enabled = state.has_input() && !loading;

    // Header
    let title = Text::new("News Analyzer")
        .size(42)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Get a summary and mentioned nationalities from your news article")
        .size(16)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    // Article text field
    let text_input = {
        let input = TextInput::new(
            "Enter your news article content here...",
            &state.text_content,
        )
        .on_submit(if submit_enabled {
            Message::Submit
        } else {
            Message::None
        })
        .width(Length::Fill)
        .padding(12)
        .size(14);
        if loading {
            input
        } else {
            input.on_input(Message::TextContentChanged)
        }
    };

    let text_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📝").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new("Paste Article Text").size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(text_input)
                .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // Divider between the two input modes
    let divider = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(Text::new("— OR —").size(13).style(TEXT_SECONDARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));

    // File attachment: path input plus attach button
    let path_input = {
        let input = TextInput::new(
            "Path to a .txt or .docx file",
            &state.file_path_input,
        )
        .on_submit(if loading { Message::None } else { Message::AttachFile })
        .width(Length::Fill)
        .padding(12)
        .size(14);
        if loading {
            input
        } else {
            input.on_input(Message::FilePathChanged)
        }
    };

    let attach_button = {
        let button = Button::new(Text::new("Attach").size(14))
            .style(iced::theme::Button::Secondary)
            .padding([12, 16]);
        if loading {
            button
        } else {
            button.on_press(Message::AttachFile)
        }
    };

    let file_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📄").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(
                    Text::new("Upload a File (.txt or .docx)")
                        .size(14)
                        .style(TEXT_SECONDARY),
                ),
        )
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(
                    Container::new(path_input)
                        .width(Length::Fill)
                        .style(iced::theme::Container::Custom(Box::new(input_appearance))),
                )
                .push(attach_button),
        );

    // Current selection, with a way to drop it
    let selected_line: Element<Message> = if let Some(file) = &state.selected_file {
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(
                Text::new(format!("Selected: {}", file.name))
                    .size(12)
                    .style(ACCENT_COLOR),
            )
            .push(
                Button::new(Text::new("✕").size(12))
                    .on_press(Message::ClearFile)
                    .style(iced::theme::Button::Text)
                    .padding([2, 8]),
            )
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    // Submit button, disabled while there is no input or a request is out
    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("🔍").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new("Analyze Article")
                            .font(BOLD_FONT)
                            .size(16)
                            .style(TEXT_PRIMARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::Submit)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(16)
    } else {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new(if loading { "Analyzing..." } else { "Analyze Article" })
                            .size(16)
                            .style(TEXT_SECONDARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(16)
    };

    // Loading indicator
    let loading_line: Element<Message> = if loading {
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("⏳").font(EMOJI_FONT).size(14))
            .push(
                Text::new("Sending your article to the analysis service...")
                    .size(13)
                    .style(ACCENT_COLOR),
            )
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    // Inline error panel
    let error_panel: Element<Message> = match &state.error_message {
        Some(message) if !loading => alert::view(message),
        _ => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let form_card = Container::new(
        Column::new()
            .spacing(16)
            .push(text_field)
            .push(divider)
            .push(file_field)
            .push(selected_line)
            .push(submit_button)
            .push(loading_line)
            .push(error_panel),
    )
    .width(Length::Fill)
    .padding(24)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let mut content = Column::new()
        .spacing(20)
        .width(Length::Fixed(640.0))
        .push(title)
        .push(subtitle)
        .push(form_card);

    if state.phase == RequestPhase::Success && !loading {
        if let Some(result) = &state.result {
            content = content.push(results_card(result));
        }
    }

    Container::new(
        Scrollable::new(
            Container::new(content)
                .width(Length::Fill)
                .center_x()
                .padding([32, 16, 32, 16]),
        )
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}

fn results_card(result: &crate::client::models::analysis::AnalysisResult) -> Element<'_, Message> {
    let mut card = Column::new()
        .spacing(12)
        .push(
            Text::new("Analysis Results")
                .size(22)
                .font(BOLD_FONT)
                .style(TEXT_PRIMARY),
        );

    if let Some(filename) = &result.filename {
        card = card.push(
            Text::new(format!("Analysis for file: {}", filename))
                .size(12)
                .style(TEXT_SECONDARY),
        );
    }

    card = card
        .push(Text::new("Summary").size(16).font(BOLD_FONT).style(ACCENT_COLOR))
        .push(Text::new(result.summary.clone()).size(14).style(TEXT_PRIMARY))
        .push(
            Text::new("Mentioned Nationalities/Countries")
                .size(16)
                .font(BOLD_FONT)
                .style(ACCENT_COLOR),
        );

    if result.nationalities.is_empty() {
        card = card.push(Text::new("None found.").size(14).style(TEXT_SECONDARY));
    } else {
        let mut list = Column::new().spacing(4);
        for nationality in &result.nationalities {
            list = list.push(
                Text::new(format!("• {}", nationality))
                    .size(14)
                    .style(TEXT_PRIMARY),
            );
        }
        card = card.push(list);
    }

    Container::new(card)
        .width(Length::Fill)
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
