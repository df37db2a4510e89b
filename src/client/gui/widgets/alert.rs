// Inline error panel shown under the form
use iced::widget::{Container, Row, Text};
use iced::{Color, Element, Font, Length};

use crate::client::models::messages::Message;

const ALERT_BG: Color = Color::from_rgb(0.32, 0.09, 0.12);
const ALERT_BORDER: Color = Color::from_rgb(0.75, 0.3, 0.35);
const ALERT_TEXT: Color = Color::from_rgb(1.0, 0.76, 0.79);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn alert_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ALERT_BG)),
        text_color: Some(ALERT_TEXT),
        border: iced::Border {
            width: 1.0,
            color: ALERT_BORDER,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(message: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(8)
            .push(Text::new("❌").font(EMOJI_FONT).size(14))
            .push(Text::new(message).size(14).style(ALERT_TEXT)),
    )
    .width(Length::Fill)
    .padding(12)
    .style(iced::theme::Container::Custom(Box::new(alert_appearance)))
    .into()
}
