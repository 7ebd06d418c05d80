/// Lightbox overlay widgets
///
/// Renders a [`DisplayPayload`] produced by the viewer session. The overlay
/// owns no navigation logic; every control only emits a message.
use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row, stack,
    text,
};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};

use crate::viewer::{DisplayPayload, MediaKind};
use crate::Message;

const MEDIA_WIDTH: f32 = 640.0;
const MEDIA_HEIGHT: f32 = 520.0;

/// Stack the lightbox over the page. Clicking the backdrop closes the
/// session; the panel itself swallows clicks.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    payload: &DisplayPayload,
    full_image: Option<&image::Handle>,
) -> Element<'a, Message> {
    let panel = container(panel_content(payload, full_image))
        .style(container::rounded_box)
        .padding(24)
        .max_width(960);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(panel)).style(backdrop)).on_press(Message::CloseLightbox)
        )
    ]
    .into()
}

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.85).into()),
        ..container::Style::default()
    }
}

fn panel_content<'a>(
    payload: &DisplayPayload,
    full_image: Option<&image::Handle>,
) -> Element<'a, Message> {
    let media: Element<'a, Message> = match payload.media_kind {
        MediaKind::Video => video_panel(payload),
        MediaKind::Image => match full_image {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(MEDIA_HEIGHT))
                .content_fit(ContentFit::Contain)
                .into(),
            None => {
                // Stand in with the alt text until the image arrives.
                let placeholder = if payload.alt.is_empty() {
                    "Loading image…".to_owned()
                } else {
                    payload.alt.clone()
                };
                container(text(placeholder).size(15))
                    .center_x(Length::Fixed(MEDIA_WIDTH))
                    .center_y(Length::Fixed(MEDIA_HEIGHT))
                    .into()
            }
        },
    };

    let header = row![
        text(payload.title.clone()).size(24),
        horizontal_space(),
        button(text("✕").size(18))
            .style(button::text)
            .on_press(Message::CloseLightbox),
    ]
    .align_y(Alignment::Center);

    let nav = row![
        button(text("‹ Previous").size(14))
            .style(button::secondary)
            .padding(8)
            .on_press(Message::Navigate(-1)),
        horizontal_space(),
        button(text("Next ›").size(14))
            .style(button::secondary)
            .padding(8)
            .on_press(Message::Navigate(1)),
    ];

    let mut content = column![header, media].spacing(16).width(Length::Fill);
    if !payload.description.is_empty() {
        content = content.push(text(payload.description.clone()).size(15));
    }
    content = content.push(nav);
    content.into()
}

/// Native stand-in for the embedded player: the video opens in the system
/// browser instead of an iframe.
fn video_panel<'a>(payload: &DisplayPayload) -> Element<'a, Message> {
    let destination = payload
        .video_link
        .clone()
        .or_else(|| payload.video_embed_url.clone());

    let mut panel = column![text("This project includes a video tour.").size(16)]
        .spacing(12)
        .align_x(Alignment::Center);

    if let Some(embed) = &payload.video_embed_url {
        panel = panel.push(text(embed.clone()).size(12));
    }
    if let Some(url) = destination {
        panel = panel.push(
            button(text("▶ Watch on YouTube").size(15))
                .padding(8)
                .on_press(Message::OpenVideoLink(url)),
        );
    }

    container(panel)
        .center_x(Length::Fixed(MEDIA_WIDTH))
        .center_y(Length::Fixed(MEDIA_HEIGHT))
        .into()
}
