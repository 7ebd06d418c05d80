/// Portfolio grid widgets
use std::collections::HashMap;

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::catalog::CatalogItem;
use crate::Message;

const CARD_WIDTH: f32 = 280.0;
const CARD_IMAGE_HEIGHT: f32 = 190.0;

/// The category filter bar: "All" plus every category present in the
/// catalog, in first-seen order.
pub fn filter_bar<'a>(categories: Vec<String>, active: &str) -> Element<'a, Message> {
    let mut bar = row![].spacing(8);
    bar = bar.push(filter_button("All".to_owned(), "all".to_owned(), active));
    for category in categories {
        let label = title_case(&category);
        bar = bar.push(filter_button(label, category, active));
    }
    bar.into()
}

fn filter_button<'a>(label: String, key: String, active: &str) -> Element<'a, Message> {
    let style = if key == active {
        button::primary
    } else {
        button::secondary
    };

    button(text(label).size(14))
        .style(style)
        .padding(8)
        .on_press(Message::FilterSelected(key))
        .into()
}

/// The featured strip: the first entries of the same normalized list the
/// grid shows, so activation indices line up.
pub fn featured_strip<'a>(
    items: &'a [CatalogItem],
    thumbnails: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    let mut strip = row![].spacing(16);
    for (index, item) in items.iter().enumerate() {
        strip = strip.push(card(index, item, thumbnails.get(&item.image)));
    }

    column![text("Featured Projects").size(22), strip]
        .spacing(12)
        .into()
}

/// The filterable card grid. Filtering hides cards; it never renumbers
/// them, so the lightbox always navigates the full list.
pub fn portfolio_grid<'a>(
    items: &'a [CatalogItem],
    thumbnails: &HashMap<String, image::Handle>,
    filter: &str,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter == "all" || item.category == filter)
        .map(|(index, item)| card(index, item, thumbnails.get(&item.image)))
        .collect();

    if cards.is_empty() {
        return container(text("No projects in this category.").size(16))
            .padding(24)
            .into();
    }

    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

fn card<'a>(
    index: usize,
    item: &'a CatalogItem,
    thumbnail: Option<&image::Handle>,
) -> Element<'a, Message> {
    let media: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("Loading…").size(13))
            .center_x(Length::Fixed(CARD_WIDTH))
            .center_y(Length::Fixed(CARD_IMAGE_HEIGHT))
            .into(),
    };

    let mut title_row = row![text(&item.title).size(17)]
        .spacing(8)
        .align_y(Alignment::Center);
    if item.video_url.is_some() {
        title_row = title_row.push(text("▶ Video").size(12));
    }
    if item.is_gallery {
        title_row = title_row.push(text(format!("{} photos", item.gallery_images.len())).size(12));
    }

    let mut info = column![title_row].spacing(4);
    if !item.description.is_empty() {
        info = info.push(text(&item.description).size(13));
    }
    if !item.tags.is_empty() {
        let mut tags = row![].spacing(6);
        for tag in &item.tags {
            tags = tags.push(text(tag).size(11));
        }
        info = info.push(tags);
    }

    button(
        column![media, info]
            .spacing(8)
            .width(Length::Fixed(CARD_WIDTH)),
    )
    .style(button::text)
    .padding(0)
    .on_press(Message::ItemActivated(index))
    .into()
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
