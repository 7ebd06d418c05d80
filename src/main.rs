use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;

mod catalog;
mod config;
mod media;
mod ui;
mod viewer;

use catalog::{CatalogError, CatalogItem, CatalogSource};
use config::Settings;
use media::thumbnail::Thumbnail;
use viewer::{EmbedOptions, NavigableEntry, ViewerSession};

/// Main application state
struct PortfolioViewer {
    settings: Settings,
    /// Where the catalog document comes from; also anchors relative assets.
    source: CatalogSource,
    /// The normalized portfolio, replaced wholesale on every load.
    catalog: Vec<CatalogItem>,
    loading: bool,
    load_error: Option<String>,
    /// Active category filter key; "all" shows everything.
    filter: String,
    /// The lightbox session. Filtering never reaches it; it always
    /// navigates the full catalog or an expanded gallery.
    lightbox: ViewerSession,
    /// Grid thumbnails keyed by the item's sanitized image URL.
    thumbnails: HashMap<String, Handle>,
    /// Full-size lightbox images, fetched on demand.
    full_images: HashMap<String, Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Catalog load finished, successfully or not
    CatalogLoaded(Result<Vec<CatalogItem>, CatalogError>),
    /// A grid thumbnail finished downloading and downscaling
    ThumbnailReady(String, Result<Thumbnail, String>),
    /// A full-size lightbox image finished downloading
    FullImageReady(String, Result<Vec<u8>, String>),
    /// A filter button was pressed
    FilterSelected(String),
    /// A card was activated; the index points into the full catalog
    ItemActivated(usize),
    /// Step the open lightbox, or cycle the filter bar while it is closed
    Navigate(i32),
    CloseLightbox,
    /// Open a video link in the system browser
    OpenVideoLink(String),
}

impl PortfolioViewer {
    fn with_settings(settings: Settings) -> Self {
        let source = match &settings.catalog_url {
            Some(url) => CatalogSource::remote(url.clone()),
            None => CatalogSource::offline(),
        };

        PortfolioViewer {
            settings,
            source,
            catalog: Vec::new(),
            loading: true,
            load_error: None,
            filter: "all".to_owned(),
            lightbox: ViewerSession::default(),
            thumbnails: HashMap::new(),
            full_images: HashMap::new(),
            status: "Loading portfolio…".to_owned(),
        }
    }

    /// Create a new instance of the application and kick off the first load
    fn new() -> (Self, Task<Message>) {
        let viewer = Self::with_settings(Settings::load());

        match &viewer.source.url {
            Some(url) => println!("🏠 Portfolio Viewer starting, catalog at {}", url),
            None => println!("🏠 Portfolio Viewer starting offline on the embedded catalog"),
        }

        let source = viewer.source.clone();
        (
            viewer,
            Task::perform(
                async move { catalog::load(&source).await },
                Message::CatalogLoaded,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(items)) => {
                // A completed load replaces whatever was on screen.
                self.catalog = items;
                self.loading = false;
                self.load_error = None;
                self.status = format!("{} projects in the portfolio.", self.catalog.len());
                self.fetch_thumbnails()
            }
            Message::CatalogLoaded(Err(error)) => {
                self.loading = false;
                self.load_error =
                    Some("Portfolio items could not be loaded. Please try again later.".to_owned());
                self.status = error.to_string();
                eprintln!("❌ {}", error);
                Task::none()
            }
            Message::ThumbnailReady(url, Ok(thumb)) => {
                self.thumbnails
                    .insert(url, Handle::from_rgba(thumb.width, thumb.height, thumb.rgba));
                Task::none()
            }
            Message::ThumbnailReady(url, Err(error)) => {
                eprintln!("⚠️  Thumbnail for {} unavailable: {}", url, error);
                Task::none()
            }
            Message::FullImageReady(url, Ok(bytes)) => {
                self.full_images.insert(url, Handle::from_bytes(bytes));
                Task::none()
            }
            Message::FullImageReady(url, Err(error)) => {
                eprintln!("⚠️  Image {} unavailable: {}", url, error);
                Task::none()
            }
            Message::FilterSelected(filter) => {
                self.filter = filter;
                Task::none()
            }
            Message::ItemActivated(index) => {
                if let Some(item) = self.catalog.get(index) {
                    self.lightbox.open(item, &self.catalog);
                    return self.fetch_active_image();
                }
                Task::none()
            }
            Message::Navigate(direction) => {
                if self.lightbox.is_open() {
                    self.lightbox.step(direction);
                    return self.fetch_active_image();
                }
                self.cycle_filter(direction);
                Task::none()
            }
            Message::CloseLightbox => {
                self.lightbox.close();
                Task::none()
            }
            Message::OpenVideoLink(url) => {
                if let Err(error) = webbrowser::open(&url) {
                    eprintln!("⚠️  Could not open video link: {}", error);
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("Sam's Interiors").size(38),
            text("Residential and commercial portfolio").size(16),
        ]
        .spacing(4);

        let page = column![
            header,
            ui::grid::filter_bar(self.categories(), &self.filter),
            self.body(),
            text(&self.status).size(13),
        ]
        .spacing(24)
        .padding(32);

        let base: Element<Message> = scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match self.lightbox.render(&self.embed_options()) {
            Some(payload) => {
                let full_image = self.full_images.get(&payload.image_url);
                ui::lightbox::overlay(base, &payload, full_image)
            }
            None => base,
        }
    }

    fn body(&self) -> Element<Message> {
        if let Some(error) = &self.load_error {
            return container(text(error).size(16)).padding(40).into();
        }
        if self.loading {
            return container(text("Loading portfolio…").size(16)).padding(40).into();
        }
        if self.catalog.is_empty() {
            return container(text("No portfolio items available.").size(16))
                .padding(40)
                .into();
        }

        column![
            ui::grid::featured_strip(catalog::featured(&self.catalog), &self.thumbnails),
            ui::grid::portfolio_grid(&self.catalog, &self.thumbnails, &self.filter),
        ]
        .spacing(24)
        .into()
    }

    /// Keyboard shortcuts: Escape closes the lightbox, arrows step it while
    /// open and cycle the filter bar while closed
    fn subscription(&self) -> Subscription<Message> {
        iced::keyboard::on_key_press(|key, _modifiers| {
            use iced::keyboard::key::Named;
            use iced::keyboard::Key;

            match key {
                Key::Named(Named::Escape) => Some(Message::CloseLightbox),
                Key::Named(Named::ArrowLeft) => Some(Message::Navigate(-1)),
                Key::Named(Named::ArrowRight) => Some(Message::Navigate(1)),
                _ => None,
            }
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Categories present in the catalog, in first-seen order
    fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for item in &self.catalog {
            if !item.category.is_empty() && !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }

    fn cycle_filter(&mut self, direction: i32) {
        let mut filters = vec!["all".to_owned()];
        filters.extend(self.categories());

        let current = filters
            .iter()
            .position(|filter| *filter == self.filter)
            .unwrap_or(0);
        let len = filters.len() as i64;
        let next = (current as i64 + i64::from(direction)).rem_euclid(len) as usize;
        self.filter = filters[next].clone();
    }

    fn embed_options(&self) -> EmbedOptions {
        EmbedOptions {
            reduced_motion: self.settings.reduced_motion,
            page_origin: self.source.origin(),
        }
    }

    /// Download the lightbox image for the entry currently in view
    fn fetch_active_image(&self) -> Task<Message> {
        let Some(entry) = self.lightbox.active() else {
            return Task::none();
        };

        let display = entry.image().to_owned();
        if display.is_empty() || self.full_images.contains_key(&display) {
            return Task::none();
        }

        // Grid items may carry responsive candidates; fetch the widest one.
        let requested = match entry {
            NavigableEntry::Item(item) => {
                media::fetch::best_srcset_candidate(&item.image_srcset)
                    .unwrap_or_else(|| display.clone())
            }
            _ => display.clone(),
        };
        let Some(resolved) = media::fetch::resolve_asset_url(self.source.url.as_deref(), &requested)
        else {
            return Task::none();
        };

        Task::perform(media::fetch::fetch_asset(resolved), move |result| {
            Message::FullImageReady(display.clone(), result)
        })
    }

    /// Queue thumbnail downloads for every item that does not have one yet
    fn fetch_thumbnails(&self) -> Task<Message> {
        let base = self.source.url.clone();
        let tasks: Vec<Task<Message>> = self
            .catalog
            .iter()
            .filter(|item| !self.thumbnails.contains_key(&item.image))
            .filter_map(|item| {
                let resolved = media::fetch::resolve_asset_url(base.as_deref(), &item.image)?;
                let display = item.image.clone();
                Some(Task::perform(
                    media::thumbnail::fetch_thumbnail(resolved),
                    move |result| Message::ThumbnailReady(display.clone(), result),
                ))
            })
            .collect();

        Task::batch(tasks)
    }
}

fn main() -> iced::Result {
    iced::application(
        "Portfolio Viewer",
        PortfolioViewer::update,
        PortfolioViewer::view,
    )
    .subscription(PortfolioViewer::subscription)
    .theme(PortfolioViewer::theme)
    .centered()
    .run_with(PortfolioViewer::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(title: &str, category: &str) -> CatalogItem {
        CatalogItem {
            title: title.to_owned(),
            description: String::new(),
            category: category.to_owned(),
            tags: Vec::new(),
            alt: title.to_owned(),
            image: format!("https://cdn.example.com/{}.jpg", title.to_lowercase()),
            image_srcset: String::new(),
            video_url: None,
            is_gallery: false,
            gallery_images: Vec::new(),
        }
    }

    #[test]
    fn test_completed_reload_replaces_prior_content() {
        let mut app = PortfolioViewer::with_settings(Settings::default());

        let first = vec![test_item("One", "kitchen"), test_item("Two", "living")];
        let _ = app.update(Message::CatalogLoaded(Ok(first)));
        assert_eq!(app.catalog.len(), 2);

        let second = vec![test_item("Three", "bedroom")];
        let _ = app.update(Message::CatalogLoaded(Ok(second.clone())));
        assert_eq!(app.catalog, second);
        assert!(!app.loading);
    }

    #[test]
    fn test_load_failure_surfaces_a_user_visible_state() {
        let mut app = PortfolioViewer::with_settings(Settings::default());
        let _ = app.update(Message::CatalogLoaded(Err(CatalogError::DataUnavailable {
            reason: "connection refused".to_owned(),
        })));

        assert!(app.load_error.is_some());
        assert!(app.catalog.is_empty());
        assert!(!app.loading);
    }

    #[test]
    fn test_activation_opens_over_the_full_list_despite_filtering() {
        let mut app = PortfolioViewer::with_settings(Settings::default());
        let items = vec![
            test_item("One", "kitchen"),
            test_item("Two", "living"),
            test_item("Three", "kitchen"),
        ];
        let _ = app.update(Message::CatalogLoaded(Ok(items)));
        let _ = app.update(Message::FilterSelected("kitchen".to_owned()));

        let _ = app.update(Message::ItemActivated(2));
        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.active().map(|e| e.title()), Some("Three"));

        // Stepping traverses the full catalog, including the filtered-out item.
        let _ = app.update(Message::Navigate(-1));
        assert_eq!(app.lightbox.active().map(|e| e.title()), Some("Two"));
    }

    #[test]
    fn test_arrows_cycle_the_filter_while_the_lightbox_is_closed() {
        let mut app = PortfolioViewer::with_settings(Settings::default());
        let items = vec![test_item("One", "kitchen"), test_item("Two", "living")];
        let _ = app.update(Message::CatalogLoaded(Ok(items)));
        assert_eq!(app.filter, "all");

        let _ = app.update(Message::Navigate(1));
        assert_eq!(app.filter, "kitchen");
        let _ = app.update(Message::Navigate(-1));
        assert_eq!(app.filter, "all");
        let _ = app.update(Message::Navigate(-1));
        assert_eq!(app.filter, "living");
    }

    #[test]
    fn test_escape_closes_the_lightbox() {
        let mut app = PortfolioViewer::with_settings(Settings::default());
        let items = vec![test_item("One", "kitchen")];
        let _ = app.update(Message::CatalogLoaded(Ok(items)));

        let _ = app.update(Message::ItemActivated(0));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::CloseLightbox);
        assert!(!app.lightbox.is_open());
    }
}
