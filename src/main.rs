//! Saffron Vitrine: a native landing showcase for an artisan saffron brand.
//!
//! One window, one scrollable page: hero, story, animated statistics,
//! benefits, photo gallery with a lightbox, a clip carousel with exclusive
//! playback, and a simulated order form. Content comes from the assets
//! catalog at startup; nothing is persisted and no network is touched.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use iced::keyboard::{self, key::Named};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{column, container, stack, text_input};
use iced::{event, mouse, window, Element, Length, Point, Size, Subscription, Task, Theme};
use tracing_subscriber::EnvFilter;

mod anim;
mod error;
mod playback;
mod state;
mod ui;

use anim::Tween;
use playback::PlaybackEngine;
use state::carousel::{CardState, CarouselMessage, CarouselState, Direction};
use state::catalog::{self, Catalog};
use state::data::{PhotoAssets, StatSpec};
use state::gallery::{GalleryMessage, GalleryState, RESIZE_DEBOUNCE};
use state::order::{OrderField, OrderMessage, OrderState, ERROR_DISMISS_DELAY};
use state::reveal::{RevealState, Section};

type ImageHandle = iced::widget::image::Handle;

const WINDOW_SIZE: Size = Size::new(1280.0, 860.0);

/// Edge length thumbnails are downscaled to
const THUMBNAIL_SIZE: u32 = 192;

/// Length of the animated jump when a nav link is clicked
const NAV_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Scrollable id of the page itself
const PAGE_ID: &str = "page";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application("Saffron Vitrine", Vitrine::update, Vitrine::view)
        .theme(Vitrine::theme)
        .subscription(Vitrine::subscription)
        .window_size(WINDOW_SIZE)
        .centered()
        .run_with(Vitrine::new)
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Catalog finished loading in the background
    CatalogLoaded(Result<Catalog, String>),
    /// A gallery thumbnail finished downscaling
    ThumbnailLoaded(usize, Option<ImageHandle>),
    Gallery(GalleryMessage),
    Carousel(CarouselMessage),
    Order(OrderMessage),
    NavClicked(Section),
    PageScrolled(scrollable::Viewport),
    WindowResized(Size),
    CursorMoved(Point),
    KeyPressed(keyboard::Key),
    /// Redraw frame while something is animating
    Tick(Instant),
}

/// An in-flight animated jump to a nav target
#[derive(Debug, Clone, Copy)]
struct NavScroll {
    from: f32,
    to: f32,
    tween: Tween,
}

/// Main application state
struct Vitrine {
    gallery: GalleryState,
    carousel: Option<CarouselState>,
    order: OrderState,
    reveal: RevealState,
    engine: Option<PlaybackEngine>,
    stats: Vec<StatSpec>,
    photos: Vec<PhotoAssets>,
    posters: Vec<Option<ImageHandle>>,
    window: Size,
    cursor: Point,
    nav_scroll: Option<NavScroll>,
    now: Instant,
}

impl Vitrine {
    fn new() -> (Self, Task<Message>) {
        let engine = match PlaybackEngine::new() {
            Ok(engine) => Some(engine),
            Err(error) => {
                tracing::error!(%error, "audio output unavailable; showcase playback disabled");
                None
            }
        };

        let app = Self {
            gallery: GalleryState::new(Vec::new()),
            carousel: None,
            order: OrderState::new(Vec::new()),
            reveal: RevealState::new(
                ui::sections::section_spans(),
                WINDOW_SIZE.height - ui::sections::NAV_HEIGHT,
            ),
            engine,
            stats: Vec::new(),
            photos: Vec::new(),
            posters: Vec::new(),
            window: WINDOW_SIZE,
            cursor: Point::ORIGIN,
            nav_scroll: None,
            now: Instant::now(),
        };

        let load = Task::perform(catalog::load(catalog::assets_dir()), |result| {
            Message::CatalogLoaded(result.map_err(|error| error.to_string()))
        });

        (app, load)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        let now = self.now;

        match message {
            Message::CatalogLoaded(Ok(catalog)) => self.apply_catalog(catalog),
            Message::CatalogLoaded(Err(error)) => {
                tracing::error!(%error, "catalog load failed; page renders placeholders");
                Task::none()
            }
            Message::ThumbnailLoaded(index, handle) => {
                if let Some(photo) = self.photos.get_mut(index) {
                    photo.thumb = handle;
                }
                Task::none()
            }
            Message::Gallery(message) => self.on_gallery(message),
            Message::Carousel(message) => self.on_carousel(message),
            Message::Order(message) => self.on_order(message),
            Message::NavClicked(section) => {
                self.nav_scroll = Some(NavScroll {
                    from: self.reveal.scroll_offset(),
                    to: ui::sections::section_top(section),
                    tween: Tween::new(NAV_SCROLL_DURATION, anim::ease_out_cubic, now),
                });
                Task::none()
            }
            Message::PageScrolled(viewport) => {
                self.reveal.on_scroll(viewport.absolute_offset().y, now);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window = size;
                self.reveal
                    .set_viewport_height(size.height - ui::sections::NAV_HEIGHT);
                // Trailing debounce: only the newest generation recomputes.
                let epoch = self.gallery.begin_resize();
                Task::perform(
                    async move {
                        tokio::time::sleep(RESIZE_DEBOUNCE).await;
                        epoch
                    },
                    |epoch| Message::Gallery(GalleryMessage::ResizeSettled(epoch)),
                )
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
                Task::none()
            }
            Message::KeyPressed(key) => self.on_key(key),
            Message::Tick(frame) => {
                self.now = frame;
                self.tick(frame)
            }
        }
    }

    fn apply_catalog(&mut self, catalog: Catalog) -> Task<Message> {
        let Catalog {
            images,
            clips,
            variants,
            stats,
        } = catalog;
        tracing::info!(
            photos = images.len(),
            clips = clips.len(),
            "catalog loaded"
        );

        self.photos = images
            .iter()
            .map(|entry| PhotoAssets {
                full: entry
                    .present
                    .then(|| ImageHandle::from_path(&entry.path)),
                thumb: None,
            })
            .collect();

        let thumb_tasks: Vec<Task<Message>> = images
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.present)
            .map(|(index, entry)| {
                Task::perform(
                    load_thumbnail(index, entry.path.clone()),
                    |(index, handle)| Message::ThumbnailLoaded(index, handle),
                )
            })
            .collect();

        let mut gallery = GalleryState::new(images);
        gallery.set_strip_viewport(ui::gallery::strip_viewport_for(self.window.width));
        self.gallery = gallery;

        self.posters = clips
            .iter()
            .map(|clip| {
                clip.poster
                    .as_ref()
                    .filter(|poster| poster.is_file())
                    .map(ImageHandle::from_path)
            })
            .collect();

        self.carousel = match &self.engine {
            Some(engine) if !clips.is_empty() => {
                let cards = clips
                    .into_iter()
                    .map(|clip| {
                        let player = if clip.present {
                            match engine.open_clip(&clip.path) {
                                Ok(player) => Some(player),
                                Err(error) => {
                                    tracing::warn!(
                                        clip = %clip.path.display(),
                                        %error,
                                        "could not open clip"
                                    );
                                    None
                                }
                            }
                        } else {
                            None
                        };
                        CardState::new(clip, player)
                    })
                    .collect();
                Some(CarouselState::new(cards))
            }
            // Setup was already aborted with a logged error, or there is
            // nothing to show.
            _ => None,
        };

        self.order = OrderState::new(variants);
        self.stats = stats;

        // Reveal whatever the initial viewport already shows.
        self.reveal.on_scroll(0.0, self.now);

        Task::batch(thumb_tasks)
    }

    fn on_gallery(&mut self, message: GalleryMessage) -> Task<Message> {
        let now = self.now;
        match message {
            GalleryMessage::ThumbnailPressed(index) => {
                self.gallery.show(index, now);
                self.strip_task()
            }
            GalleryMessage::NextPressed => {
                self.gallery.next(now);
                self.strip_task()
            }
            GalleryMessage::PreviousPressed => {
                self.gallery.previous(now);
                self.strip_task()
            }
            GalleryMessage::PhotoPressed => {
                self.gallery.begin_swipe(self.cursor.x);
                Task::none()
            }
            GalleryMessage::PhotoReleased => {
                if self.gallery.end_swipe(self.cursor.x, now) {
                    self.strip_task()
                } else {
                    Task::none()
                }
            }
            GalleryMessage::PhotoExited => {
                self.gallery.cancel_swipe();
                Task::none()
            }
            GalleryMessage::OpenLightbox => {
                self.gallery.open_lightbox();
                Task::none()
            }
            GalleryMessage::CloseLightbox => {
                self.gallery.close_lightbox();
                Task::none()
            }
            GalleryMessage::LightboxNext => {
                self.gallery.lightbox_next();
                self.strip_task()
            }
            GalleryMessage::LightboxPrevious => {
                self.gallery.lightbox_previous();
                self.strip_task()
            }
            GalleryMessage::ResizeSettled(epoch) => {
                let viewport = ui::gallery::strip_viewport_for(self.window.width);
                if self.gallery.settle_resize(epoch, viewport) {
                    self.strip_task()
                } else {
                    Task::none()
                }
            }
        }
    }

    fn on_carousel(&mut self, message: CarouselMessage) -> Task<Message> {
        let now = self.now;
        if let Some(carousel) = self.carousel.as_mut() {
            match message {
                CarouselMessage::NextPressed => carousel.move_carousel(Direction::Next, now),
                CarouselMessage::PreviousPressed => {
                    carousel.move_carousel(Direction::Previous, now)
                }
                CarouselMessage::TogglePlay(index) => carousel.toggle_play(index),
                CarouselMessage::ToggleMute(index) => carousel.toggle_mute(index),
            }
        }
        Task::none()
    }

    fn on_order(&mut self, message: OrderMessage) -> Task<Message> {
        match message {
            OrderMessage::VariantPressed(index) => {
                self.order.select_variant(index);
                Task::none()
            }
            OrderMessage::QuantityPicked(variant) => {
                self.order.pick_quantity(variant);
                Task::none()
            }
            OrderMessage::NameChanged(value) => {
                self.order.form.name = value;
                Task::none()
            }
            OrderMessage::EmailChanged(value) => {
                self.order.form.email = value;
                Task::none()
            }
            OrderMessage::PhoneChanged(value) => {
                self.order.form.phone = value;
                Task::none()
            }
            OrderMessage::AddressChanged(value) => {
                self.order.form.address = value;
                Task::none()
            }
            // Enter walks the form; on the last field it submits.
            OrderMessage::FieldSubmitted(OrderField::Name) => {
                text_input::focus(ui::order::input_id(OrderField::Email))
            }
            OrderMessage::FieldSubmitted(OrderField::Email) => {
                text_input::focus(ui::order::input_id(OrderField::Phone))
            }
            OrderMessage::FieldSubmitted(OrderField::Phone) => {
                text_input::focus(ui::order::input_id(OrderField::Address))
            }
            OrderMessage::FieldSubmitted(OrderField::Address) => self.submit_order(),
            OrderMessage::SubmitPressed => self.submit_order(),
            OrderMessage::ResetPressed => {
                self.order.reset();
                Task::none()
            }
            OrderMessage::ErrorDismiss(epoch) => {
                self.order.dismiss_error(epoch);
                Task::none()
            }
        }
    }

    fn submit_order(&mut self) -> Task<Message> {
        match self.order.submit(Utc::now()) {
            Ok(()) => Task::none(),
            Err(epoch) => Task::perform(
                async move {
                    tokio::time::sleep(ERROR_DISMISS_DELAY).await;
                    epoch
                },
                |epoch| Message::Order(OrderMessage::ErrorDismiss(epoch)),
            ),
        }
    }

    /// Arrow keys drive whichever layer is on top; the lightbox keeps
    /// them to itself while open.
    fn on_key(&mut self, key: keyboard::Key) -> Task<Message> {
        let now = self.now;
        if self.gallery.lightbox_open() {
            match key {
                keyboard::Key::Named(Named::Escape) => {
                    self.gallery.close_lightbox();
                    Task::none()
                }
                keyboard::Key::Named(Named::ArrowRight) => {
                    self.gallery.lightbox_next();
                    self.strip_task()
                }
                keyboard::Key::Named(Named::ArrowLeft) => {
                    self.gallery.lightbox_previous();
                    self.strip_task()
                }
                _ => Task::none(),
            }
        } else {
            match key {
                keyboard::Key::Named(Named::ArrowRight) => {
                    self.gallery.next(now);
                    self.strip_task()
                }
                keyboard::Key::Named(Named::ArrowLeft) => {
                    self.gallery.previous(now);
                    self.strip_task()
                }
                _ => Task::none(),
            }
        }
    }

    fn tick(&mut self, now: Instant) -> Task<Message> {
        self.gallery.tick(now);
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.tick(now);
        }
        self.reveal.tick(now);

        if let Some(scroll) = self.nav_scroll {
            let offset = scroll.tween.interpolate(scroll.from, scroll.to, now);
            if scroll.tween.is_finished(now) {
                self.nav_scroll = None;
            }
            return scrollable::scroll_to(
                scrollable::Id::new(PAGE_ID),
                AbsoluteOffset { x: 0.0, y: offset },
            );
        }

        Task::none()
    }

    /// Keep the active thumbnail centered in the strip
    fn strip_task(&self) -> Task<Message> {
        scrollable::scroll_to(
            scrollable::Id::new(ui::gallery::STRIP_ID),
            AbsoluteOffset {
                x: self.gallery.strip_offset(),
                y: 0.0,
            },
        )
    }

    fn is_animating(&self) -> bool {
        self.gallery.is_animating()
            || self
                .carousel
                .as_ref()
                .is_some_and(|carousel| carousel.is_animating())
            || self.reveal.is_animating(self.now)
            || self.nav_scroll.is_some()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let now = self.now;

        let gallery_body =
            ui::gallery::section(&self.gallery, &self.photos, now).map(Message::Gallery);
        let showcase_body = ui::carousel::section(
            self.carousel.as_ref(),
            &self.posters,
            self.window.width - 2.0 * ui::sections::CONTENT_PADDING,
            now,
        )
        .map(Message::Carousel);
        let purchase_body = ui::order::section(&self.order).map(Message::Order);

        let content = column![
            ui::sections::hero(&self.reveal),
            ui::sections::about(&self.reveal, now),
            ui::sections::stats(&self.reveal, &self.stats, now),
            ui::sections::benefits(&self.reveal, now),
            ui::sections::framed(
                Section::Gallery,
                "Gallery",
                "The harvest in pictures",
                &self.reveal,
                now,
                gallery_body,
            ),
            ui::sections::framed(
                Section::Showcase,
                "From the field",
                "Scenes from planting to drying",
                &self.reveal,
                now,
                showcase_body,
            ),
            ui::sections::framed(
                Section::Purchase,
                "Order",
                "Straight from the farm to your kitchen",
                &self.reveal,
                now,
                purchase_body,
            ),
            ui::sections::contact(),
        ];

        let page = scrollable::Scrollable::new(content)
            .id(scrollable::Id::new(PAGE_ID))
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let base = column![
            ui::sections::nav_bar(self.reveal.navbar_scrolled()),
            page
        ];

        let root: Element<'_, Message> = if self.gallery.lightbox_open() {
            let overlay = ui::gallery::lightbox(&self.gallery, &self.photos).map(Message::Gallery);
            stack![base, overlay].into()
        } else {
            base.into()
        };

        container(root)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::theme::app_background)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(filter_event);
        if self.is_animating() {
            Subscription::batch([events, window::frames().map(Message::Tick)])
        } else {
            events
        }
    }
}

/// Raw events the app cares about: resizes for the debounced strip
/// recompute, cursor position for swipe tracking, and keys nothing else
/// claimed.
fn filter_event(
    event: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match (event, status) {
        (iced::Event::Window(window::Event::Resized(size)), _) => {
            Some(Message::WindowResized(size))
        }
        (iced::Event::Mouse(mouse::Event::CursorMoved { position }), _) => {
            Some(Message::CursorMoved(position))
        }
        (
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(key)),
        _ => None,
    }
}

/// Downscale one gallery photo for the strip. Runs on a blocking thread;
/// failures degrade that thumbnail to a placeholder.
async fn load_thumbnail(index: usize, path: PathBuf) -> (usize, Option<ImageHandle>) {
    let handle = tokio::task::spawn_blocking(move || match image::open(&path) {
        Ok(decoded) => {
            let thumb = decoded.resize(
                THUMBNAIL_SIZE,
                THUMBNAIL_SIZE,
                image::imageops::FilterType::Lanczos3,
            );
            let rgba = thumb.to_rgba8();
            let (width, height) = rgba.dimensions();
            Some(ImageHandle::from_rgba(width, height, rgba.into_raw()))
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "thumbnail decode failed");
            None
        }
    })
    .await
    .unwrap_or(None);

    (index, handle)
}
