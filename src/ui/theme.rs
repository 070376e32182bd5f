//! Visual theme for the showcase.
//!
//! One warm, dark palette: deep brown surfaces with saffron-gold accents
//! and a muted crimson for the stigma notes. Style functions live here so
//! views never build colors inline.

use iced::widget::{button, container, pick_list, text_input};
use iced::{color, Background, Border, Color, Padding, Shadow, Theme, Vector};

/// Vertical/horizontal padding shorthand
pub fn pad(vertical: f32, horizontal: f32) -> Padding {
    Padding {
        top: vertical,
        bottom: vertical,
        left: horizontal,
        right: horizontal,
    }
}

pub const BACKGROUND: Color = color!(0x140d07);
pub const SURFACE: Color = color!(0x1f1710);
pub const SURFACE_LIGHT: Color = color!(0x2c2015);
pub const BORDER: Color = color!(0x3d2e1d);

pub const GOLD: Color = color!(0xe0a52b);
pub const GOLD_SOFT: Color = color!(0xf0c268);
pub const CRIMSON: Color = color!(0xa8414b);

pub const TEXT_PRIMARY: Color = color!(0xf7f1e3);
pub const TEXT_SECONDARY: Color = color!(0xcbbfa9);
pub const TEXT_MUTED: Color = color!(0x8e8170);

pub const SUCCESS: Color = color!(0x62a86b);
pub const DANGER: Color = color!(0xc05a50);

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

// --- page chrome ---

pub fn app_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// The navbar grows a bottom border and a solid fill once the page has
/// scrolled past the hero's first stretch.
pub fn nav_bar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        if scrolled {
            container::Style {
                background: Some(Background::Color(SURFACE)),
                border: Border {
                    color: BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow {
                    color: with_alpha(Color::BLACK, 0.4),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        } else {
            container::Style {
                background: Some(Background::Color(with_alpha(BACKGROUND, 0.6))),
                ..Default::default()
            }
        }
    }
}

pub fn nav_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => GOLD,
        _ => TEXT_SECONDARY,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        text_color: Some(TEXT_SECONDARY),
        ..Default::default()
    }
}

// --- buttons ---

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => GOLD_SOFT,
        button::Status::Pressed => with_alpha(GOLD, 0.85),
        button::Status::Disabled => with_alpha(GOLD, 0.3),
        _ => GOLD,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: BACKGROUND,
        border: Border {
            radius: 22.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (border_color, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (GOLD_SOFT, GOLD_SOFT),
        _ => (GOLD, GOLD),
    };
    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 22.0.into(),
        },
        ..Default::default()
    }
}

/// Round prev/next arrows over photos and the carousel lane
pub fn arrow_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => SURFACE_LIGHT,
        _ => with_alpha(SURFACE, 0.85),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: GOLD,
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 20.0.into(),
        },
        ..Default::default()
    }
}

/// Small glyph buttons on carousel cards
pub fn card_control_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(Color::BLACK, 0.7),
        _ => with_alpha(Color::BLACK, 0.45),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn thumbnail_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let border_color = if active {
            GOLD
        } else if matches!(status, button::Status::Hovered) {
            with_alpha(GOLD, 0.5)
        } else {
            Color::TRANSPARENT
        };
        button::Style {
            background: Some(Background::Color(SURFACE)),
            border: Border {
                color: border_color,
                width: 2.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }
}

pub fn variant_card(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, border_color) = if selected {
            (SURFACE_LIGHT, GOLD)
        } else if matches!(status, button::Status::Hovered) {
            (SURFACE_LIGHT, with_alpha(GOLD, 0.4))
        } else {
            (SURFACE, BORDER)
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: TEXT_PRIMARY,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- cards and panels ---

pub fn surface_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn photo_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_LIGHT)),
        text_color: Some(TEXT_MUTED),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(DANGER, 0.15))),
        text_color: Some(DANGER),
        border: Border {
            color: with_alpha(DANGER, 0.5),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn success_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(SUCCESS, 0.12))),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: with_alpha(SUCCESS, 0.5),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

// --- lightbox ---

pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(Color::BLACK, 0.92))),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

// --- inputs ---

pub fn form_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => GOLD,
        text_input::Status::Hovered => with_alpha(GOLD, 0.4),
        _ => BORDER,
    };
    text_input::Style {
        background: Background::Color(SURFACE_LIGHT),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT_PRIMARY,
        selection: with_alpha(GOLD, 0.4),
    }
}

pub fn quantity_picker(_theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let border_color = match status {
        pick_list::Status::Opened | pick_list::Status::Hovered => GOLD,
        _ => BORDER,
    };
    pick_list::Style {
        text_color: TEXT_PRIMARY,
        placeholder_color: TEXT_MUTED,
        handle_color: GOLD,
        background: Background::Color(SURFACE_LIGHT),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
    }
}
