use std::path::PathBuf;

use ratatui::style::Color;

use crate::index::TOP_LANGUAGES;
use crate::logic::RECENT_COUNT;
use crate::state::{Column, DEFAULT_PAGE_SIZE, SortDirection};

/// Application palette used by rendering code.
///
/// All colors are [`ratatui::style::Color`] values ready for widget styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Canvas background.
    pub base: Color,
    /// Background behind side panels.
    pub mantle: Color,
    /// Background of the selected table row.
    pub surface1: Color,
    /// Border color of unfocused blocks.
    pub overlay1: Color,
    /// Primary foreground text.
    pub text: Color,
    /// Low-emphasis text such as hints and `N/A` cells.
    pub subtext0: Color,
    /// Border and title color of the focused block.
    pub sapphire: Color,
    /// Header row and active sort column.
    pub mauve: Color,
    /// Positive values such as star counts.
    pub green: Color,
    /// Filter values currently applied.
    pub yellow: Color,
    /// Error and status messages.
    pub red: Color,
    /// Secondary accent for panel titles.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),        // #1e1e2e
            mantle: Color::Rgb(24, 24, 37),      // #181825
            surface1: Color::Rgb(69, 71, 90),    // #45475a
            overlay1: Color::Rgb(127, 132, 156), // #7f849c
            text: Color::Rgb(205, 214, 244),     // #cdd6f4
            subtext0: Color::Rgb(166, 173, 200), // #a6adc8
            sapphire: Color::Rgb(116, 199, 236), // #74c7ec
            mauve: Color::Rgb(203, 166, 247),    // #cba6f7
            green: Color::Rgb(166, 227, 161),    // #a6e3a1
            yellow: Color::Rgb(249, 226, 175),   // #f9e2af
            red: Color::Rgb(243, 139, 168),      // #f38ba8
            lavender: Color::Rgb(180, 190, 254), // #b4befe
        }
    }
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Dataset loaded when no path is given on the command line.
    pub data_path: Option<PathBuf>,
    /// Rows per page.
    pub page_size: usize,
    /// Column sorted on at startup; `None` keeps store order.
    pub default_sort: Option<Column>,
    /// Direction used with `default_sort`.
    pub default_sort_direction: SortDirection,
    /// Number of entries in the top-languages ranking.
    pub top_languages: usize,
    /// Number of entries in the recently-updated panel.
    pub recent_count: usize,
    /// Whether the summary panels are shown next to the table.
    pub show_summary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: None,
            default_sort_direction: SortDirection::Ascending,
            top_languages: TOP_LANGUAGES,
            recent_count: RECENT_COUNT,
            show_summary: true,
        }
    }
}
