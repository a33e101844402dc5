//! Icon catalog shared by the marketplace widgets.
//!
//! Widgets reference icons through [`IconName`] and never embed SVG markup directly. Glyphs are
//! drawn on a 24px grid and rendered with `currentColor`.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Glyph drawn by [`Icon`].
pub enum IconName {
    /// Dropdown trigger / expand affordance.
    ChevronDown,
    /// Previous month.
    ChevronLeft,
    /// Next month.
    ChevronRight,
    /// Date field affordance.
    Calendar,
    /// Clear / close.
    Dismiss,
    /// Selected option marker.
    Checkmark,
    /// Column sorted ascending.
    SortAscending,
    /// Column sorted descending.
    SortDescending,
    /// Sortable column with no active sort.
    Sortable,
    /// Empty table body.
    Inbox,
    /// Informational hint.
    Info,
}

impl IconName {
    /// Token written to `data-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Calendar => "calendar",
            Self::Dismiss => "dismiss",
            Self::Checkmark => "checkmark",
            Self::SortAscending => "sort-ascending",
            Self::SortDescending => "sort-descending",
            Self::Sortable => "sortable",
            Self::Inbox => "inbox",
            Self::Info => "info",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::ChevronLeft => {
                r#"<path d="M15.53 4.22c.3.3.3.77 0 1.06L8.81 12l6.72 6.72a.75.75 0 1 1-1.06 1.06l-7.25-7.25a.75.75 0 0 1 0-1.06l7.25-7.25c.3-.3.77-.3 1.06 0Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22c.3-.3.77-.3 1.06 0l7.25 7.25c.3.3.3.77 0 1.06l-7.25 7.25a.75.75 0 1 1-1.06-1.06L15.19 12 8.47 5.28a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Calendar => {
                r#"<path d="M7.75 2c.41 0 .75.34.75.75V4h7V2.75a.75.75 0 0 1 1.5 0V4h.75C19.55 4 21 5.46 21 7.25v10.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V7.25C3 5.45 4.46 4 6.25 4H7V2.75c0-.41.34-.75.75-.75ZM4.5 9.5v8.25c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V9.5h-15Zm1.75-4c-.97 0-1.75.78-1.75 1.75V8h15v-.75c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::SortAscending => {
                r#"<path d="M11.47 4.22c.3-.3.77-.3 1.06 0l5.25 5.25a.75.75 0 1 1-1.06 1.06L12.75 6.56v12.69a.75.75 0 0 1-1.5 0V6.56l-3.97 3.97a.75.75 0 0 1-1.06-1.06l5.25-5.25Z"/>"#
            }
            Self::SortDescending => {
                r#"<path d="M12.53 19.78c-.3.3-.77.3-1.06 0l-5.25-5.25a.75.75 0 1 1 1.06-1.06l3.97 3.97V4.75a.75.75 0 0 1 1.5 0v12.69l3.97-3.97a.75.75 0 1 1 1.06 1.06l-5.25 5.25Z"/>"#
            }
            Self::Sortable => {
                r#"<path d="M11.47 3.22c.3-.3.77-.3 1.06 0l4 4a.75.75 0 0 1-1.06 1.06L12 4.81 8.53 8.28a.75.75 0 0 1-1.06-1.06l4-4Zm0 17.56-4-4a.75.75 0 1 1 1.06-1.06L12 19.19l3.47-3.47a.75.75 0 1 1 1.06 1.06l-4 4c-.3.3-.77.3-1.06 0Z"/>"#
            }
            Self::Inbox => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V13h-4.25a.75.75 0 0 0-.75.75 2.5 2.5 0 0 1-5 0 .75.75 0 0 0-.75-.75H4.5V6.25Zm0 8.25h3.32a4 4 0 0 0 7.86 0h3.82v3.25c0 .97-.78 1.75-1.75 1.75H6.25c-.97 0-1.75-.78-1.75-1.75V14.5Z"/>"#
            }
            Self::Info => {
                r#"<path d="M12 1.5a10.5 10.5 0 1 1 0 21 10.5 10.5 0 0 1 0-21ZM12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18Zm0 7.25c.41 0 .75.34.75.75v5.5a.75.75 0 0 1-1.5 0V11c0-.41.34-.75.75-.75Zm0-3a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px, dense table headers.
    Xs,
    /// 16px, menus and buttons.
    #[default]
    Sm,
    /// 32px, empty states.
    Lg,
}

impl IconSize {
    /// Edge length in CSS pixels.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Lg => 32,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the catalog.
pub fn Icon(
    /// Glyph drawn by [`Icon`].
    icon: IconName,
    /// Icon box size.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sort_icons_have_distinct_tokens() {
        let tokens = [
            IconName::SortAscending.token(),
            IconName::SortDescending.token(),
            IconName::Sortable.token(),
        ];
        assert_eq!(tokens, ["sort-ascending", "sort-descending", "sortable"]);
    }

    #[test]
    fn every_glyph_is_a_single_path() {
        for icon in [
            IconName::ChevronDown,
            IconName::ChevronLeft,
            IconName::ChevronRight,
            IconName::Calendar,
            IconName::Dismiss,
            IconName::Checkmark,
            IconName::SortAscending,
            IconName::SortDescending,
            IconName::Sortable,
            IconName::Inbox,
            IconName::Info,
        ] {
            let body = icon.svg_body();
            assert!(body.starts_with("<path d=\""), "{}", icon.token());
            assert!(body.ends_with("\"/>"), "{}", icon.token());
        }
    }

    #[test]
    fn sizes_map_to_pixel_edges() {
        let sizes = [IconSize::Xs, IconSize::Sm, IconSize::Lg];
        assert_eq!(sizes.map(IconSize::px), [14, 16, 32]);
        assert_eq!(sizes.map(IconSize::token), ["xs", "sm", "lg"]);
        assert_eq!(IconSize::default(), IconSize::Sm);
    }
}
