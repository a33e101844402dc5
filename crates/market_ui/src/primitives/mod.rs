//! Building blocks the widget family is composed from: buttons, panels, text, layout and
//! floating menu surfaces.
//!
//! Every primitive renders `data-ui-primitive="true"` plus a `data-ui-kind` token so the
//! stylesheet layers can target them without relying on class names.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod overlays;

pub use controls::{Button, CheckboxField};
pub use data_display::{Badge, EmptyState, Heading, PaneHeader, Panel, Text};
pub use layout::{Cluster, Stack};
pub use overlays::{MenuItem, MenuSurface};

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
        default $default:ident
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $(#[$meta])*
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            pub(crate) fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }
    };
}

token_enum! {
    /// Button fill. Dropdown triggers map their variant onto `Standard`, `Outline` and `Ghost`.
    ButtonVariant {
        /// Filled neutral button.
        Standard => "default",
        /// Emphasized call to action, e.g. "Publicar".
        Primary => "primary",
        /// Bordered, transparent fill.
        Outline => "outline",
        /// No border or fill until hovered.
        Ghost => "ghost",
    }
    default Standard
}

token_enum! {
    /// Control height.
    ButtonSize {
        /// Dense toolbars and table headers.
        Sm => "sm",
        /// Form fields.
        Md => "md",
        /// Touch-first controls.
        Lg => "lg",
    }
    default Md
}

token_enum! {
    /// Typographic role.
    TextRole {
        /// Running text.
        Body => "body",
        /// Field and section labels.
        Label => "label",
        /// Helper and meta text.
        Caption => "caption",
        /// Panel titles.
        Title => "title",
    }
    default Body
}

token_enum! {
    /// Text and badge colour.
    TextTone {
        /// Default ink.
        Primary => "primary",
        /// Muted ink.
        Secondary => "secondary",
        /// Brand accent.
        Accent => "accent",
        /// Completed or healthy states.
        Success => "success",
        /// States that need the seller's attention.
        Warning => "warning",
        /// Failed or cancelled states.
        Danger => "danger",
    }
    default Primary
}

token_enum! {
    /// Spacing between children of a layout primitive.
    LayoutGap {
        /// Flush.
        None => "none",
        /// Tight.
        Sm => "sm",
        /// Regular.
        Md => "md",
        /// Loose.
        Lg => "lg",
    }
    default Md
}

token_enum! {
    /// Inner padding of panels and stacks.
    LayoutPadding {
        /// Flush.
        None => "none",
        /// Tight.
        Sm => "sm",
        /// Regular.
        Md => "md",
        /// Loose.
        Lg => "lg",
    }
    default Md
}

token_enum! {
    /// Cross-axis alignment.
    LayoutAlign {
        /// Fill the cross axis.
        Stretch => "stretch",
        /// Pack at the start.
        Start => "start",
        /// Center.
        Center => "center",
        /// Pack at the end.
        End => "end",
    }
    default Stretch
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-stack", None), "ui-stack");
        assert_eq!(merge_layout_class("ui-stack", Some("")), "ui-stack");
        assert_eq!(
            merge_layout_class("ui-stack", Some("orders-toolbar")),
            "ui-stack orders-toolbar"
        );
    }

    #[test]
    fn dropdown_trigger_variants_use_stable_tokens() {
        assert_eq!(ButtonVariant::default().token(), "default");
        assert_eq!(ButtonVariant::Outline.token(), "outline");
        assert_eq!(ButtonVariant::Primary.token(), "primary");
        assert_eq!(ButtonVariant::Ghost.token(), "ghost");
        assert_eq!(ButtonSize::default().token(), "md");
    }

    #[test]
    fn layout_defaults_match_the_stylesheet_baseline() {
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutPadding::default().token(), "md");
        assert_eq!(LayoutAlign::default().token(), "stretch");
        assert_eq!(TextRole::default().token(), "body");
        assert_eq!(TextTone::default().token(), "primary");
    }
}
