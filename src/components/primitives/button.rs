//! Button Component
//!
//! A transparent, rounded button used for top bar controls.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ShopColors;
use crate::theme::typography::Typography;

/// A styled ghost button
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            on_click: None,
        }
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut element = div()
            .id(self.id)
            .px(px(12.0))
            .py(px(6.0))
            .text_color(ShopColors::text_primary())
            .text_size(px(Typography::TEXT_LG))
            .rounded_full()
            .cursor_pointer()
            .hover(|s| s.bg(ShopColors::ghost_hover()))
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
