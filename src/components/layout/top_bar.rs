//! TopBar Component
//!
//! Title bar of the stack-navigation detail screen with a back control.

use gpui::{
    div, prelude::*, px, App, ClickEvent, FontWeight, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::components::primitives::button::Button;
use crate::constants::{BACK_LABEL, CONTENT_PADDING, TOP_BAR_HEIGHT};
use crate::theme::colors::ShopColors;
use crate::theme::typography::Typography;

/// Top bar component
#[derive(IntoElement)]
pub struct TopBar {
    title: SharedString,
    on_back: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
}

impl TopBar {
    pub fn new(
        title: impl Into<SharedString>,
        on_back: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            on_back: Box::new(on_back),
        }
    }
}

impl RenderOnce for TopBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .h(px(TOP_BAR_HEIGHT))
            .w_full()
            .flex_none()
            .flex()
            .items_center()
            .gap_2()
            .px(px(CONTENT_PADDING / 2.0))
            .bg(ShopColors::top_bar_bg())
            .child(Button::new("top-bar-back", BACK_LABEL).on_click(self.on_back))
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(ShopColors::text_primary())
                    .child(self.title),
            )
    }
}
