//! ProductDetails Component
//!
//! Renders one optional product: name, price and description, or a centered
//! placeholder when nothing is selected.

use gpui::{
    div, prelude::*, px, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::constants::{CONTENT_PADDING, DETAILS_PLACEHOLDER, DETAILS_SPACING};
use crate::domain::product::Product;
use crate::theme::colors::ShopColors;
use crate::theme::typography::Typography;

/// Product details component
#[derive(IntoElement)]
pub struct ProductDetails {
    product: Option<Product>,
}

impl ProductDetails {
    pub fn new(product: Option<&Product>) -> Self {
        Self {
            product: product.cloned(),
        }
    }
}

impl RenderOnce for ProductDetails {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        match self.product {
            Some(product) => div()
                .size_full()
                .flex()
                .flex_col()
                .items_start()
                .p(px(CONTENT_PADDING))
                .bg(ShopColors::surface())
                .child(
                    div()
                        .text_size(px(Typography::TEXT_XL))
                        .font_weight(FontWeight::BOLD)
                        .text_color(ShopColors::text_primary())
                        .child(SharedString::from(product.name)),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_BASE))
                        .text_color(ShopColors::text_secondary())
                        .child(SharedString::from(product.price)),
                )
                .child(div().h(px(DETAILS_SPACING)))
                .child(
                    div()
                        .text_size(px(Typography::TEXT_BASE))
                        .text_color(ShopColors::text_secondary())
                        .child(SharedString::from(product.description)),
                ),
            None => div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .bg(ShopColors::surface())
                .text_size(px(Typography::TEXT_BASE))
                .text_color(ShopColors::text_muted())
                .child(DETAILS_PLACEHOLDER),
        }
    }
}
