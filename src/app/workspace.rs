//! Root - Top-Level Window Content
//!
//! Hosts the products page as the only content on the themed background.

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::features::products::page::ProductsPage;
use crate::theme::colors::ShopColors;
use crate::theme::typography::Typography;

/// Root view of the main window
pub struct Root {
    products_page: Entity<ProductsPage>,
}

impl Root {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let products_page = cx.new(|cx| ProductsPage::new(entities, cx));
        Self { products_page }
    }
}

impl Render for Root {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ShopColors::background())
            .text_color(ShopColors::text_primary())
            .text_size(gpui::px(Typography::TEXT_SM))
            .child(self.products_page.clone())
    }
}
