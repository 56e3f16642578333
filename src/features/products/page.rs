//! Products Page
//!
//! Chooses between the split pane and stack navigation on every render and
//! composes the product list and details accordingly.

use gpui::{
    div, prelude::*, AnyElement, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::layout::Viewport;
use crate::components::catalog::product_details::ProductDetails;
use crate::components::catalog::product_list::ProductList;
use crate::components::layout::top_bar::TopBar;
use crate::constants::DETAILS_TITLE;
use crate::features::products::controller::ProductsController;
use crate::state::pane_state::Screen;
use crate::theme::colors::ShopColors;

/// Products page component
pub struct ProductsPage {
    entities: AppEntities,
    controller: ProductsController,
}

impl ProductsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ProductsController::new(entities.clone());

        // Observe pane state
        cx.observe(&entities.pane, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn product_list(&self, selected: Option<&str>) -> ProductList {
        let controller = self.controller.clone();
        ProductList::new(
            "product-list",
            self.entities.catalog.clone(),
            move |name, _window, cx| controller.select(name, cx),
        )
        .selected(selected)
    }

    fn render_split(&self, screen_selected: Option<&str>, details: ProductDetails) -> AnyElement {
        div()
            .size_full()
            .flex()
            .flex_row()
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .overflow_hidden()
                    .border_r_1()
                    .border_color(ShopColors::divider())
                    .child(self.product_list(screen_selected)),
            )
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .overflow_hidden()
                    .child(details),
            )
            .into_any_element()
    }

    fn render_list(&self) -> AnyElement {
        div()
            .size_full()
            .child(self.product_list(None))
            .into_any_element()
    }

    fn render_detail(&self, details: ProductDetails) -> AnyElement {
        let controller = self.controller.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(TopBar::new(DETAILS_TITLE, move |_event, _window, cx| {
                controller.back(cx)
            }))
            .child(div().flex_1().overflow_hidden().child(details))
            .into_any_element()
    }
}

impl Render for ProductsPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let size = window.viewport_size();
        let viewport = Viewport::new(f32::from(size.width), f32::from(size.height));
        self.controller.sync_layout(viewport, cx);

        let catalog = self.entities.catalog.clone();
        let pane = self.entities.pane.read(cx).clone();

        match pane.screen(&catalog) {
            Screen::Split { selected } => {
                self.render_split(pane.selected_name(), ProductDetails::new(selected))
            }
            Screen::List => self.render_list(),
            Screen::Detail { product } => self.render_detail(ProductDetails::new(product)),
        }
    }
}
