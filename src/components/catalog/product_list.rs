//! ProductList Component
//!
//! Virtualized, clickable list of catalog products. Only rows inside the
//! visible range are built, so the list scales past the builtin catalog.

use std::ops::Range;
use std::rc::Rc;

use gpui::{
    div, prelude::*, px, uniform_list, App, ClickEvent, Div, ElementId, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, Stateful, StatefulInteractiveElement,
    Styled, Window,
};

use crate::constants::{CONTENT_PADDING, LIST_ROW_HEIGHT};
use crate::domain::catalog::Catalog;
use crate::domain::product::Product;
use crate::theme::colors::ShopColors;
use crate::theme::typography::Typography;

/// Row click handler, called with the product name
pub type SelectHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// Product list component
#[derive(IntoElement)]
pub struct ProductList {
    id: ElementId,
    catalog: Catalog,
    selected: Option<String>,
    on_select: SelectHandler,
}

impl ProductList {
    pub fn new(
        id: impl Into<ElementId>,
        catalog: Catalog,
        on_select: impl Fn(&str, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            catalog,
            selected: None,
            on_select: Rc::new(on_select),
        }
    }

    /// Highlight the row with this name
    pub fn selected(mut self, name: Option<&str>) -> Self {
        self.selected = name.map(str::to_string);
        self
    }
}

/// Products for a visible row range, in catalog order
pub fn visible_rows(catalog: &Catalog, range: Range<usize>) -> impl Iterator<Item = (usize, &Product)> {
    let end = range.end.min(catalog.len());
    let start = range.start.min(end);
    catalog.products()[start..end]
        .iter()
        .enumerate()
        .map(move |(offset, product)| (start + offset, product))
}

fn render_row(
    index: usize,
    product: &Product,
    is_selected: bool,
    on_select: SelectHandler,
) -> Stateful<Div> {
    let name = product.name.clone();
    let bg = if is_selected {
        ShopColors::row_selected()
    } else {
        ShopColors::surface()
    };

    div()
        .id(SharedString::from(format!("product-row-{index}")))
        .h(px(LIST_ROW_HEIGHT))
        .w_full()
        .flex()
        .items_center()
        .px(px(CONTENT_PADDING))
        .bg(bg)
        .border_b_1()
        .border_color(ShopColors::divider())
        .text_size(px(Typography::TEXT_BASE))
        .text_color(ShopColors::text_primary())
        .cursor_pointer()
        .hover(|s| s.bg(ShopColors::row_hover()))
        .on_click(move |_event: &ClickEvent, window, cx| {
            on_select(&name, window, cx);
        })
        .child(SharedString::from(product.name.clone()))
}

impl RenderOnce for ProductList {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let catalog = self.catalog;
        let selected = self.selected;
        let on_select = self.on_select;
        let count = catalog.len();

        uniform_list(self.id, count, move |range, _window, _cx| {
            visible_rows(&catalog, range)
                .map(|(index, product)| {
                    let is_selected = selected.as_deref() == Some(product.name.as_str());
                    render_row(index, product, is_selected, on_select.clone())
                })
                .collect::<Vec<_>>()
        })
        .size_full()
        .bg(ShopColors::surface())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &Catalog, range: Range<usize>) -> Vec<String> {
        visible_rows(catalog, range)
            .map(|(_, p)| p.name.clone())
            .collect()
    }

    #[test]
    fn rows_follow_catalog_order() {
        let catalog = Catalog::builtin();
        let all: Vec<_> = catalog.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names(&catalog, 0..catalog.len()), all);
    }

    #[test]
    fn rows_carry_absolute_indices() {
        let catalog = Catalog::builtin();
        let indices: Vec<_> = visible_rows(&catalog, 3..6).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![3, 4, 5]);
        assert_eq!(names(&catalog, 3..4), vec!["Product D".to_string()]);
    }

    #[test]
    fn out_of_bounds_range_is_clamped() {
        let catalog = Catalog::builtin();
        assert_eq!(names(&catalog, 7..100).len(), 2);
        assert!(names(&catalog, 50..60).is_empty());
    }

    #[test]
    fn large_catalog_materializes_only_the_range() {
        let products = (0..10_000)
            .map(|i| Product::new(format!("Item {i:05}"), "$1", "Bulk item."))
            .collect();
        let catalog = Catalog::new(products).expect("unique names");
        let rows = names(&catalog, 9_990..9_995);
        assert_eq!(rows, vec!["Item 09990", "Item 09991", "Item 09992", "Item 09993", "Item 09994"]);
    }
}
