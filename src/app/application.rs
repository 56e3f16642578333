//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::layout::{LayoutClassifier, Viewport};
use crate::app::navigation::Route;
use crate::app::workspace::Root;
use crate::domain::catalog::Catalog;
use crate::domain::config::AppConfig;
use crate::features::products::controller::ProductsController;

actions!(shop, [Quit]);

/// Run the application with a loaded configuration and catalog
pub fn run_app(config: AppConfig, catalog: Catalog) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        // Quit the app when the window is closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Enter the state matching the configured window shape
        let classifier = LayoutClassifier::from_config(&config.layout);
        let initial = classifier.classify(Viewport::new(config.window.width, config.window.height));
        tracing::info!(
            products = catalog.len(),
            layout = initial.label(),
            "Initializing product pane"
        );

        let entities = AppEntities::init(catalog, classifier, initial, cx);

        if let Some(path) = config.start_route.as_deref() {
            match Route::parse(path) {
                Ok(route) => ProductsController::new(entities.clone()).navigate(route, cx),
                Err(e) => tracing::warn!(route = path, error = %e, "Ignoring start route"),
            }
        }

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(
                px(config.window.min_width),
                px(config.window.min_height),
            )),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(config.window.title.clone())),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Root::new(entities.clone(), cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
