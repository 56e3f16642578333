//! Layout - Viewport Classification
//!
//! Maps the current window viewport to one of the two presentation strategies.
//! Only an exact landscape viewport selects the split pane; square and portrait
//! viewports fall back to stack navigation.

use crate::domain::config::LayoutConfig;

/// Viewport size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else if self.height > self.width {
            Orientation::Portrait
        } else {
            Orientation::Square
        }
    }
}

/// Screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

/// Presentation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutClass {
    /// List and details side by side
    SplitPane,
    /// List and details as separate screens with history
    #[default]
    StackNav,
}

impl LayoutClass {
    pub fn label(&self) -> &'static str {
        match self {
            LayoutClass::SplitPane => "split-pane",
            LayoutClass::StackNav => "stack-nav",
        }
    }
}

/// Decides the layout class for a viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutClassifier {
    /// Landscape viewports narrower than this still use stack navigation
    pub split_min_width: f32,
}

impl LayoutClassifier {
    pub fn new(split_min_width: f32) -> Self {
        Self { split_min_width }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.split_min_width)
    }

    pub fn classify(&self, viewport: Viewport) -> LayoutClass {
        match viewport.orientation() {
            Orientation::Landscape if viewport.width >= self.split_min_width => {
                LayoutClass::SplitPane
            }
            _ => LayoutClass::StackNav,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_from_viewport() {
        assert_eq!(Viewport::new(800.0, 400.0).orientation(), Orientation::Landscape);
        assert_eq!(Viewport::new(400.0, 800.0).orientation(), Orientation::Portrait);
        assert_eq!(Viewport::new(600.0, 600.0).orientation(), Orientation::Square);
    }

    #[test]
    fn only_landscape_selects_split_pane() {
        let classifier = LayoutClassifier::default();
        assert_eq!(classifier.classify(Viewport::new(800.0, 400.0)), LayoutClass::SplitPane);
        assert_eq!(classifier.classify(Viewport::new(400.0, 800.0)), LayoutClass::StackNav);
        assert_eq!(classifier.classify(Viewport::new(600.0, 600.0)), LayoutClass::StackNav);
        assert_eq!(classifier.classify(Viewport::new(0.0, 0.0)), LayoutClass::StackNav);
    }

    #[test]
    fn width_breakpoint_keeps_narrow_landscape_stacked() {
        let classifier = LayoutClassifier::new(720.0);
        assert_eq!(classifier.classify(Viewport::new(700.0, 300.0)), LayoutClass::StackNav);
        assert_eq!(classifier.classify(Viewport::new(720.0, 300.0)), LayoutClass::SplitPane);
        assert_eq!(classifier.classify(Viewport::new(900.0, 1200.0)), LayoutClass::StackNav);
    }
}
