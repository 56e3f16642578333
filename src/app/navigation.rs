//! Navigation - Routes and History for Stack Navigation
//!
//! Two logical routes exist: `list` and `detail/{name}`. The detail route
//! carries only the product name; the screen resolves it against the catalog
//! every time it renders.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use snafu::ResultExt;

use crate::error::{Error, InvalidRouteParamSnafu, Result};

const LIST_PATH: &str = "list";
const DETAIL_PREFIX: &str = "detail/";

static ROOT_ROUTE: Route = Route::List;

/// Characters escaped inside a route parameter
const PARAM_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b'%')
    .add(b'?')
    .add(b'#')
    .add(b'{')
    .add(b'}');

/// A stack-navigation destination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// The product list
    #[default]
    List,
    /// The detail screen for the product with this name
    Detail { name: String },
}

impl Route {
    /// Detail route for a product name
    pub fn detail(name: impl Into<String>) -> Self {
        Route::Detail { name: name.into() }
    }

    /// Render the route as a path, escaping the name parameter
    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::Detail { name } => {
                format!("{DETAIL_PREFIX}{}", utf8_percent_encode(name, PARAM_ENCODE_SET))
            }
        }
    }

    /// Parse a path produced by [`Route::path`]
    pub fn parse(path: &str) -> Result<Self> {
        if path == LIST_PATH {
            return Ok(Route::List);
        }

        match path.strip_prefix(DETAIL_PREFIX) {
            Some(param) if !param.contains('/') => {
                let name = percent_decode_str(param)
                    .decode_utf8()
                    .context(InvalidRouteParamSnafu { path })?;
                Ok(Route::Detail {
                    name: name.into_owned(),
                })
            }
            _ => Err(Error::UnknownRoute {
                path: path.to_string(),
            }),
        }
    }

    /// The product name carried by a detail route
    pub fn product_name(&self) -> Option<&str> {
        match self {
            Route::List => None,
            Route::Detail { name } => Some(name.as_str()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}

/// Navigation history; the root is always [`Route::List`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    routes: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            routes: vec![Route::List],
        }
    }
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a route on top of the history
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Pop the top route. The root is never popped; returns whether a route was removed.
    pub fn pop(&mut self) -> bool {
        if self.routes.len() <= 1 {
            return false;
        }
        self.routes.pop();
        true
    }

    /// The currently displayed route
    pub fn top(&self) -> &Route {
        self.routes.last().unwrap_or(&ROOT_ROUTE)
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_route_path() {
        assert_eq!(Route::List.path(), "list");
        assert_eq!(Route::parse("list").ok(), Some(Route::List));
    }

    #[test]
    fn detail_route_escapes_delimiters() {
        let route = Route::detail("Shoes/Boots 50% off");
        let path = route.path();
        assert_eq!(path, "detail/Shoes%2FBoots%2050%25%20off");
        assert_eq!(Route::parse(&path).ok(), Some(route));
    }

    #[test]
    fn detail_route_keeps_unicode_names() {
        let route = Route::detail("Café ☕");
        let parsed: Route = route.to_string().parse().expect("round trip");
        assert_eq!(parsed.product_name(), Some("Café ☕"));
    }

    #[test]
    fn unknown_routes_are_rejected() {
        for path in ["", "lists", "detail", "details/A", "detail/a/b"] {
            assert!(
                matches!(Route::parse(path), Err(Error::UnknownRoute { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_utf8_param_is_rejected() {
        assert!(matches!(
            Route::parse("detail/%FF%FE"),
            Err(Error::InvalidRouteParam { .. })
        ));
    }

    #[test]
    fn nav_stack_starts_at_list() {
        let stack = NavStack::new();
        assert_eq!(stack.top(), &Route::List);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn nav_stack_push_and_pop() {
        let mut stack = NavStack::new();
        stack.push(Route::detail("Product B"));
        assert_eq!(stack.top(), &Route::detail("Product B"));
        assert_eq!(stack.depth(), 2);

        assert!(stack.pop());
        assert_eq!(stack.top(), &Route::List);
    }

    #[test]
    fn nav_stack_never_pops_root() {
        let mut stack = NavStack::new();
        assert!(!stack.pop());
        assert!(!stack.pop());
        assert_eq!(stack.routes(), &[Route::List]);
    }
}
