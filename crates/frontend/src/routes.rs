//! Path → view table.

use serde::Serialize;

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    ProductList,
    EditProduct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        view: View::ProductList,
    },
    Route {
        path: "/edit",
        view: View::EditProduct,
    },
];

/// Look up the view for `path`. Only the path component takes part in the
/// match; a `?query` or `#fragment` suffix is ignored. Unknown paths are left
/// to the host.
pub fn resolve(path: &str) -> Option<View> {
    let (path, _) = split_query(path);
    ROUTES.iter().find(|r| r.path == path).map(|r| r.view)
}

/// The path a view is mounted at.
pub fn path_of(view: View) -> &'static str {
    ROUTES
        .iter()
        .find(|r| r.view == view)
        .map(|r| r.path)
        .unwrap_or("/")
}

/// Split `"/edit?id=3&x=y#top"` into `("/edit", ["id=3", "x=y"])`.
pub fn split_query(path: &str) -> (&str, Vec<&str>) {
    let path = path.split('#').next().unwrap_or_default();
    match path.split_once('?') {
        Some((path, query)) => (path, query.split('&').filter(|s| !s.is_empty()).collect()),
        None => (path, Vec::new()),
    }
}
