//! Page routes reachable from the navigation header.

use std::fmt;

/// A page of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    About,
    Projects,
    Writing,
}

impl Route {
    /// All routes, in header order.
    pub const ALL: [Route; 3] = [Route::About, Route::Projects, Route::Writing];

    pub fn path(self) -> &'static str {
        match self {
            Route::About => "/",
            Route::Projects => "/projects",
            Route::Writing => "/writing",
        }
    }

    /// Link text shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            Route::About => "about",
            Route::Projects => "projects",
            Route::Writing => "blog",
        }
    }

    /// Resolve a path. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Position in [`Route::ALL`].
    pub fn index(self) -> usize {
        match self {
            Route::About => 0,
            Route::Projects => 1,
            Route::Writing => 2,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::About));
        assert_eq!(Route::from_path("/projects"), Some(Route::Projects));
        assert_eq!(Route::from_path("/writing/"), Some(Route::Writing));
        assert_eq!(Route::from_path("/blog"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_labels_follow_header_order() {
        let labels: Vec<_> = Route::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["about", "projects", "blog"]);
        for (i, route) in Route::ALL.iter().enumerate() {
            assert_eq!(route.index(), i);
        }
    }
}
