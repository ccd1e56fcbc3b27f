use std::fmt;

/// Navigation targets of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Listing,
    /// `/anime/:id`; `None` when the id segment is empty.
    Detail(Option<u32>),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Route::Listing;
        }
        let trimmed = path.trim_end_matches('/');
        if let Some(rest) = trimmed.strip_prefix("/anime") {
            return match rest.strip_prefix('/') {
                None if rest.is_empty() => Route::Detail(None),
                None => Route::NotFound,
                Some(id) if !is_canonical_id(id) => Route::NotFound,
                Some(id) => id.parse::<u32>().map(|n| Route::Detail(Some(n))).unwrap_or(Route::NotFound),
            };
        }
        Route::NotFound
    }

    pub fn detail(id: u32) -> Route {
        Route::Detail(Some(id))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Listing => "/".to_string(),
            Route::Detail(Some(id)) => format!("/anime/{}", id),
            Route::Detail(None) => "/anime/".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }
}

// Plain decimal digits without a sign or leading zeros.
fn is_canonical_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) && (id == "0" || !id.starts_with('0'))
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
