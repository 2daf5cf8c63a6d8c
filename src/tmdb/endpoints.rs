/// What a list endpoint returns, and so how it is decoded before forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Movies,
    Genres,
}

/// A fixed upstream query exposed under a local route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub route: &'static str,
    pub path: &'static str,
    pub params: &'static [(&'static str, &'static str)],
    pub shape: Shape,
}

const ENGLISH_FIRST_PAGE: &[(&str, &str)] = &[("language", "en-US"), ("page", "1")];

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        route: "/indian-movies",
        path: "discover/movie",
        params: &[("with_original_language", "hi")],
        shape: Shape::Movies,
    },
    Endpoint {
        route: "/upcoming-movies",
        path: "movie/upcoming",
        params: ENGLISH_FIRST_PAGE,
        shape: Shape::Movies,
    },
    Endpoint {
        route: "/most-anticipated-movies",
        path: "movie/popular",
        params: &[],
        shape: Shape::Movies,
    },
    Endpoint {
        route: "/hollywood-movies",
        path: "discover/movie",
        params: &[("with_original_language", "en")],
        shape: Shape::Movies,
    },
    Endpoint {
        route: "/top-rated-movies",
        path: "movie/top_rated",
        params: ENGLISH_FIRST_PAGE,
        shape: Shape::Movies,
    },
    Endpoint {
        route: "/popular-movies",
        path: "movie/popular",
        params: ENGLISH_FIRST_PAGE,
        shape: Shape::Movies,
    },
    Endpoint {
        route: "/now-playing-movies",
        path: "movie/now_playing",
        params: ENGLISH_FIRST_PAGE,
        shape: Shape::Movies,
    },
    Endpoint {
        route: "/movie-genres",
        path: "genre/movie/list",
        params: &[("language", "en-US")],
        shape: Shape::Genres,
    },
];

/// Search term behind `/recommendations`.
pub const FIXED_SEARCH_QUERY: &str = "indian";

pub fn find(route: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.route == route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_routes_are_unique() {
        let routes: HashSet<_> = ENDPOINTS.iter().map(|e| e.route).collect();
        assert_eq!(routes.len(), ENDPOINTS.len());
    }

    #[test]
    fn test_find() {
        let ep = find("/top-rated-movies").unwrap();
        assert_eq!(ep.path, "movie/top_rated");
        assert_eq!(ep.params, &[("language", "en-US"), ("page", "1")]);
        assert_eq!(find("/movie-genres").unwrap().shape, Shape::Genres);
        assert!(find("/nope").is_none());
    }

    #[test]
    fn test_most_anticipated_has_no_paging() {
        let ep = find("/most-anticipated-movies").unwrap();
        assert_eq!(ep.path, "movie/popular");
        assert!(ep.params.is_empty());
    }
}
