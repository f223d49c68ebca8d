//! Path builders for the named routes.

use crate::domain::MovieId;

pub fn index() -> String {
    "/".to_string()
}

pub fn login() -> String {
    "/login".to_string()
}

pub fn logout() -> String {
    "/logout".to_string()
}

pub fn settings() -> String {
    "/settings".to_string()
}

pub fn edit(id: MovieId) -> String {
    format!("/movie/edit/{id}")
}

pub fn delete(id: MovieId) -> String {
    format!("/movie/delete/{id}")
}

pub fn user_page(name: &str) -> String {
    format!("/user/{}", urlencoding::encode(name))
}

/// `/test`, with any extra parameters appended as a query string.
pub fn test_url_for(params: &[(&str, &str)]) -> String {
    with_query("/test".to_string(), params)
}

fn with_query(mut path: String, params: &[(&str, &str)]) -> String {
    for (i, (key, value)) in params.iter().enumerate() {
        path.push(if i == 0 { '?' } else { '&' });
        path.push_str(&urlencoding::encode(key));
        path.push('=');
        path.push_str(&urlencoding::encode(value));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_routes() {
        assert_eq!(index(), "/");
        assert_eq!(login(), "/login");
        assert_eq!(logout(), "/logout");
        assert_eq!(settings(), "/settings");
        assert_eq!(edit(MovieId::new(3)), "/movie/edit/3");
        assert_eq!(delete(MovieId::new(3)), "/movie/delete/3");
    }

    #[test]
    fn test_user_page_is_encoded() {
        assert_eq!(user_page("greyli"), "/user/greyli");
        assert_eq!(user_page("grey li"), "/user/grey%20li");
    }

    #[test]
    fn test_extra_params_become_query() {
        assert_eq!(test_url_for(&[]), "/test");
        assert_eq!(test_url_for(&[("num", "2")]), "/test?num=2");
        assert_eq!(
            test_url_for(&[("num", "2"), ("q", "a&b")]),
            "/test?num=2&q=a%26b"
        );
    }
}
