//! Page models and the render capability used by the views.

use askama::Template;
use axum::response::Html;
use tower_sessions::Session;

use super::auth::current_identity;
use super::error::WebError;
use super::flash::Flash;
use super::urls;
use crate::domain::MovieId;
use crate::models::movie::Movie;
use crate::state::AppState;

/// Data every page shows around its own content.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Header text, e.g. "Grey Li's Watchlist"
    pub title: String,

    pub authenticated: bool,

    /// Flash messages, consumed by this render
    pub messages: Vec<String>,

    pub home_url: String,
    pub login_url: String,
    pub logout_url: String,
    pub settings_url: String,
}

impl Layout {
    #[must_use]
    pub fn new(title: impl Into<String>, authenticated: bool, messages: Vec<String>) -> Self {
        Self {
            title: title.into(),
            authenticated,
            messages,
            home_url: urls::index(),
            login_url: urls::login(),
            logout_url: urls::logout(),
            settings_url: urls::settings(),
        }
    }

    pub async fn load(state: &AppState, session: &Session) -> Result<Self, WebError> {
        let authenticated = current_identity(state, session).await?.is_some();
        let user = state.user_service.current().await?;
        let messages = Flash::new(session.clone()).take().await?;

        Ok(Self::new(
            page_title(user.as_ref().map(|u| u.name.as_str())),
            authenticated,
            messages,
        ))
    }
}

fn page_title(user_name: Option<&str>) -> String {
    match user_name {
        Some(name) if !name.is_empty() => format!("{name}'s Watchlist"),
        _ => "Watchlist".to_string(),
    }
}

/// A movie as listed on the index page, with its action links.
#[derive(Debug, Clone)]
pub struct MovieRow {
    pub title: String,
    pub year: String,
    pub edit_url: String,
    pub delete_url: String,
}

impl From<Movie> for MovieRow {
    fn from(movie: Movie) -> Self {
        let id = MovieId::new(movie.id);
        Self {
            title: movie.title,
            year: movie.year,
            edit_url: urls::edit(id),
            delete_url: urls::delete(id),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub movies: Vec<MovieRow>,
}

impl IndexTemplate {
    #[must_use]
    pub fn new(layout: Layout, movies: Vec<Movie>) -> Self {
        Self {
            layout,
            movies: movies.into_iter().map(MovieRow::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub layout: Layout,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub layout: Layout,
    pub name: String,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub layout: Layout,
    pub movie: Movie,
}

impl EditTemplate {
    #[must_use]
    pub fn action_url(&self) -> String {
        urls::edit(MovieId::new(self.movie.id))
    }
}

/// Standalone page for 404 and 500 responses
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub code: u16,
    pub title: &'static str,
    pub message: &'static str,
    pub home_url: String,
}

impl ErrorTemplate {
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            code: 404,
            title: "Page Not Found",
            message: "The page you are looking for does not exist.",
            home_url: urls::index(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self {
            code: 500,
            title: "Internal Server Error",
            message: "Something went wrong on our side.",
            home_url: urls::index(),
        }
    }
}

pub fn render<T: Template>(template: &T) -> Result<Html<String>, WebError> {
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(Some("Grey Li")), "Grey Li's Watchlist");
        assert_eq!(page_title(Some("")), "Watchlist");
        assert_eq!(page_title(None), "Watchlist");
    }

    #[test]
    fn test_index_escapes_titles() {
        let page = IndexTemplate::new(
            Layout::new(
                "Grey Li's Watchlist",
                false,
                vec!["Item created.".to_string()],
            ),
            vec![Movie {
                id: 1,
                title: "<script>".to_string(),
                year: "1994".to_string(),
            }],
        );

        let html = render(&page).unwrap().0;
        assert!(html.contains("1 Titles"));
        assert!(html.contains("Item created."));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("name=\"year\""));
    }

    #[test]
    fn test_index_shows_controls_when_authenticated() {
        let page = IndexTemplate::new(
            Layout::new("Watchlist", true, vec![]),
            vec![Movie {
                id: 7,
                title: "Leon".to_string(),
                year: "1994".to_string(),
            }],
        );

        let html = render(&page).unwrap().0;
        assert!(html.contains("name=\"year\""));
        assert!(html.contains("/movie/edit/7"));
        assert!(html.contains("/movie/delete/7"));
        assert!(html.contains("/logout"));
    }

    #[test]
    fn test_edit_form_posts_to_its_movie() {
        let page = EditTemplate {
            layout: Layout::new("Watchlist", false, vec![]),
            movie: Movie {
                id: 4,
                title: "Leon".to_string(),
                year: "1994".to_string(),
            },
        };

        let html = render(&page).unwrap().0;
        assert!(html.contains("action=\"/movie/edit/4\""));
        assert!(html.contains("value=\"Leon\""));
        assert!(html.contains("href=\"/login\""));
    }

    #[test]
    fn test_error_page() {
        let html = render(&ErrorTemplate::not_found()).unwrap().0;
        assert!(html.contains("404"));
        assert!(html.contains("Page Not Found"));
    }
}
