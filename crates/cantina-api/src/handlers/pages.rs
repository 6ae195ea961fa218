//! Public pages. Markup is intentionally minimal; real rendering is a
//! templating concern outside this service's core.

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(
        "<!doctype html><html><body><h1>Cantina</h1>\
         <nav><a href=\"/menu\">Menu</a> <a href=\"/about\">About</a> \
         <a href=\"/login\">Login</a> <a href=\"/signup\">Sign up</a></nav>\
         </body></html>",
    )
}

/// GET /menu
pub async fn menu() -> Html<&'static str> {
    Html(
        "<!doctype html><html><body><h1>Menu</h1>\
         <p>Today's menu is being written on the blackboard.</p>\
         <a href=\"/cart\">Your cart</a></body></html>",
    )
}

/// GET /about
pub async fn about() -> Html<&'static str> {
    Html(
        "<!doctype html><html><body><h1>About</h1>\
         <p>A small cafeteria, now with fewer queues.</p></body></html>",
    )
}

/// Query string shown on the login page after a failed attempt or logout.
#[derive(Debug, Deserialize)]
pub struct LoginPageQuery {
    /// Present after a failed login.
    pub error: Option<String>,
}

/// GET /login
pub async fn login_form(Query(query): Query<LoginPageQuery>) -> Html<String> {
    let notice = if query.error.is_some() {
        "<p>Invalid credentials.</p>"
    } else {
        ""
    };

    Html(format!(
        "<!doctype html><html><body><h1>Login</h1>{notice}\
         <form method=\"post\" action=\"/login\">\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\
         <input name=\"secret\" type=\"password\" placeholder=\"Password\">\
         <button type=\"submit\">Login</button></form>\
         <a href=\"/signup\">Create an account</a></body></html>"
    ))
}

/// GET /signup
pub async fn signup_form() -> Html<&'static str> {
    Html(
        "<!doctype html><html><body><h1>Sign up</h1>\
         <form method=\"post\" action=\"/signup\">\
         <input name=\"name\" placeholder=\"Name\">\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\
         <input name=\"secret\" type=\"password\" placeholder=\"Password\">\
         <input name=\"address\" placeholder=\"Address (optional)\">\
         <button type=\"submit\">Sign up</button></form></body></html>",
    )
}
