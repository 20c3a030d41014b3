pub mod court_types;
pub mod courts;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod signup;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGavel, LdLandmark, LdLayoutDashboard, LdLogOut};
use dioxus_free_icons::Icon;

use crate::session::use_session;

use court_types::CourtTypesPage;
use courts::CourtsPage;
use dashboard::DashboardPage;
use login::LoginPage;
use not_found::NotFoundPage;
use signup::SignupPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AuthGuard)]
    #[layout(AdminLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/courts")]
    Courts {},
    #[route("/court-types")]
    CourtTypes {},
    #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Where a visitor should be sent, given whether they are signed in and
/// whether the page they are on is public (login/signup).
pub(crate) fn redirect_for(authenticated: bool, public_page: bool) -> Option<Route> {
    match (authenticated, public_page) {
        (false, false) => Some(Route::Login {}),
        (true, true) => Some(Route::Dashboard {}),
        _ => None,
    }
}

/// Auth guard layout — redirects to /login if not authenticated.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();

    if let Some(route) = redirect_for(session.is_authenticated(), false) {
        navigator().replace(route);
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

/// Main layout with the top navigation bar.
#[component]
fn AdminLayout() -> Element {
    let route: Route = use_route();
    let session = use_session();

    let admin_name = session.display_name().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "admin-header",
            div { class: "admin-brand",
                Icon::<LdGavel> { icon: LdGavel, width: 20, height: 20 }
                span { class: "admin-brand-name", "Advocate Admin" }
            }
            nav { class: "admin-tabs",
                Link { to: Route::Dashboard {},
                    span {
                        class: "admin-tab",
                        "data-active": matches!(route, Route::Dashboard {}),
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        "Dashboard"
                    }
                }
                Link { to: Route::Courts {},
                    span {
                        class: "admin-tab",
                        "data-active": matches!(route, Route::Courts {}),
                        Icon::<LdLandmark> { icon: LdLandmark, width: 16, height: 16 }
                        "Courts"
                    }
                }
                Link { to: Route::CourtTypes {},
                    span {
                        class: "admin-tab",
                        "data-active": matches!(route, Route::CourtTypes {}),
                        Icon::<LdGavel> { icon: LdGavel, width: 16, height: 16 }
                        "Court Types"
                    }
                }
            }
            div { class: "admin-header-spacer" }
            span { class: "admin-user", "{admin_name}" }
            button {
                class: "admin-logout",
                r#type: "button",
                onclick: move |_| {
                    session.clear();
                    navigator().push(Route::Login {});
                },
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                "Sign Out"
            }
        }

        main { class: "page-content",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Dashboard() -> Element {
    DashboardPage()
}

#[component]
fn Courts() -> Element {
    CourtsPage()
}

#[component]
fn CourtTypes() -> Element {
    CourtTypesPage()
}

#[component]
fn Login() -> Element {
    LoginPage()
}

#[component]
fn Signup() -> Element {
    SignupPage()
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! { NotFoundPage { segments } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unauthenticated_visitors_are_sent_to_login() {
        assert_eq!(redirect_for(false, false), Some(Route::Login {}));
    }

    #[test]
    fn signed_in_admins_skip_the_public_pages() {
        assert_eq!(redirect_for(true, true), Some(Route::Dashboard {}));
    }

    #[test]
    fn no_redirect_when_access_matches() {
        assert_eq!(redirect_for(true, false), None);
        assert_eq!(redirect_for(false, true), None);
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Dashboard {}.to_string(), "/");
        assert_eq!(Route::Courts {}.to_string(), "/courts");
        assert_eq!(Route::CourtTypes {}.to_string(), "/court-types");
        assert_eq!(Route::Login {}.to_string(), "/login");
    }
}
