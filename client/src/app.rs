//! Application root: shared state, session restore, router, and header shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the four context signals every page reads (session, project
//! list, canvas, notices), restores the persisted session once at mount, and
//! wraps the routed pages in the site header. Pages never create shared
//! state; they `expect_context` what is provided here.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::notice_host::NoticeHost;
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::workflow::WorkflowPage;
use crate::state::canvas::CanvasState;
use crate::state::projects::ProjectsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth;

/// Root component mounted at the document body.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let canvas = RwSignal::new(CanvasState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(projects);
    provide_context(canvas);
    provide_context(ui);

    // Resolve the persisted session exactly once after mount. `loading`
    // stays true until this runs so route guards hold off on redirecting.
    Effect::new(move || {
        let restored = auth::restore_session();
        session.set(match restored {
            Some(auth_session) => SessionState::signed_in(auth_session),
            None => SessionState::signed_out(),
        });
    });

    view! {
        <Title text="ScreenFlow Capture" />
        <Router>
            <AppHeader />
            <main class="app-main">
                <Routes fallback=|| view! { <p class="app-main__missing">"Page not found."</p> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/project/:id") view=WorkflowPage />
                </Routes>
            </main>
            <NoticeHost />
        </Router>
    }
}

/// Site-wide header: brand, primary navigation, and the auth corner.
#[component]
fn AppHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let signed_in = move || session.get().is_authenticated();
    let display_name = move || session.get().display_name().unwrap_or_default();

    let on_logout = move |_| {
        auth::clear_session();
        session.set(SessionState::signed_out());
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">
                <span class="app-header__brand-mark">"LDA"</span>
                <span class="app-header__brand-name">"LEGACY DATA ACCESS"</span>
            </a>
            <nav class="app-header__nav">
                <a class="app-header__link" href="/">"Home"</a>
                <a class="app-header__link" href="/dashboard">"Dashboard"</a>
            </nav>
            <span class="app-header__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a class="btn app-header__login" href="/login">"Login"</a>
                        <a class="btn btn--primary app-header__register" href="/register">
                            "Register"
                        </a>
                    }
                }
            >
                <span class="app-header__user">{display_name}</span>
                <button class="btn app-header__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
