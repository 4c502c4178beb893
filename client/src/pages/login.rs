//! Login page exchanging email + password for a bearer session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionState;
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::auth;

/// Trimmed login form values, or the notice text for the first missing field.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email");
    }
    if password.is_empty() {
        return Err("Please enter your password");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let submitted = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(notice) => {
                ui.update(|u| {
                    u.push_error(notice);
                });
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let (email_value, password_value) = submitted;
                match Api::default().login(&email_value, &password_value).await {
                    Ok(auth_session) => {
                        auth::persist_session(&auth_session);
                        session.set(SessionState::signed_in(auth_session));
                        ui.update(|u| {
                            u.push_success("Login successful!");
                        });
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        ui.update(|u| {
                            u.push_error(err.notice_text("Login failed"));
                        });
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = submitted;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
