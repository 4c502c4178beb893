//! Registration page creating an account and signing it in immediately.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

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

/// A validated registration submission. Name may be empty; the server falls
/// back to the email for display.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterInput {
    name: String,
    email: String,
    password: String,
    role: String,
}

/// Validated form values, or the notice text for the first missing field.
fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<RegisterInput, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email");
    }
    if password.is_empty() {
        return Err("Please enter your password");
    }
    if role.is_empty() {
        return Err("Please select a role");
    }
    Ok(RegisterInput {
        name: name.trim().to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role: role.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let submitted =
            match validate_register_input(&name.get(), &email.get(), &password.get(), &role.get()) {
                Ok(input) => input,
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
                let result = Api::default()
                    .register(&submitted.name, &submitted.email, &submitted.password, &submitted.role)
                    .await;
                match result {
                    Ok(auth_session) => {
                        auth::persist_session(&auth_session);
                        session.set(SessionState::signed_in(auth_session));
                        ui.update(|u| {
                            u.push_success("Registration successful!");
                        });
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        ui.update(|u| {
                            u.push_error(err.notice_text("Registration failed"));
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
                <h1>"Register"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="register-name">"Name"</label>
                    <input
                        id="register-name"
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="register-email">"Email"</label>
                    <input
                        id="register-email"
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="register-password">"Password"</label>
                    <input
                        id="register-password"
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="register-role">"Role"</label>
                    <select
                        id="register-role"
                        class="login-input login-select"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="">"Select role"</option>
                        <option value="PM">"PM"</option>
                        <option value="Developer">"Developer"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
            </div>
        </div>
    }
}
