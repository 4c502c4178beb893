//! Modal dialog listing and adding comments for one canvas node.
//!
//! Comments are fetched fresh on every open; the thread is append-only and
//! a successful add joins the list immediately.

use leptos::prelude::*;

use crate::net::types::Comment;
use crate::state::session::SessionState;
use crate::util::format;
#[cfg(feature = "hydrate")]
use crate::util::flow_actions::session_api;

/// Comment thread dialog for one page.
#[component]
pub fn CommentsDialog(page_id: String, on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let comments = RwSignal::new(Vec::<Comment>::new());
    let loading = RwSignal::new(true);
    let input = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let page_id = page_id.clone();
        leptos::task::spawn_local(async move {
            let api = session_api(session);
            match api.fetch_comments(&page_id).await {
                Ok(items) => comments.set(items),
                Err(_) => comments.set(Vec::new()),
            }
            loading.set(false);
        });
    }

    let submit = Callback::new({
        let page_id = page_id.clone();
        move |()| {
            let content = input.get_untracked().trim().to_owned();
            if content.is_empty() || submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            #[cfg(feature = "hydrate")]
            {
                let page_id = page_id.clone();
                leptos::task::spawn_local(async move {
                    let api = session_api(session);
                    if let Ok(comment) = api.create_comment(&page_id, &content).await {
                        comments.update(|list| list.push(comment));
                        input.set(String::new());
                    }
                    submitting.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&page_id, content);
                submitting.set(false);
            }
        }
    });

    let author_label = move |comment: &Comment| {
        comment
            .user_name
            .clone()
            .or_else(|| session.with_untracked(SessionState::display_name))
            .unwrap_or_else(|| "User".to_owned())
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--comments" on:click=move |ev| ev.stop_propagation()>
                <h2>"Comments"</h2>
                <div class="dialog__comment-list">
                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <p class="dialog__comment-empty">"Loading comments..."</p> }
                    >
                        <Show
                            when=move || !comments.get().is_empty()
                            fallback=move || view! { <p class="dialog__comment-empty">"No comments yet."</p> }
                        >
                            {move || {
                                comments
                                    .get()
                                    .iter()
                                    .map(|comment| {
                                        let author = author_label(comment);
                                        let posted = format::short_datetime(&comment.created_at);
                                        let content = comment.content.clone();
                                        view! {
                                            <div class="dialog__comment">
                                                <div class="dialog__comment-head">
                                                    <span class="dialog__comment-author">{author}</span>
                                                    <span class="dialog__comment-time">{posted}</span>
                                                </div>
                                                <p class="dialog__comment-body">{content}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </Show>
                </div>
                <div class="dialog__comment-compose">
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Add Comment"
                        prop:value=move || input.get()
                        disabled=move || submitting.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                    <button
                        class="btn btn--primary"
                        on:click=move |_| submit.run(())
                        disabled=move || submitting.get()
                    >
                        "Send"
                    </button>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
