//! Transient notice stack rendered above every route.

use leptos::prelude::*;

use crate::state::ui::{NoticeLevel, UiState};
#[cfg(feature = "hydrate")]
use crate::state::ui::NOTICE_DISMISS_MS;

/// Renders the active notices and schedules their auto-dismissal.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let scheduled_up_to = RwSignal::new(0_u64);
        Effect::new(move || {
            let pending: Vec<u64> = ui.with(|u| {
                u.notices
                    .iter()
                    .map(|notice| notice.id)
                    .filter(|id| *id > scheduled_up_to.get_untracked())
                    .collect()
            });
            let Some(newest) = pending.iter().max().copied() else {
                return;
            };
            scheduled_up_to.set(newest);
            for id in pending {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                    ui.update(|u| u.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="notice-host" aria-live="polite">
            {move || {
                ui.get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let level_class = match notice.level {
                            NoticeLevel::Success => "notice notice--success",
                            NoticeLevel::Error => "notice notice--error",
                        };
                        let id = notice.id;
                        view! {
                            <div class=level_class>
                                <span class="notice__text">{notice.text}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| ui.update(|u| u.dismiss(id))
                                    aria-label="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
