//! Node chrome for one captured screen on the workflow canvas.
//!
//! DESIGN
//! ======
//! The node shows the committed title at all times; renaming edits a local
//! draft that is only handed upward on confirmation. Connection handles sit
//! on the left (incoming) and right (outgoing) edges.

use leptos::prelude::*;

/// One screen card on the canvas: title row with edit and delete actions,
/// optional screenshot, comments opener, and connection handles.
#[component]
pub fn PageNodeView(
    id: String,
    title: String,
    screenshot_url: Option<String>,
    /// True while this node is the pending source of a half-drawn connection.
    #[prop(optional)]
    connecting: bool,
    on_rename: Callback<(String, String)>,
    on_delete: Callback<String>,
    on_comments: Callback<String>,
    on_connect_start: Callback<String>,
    on_connect_finish: Callback<String>,
) -> impl IntoView {
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(String::new());

    let begin_edit = Callback::new({
        let title = title.clone();
        move |()| {
            draft.set(title.clone());
            editing.set(true);
        }
    });
    let save_edit = Callback::new({
        let id = id.clone();
        move |()| {
            editing.set(false);
            on_rename.run((id.clone(), draft.get_untracked()));
        }
    });
    let delete_click = Callback::new({
        let id = id.clone();
        move |()| on_delete.run(id.clone())
    });
    let comments_click = Callback::new({
        let id = id.clone();
        move |()| on_comments.run(id.clone())
    });
    let source_click = Callback::new({
        let id = id.clone();
        move |()| on_connect_start.run(id.clone())
    });
    let target_click = Callback::new({
        let id = id.clone();
        move |()| on_connect_finish.run(id.clone())
    });

    let shot = screenshot_url.map(|url| {
        view! { <img class="page-node__shot" src=url alt="screen capture" draggable="false" /> }
    });

    view! {
        <div class="page-node" class:page-node--connecting=connecting>
            <button
                class="page-node__handle page-node__handle--target"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    target_click.run(());
                }
                on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                title="Connect here"
                aria-label="Finish connection at this screen"
            ></button>
            <div class="page-node__head">
                <Show
                    when=move || editing.get()
                    fallback={
                        let title = title.clone();
                        move || view! { <span class="page-node__title">{title.clone()}</span> }
                    }
                >
                    <input
                        class="page-node__title-input"
                        type="text"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save_edit.run(());
                            } else if ev.key() == "Escape" {
                                ev.prevent_default();
                                editing.set(false);
                            }
                        }
                        autofocus=true
                    />
                </Show>
                <div class="page-node__actions">
                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <button
                                    class="page-node__action"
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.stop_propagation();
                                        begin_edit.run(());
                                    }
                                    title="Rename"
                                    aria-label="Rename screen"
                                >
                                    "✎"
                                </button>
                                <button
                                    class="page-node__action page-node__action--danger"
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.stop_propagation();
                                        delete_click.run(());
                                    }
                                    title="Delete"
                                    aria-label="Delete screen"
                                >
                                    "🗑"
                                </button>
                            }
                        }
                    >
                        <button
                            class="page-node__action page-node__action--confirm"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                save_edit.run(());
                            }
                            title="Save"
                            aria-label="Save title"
                        >
                            "✓"
                        </button>
                        <button
                            class="page-node__action page-node__action--danger"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                editing.set(false);
                            }
                            title="Cancel"
                            aria-label="Cancel rename"
                        >
                            "✕"
                        </button>
                    </Show>
                </div>
            </div>
            {shot}
            <div
                class="page-node__comments"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    comments_click.run(());
                }
            >
                "Click to add comments..."
            </div>
            <button
                class="page-node__handle page-node__handle--source"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    source_click.run(());
                }
                on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                title="Start connection"
                aria-label="Start a connection from this screen"
            ></button>
        </div>
    }
}
