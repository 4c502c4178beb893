//! Interactive workflow canvas: positioned screen nodes with an SVG
//! connection underlay.
//!
//! ARCHITECTURE
//! ============
//! The canvas is plain DOM. Each node is an absolutely positioned card and
//! every connection renders as a cubic curve in an SVG layer beneath the
//! nodes. Gestures write through `util::flow_actions`, which owns the
//! optimistic/pessimistic write split and the debounced position
//! persistence; this component only translates pointer events into those
//! calls.
//!
//! Connections are drawn click-to-click: the source handle arms a pending
//! connection, the target handle of another node completes it, and any
//! press on the canvas background disarms it.

use leptos::prelude::*;

use crate::components::comments_dialog::CommentsDialog;
use crate::components::page_node::PageNodeView;
use crate::state::canvas::CanvasState;
use crate::util::geometry;

#[cfg(feature = "hydrate")]
use crate::state::canvas::DragState;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::flow_actions::{self, session_api};

/// The workflow canvas for the loaded project.
#[component]
pub fn FlowCanvas() -> impl IntoView {
    let canvas = expect_context::<RwSignal<CanvasState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();
    let surface_ref = NodeRef::<leptos::html::Div>::new();
    let comments_for = RwSignal::new(None::<String>);

    let begin_drag = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent, node_id: String, node_x: f64, node_y: f64| {
                if ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                let _ = surface.set_pointer_capture(ev.pointer_id());
                let rect = surface.get_bounding_client_rect();
                let (px, py) = geometry::surface_point(
                    f64::from(ev.client_x()),
                    f64::from(ev.client_y()),
                    rect.left(),
                    rect.top(),
                );
                let (grab_dx, grab_dy) = geometry::grab_offset(px, py, node_x, node_y);
                canvas.update(|c| {
                    c.drag = Some(DragState { node_id, grab_dx, grab_dy });
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent, _node_id: String, _node_x: f64, _node_y: f64| {}
        }
    };

    let on_surface_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(drag) = canvas.with_untracked(|c| c.drag.clone()) else {
                    return;
                };
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                let rect = surface.get_bounding_client_rect();
                let (px, py) = geometry::surface_point(
                    f64::from(ev.client_x()),
                    f64::from(ev.client_y()),
                    rect.left(),
                    rect.top(),
                );
                let (x, y) = geometry::dragged_position(px, py, drag.grab_dx, drag.grab_dy);
                flow_actions::move_node_live(canvas, ui, session_api(session), drag.node_id, x, y);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let end_drag = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if let Some(surface) = surface_ref.get() {
                    let _ = surface.release_pointer_capture(ev.pointer_id());
                }
                canvas.update(|c| c.drag = None);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Background presses disarm a half-drawn connection; handle presses stop
    // propagation before reaching here.
    let on_surface_pointer_down = move |_ev: leptos::ev::PointerEvent| {
        canvas.update(|c| c.pending_connect = None);
    };

    let on_connect_start = Callback::new(move |node_id: String| {
        canvas.update(|c| c.pending_connect = Some(node_id));
    });
    let on_connect_finish = Callback::new(move |to: String| {
        let Some(from) = canvas.with_untracked(|c| c.pending_connect.clone()) else {
            return;
        };
        canvas.update(|c| c.pending_connect = None);
        #[cfg(feature = "hydrate")]
        flow_actions::connect_nodes(canvas, ui, session_api(session), from, to);
        #[cfg(not(feature = "hydrate"))]
        let _ = (from, to);
    });

    let on_rename = Callback::new(move |(node_id, draft): (String, String)| {
        #[cfg(feature = "hydrate")]
        flow_actions::commit_rename(canvas, ui, session_api(session), node_id, draft);
        #[cfg(not(feature = "hydrate"))]
        let _ = (node_id, draft);
    });
    let on_delete = Callback::new(move |node_id: String| {
        #[cfg(feature = "hydrate")]
        flow_actions::delete_node(canvas, ui, session_api(session), node_id);
        #[cfg(not(feature = "hydrate"))]
        let _ = node_id;
    });
    let on_comments = Callback::new(move |node_id: String| comments_for.set(Some(node_id)));
    let on_comments_close = Callback::new(move |()| comments_for.set(None));

    let on_edge_click = {
        #[cfg(feature = "hydrate")]
        {
            move |edge_id: String| {
                flow_actions::disconnect_edge(canvas, ui, session_api(session), edge_id);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_edge_id: String| {}
        }
    };

    view! {
        <div
            class="flow-canvas"
            node_ref=surface_ref
            on:pointerdown=on_surface_pointer_down
            on:pointermove=on_surface_pointer_move
            on:pointerup=end_drag
            on:pointerleave=end_drag
        >
            <svg class="flow-canvas__edges" aria-hidden="true">
                {move || {
                    let state = canvas.get();
                    state
                        .edges
                        .iter()
                        .filter_map(|edge| {
                            let from = state.node(&edge.from)?;
                            let to = state.node(&edge.to)?;
                            let (sx, sy) = geometry::source_anchor(from.x, from.y);
                            let (tx, ty) = geometry::target_anchor(to.x, to.y);
                            let path = geometry::edge_path(sx, sy, tx, ty);
                            let (lx, ly) = geometry::label_anchor(sx, sy, tx, ty);
                            let edge_id = edge.id.clone();
                            let label = edge.label.clone().map(|text| {
                                view! {
                                    <text class="flow-canvas__edge-label" x=lx y=ly>
                                        {text}
                                    </text>
                                }
                            });
                            Some(view! {
                                <g class="flow-canvas__edge">
                                    <path
                                        class="flow-canvas__edge-path"
                                        d=path
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.stop_propagation();
                                            on_edge_click(edge_id.clone());
                                        }
                                    />
                                    {label}
                                </g>
                            })
                        })
                        .collect::<Vec<_>>()
                }}
            </svg>
            {move || {
                let state = canvas.get();
                let pending = state.pending_connect.clone();
                state
                    .nodes
                    .iter()
                    .map(|node| {
                        let drag_id = node.id.clone();
                        let (x, y) = (node.x, node.y);
                        let style = format!("left: {x}px; top: {y}px;");
                        let connecting = pending.as_deref() == Some(node.id.as_str());
                        let dragging = state.drag.as_ref().is_some_and(|d| d.node_id == node.id);
                        view! {
                            <div
                                class="flow-canvas__node"
                                class:flow-canvas__node--dragging=dragging
                                style=style
                                on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                                    begin_drag(ev, drag_id.clone(), x, y);
                                }
                            >
                                <PageNodeView
                                    id=node.id.clone()
                                    title=node.title.clone()
                                    screenshot_url=node.screenshot_url.clone()
                                    connecting=connecting
                                    on_rename=on_rename
                                    on_delete=on_delete
                                    on_comments=on_comments
                                    on_connect_start=on_connect_start
                                    on_connect_finish=on_connect_finish
                                />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <Show when=move || comments_for.get().is_some()>
                {move || {
                    comments_for.get().map(|page_id| {
                        view! { <CommentsDialog page_id=page_id on_close=on_comments_close /> }
                    })
                }}
            </Show>
        </div>
    }
}
