use leptos::{
    either::Either,
    ev::{focusin, keydown, FocusEvent, KeyboardEvent},
    html,
    prelude::*,
    wasm_bindgen::JsCast,
    web_sys::{Element, HtmlElement, Node},
};
use leptos_use::{use_document, use_event_listener};

use crate::content::DocumentReference;
use crate::layout::{CvActionKind, CvPreview, FocusStop};
use crate::modal::{cycle_focus, focus_after, FocusTarget, ModalController, ModalEvent, Region};

/// Page-wide handle on the CV preview, shared through context.
#[derive(Clone, Copy)]
pub struct CvModalState {
    controller: RwSignal<ModalController>,
    trigger: NodeRef<html::Button>,
}

impl CvModalState {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(ModalController::new()),
            trigger: NodeRef::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.controller.with(ModalController::is_open)
    }

    /// Subscribers are only notified when the event changes visibility.
    pub fn dispatch(&self, event: ModalEvent) {
        self.controller.maybe_update(|c| c.handle(event).is_change());
    }

    pub fn reclaims_focus(&self, target_inside_dialog: bool) -> bool {
        self.controller
            .with_untracked(|c| c.reclaims_focus(target_inside_dialog))
    }

    /// The button that opens the preview; focus returns here on close.
    pub fn trigger(&self) -> NodeRef<html::Button> {
        self.trigger
    }
}

impl Default for CvModalState {
    fn default() -> Self {
        Self::new()
    }
}

fn focus(el: Option<HtmlElement>) {
    if let Some(el) = el {
        if let Err(e) = el.focus() {
            log::warn!("couldn't move focus for cv preview: {e:?}");
        }
    }
}

#[component]
pub fn CvModal(cv: &'static DocumentReference) -> impl IntoView {
    let state = expect_context::<CvModalState>();
    let preview = CvPreview::new(cv);
    let focus_order = preview.focus_order();

    let dialog_ref = NodeRef::<html::Div>::new();
    let new_tab_ref = NodeRef::<html::A>::new();
    let download_ref = NodeRef::<html::A>::new();
    let close_ref = NodeRef::<html::Button>::new();
    let viewer_ref = NodeRef::<html::Iframe>::new();

    let stop_element = move |stop: FocusStop| match stop {
        FocusStop::Action(CvActionKind::OpenInNewTab) => {
            new_tab_ref.get_untracked().map(HtmlElement::from)
        }
        FocusStop::Action(CvActionKind::Download) => {
            download_ref.get_untracked().map(HtmlElement::from)
        }
        FocusStop::Action(CvActionKind::Close) => close_ref.get_untracked().map(HtmlElement::from),
        FocusStop::Viewer => viewer_ref.get_untracked().map(HtmlElement::from),
    };

    _ = use_event_listener(use_document(), keydown, move |ev: KeyboardEvent| {
        state.dispatch(ModalEvent::Key(ev.key()));
    });

    // focus that escapes the dialog (e.g. tabbing out of the viewer) is pulled back
    _ = use_event_listener(use_document(), focusin, move |ev: FocusEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = match (dialog_ref.get_untracked(), target) {
            (Some(dialog), Some(target)) => dialog.contains(Some(&target)),
            _ => false,
        };
        if state.reclaims_focus(inside) {
            focus(close_ref.get_untracked().map(HtmlElement::from));
        }
    });

    // into the dialog once the close button is mounted, back to the trigger on close
    Effect::new(move |was_open: Option<bool>| {
        let open = state.is_open();
        match focus_after(was_open, open) {
            Some(FocusTarget::Dialog) => focus(close_ref.get().map(HtmlElement::from)),
            Some(FocusTarget::Trigger) => {
                focus(state.trigger().get_untracked().map(HtmlElement::from))
            }
            None => {}
        }
        open
    });

    let trap_focus = move |ev: KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        let ring = focus_order
            .into_iter()
            .filter_map(stop_element)
            .collect::<Vec<_>>();
        let active = document().active_element();
        let current = ring.iter().position(|el| {
            let el: &Element = el.as_ref();
            active.as_ref() == Some(el)
        });
        if let Some(next) = cycle_focus(current, ring.len(), ev.shift_key()) {
            ev.prevent_default();
            focus(Some(ring[next].clone()));
        }
    };

    move || {
        state.is_open().then(|| {
            view! {
                <div
                    node_ref=dialog_ref
                    class="fixed inset-0 z-50 flex items-center justify-center p-4"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="cv-preview-title"
                    on:keydown=trap_focus
                >
                    // backdrop and content are siblings, so each click lands in exactly one region
                    <div
                        class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                        on:click=move |_| state.dispatch(ModalEvent::Activate(Region::Background))
                    ></div>
                    <div
                        class="relative z-10 w-full max-w-5xl h-[80vh] bg-white rounded-xl shadow-lg overflow-hidden"
                        on:click=move |_| state.dispatch(ModalEvent::Activate(Region::Content))
                    >
                        <div class="flex items-center justify-between p-3 border-b bg-gray-50">
                            <h3 id="cv-preview-title" class="text-lg font-semibold">
                                {preview.title}
                            </h3>
                            <div class="flex gap-2">
                                {preview
                                    .actions
                                    .iter()
                                    .map(|action| {
                                        if action.changes_visibility() {
                                            return Either::Left(
                                                view! {
                                                    <button
                                                        node_ref=close_ref
                                                        type="button"
                                                        on:click=move |_| state.dispatch(ModalEvent::Close)
                                                        class="px-3 py-1 bg-gray-200 rounded text-sm"
                                                    >
                                                        {action.label}
                                                    </button>
                                                },
                                            );
                                        }
                                        let new_tab = action.kind == CvActionKind::OpenInNewTab;
                                        let node_ref = if new_tab { new_tab_ref } else { download_ref };
                                        let download = (action.kind == CvActionKind::Download)
                                            .then(|| preview.download_name.unwrap_or_default());
                                        Either::Right(
                                            view! {
                                                <a
                                                    node_ref=node_ref
                                                    href=action.href.map(DocumentReference::as_str)
                                                    target=new_tab.then_some("_blank")
                                                    rel=new_tab.then_some("noopener noreferrer")
                                                    download=download
                                                    class="px-3 py-1 border rounded text-sm"
                                                >
                                                    {action.label}
                                                </a>
                                            },
                                        )
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <iframe
                            node_ref=viewer_ref
                            src=preview.viewer.as_str()
                            class="w-full h-full border-0"
                            title=preview.title
                        ></iframe>
                    </div>
                </div>
            }
        })
    }
}
