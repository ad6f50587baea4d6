use dioxus::prelude::*;

use crate::utils::{controller::Controller, router::Event};

#[component]
pub fn Spinner(#[props(into)] label: String) -> Element {
  rsx! {
    div {
      class: "loading",
      div { class: "spinner" }
      "{label}"
    }
  }
}

/// Failure panel with a retry button that refreshes the current view.
#[component]
pub fn ErrorPanel(
  #[props(into)] title: String,
  #[props(into, default)] detail: String
) -> Element {
  let controller = use_context::<Controller>();

  rsx! {
    div {
      class: "error-message",
      span { class: "error-icon", "⚠" }
      "{title}"
      if !detail.is_empty() {
        br {}
        small { "{detail}" }
      }
    }
    button {
      class: "refresh-btn",
      onclick: move |_| controller.dispatch(Event::Refresh),
      "Try Again"
    }
  }
}
