use dioxus::prelude::*;

use crate::components::{link::AppLink, status::ErrorPanel};

#[component]
pub fn PageNotFound(path: String) -> Element {
  rsx! {
    div {
      class: "container center",
      h1 { "404" }
      p { "Page not found" }
      pre { class: "muted", "attempted to navigate to: {path}" }
      AppLink { class: "refresh-btn", to: "/", "Go Home" }
    }
  }
}

/// Shown when the app cannot start, e.g. the city list failed to load.
#[component]
pub fn StartupError(message: String) -> Element {
  rsx! {
    div {
      class: "container",
      ErrorPanel { title: "Something went wrong while starting up.", detail: message }
    }
  }
}
