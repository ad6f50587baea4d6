use dioxus::prelude::*;

use crate::{components::link::AppLink, utils::controller::Controller};

#[component]
pub fn Header() -> Element {
  let state = use_context::<Controller>().state();
  let nav_class = |href: &str| if state.read().is_active(href) { "nav-link active" } else { "nav-link" };

  rsx!{
    nav {
      div {
        class: "nav-container",
        AppLink {
          class: "logo",
          to: "/",
          span { class: "logo-mark", "◆" }
          "Gold Rates India"
        }
        div {
          class: "nav-links",
          AppLink {
            class: nav_class("/"),
            to: "/",
            "Home"
          },
          AppLink {
            class: nav_class("/cities"),
            to: "/cities",
            "All Cities"
          },
        }
      }
    }
  }
}

#[component]
pub fn Footer() -> Element {
  rsx!{
    footer {
      div {
        class: "footer-container",
        p { "Prices are indicative and refreshed from the live feed on every visit." }
      }
    }
  }
}
