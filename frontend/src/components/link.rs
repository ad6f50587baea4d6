use dioxus::prelude::*;

use crate::utils::controller::Controller;

/// Same-origin link that updates the address bar without a page reload.
/// Modified clicks (new tab, new window) are left to the browser.
#[component]
pub fn AppLink(
  #[props(into)] to: String,
  #[props(into, default)] class: String,
  children: Element
) -> Element {
  let controller = use_context::<Controller>();
  let href = to.clone();

  rsx! {
    a {
      href: "{href}",
      class: "{class}",
      onclick: move |evt: MouseEvent| {
        if !navigates_in_place(evt.modifiers()) {
          return;
        }
        evt.prevent_default();
        controller.navigate(to.clone());
      },
      {children}
    }
  }
}

fn navigates_in_place(modifiers: Modifiers) -> bool {
  modifiers.is_empty()
}
