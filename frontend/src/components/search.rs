use dioxus::prelude::*;

use crate::utils::{controller::Controller, router::{Event, SearchState}};

#[component]
pub fn SearchBox(search: SearchState) -> Element {
  let controller = use_context::<Controller>();
  let show_suggestions = !search.matches.is_empty();

  rsx! {
    div {
      class: "search-container",
      input {
        r#type: "text",
        class: "search-input",
        placeholder: "Search for a city...",
        value: "{search.query}",
        oninput: move |evt: FormEvent| controller.dispatch(Event::SearchInput(evt.value())),
        onkeydown: move |evt: KeyboardEvent| {
          if evt.key() == Key::Enter {
            controller.dispatch(Event::SearchSubmit);
          }
        },
      }
      if show_suggestions {
        div {
          class: "search-suggestions",
          {search.matches.iter().map(|city| {
            let selected = city.clone();
            rsx! {
              div {
                key: "{city}",
                class: "suggestion-item",
                onclick: move |_| controller.dispatch(Event::SearchSelect(selected.clone())),
                "{city}"
              }
            }
          })}
        }
      }
    }
  }
}
