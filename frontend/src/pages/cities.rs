use dioxus::prelude::*;

use crate::{components::link::AppLink, utils::router::city_path};

#[component]
pub fn CitiesList(cities: Vec<String>) -> Element {
  rsx! {
    div {
      class: "container",
      div {
        class: "page-header",
        h1 { "All Cities" }
        p { "Choose a city to view live gold prices" }
      }
      div {
        class: "cities-grid",
        for city in cities {
          AppLink {
            key: "{city}",
            class: "city-link",
            to: city_path(&city),
            "{city}"
          }
        }
      }
    }
  }
}
