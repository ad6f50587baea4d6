use dioxus::prelude::*;

use crate::utils::{controller::Controller, router::city_path, server::PriceQuote};

fn value_class(value: &str) -> &'static str {
  if PriceQuote::is_error_price(value) { "price-value error" } else { "price-value" }
}

/// Summary card on the home page; clicking it opens the city.
#[component]
pub fn PriceCard(quote: PriceQuote) -> Element {
  let controller = use_context::<Controller>();
  let target = city_path(&quote.city);

  rsx! {
    div {
      class: "price-card",
      onclick: move |_| controller.navigate(target.clone()),
      div {
        class: "city-name",
        "{quote.city}"
      }
      div {
        class: "price-info",
        div {
          class: "price-row",
          span { class: "price-label", "22K Gold" }
          span { class: value_class(&quote.price22k), "{quote.price22k}" }
        }
        div {
          class: "price-row",
          span { class: "price-label", "24K Gold" }
          span { class: value_class(&quote.price24k), "{quote.price24k}" }
        }
        div {
          class: "price-row",
          span { class: "price-label", "Unit" }
          span { class: "price-value", "{quote.unit}" }
        }
      }
    }
  }
}

#[component]
pub fn PriceDetail(#[props(into)] label: String, #[props(into)] amount: String, #[props(into)] unit: String) -> Element {
  rsx! {
    div {
      class: "price-detail-card",
      div { class: "price-type", "{label}" }
      div { class: "price-amount", "{amount}" }
      div { class: "price-unit", "per {unit}" }
    }
  }
}
