use chrono::Local;
use dioxus::prelude::*;

use crate::{
  components::{link::AppLink, price_card::PriceDetail, status::{ErrorPanel, Spinner}},
  utils::{controller::Controller, router::{Event, Remote}, server::PriceQuote}
};

#[component]
pub fn CityDetail(city: String, quote: Remote<PriceQuote>) -> Element {
  let controller = use_context::<Controller>();

  let body = match quote {
    Remote::Loading => rsx! { Spinner { label: "Loading gold prices for {city}..." } },
    Remote::Failed(reason) => rsx! {
      ErrorPanel { title: "Network error occurred while loading prices", detail: reason }
    },
    Remote::Ready(q) if !q.success => rsx! {
      ErrorPanel {
        title: "Failed to load gold prices for {city}",
        detail: q.error.clone().unwrap_or_else(|| "Unknown error occurred".to_string())
      }
    },
    Remote::Ready(q) => {
      let updated = Local::now().format("%d %b %Y, %H:%M:%S").to_string();
      rsx! {
        div {
          class: "price-details",
          PriceDetail { label: "22K Gold", amount: q.price22k.clone(), unit: q.unit.clone() }
          PriceDetail { label: "24K Gold", amount: q.price24k.clone(), unit: q.unit.clone() }
        }
        button {
          class: "refresh-btn",
          onclick: move |_| controller.dispatch(Event::Refresh),
          "Refresh Prices"
        }
        div {
          class: "last-updated",
          "Last updated: {updated}"
        }
      }
    },
  };

  rsx! {
    div {
      class: "container",
      AppLink { class: "back-btn", to: "/cities", "← Back to Cities" }
      div {
        class: "city-detail",
        div {
          class: "city-header",
          h1 { class: "city-title", "{city}" }
          p { class: "city-subtitle", "Live Gold Prices" }
        }
        {body}
      }
    }
  }
}
