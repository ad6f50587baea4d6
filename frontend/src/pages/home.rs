use dioxus::prelude::*;

use crate::{
  components::{link::AppLink, price_card::PriceCard, search::SearchBox, status::{ErrorPanel, Spinner}},
  utils::{router::{Remote, SearchState}, server::PriceQuote}
};

#[component]
pub fn Home(prices: Remote<Vec<PriceQuote>>, search: SearchState) -> Element {
  let featured = match prices {
    Remote::Loading => rsx! { Spinner { label: "Loading featured cities..." } },
    Remote::Failed(reason) => rsx! {
      ErrorPanel {
        title: "Failed to load featured prices. Please try again later.",
        detail: reason
      }
    },
    Remote::Ready(quotes) => rsx! {
      h2 { class: "section-title", "Featured Cities" }
      div {
        class: "cards-grid",
        for quote in quotes {
          PriceCard { key: "{quote.city}", quote: quote.clone() }
        }
      }
      div {
        class: "center mt-6",
        AppLink { class: "refresh-btn", to: "/cities", "View All Cities" }
      }
    },
  };

  rsx! {
    div {
      class: "hero",
      div {
        class: "container",
        h1 { "Live Gold Prices" },
        p { "Get real-time gold prices for cities across India. Track 22K and 24K gold rates updated live." },
        SearchBox { search }
      }
    },
    div {
      class: "container",
      {featured}
    }
  }
}
