#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::template::{Footer, Header};
use dioxus::prelude::*;
use pages::{cities::CitiesList, city::CityDetail, home::Home, not_found::{PageNotFound, StartupError}};
use components::status::Spinner;
use utils::{controller::Controller, router::ViewState};

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    static CSS: Asset = asset!("/assets/main.css");

    let controller = use_context_provider(Controller::new);
    use_hook(move || controller.listen_for_history());

    let state = controller.state().read().clone();

    let page = match state.view {
        ViewState::Booting => rsx! { div { class: "container", Spinner { label: "Loading cities..." } } },
        ViewState::Home { prices } => rsx! { Home { prices, search: state.search.clone() } },
        ViewState::CitiesList => rsx! { CitiesList { cities: state.cities.clone() } },
        ViewState::CityDetail { city, quote } => rsx! { CityDetail { city, quote } },
        ViewState::NotFound => rsx! { PageNotFound { path: state.path.clone() } },
        ViewState::Error(message) => rsx! { StartupError { message } },
    };

    rsx! {
        document::Stylesheet { href: CSS },
        Header {}
        main { id: "app", {page} }
        Footer {}
    }
}
