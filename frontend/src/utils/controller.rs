use dioxus::{logger::tracing::debug, prelude::*};
use futures::channel::mpsc;
use futures_util::StreamExt;

use super::{
  api::perform,
  navigator::{platform_navigator, Navigator},
  router::{transition, AppState, Effect, Event, Transition},
};

/// Shell around the pure router: owns the current snapshot and runs effects.
#[derive(Clone, Copy)]
pub struct Controller {
  state: Signal<AppState>,
  navigator: Signal<Box<dyn Navigator>>,
}

impl Controller {
  pub fn new() -> Self {
    let navigator = platform_navigator();
    let (state, boot_effect) = AppState::boot(navigator.current_path());
    let controller = Self {
      state: Signal::new(state),
      navigator: Signal::new(navigator),
    };
    controller.run(boot_effect);
    controller
  }

  pub fn state(&self) -> Signal<AppState> {
    self.state
  }

  /// Forwards back/forward moves into the router. Call once.
  pub fn listen_for_history(self) {
    let (tx, mut rx) = mpsc::unbounded::<String>();
    let mut navigator = self.navigator;
    navigator.write().on_pop_state(Box::new(move |path| {
      let _ = tx.unbounded_send(path);
    }));

    spawn(async move {
      while let Some(path) = rx.next().await {
        self.dispatch(Event::PopState(path));
      }
    });
  }

  pub fn dispatch(self, event: Event) {
    let mut state = self.state;
    let Transition { state: next, effects } = transition(&state.read(), event);
    state.set(next);

    for effect in effects {
      self.run(effect);
    }
  }

  pub fn navigate(self, path: String) {
    self.dispatch(Event::Navigate(path));
  }

  fn run(self, effect: Effect) {
    if let Effect::PushPath(path) = &effect {
      let mut navigator = self.navigator;
      navigator.write().push(path);
      return;
    }

    debug!("running {:?}", effect);
    spawn(async move {
      if let Some(event) = perform(effect).await {
        self.dispatch(event);
      }
    });
  }
}
