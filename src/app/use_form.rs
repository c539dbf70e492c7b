use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{FieldKey, FormKind, FormState, RESET_DELAY},
    redirect::{ExternalNavigator, NavigationError},
};

/// Opens the redirect address in a new tab.
pub struct BrowserNavigator;

impl ExternalNavigator for BrowserNavigator {
    fn open(&self, url: &str) -> Result<(), NavigationError> {
        let opened = window()
            .open_with_url_and_target(url, "_blank")
            .map_err(|e| NavigationError::Failed(format!("{e:?}")))?;
        opened.map(|_| ()).ok_or(NavigationError::Blocked)
    }
}

/// Handle to one form's state, shared by the stateless field renderers.
#[derive(Clone, Copy)]
pub struct FormController {
    state: RwSignal<FormState>,
    submitted: Memo<bool>,
    start_reset: Callback<()>,
}

/// Creates the form state for `kind` in the current reactive owner.
///
/// The post-submit reset timer belongs to the same owner: when the view that
/// called this is torn down, a pending reset is cancelled with it.
pub fn use_form(kind: FormKind, on_reset: Option<Callback<()>>) -> FormController {
    let state = RwSignal::new(FormState::new(kind));
    let submitted = Memo::new(move |_| state.with(FormState::is_submitted));

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            if reset_if_alive(state, on_reset) {
                log::debug!("{kind:?} form reset");
            }
        },
        RESET_DELAY.as_millis() as f64,
    );

    FormController {
        state,
        submitted,
        start_reset: Callback::new(move |_: ()| start(())),
    }
}

/// Fires the post-submit reset. A signal whose owner is already disposed
/// is left alone and `on_reset` is not run.
fn reset_if_alive(state: RwSignal<FormState>, on_reset: Option<Callback<()>>) -> bool {
    let did_reset = state
        .try_update(|s| s.poll_reset(RESET_DELAY))
        .unwrap_or(false);
    if did_reset {
        if let Some(on_reset) = on_reset {
            on_reset.run(());
        }
    }
    did_reset
}

impl FormController {
    pub fn value(&self, key: FieldKey) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.value(key).to_string()))
    }

    pub fn is_active(&self, key: FieldKey) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_active(key)))
    }

    pub fn is_submitted(&self) -> Memo<bool> {
        self.submitted
    }

    pub fn on_change(&self, key: FieldKey) -> Callback<String> {
        let state = self.state;
        Callback::new(move |value: String| {
            state.update(|s| {
                if let Err(e) = s.handle_change(key, value) {
                    log::warn!("{e}");
                }
            })
        })
    }

    pub fn on_focus(&self, key: FieldKey) -> Callback<()> {
        let state = self.state;
        Callback::new(move |_: ()| state.update(|s| s.set_active_field(Some(key))))
    }

    pub fn on_blur(&self) -> Callback<()> {
        let state = self.state;
        Callback::new(move |_: ()| state.update(|s| s.set_active_field(None)))
    }

    pub fn submit(&self) {
        match self.state.try_update(|s| s.submit(&BrowserNavigator)) {
            Some(Ok(submission)) => {
                log::info!("opened {}", submission.url);
                self.start_reset.run(());
            }
            Some(Err(e)) => log::warn!("submit refused: {e}"),
            None => {}
        }
    }
}
