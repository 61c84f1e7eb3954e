//! Playback hook bridging the controller to the bound media element
//!
//! State transitions live in [`PlaybackController`]; this module only
//! performs the DOM side effects and feeds asynchronous play outcomes
//! back into the controller.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlMediaElement;

use crate::utils::playback::{PlaybackCommand, PlaybackController, PlaybackError};

/// Find the media element the controller is bound to
fn media_element(element_id: &str) -> Result<HtmlMediaElement, PlaybackError> {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
        .ok_or_else(|| PlaybackError::missing_element(element_id))?;

    element
        .dyn_into::<HtmlMediaElement>()
        .map_err(|_| PlaybackError::missing_element(element_id))
}

/// Execute one playback command against the element `element_id`.
///
/// Play requests resolve asynchronously; their outcome is reported back
/// through [`PlaybackController::handle_play_result`], so a browser
/// rejection reverts the optimistic playing flag.
pub fn run_media_command(
    mut playback: Signal<PlaybackController>,
    element_id: &str,
    command: PlaybackCommand,
) {
    let media = match media_element(element_id) {
        Ok(media) => media,
        Err(error) => {
            web_sys::console::error_1(&format!("Playback target missing: {}", error).into());
            if command == PlaybackCommand::Play {
                playback.with_mut(|controller| {
                    controller.handle_play_result(&Err(error));
                });
            }
            return;
        }
    };

    match command {
        PlaybackCommand::Play => match media.play() {
            Ok(promise) => {
                spawn_local(async move {
                    let outcome = JsFuture::from(promise)
                        .await
                        .map(|_| ())
                        .map_err(|rejection| PlaybackError::rejected(format!("{:?}", rejection)));

                    if let Err(error) = &outcome {
                        web_sys::console::error_1(
                            &format!("Play request rejected: {}", error).into(),
                        );
                    }
                    playback.with_mut(|controller| {
                        controller.handle_play_result(&outcome);
                    });
                });
            }
            Err(rejection) => {
                let error = PlaybackError::rejected(format!("{:?}", rejection));
                web_sys::console::error_1(&format!("Play request rejected: {}", error).into());
                playback.with_mut(|controller| {
                    controller.handle_play_result(&Err(error));
                });
            }
        },
        PlaybackCommand::Pause => {
            if media.pause().is_err() {
                web_sys::console::warn_1(&"Pause request failed".into());
            }
        }
        PlaybackCommand::SetMuted(muted) => {
            media.set_muted(muted);
        }
    }
}
