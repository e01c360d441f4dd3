use dioxus::prelude::*;

use super::types::{echo_summary, TemperatureAction, TemperatureReading};
use crate::features::toast::{ToastAction, ToastKind};
use crate::services::client::{ApiClient, FetchError};
use crate::{console_error, console_info};

/// Maps a completed POST to the actions and toast it produces.
///
/// Success resets the form and echoes the server response; failure leaves
/// the entered values intact so the user can retry. Controls re-enable on
/// both paths.
pub fn submission_effects(
    result: &Result<serde_json::Value, FetchError>,
) -> (Vec<TemperatureAction>, ToastAction) {
    match result {
        Ok(response) => (
            vec![
                TemperatureAction::Reset,
                TemperatureAction::SetSubmitting(false),
            ],
            ToastAction::Push {
                message: echo_summary(response),
                kind: ToastKind::Success,
            },
        ),
        Err(_) => (
            vec![TemperatureAction::SetSubmitting(false)],
            ToastAction::Push {
                message: "Could not send the reading. Try again later.".to_string(),
                kind: ToastKind::Error,
            },
        ),
    }
}

/// Posts one reading. Deliberately single-attempt: duplicate submissions are
/// worse than asking the user to try again.
pub async fn submit_reading(
    client: ApiClient,
    submit_url: String,
    reading: TemperatureReading,
    dispatch: EventHandler<TemperatureAction>,
    notify: EventHandler<ToastAction>,
) {
    let result = client.post_json(&submit_url, &reading).await;
    match &result {
        Ok(_) => console_info!("[Temperature] Submission accepted for {}", reading.room_id),
        Err(e) => console_error!("[Temperature] Submission failed: {}", e),
    }

    let (actions, toast) = submission_effects(&result);
    notify.call(toast);
    for action in actions {
        dispatch.call(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::temperature::TemperatureFormState;
    use serde_json::json;

    fn in_flight_state() -> TemperatureFormState {
        TemperatureFormState {
            room_id: "kitchen".to_string(),
            temperature: "21.5".to_string(),
            is_submitting: true,
        }
    }

    fn apply(state: &mut TemperatureFormState, actions: Vec<TemperatureAction>) {
        for action in actions {
            state.reduce_in_place(action);
        }
    }

    #[test]
    fn test_failed_submission_never_clears_the_fields() {
        let mut state = in_flight_state();
        let result = Err(FetchError::Status { status: 500 });

        let (actions, toast) = submission_effects(&result);
        apply(&mut state, actions);

        assert_eq!(state.room_id, "kitchen");
        assert_eq!(state.temperature, "21.5");
        assert!(!state.is_submitting);
        assert_eq!(
            toast,
            ToastAction::Push {
                message: "Could not send the reading. Try again later.".to_string(),
                kind: ToastKind::Error,
            }
        );
    }

    #[test]
    fn test_network_failure_behaves_like_server_failure() {
        let mut state = in_flight_state();
        let result = Err(FetchError::Network {
            message: "connection reset".to_string(),
        });

        let (actions, _) = submission_effects(&result);
        apply(&mut state, actions);

        assert_eq!(state.room_id, "kitchen");
        assert_eq!(state.temperature, "21.5");
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_successful_submission_resets_and_echoes_the_response() {
        let mut state = in_flight_state();
        let result = Ok(json!({ "id": 101, "json": { "room_id": "kitchen", "temperature": 21.5 } }));

        let (actions, toast) = submission_effects(&result);
        apply(&mut state, actions);

        assert!(state.room_id.is_empty());
        assert!(state.temperature.is_empty());
        assert!(!state.is_submitting);
        assert_eq!(
            toast,
            ToastAction::Push {
                message: r#"Data accepted! Server replied: {"room_id":"kitchen","temperature":21.5}"#
                    .to_string(),
                kind: ToastKind::Success,
            }
        );
    }
}
