use serde::{Deserialize, Serialize};

/// Payload posted to the submission endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub room_id: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureFormState {
    pub room_id: String,
    pub temperature: String,
    pub is_submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemperatureAction {
    SetRoomId(String),
    SetTemperature(String),
    SetSubmitting(bool),
    /// Successful submission clears the fields; failure leaves them intact
    Reset,
}

impl TemperatureFormState {
    pub fn reduce_in_place(&mut self, action: TemperatureAction) {
        match action {
            TemperatureAction::SetRoomId(room_id) => {
                self.room_id = room_id;
            }
            TemperatureAction::SetTemperature(temperature) => {
                self.temperature = temperature;
            }
            TemperatureAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
            }
            TemperatureAction::Reset => {
                self.room_id.clear();
                self.temperature.clear();
            }
        }
    }

    /// The typed payload, once both fields hold usable values
    pub fn reading(&self) -> Option<TemperatureReading> {
        let room_id = self.room_id.trim();
        if room_id.is_empty() {
            return None;
        }
        let temperature: f64 = self.temperature.trim().parse().ok()?;
        Some(TemperatureReading {
            room_id: room_id.to_string(),
            temperature,
        })
    }
}

/// Success-toast text echoing the server response. Echo servers wrap the
/// submitted body in a `json` field; fall back to the whole body otherwise.
pub fn echo_summary(response: &serde_json::Value) -> String {
    let echoed = response.get("json").unwrap_or(response);
    format!("Data accepted! Server replied: {echoed}")
}
