use common::config::Validate;
use serde::{Deserialize, Serialize};

const MIN_WINDOW_SIDE: f32 = 200.0;
const MAX_WINDOW_SIDE: f32 = 2000.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_WINDOW_SIDE..=MAX_WINDOW_SIDE).contains(&value) {
                return Err(format!(
                    "window {} must be between {} and {}, got {}",
                    name, MIN_WINDOW_SIDE, MAX_WINDOW_SIDE, value
                ));
            }
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 560.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_valid() {
        assert!(WindowConfig::default().validate().is_ok());
    }

    #[test]
    fn test_window_bounds() {
        let too_narrow = WindowConfig { width: 199.0, height: 560.0 };
        assert!(too_narrow.validate().is_err());

        let too_tall = WindowConfig { width: 480.0, height: 2001.0 };
        let error = too_tall.validate().unwrap_err();
        assert!(error.contains("height"), "{}", error);

        let not_a_number = WindowConfig { width: f32::NAN, height: 560.0 };
        assert!(not_a_number.validate().is_err());
    }
}
