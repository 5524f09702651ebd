//! Picker configuration, loadable from any serde format.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_YEAR_PICKER_SPAN;
use crate::{DateRange, JalaliDate, Selection, SelectionError, SelectionMode, SelectionState, year_span};

/// Options a host passes to the date picker.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub selection_mode:         SelectionMode,
    pub initial_selected_dates: Vec<JalaliDate>,
    pub initial_range:          Option<DateRange>,
    pub enable_year_picker:     bool,
    pub year_picker_span:       u16,
    pub show_selection_summary: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            selection_mode:         SelectionMode::default(),
            initial_selected_dates: Vec::new(),
            initial_range:          None,
            enable_year_picker:     true,
            year_picker_span:       DEFAULT_YEAR_PICKER_SPAN,
            show_selection_summary: true,
        }
    }
}

impl PickerConfig {
    /// Checks that the initial selection fits the selection mode.
    ///
    /// # Errors
    /// Returns `SelectionError::ModeMismatch` describing the first conflict found.
    pub fn validate(&self) -> Result<(), SelectionError> {
        let mismatch = |reason: &str| SelectionError::ModeMismatch {
            mode:   self.selection_mode,
            reason: reason.to_owned(),
        };

        match self.selection_mode {
            SelectionMode::Single if self.initial_selected_dates.len() > 1 => {
                Err(mismatch("more than one initial date"))
            },
            SelectionMode::Single | SelectionMode::Multiple if self.initial_range.is_some() => {
                Err(mismatch("initial range given"))
            },
            SelectionMode::Range if !self.initial_selected_dates.is_empty() => {
                Err(mismatch("initial dates given, use initial_range"))
            },
            _ => Ok(()),
        }
    }

    /// The preselected result, if the configuration carries one.
    ///
    /// # Errors
    /// Returns `SelectionError::ModeMismatch` if the configuration does not validate.
    pub fn initial_selection(&self) -> Result<Option<Selection>, SelectionError> {
        self.validate()?;

        let selection = match self.selection_mode {
            SelectionMode::Single => self.initial_selected_dates.first().copied().map(Selection::Single),
            SelectionMode::Multiple if self.initial_selected_dates.is_empty() => None,
            SelectionMode::Multiple => Some(Selection::from(self.initial_selected_dates.clone())),
            SelectionMode::Range => self.initial_range.map(Selection::Range),
        };
        Ok(selection)
    }

    /// Years for the year picker around `current`, or `None` when it is disabled
    pub fn year_range(&self, current: i32) -> Option<RangeInclusive<i32>> {
        self.enable_year_picker
            .then(|| year_span(current, self.year_picker_span))
    }
}

impl SelectionState {
    /// Picker state seeded with the configured mode and initial selection.
    ///
    /// # Errors
    /// Returns `SelectionError::ModeMismatch` if the configuration does not validate.
    pub fn from_config(config: &PickerConfig) -> Result<Self, SelectionError> {
        match config.initial_selection() {
            Ok(Some(selection)) => Ok(selection.into()),
            Ok(None) => Ok(Self::new(config.selection_mode)),
            Err(err) => {
                tracing::warn!(mode = %config.selection_mode, error = %err, "rejected picker config");
                Err(err)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{jalali, range};

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.selection_mode, SelectionMode::Range);
        assert!(config.initial_selected_dates.is_empty());
        assert_eq!(config.initial_range, None);
        assert!(config.enable_year_picker);
        assert_eq!(config.year_picker_span, 20);
        assert!(config.show_selection_summary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: PickerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "selection_mode": "multiple",
            "initial_selected_dates": ["1403-04-25", "1403-01-01"],
            "enable_year_picker": false,
            "year_picker_span": 5,
            "show_selection_summary": false
        }"#;
        let config: PickerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.selection_mode, SelectionMode::Multiple);
        assert_eq!(config.initial_selected_dates, vec![jalali(1403, 4, 25), jalali(1403, 1, 1)]);
        assert!(!config.enable_year_picker);
        assert_eq!(config.year_range(1403), None);
    }

    #[test]
    fn test_deserialize_rejects_bad_dates() {
        let json = r#"{"initial_range": "1403-05-01/1403-04-01"}"#;
        assert!(serde_json::from_str::<PickerConfig>(json).is_err());

        let json = r#"{"initial_selected_dates": ["1404-12-30"]}"#;
        assert!(serde_json::from_str::<PickerConfig>(json).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = PickerConfig {
            initial_range: Some(range((1403, 1, 1), (1403, 1, 13))),
            ..PickerConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""initial_range":"1403-01-01/1403-01-13""#));
        assert_eq!(serde_json::from_str::<PickerConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_validate_mode_mismatch() {
        let cases = [
            PickerConfig {
                selection_mode: SelectionMode::Single,
                initial_selected_dates: vec![jalali(1403, 1, 1), jalali(1403, 1, 2)],
                ..PickerConfig::default()
            },
            PickerConfig {
                selection_mode: SelectionMode::Multiple,
                initial_range: Some(range((1403, 1, 1), (1403, 1, 2))),
                ..PickerConfig::default()
            },
            PickerConfig {
                selection_mode: SelectionMode::Range,
                initial_selected_dates: vec![jalali(1403, 1, 1)],
                ..PickerConfig::default()
            },
        ];

        for config in &cases {
            assert!(
                matches!(config.validate(), Err(SelectionError::ModeMismatch { mode, .. }) if mode == config.selection_mode),
                "Expected mismatch for {config:?}"
            );
            assert!(SelectionState::from_config(config).is_err());
        }
    }

    #[test]
    fn test_state_from_config() {
        let config = PickerConfig {
            selection_mode: SelectionMode::Multiple,
            initial_selected_dates: vec![jalali(1403, 4, 25), jalali(1403, 1, 1), jalali(1403, 4, 25)],
            ..PickerConfig::default()
        };
        let state = SelectionState::from_config(&config).unwrap();
        assert_eq!(
            state.finish(),
            Some(Selection::Multiple(vec![jalali(1403, 1, 1), jalali(1403, 4, 25)]))
        );

        let config = PickerConfig {
            initial_range: Some(range((1403, 1, 1), (1403, 1, 13))),
            ..PickerConfig::default()
        };
        let state = SelectionState::from_config(&config).unwrap();
        assert!(state.is_range_start(&jalali(1403, 1, 1)));
        assert!(state.is_range_end(&jalali(1403, 1, 13)));

        let state = SelectionState::from_config(&PickerConfig::default()).unwrap();
        assert_eq!(state, SelectionState::new(SelectionMode::Range));
    }

    #[test]
    fn test_year_range() {
        let config = PickerConfig::default();
        assert_eq!(config.year_range(1403), Some(1383..=1423));
    }
}
