//! Filter state for the set-valued dimensions.
//!
//! Each indexed dimension is backed by the control that drives it:
//!
//! - **Checkboxes** keep one boolean per value plus the master checkbox.
//!   When none or all of the values are checked the dimension does not
//!   filter at all. The "none checked" half of that rule is surprising, but
//!   unchecking everything has always meant "show everything" for visitors.
//! - **Dropdown** keeps a [`Selection`]: either no selection, or exactly one
//!   value.
//! - **Unbound** dimensions (indexed but without a control) allow every value.
//!
//! [`FilterState::allowed`] and [`FilterState::bool_map`] give the flat
//! value → allowed view regardless of the representation.

use crate::config::ControlSpec;
use crate::index::FilterIndex;
use crate::types::{KeySet, PosterRecord, SetDimension};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ControlError {
    #[error("'{0}' is not a filter dimension")]
    UnknownDimension(String),
    #[error("'{dimension}' has no {expected} control")]
    NoControl {
        dimension: String,
        expected: &'static str,
    },
    #[error("'{value}' is not a value of '{dimension}'")]
    UnknownValue { dimension: String, value: String },
    #[error("the poster room is closed")]
    RoomClosed,
}

/// Dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    One(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionFilter {
    Checkboxes {
        values: Vec<(String, bool)>,
        master: bool,
    },
    Dropdown {
        values: Vec<String>,
        selection: Selection,
    },
    Unbound {
        values: Vec<String>,
    },
}

impl DimensionFilter {
    /// Whether a poster carrying `poster_values` passes this filter.
    fn matches(&self, poster_values: &KeySet) -> bool {
        match self {
            DimensionFilter::Checkboxes { values, .. } => {
                let checked = values.iter().filter(|(_, on)| *on).count();
                if checked == 0 || checked == values.len() {
                    return true;
                }
                values
                    .iter()
                    .any(|(value, on)| *on && poster_values.contains(value))
            }
            DimensionFilter::Dropdown { selection, .. } => match selection {
                Selection::All => true,
                Selection::One(value) => poster_values.contains(value),
            },
            DimensionFilter::Unbound { .. } => true,
        }
    }

    fn allowed(&self, value: &str) -> Option<bool> {
        match self {
            DimensionFilter::Checkboxes { values, .. } => {
                values.iter().find(|(v, _)| v == value).map(|(_, on)| *on)
            }
            DimensionFilter::Dropdown { values, selection } => {
                values.iter().find(|v| *v == value).map(|v| match selection {
                    Selection::All => true,
                    Selection::One(selected) => selected == v,
                })
            }
            DimensionFilter::Unbound { values } => values.iter().any(|v| v == value).then_some(true),
        }
    }

    fn values(&self) -> Vec<&str> {
        match self {
            DimensionFilter::Checkboxes { values, .. } => {
                values.iter().map(|(v, _)| v.as_str()).collect()
            }
            DimensionFilter::Dropdown { values, .. } | DimensionFilter::Unbound { values } => {
                values.iter().map(String::as_str).collect()
            }
        }
    }
}

/// Current filter of every indexed set dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    dimensions: BTreeMap<SetDimension, DimensionFilter>,
}

impl FilterState {
    /// Initial state: every value allowed, master checkboxes checked, no
    /// dropdown selection.
    pub fn from_index(index: &FilterIndex, controls: &[ControlSpec]) -> Self {
        let mut dimensions = BTreeMap::new();
        for dimension in index.dimensions() {
            let values = index.values(dimension).unwrap_or_default().to_vec();
            let control = controls
                .iter()
                .find(|c| c.set_dimension() == Some(dimension));
            let filter = match control {
                Some(ControlSpec::Checkboxes { .. }) => DimensionFilter::Checkboxes {
                    values: values.into_iter().map(|v| (v, true)).collect(),
                    master: true,
                },
                Some(ControlSpec::Dropdown { .. }) => DimensionFilter::Dropdown {
                    values,
                    selection: Selection::All,
                },
                _ => DimensionFilter::Unbound { values },
            };
            dimensions.insert(dimension, filter);
        }
        Self { dimensions }
    }

    pub fn get(&self, dimension: SetDimension) -> Option<&DimensionFilter> {
        self.dimensions.get(&dimension)
    }

    /// Whether `value` is currently allowed in `dimension`. `None` for values
    /// the index never saw.
    pub fn allowed(&self, dimension: SetDimension, value: &str) -> Option<bool> {
        self.dimensions.get(&dimension)?.allowed(value)
    }

    /// Flat value → allowed view of one dimension, in index order.
    pub fn bool_map(&self, dimension: SetDimension) -> Vec<(&str, bool)> {
        match self.dimensions.get(&dimension) {
            Some(filter) => filter
                .values()
                .into_iter()
                .map(|v| (v, filter.allowed(v).unwrap_or(true)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Number of currently allowed values in `dimension`.
    pub fn active_count(&self, dimension: SetDimension) -> usize {
        self.bool_map(dimension).iter().filter(|(_, on)| *on).count()
    }

    /// Whether a poster passes every set-dimension filter.
    pub fn matches(&self, poster: &PosterRecord) -> bool {
        self.dimensions
            .iter()
            .all(|(&dimension, filter)| filter.matches(poster.set_field(dimension)))
    }

    /// Check or uncheck one value of a checkbox group.
    pub fn set_checked(
        &mut self,
        dimension: SetDimension,
        value: &str,
        checked: bool,
    ) -> Result<(), ControlError> {
        match self.dimension_mut(dimension)? {
            DimensionFilter::Checkboxes { values, .. } => {
                let entry = values.iter_mut().find(|(v, _)| v == value).ok_or_else(|| {
                    ControlError::UnknownValue {
                        dimension: dimension.to_string(),
                        value: value.to_string(),
                    }
                })?;
                entry.1 = checked;
                Ok(())
            }
            _ => Err(no_control(dimension, "checkbox")),
        }
    }

    /// Master checkbox: set every value of a checkbox group at once.
    pub fn set_all(&mut self, dimension: SetDimension, checked: bool) -> Result<(), ControlError> {
        match self.dimension_mut(dimension)? {
            DimensionFilter::Checkboxes { values, master } => {
                for (_, on) in values.iter_mut() {
                    *on = checked;
                }
                *master = checked;
                Ok(())
            }
            _ => Err(no_control(dimension, "checkbox")),
        }
    }

    /// Dropdown: select exactly one value, or `None` for no selection.
    pub fn select(
        &mut self,
        dimension: SetDimension,
        value: Option<&str>,
    ) -> Result<(), ControlError> {
        match self.dimension_mut(dimension)? {
            DimensionFilter::Dropdown { values, selection } => {
                *selection = match value {
                    None => Selection::All,
                    Some(v) if values.iter().any(|known| known == v) => {
                        Selection::One(v.to_string())
                    }
                    Some(v) => {
                        return Err(ControlError::UnknownValue {
                            dimension: dimension.to_string(),
                            value: v.to_string(),
                        });
                    }
                };
                Ok(())
            }
            _ => Err(no_control(dimension, "dropdown")),
        }
    }

    fn dimension_mut(&mut self, dimension: SetDimension) -> Result<&mut DimensionFilter, ControlError> {
        self.dimensions
            .get_mut(&dimension)
            .ok_or_else(|| ControlError::UnknownDimension(dimension.to_string()))
    }
}

fn no_control(dimension: SetDimension, expected: &'static str) -> ControlError {
    ControlError::NoControl {
        dimension: dimension.to_string(),
        expected,
    }
}
