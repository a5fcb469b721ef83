//! Status enums mapping to SMALLINT lookup tables.
//!
//! Each variant's discriminant matches the seed data order (1-based) in the
//! corresponding `*_statuses` table, and its label matches the `name` column.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every variant in seed order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Look up a variant by its database status ID.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( $val => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Display label, identical to the lookup table `name` column.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Parse an exact (case-sensitive) display label.
            pub fn from_label(label: &str) -> Result<Self, CoreError> {
                match label {
                    $( $label => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        stringify!($name),
                        [$($label),+].join(", ")
                    ))),
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }

        impl TryFrom<StatusId> for $name {
            type Error = CoreError;

            fn try_from(id: StatusId) -> Result<Self, Self::Error> {
                $name::from_id(id).ok_or_else(|| {
                    CoreError::Internal(format!("Unknown {} id {id}", stringify!($name)))
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                $name::from_label(&label).map_err(serde::de::Error::custom)
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        NotStarted = 1 => "Not Started",
        Active = 2 => "Active",
        Delayed = 3 => "Delayed",
        Completed = 4 => "Completed",
    }
}

define_status_enum! {
    /// Draw request review status.
    DrawStatus {
        Pending = 1 => "Pending",
        Approved = 2 => "Approved",
        Rejected = 3 => "Rejected",
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::NotStarted
    }
}

impl Default for DrawStatus {
    fn default() -> Self {
        DrawStatus::Pending
    }
}

impl DrawStatus {
    /// Approved and rejected draws never change again.
    pub fn is_terminal(self) -> bool {
        !matches!(self, DrawStatus::Pending)
    }

    /// Only `Pending -> Approved` and `Pending -> Rejected` are allowed.
    pub fn can_transition_to(self, next: DrawStatus) -> bool {
        matches!(
            (self, next),
            (DrawStatus::Pending, DrawStatus::Approved) | (DrawStatus::Pending, DrawStatus::Rejected)
        )
    }
}

/// Validate a draw request status change.
///
/// Moving back to `Pending` is a validation error (it is never a valid
/// target); any change away from a terminal status is a conflict.
pub fn validate_draw_transition(from: DrawStatus, to: DrawStatus) -> Result<(), CoreError> {
    if to == DrawStatus::Pending {
        return Err(CoreError::Validation(
            "Draw requests cannot be moved back to Pending".to_string(),
        ));
    }
    if !from.can_transition_to(to) {
        return Err(CoreError::Conflict(format!(
            "Draw request is already {from} and cannot be marked {to}"
        )));
    }
    Ok(())
}
