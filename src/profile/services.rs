use crate::profile::repo_types::{Profile, ProfileUpdate};

/// One field whose stored value actually changed, with both sides
/// stringified for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub old_value: String,
    pub new_value: String,
}

/// Audit stringification for a nullable text field. Mirrors how numbers
/// and nulls read in the stored trail: a missing value is the literal
/// string "null".
fn stringify_opt(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

/// Apply a partial update to the current profile state. Returns the
/// post-update profile and one `FieldChange` per submitted field whose
/// value differs; fields submitted with their current value produce no
/// change entry, and unsubmitted fields are carried over untouched. The
/// caller must supply the latest committed state (the repo reads it under
/// a row lock) so concurrent update sets compose instead of reverting
/// each other.
pub fn apply_updates(current: &Profile, update: &ProfileUpdate) -> (Profile, Vec<FieldChange>) {
    let mut next = current.clone();
    let mut changes = Vec::new();

    if let Some(name) = &update.name {
        if *name != current.name {
            changes.push(FieldChange {
                field: "name",
                old_value: current.name.clone(),
                new_value: name.clone(),
            });
        }
        next.name = name.clone();
    }

    if let Some(age) = update.age {
        if age != current.age {
            changes.push(FieldChange {
                field: "age",
                old_value: current.age.to_string(),
                new_value: age.to_string(),
            });
        }
        next.age = age;
    }

    if let Some(gender) = &update.gender {
        if *gender != current.gender {
            changes.push(FieldChange {
                field: "gender",
                old_value: current.gender.clone(),
                new_value: gender.clone(),
            });
        }
        next.gender = gender.clone();
    }

    if let Some(image) = &update.profile_image {
        if *image != current.profile_image {
            changes.push(FieldChange {
                field: "profile_image",
                old_value: stringify_opt(current.profile_image.as_deref()),
                new_value: stringify_opt(image.as_deref()),
            });
        }
        next.profile_image = image.clone();
    }

    (next, changes)
}
