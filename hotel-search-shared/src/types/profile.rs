//! User profile types.

use serde::{Deserialize, Serialize};

/// The signed-in user's profile as shown on the profile screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub name: String,
    pub email: String,
    pub profile_image: String,
    pub phone: String,
    pub bio: String,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            name: "Antony William".to_string(),
            email: "antony@example.com".to_string(),
            profile_image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".to_string(),
            phone: "+1 234 567 8900".to_string(),
            bio: "Software Developer passionate about mobile apps".to_string(),
        }
    }
}

impl ProfileData {
    /// Merge a partial update into this profile. Fields that are `None` are left unchanged.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(profile_image) = update.profile_image {
            self.profile_image = profile_image;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
    }
}

/// Partial profile update. Only `Some` fields are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    /// Returns true if the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.profile_image.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
    }
}
