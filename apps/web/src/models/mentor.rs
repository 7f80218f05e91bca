use serde::Serialize;

/// Colour class applied to a mentor's avatar circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AvatarStyle {
    #[serde(rename = "avatar-purple")]
    Purple,
    #[serde(rename = "avatar-pink")]
    Pink,
    #[serde(rename = "avatar-blue")]
    Blue,
    #[serde(rename = "avatar-green")]
    Green,
}

impl AvatarStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            AvatarStyle::Purple => "avatar-purple",
            AvatarStyle::Pink => "avatar-pink",
            AvatarStyle::Blue => "avatar-blue",
            AvatarStyle::Green => "avatar-green",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MentorProfile {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
    pub bio: &'static str,
    pub avatar: AvatarStyle,
}
