//! Profile avatar and the profile card dialog opened from the header.

use dioxus::prelude::*;
use portfolio_core::Profile;
use portfolio_ui::Modal;

/// Uppercase first letter of a name, for the photo placeholder
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Photo if the profile has one, otherwise the name's initial
#[component]
pub fn ProfileAvatar(
    name: String,
    photo_url: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("profile-avatar {}", extra),
        _ => "profile-avatar".to_string(),
    };

    let picture = match photo_url.filter(|url| !url.is_empty()) {
        Some(url) => rsx! {
            img { src: "{url}", alt: "{name} profile picture" }
        },
        None => rsx! {
            span { class: "profile-avatar-initial", "{avatar_initial(&name)}" }
        },
    };

    rsx! {
        div { class: "{class}", {picture} }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardModalProps {
    pub open: bool,
    pub profile: Profile,
    pub on_close: EventHandler<()>,
}

/// Profile card: large photo, name and title
#[component]
pub fn ProfileCardModal(props: ProfileCardModalProps) -> Element {
    let profile = &props.profile;

    rsx! {
        Modal {
            open: props.open,
            title: profile.name.clone(),
            kicker: "Profile".to_string(),
            on_close: props.on_close,
            class: "profile-card".to_string(),

            div { class: "profile-card-body",
                ProfileAvatar {
                    name: profile.name.clone(),
                    photo_url: profile.photo_url.clone(),
                    class: "profile-avatar-large".to_string(),
                }
                div { class: "profile-card-name", "{profile.name}" }
                if !profile.title.is_empty() {
                    p { class: "profile-card-title", "{profile.title}" }
                }
                div { class: "profile-card-line" }
            }
        }
    }
}
