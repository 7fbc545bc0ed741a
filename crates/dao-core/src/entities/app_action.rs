use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dao::{BaseObject, Dao};
use crate::enums::AppActionType;
use crate::types::LocalizedString;

/// Keys that older records stored directly on the action instead of under
/// `strings`.
const FLAT_STRING_KEYS: [&str; 6] =
    ["body", "cancelLabel", "disclaimer", "okayLabel", "subTitle", "title"];

/// A prompt the app can raise: a popup, drawer, stage or full-screen card
/// with optional confirm and cancel buttons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AppAction {
    #[serde(flatten)]
    pub base: BaseObject,
    pub action_type: AppActionType,
    pub colors: Option<Box<AppActionColors>>,
    pub deep_link: String,
    pub images: Option<Box<AppActionImages>>,
    pub strings: Option<Box<AppActionStrings>>,
}

impl AppAction {
    pub fn colors_mut(&mut self) -> &mut AppActionColors {
        self.colors.get_or_insert_with(Box::default)
    }

    pub fn images_mut(&mut self) -> &mut AppActionImages {
        self.images.get_or_insert_with(Box::default)
    }

    pub fn strings_mut(&mut self) -> &mut AppActionStrings {
        self.strings.get_or_insert_with(Box::default)
    }

    #[must_use]
    pub fn top_image_url(&self) -> &str {
        self.images.as_ref().map_or("", |images| images.top_url.as_str())
    }
}

/// Read-through accessors for the localized strings. Each falls back to an
/// empty string when the action has no strings record.
macro_rules! string_accessors {
    ($($field:ident),+ $(,)?) => {
        impl AppAction {
            $(
                #[must_use]
                pub fn $field(&self) -> LocalizedString {
                    self.strings
                        .as_ref()
                        .map(|strings| strings.$field.clone())
                        .unwrap_or_default()
                }
            )+
        }
    };
}

string_accessors!(body, cancel_label, disclaimer, okay_label, sub_title, title);

crate::impl_dao!(AppAction, "app_action", |this, r| {
    r.read("actionType", &mut this.action_type);
    r.read("colors", &mut this.colors);
    r.read("deepLink", &mut this.deep_link);
    r.read("images", &mut this.images);
    r.read("strings", &mut this.strings);
    if this.strings.is_none() && FLAT_STRING_KEYS.iter().any(|key| r.raw(key).is_some()) {
        let mut strings = AppActionStrings::new_with(r.ids());
        strings.read_fields(r);
        this.strings = Some(Box::new(strings));
    }
});

/// Button colors for an [`AppAction`], as CSS-style color strings. Unset
/// colors use the app theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AppActionColors {
    #[serde(flatten)]
    pub base: BaseObject,
    pub cancel_button_background: Option<String>,
    pub cancel_button_text: Option<String>,
    pub ok_button_background: Option<String>,
    pub ok_button_text: Option<String>,
}

crate::impl_dao!(AppActionColors, "app_action_colors", |this, r| {
    r.read("cancelButtonBackground", &mut this.cancel_button_background);
    r.read("cancelButtonText", &mut this.cancel_button_text);
    r.read("okButtonBackground", &mut this.ok_button_background);
    r.read("okButtonText", &mut this.ok_button_text);
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AppActionImages {
    #[serde(flatten)]
    pub base: BaseObject,
    pub top_url: String,
}

crate::impl_dao!(AppActionImages, "app_action_images", |this, r| {
    r.read("topImageUrl", &mut this.top_url);
    r.read("topUrl", &mut this.top_url);
});

/// Localized copy shown by an [`AppAction`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AppActionStrings {
    #[serde(flatten)]
    pub base: BaseObject,
    pub body: LocalizedString,
    pub cancel_label: LocalizedString,
    pub disclaimer: LocalizedString,
    pub okay_label: LocalizedString,
    pub sub_title: LocalizedString,
    pub title: LocalizedString,
}

crate::impl_dao!(AppActionStrings, "app_action_strings", |this, r| {
    r.read("body", &mut this.body);
    r.read("cancelLabel", &mut this.cancel_label);
    r.read("disclaimer", &mut this.disclaimer);
    r.read("okayLabel", &mut this.okay_label);
    r.read("subTitle", &mut this.sub_title);
    r.read("title", &mut this.title);
});

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn flat_strings_are_read_when_nested_strings_are_missing() {
        let ids = SequentialIds::new("a");
        let data = json!({
            "actionType": "drawer",
            "title": "Storm warning",
            "okayLabel": "Got it",
            "images": {"topImageUrl": "https://cdn.example.com/storm.png"}
        });
        let action = AppAction::from_dictionary_with(data.as_object().unwrap(), &ids).unwrap();
        assert_eq!(action.action_type, AppActionType::Drawer);
        assert_eq!(action.title().text(), "Storm warning");
        assert_eq!(action.okay_label().text(), "Got it");
        assert_eq!(action.top_image_url(), "https://cdn.example.com/storm.png");
    }

    #[test]
    fn nested_strings_win_over_flat_keys() {
        let data = json!({
            "title": "ignored",
            "strings": {"title": "Nested", "body": "Details"}
        });
        let action = AppAction::from_dictionary(data.as_object().unwrap()).unwrap();
        assert_eq!(action.title().text(), "Nested");
        assert_eq!(action.body().text(), "Details");
    }

    #[test]
    fn accessors_fall_back_without_children() {
        let mut action = AppAction::default();
        assert_eq!(action.disclaimer(), LocalizedString::default());
        assert_eq!(action.top_image_url(), "");

        action.strings_mut().sub_title = "Subtitle".into();
        action.colors_mut().ok_button_text = Some("#ffffff".into());
        assert_eq!(action.sub_title().text(), "Subtitle");
        assert_eq!(
            action.colors.as_ref().and_then(|c| c.ok_button_text.as_deref()),
            Some("#ffffff")
        );
    }
}
