//! User-facing dispatch texts.

use dbot_core::{InteractionSurface, Locale};
use localization::{Localizer, GLOBAL_BUNDLE};

pub const NOT_AVAILABLE: &str = "This Command is currently not available";

pub const COMMAND_COOLDOWN_KEY: &str = "command.cooldown.response";
pub const INTERACTION_COOLDOWN_KEY: &str = "interaction.cooldown.response";

/// Used when the global bundle has no cooldown text in the invoker's or the default locale.
pub const DEFAULT_COMMAND_COOLDOWN: &str = "You are on cooldown. You can use this command again {time}.";
pub const DEFAULT_INTERACTION_COOLDOWN: &str =
    "You are on cooldown. You can use this interaction again {time}.";

const TIME_PLACEHOLDERS: [&str; 2] = ["{time}", "%s"];

pub(crate) fn cooldown_template(
    localizer: &Localizer,
    surface: InteractionSurface,
    locale: Locale,
) -> String {
    let (key, fallback) = if surface.is_context() {
        (INTERACTION_COOLDOWN_KEY, DEFAULT_INTERACTION_COOLDOWN)
    } else {
        (COMMAND_COOLDOWN_KEY, DEFAULT_COMMAND_COOLDOWN)
    };
    let template = localizer.get_or_default(GLOBAL_BUNDLE, key, locale);
    if template == key {
        fallback.to_string()
    } else {
        template
    }
}

pub(crate) fn render(template: &str, time: &str) -> String {
    TIME_PLACEHOLDERS
        .iter()
        .fold(template.to_string(), |text, placeholder| text.replace(placeholder, time))
}
