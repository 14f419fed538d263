//! Demo configuration — optional TOML file for labels, colors, and knob.
//!
//! Missing fields fall back to defaults; an unparseable color degrades to
//! the theme default with a status-bar warning rather than failing.

use std::path::Path;

use propslider_core::{DisplayValue, Rgb};
use serde::Deserialize;

use crate::app::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub left: SideConfig,
    pub right: SideConfig,
    pub knob: KnobConfig,
    pub height: Option<u16>,
    pub initial: Option<[f64; 2]>,
    pub display: Option<DisplayValue>,
    pub aria_label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SideConfig {
    pub label: Option<String>,
    pub color: Option<String>,
    pub aria_label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KnobConfig {
    pub width: Option<u16>,
    pub gap: Option<u16>,
    pub color: Option<String>,
}

/// Read and parse a config file.
pub fn load(path: &Path) -> anyhow::Result<DemoConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply a config onto app state. Color parse failures keep the default
/// and leave a warning in the status bar.
pub fn apply(app: &mut AppState, config: DemoConfig) {
    let sides = [&config.left, &config.right];
    for (i, side) in sides.into_iter().enumerate() {
        if let Some(label) = &side.label {
            app.details[i].label = label.clone();
        }
        if let Some(aria) = &side.aria_label {
            app.details[i].aria_label = Some(aria.clone());
        }
        if let Some(color) = &side.color {
            if let Some(rgb) = parse_color(app, color) {
                app.details[i].background = Some(rgb);
            }
        }
    }

    if let Some(width) = config.knob.width {
        app.knob.width = width.max(1);
    }
    if let Some(gap) = config.knob.gap {
        app.knob.gap = gap;
    }
    if let Some(color) = &config.knob.color {
        if let Some(rgb) = parse_color(app, color) {
            app.knob.color = Some(rgb);
        }
    }

    if let Some(height) = config.height {
        app.height = height.clamp(1, 15);
    }
    if let Some([left, right]) = config.initial {
        app.value = propslider_core::ProportionPair::new(left, right);
        app.initial = app.value;
    }
    if let Some(display) = config.display {
        app.display = display;
    }
    if let Some(aria) = config.aria_label {
        app.aria_label = Some(aria);
    }
}

fn parse_color(app: &mut AppState, raw: &str) -> Option<Rgb> {
    match Rgb::from_hex(raw) {
        Ok(rgb) => Some(rgb),
        Err(err) => {
            app.set_warning(format!("Config: {err}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propslider_core::ProportionPair;

    #[test]
    fn full_config_applies() {
        let config: DemoConfig = toml::from_str(
            r##"
            height = 7
            initial = [30.0, 70.0]
            display = "percentage"
            aria_label = "budget split"

            [left]
            label = "Design"
            color = "#31332E"

            [right]
            label = "Engineering"
            color = "#5F625C"

            [knob]
            width = 1
            gap = 1
            color = "#EC1308"
            "##,
        )
        .unwrap();

        let mut app = AppState::new(ProportionPair::new(50.0, 50.0));
        apply(&mut app, config);

        assert_eq!(app.details[0].label, "Design");
        assert_eq!(app.details[1].label, "Engineering");
        assert_eq!(app.details[0].background, Some(Rgb::new(0x31, 0x33, 0x2E)));
        assert_eq!(app.knob.gap, 1);
        assert_eq!(app.knob.color, Some(Rgb::new(0xEC, 0x13, 0x08)));
        assert_eq!(app.height, 7);
        assert_eq!(app.value, ProportionPair::new(30.0, 70.0));
        assert_eq!(app.aria_label.as_deref(), Some("budget split"));
        assert!(app.status.is_none());
    }

    #[test]
    fn empty_config_keeps_defaults() {
        let config: DemoConfig = toml::from_str("").unwrap();
        let mut app = AppState::new(ProportionPair::new(50.0, 50.0));
        apply(&mut app, config);
        assert_eq!(app.details[0].label, "Left");
        assert_eq!(app.height, 5);
    }

    #[test]
    fn bad_color_warns_and_keeps_default() {
        let config: DemoConfig = toml::from_str(
            r#"
            [left]
            color = "not-a-color"
            "#,
        )
        .unwrap();
        let mut app = AppState::new(ProportionPair::new(50.0, 50.0));
        apply(&mut app, config);
        assert_eq!(app.details[0].background, None);
        assert!(app.status.is_some());
    }
}
