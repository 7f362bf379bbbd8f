//! Testing utilities for trellis
//!
//! Provides a representative settings declaration whose bound state stays
//! reachable from tests, so a test can flip a value behind the screen's back
//! and check that resolved views follow it.
//!
//! Only available when compiled with `cfg(test)`.

use crate::content::{Content, CustomGroup, Group, IndexedView, Item, RawView};
use crate::state::State;
use crate::view::{Stepper, Text, Toggle, factory, icon_factory};

/// A declared hierarchy plus handles to the state it binds
pub struct SettingsFixture {
    pub content: Vec<Content>,
    pub airplane_mode: State<bool>,
    pub wifi: State<bool>,
    pub dark_mode: State<bool>,
    pub brightness: State<i64>,
}

/// Build the standard fixture
///
/// ```text
/// Connections (inline)
///   Airplane Mode      item, toggle
///   Wi-Fi              item, toggle, tags: wireless, network
///   "Networks nearby"  raw text
/// General (navigation, ⚙)
///   "Manage your device"  raw text
/// Display (navigation, ☀)
///   Dark Mode          indexed toggle, tags: theme, appearance
///   Brightness         item, stepper, tags: screen
///   "Night Shift reduces blue light"  raw text
/// Credits (custom, ★)
/// ```
#[must_use]
pub fn settings_fixture() -> SettingsFixture {
    let airplane_mode = State::new(false);
    let wifi = State::new(true);
    let dark_mode = State::new(false);
    let brightness = State::new(70);

    let content = vec![
        Group::new("Connections")
            .inline()
            .content(vec![
                Item::new("Airplane Mode")
                    .key("airplane_mode")
                    .view(factory({
                        let state = airplane_mode.clone();
                        move || Toggle::new("Airplane Mode", state.clone())
                    }))
                    .into(),
                Item::new("Wi-Fi")
                    .key("wifi")
                    .tags(["wireless", "network"])
                    .view(factory({
                        let state = wifi.clone();
                        move || Toggle::new("Wi-Fi", state.clone())
                    }))
                    .into(),
                RawView::new(factory(|| Text::new("Networks nearby").dimmed())).into(),
            ])
            .into(),
        Group::new("General")
            .icon("⚙")
            .content(vec![RawView::new(factory(|| Text::new("Manage your device"))).into()])
            .into(),
        Group::new("Display")
            .icon("☀")
            .content(vec![
                IndexedView::new(factory({
                    let state = dark_mode.clone();
                    move || Toggle::new("Dark Mode", state.clone())
                }))
                .title("Dark Mode")
                .tags(["theme", "appearance"])
                .into(),
                Item::new("Brightness")
                    .key("brightness")
                    .tags(["screen"])
                    .view(factory({
                        let state = brightness.clone();
                        move || Stepper::new("Brightness", state.clone(), 0, 100, 10)
                    }))
                    .into(),
                RawView::new(factory(|| Text::new("Night Shift reduces blue light"))).into(),
            ])
            .into(),
        CustomGroup::new("Credits")
            .icon_view(icon_factory(|| "★".to_string()))
            .view(factory(|| Text::new("Made with care")))
            .into(),
    ];

    SettingsFixture {
        content,
        airplane_mode,
        wifi,
        dark_mode,
        brightness,
    }
}
