//! Settings screens declared in TOML
//!
//! A [`Manifest`] describes groups, pages and controls. Instantiating it
//! creates one [`State`] per control, records it in a [`SettingsStore`] and
//! returns the declared [`Content`] with view factories bound to those states.

pub mod error;
mod store;
mod types;

pub use error::{ManifestError, Result};
pub use store::{Binding, SettingValue, SettingsStore};
pub use types::{
    Entry, GroupEntry, Manifest, PageEntry, PickerEntry, SearchMode, StepperEntry, TextEntry,
    ToggleEntry,
};

use crate::content::{Content, CustomGroup, Group, IndexedView, Item, RawView};
use crate::state::State;
use crate::view::{Picker, Stack, Stepper, Text, Toggle, View, ViewFactory, factory, icon_factory};
use std::path::Path;
use std::str::FromStr;
use std::rc::Rc;

/// Manifest used when none is given on the command line
pub const DEMO_MANIFEST: &str = include_str!("../../demos/settings.toml");

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(Into::into)
    }
}

impl Manifest {
    /// Read a manifest from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Io` if the file cannot be read, or
    /// `ManifestError::Parse` if it is not a valid manifest.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Self = text.parse()?;
        tracing::debug!(
            path = %path.display(),
            entries = manifest.content.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Create the live content for this manifest
    ///
    /// Each control gets a fresh state seeded from its default and recorded in
    /// `store` under its key.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::DuplicateKey` when two controls share a key,
    /// and the range or option errors when a control's definition is unusable.
    pub fn instantiate(&self, store: &mut SettingsStore) -> Result<Vec<Content>> {
        instantiate_all(&self.content, store)
    }
}

fn instantiate_all(entries: &[Entry], store: &mut SettingsStore) -> Result<Vec<Content>> {
    entries
        .iter()
        .map(|entry| instantiate(entry, store))
        .collect()
}

fn instantiate(entry: &Entry, store: &mut SettingsStore) -> Result<Content> {
    match entry {
        Entry::Group(group) => {
            let mut declared = Group::new(&group.title)
                .tags(&group.tags)
                .content(instantiate_all(&group.content, store)?);
            if let Some(icon) = &group.icon {
                declared = declared.icon(icon);
            }
            if group.inline {
                declared = declared.inline();
            }
            Ok(declared.into())
        }
        Entry::Page(page) => {
            let lines = page.lines.clone();
            let mut declared = CustomGroup::new(&page.title)
                .tags(&page.tags)
                .view(Rc::new(move || {
                    let rows = lines
                        .iter()
                        .map(|line| Box::new(Text::new(line.clone())) as Box<dyn View>)
                        .collect();
                    Box::new(Stack::new(rows)) as Box<dyn View>
                }));
            if let Some(icon) = page.icon.clone() {
                declared = declared.icon_view(icon_factory(move || icon.clone()));
            }
            Ok(declared.into())
        }
        Entry::Toggle(toggle) => {
            let state = State::new(toggle.default);
            store.insert(&toggle.key, Binding::Bool(state.clone()))?;
            let title = toggle.title.clone();
            let view = factory(move || Toggle::new(title.clone(), state.clone()));
            Ok(control(
                &toggle.key,
                &toggle.title,
                toggle.icon.as_deref(),
                &toggle.tags,
                toggle.search,
                view,
            ))
        }
        Entry::Stepper(stepper) => {
            let StepperEntry { key, min, max, step, .. } = stepper;
            if min > max || *step <= 0 {
                return Err(ManifestError::InvalidRange {
                    key: key.clone(),
                    min: *min,
                    max: *max,
                    step: *step,
                });
            }
            let default = stepper.default.unwrap_or(*min);
            if !(*min..=*max).contains(&default) {
                return Err(ManifestError::DefaultOutOfRange {
                    key: key.clone(),
                    value: default.to_string(),
                });
            }

            let state = State::new(default);
            store.insert(key, Binding::Int(state.clone()))?;
            let (title, min, max, step) = (stepper.title.clone(), *min, *max, *step);
            let view = factory(move || Stepper::new(title.clone(), state.clone(), min, max, step));
            Ok(control(
                key,
                &stepper.title,
                stepper.icon.as_deref(),
                &stepper.tags,
                stepper.search,
                view,
            ))
        }
        Entry::Picker(picker) => {
            if picker.options.is_empty() {
                return Err(ManifestError::EmptyOptions(picker.key.clone()));
            }
            let selected = match &picker.default {
                None => 0,
                Some(default) => picker
                    .options
                    .iter()
                    .position(|option| option == default)
                    .ok_or_else(|| ManifestError::DefaultOutOfRange {
                        key: picker.key.clone(),
                        value: default.clone(),
                    })?,
            };

            let state = State::new(selected);
            let options: Rc<[String]> = picker.options.clone().into();
            store.insert(
                &picker.key,
                Binding::Choice {
                    state: state.clone(),
                    options: Rc::clone(&options),
                },
            )?;
            let title = picker.title.clone();
            let view = factory(move || {
                Picker::new(title.clone(), Rc::clone(&options), state.clone())
            });
            Ok(control(
                &picker.key,
                &picker.title,
                picker.icon.as_deref(),
                &picker.tags,
                picker.search,
                view,
            ))
        }
        Entry::Text(text) => Ok(text_content(text)),
    }
}

fn control(
    key: &str,
    title: &str,
    icon: Option<&str>,
    tags: &[String],
    search: SearchMode,
    view: ViewFactory,
) -> Content {
    match search {
        SearchMode::Indexed => IndexedView::new(view).title(title).tags(tags).into(),
        SearchMode::Item | SearchMode::Hidden => {
            let mut item = Item::new(title)
                .key(key)
                .tags(tags)
                .searchable(search == SearchMode::Item)
                .view(view);
            if let Some(icon) = icon {
                item = item.icon(icon);
            }
            item.into()
        }
    }
}

fn text_content(entry: &TextEntry) -> Content {
    let (text, dimmed) = (entry.text.clone(), entry.dimmed);
    let view = factory(move || {
        let view = Text::new(text.clone());
        if dimmed { view.dimmed() } else { view }
    });

    match entry.search.unwrap_or(SearchMode::Hidden) {
        SearchMode::Hidden => RawView::new(view).into(),
        SearchMode::Item => Item::new(entry.title.as_deref().unwrap_or(&entry.text))
            .tags(&entry.tags)
            .view(view)
            .into(),
        SearchMode::Indexed => {
            let indexed = IndexedView::new(view).tags(&entry.tags);
            match &entry.title {
                Some(title) => indexed.title(title).into(),
                None => indexed.into(),
            }
        }
    }
}
