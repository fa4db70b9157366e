//! Application-level theme holder
//!
//! `ThemeHolder` owns the current `Arc<Theme>` for an application and tells
//! subscribers when it is replaced. It is an ordinary value that callers
//! create and pass around; nothing in the engine reaches for it globally.
//! Widgets that need a theme take a `&Theme` (or clone the `Arc`) from
//! [`ThemeHolder::current`].

use crate::error::ThemeError;
use crate::settings::{SettingsStore, ThemeSettings};
use crate::theme::{ColorScheme, Theme};
use std::convert::Infallible;
use std::sync::{Arc, Mutex, RwLock};

type Listener = Arc<dyn Fn(&Arc<Theme>) + Send + Sync>;

/// Current theme plus change notification
pub struct ThemeHolder {
    current: RwLock<Arc<Theme>>,
    listeners: Mutex<Vec<Listener>>,
    store: Option<Box<dyn SettingsStore>>,
    // held from reading the current theme until the derived one is saved
    update: Mutex<()>,
}

impl ThemeHolder {
    pub fn new(theme: Theme) -> Self {
        Self {
            current: RwLock::new(Arc::new(theme)),
            listeners: Mutex::new(Vec::new()),
            store: None,
            update: Mutex::new(()),
        }
    }

    /// Holder that saves every applied change through `store`.
    pub fn with_store(theme: Theme, store: Box<dyn SettingsStore>) -> Self {
        Self {
            store: Some(store),
            ..Self::new(theme)
        }
    }

    /// The current snapshot. Later changes never affect a snapshot already
    /// handed out.
    pub fn current(&self) -> Arc<Theme> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// Register a callback invoked with the new theme after every change.
    ///
    /// Callbacks run on the thread that made the change, after the change is
    /// saved. They may read or change the theme themselves.
    pub fn subscribe(&self, listener: impl Fn(&Arc<Theme>) + Send + Sync + 'static) {
        self.listeners.lock().unwrap().push(Arc::new(listener));
    }

    /// Load saved settings from the store and apply them.
    ///
    /// Returns `Ok(false)` when there is no store or nothing saved. Invalid
    /// saved settings are rejected and the current theme stays active.
    pub fn restore(&self) -> Result<bool, ThemeError> {
        let Some(store) = &self.store else {
            return Ok(false);
        };
        let theme = {
            let _update = self.update.lock().unwrap();
            let Some(settings) = store.load()? else {
                return Ok(false);
            };
            let theme = self.current().with_settings(&settings)?;
            tracing::debug!("ThemeHolder::restore - applying saved settings");
            self.swap(theme)
        };
        self.notify(&theme);
        Ok(true)
    }

    /// Validate `settings` against the current token sets and make the result
    /// current. On error the previous theme remains active.
    pub fn apply_settings(&self, settings: &ThemeSettings) -> Result<Arc<Theme>, ThemeError> {
        self.update(|current| Ok::<_, ThemeError>(Some(current.with_settings(settings)?)))
    }

    /// Replace the current theme with an already-validated one.
    pub fn set_theme(&self, theme: Theme) -> Arc<Theme> {
        self.update_infallible(|_| Some(theme))
    }

    /// Set the color scheme. No-op (and no notification) if unchanged.
    pub fn set_scheme(&self, scheme: ColorScheme) -> Arc<Theme> {
        self.update_infallible(|current| {
            if current.scheme() == scheme {
                return None;
            }
            tracing::debug!(
                "ThemeHolder::set_scheme - switching from {:?} to {:?}",
                current.scheme(),
                scheme
            );
            Some(current.with_scheme(scheme))
        })
    }

    /// Toggle between light and dark mode
    pub fn toggle_scheme(&self) -> Arc<Theme> {
        self.update_infallible(|current| Some(current.with_scheme(current.scheme().toggle())))
    }

    /// Derive, publish and save one change while holding the update lock,
    /// then notify listeners. `derive` returning `None` leaves the theme as is.
    fn update<E>(
        &self,
        derive: impl FnOnce(&Theme) -> Result<Option<Theme>, E>,
    ) -> Result<Arc<Theme>, E> {
        let theme = {
            let _update = self.update.lock().unwrap();
            let current = self.current();
            let Some(theme) = derive(&current)? else {
                return Ok(current);
            };
            let theme = self.swap(theme);
            self.persist(&theme.to_settings());
            theme
        };
        self.notify(&theme);
        Ok(theme)
    }

    fn update_infallible(&self, derive: impl FnOnce(&Theme) -> Option<Theme>) -> Arc<Theme> {
        match self.update(|current| Ok::<_, Infallible>(derive(current))) {
            Ok(theme) => theme,
            Err(never) => match never {},
        }
    }

    fn swap(&self, theme: Theme) -> Arc<Theme> {
        let theme = Arc::new(theme);
        *self.current.write().unwrap() = Arc::clone(&theme);
        theme
    }

    fn notify(&self, theme: &Arc<Theme>) {
        let listeners: Vec<Listener> = self.listeners.lock().unwrap().clone();
        for listener in listeners {
            listener(theme);
        }
    }

    fn persist(&self, settings: &ThemeSettings) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(settings) {
                tracing::warn!("failed to save theme settings: {err}");
            }
        }
    }
}

impl Default for ThemeHolder {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    /// Store whose first save reports that it started, then stalls.
    struct SlowStore {
        inner: Arc<MemoryStore>,
        started: Mutex<Option<mpsc::Sender<()>>>,
    }

    impl SettingsStore for SlowStore {
        fn load(&self) -> Result<Option<ThemeSettings>, ThemeError> {
            self.inner.load()
        }

        fn save(&self, settings: &ThemeSettings) -> Result<(), ThemeError> {
            if let Some(started) = self.started.lock().unwrap().take() {
                started.send(()).unwrap();
                thread::sleep(Duration::from_millis(50));
            }
            self.inner.save(settings)
        }
    }

    #[test]
    fn old_snapshots_survive_changes() {
        let holder = ThemeHolder::default();
        let before = holder.current();
        let settings = ThemeSettings {
            primary_shade: 5,
            ..ThemeSettings::default()
        };
        let after = holder.apply_settings(&settings).unwrap();

        assert_eq!(before.get_primary_color().unwrap(), "#228be6");
        assert_eq!(after.get_primary_color().unwrap(), "#339af0");
        assert!(Arc::ptr_eq(&after, &holder.current()));
    }

    #[test]
    fn invalid_settings_keep_previous_theme() {
        let holder = ThemeHolder::default();
        let before = holder.current();
        let settings = ThemeSettings {
            radius: [("xs".to_string(), -1)].into_iter().collect(),
            ..ThemeSettings::default()
        };
        assert!(holder.apply_settings(&settings).is_err());
        assert!(Arc::ptr_eq(&before, &holder.current()));
    }

    #[test]
    fn subscribers_see_each_change() {
        let holder = ThemeHolder::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        holder.subscribe(move |theme| {
            assert_eq!(theme.scheme(), ColorScheme::Dark);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        holder.set_scheme(ColorScheme::Dark);
        holder.set_scheme(ColorScheme::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn changes_are_persisted_and_restored() {
        let holder = ThemeHolder::with_store(Theme::default(), Box::new(MemoryStore::new()));
        holder.toggle_scheme();

        let json = match &holder.store {
            Some(store) => store.load().unwrap().unwrap().to_json().unwrap(),
            None => unreachable!(),
        };
        let restored = ThemeHolder::with_store(Theme::default(), Box::new(MemoryStore::with_json(json)));
        assert!(restored.restore().unwrap());
        assert_eq!(restored.current().scheme(), ColorScheme::Dark);
    }

    #[test]
    fn invalid_saved_settings_are_rejected() {
        let store = MemoryStore::with_json(r#"{"primary_color": "magenta"}"#);
        let holder = ThemeHolder::with_store(Theme::default(), Box::new(store));
        assert!(holder.restore().is_err());
        assert_eq!(holder.current().primary_color(), "blue");
    }

    #[test]
    fn concurrent_changes_keep_store_in_step() {
        let saved = Arc::new(MemoryStore::new());
        let (started, saving) = mpsc::channel();
        let store = SlowStore {
            inner: Arc::clone(&saved),
            started: Mutex::new(Some(started)),
        };
        let holder = ThemeHolder::with_store(Theme::default(), Box::new(store));
        let settings = ThemeSettings {
            primary_shade: 5,
            ..ThemeSettings::default()
        };

        thread::scope(|s| {
            let first = s.spawn(|| holder.apply_settings(&settings).unwrap());
            saving.recv().unwrap();
            let second = s.spawn(|| holder.set_scheme(ColorScheme::Dark));
            first.join().unwrap();
            second.join().unwrap();
        });

        let current = holder.current();
        assert_eq!(current.scheme(), ColorScheme::Dark);
        assert_eq!(current.primary_shade(), 5);
        assert_eq!(saved.load().unwrap(), Some(current.to_settings()));
    }

    #[test]
    fn concurrent_toggles_are_not_lost() {
        let holder = ThemeHolder::with_store(Theme::default(), Box::new(MemoryStore::new()));
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        holder.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..25 {
                        holder.toggle_scheme();
                    }
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 200);
        assert_eq!(holder.current().scheme(), ColorScheme::Light);
        let saved = match &holder.store {
            Some(store) => store.load().unwrap(),
            None => unreachable!(),
        };
        assert_eq!(saved, Some(holder.current().to_settings()));
    }

    #[test]
    fn listeners_may_change_the_theme() {
        let holder = Arc::new(ThemeHolder::default());
        let weak = Arc::downgrade(&holder);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        holder.subscribe(move |theme| {
            seen.fetch_add(1, Ordering::SeqCst);
            if theme.scheme() == ColorScheme::Dark {
                if let Some(holder) = weak.upgrade() {
                    holder.set_scheme(ColorScheme::Light);
                }
            }
        });

        holder.set_scheme(ColorScheme::Dark);
        assert_eq!(holder.current().scheme(), ColorScheme::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
