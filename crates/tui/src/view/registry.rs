//! Screen-id to render-function lookup.
//!
//! Invariants:
//! - Unregistered screens render `placeholder`, never an error.
//! - Render functions are plain `fn` pointers and keep no state between calls.

use std::collections::HashMap;

use crate::collaborators::{Clock, UserIdentity};
use crate::screen::{ScreenId, ScreenParams};
use crate::view::{ContentArea, screens};

/// Read-only data available to render functions.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub identity: &'a dyn UserIdentity,
    pub clock: &'a dyn Clock,
}

impl<'a> RenderContext<'a> {
    pub fn new(identity: &'a dyn UserIdentity, clock: &'a dyn Clock) -> Self {
        Self { identity, clock }
    }
}

/// Builds the content of one screen.
pub type RenderFn = fn(&RenderContext<'_>, &ScreenParams) -> ContentArea;

/// Content shown for screens without a render function.
pub fn placeholder(name: &str) -> ContentArea {
    ContentArea::new()
        .heading(name)
        .label(format!("{name} options coming soon"))
}

/// Mapping from screen to render function.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    renderers: HashMap<ScreenId, RenderFn>,
}

impl ViewRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in screen.
    pub fn with_default_screens() -> Self {
        let mut registry = Self::new();
        registry.register(ScreenId::Home, screens::home);
        registry.register(ScreenId::System, screens::system);
        registry.register(ScreenId::Display, screens::display);
        registry.register(ScreenId::BluetoothDevices, screens::bluetooth_devices);
        registry.register(ScreenId::WindowsUpdate, screens::windows_update);
        registry.register(ScreenId::Accounts, screens::accounts);
        registry.register(ScreenId::NetworkInternet, screens::network_internet);
        registry.register(ScreenId::TimeLanguage, screens::time_language);
        registry.register(ScreenId::Gaming, screens::gaming);
        registry
    }

    /// Register or replace the render function for `screen`.
    pub fn register(&mut self, screen: ScreenId, render: RenderFn) {
        self.renderers.insert(screen, render);
    }

    pub fn is_registered(&self, screen: &ScreenId) -> bool {
        self.renderers.contains_key(screen)
    }

    pub fn get(&self, screen: &ScreenId) -> Option<RenderFn> {
        self.renderers.get(screen).copied()
    }

    /// Render `screen`, falling back to the placeholder when unregistered.
    pub fn render(
        &self,
        ctx: &RenderContext<'_>,
        screen: &ScreenId,
        params: &ScreenParams,
    ) -> ContentArea {
        match self.get(screen) {
            Some(render) => render(ctx, params),
            None => {
                tracing::debug!(screen = %screen, "No renderer registered, using placeholder");
                placeholder(screen.label())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{MockClock, MockUserIdentity};

    fn render(registry: &ViewRegistry, screen: ScreenId) -> ContentArea {
        let identity = MockUserIdentity::new();
        let clock = MockClock::new();
        let ctx = RenderContext::new(&identity, &clock);
        registry.render(&ctx, &screen, &ScreenParams::None)
    }

    #[test]
    fn test_default_registry_leaves_some_screens_unregistered() {
        let registry = ViewRegistry::with_default_screens();
        assert!(registry.is_registered(&ScreenId::Home));
        assert!(registry.is_registered(&ScreenId::Gaming));
        assert!(!registry.is_registered(&ScreenId::Activities));
        assert!(!registry.is_registered(&ScreenId::PrivacySecurity));
    }

    #[test]
    fn test_unregistered_screen_renders_placeholder() {
        let registry = ViewRegistry::with_default_screens();
        let content = render(&registry, ScreenId::Generic("Personalized Apps".to_string()));
        assert_eq!(content, placeholder("Personalized Apps"));
        assert!(content.contains_text("Personalized Apps options coming soon"));
    }

    #[test]
    fn test_register_replaces_renderer() {
        fn custom(_: &RenderContext<'_>, _: &ScreenParams) -> ContentArea {
            ContentArea::new().label("custom")
        }

        let mut registry = ViewRegistry::new();
        registry.register(ScreenId::Activities, custom);
        assert!(render(&registry, ScreenId::Activities).contains_text("custom"));
    }
}
