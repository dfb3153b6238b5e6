//! Process-wide widget registry.
//!
//! # Lifecycle
//!
//! The registry is filled once during startup and only read afterwards, so
//! lookups need no locking. Registration is all-or-nothing: a batch that
//! contains a command already present (or repeated within the batch) is
//! rejected and the registry is left as it was.

use std::collections::{HashMap, HashSet};

use crate::error::RegistryError;
use crate::types::WidgetDefinition;

/// Anything the registry can key by command.
pub trait Shortcode {
    fn definition(&self) -> &'static WidgetDefinition;

    fn command(&self) -> &'static str {
        self.definition().command
    }
}

/// Tag → widget table, iterable in registration order.
#[derive(Debug, Clone)]
pub struct WidgetRegistry<W> {
    entries: Vec<W>,
    index: HashMap<&'static str, usize>,
}

impl<W> Default for WidgetRegistry<W> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<W: Shortcode> WidgetRegistry<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every widget in `widgets`, keyed by its command.
    ///
    /// Returns `RegistryError::Duplicate` naming the first clashing command.
    pub fn register(&mut self, widgets: impl IntoIterator<Item = W>) -> Result<(), RegistryError> {
        let batch: Vec<W> = widgets.into_iter().collect();
        let mut seen = HashSet::new();
        for widget in &batch {
            let command = widget.command();
            if self.index.contains_key(command) || !seen.insert(command) {
                return Err(RegistryError::Duplicate {
                    command: command.to_owned(),
                });
            }
        }
        for widget in batch {
            self.index.insert(widget.command(), self.entries.len());
            self.entries.push(widget);
        }
        Ok(())
    }

    /// Look up the widget for `tag`. Tags are case-sensitive.
    pub fn resolve(&self, tag: &str) -> Result<&W, RegistryError> {
        self.index
            .get(tag)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| RegistryError::NotFound { tag: tag.to_owned() })
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &W> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const A: WidgetDefinition = WidgetDefinition {
        command: "a",
        name: "A",
        description: "",
        params: &[],
        accepts_body: false,
        wysiwyg_visible: true,
    };
    const B: WidgetDefinition = WidgetDefinition { command: "b", name: "B", ..A };

    #[derive(Debug, PartialEq)]
    struct Fake(&'static WidgetDefinition);

    impl Shortcode for Fake {
        fn definition(&self) -> &'static WidgetDefinition {
            self.0
        }
    }

    #[test]
    fn resolve_after_register() {
        let mut reg = WidgetRegistry::new();
        reg.register([Fake(&A), Fake(&B)]).expect("register");
        assert_eq!(reg.resolve("b").expect("b").command(), "b");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn unknown_tag_is_not_found() {
        let reg: WidgetRegistry<Fake> = WidgetRegistry::new();
        let err = reg.resolve("zzz").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { ref tag } if tag == "zzz"));
    }

    #[test]
    fn duplicate_across_batches_leaves_registry_unchanged() {
        let mut reg = WidgetRegistry::new();
        reg.register([Fake(&A)]).expect("first");
        let err = reg.register([Fake(&B), Fake(&A)]).unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate { ref command } if command == "a"));
        assert!(!reg.contains("b"), "failed batch must not be partially applied");
    }

    #[test]
    fn duplicate_within_batch_is_rejected() {
        let mut reg = WidgetRegistry::new();
        assert!(reg.register([Fake(&A), Fake(&A)]).is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn iteration_keeps_registration_order() {
        let mut reg = WidgetRegistry::new();
        reg.register([Fake(&B), Fake(&A)]).expect("register");
        let order: Vec<_> = reg.iter().map(Shortcode::command).collect();
        assert_eq!(order, ["b", "a"]);
    }
}
