//! Composable conditions that suppress camera gestures.

/// A predicate that, while true, blocks user-driven camera gestures.
///
/// Implemented for any `Fn() -> bool`, so ad-hoc conditions can be
/// registered as closures:
///
/// ```ignore
/// let tool_active = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&tool_active);
/// interactor.gate_mut().insert("measure_tool", move || flag.get());
/// ```
pub trait BlockCondition {
    /// Whether gestures are currently blocked by this condition.
    fn is_blocking(&self) -> bool;
}

impl<F: Fn() -> bool> BlockCondition for F {
    fn is_blocking(&self) -> bool {
        self()
    }
}

/// Tagged set of [`BlockCondition`]s, evaluated in insertion order.
#[derive(Default)]
pub struct Gate {
    conditions: Vec<(&'static str, Box<dyn BlockCondition>)>,
}

impl Gate {
    /// Empty gate that never blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `condition` under `tag`, replacing any condition with the
    /// same tag.
    pub fn insert(
        &mut self,
        tag: &'static str,
        condition: impl BlockCondition + 'static,
    ) {
        let boxed: Box<dyn BlockCondition> = Box::new(condition);
        if let Some(slot) = self.conditions.iter_mut().find(|(t, _)| *t == tag) {
            slot.1 = boxed;
        } else {
            self.conditions.push((tag, boxed));
        }
    }

    /// Remove the condition registered under `tag`. Returns whether one was
    /// present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.conditions.len();
        self.conditions.retain(|(t, _)| *t != tag);
        self.conditions.len() != before
    }

    /// Whether a condition is registered under `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.conditions.iter().any(|(t, _)| *t == tag)
    }

    /// Tag of the first condition currently blocking, if any.
    #[must_use]
    pub fn blocking_tag(&self) -> Option<&'static str> {
        self.conditions
            .iter()
            .find(|(_, condition)| condition.is_blocking())
            .map(|(tag, _)| *tag)
    }

    /// Whether any condition is blocking.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocking_tag().is_some()
    }

    /// Number of registered conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether no conditions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl std::fmt::Debug for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tags: Vec<&str> = self.conditions.iter().map(|(t, _)| *t).collect();
        f.debug_struct("Gate").field("conditions", &tags).finish()
    }
}
