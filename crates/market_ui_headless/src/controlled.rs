//! Controlled/uncontrolled value ownership.
//!
//! The mode is fixed when the holder is built: a caller-supplied value makes it controlled for
//! the rest of the widget's lifetime, regardless of later inputs. All writes go through
//! [`Controllable::request`], which branches on that mode.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Who owns the authoritative value.
pub enum ControlMode {
    /// The caller owns the value; the widget only requests changes.
    Controlled,
    /// The widget owns the value after seeding it from a default.
    Uncontrolled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A value whose ownership mode is resolved once at construction.
pub struct Controllable<T> {
    mode: ControlMode,
    current: T,
}

impl<T: Clone + PartialEq> Controllable<T> {
    /// Resolves the mode from `controlled`; `default` seeds uncontrolled state exactly once.
    pub fn resolve(controlled: Option<T>, default: impl FnOnce() -> T) -> Self {
        match controlled {
            Some(current) => Self {
                mode: ControlMode::Controlled,
                current,
            },
            None => Self {
                mode: ControlMode::Uncontrolled,
                current: default(),
            },
        }
    }

    /// Builds an uncontrolled holder seeded with `initial`.
    pub fn uncontrolled(initial: T) -> Self {
        Self::resolve(None, || initial)
    }

    /// Builds a controlled holder mirroring `value`.
    pub fn controlled(value: T) -> Self {
        Self {
            mode: ControlMode::Controlled,
            current: value,
        }
    }

    /// Resolved ownership mode.
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        self.mode == ControlMode::Controlled
    }

    /// Value currently displayed.
    pub fn get(&self) -> &T {
        &self.current
    }

    /// Requests a change to `next`.
    ///
    /// Uncontrolled holders store the value immediately; controlled holders leave it untouched
    /// until the caller echoes it back through [`Controllable::sync`]. Either way the requested
    /// value is returned so it can be reported to the caller's change callback.
    pub fn request(&mut self, next: T) -> T {
        if self.mode == ControlMode::Uncontrolled {
            self.current = next.clone();
        }
        next
    }

    /// Mirrors an externally supplied value. Uncontrolled holders ignore it.
    ///
    /// Returns `true` when the displayed value changed.
    pub fn sync(&mut self, external: T) -> bool {
        if self.mode == ControlMode::Uncontrolled || self.current == external {
            return false;
        }
        self.current = external;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn supplied_value_makes_holder_controlled() {
        let mut value = Controllable::resolve(Some(Some("a")), || Some("default"));
        assert_eq!(value.mode(), ControlMode::Controlled);
        assert_eq!(value.request(Some("b")), Some("b"));
        assert_eq!(value.get(), &Some("a"));
        assert!(value.sync(Some("b")));
        assert_eq!(value.get(), &Some("b"));
    }

    #[test]
    fn controlled_none_is_still_controlled() {
        let value: Controllable<Option<&str>> = Controllable::resolve(Some(None), || Some("x"));
        assert!(value.is_controlled());
        assert_eq!(value.get(), &None);
    }

    #[test]
    fn default_seeds_uncontrolled_once() {
        let mut value = Controllable::resolve(None, || Some("seed"));
        assert_eq!(value.mode(), ControlMode::Uncontrolled);
        assert_eq!(value.get(), &Some("seed"));

        value.request(Some("next"));
        assert_eq!(value.get(), &Some("next"));
        assert!(!value.sync(Some("seed")));
        assert_eq!(value.get(), &Some("next"));
    }

    #[test]
    fn requesting_the_current_value_is_still_reported() {
        let mut uncontrolled = Controllable::resolve(None, || Some("shipped"));
        assert_eq!(uncontrolled.request(Some("shipped")), Some("shipped"));
        assert_eq!(uncontrolled.get(), &Some("shipped"));

        let mut controlled = Controllable::resolve(Some(Some("shipped")), || None);
        assert_eq!(controlled.request(Some("shipped")), Some("shipped"));
        assert_eq!(controlled.get(), &Some("shipped"));
    }
}
