use crate::*;

/// The alpha-beta bounds carried down one line of recursion.
///
/// `alpha` is the value the root player is already guaranteed elsewhere,
/// `beta` the value the opponent is already guaranteed elsewhere. The
/// window is `Copy` and passed by value: a child sees its ancestors'
/// bounds, and its own tightening is reported back only as a return value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub alpha: Utility,
    pub beta: Utility,
}

impl Default for Window {
    fn default() -> Self {
        Self::new(Utility::NEG_INFINITY, Utility::INFINITY)
    }
}

impl Window {
    pub fn new(alpha: Utility, beta: Utility) -> Self {
        Self { alpha, beta }
    }
    /// Lifts the lower bound after a maximizing child reports `value`.
    pub fn raise(self, value: Utility) -> Self {
        Self::new(self.alpha.max(value), self.beta)
    }
    /// Drops the upper bound after a minimizing child reports `value`.
    pub fn lower(self, value: Utility) -> Self {
        Self::new(self.alpha, self.beta.min(value))
    }
    /// No remaining sibling can influence the decision above.
    pub fn is_closed(&self) -> bool {
        self.alpha >= self.beta
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:+.2}, {:+.2}]", self.alpha, self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let window = Window::default();
        assert_eq!(window.alpha, Utility::NEG_INFINITY);
        assert_eq!(window.beta, Utility::INFINITY);
        assert!(!window.is_closed());
    }

    #[test]
    fn bounds_only_tighten() {
        let window = Window::new(1., 5.).raise(0.).lower(9.);
        assert_eq!(window, Window::new(1., 5.));
        let window = window.raise(3.).lower(4.);
        assert_eq!(window, Window::new(3., 4.));
    }

    #[test]
    fn touching_bounds_close() {
        assert!(Window::new(2., 5.).raise(5.).is_closed());
        assert!(Window::new(2., 5.).lower(2.).is_closed());
        assert!(!Window::new(2., 5.).lower(2.5).is_closed());
    }
}
