//! Visit-style matching on `Option`
//!
//! Absence is a normal outcome in this game (no more entities, no touch
//! active), so callers supply a default action instead of checking for null.

/// Invoke exactly one of two branches depending on whether a value is present
pub trait Visit<T> {
    fn visit<U>(self, on_none: impl FnOnce() -> U, on_some: impl FnOnce(T) -> U) -> U;
}

impl<T> Visit<T> for Option<T> {
    #[inline]
    fn visit<U>(self, on_none: impl FnOnce() -> U, on_some: impl FnOnce(T) -> U) -> U {
        match self {
            None => on_none(),
            Some(value) => on_some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_none_runs_none_branch() {
        let value: Option<u32> = None;
        let result = value.visit(|| "none", |_| "some");
        assert_eq!(result, "none");
    }

    #[test]
    fn test_visit_some_passes_value() {
        let result = Some(21).visit(|| 0, |v| v * 2);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_visit_side_effects() {
        let log = std::cell::RefCell::new(Vec::new());
        Some('a').visit(|| log.borrow_mut().push('-'), |c| log.borrow_mut().push(c));
        None::<char>.visit(|| log.borrow_mut().push('-'), |c| log.borrow_mut().push(c));
        assert_eq!(*log.borrow(), vec!['a', '-']);
    }
}
