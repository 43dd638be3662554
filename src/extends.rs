//! Inheritance / conformance list.
//!
//! Mirrors Swift: at most one superclass, any number of protocols.
//! 1. seed with the superclass, if any;
//! 2. explicit `inherits` replaces the list, except on structs;
//! 3. protocols are appended only when there is no superclass.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub extends: Vec<String>,
    /// `inherits` was given but dropped because the model is a struct
    pub inherits_ignored: bool,
}

pub fn compose_extends(
    super_class: Option<&str>,
    inherits: &[String],
    protocols: &[String],
    is_struct: bool,
) -> Composition {
    let mut extends: Vec<String> = super_class.map(str::to_owned).into_iter().collect();
    let mut inherits_ignored = false;

    if !inherits.is_empty() {
        if is_struct {
            tracing::warn!("inheritance ignored with struct");
            inherits_ignored = true;
        } else {
            extends = inherits.to_vec();
        }
    }

    if super_class.is_none() {
        extends.extend(protocols.iter().cloned());
    }

    Composition { extends, inherits_ignored }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn explicit_inherits_replace_superclass() {
        let c = compose_extends(Some("Base"), &strings(&["A", "B"]), &[], false);
        assert_eq!(c.extends, strings(&["A", "B"]));
        assert!(!c.inherits_ignored);
    }

    #[test]
    fn structs_ignore_inherits() {
        let c = compose_extends(Some("Base"), &strings(&["A", "B"]), &[], true);
        assert_eq!(c.extends, strings(&["Base"]));
        assert!(c.inherits_ignored);
    }

    #[test]
    fn protocols_only_without_superclass() {
        let c = compose_extends(Some("Base"), &[], &strings(&["P1"]), false);
        assert_eq!(c.extends, strings(&["Base"]));

        let c = compose_extends(None, &[], &strings(&["P1", "P2"]), false);
        assert_eq!(c.extends, strings(&["P1", "P2"]));
    }

    #[test]
    fn inherits_then_protocols() {
        let c = compose_extends(None, &strings(&["A"]), &strings(&["P1"]), false);
        assert_eq!(c.extends, strings(&["A", "P1"]));

        let c = compose_extends(None, &strings(&["A"]), &strings(&["P1"]), true);
        assert_eq!(c.extends, strings(&["P1"]));
    }

    #[test]
    fn nothing_to_compose() {
        let c = compose_extends(None, &[], &[], false);
        assert!(c.extends.is_empty());
    }
}
