//! Reserved strings the formatter emits in place of a path.
//!
//! The `[invalid ...]` family is recognised by the resolver and resolves to
//! nothing without a diagnostic. The `[null ...]` family is only ever produced
//! by the scene-component formatter; the resolver does not special-case it, so
//! it fails like any other unparsable path.

pub const INVALID_WORLD: &str = "[invalid world]";
pub const INVALID_LEVEL: &str = "[invalid level]";
pub const INVALID_ACTOR: &str = "[invalid actor]";
pub const INVALID_COMPONENT: &str = "[invalid component]";

pub const NULL_COMPONENT: &str = "[null Component]";
pub const NULL_WORLD: &str = "[null World]";
pub const NULL_LEVEL: &str = "[null Level]";
pub const NULL_ACTOR: &str = "[null Actor]";

/// Returns true for inputs the resolver rejects before parsing: the empty
/// string and the world/level/actor sentinels.
pub fn is_silenced(path: &str) -> bool {
    path.is_empty() || matches!(path, INVALID_WORLD | INVALID_LEVEL | INVALID_ACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_family_is_silenced() {
        assert!(is_silenced(""));
        assert!(is_silenced(INVALID_WORLD));
        assert!(is_silenced(INVALID_LEVEL));
        assert!(is_silenced(INVALID_ACTOR));
    }

    #[test]
    fn test_null_family_is_not_silenced() {
        for sentinel in [NULL_COMPONENT, NULL_WORLD, NULL_LEVEL, NULL_ACTOR] {
            assert!(!is_silenced(sentinel), "{sentinel} should not be silenced");
        }
        // Only the three prerequisite sentinels short-circuit.
        assert!(!is_silenced(INVALID_COMPONENT));
    }
}
