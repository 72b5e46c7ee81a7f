/// Keyboard shortcuts that replace the browser's own Ctrl bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    Load,
    EndDay,
}

impl Shortcut {
    /// Match a key press; only Ctrl combinations are recognised.
    #[must_use]
    pub fn from_key(ctrl: bool, key: &str) -> Option<Self> {
        if !ctrl {
            return None;
        }
        match key {
            "s" | "S" => Some(Self::Save),
            "l" | "L" => Some(Self::Load),
            "e" | "E" => Some(Self::EndDay),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;

    #[test]
    fn ctrl_is_required() {
        assert_eq!(Shortcut::from_key(true, "s"), Some(Shortcut::Save));
        assert_eq!(Shortcut::from_key(true, "L"), Some(Shortcut::Load));
        assert_eq!(Shortcut::from_key(true, "e"), Some(Shortcut::EndDay));
        assert_eq!(Shortcut::from_key(false, "s"), None);
        assert_eq!(Shortcut::from_key(true, "x"), None);
    }
}
