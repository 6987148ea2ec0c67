/// Hero heading being revealed one character per tick.
#[derive(Debug, Clone)]
pub struct TypingState {
    pub(in crate::page) chars: Vec<char>,
    pub(in crate::page) shown: usize,
}

impl TypingState {
    pub(in crate::page) fn new(text: &str) -> Self {
        TypingState {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub(in crate::page) fn is_complete(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Reveal one more character; returns the visible prefix, or `None` once
    /// the whole text is already shown.
    pub(in crate::page) fn advance(&mut self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::TypingState;

    #[test]
    fn advances_by_whole_characters() {
        let mut typing = TypingState::new("Hé!");
        assert_eq!(typing.advance().as_deref(), Some("H"));
        assert_eq!(typing.advance().as_deref(), Some("Hé"));
        assert_eq!(typing.advance().as_deref(), Some("Hé!"));
        assert!(typing.is_complete());
        assert_eq!(typing.advance(), None);
    }
}
