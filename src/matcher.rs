use aho_corasick::AhoCorasick;

use super::error::Result;

/// "Does the haystack contain any of these entries?" over a fixed keyword table.
///
/// All entries are compiled into a single Aho-Corasick automaton so a lookup is
/// one pass over the haystack regardless of table size.
pub(crate) struct KeywordMatcher {
    automaton: AhoCorasick,
    len: usize,
}

impl KeywordMatcher {
    pub fn build<I, P>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let entries: Vec<P> = entries.into_iter().collect();
        let len = entries.len();
        let automaton = AhoCorasick::new(entries)?;
        Ok(Self { automaton, len })
    }

    /// An empty table never matches.
    pub fn matches(&self, haystack: impl AsRef<[u8]>) -> bool {
        self.len > 0 && self.automaton.is_match(haystack.as_ref())
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl std::fmt::Debug for KeywordMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordMatcher")
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_substring() {
        let m = KeywordMatcher::build(["kindle", "playbook"]).unwrap();
        assert!(m.matches("mozilla/5.0 (linux; u; en-us) kindle/3.0"));
        assert!(m.matches("rim tablet os; playbook"));
        assert!(!m.matches("mozilla/5.0 (x11; linux x86_64)"));
    }

    #[test]
    fn empty_table_never_matches() {
        let m = KeywordMatcher::build(Vec::<String>::new()).unwrap();
        assert_eq!(m.len(), 0);
        assert!(!m.matches("anything"));
        assert!(!m.matches(""));
    }

    #[test]
    fn byte_haystack() {
        let m = KeywordMatcher::build(["noki"]).unwrap();
        assert!(m.matches(&b"nokia6300/2.0"[..4]));
        assert!(!m.matches(&b"nok"[..]));
    }
}
