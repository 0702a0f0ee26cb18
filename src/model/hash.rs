use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

// Contexto gramatical em que o output pode ser usado.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HashKind {
    Default,
    Prefix,
    Suffix,
    Word,
}

impl Default for HashKind {
    fn default() -> Self {
        HashKind::Default
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HashRule {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub input: String,

    #[serde(default)]
    pub output: String,

    #[serde(default, alias = "hash_type")]
    pub kind: HashKind,
}

impl Default for HashRule {
    fn default() -> Self {
        HashRule {
            enabled: true,
            input: String::new(),
            output: String::new(),
            kind: HashKind::Default,
        }
    }
}

impl HashRule {
    pub fn new(input: &str, output: &str, kind: HashKind) -> Self {
        HashRule {
            enabled: true,
            input: input.to_string(),
            output: output.to_string(),
            kind,
        }
    }

    // Um hash só participa da tradução se estiver habilitado e tiver input real.
    // Output vazio só passa quando o modo "outputs vazios" estiver ligado.
    pub fn is_active(&self, allow_empty_outputs: bool) -> bool {
        self.enabled
            && !self.input.trim().is_empty()
            && (allow_empty_outputs || !self.output.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_requires_enabled_and_input() {
        let mut rule = HashRule::new("ka", "sha", HashKind::Default);
        assert!(rule.is_active(false));

        rule.enabled = false;
        assert!(!rule.is_active(false));

        rule.enabled = true;
        rule.input = "   ".to_string();
        assert!(!rule.is_active(false));
    }

    #[test]
    fn empty_output_only_active_when_allowed() {
        let rule = HashRule::new("ka", "", HashKind::Default);
        assert!(!rule.is_active(false));
        assert!(rule.is_active(true));

        let blank = HashRule::new("ka", "  ", HashKind::Default);
        assert!(!blank.is_active(false));
        assert!(blank.is_active(true));
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&HashKind::Word).unwrap();
        assert_eq!(json, "\"word\"");

        let kind: HashKind = serde_json::from_str("\"prefix\"").unwrap();
        assert_eq!(kind, HashKind::Prefix);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let rule: HashRule = serde_json::from_str("{}").unwrap();
        assert!(rule.enabled);
        assert!(rule.input.is_empty());
        assert!(rule.output.is_empty());
        assert_eq!(rule.kind, HashKind::Default);
    }
}
