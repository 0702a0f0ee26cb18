use std::collections::HashMap;

use crate::model::hash::{HashKind, HashRule};
use crate::model::language::TranslateSheet;

// Tabela de consulta compilada a partir de um sheet: input em minúsculas -> hashes
// daquele input na ordem do sheet, mais o comprimento do maior input incluído
// (limite superior da busca por match mais longo).
pub struct RuleTable {
    buckets: HashMap<String, Vec<HashRule>>,
    longest_input: usize,
}

impl RuleTable {
    pub fn build(sheet: &TranslateSheet, allow_empty_outputs: bool) -> Self {
        let mut buckets: HashMap<String, Vec<HashRule>> = HashMap::new();
        let mut longest_input = 0usize;

        for rule in &sheet.rules {
            // Hash desabilitado ou sem dados não entra na tabela; nunca é erro.
            if !rule.is_active(allow_empty_outputs) {
                continue;
            }

            let key = rule.input.to_lowercase();
            let length = key.chars().count();

            buckets.entry(key).or_default().push(rule.clone());

            if length > longest_input {
                longest_input = length;
            }
        }

        RuleTable {
            buckets,
            longest_input,
        }
    }

    pub fn longest_input(&self) -> usize {
        self.longest_input
    }

    pub fn get(&self, input_lower: &str) -> Option<&[HashRule]> {
        self.buckets.get(input_lower).map(|rules| rules.as_slice())
    }
}

// Prioridade fixa por posição gramatical: Word > Prefix > Suffix > Default.
// Inputs repetidos com o mesmo tipo resolvem pro primeiro na ordem do sheet.
pub fn resolve_output(rules: &[HashRule], prefix: bool, suffix: bool) -> Option<&str> {
    let first = |kind: HashKind| {
        rules
            .iter()
            .find(|rule| rule.kind == kind)
            .map(|rule| rule.output.as_str())
    };

    if prefix && suffix {
        if let Some(output) = first(HashKind::Word) {
            return Some(output);
        }
    }
    if prefix {
        if let Some(output) = first(HashKind::Prefix) {
            return Some(output);
        }
    }
    if suffix {
        if let Some(output) = first(HashKind::Suffix) {
            return Some(output);
        }
    }

    first(HashKind::Default)
}
