use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::hash::HashRule;

fn default_enabled() -> bool {
    true
}

fn default_sheet_name() -> String {
    "New Sheet".to_string()
}

// Um sheet é um pass de tradução: seus hashes são aplicados juntos, na ordem em que
// aparecem. Vários sheets permitem iterar sobre o output (fonética, depois sufixos...).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TranslateSheet {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_sheet_name")]
    pub name: String,

    #[serde(default, alias = "hashes")]
    pub rules: Vec<HashRule>,
}

impl Default for TranslateSheet {
    fn default() -> Self {
        TranslateSheet {
            enabled: true,
            name: default_sheet_name(),
            rules: vec![HashRule::default()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Input,
    Output,
    Kind,
}

impl TranslateSheet {
    // Ordenação estável usada pelo editor. Reordenar uma lista já ordenada inverte
    // ela (toggle asc/desc sem precisar guardar a direção em lugar nenhum).
    pub fn sort_rules(&mut self, key: SortKey) {
        let sorted = self
            .rules
            .windows(2)
            .all(|pair| cmp_rules(&pair[0], &pair[1], key) != Ordering::Greater);

        if sorted {
            self.rules.reverse();
        } else {
            self.rules.sort_by(|a, b| cmp_rules(a, b, key));
        }
    }
}

fn cmp_rules(a: &HashRule, b: &HashRule, key: SortKey) -> Ordering {
    match key {
        SortKey::Input => a.input.cmp(&b.input),
        SortKey::Output => a.output.cmp(&b.output),
        SortKey::Kind => a.kind.cmp(&b.kind),
    }
}

// Raiz de um projeto FanLang: metadados + sheets de tradução.
// O id é opaco, nasce no primeiro save e identifica o arquivo entre sessões.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LanguageData {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, alias = "translate_sheets")]
    pub sheets: Vec<TranslateSheet>,
}

impl LanguageData {
    pub fn new(name: &str) -> Self {
        LanguageData {
            id: String::new(),
            name: name.to_string(),
            description: String::new(),
            sheets: vec![TranslateSheet::default()],
        }
    }
}
