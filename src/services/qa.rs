use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::hash::HashKind;
use crate::model::language::LanguageData;

#[derive(Debug, Serialize, Deserialize)]
pub struct QaIssue {
    pub sheet: usize,
    pub rule: Option<usize>,
    pub code: String,
    pub message: String,
}

// Lints sobre o idioma carregado. Nada aqui bloqueia tradução: o engine filtra
// dado ruim sozinho, o QA só explica pro usuário o que foi filtrado e por quê.
pub fn run(language: &LanguageData) -> Vec<QaIssue> {
    let mut issues: Vec<QaIssue> = Vec::new();

    // Tag de marcação dentro do input nunca casa: o scanner pula tags antes de
    // consultar a tabela.
    let markup_re = Regex::new(r"</?[^<>]+>").unwrap();

    for (s, sheet) in language.sheets.iter().enumerate() {
        if !sheet.enabled {
            issues.push(QaIssue {
                sheet: s,
                rule: None,
                code: "SHEET_DISABLED".to_string(),
                message: "Sheet desabilitado: será pulado na tradução".to_string(),
            });
        }

        if sheet.rules.is_empty() {
            issues.push(QaIssue {
                sheet: s,
                rule: None,
                code: "EMPTY_SHEET".to_string(),
                message: "Sheet sem hashes".to_string(),
            });
            continue;
        }

        let mut seen: Vec<(String, HashKind)> = Vec::new();

        for (r, rule) in sheet.rules.iter().enumerate() {
            // QA só faz sentido para hashes habilitados
            if !rule.enabled {
                continue;
            }

            let input_trim = rule.input.trim();
            let output_trim = rule.output.trim();

            if input_trim.is_empty() {
                issues.push(QaIssue {
                    sheet: s,
                    rule: Some(r),
                    code: "EMPTY_INPUT".to_string(),
                    message: "Hash habilitado sem input: nunca entra na tabela".to_string(),
                });
                continue;
            }

            if output_trim.is_empty() {
                issues.push(QaIssue {
                    sheet: s,
                    rule: Some(r),
                    code: "EMPTY_OUTPUT".to_string(),
                    message: "Hash habilitado sem output: ignorado a menos que outputs vazios estejam liberados".to_string(),
                });
            }

            if markup_re.is_match(&rule.input) {
                issues.push(QaIssue {
                    sheet: s,
                    rule: Some(r),
                    code: "MARKUP_IN_INPUT".to_string(),
                    message: "Input contém tag de marcação e nunca vai casar".to_string(),
                });
            }

            let key = (rule.input.to_lowercase(), rule.kind);
            if seen.contains(&key) {
                issues.push(QaIssue {
                    sheet: s,
                    rule: Some(r),
                    code: "DUPLICATE_RULE".to_string(),
                    message: "Input e tipo repetidos no sheet: só o primeiro vale".to_string(),
                });
            } else {
                seen.push(key);
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hash::HashRule;
    use crate::model::language::TranslateSheet;

    fn language(sheets: Vec<TranslateSheet>) -> LanguageData {
        LanguageData {
            id: String::new(),
            name: "Test".to_string(),
            description: String::new(),
            sheets,
        }
    }

    fn sheet(rules: Vec<HashRule>) -> TranslateSheet {
        TranslateSheet {
            enabled: true,
            name: "Test".to_string(),
            rules,
        }
    }

    fn codes(issues: &[QaIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn clean_language_has_no_issues() {
        let data = language(vec![sheet(vec![
            HashRule::new("ka", "sha", HashKind::Default),
            HashRule::new("ka", "shu", HashKind::Suffix),
        ])]);

        assert!(run(&data).is_empty());
    }

    #[test]
    fn flags_empty_fields_and_duplicates() {
        let data = language(vec![sheet(vec![
            HashRule::new("", "x", HashKind::Default),
            HashRule::new("ka", "", HashKind::Default),
            HashRule::new("mi", "ru", HashKind::Default),
            HashRule::new("MI", "zu", HashKind::Default),
        ])]);

        let issues = run(&data);
        assert_eq!(codes(&issues), vec!["EMPTY_INPUT", "EMPTY_OUTPUT", "DUPLICATE_RULE"]);
        // O duplicado é o quarto hash (índice 3), casando sem diferenciar caixa.
        assert_eq!(issues[2].rule, Some(3));
    }

    #[test]
    fn same_input_with_distinct_kinds_is_fine() {
        let data = language(vec![sheet(vec![
            HashRule::new("ing", "a", HashKind::Default),
            HashRule::new("ing", "b", HashKind::Suffix),
        ])]);

        assert!(run(&data).is_empty());
    }

    #[test]
    fn flags_markup_in_input() {
        let data = language(vec![sheet(vec![HashRule::new(
            "<b>cat",
            "dog",
            HashKind::Default,
        )])]);

        assert_eq!(codes(&run(&data)), vec!["MARKUP_IN_INPUT"]);
    }

    #[test]
    fn disabled_rules_are_skipped() {
        let mut off = HashRule::new("", "", HashKind::Default);
        off.enabled = false;

        let data = language(vec![sheet(vec![
            off,
            HashRule::new("ka", "sha", HashKind::Default),
        ])]);

        assert!(run(&data).is_empty());
    }

    #[test]
    fn flags_disabled_and_empty_sheets() {
        let mut off = sheet(vec![HashRule::new("ka", "sha", HashKind::Default)]);
        off.enabled = false;

        let data = language(vec![off, sheet(Vec::new())]);

        let issues = run(&data);
        assert_eq!(codes(&issues), vec!["SHEET_DISABLED", "EMPTY_SHEET"]);
        assert_eq!(issues[0].sheet, 0);
        assert_eq!(issues[1].sheet, 1);
    }
}
