pub mod markup;
pub mod table;

use crate::model::language::TranslateSheet;

use markup::{next_plain_char, previous_plain_char, rich_substring, tag_at};
use table::{resolve_output, RuleTable};

// Tradutor de um sheet: compila os hashes numa tabela de consulta e substitui o
// texto num único scan da esquerda pra direita, sempre tentando o match mais longo.
pub struct Translator {
    table: RuleTable,
    allow_empty_outputs: bool,
}

impl Translator {
    pub fn new(sheet: &TranslateSheet, allow_empty_outputs: bool) -> Self {
        Translator {
            table: RuleTable::build(sheet, allow_empty_outputs),
            allow_empty_outputs,
        }
    }

    pub fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut translated = String::with_capacity(text.len());

        let mut index = 0usize;
        while index < chars.len() {
            // 1: Tag inline é copiada como está, sem consultar a tabela.
            if let Some((tag, _)) = tag_at(&chars, index) {
                index += tag.chars().count();
                translated.push_str(&tag);
                continue;
            }

            // 2: Procura um hash começando no caractere atual, do maior pro menor.
            let mut check_length = (chars.len() - index).min(self.table.longest_input());
            let mut matched: Option<(String, usize)> = None;

            while check_length > 0 {
                let rich = rich_substring(&chars, index, check_length);
                let next_index = index + rich.consumed;

                // Prefixo: não existe caractere real antes, ou ele não é letra.
                let prefix = index == 0
                    || previous_plain_char(&chars, index).map_or(true, |c| !c.is_alphabetic());

                // Sufixo: não existe caractere real depois do span, ou ele não é letra.
                let suffix = next_index >= chars.len()
                    || next_plain_char(&chars, next_index).map_or(true, |c| !c.is_alphabetic());

                if let Some(rules) = self.table.get(&rich.input.to_lowercase()) {
                    if let Some(raw_output) = resolve_output(rules, prefix, suffix) {
                        if self.allow_empty_outputs || !raw_output.trim().is_empty() {
                            let output = format!(
                                "{}{}{}",
                                rich.opening_tags,
                                transfer_case(&rich.input, &raw_output.to_lowercase()),
                                rich.closing_tags
                            );
                            matched = Some((output, next_index));
                            break;
                        }
                    }
                }

                check_length -= 1;
            }

            match matched {
                Some((output, next_index)) => {
                    translated.push_str(&output);
                    index = next_index;
                }
                None => {
                    // Nenhum hash casou: o caractere atual passa direto.
                    translated.push(chars[index]);
                    index += 1;
                }
            }
        }

        translated
    }
}

// Transfere a caixa do input casado pro output: só a primeira letra maiúscula é
// copiada; o resto do output segue minúsculo.
fn transfer_case(from: &str, to: &str) -> String {
    let first_is_upper = from.chars().next().map_or(false, |c| c.is_uppercase());
    let mut rest = to.chars();

    match rest.next() {
        Some(first) if first_is_upper => {
            let mut out = String::with_capacity(to.len());
            out.extend(first.to_uppercase());
            out.push_str(rest.as_str());
            out
        }
        _ => to.to_string(),
    }
}
