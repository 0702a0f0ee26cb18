use crate::model::language::LanguageData;
use crate::services::translator::Translator;

// Um idioma com N sheets habilitados vira N passes de tradução em sequência:
// a saída de um pass alimenta a entrada do próximo, na ordem dos sheets.
// Sheet desabilitado nem vira tradutor.
pub fn build(language: &LanguageData, allow_empty_outputs: bool) -> Vec<Translator> {
    language
        .sheets
        .iter()
        .filter(|sheet| sheet.enabled)
        .map(|sheet| Translator::new(sheet, allow_empty_outputs))
        .collect()
}

pub fn run(translators: &[Translator], text: &str) -> String {
    let mut output = text.to_string();

    for translator in translators {
        output = translator.translate(&output);
    }

    output
}
