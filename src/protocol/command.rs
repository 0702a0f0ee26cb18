#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    TranslateText,
    TranslateSheet,
    RunQa,
    SortRules,
    ImportText,
    LanguageList,
    LanguageCreate,
    LanguageOpen,
    LanguageSave,
    LanguageSaveAs,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "translate_text" => Command::TranslateText,
            "translate_sheet" => Command::TranslateSheet,
            "run_qa" => Command::RunQa,
            "sort_rules" => Command::SortRules,
            "import_text" => Command::ImportText,
            "language.list" => Command::LanguageList,
            "language.create" => Command::LanguageCreate,
            "language.open" => Command::LanguageOpen,
            "language.save" => Command::LanguageSave,
            "language.save_as" => Command::LanguageSaveAs,
            _ => Command::Unknown,
        }
    }
}
