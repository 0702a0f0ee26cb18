use std::fs;
use std::path::{Path, PathBuf};

use crate::model::language::LanguageData;
use crate::services::ident;

const LANGUAGE_FILE: &str = "language.json";

fn languages_base_dir() -> PathBuf {
    if let Ok(local) = std::env::var("LOCALAPPDATA") {
        return PathBuf::from(local).join("FanLang").join("Languages");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("Languages")
}

fn ensure_languages_dir() -> PathBuf {
    let dir = languages_base_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir).expect("failed to create languages dir");
    }
    dir
}

/// Converte o "name" (que pode vir zoado como path) em nome seguro de diretório.
/// - Se parecer um caminho, usa apenas o basename (file_name)
/// - Remove caracteres inválidos comuns no Windows (incluindo ':')
fn safe_language_dir_name(name: &str) -> String {
    let mut n = name.trim().to_string();

    // Se vier path (ex.: C:\...\Elvish), pega só o final.
    if n.contains('\\') || n.contains('/') {
        if let Some(bn) = Path::new(&n).file_name().and_then(|s| s.to_str()) {
            n = bn.to_string();
        }
    }

    // Sanitiza agressivamente: mantém letras/números/espacos/_-.
    let mut out = String::with_capacity(n.len());
    for ch in n.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == ' ' || ch == '_' || ch == '-' || ch == '.';
        out.push(if ok { ch } else { '_' });
    }

    let out = out.trim().trim_matches('.').to_string();
    if out.is_empty() {
        "Language".to_string()
    } else {
        out
    }
}

pub fn list_languages() -> Vec<LanguageData> {
    let dir = ensure_languages_dir();
    let mut languages = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path().join(LANGUAGE_FILE);
            if !path.exists() {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(data) => match serde_json::from_str::<LanguageData>(&data) {
                    Ok(language) => languages.push(language),
                    Err(e) => eprintln!("[languages] failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("[languages] failed to read {}: {e}", path.display()),
            }
        }
    }

    languages
}

pub fn create_language(name: String) -> Result<LanguageData, String> {
    let base = ensure_languages_dir();

    let safe_name = safe_language_dir_name(&name);
    let language_dir = base.join(&safe_name);

    if language_dir.exists() {
        return Err("language already exists".into());
    }

    let mut language = LanguageData::new(&name);
    language.id = ident::mint_id();

    write_language(&language, &language_dir)?;

    Ok(language)
}

pub fn open_language(language_path: String) -> Result<LanguageData, String> {
    let path = Path::new(&language_path).join(LANGUAGE_FILE);

    if !path.exists() {
        return Err("language.json not found".into());
    }

    let data = fs::read_to_string(path).map_err(|_| "failed to read language.json")?;

    serde_json::from_str::<LanguageData>(&data).map_err(|_| "invalid language.json".into())
}

pub fn save_language(mut language: LanguageData, language_path: String) -> Result<LanguageData, String> {
    let language_dir: PathBuf = {
        let lp = language_path.trim().to_string();
        if lp.is_empty() {
            let safe_name = safe_language_dir_name(&language.name);
            ensure_languages_dir().join(&safe_name)
        } else {
            PathBuf::from(lp)
        }
    };

    // Garante um ID no primeiro save; saves seguintes nunca trocam o ID.
    if language.id.trim().is_empty() {
        language.id = ident::mint_id();
    }

    write_language(&language, &language_dir)?;

    Ok(language)
}

// "Salvar como": destino novo, identidade nova.
pub fn save_language_as(mut language: LanguageData, language_path: String) -> Result<LanguageData, String> {
    language.id = ident::mint_id();
    save_language(language, language_path)
}

fn write_language(language: &LanguageData, language_dir: &Path) -> Result<(), String> {
    fs::create_dir_all(language_dir)
        .map_err(|e| format!("failed to create language directory: {e}"))?;

    let json = serde_json::to_string_pretty(language)
        .map_err(|e| format!("failed to serialize language: {e}"))?;

    write_atomic(&language_dir.join(LANGUAGE_FILE), json.as_bytes())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), String> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    fs::write(&tmp, bytes).map_err(|e| e.to_string())?;

    if path.exists() {
        fs::remove_file(path).map_err(|e| e.to_string())?;
    }

    fs::rename(&tmp, path).map_err(|e| e.to_string())?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "language".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
