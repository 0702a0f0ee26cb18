use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ImportedText {
    pub text: String,
    pub encoding: String,
    pub had_errors: bool,
}

// Lê um arquivo de texto qualquer pra servir de entrada do tradutor.
// A codificação é detectada antes de decodificar pra UTF-8.
pub fn read_text_file(path: &Path) -> Result<ImportedText, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;

    // BOM UTF-8 (EF BB BF)
    if let Some(stripped) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        let (text, _, had_errors) = encoding_rs::UTF_8.decode(stripped);
        return Ok(ImportedText {
            text: text.into_owned(),
            encoding: "utf-8-sig".into(),
            had_errors,
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);

    let encoding = detector.guess(None, true);
    let (text, _, had_errors) = encoding.decode(&bytes);

    Ok(ImportedText {
        text: text.into_owned(),
        encoding: encoding.name().to_lowercase(),
        had_errors,
    })
}
