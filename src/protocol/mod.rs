use serde_json::{json, Value};

use crate::model::language::{LanguageData, SortKey, TranslateSheet};
use crate::services::{import, language, pipeline, qa};
use crate::services::translator::Translator;

mod command;
use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload<'a>(req: &'a Value) -> &'a Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn parse_language(payload: &Value) -> Result<LanguageData, String> {
    let v = payload.get("language").cloned().unwrap_or(Value::Null);
    if v.is_null() {
        return Err("payload.language is required".to_string());
    }

    serde_json::from_value(v).map_err(|e| format!("invalid payload.language: {e}"))
}

fn parse_sheet(payload: &Value) -> Result<TranslateSheet, String> {
    let v = payload.get("sheet").cloned().unwrap_or(Value::Null);
    if v.is_null() {
        return Err("payload.sheet is required".to_string());
    }

    serde_json::from_value(v).map_err(|e| format!("invalid payload.sheet: {e}"))
}

fn get_allow_empty_outputs(payload: &Value) -> bool {
    payload
        .get("allow_empty_outputs")
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

pub fn handle(input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd = Command::from(get_cmd(&req));
    let payload = get_payload(&req);

    match cmd {
        Command::Ping => ok(id, json!({ "message": "fanlang-core alive" })),

        Command::TranslateText => {
            let data = match parse_language(payload) {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            let text = payload.get("text").and_then(|v| v.as_str()).unwrap_or("");

            let translators = pipeline::build(&data, get_allow_empty_outputs(payload));
            let output = pipeline::run(&translators, text);
            ok(id, json!({ "text": output }))
        }

        Command::TranslateSheet => {
            // Preview de um sheet só, sem passar pelos outros passes do idioma.
            let sheet = match parse_sheet(payload) {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            let text = payload.get("text").and_then(|v| v.as_str()).unwrap_or("");

            let translator = Translator::new(&sheet, get_allow_empty_outputs(payload));
            ok(id, json!({ "text": translator.translate(text) }))
        }

        Command::RunQa => {
            let data = match parse_language(payload) {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            ok(id, json!({ "issues": qa::run(&data) }))
        }

        Command::SortRules => {
            let mut sheet = match parse_sheet(payload) {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };

            let key = match payload.get("key").and_then(|v| v.as_str()).unwrap_or("input") {
                "input" => SortKey::Input,
                "output" => SortKey::Output,
                "kind" => SortKey::Kind,
                other => return err(id, format!("unknown sort key: {other}")),
            };

            sheet.sort_rules(key);
            ok(id, json!({ "sheet": sheet }))
        }

        Command::ImportText => {
            let path_str = payload.get("path").and_then(|v| v.as_str()).unwrap_or("");
            if path_str.is_empty() {
                return err(id, "payload.path is required");
            }
            let path = std::path::PathBuf::from(path_str);
            match import::read_text_file(&path) {
                Ok(result) => ok(id, serde_json::to_value(result).unwrap_or(json!({}))),
                Err(e) => err(id, e),
            }
        }

        Command::LanguageList => ok(id, json!({ "languages": language::list_languages() })),

        Command::LanguageCreate => {
            let name = payload.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string();
            if name.is_empty() {
                return err(id, "payload.name is required");
            }

            match language::create_language(name) {
                Ok(data) => ok(id, json!({ "language": data })),
                Err(e) => err(id, e),
            }
        }

        Command::LanguageOpen => {
            let language_path = payload.get("language_path").and_then(|v| v.as_str()).unwrap_or("").to_string();
            if language_path.is_empty() {
                return err(id, "payload.language_path is required");
            }

            match language::open_language(language_path) {
                Ok(data) => ok(id, json!({ "language": data })),
                Err(e) => err(id, e),
            }
        }

        Command::LanguageSave => {
            let data = match parse_language(payload) {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            let language_path = payload.get("language_path").and_then(|v| v.as_str()).unwrap_or("").to_string();

            match language::save_language(data, language_path) {
                Ok(saved) => ok(id, json!({ "language": saved })),
                Err(e) => err(id, e),
            }
        }

        Command::LanguageSaveAs => {
            let data = match parse_language(payload) {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            let language_path = payload.get("language_path").and_then(|v| v.as_str()).unwrap_or("").to_string();
            if language_path.is_empty() {
                return err(id, "payload.language_path is required");
            }

            match language::save_language_as(data, language_path) {
                Ok(saved) => ok(id, json!({ "language": saved })),
                Err(e) => err(id, e),
            }
        }

        Command::Unknown => err(id, "unknown command"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(response: &str) -> Value {
        serde_json::from_str(response).unwrap()
    }

    #[test]
    fn ping_answers_alive() {
        let resp = parse(&handle(r#"{"id":1,"cmd":"ping"}"#));
        assert_eq!(resp["status"], "ok");
        assert_eq!(resp["payload"]["message"], "fanlang-core alive");
        assert_eq!(resp["id"], 1);
    }

    #[test]
    fn invalid_json_is_reported() {
        let resp = parse(&handle("not json"));
        assert_eq!(resp["status"], "error");
        assert_eq!(resp["message"], "invalid json");
    }

    #[test]
    fn unknown_command_is_reported() {
        let resp = parse(&handle(r#"{"id":2,"cmd":"nope"}"#));
        assert_eq!(resp["status"], "error");
        assert_eq!(resp["message"], "unknown command");
    }

    #[test]
    fn translate_text_runs_the_full_pipeline() {
        let req = r#"{
            "id": 3,
            "cmd": "translate_text",
            "payload": {
                "text": "a",
                "language": {
                    "name": "Test",
                    "sheets": [
                        {"name": "um", "rules": [{"input": "a", "output": "b"}]},
                        {"name": "dois", "rules": [{"input": "b", "output": "c"}]}
                    ]
                }
            }
        }"#;

        let resp = parse(&handle(req));
        assert_eq!(resp["status"], "ok");
        assert_eq!(resp["payload"]["text"], "c");
    }

    #[test]
    fn translate_text_requires_a_language() {
        let resp = parse(&handle(r#"{"id":4,"cmd":"translate_text","payload":{"text":"a"}}"#));
        assert_eq!(resp["status"], "error");
        assert_eq!(resp["message"], "payload.language is required");
    }

    #[test]
    fn translate_sheet_previews_one_pass() {
        let req = r#"{"id":5,"cmd":"translate_sheet","payload":{"text":"Cat","sheet":{"name":"s","rules":[{"input":"cat","output":"dog"}]}}}"#;
        let resp = parse(&handle(req));
        assert_eq!(resp["status"], "ok");
        assert_eq!(resp["payload"]["text"], "Dog");
    }

    #[test]
    fn sort_rules_returns_the_sorted_sheet() {
        let req = r#"{"id":6,"cmd":"sort_rules","payload":{"key":"input","sheet":{"name":"s","rules":[{"input":"b"},{"input":"a"}]}}}"#;
        let resp = parse(&handle(req));
        assert_eq!(resp["status"], "ok");
        assert_eq!(resp["payload"]["sheet"]["rules"][0]["input"], "a");
        assert_eq!(resp["payload"]["sheet"]["rules"][1]["input"], "b");
    }

    #[test]
    fn run_qa_reports_issues() {
        let req = r#"{"id":7,"cmd":"run_qa","payload":{"language":{"name":"T","sheets":[{"name":"s","rules":[{"input":"","output":"x"}]}]}}}"#;
        let resp = parse(&handle(req));
        assert_eq!(resp["status"], "ok");
        assert_eq!(resp["payload"]["issues"][0]["code"], "EMPTY_INPUT");
    }
}
