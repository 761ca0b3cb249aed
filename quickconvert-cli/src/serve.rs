//! JSON-lines driver protocol
//!
//! One request object per line on the input, one response object per line
//! on the output:
//!
//! ```text
//! {"id": 1, "method": "convert", "params": {"converter": "Temperature", "value": 100, "from": "°C", "to": "°F"}}
//! {"id":1,"result":{"value":212.0,"formatted":"212"}}
//! ```
//!
//! Methods: `list`, `units`, `convert`. Failures come back as an
//! `ErrorReport` under `error`; the loop only ends at end of input or when
//! the output can no longer be written.

use quickconvert::{parse_number, ConvertError, ErrorReport, ParamValue, Params, QuickConvert, Severity};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

const BAD_REQUEST: &str = "BAD_REQUEST";
const UNKNOWN_METHOD: &str = "UNKNOWN_METHOD";

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: JsonValue,
}

#[derive(Debug, Serialize)]
struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

impl Response {
    fn ok(id: Option<JsonValue>, result: JsonValue) -> Self {
        Self { id, result: Some(result), error: None }
    }

    fn err(id: Option<JsonValue>, error: ErrorReport) -> Self {
        Self { id, result: None, error: Some(error) }
    }
}

#[derive(Debug, Deserialize)]
struct UnitsArgs {
    converter: String,
}

#[derive(Debug, Deserialize)]
struct ConvertArgs {
    converter: String,
    /// Number, or text as typed into a value field
    value: ParamValue,
    from: String,
    to: String,
    #[serde(default)]
    params: Params,
}

fn bad_request(message: String) -> ErrorReport {
    ErrorReport {
        code: BAD_REQUEST.to_string(),
        message,
        suggestion: None,
        severity: Severity::Error,
    }
}

/// Serve requests from `reader` until end of input. Returns the number of
/// requests answered.
pub fn serve<R: BufRead, W: Write>(engine: &QuickConvert, mut reader: R, mut writer: W) -> io::Result<usize> {
    info!(
        converters = engine.registry().len(),
        precision = engine.config().precision,
        "serving JSON-lines requests"
    );
    let mut answered = 0;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            info!(answered, "end of input");
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(engine, line);
        let encoded = serde_json::to_string(&response).map_err(io::Error::other)?;
        writeln!(writer, "{}", encoded)?;
        writer.flush()?;
        answered += 1;
    }

    Ok(answered)
}

fn handle_line(engine: &QuickConvert, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return Response::err(None, bad_request(format!("Parse error: {}", e)));
        }
    };

    debug!(method = %request.method, "request");
    match dispatch(engine, &request.method, request.params) {
        Ok(result) => Response::ok(request.id, result),
        Err(report) => Response::err(request.id, report),
    }
}

fn dispatch(engine: &QuickConvert, method: &str, params: JsonValue) -> Result<JsonValue, ErrorReport> {
    match method {
        "list" => to_json(&engine.describe()),
        "units" => {
            let args: UnitsArgs = parse_args(params)?;
            let converter = engine.registry().get(&args.converter).map_err(|e| e.report())?;
            to_json(&converter.info())
        }
        "convert" => {
            let args: ConvertArgs = parse_args(params)?;
            let value = match &args.value {
                ParamValue::Number(n) => *n,
                ParamValue::Text(text) => parse_number(text)
                    .map_err(|e| ConvertError::InvalidValue(e.to_string()).report())?,
            };
            let result = engine
                .convert(&args.converter, value, &args.from, &args.to, &args.params)
                .map_err(|e| e.report())?;
            Ok(json!({
                "value": result,
                "formatted": engine.format(result),
            }))
        }
        other => Err(ErrorReport {
            code: UNKNOWN_METHOD.to_string(),
            message: format!("Unknown method '{}'", other),
            suggestion: Some("Use one of: list, units, convert".to_string()),
            severity: Severity::Error,
        }),
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(params: JsonValue) -> Result<T, ErrorReport> {
    serde_json::from_value(params).map_err(|e| bad_request(format!("Invalid params: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, ErrorReport> {
    serde_json::to_value(value).map_err(|e| bad_request(format!("Failed to encode result: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickconvert::Config;

    fn run(input: &str) -> Vec<JsonValue> {
        let engine = QuickConvert::with_standard_library(Config::default()).unwrap();
        let mut output = Vec::new();
        serve(&engine, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_convert() {
        let out = run(r#"{"id": 1, "method": "convert", "params": {"converter": "Temperature", "value": 100, "from": "°C", "to": "°F"}}"#);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["id"], 1);
        assert_eq!(out[0]["result"]["value"], 212.0);
        assert_eq!(out[0]["result"]["formatted"], "212");
    }

    #[test]
    fn test_convert_with_text_value_and_params() {
        let out = run(r#"{"id": "b", "method": "convert", "params": {"converter": "Battery", "value": " 1000 ", "from": "mAh", "to": "Wh", "params": {"voltage": "7.4"}}}"#);
        assert_eq!(out[0]["id"], "b");
        assert_eq!(out[0]["result"]["formatted"], "7.4");
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let input = [
            "not json",
            r#"{"id": 2, "method": "convert", "params": {"converter": "Length", "value": 5, "from": "m", "to": "furlong"}}"#,
            r#"{"id": 3, "method": "launch"}"#,
            "",
            r#"{"id": 4, "method": "units", "params": {"converter": "Weight"}}"#,
        ]
        .join("\n");
        let out = run(&input);
        assert_eq!(out.len(), 4);

        assert_eq!(out[0]["error"]["code"], BAD_REQUEST);
        assert!(out[0].get("id").is_none());

        assert_eq!(out[1]["error"]["code"], "INVALID_UNIT");
        assert_eq!(out[1]["error"]["severity"], "error");

        assert_eq!(out[2]["error"]["code"], UNKNOWN_METHOD);

        assert_eq!(out[3]["result"]["name"], "Weight");
        assert_eq!(out[3]["result"]["units"][4], "lb");
    }

    #[test]
    fn test_list_and_missing_params() {
        let input = [
            r#"{"id": 1, "method": "list"}"#,
            r#"{"id": 2, "method": "units"}"#,
            r#"{"id": 3, "method": "units", "params": {"converter": "Lenght"}}"#,
        ]
        .join("\n");
        let out = run(&input);
        assert_eq!(out[0]["result"].as_array().map(Vec::len), Some(5));
        assert_eq!(out[1]["error"]["code"], BAD_REQUEST);
        assert_eq!(out[2]["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_overflow_is_an_error_not_a_null_value() {
        let out = run(r#"{"id": 1, "method": "convert", "params": {"converter": "Data Size", "value": 1e308, "from": "TB", "to": "bit"}}"#);
        assert!(out[0].get("result").is_none());
        assert_eq!(out[0]["error"]["code"], "DOMAIN_ERROR");
    }

    #[test]
    fn test_invalid_text_value() {
        let out = run(r#"{"id": 1, "method": "convert", "params": {"converter": "Length", "value": "abc", "from": "m", "to": "km"}}"#);
        assert_eq!(out[0]["error"]["code"], "INVALID_VALUE");
    }
}
