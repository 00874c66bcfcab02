//! Parse-and-default step turning loose tool arguments into a [`SearchRequest`]

use serde_json::{Map, Value};

use crate::types::{MAX_RESULTS_RANGE, SearchDepth, SearchRequest};
use crate::{Error, Result};

impl SearchRequest {
    /// Validate a caller-supplied argument bag and fill in defaults.
    ///
    /// `query` is the only required field. Keys this tool does not know are
    /// ignored; known keys with the wrong shape are rejected. `null` is
    /// treated the same as an absent key.
    pub fn from_arguments(arguments: &Value) -> Result<Self> {
        let empty = Map::new();
        let args = match arguments {
            Value::Object(map) => map,
            Value::Null => &empty,
            other => {
                return Err(Error::validation(format!(
                    "arguments must be an object, got {}",
                    type_name(other)
                )));
            }
        };

        let query = match field(args, "query") {
            Some(Value::String(q)) if !q.trim().is_empty() => q.clone(),
            Some(Value::String(_)) => {
                return Err(Error::validation("query must not be empty"));
            }
            Some(other) => {
                return Err(Error::validation(format!(
                    "query must be a string, got {}",
                    type_name(other)
                )));
            }
            None => return Err(Error::validation("missing required field: query")),
        };

        let mut request = SearchRequest::new(query);

        if let Some(value) = field(args, "search_depth") {
            let depth = value.as_str().ok_or_else(|| {
                Error::validation(format!(
                    "search_depth must be a string, got {}",
                    type_name(value)
                ))
            })?;
            request.search_depth = depth.parse::<SearchDepth>().map_err(Error::Validation)?;
        }

        if let Some(value) = field(args, "include_answer") {
            request.include_answer = value.as_bool().ok_or_else(|| {
                Error::validation(format!(
                    "include_answer must be a boolean, got {}",
                    type_name(value)
                ))
            })?;
        }

        if let Some(value) = field(args, "max_results") {
            request.max_results = parse_max_results(value)?;
        }

        request.include_domains = parse_domains(args, "include_domains")?;
        request.exclude_domains = parse_domains(args, "exclude_domains")?;

        Ok(request)
    }
}

fn field<'a>(args: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    args.get(key).filter(|v| !v.is_null())
}

fn parse_max_results(value: &Value) -> Result<u32> {
    let out_of_range = || {
        Error::validation(format!(
            "max_results must be an integer between {} and {}, got {}",
            MAX_RESULTS_RANGE.start(),
            MAX_RESULTS_RANGE.end(),
            value
        ))
    };

    let n = value.as_f64().ok_or_else(|| {
        Error::validation(format!(
            "max_results must be a number, got {}",
            type_name(value)
        ))
    })?;

    // JSON clients sometimes send 5.0 for 5
    let bounds = f64::from(*MAX_RESULTS_RANGE.start())..=f64::from(*MAX_RESULTS_RANGE.end());
    if n.fract() != 0.0 || !bounds.contains(&n) {
        return Err(out_of_range());
    }
    Ok(n as u32)
}

fn parse_domains(args: &Map<String, Value>, key: &str) -> Result<Option<Vec<String>>> {
    let Some(value) = field(args, key) else {
        return Ok(None);
    };

    let items = value.as_array().ok_or_else(|| {
        Error::validation(format!(
            "{} must be an array of strings, got {}",
            key,
            type_name(value)
        ))
    })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                Error::validation(format!(
                    "{} must contain only strings, found {}",
                    key,
                    type_name(item)
                ))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
