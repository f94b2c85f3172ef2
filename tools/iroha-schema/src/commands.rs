// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Subcommand implementations. Each returns the text to print.

use crate::config::ToolConfig;
use iroha_data_model::{all_queries, paths};
use iroha_schema::{CodecConfig, Schema, TypeKind, Value};
use std::fmt::Write as _;
use std::path::Path;

pub type CmdResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Summary of a loaded schema.
pub fn check(schema: &Schema) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Schema OK: {} types", schema.len());

    let mut envelopes: Vec<(&str, Vec<&str>)> = schema
        .iter()
        .filter_map(|(id, desc)| match &desc.kind {
            TypeKind::Enum(e) if e.versioned => schema
                .versions(id)
                .ok()
                .map(|versions| (desc.name.as_str(), versions)),
            _ => None,
        })
        .collect();
    envelopes.sort();
    for (name, versions) in envelopes {
        let _ = writeln!(out, "  envelope {} [{}]", name, versions.join(", "));
    }
    let _ = writeln!(out, "  {} query variants", all_queries().count());
    out
}

/// JSON dump of the whole schema, or of one type.
pub fn dump(schema: &Schema, type_name: Option<&str>) -> CmdResult<String> {
    let mut types = schema.dump();
    match type_name {
        Some(name) => {
            let desc = types
                .remove(name)
                .ok_or_else(|| format!("Unknown type `{}`", name))?;
            Ok(serde_json::to_string_pretty(&desc)?)
        }
        None => Ok(serde_json::to_string_pretty(&types)?),
    }
}

/// Query variants with their `QueryBox` tag and argument names.
pub fn queries() -> String {
    let mut out = String::new();
    for (tag, (module, decl)) in all_queries().enumerate() {
        let args = if decl.is_no_args() {
            String::new()
        } else {
            format!(" {{ {} }}", decl.fields.join(", "))
        };
        let _ = writeln!(out, "{:>3}  {}::{}{}", tag, module, decl.name, args);
    }
    out
}

fn parse_hex(input: &str) -> CmdResult<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.strip_prefix("0x").unwrap_or(&cleaned);
    Ok(hex::decode(cleaned)?)
}

/// Decode hex bytes as `type_name`, optionally unwrapping an envelope version.
pub fn decode(
    schema: &Schema,
    codec: &CodecConfig,
    type_name: &str,
    input: &str,
    version: Option<&str>,
) -> CmdResult<String> {
    let ty = schema.type_id(type_name)?;
    let bytes = parse_hex(input)?;
    let value = match version {
        Some(label) => {
            let envelope = schema.decode_with(ty, &bytes, codec)?;
            schema.unwrap_version(ty, envelope, label)?
        }
        None => schema.decode_with(ty, &bytes, codec)?,
    };
    tracing::debug!("Decoded {} bytes as {}", bytes.len(), type_name);
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Encode a JSON value as `type_name`, optionally wrapping it in an envelope version.
pub fn encode(
    schema: &Schema,
    type_name: &str,
    json: &str,
    version: Option<&str>,
) -> CmdResult<String> {
    let ty = schema.type_id(type_name)?;
    let mut value: Value = serde_json::from_str(json)?;
    if let Some(label) = version {
        value = schema.wrap_version(ty, label, value)?;
    }
    let bytes = schema.encode(ty, &value)?;
    Ok(hex::encode(bytes))
}

pub fn gen_config(output: &Path) -> CmdResult<String> {
    let toml_str = toml::to_string_pretty(&ToolConfig::default())?;
    let content = format!(
        r#"# iroha-schema tool configuration
# Generated by iroha-schema gen-config

{}
"#,
        toml_str
    );
    std::fs::write(output, content)?;
    Ok(format!("Generated configuration file: {}", output.display()))
}

pub fn validate_config(path: &Path) -> CmdResult<String> {
    let config = ToolConfig::from_file(path)?;
    Ok(format!(
        "Configuration valid!\n\nLog level: {}\nmax_depth: {}\nmax_sequence_len: {}\nreject_trailing_bytes: {}",
        config.log_level,
        config.codec.max_depth,
        config.codec.max_sequence_len,
        config.codec.reject_trailing_bytes
    ))
}

/// The type most messages are exchanged as.
pub const DEFAULT_REQUEST_TYPE: &str = paths::VERSIONED_SIGNED_QUERY_REQUEST;

#[cfg(test)]
mod tests {
    use super::*;
    use iroha_data_model::load_schema;
    use tempfile::TempDir;

    #[test]
    fn test_check_lists_envelopes() {
        let schema = load_schema().expect("schema");
        let out = check(&schema);
        assert!(out.starts_with("Schema OK"));
        assert!(out.contains("VersionedSignedQueryRequest [V1]"));
        assert!(out.contains("39 query variants"));
    }

    #[test]
    fn test_dump_single_type() {
        let schema = load_schema().expect("schema");
        let json = dump(&schema, Some(paths::PAYLOAD)).expect("dump");
        let ts = json.find("timestamp_ms").expect("timestamp_ms");
        let filter = json.find("filter").expect("filter");
        assert!(ts < filter, "fields keep declared order");
        assert!(dump(&schema, Some("no.such.Type")).is_err());
    }

    #[test]
    fn test_queries_listing() {
        let out = queries();
        assert!(out.contains(" 31  trigger::FindAllActiveTriggerIds\n"));
        assert!(out.contains("trigger::FindTriggerById { id }"));
    }

    #[test]
    fn test_encode_then_decode() {
        let schema = load_schema().expect("schema");
        let json = r#"{"Struct":[["start",{"Option":{"U32":5}}],["limit",{"Option":null}]]}"#;
        let hex_out = encode(&schema, paths::PAGINATION, json, None).expect("encode");
        assert_eq!(hex_out, "010500000000");

        let decoded = decode(
            &schema,
            &CodecConfig::default(),
            paths::PAGINATION,
            "0x01 05000000 00",
            None,
        )
        .expect("decode");
        let value: Value = serde_json::from_str(&decoded).expect("json");
        assert_eq!(value, serde_json::from_str::<Value>(json).expect("json"));
    }

    #[test]
    fn test_decode_reports_bad_input() {
        let schema = load_schema().expect("schema");
        let codec = CodecConfig::default();
        assert!(decode(&schema, &codec, paths::PAGINATION, "zz", None).is_err());
        assert!(decode(&schema, &codec, paths::PAGINATION, "01", None).is_err());
        assert!(decode(&schema, &codec, "no.such.Type", "00", None).is_err());
    }

    #[test]
    fn test_gen_and_validate_config() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tool.toml");
        gen_config(&path).expect("gen");
        let out = validate_config(&path).expect("validate");
        assert!(out.contains("max_depth: 128"));
    }
}
