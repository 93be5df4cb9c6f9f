use std::collections::BTreeMap;

use super::errors::ConfigError;
use super::types::AuthConfig;

pub(super) const KEY_OIDC_PROVIDER: &str = "oidc.provider.id";
pub(super) const KEY_SAML_PROVIDER: &str = "saml.provider.id";
pub(super) const KEY_CUSTOM_PARAMS: &str = "oidc.custom.params";
pub(super) const KEY_SCOPES: &str = "oidc.scopes";
pub(super) const KEY_DEVELOPMENT_MODE: &str = "oidc.development.mode";

const OIDC_PREFIX: &str = "oidc.";
const SAML_PREFIX: &str = "saml.";

/// Parse the line-oriented `key=value` source text into a validated
/// [`AuthConfig`]. Tokenizing of list values is lenient (bad entries are
/// dropped with a warning); provider references are validated strictly.
pub(super) fn parse_auth_config(text: &str) -> Result<AuthConfig, ConfigError> {
    let props = parse_properties(text);

    let oidc_provider_ref =
        validated_provider_ref(props.get(KEY_OIDC_PROVIDER), KEY_OIDC_PROVIDER, OIDC_PREFIX)?;
    let saml_provider_ref =
        validated_provider_ref(props.get(KEY_SAML_PROVIDER), KEY_SAML_PROVIDER, SAML_PREFIX)?;

    if oidc_provider_ref.is_none() && saml_provider_ref.is_none() {
        return Err(ConfigError::NoProviderConfigured);
    }

    let custom_parameters = props
        .get(KEY_CUSTOM_PARAMS)
        .map(|s| parse_custom_params(s))
        .unwrap_or_default();

    let scopes = props
        .get(KEY_SCOPES)
        .map(|s| parse_scopes(s))
        .unwrap_or_default();

    let development_mode = props
        .get(KEY_DEVELOPMENT_MODE)
        .map(|s| parse_bool(s))
        .unwrap_or(false);

    Ok(AuthConfig {
        oidc_provider_ref,
        saml_provider_ref,
        custom_parameters,
        scopes,
        development_mode,
    })
}

/// Split property text into key/value pairs. Blank lines and `#` comment
/// lines are skipped; values may contain `=` (split on the first one).
fn parse_properties(text: &str) -> BTreeMap<String, String> {
    let mut props = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!("Skipping malformed configuration line: {line}");
            continue;
        };
        props.insert(key.trim().to_string(), value.trim().to_string());
    }
    props
}

fn validated_provider_ref(
    value: Option<&String>,
    key: &str,
    prefix: &str,
) -> Result<Option<String>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.trim();
    match value.strip_prefix(prefix) {
        Some(name) if !name.is_empty() => Ok(Some(value.to_string())),
        _ => Err(ConfigError::InvalidFormat(format!(
            "{key} must match `{prefix}<name>`, got `{value}`"
        ))),
    }
}

/// Comma-separated `k=v` pairs. A malformed entry is dropped individually
/// rather than failing the whole parse.
pub(super) fn parse_custom_params(value: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for entry in value.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((k, v)) if !k.trim().is_empty() => {
                params.insert(k.trim().to_string(), v.trim().to_string());
            }
            _ => tracing::warn!("Dropping malformed custom parameter entry: {entry}"),
        }
    }
    params
}

/// Comma-separated scope list, blank entries filtered, order preserved.
pub(super) fn parse_scopes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive `true`/`false`; anything else (including absence at
/// the caller) is false.
pub(super) fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
