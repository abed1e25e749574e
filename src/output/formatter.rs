use anyhow::Result;
use std::fmt::Write;

use crate::cli::OutputFormat;
use crate::config::{PolicyConfig, TlsPolicy};

use super::PolicyReport;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(
        config: &PolicyConfig,
        policy: &TlsPolicy,
        format: OutputFormat,
    ) -> Result<String> {
        let report = PolicyReport::build(config, policy);

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => Self::format_text(&report, policy),
        }
    }

    fn format_text(report: &PolicyReport, policy: &TlsPolicy) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "protocol: {}", report.protocol.as_str())?;

        if let Some(rule) = &report.cipher_rule {
            let list = policy.cipher_list();
            writeln!(out, "cipher rule: {rule}")?;
            writeln!(
                out,
                "ciphers ({} suites, {} groups):",
                list.len(),
                list.groups().len()
            )?;
            write!(out, "{list}")?;
        }

        if let Some(curves) = &report.curves {
            let names: Vec<String> = curves
                .iter()
                .map(|curve| match &curve.name {
                    Some(name) => format!("{name} ({})", curve.id),
                    None => curve.id.to_string(),
                })
                .collect();
            writeln!(out, "curves: {}", names.join(", "))?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_for(config: &PolicyConfig) -> TlsPolicy {
        TlsPolicy::from_config(config).unwrap()
    }

    #[test]
    fn test_text_output_brackets_groups() {
        let config = PolicyConfig {
            cipher_list: Some("[AES128-SHA|AES256-SHA]:DES-CBC3-SHA".to_string()),
            ..PolicyConfig::default()
        };
        let out = OutputFormatter::format(&config, &policy_for(&config), OutputFormat::Text).unwrap();

        assert!(out.starts_with("protocol: tls\n"));
        assert!(out.contains("ciphers (3 suites, 2 groups):\n[\n  AES128-SHA\n  AES256-SHA\n]\nDES-CBC3-SHA\n"));
        assert!(!out.contains("curves:"));
    }

    #[test]
    fn test_text_output_curves() {
        let config = PolicyConfig {
            curves: Some("P-384:x25519".to_string()),
            ..PolicyConfig::default()
        };
        let out = OutputFormatter::format(&config, &policy_for(&config), OutputFormat::Text).unwrap();
        assert!(out.contains("curves: P-384 (24), X25519 (29)\n"));
    }

    #[test]
    fn test_json_output() {
        let config = PolicyConfig {
            cipher_list: Some("kRSA+AESGCM+AES128".to_string()),
            curves: Some("P-256".to_string()),
            ..PolicyConfig::default()
        };
        let out = OutputFormatter::format(&config, &policy_for(&config), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["protocol"], "tls");
        assert_eq!(value["ciphers"][0]["id"], 0x009C);
        assert_eq!(value["ciphers"][0]["standard_name"], "TLS_RSA_WITH_AES_128_GCM_SHA256");
        assert_eq!(value["ciphers"][0]["in_group"], false);
        assert_eq!(value["curves"][0]["name"], "P-256");
    }
}
