//! Hosted zone resolution by longest matching suffix

use acm_validator_provider::HostedZone;

use crate::error::{CoreError, CoreResult};
use crate::types::ZoneMatch;

/// Picks the hosted zone that should receive a record for a hostname.
pub struct ZoneResolver;

impl ZoneResolver {
    /// Longest-suffix match of `domain` against `zones`.
    ///
    /// Candidates are tried from the full name down to the last two labels; the first
    /// length with a match wins. Names compare ASCII case-insensitively. Among several
    /// zones with the same name the first in `zones` is taken.
    pub fn resolve(domain: &str, zones: &[HostedZone]) -> CoreResult<ZoneMatch> {
        let trimmed = domain.strip_suffix('.').unwrap_or(domain);
        let labels: Vec<&str> = trimmed.split('.').collect();

        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Err(CoreError::InvalidDomain(domain.to_string()));
        }

        for start in 0..=labels.len() - 2 {
            let candidate = format!("{}.", labels[start..].join("."));
            let matches: Vec<&HostedZone> = zones
                .iter()
                .filter(|zone| zone.name.eq_ignore_ascii_case(&candidate))
                .collect();

            let Some(first) = matches.first().copied() else {
                continue;
            };

            if let Some(warning) = Self::ambiguity_warning(&candidate, &matches) {
                log::warn!("{warning}");
            }

            log::debug!("{domain} resolved to zone {} ({})", first.id, first.name);
            return Ok(ZoneMatch::Matched(first.clone()));
        }

        log::debug!("{domain} matches no hosted zone");
        Ok(ZoneMatch::NoMatch)
    }

    /// Warning text when several zones carry the matched name; `None` for a unique match.
    fn ambiguity_warning(candidate: &str, matches: &[&HostedZone]) -> Option<String> {
        let (first, others) = matches.split_first()?;
        if others.is_empty() {
            return None;
        }
        let ignored: Vec<&str> = others.iter().map(|zone| zone.id.as_str()).collect();
        Some(format!(
            "{} hosted zones are named {candidate}; using {} and ignoring {}",
            matches.len(),
            first.id,
            ignored.join(", ")
        ))
    }
}
