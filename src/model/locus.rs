use std::collections::HashSet;

use serde::Deserialize;

use crate::input::ParseError;

const STRAND_MARKERS: [&str; 2] = ["LHS", "RHS"];

/// What to do with a probe name that carries no strand-side marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmarkedProbePolicy {
    #[default]
    Error,
    WholeName,
}

/// Canonical locus of a probe name: everything before the last `LHS`/`RHS`.
///
/// `"BRCA1_ex2_LHS_01"` yields `"BRCA1_ex2_"`.
pub fn canonical_locus(name: &str) -> Result<&str, ParseError> {
    let cut = STRAND_MARKERS
        .iter()
        .filter_map(|marker| name.rfind(marker))
        .max()
        .ok_or_else(|| ParseError::UnmarkedProbe(name.to_string()))?;
    Ok(&name[..cut])
}

pub fn canonical_locus_with<'a>(
    name: &'a str,
    policy: UnmarkedProbePolicy,
) -> Result<&'a str, ParseError> {
    match canonical_locus(name) {
        Ok(locus) => Ok(locus),
        Err(err) => match policy {
            UnmarkedProbePolicy::Error => Err(err),
            UnmarkedProbePolicy::WholeName => {
                tracing::warn!("probe {name:?} has no LHS/RHS marker; using the whole name");
                Ok(name)
            }
        },
    }
}

/// Canonical locus names flagged for removal. Membership is exact equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSet {
    loci: HashSet<String>,
}

impl RemovalSet {
    pub fn insert(&mut self, locus: impl Into<String>) -> bool {
        self.loci.insert(locus.into())
    }

    pub fn contains(&self, locus: &str) -> bool {
        self.loci.contains(locus)
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RemovalSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            loci: iter.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn is_removed(
    name: &str,
    removal_set: &RemovalSet,
    policy: UnmarkedProbePolicy,
) -> Result<bool, ParseError> {
    let locus = canonical_locus_with(name, policy)?;
    Ok(removal_set.contains(locus))
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/locus.rs"]
mod tests;
