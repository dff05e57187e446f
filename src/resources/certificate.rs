//! Certificate naming for cert-manager integration.
//!
//! cert-manager limits the common name of a certificate to 64 bytes.
//! Certificate identifiers are built as `<cluster name>-<suffix>`; the suffix
//! is always kept whole and the cluster name is shortened to fit.

use std::fmt;

use kube::ResourceExt;
use serde::Serialize;

use crate::crd::Cluster;
use crate::error::{Error, Result};

/// Maximum length of a certificate common name in bytes
pub const NAME_LIMIT: usize = 64;

/// Length of the `-` separating prefix and suffix
pub const SEPARATOR_LENGTH: usize = 1;

/// Certificate common name, at most [`NAME_LIMIT`] bytes long.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CommonName(String);

impl CommonName {
    /// Join `prefix` and `suffix` with `-`, shortening the prefix so the
    /// result fits in [`NAME_LIMIT`] bytes.
    ///
    /// The prefix is cut on a character boundary, so a multi-byte character
    /// straddling the limit is dropped whole. Fails with
    /// [`Error::NameTooLong`] when the suffix leaves no room for any prefix.
    pub fn new(prefix: &str, suffix: &str) -> Result<Self> {
        let max_prefix_len = NAME_LIMIT
            .checked_sub(suffix.len().saturating_add(SEPARATOR_LENGTH))
            .filter(|len| *len > 0)
            .ok_or_else(|| Error::NameTooLong {
                suffix: suffix.to_string(),
                length: suffix.len(),
                limit: NAME_LIMIT,
            })?;

        let end = (0..=prefix.len().min(max_prefix_len))
            .rev()
            .find(|i| prefix.is_char_boundary(*i))
            .unwrap_or(0);
        let prefix = prefix.get(..end).unwrap_or_default();

        Ok(Self(format!("{prefix}-{suffix}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CommonName> for String {
    fn from(name: CommonName) -> Self {
        name.0
    }
}

/// Common name of a certificate issued for `resource`.
pub fn certificate_common_name(resource: &Cluster, suffix: &str) -> Result<CommonName> {
    CommonName::new(&resource.name_any(), suffix)
}
