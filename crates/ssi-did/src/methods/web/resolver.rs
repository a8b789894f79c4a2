use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::{
    body::Bytes,
    http::uri::{self, Scheme},
    Uri,
};
use hyper_tls::HttpsConnector;
use hyper_util::{
    client::legacy::{
        connect::{Connect, HttpConnector},
        Client,
    },
    rt::TokioExecutor,
};
use percent_encoding::percent_decode_str;

use super::DidWebConfig;
use crate::{
    didcore::Document,
    methods::{
        errors::{DIDResolutionError, DidWebError},
        traits::{DIDMethod, DIDResolver},
    },
};

const DID_WEB_PREFIX: &str = "did:web:";

/// A struct for resolving DID Web documents.
pub struct DidWeb<C>
where
    C: Connect + Send + Sync + Clone + 'static,
{
    client: Client<C, Full<Bytes>>,
    config: DidWebConfig,
}

impl Default for DidWeb<HttpsConnector<HttpConnector>> {
    fn default() -> Self {
        Self::new()
    }
}

impl DidWeb<HttpsConnector<HttpConnector>> {
    /// Creates a new `DidWeb` resolver with default settings.
    pub fn new() -> Self {
        Self::with_config(DidWebConfig::default())
    }

    /// Creates a new `DidWeb` resolver.
    pub fn with_config(config: DidWebConfig) -> Self {
        DidWeb {
            client: Client::builder(TokioExecutor::new()).build::<_, Full<Bytes>>(HttpsConnector::new()),
            config,
        }
    }

    /// Returns the HTTPS URL a did:web document is published at.
    pub fn document_url(did: &str) -> Result<String, DidWebError> {
        let (domain_name, path) = parse_did_web_url(did)?;
        Ok(format!("https://{domain_name}{path}"))
    }
}

impl<C> DidWeb<C>
where
    C: Connect + Send + Sync + Clone + 'static,
{
    /// Fetches a DID document from the given URL
    async fn fetch_did_document(&self, url: Uri) -> Result<String, DidWebError> {
        let res = self.client.get(url).await?;

        if !res.status().is_success() {
            return Err(DidWebError::NonSuccessResponse(res.status()));
        }

        let body = BodyExt::collect(res.into_body()).await?;

        String::from_utf8(body.to_bytes().to_vec()).map_err(|err| err.into())
    }

    fn scheme_for(&self, domain_name: &str) -> Scheme {
        let host = domain_name.split(':').next().unwrap_or_default();

        if self.config.allow_http_localhost && matches!(host, "localhost" | "127.0.0.1") {
            Scheme::HTTP
        } else {
            Scheme::HTTPS
        }
    }

    /// Fetches and parses the DID document of the given DID.
    async fn resolver_fetcher(&self, did: &str) -> Result<Document, DidWebError> {
        let (domain_name, path) = parse_did_web_url(did)?;

        let url = uri::Builder::new()
            .scheme(self.scheme_for(&domain_name))
            .authority(domain_name)
            .path_and_query(path)
            .build()?;

        tracing::debug!("fetching DID document from {url}");

        let timeout = self.config.timeout;
        let json_string = tokio::time::timeout(timeout, self.fetch_did_document(url))
            .await
            .map_err(|_| DidWebError::Timeout(timeout))??;

        let diddoc: Document = serde_json::from_str(&json_string)?;
        if diddoc.id != did {
            return Err(DidWebError::DocumentMismatch {
                expected: did.to_owned(),
                found: diddoc.id,
            });
        }

        Ok(diddoc)
    }
}

/// Splits a did:web address into the domain name and the document path.
fn parse_did_web_url(did: &str) -> Result<(String, String), DidWebError> {
    let method_specific_id = did
        .strip_prefix(DID_WEB_PREFIX)
        .ok_or_else(|| DidWebError::InvalidDid(did.to_owned()))?;

    let mut parts = method_specific_id.split(':');

    let domain_name = match parts.next() {
        Some(domain) if !domain.is_empty() => decode_segment(domain)?,
        _ => return Err(DidWebError::MissingDomain(did.to_owned())),
    };

    let segments = parts.map(decode_segment).collect::<Result<Vec<_>, _>>()?;
    let path = match segments.is_empty() {
        true => String::from("/.well-known/did.json"),
        false => format!("/{}/did.json", segments.join("/")),
    };

    Ok((domain_name, path))
}

fn decode_segment(segment: &str) -> Result<String, DidWebError> {
    let bytes = segment.as_bytes();

    // percent_decode_str passes malformed escapes through verbatim
    let well_formed = bytes.iter().enumerate().filter(|&(_, &b)| b == b'%').all(|(i, _)| {
        matches!(bytes.get(i + 1..i + 3), Some(hex) if hex.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return Err(DidWebError::InvalidEncoding(segment.to_owned()));
    }

    let decoded = percent_decode_str(segment)
        .decode_utf8()
        .map_err(|_| DidWebError::InvalidEncoding(segment.to_owned()))?;

    // a segment must stay a single path component
    if decoded.contains(['/', '?', '#']) {
        return Err(DidWebError::InvalidEncoding(segment.to_owned()));
    }

    Ok(decoded.into_owned())
}

impl<C> DIDMethod for DidWeb<C>
where
    C: Connect + Send + Sync + Clone + 'static,
{
    fn name(&self) -> &'static str {
        "did:web"
    }
}

#[async_trait]
impl<C> DIDResolver for DidWeb<C>
where
    C: Connect + Send + Sync + Clone + 'static,
{
    /// Resolves a `did:web` address to a DID document.
    async fn resolve(&self, did: &str) -> Result<Document, DIDResolutionError> {
        self.resolver_fetcher(did).await.map_err(|err| {
            tracing::warn!("failed to resolve {did}: {err}");
            err.into()
        })
    }
}
