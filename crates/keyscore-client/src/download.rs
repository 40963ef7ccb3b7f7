//! Streamed file downloads.

use bytes::Bytes;
use futures_util::stream::BoxStream;
use futures_util::{StreamExt, TryStreamExt};
use keyscore_core::{KeyscoreError, Result};
use reqwest::header::{HeaderMap, HeaderName, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Response;
use std::fmt;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Largest up-front allocation [`Download::bytes`] makes from `Content-Length`
const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

/// A file being downloaded from `/download`.
///
/// The body is not buffered: chunks are pulled from the connection as the
/// caller asks for them. Dropping the `Download` (or the stream taken from
/// it) closes the connection.
pub struct Download {
    /// `Content-Type` header, empty if absent
    pub content_type: String,

    /// `Content-Length` header, 0 if absent or not a number
    pub content_length: u64,

    /// `Content-Disposition` header, empty if absent
    pub content_disposition: String,

    stream: BoxStream<'static, Result<Bytes>>,
}

impl Download {
    pub(crate) fn from_response(response: Response) -> Self {
        let headers = response.headers();
        let content_type = header_string(headers, &CONTENT_TYPE);
        let content_disposition = header_string(headers, &CONTENT_DISPOSITION);
        let content_length = content_length(headers);

        Self {
            content_type,
            content_length,
            content_disposition,
            stream: response.bytes_stream().map_err(KeyscoreError::http).boxed(),
        }
    }

    /// Next chunk of the body, or `None` once the body is exhausted
    pub async fn chunk(&mut self) -> Option<Result<Bytes>> {
        self.stream.next().await
    }

    /// Take the body as a stream of chunks
    pub fn into_stream(self) -> BoxStream<'static, Result<Bytes>> {
        self.stream
    }

    /// Read the rest of the body into memory
    pub async fn bytes(mut self) -> Result<Vec<u8>> {
        let capacity = usize::try_from(self.content_length.min(MAX_PREALLOC)).unwrap_or(0);
        let mut buf = Vec::with_capacity(capacity);
        while let Some(chunk) = self.stream.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf)
    }

    /// Copy the rest of the body into `writer`, returning the number of bytes written
    pub async fn write_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.stream.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }

    /// File name from the `filename` parameter of `Content-Disposition`
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        filename_param(&self.content_disposition)
    }
}

impl fmt::Debug for Download {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Download")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .field("content_disposition", &self.content_disposition)
            .finish_non_exhaustive()
    }
}

fn header_string(headers: &HeaderMap, name: &HeaderName) -> String {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

fn content_length(headers: &HeaderMap) -> u64 {
    header_string(headers, &CONTENT_LENGTH)
        .trim()
        .parse()
        .unwrap_or(0)
}

fn filename_param(disposition: &str) -> Option<&str> {
    disposition
        .split(';')
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("filename")
                .then(|| value.trim().trim_matches('"'))
        })
        .filter(|name| !name.is_empty())
}
