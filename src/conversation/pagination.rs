//! Pagination info attached to list responses.

use crate::codec::{serde_via_json_model, DecodeError, JsonModel, ObjectReader, ObjectWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// URL that fetches the current page again.
    pub refresh_url: String,
    pub next_url: Option<String>,
    /// Total number of objects satisfying the request.
    pub total: Option<i64>,
    /// Total number of objects matching a search, if one was given.
    pub matched: Option<i64>,
}

impl Pagination {
    pub fn new(refresh_url: impl Into<String>) -> Self {
        Self {
            refresh_url: refresh_url.into(),
            next_url: None,
            total: None,
            matched: None,
        }
    }

    pub fn with_next_url(mut self, next_url: impl Into<String>) -> Self {
        self.next_url = Some(next_url.into());
        self
    }

    pub fn with_total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_matched(mut self, matched: i64) -> Self {
        self.matched = Some(matched);
        self
    }

    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }
}

impl JsonModel for Pagination {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            refresh_url: fields.string("refresh_url")?,
            next_url: fields.opt_string("next_url"),
            total: fields.opt_integer("total"),
            matched: fields.opt_integer("matched"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("refresh_url", self.refresh_url.as_str())
            .put_opt("next_url", &self.next_url)
            .put_opt("total", &self.total)
            .put_opt("matched", &self.matched);
    }
}

serde_via_json_model!(Pagination);
