use crate::error::HolocronError;
use async_graphql::{Context, ErrorExtensions, Value};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors surfaced to GraphQL clients, each carrying an HTTP-style
/// `code`/`status` pair in the error extensions.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// "Person {..} does not exist" style messages that echo the filter.
    #[error("{subject} {filter} {verb} exist")]
    NoneMatching {
        subject: &'static str,
        verb: &'static str,
        filter: WhereEcho,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(HolocronError),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) | ApiError::NoneMatching { .. } => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound(_) | ApiError::NoneMatching { .. } => 404,
            ApiError::BadRequest(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }
}

impl ApiError {
    /// "Name must be unique" / "Names must be unique" style messages.
    pub fn unique(field: &str, many: bool) -> Self {
        let mut chars = field.chars();
        let mut label: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        if many {
            label.push('s');
        }
        ApiError::BadRequest(format!("{} must be unique", label))
    }

    /// Classifies a failed write. Unique-index collisions and updates that
    /// matched nothing are the caller's fault.
    pub fn from_write(err: HolocronError, many: bool) -> Self {
        match err {
            HolocronError::ConstraintViolation { field } => Self::unique(&field, many),
            HolocronError::NotFoundForUpdate => ApiError::BadRequest(err.to_string()),
            other => other.into(),
        }
    }
}

impl ApiError {
    pub fn missing<T: Serialize>(subject: &'static str, filter: &T) -> Self {
        ApiError::NoneMatching {
            subject,
            verb: "does not",
            filter: WhereEcho::of(Some(filter)),
        }
    }

    pub fn none_match<T: Serialize>(subject: &'static str, filter: Option<&T>) -> Self {
        ApiError::NoneMatching {
            subject,
            verb: "do not",
            filter: WhereEcho::of(filter),
        }
    }

    /// Echoes the `where` argument exactly as the client sent it.
    pub fn with_request_where(self, ctx: &Context<'_>) -> Self {
        match self {
            ApiError::NoneMatching { subject, verb, .. } => ApiError::NoneMatching {
                subject,
                verb,
                filter: WhereEcho::from_context(ctx),
            },
            other => other,
        }
    }
}

/// A `where` argument rendered as compact JSON for NotFound messages.
/// A missing one renders as `{}`.
#[derive(Debug, Clone, Default)]
pub struct WhereEcho(Option<Value>);

impl WhereEcho {
    /// The raw `where` argument of the field being resolved, keys in
    /// request order.
    pub fn from_context(ctx: &Context<'_>) -> Self {
        let value = ctx.field().arguments().ok().and_then(|arguments| {
            arguments
                .into_iter()
                .find(|(name, _)| name.as_str() == "where")
                .map(|(_, value)| value)
        });
        Self(value)
    }

    /// A typed filter, keys in declaration order.
    pub fn of<T: Serialize>(filter: Option<&T>) -> Self {
        Self(filter.and_then(|f| async_graphql::to_value(f).ok()))
    }
}

impl From<Value> for WhereEcho {
    fn from(value: Value) -> Self {
        Self(Some(value))
    }
}

impl fmt::Display for WhereEcho {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None | Some(Value::Null) => f.write_str("{}"),
            Some(value) => f.write_str(&render_json(value)),
        }
    }
}

fn render_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => quoted(s),
        Value::Boolean(b) => b.to_string(),
        Value::Binary(bytes) => quoted(&String::from_utf8_lossy(bytes)),
        Value::Enum(name) => quoted(name.as_str()),
        Value::List(items) => {
            let items: Vec<_> = items.iter().map(render_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(fields) => {
            let fields: Vec<_> = fields
                .iter()
                .map(|(key, value)| format!("{}:{}", quoted(key.as_str()), render_json(value)))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
    }
}

fn quoted(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Whole floats print without a fraction (`10`, not `10.0`), the way
/// clients serialize JSON numbers.
fn render_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => {
            let rendered = n.to_string();
            if rendered.contains('e') && !rendered.contains("e-") {
                rendered.replacen('e', "e+", 1)
            } else {
                rendered
            }
        }
    }
}

impl From<HolocronError> for ApiError {
    fn from(err: HolocronError) -> Self {
        match err {
            HolocronError::Validation(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        if let ApiError::Internal(err) = self {
            tracing::error!(error = %err, "Request failed");
        }
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            e.set("status", i32::from(self.status()));
        })
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
