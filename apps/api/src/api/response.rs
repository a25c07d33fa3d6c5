use serde::{Serialize, Serializer};

/// Numeric result codes carried in every response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    ValidationError,
    AuthError,
    ForbiddenError,
    NotFoundError,
    LimiterError,
    OtpLimiterError,
    CustomRecovery,
    InternalError,
}

impl ResultCode {
    /// Wire value of the code
    pub fn value(self) -> i32 {
        match self {
            ResultCode::Success => 0,
            ResultCode::ValidationError => 40001,
            ResultCode::AuthError => 40101,
            ResultCode::ForbiddenError => 40301,
            ResultCode::NotFoundError => 40401,
            ResultCode::LimiterError => 42901,
            ResultCode::OtpLimiterError => 42902,
            ResultCode::CustomRecovery => 50001,
            ResultCode::InternalError => 50002,
        }
    }
}

impl Serialize for ResultCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value())
    }
}

/// A single problem found while binding a request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: &'static str,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<&serde_json::Error> for ValidationIssue {
    fn from(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match err.classify() {
            Category::Io => "io",
            Category::Syntax => "syntax",
            Category::Data => "data",
            Category::Eof => "eof",
        };

        Self {
            kind,
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Error payload of a failed response
///
/// Callback failures carry the error message, bind failures carry the list
/// of validation issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

/// Uniform JSON envelope wrapping every adapter response
///
/// ```text
/// { "data": <payload|null>, "success": bool, "code": int, "error": <detail>? }
/// ```
#[derive(Debug, Serialize)]
pub struct BaseResponse<T> {
    pub data: Option<T>,
    pub success: bool,
    pub code: ResultCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl<T> BaseResponse<T> {
    /// Envelope without error details
    pub fn new(data: Option<T>, success: bool, code: ResultCode) -> Self {
        Self {
            data,
            success,
            code,
            error: None,
        }
    }

    /// Successful envelope around a payload
    pub fn ok(data: T) -> Self {
        Self::new(Some(data), true, ResultCode::Success)
    }

    /// Failed envelope carrying an error message
    pub fn with_error(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            code,
            error: Some(ErrorDetail::Message(message.into())),
        }
    }

    /// Failed envelope carrying body validation issues
    pub fn with_validation_error(code: ResultCode, issues: Vec<ValidationIssue>) -> Self {
        Self {
            data: None,
            success: false,
            code,
            error: Some(ErrorDetail::Validation(issues)),
        }
    }
}
