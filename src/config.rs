/// A fixed code/message pair reported for failures that carry no remote error of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub code: i64,
    pub message: &'static str,
}

pub const CONNECTION_ERROR: ErrorDescriptor = ErrorDescriptor {
    code: 889,
    message: "Connection Error Occurred.",
};

pub const UNEXPECTED_ERROR: ErrorDescriptor = ErrorDescriptor {
    code: 888,
    message: "Unexpected Error Occurred.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCatalog {
    pub connection: ErrorDescriptor,
    pub unexpected: ErrorDescriptor,
}

pub const DEFAULT_ERROR_CATALOG: ErrorCatalog = ErrorCatalog {
    connection: CONNECTION_ERROR,
    unexpected: UNEXPECTED_ERROR,
};

impl Default for ErrorCatalog {
    fn default() -> Self {
        DEFAULT_ERROR_CATALOG
    }
}
