use pokedex_core_types::RequestId;
use thiserror::Error;

/// Result type alias for domain validation
pub type Result<T> = std::result::Result<T, PokedexError>;

/// Result type alias for operations that cross a storage boundary
pub type ExResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    UnknownType,
    StatOutOfRange,
    DuplicateId,

    // Lookup
    NotFound,

    // Integration/IO
    Config,
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownType => "ERR_UNKNOWN_TYPE",
            ExErrorKind::StatOutOfRange => "ERR_STAT_OUT_OF_RANGE",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind is a storage-side failure.
    ///
    /// Storage failures are reported to end users as one generic message;
    /// the detail only goes to the logs.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Persistence | ExErrorKind::Io | ExErrorKind::Internal
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// needed to debug a failed request from its log line.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for Pokedex records and requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PokedexError {
    /// Identifier in a detail request is not a positive integer
    #[error("Invalid pokemon ID: {raw:?}")]
    InvalidPokemonId { raw: String },

    /// No record with this identifier exists
    #[error("Pokemon not found: {pokemon_id}")]
    PokemonNotFound { pokemon_id: u32 },

    /// Record name is empty or whitespace-only
    #[error("Pokemon {pokemon_id} has an empty name")]
    EmptyName { pokemon_id: u32 },

    /// Type name outside the closed set of Pokemon types
    #[error("Pokemon {pokemon_id} has unknown type: {type_name:?}")]
    UnknownType { pokemon_id: u32, type_name: String },

    /// Stat value outside 0..=255
    #[error("Pokemon {pokemon_id} has {stat} = {value}, expected 0..=255")]
    StatOutOfRange {
        pokemon_id: u32,
        stat: String,
        value: u32,
    },

    /// Two records share the same identifier
    #[error("Duplicate pokemon ID: {pokemon_id}")]
    DuplicateId { pokemon_id: u32 },
}

impl From<PokedexError> for ExError {
    fn from(err: PokedexError) -> Self {
        let message = err.to_string();
        match err {
            PokedexError::InvalidPokemonId { raw } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(raw)
                .with_message(message),

            PokedexError::PokemonNotFound { pokemon_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(pokemon_id.to_string())
                .with_message(message),

            PokedexError::EmptyName { pokemon_id } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(pokemon_id.to_string())
                .with_message(message),

            PokedexError::UnknownType { pokemon_id, .. } => {
                ExError::new(ExErrorKind::UnknownType)
                    .with_entity_id(pokemon_id.to_string())
                    .with_message(message)
            }

            PokedexError::StatOutOfRange { pokemon_id, .. } => {
                ExError::new(ExErrorKind::StatOutOfRange)
                    .with_entity_id(pokemon_id.to_string())
                    .with_message(message)
            }

            PokedexError::DuplicateId { pokemon_id } => ExError::new(ExErrorKind::DuplicateId)
                .with_entity_id(pokemon_id.to_string())
                .with_message(message),
        }
    }
}
