//! Lexer interface and registry
//!
//! This module defines the `Lexer` trait and `LexerRegistry` so assembled
//! template lexers can be registered under stable names and requested by
//! name at runtime. Registration is a boundary concern: nothing in the
//! tokenizing machinery depends on this module.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use crate::templex::token::Token;

/// Errors that can occur at the lexing boundary.
///
/// Tokenization itself never fails; these cover name lookups and delimiter
/// table configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    LexerNotFound(String),
    InvalidConfig(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::LexerNotFound(name) => write!(f, "Lexer '{}' not found", name),
            LexError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for LexError {}

/// Trait for registrable lexer implementations.
pub trait Lexer: Send + Sync {
    /// Return the name this lexer registers under
    fn name(&self) -> &str;

    /// Tokenize a whole document into classified spans
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError>;
}

/// Registry for lexer implementations.
///
/// Holds the available lexers and resolves them by name. A process-global
/// instance is available through [LexerRegistry::global].
#[derive(Clone, Default)]
pub struct LexerRegistry {
    lexers: HashMap<String, Arc<dyn Lexer>>,
}

impl LexerRegistry {
    pub fn new() -> LexerRegistry {
        LexerRegistry {
            lexers: HashMap::new(),
        }
    }

    /// Register a lexer under its own name
    pub fn register(&mut self, lexer: Arc<dyn Lexer>) {
        self.lexers.insert(lexer.name().to_string(), lexer);
    }

    /// Get a registered lexer by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Lexer>> {
        self.lexers.get(name).cloned()
    }

    /// Check if a lexer is registered
    pub fn has(&self, name: &str) -> bool {
        self.lexers.contains_key(name)
    }

    /// Get the sorted list of available lexer names
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<_> = self.lexers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Tokenize using a registered lexer
    pub fn tokenize(&self, name: &str, source: &str) -> Result<Vec<Token>, LexError> {
        let lexer = self
            .get(name)
            .ok_or_else(|| LexError::LexerNotFound(name.to_string()))?;
        lexer.tokenize(source)
    }

    /// Get the global lexer registry
    pub fn global() -> &'static Mutex<LexerRegistry> {
        static REGISTRY: OnceLock<Mutex<LexerRegistry>> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(LexerRegistry::new()))
    }

    /// Initialize the global registry with the built-in template lexers
    pub fn init_defaults() {
        use crate::templex::lexers::composite::CompositeLexer;
        use crate::templex::lexers::delimiters::DelimiterSet;
        use crate::templex::lexers::fallback::{GenericCode, GenericMarkup};

        let mut registry = Self::global().lock().expect("lexer registry poisoned");
        if registry.available().is_empty() {
            registry.register(Arc::new(CompositeLexer::new(
                "template",
                DelimiterSet::curly(),
                Arc::new(GenericMarkup),
                Arc::new(GenericCode),
            )));
            registry.register(Arc::new(CompositeLexer::new(
                "erb",
                DelimiterSet::angle(),
                Arc::new(GenericMarkup),
                Arc::new(GenericCode),
            )));
        }
    }
}
