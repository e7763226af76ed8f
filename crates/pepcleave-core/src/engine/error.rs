use thiserror::Error;

use crate::core::chemistry::ConstantError;
use crate::core::protease::ProteaseError;
use crate::core::residue::ParseSequenceError;
use crate::engine::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid protein sequence: {source}")]
    Sequence {
        #[from]
        source: ParseSequenceError,
    },

    #[error("protease rule failed: {source}")]
    Protease {
        #[from]
        source: ProteaseError,
    },

    #[error("biochemical constant lookup failed: {source}")]
    Constant {
        #[from]
        source: ConstantError,
    },

    #[error("invalid digest configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("protein sequence must not be empty")]
    EmptySequence,
}
