//! Token command handlers.

mod accept_and_mint;

pub use accept_and_mint::{
    AcceptAndMintCommand, AcceptAndMintHandler, AcceptAndMintResult, MAX_MINT_ATTEMPTS,
};
