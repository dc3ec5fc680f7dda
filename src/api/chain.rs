use actix_web::{HttpResponse, Responder, get, web};
use log::{info, warn};

use super::models::{AppState, ChainResponse, MineResponse, ValidateResponse};
use crate::error::LedgerError;

pub const MINED_MESSAGE: &str = "Congratulations! You just mined a block!";
pub const VALID_MESSAGE: &str = "All good. The entire blockchain is valid.";
pub const INVALID_MESSAGE: &str = "The blockchain is not valid!";

/// Mine a new block on top of the current tip.
/// The ledger stays locked for the whole read-solve-append sequence.
#[get("/mine_block/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    match ledger.mine_block(state.max_puzzle_attempts) {
        Ok(block) => HttpResponse::Ok().json(MineResponse {
            message: MINED_MESSAGE,
            index: block.index,
            timestamp: block.timestamp.clone(),
            proof: block.proof,
            previous_hash: block.previous_hash.clone(),
        }),
        Err(e @ LedgerError::PuzzleUnsolved { .. }) => {
            warn!("MINER - {}", e);
            HttpResponse::ServiceUnavailable().body(e.to_string())
        }
    }
}

/// Get the full chain and its length.
#[get("/get_chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainResponse {
        chain: ledger.full_chain(),
        length: ledger.len(),
    })
}

/// Validate the whole chain.
#[get("/is_valid/")]
pub async fn is_valid(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let valid = ledger.is_valid();
    info!("VALIDATE - length={} valid={}", ledger.len(), valid);
    HttpResponse::Ok().json(ValidateResponse {
        valid,
        message: if valid { VALID_MESSAGE } else { INVALID_MESSAGE },
    })
}

/// Get the current tip.
#[get("/latest_block/")]
pub async fn latest_block(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ledger.latest_block())
}
