#![no_std]

use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, LedgerEvent, Organ, RecipientDetails, TransferRequest};

// -----------------------------------------------------------------------
// Admin
// -----------------------------------------------------------------------

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
}

pub fn load_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

// -----------------------------------------------------------------------
// Counters
// -----------------------------------------------------------------------

// Counters hand out the current value and bump afterwards, so the first
// assigned id is always 0.

pub fn next_organ_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::OrganCounter)
        .unwrap_or(0);
    env.storage()
        .persistent()
        .set(&DataKey::OrganCounter, &(id + 1));
    id
}

pub fn next_request_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::RequestCounter)
        .unwrap_or(0);
    env.storage()
        .persistent()
        .set(&DataKey::RequestCounter, &(id + 1));
    id
}

pub fn next_ledger_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::LedgerCounter)
        .unwrap_or(0);
    env.storage()
        .persistent()
        .set(&DataKey::LedgerCounter, &(id + 1));
    id
}

pub fn ledger_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::LedgerCounter)
        .unwrap_or(0)
}

// -----------------------------------------------------------------------
// Organs
// -----------------------------------------------------------------------

pub fn save_organ(env: &Env, organ: &Organ) {
    env.storage()
        .persistent()
        .set(&DataKey::Organ(organ.id), organ);
}

pub fn load_organ(env: &Env, id: u64) -> Option<Organ> {
    env.storage().persistent().get(&DataKey::Organ(id))
}

pub fn add_organ_id(env: &Env, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::OrganIds)
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&DataKey::OrganIds, &ids);
}

pub fn organ_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::OrganIds)
        .unwrap_or(Vec::new(env))
}

// Kept as a separate entry rather than an optional field on Organ, so the
// organ record round-trips through the generated conversions.

pub fn save_recipient_details(env: &Env, organ_id: u64, details: &RecipientDetails) {
    env.storage()
        .persistent()
        .set(&DataKey::RecipientDetails(organ_id), details);
}

pub fn load_recipient_details(env: &Env, organ_id: u64) -> Option<RecipientDetails> {
    env.storage()
        .persistent()
        .get(&DataKey::RecipientDetails(organ_id))
}

// -----------------------------------------------------------------------
// Transfer requests
// -----------------------------------------------------------------------

pub fn save_request(env: &Env, request: &TransferRequest) {
    env.storage()
        .persistent()
        .set(&DataKey::Request(request.request_id), request);
}

pub fn load_request(env: &Env, id: u64) -> Option<TransferRequest> {
    env.storage().persistent().get(&DataKey::Request(id))
}

pub fn add_request_id(env: &Env, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::RequestIds)
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&DataKey::RequestIds, &ids);
}

pub fn request_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::RequestIds)
        .unwrap_or(Vec::new(env))
}

// -----------------------------------------------------------------------
// Ledger
// -----------------------------------------------------------------------

pub fn save_ledger_event(env: &Env, event: &LedgerEvent) {
    env.storage()
        .persistent()
        .set(&DataKey::Ledger(event.id), event);
}

pub fn load_ledger_event(env: &Env, id: u64) -> Option<LedgerEvent> {
    env.storage().persistent().get(&DataKey::Ledger(id))
}

// -----------------------------------------------------------------------
// Bulk reset
// -----------------------------------------------------------------------

/// Remove every organ, request and ledger entry and restart the counters.
/// The admin entry survives.
pub fn clear_all(env: &Env) {
    for id in organ_ids(env).iter() {
        env.storage().persistent().remove(&DataKey::Organ(id));
        env.storage()
            .persistent()
            .remove(&DataKey::RecipientDetails(id));
    }
    for id in request_ids(env).iter() {
        env.storage().persistent().remove(&DataKey::Request(id));
    }
    for id in 0..ledger_count(env) {
        env.storage().persistent().remove(&DataKey::Ledger(id));
    }
    env.storage().persistent().remove(&DataKey::OrganIds);
    env.storage().persistent().remove(&DataKey::RequestIds);
    env.storage().persistent().remove(&DataKey::OrganCounter);
    env.storage().persistent().remove(&DataKey::RequestCounter);
    env.storage().persistent().remove(&DataKey::LedgerCounter);
}
