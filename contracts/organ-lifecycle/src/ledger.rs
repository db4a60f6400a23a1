#![no_std]

use soroban_sdk::{Bytes, BytesN, Env, String};

use crate::storage;
use crate::types::{LedgerEvent, LedgerEventKind};

fn kind_tag(kind: &LedgerEventKind) -> u8 {
    match kind {
        LedgerEventKind::OrganRegistered => 0,
        LedgerEventKind::OrganTransferred => 1,
        LedgerEventKind::OrganArrived => 2,
        LedgerEventKind::OrganTransplanted => 3,
        LedgerEventKind::TransferRequested => 4,
        LedgerEventKind::RequestResolved => 5,
    }
}

/// Synthetic transaction reference for entries not mirrored to an external
/// ledger: sha256 over the event kind, organ id and sequence number.
fn synthetic_tx_ref(env: &Env, kind: &LedgerEventKind, organ_id: u64, seq: u64) -> BytesN<32> {
    let mut payload = Bytes::new(env);
    payload.push_back(kind_tag(kind));
    payload.extend_from_array(&organ_id.to_be_bytes());
    payload.extend_from_array(&seq.to_be_bytes());
    env.crypto().sha256(&payload).to_bytes()
}

/// Append one audit entry for a mutating operation.
pub fn record(env: &Env, kind: LedgerEventKind, organ_id: u64, details: String) {
    let id = storage::next_ledger_id(env);
    let tx_ref = synthetic_tx_ref(env, &kind, organ_id, id);

    let event = LedgerEvent {
        id,
        kind,
        organ_id,
        timestamp: env.ledger().timestamp(),
        tx_ref,
        details,
    };

    storage::save_ledger_event(env, &event);
}
