#![no_std]

use soroban_sdk::{contracterror, contracttype, BytesN, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    OrganNotFound = 4,
    RequestNotFound = 5,
    InvalidStateTransition = 6,
    OrganNotAvailable = 7,
    InvalidDecision = 8,
    RequestAlreadyResolved = 9,
    MissingRecipientField = 10,
    RecipientDetailsNotFound = 11,
}

/// Lifecycle status of a donated organ.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OrganStatus {
    /// Registered and available at its current custodial hospital.
    Donated,
    /// In transit to a destination hospital.
    Transferred,
    /// A hospital has a pending transfer request against it.
    Requested,
    /// Transplanted into a recipient. Terminal.
    Transplanted,
}

/// Core organ record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Organ {
    pub id: u64,
    pub organ_type: String,
    pub blood_type: String,
    pub status: OrganStatus,
    pub donor: String,
    /// Current custodial hospital. None only before the first transfer.
    pub hospital: Option<String>,
    /// Set at transplant time, never earlier.
    pub recipient: Option<String>,
    pub created_at: u64,
}

/// Recipient details attached at transplant time.
/// `name`, `hospital` and `surgeon` are required; the rest is informational.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipientDetails {
    pub name: String,
    pub age: u32,
    pub blood_type: String,
    pub hospital: String,
    pub surgeon: String,
    pub transplant_date: u64,
    pub notes: String,
}

/// Status of a transfer request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A hospital's request to take custody of an organ.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferRequest {
    pub request_id: u64,
    pub organ_id: u64,
    pub requesting_hospital: String,
    pub owning_hospital: String,
    pub status: RequestStatus,
    pub created_at: u64,
}

/// Type tag for an audit ledger entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerEventKind {
    OrganRegistered,
    OrganTransferred,
    OrganArrived,
    OrganTransplanted,
    TransferRequested,
    RequestResolved,
}

/// Append-only audit log entry. Every mutating operation writes exactly one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerEvent {
    pub id: u64,
    pub kind: LedgerEventKind,
    pub organ_id: u64,
    pub timestamp: u64,
    /// Transaction reference. Synthetic when no external ledger is attached.
    pub tx_ref: BytesN<32>,
    pub details: String,
}

/// Aggregate counts derived from the organ collection.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Analytics {
    pub total_organs: u32,
    pub donated: u32,
    pub requested: u32,
    pub transferred: u32,
    pub transplanted: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Contract admin, set once at initialization.
    Admin,
    /// Auto-increment counter for organ ids.
    OrganCounter,
    /// Auto-increment counter for request ids.
    RequestCounter,
    /// Auto-increment counter for ledger entry ids.
    LedgerCounter,
    /// organ id -> Organ
    Organ(u64),
    /// organ id -> RecipientDetails, present only once transplanted.
    RecipientDetails(u64),
    /// All organ ids in insertion order.
    OrganIds,
    /// request id -> TransferRequest
    Request(u64),
    /// All request ids in insertion order.
    RequestIds,
    /// ledger entry id -> LedgerEvent
    Ledger(u64),
}
