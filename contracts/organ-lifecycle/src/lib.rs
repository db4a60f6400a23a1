#![no_std]

mod ledger;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};
use storage::*;
use types::*;

/// Owning hospital recorded on a request when the organ has no custodian yet.
const UNASSIGNED_HOSPITAL: &str = "Central Registry";

#[contract]
pub struct OrganLifecycleContract;

#[contractimpl]
impl OrganLifecycleContract {
    /// Set the contract admin. May only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();

        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        save_admin(&env, &admin);

        env.events()
            .publish((Symbol::new(&env, "initialized"),), admin);

        Ok(())
    }

    /// Register a newly donated organ. Returns the assigned organ id.
    pub fn register_organ(
        env: Env,
        donor: String,
        organ_type: String,
        blood_type: String,
        hospital: Option<String>,
    ) -> Result<u64, Error> {
        let id = next_organ_id(&env);

        let organ = Organ {
            id,
            organ_type: organ_type.clone(),
            blood_type,
            status: OrganStatus::Donated,
            donor: donor.clone(),
            hospital,
            recipient: None,
            created_at: env.ledger().timestamp(),
        };

        save_organ(&env, &organ);
        add_organ_id(&env, id);

        ledger::record(&env, LedgerEventKind::OrganRegistered, id, organ_type);

        env.events()
            .publish((Symbol::new(&env, "organ_registered"),), (id, donor));

        Ok(id)
    }

    /// Move an organ toward a destination hospital, or mark it as arrived.
    ///
    /// Re-invoking with the organ's current hospital while it is in transit
    /// is the arrival case: the organ becomes available again at that
    /// hospital rather than starting a new transit leg.
    pub fn transfer_organ(env: Env, organ_id: u64, hospital: String) -> Result<(), Error> {
        let mut organ = load_organ(&env, organ_id).ok_or(Error::OrganNotFound)?;

        match organ.status {
            // Accepting a request routes through this same transition.
            OrganStatus::Donated | OrganStatus::Requested => {
                organ.status = OrganStatus::Transferred;
                organ.hospital = Some(hospital.clone());
                save_organ(&env, &organ);

                ledger::record(
                    &env,
                    LedgerEventKind::OrganTransferred,
                    organ_id,
                    hospital.clone(),
                );
                env.events()
                    .publish((Symbol::new(&env, "organ_transferred"),), (organ_id, hospital));
            }
            OrganStatus::Transferred => {
                let is_arrival = organ.hospital == Some(hospital.clone());
                if !is_arrival {
                    // Diverting an in-transit organ is not a legal transition.
                    return Err(Error::InvalidStateTransition);
                }
                organ.status = OrganStatus::Donated;
                save_organ(&env, &organ);

                ledger::record(
                    &env,
                    LedgerEventKind::OrganArrived,
                    organ_id,
                    hospital.clone(),
                );
                env.events()
                    .publish((Symbol::new(&env, "organ_arrived"),), (organ_id, hospital));
            }
            OrganStatus::Transplanted => return Err(Error::InvalidStateTransition),
        }

        Ok(())
    }

    /// Transplant an in-transit organ into a recipient.
    ///
    /// Only legal from `Transferred`. Recipient name, hospital and surgeon
    /// are required.
    pub fn transplant_organ(
        env: Env,
        organ_id: u64,
        recipient: String,
        details: RecipientDetails,
    ) -> Result<(), Error> {
        let mut organ = load_organ(&env, organ_id).ok_or(Error::OrganNotFound)?;

        if organ.status != OrganStatus::Transferred {
            return Err(Error::InvalidStateTransition);
        }

        if details.name.len() == 0 || details.hospital.len() == 0 || details.surgeon.len() == 0 {
            return Err(Error::MissingRecipientField);
        }

        organ.status = OrganStatus::Transplanted;
        organ.recipient = Some(recipient.clone());
        save_organ(&env, &organ);
        save_recipient_details(&env, organ_id, &details);

        ledger::record(
            &env,
            LedgerEventKind::OrganTransplanted,
            organ_id,
            recipient.clone(),
        );
        env.events()
            .publish((Symbol::new(&env, "organ_transplanted"),), (organ_id, recipient));

        Ok(())
    }

    /// Create a pending transfer request against an available organ.
    ///
    /// Only organs in `Donated` are eligible; flipping the organ to
    /// `Requested` here is what keeps at most one pending request per organ.
    pub fn create_request(
        env: Env,
        organ_id: u64,
        requesting_hospital: String,
        owning_hospital: Option<String>,
    ) -> Result<u64, Error> {
        let mut organ = load_organ(&env, organ_id).ok_or(Error::OrganNotFound)?;

        if organ.status != OrganStatus::Donated {
            return Err(Error::OrganNotAvailable);
        }

        let owning = match owning_hospital {
            Some(h) => h,
            None => match organ.hospital.clone() {
                Some(h) => h,
                None => String::from_str(&env, UNASSIGNED_HOSPITAL),
            },
        };

        let request_id = next_request_id(&env);
        let request = TransferRequest {
            request_id,
            organ_id,
            requesting_hospital: requesting_hospital.clone(),
            owning_hospital: owning,
            status: RequestStatus::Pending,
            created_at: env.ledger().timestamp(),
        };

        save_request(&env, &request);
        add_request_id(&env, request_id);

        organ.status = OrganStatus::Requested;
        save_organ(&env, &organ);

        ledger::record(
            &env,
            LedgerEventKind::TransferRequested,
            organ_id,
            requesting_hospital.clone(),
        );
        env.events().publish(
            (Symbol::new(&env, "request_created"),),
            (request_id, organ_id, requesting_hospital),
        );

        Ok(request_id)
    }

    /// Resolve a pending transfer request.
    ///
    /// Valid decisions: `accepted`, `rejected`. A request may be resolved
    /// once; re-resolution is rejected rather than re-applied.
    pub fn resolve_request(env: Env, request_id: u64, decision: Symbol) -> Result<(), Error> {
        let mut request = load_request(&env, request_id).ok_or(Error::RequestNotFound)?;

        let accepted = Symbol::new(&env, "accepted");
        let rejected = Symbol::new(&env, "rejected");
        if decision != accepted && decision != rejected {
            return Err(Error::InvalidDecision);
        }

        if request.status != RequestStatus::Pending {
            return Err(Error::RequestAlreadyResolved);
        }

        let mut organ = load_organ(&env, request.organ_id).ok_or(Error::OrganNotFound)?;

        // The organ may have moved on through a direct transfer since the
        // request was filed; a stale request must not rewrite its state.
        if organ.status != OrganStatus::Requested {
            return Err(Error::InvalidStateTransition);
        }

        if decision == accepted {
            request.status = RequestStatus::Accepted;
            organ.status = OrganStatus::Transferred;
            organ.hospital = Some(request.requesting_hospital.clone());
        } else {
            request.status = RequestStatus::Rejected;
            // Custody does not move on rejection.
            organ.status = OrganStatus::Donated;
        }

        save_request(&env, &request);
        save_organ(&env, &organ);

        ledger::record(
            &env,
            LedgerEventKind::RequestResolved,
            request.organ_id,
            request.requesting_hospital.clone(),
        );
        env.events().publish(
            (Symbol::new(&env, "request_resolved"),),
            (request_id, request.organ_id, decision),
        );

        Ok(())
    }

    /// Fetch a single organ record.
    pub fn get_organ(env: Env, organ_id: u64) -> Result<Organ, Error> {
        load_organ(&env, organ_id).ok_or(Error::OrganNotFound)
    }

    /// Recipient details recorded at transplant time.
    pub fn get_recipient_details(env: Env, organ_id: u64) -> Result<RecipientDetails, Error> {
        load_organ(&env, organ_id).ok_or(Error::OrganNotFound)?;
        load_recipient_details(&env, organ_id).ok_or(Error::RecipientDetailsNotFound)
    }

    /// All organ records in insertion order, optionally filtered by status.
    pub fn list_organs(env: Env, status: Option<OrganStatus>) -> Vec<Organ> {
        let mut organs = Vec::new(&env);
        for id in organ_ids(&env).iter() {
            if let Some(organ) = load_organ(&env, id) {
                let keep = match &status {
                    Some(wanted) => organ.status == *wanted,
                    None => true,
                };
                if keep {
                    organs.push_back(organ);
                }
            }
        }
        organs
    }

    /// All transfer requests, newest first.
    pub fn list_requests(env: Env) -> Vec<TransferRequest> {
        let ids = request_ids(&env);
        let mut requests = Vec::new(&env);
        for i in (0..ids.len()).rev() {
            let id = ids.get(i).unwrap();
            if let Some(request) = load_request(&env, id) {
                requests.push_back(request);
            }
        }
        requests
    }

    /// All ledger entries, newest first.
    pub fn list_ledger(env: Env) -> Vec<LedgerEvent> {
        let mut events = Vec::new(&env);
        for id in (0..ledger_count(&env)).rev() {
            if let Some(event) = load_ledger_event(&env, id) {
                events.push_back(event);
            }
        }
        events
    }

    /// Aggregate counts over the organ collection. Derived, nothing stored.
    pub fn get_analytics(env: Env) -> Analytics {
        let mut analytics = Analytics {
            total_organs: 0,
            donated: 0,
            requested: 0,
            transferred: 0,
            transplanted: 0,
        };

        for id in organ_ids(&env).iter() {
            if let Some(organ) = load_organ(&env, id) {
                analytics.total_organs += 1;
                match organ.status {
                    OrganStatus::Donated => analytics.donated += 1,
                    OrganStatus::Requested => analytics.requested += 1,
                    OrganStatus::Transferred => analytics.transferred += 1,
                    OrganStatus::Transplanted => analytics.transplanted += 1,
                }
            }
        }

        analytics
    }

    /// Clear all organs, requests and ledger entries. Admin only.
    /// Intended for test and demo resets, not normal operation.
    pub fn reset_all(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();

        let stored = load_admin(&env).ok_or(Error::NotInitialized)?;
        if stored != admin {
            return Err(Error::Unauthorized);
        }

        clear_all(&env);

        env.events()
            .publish((Symbol::new(&env, "state_reset"),), admin);

        Ok(())
    }
}
