//! System Clock and Id Sources

use chrono::{DateTime, Utc};

use crate::domain::service::{Clock, IdGenerator};
use crate::domain::value_object::user_id::UserId;

/// Wall clock backed by the OS
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Random positive ids drawn from UUIDv4 entropy
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> UserId {
        UserId::generate()
    }
}
