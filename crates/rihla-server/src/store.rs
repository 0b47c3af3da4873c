use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::AppError;
use crate::models::{Booking, Experience, User};

/// In-memory tables behind a single coarse lock. Every read or write goes
/// through one of the operations below while holding the lock, so each
/// operation is atomic; there are no cross-operation transactions. All
/// state is lost on restart.
#[derive(Default)]
pub struct Store {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    /// Users keyed by email.
    users: HashMap<String, User>,
    /// Experiences keyed by generated id.
    experiences: HashMap<String, Experience>,
    /// Bookings keyed by generated id.
    bookings: HashMap<String, Booking>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        // A poisoned lock means a handler panicked mid-operation; the maps
        // themselves are still consistent, so keep serving.
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Check-then-insert as one critical section: a second registration
    /// with the same email fails instead of silently replacing the first.
    pub fn insert_user(&self, user: User) -> Result<(), AppError> {
        let mut t = self.tables();
        if t.users.contains_key(&user.email) {
            return Err(AppError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }
        t.users.insert(user.email.clone(), user);
        Ok(())
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.tables().users.get(email).cloned()
    }

    /// Linear scan over the user table; emails key the map, not ids.
    pub fn find_user_by_id(&self, id: &str) -> Option<User> {
        self.tables().users.values().find(|u| u.id == id).cloned()
    }

    pub fn insert_experience(&self, experience: Experience) {
        let mut t = self.tables();
        t.experiences.insert(experience.id.clone(), experience);
    }

    /// All experiences, in unspecified order.
    pub fn all_experiences(&self) -> Vec<Experience> {
        self.tables().experiences.values().cloned().collect()
    }

    pub fn insert_booking(&self, booking: Booking) {
        let mut t = self.tables();
        t.bookings.insert(booking.id.clone(), booking);
    }

    /// Bookings whose `userId` equals the given id, in unspecified order.
    pub fn bookings_for_user(&self, user_id: &str) -> Vec<Booking> {
        self.tables()
            .bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }
}
